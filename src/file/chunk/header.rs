use alloc::vec::Vec;

use super::expect_tag;
use crate::{
    file::{FormatType, Header},
    reader::{FormatError, ReadResult, Reader, ReaderError},
    writer::{WriteResult, write_fixed_int},
};

/// Tag of the header chunk
pub const HEADER_TAG: &[u8; 4] = b"MThd";

/// Size of the header payload this crate reads and writes
pub const HEADER_LENGTH: u32 = 6;

#[doc = r#"
The header chunk exactly as it appears in the file.

```rust
# use smfio::prelude::*;
let bytes = [
    b'M', b'T', b'h', b'd', 0x00, 0x00, 0x00, 0x06,
    0x00, 0x01, 0x00, 0x01, 0x00, 0x60,
];
let chunk = RawHeaderChunk::read(&mut Reader::from_byte_slice(&bytes)).unwrap();
assert_eq!(chunk.format(), 1);
assert_eq!(chunk.track_count(), 1);
assert_eq!(chunk.division(), 96);
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawHeaderChunk {
    length: u32,
    format: u16,
    track_count: u16,
    division: u16,
}

impl RawHeaderChunk {
    /// Build the chunk for `header` followed by `track_count` tracks.
    pub const fn new(header: &Header, track_count: u16) -> Self {
        Self {
            length: HEADER_LENGTH,
            format: header.format() as u16,
            track_count,
            division: header.division(),
        }
    }

    /// Read the `MThd` chunk, skipping any bytes past the 6 byte payload.
    pub fn read(reader: &mut Reader<'_>) -> ReadResult<Self> {
        expect_tag(reader, HEADER_TAG, FormatError::HeaderTag)?;

        let length_position = reader.buffer_position();
        let length = reader.read_u32()?;
        if length < HEADER_LENGTH {
            return Err(ReaderError::new(
                length_position,
                FormatError::HeaderLength(length).into(),
            ));
        }

        let format = reader.read_u16()?;
        let track_count = reader.read_u16()?;
        let division = reader.read_u16()?;

        let extra = (length - HEADER_LENGTH) as usize;
        if extra > 0 {
            #[cfg(feature = "tracing")]
            tracing::warn!("Skipping {extra} bytes of header extension");
            reader.read_slice(extra)?;
        }

        Ok(Self {
            length,
            format,
            track_count,
            division,
        })
    }

    /// Write the chunk with a declared length of 6.
    pub fn write(&self, out: &mut Vec<u8>) -> WriteResult<()> {
        out.extend_from_slice(HEADER_TAG);
        write_fixed_int(out, 4, HEADER_LENGTH as u64)?;
        write_fixed_int(out, 2, self.format as u64)?;
        write_fixed_int(out, 2, self.track_count as u64)?;
        write_fixed_int(out, 2, self.division as u64)
    }

    /// The declared chunk length
    pub const fn length(&self) -> u32 {
        self.length
    }

    /// The raw format number
    pub const fn format(&self) -> u16 {
        self.format
    }

    /// The number of track chunks that follow
    pub const fn track_count(&self) -> u16 {
        self.track_count
    }

    /// The raw division
    pub const fn division(&self) -> u16 {
        self.division
    }

    /// Check the format number and produce the document header.
    pub fn to_header(&self) -> Result<Header, FormatError> {
        let format =
            FormatType::try_from(self.format).map_err(|e| FormatError::Format(e.number))?;
        Ok(Header::new(format, self.division).with_track_count(self.track_count))
    }
}

#[test]
fn header_with_extension_bytes() {
    use pretty_assertions::assert_eq;
    let bytes = [
        b'M', b'T', b'h', b'd', 0x00, 0x00, 0x00, 0x08, // length 8
        0x00, 0x00, 0x00, 0x01, 0x01, 0xE0, // format 0, 1 track, 480 tpqn
        0xAA, 0xBB, // extension
        b'M', // next chunk
    ];
    let mut reader = Reader::from_byte_slice(&bytes);
    let chunk = RawHeaderChunk::read(&mut reader).unwrap();
    assert_eq!(chunk.length(), 8);
    assert_eq!(chunk.division(), 480);
    assert_eq!(reader.buffer_position(), 16);

    let header = chunk.to_header().unwrap();
    assert_eq!(header.format(), FormatType::SingleMultiChannel);
    assert_eq!(header.track_count(), 1);
}

#[test]
fn header_length_too_short() {
    use crate::reader::ReaderErrorKind;
    use pretty_assertions::assert_eq;
    let bytes = [
        b'M', b'T', b'h', b'd', 0x00, 0x00, 0x00, 0x04, 0x00, 0x01, 0x00, 0x01,
    ];
    let err = RawHeaderChunk::read(&mut Reader::from_byte_slice(&bytes)).unwrap_err();
    assert_eq!(
        err.error_kind(),
        &ReaderErrorKind::Format(FormatError::HeaderLength(4))
    );
    assert_eq!(err.position(), 4);
}

#[test]
fn unknown_format_number() {
    use pretty_assertions::assert_eq;
    let bytes = [
        b'M', b'T', b'h', b'd', 0x00, 0x00, 0x00, 0x06, 0x00, 0x03, 0x00, 0x01, 0x00, 0x60,
    ];
    let chunk = RawHeaderChunk::read(&mut Reader::from_byte_slice(&bytes)).unwrap();
    assert_eq!(chunk.to_header(), Err(FormatError::Format(3)));
}
