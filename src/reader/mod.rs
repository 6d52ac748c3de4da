#![doc = r#"
Byte-level reading primitives.

A [`Reader`] walks an in-memory buffer and keeps track of its position so
that every error can say where it happened. All multi-byte integers in a
MIDI file are big-endian.
"#]

mod error;
pub use error::*;

/// Variable-length quantities are capped at four bytes (28 bits of payload).
pub const MAX_VARLEN_BYTES: usize = 4;

#[doc = r#"
A cursor over the bytes of a MIDI file.

# Example
```rust
# use smfio::reader::Reader;
let mut reader = Reader::from_byte_slice(&[0x81, 0x00, 0x00, 0x60]);
assert_eq!(reader.read_varlen().unwrap(), 0x80);
assert_eq!(reader.read_fixed_int(2).unwrap(), 0x60);
assert!(reader.is_empty());
```
"#]
#[derive(Debug, Clone)]
pub struct Reader<'slc> {
    data: &'slc [u8],
    position: usize,
}

impl<'slc> Reader<'slc> {
    /// Create a reader over a byte slice, starting at offset 0.
    pub const fn from_byte_slice(data: &'slc [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// The offset of the next byte to be read.
    pub const fn buffer_position(&self) -> usize {
        self.position
    }

    /// Bytes left to read.
    pub const fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// True once every byte has been consumed.
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Read the next `len` bytes.
    ///
    /// Fails without consuming anything if fewer than `len` bytes remain.
    pub fn read_slice(&mut self, len: usize) -> ReadResult<&'slc [u8]> {
        let end = self
            .position
            .checked_add(len)
            .filter(|end| *end <= self.data.len())
            .ok_or(ReaderError::oob(self.position))?;
        let slice = &self.data[self.position..end];
        self.position = end;
        Ok(slice)
    }

    /// Read exactly `SIZE` bytes into an array.
    pub fn read_exact_size<const SIZE: usize>(&mut self) -> ReadResult<[u8; SIZE]> {
        let mut bytes = [0; SIZE];
        bytes.copy_from_slice(self.read_slice(SIZE)?);
        Ok(bytes)
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> ReadResult<u8> {
        let [byte] = self.read_exact_size()?;
        Ok(byte)
    }

    /// Read `n` bytes as an unsigned big-endian integer.
    ///
    /// Widths above 4 are refused with [`ReaderErrorKind::FieldWidth`]
    /// and nothing is consumed.
    pub fn read_fixed_int(&mut self, n: usize) -> ReadResult<u32> {
        if n > 4 {
            return Err(ReaderError::new(
                self.position,
                ReaderErrorKind::FieldWidth(n),
            ));
        }
        Ok(self
            .read_slice(n)?
            .iter()
            .fold(0, |acc, byte| (acc << 8) | *byte as u32))
    }

    /// Read a big-endian `u16`.
    pub fn read_u16(&mut self) -> ReadResult<u16> {
        self.read_exact_size().map(u16::from_be_bytes)
    }

    /// Read a big-endian `u32`.
    pub fn read_u32(&mut self) -> ReadResult<u32> {
        self.read_exact_size().map(u32::from_be_bytes)
    }

    /// Read a variable-length quantity.
    ///
    /// Each byte contributes its low 7 bits, most significant group first.
    /// A set high bit means another byte follows. Quantities longer than
    /// [`MAX_VARLEN_BYTES`] are rejected with
    /// [`ReaderErrorKind::MalformedVarLen`].
    pub fn read_varlen(&mut self) -> ReadResult<u32> {
        let start = self.position;
        let mut value = 0u32;
        for _ in 0..MAX_VARLEN_BYTES {
            let byte = self.read_u8()?;
            value = (value << 7) | (byte & 0x7F) as u32;
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }
        Err(ReaderError::new(start, ReaderErrorKind::MalformedVarLen))
    }
}

#[test]
fn read_fixed_width_integers() {
    use pretty_assertions::assert_eq;
    let mut reader = Reader::from_byte_slice(&[0x00, 0x00, 0x00, 0x06, 0x00, 0x01, 0xFF]);
    assert_eq!(reader.read_fixed_int(4).unwrap(), 6);
    assert_eq!(reader.read_u16().unwrap(), 1);
    assert_eq!(reader.read_fixed_int(1).unwrap(), 0xFF);
    assert_eq!(reader.read_fixed_int(0).unwrap(), 0);
}

#[test]
fn read_fixed_int_refuses_wide_fields() {
    use pretty_assertions::assert_eq;
    let mut reader = Reader::from_byte_slice(&[0x01, 0x00, 0x00, 0x00, 0x02]);
    let err = reader.read_fixed_int(5).unwrap_err();
    assert_eq!(err.error_kind(), &ReaderErrorKind::FieldWidth(5));
    assert_eq!(err.position(), 0);
    assert_eq!(reader.remaining(), 5);
}

#[test]
fn truncated_fixed_int_reports_start() {
    let mut reader = Reader::from_byte_slice(&[0x4D, 0x54, 0x68]);
    let err = reader.read_u32().unwrap_err();
    assert!(err.is_out_of_bounds());
    assert_eq!(err.position(), 0);
    // nothing was consumed
    assert_eq!(reader.remaining(), 3);
}

#[test]
fn read_varlen_values() {
    use pretty_assertions::assert_eq;
    let cases: &[(&[u8], u32)] = &[
        (&[0x00], 0),
        (&[0x40], 0x40),
        (&[0x7F], 0x7F),
        (&[0x81, 0x00], 0x80),
        (&[0xC0, 0x00], 0x2000),
        (&[0xFF, 0x7F], 0x3FFF),
        (&[0x81, 0x80, 0x00], 0x4000),
        (&[0xFF, 0xFF, 0x7F], 0x1F_FFFF),
        (&[0x81, 0x80, 0x80, 0x00], 0x20_0000),
        (&[0xFF, 0xFF, 0xFF, 0x7F], 0x0FFF_FFFF),
    ];
    for (bytes, expected) in cases {
        let mut reader = Reader::from_byte_slice(bytes);
        assert_eq!(reader.read_varlen().unwrap(), *expected);
        assert!(reader.is_empty());
    }
}

#[test]
fn read_varlen_rejects_five_bytes() {
    use pretty_assertions::assert_eq;
    let mut reader = Reader::from_byte_slice(&[0x81, 0x80, 0x80, 0x80, 0x00]);
    let err = reader.read_varlen().unwrap_err();
    assert_eq!(err.error_kind(), &ReaderErrorKind::MalformedVarLen);
    assert_eq!(err.position(), 0);
}

#[test]
fn read_varlen_truncated() {
    let mut reader = Reader::from_byte_slice(&[0x81, 0x80]);
    assert!(reader.read_varlen().unwrap_err().is_out_of_bounds());
}
