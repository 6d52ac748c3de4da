#![doc = r#"
Rusty representation of a [`MidiFile`]
"#]

/// Contains the [`TrackBuilder`](builder::TrackBuilder)
pub mod builder;

/// Header and track chunk framing
pub mod chunk;

mod event;
pub use event::*;

mod format;
pub use format::*;

mod header;
pub use header::*;

mod meta;
pub use meta::*;

mod timing;
pub use timing::*;

mod track;
pub use track::*;

use crate::{
    file::chunk::RawHeaderChunk,
    reader::{ReadResult, Reader, ReaderError},
    writer::{WriteResult, WriterError},
};
use alloc::vec::Vec;

#[doc = r#"
A Standard MIDI File: one header and its tracks, in file order.

Decoding and encoding are pure: [`MidiFile::parse`] turns bytes into a
`MidiFile`, [`MidiFile::to_bytes`] turns it back. The header's track count
always matches the tracks held.

# Example
```rust
# use smfio::prelude::*;
let bytes = [
    b'M', b'T', b'h', b'd', 0x00, 0x00, 0x00, 0x06, 0x00, 0x00, 0x00, 0x01, 0x00, 0x60,
    b'M', b'T', b'r', b'k', 0x00, 0x00, 0x00, 0x04, 0x00, 0xFF, 0x2F, 0x00,
];
let file = MidiFile::parse(&bytes).unwrap();
assert_eq!(file.header().format(), FormatType::SingleMultiChannel);
assert_eq!(file.tracks().len(), 1);
assert_eq!(file.to_bytes().unwrap(), bytes);
```
"#]
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SerdeMidiFile"))]
pub struct MidiFile {
    header: Header,
    tracks: Vec<Track>,
}

impl MidiFile {
    /// Assemble a file. The header's track count is taken from `tracks`.
    ///
    /// More tracks than a header can count (65535) is a
    /// [`WriterError::Overflow`].
    pub fn new(header: Header, tracks: Vec<Track>) -> WriteResult<Self> {
        let track_count = u16::try_from(tracks.len()).map_err(|_| WriterError::Overflow {
            value: tracks.len() as u64,
            width: 2,
        })?;
        Ok(Self {
            header: header.with_track_count(track_count),
            tracks,
        })
    }

    /// Parse a set of bytes into a file struct
    ///
    /// Exactly as many track chunks as the header announces are decoded.
    pub fn parse(bytes: &[u8]) -> ReadResult<Self> {
        let mut reader = Reader::from_byte_slice(bytes);

        let header_position = reader.buffer_position();
        let chunk = RawHeaderChunk::read(&mut reader)?;
        let header = chunk
            .to_header()
            .map_err(|e| ReaderError::new(header_position, e.into()))?;

        let mut tracks = Vec::with_capacity(chunk.track_count() as usize);
        for _ in 0..chunk.track_count() {
            tracks.push(Track::read(&mut reader)?);
        }

        #[cfg(feature = "tracing")]
        {
            if header.format() == FormatType::SingleMultiChannel && tracks.len() > 1 {
                tracing::warn!("Format 0 file holds {} tracks", tracks.len());
            }
            if !reader.is_empty() {
                tracing::warn!(
                    "Ignoring {} bytes after the last track",
                    reader.remaining()
                );
            }
        }

        // exactly `track_count` tracks were read, so the header already agrees
        Ok(Self { header, tracks })
    }

    /// Encode the file: a 6 byte header chunk, then every track in order.
    pub fn to_bytes(&self) -> WriteResult<Vec<u8>> {
        let mut out = Vec::new();
        RawHeaderChunk::new(&self.header, self.header.track_count()).write(&mut out)?;
        for track in &self.tracks {
            track.write(&mut out)?;
        }
        Ok(out)
    }

    /// Returns header info
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Returns the format type for the file.
    pub fn format_type(&self) -> FormatType {
        self.header.format()
    }

    /// Returns the track list
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Give up the header and tracks
    pub fn into_parts(self) -> (Header, Vec<Track>) {
        (self.header, self.tracks)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct SerdeMidiFile {
    header: Header,
    tracks: Vec<Track>,
}

#[cfg(feature = "serde")]
impl TryFrom<SerdeMidiFile> for MidiFile {
    type Error = WriterError;
    fn try_from(value: SerdeMidiFile) -> Result<Self, Self::Error> {
        Self::new(value.header, value.tracks)
    }
}

#[cfg(feature = "std")]
mod io {
    use super::MidiFile;
    use crate::{reader::ReaderError, writer::WriterError};
    use std::{fs, io::Write, path::Path};
    use thiserror::Error;

    /// Errors from reading or writing a MIDI file on disk
    #[derive(Debug, Error)]
    pub enum FileError {
        /// Opening, reading or writing the file failed
        #[error("I/O: {0}")]
        Io(#[from] std::io::Error),
        /// The file contents could not be decoded
        #[error(transparent)]
        Read(#[from] ReaderError),
        /// The document could not be encoded
        #[error("Writing: {0}")]
        Write(#[from] WriterError),
    }

    impl MidiFile {
        /// Read and decode the file at `path`.
        pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, FileError> {
            let bytes = fs::read(path)?;
            Ok(Self::parse(&bytes)?)
        }

        /// Encode this file and write it to `path`.
        ///
        /// Nothing is written if encoding fails. If writing fails part way,
        /// the file at `path` is left truncated.
        pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<(), FileError> {
            let bytes = self.to_bytes()?;
            let mut file = fs::File::create(path)?;
            file.write_all(&bytes)?;
            file.flush()?;
            Ok(())
        }
    }
}
#[cfg(feature = "std")]
pub use io::FileError;

#[test]
fn too_many_tracks_for_the_header() {
    use alloc::vec;
    use pretty_assertions::assert_eq;

    let tracks = vec![Track::empty(0); u16::MAX as usize + 1];
    assert_eq!(
        MidiFile::new(Header::default(), tracks),
        Err(WriterError::Overflow {
            value: 0x1_0000,
            width: 2
        })
    );

    let tracks = vec![Track::empty(0); u16::MAX as usize];
    let file = MidiFile::new(Header::default(), tracks).unwrap();
    assert_eq!(file.header().track_count(), u16::MAX);
}
