#![doc = r#"
Read and write Standard MIDI Files (SMF).

A file is a header chunk (`MThd`) followed by one or more track chunks
(`MTrk`). Each track is a stream of delta-timed events: channel voice
messages, meta events and system-exclusive messages.

`smfio` decodes those bytes into a [`MidiFile`](crate::file::MidiFile) and
encodes a [`MidiFile`](crate::file::MidiFile) back into bytes. Nothing is
interpreted beyond the raw event fields: tempo, time signatures and note
semantics are left to the caller.

# Example
```rust
use smfio::prelude::*;

let track = TrackBuilder::new()
    .push(ChannelEvent::new(
        0,
        Channel::One,
        VoiceEvent::note_on(60, 100).unwrap(),
    ))
    .end(0)
    .unwrap();

let file = MidiFile::new(Header::default(), vec![track]).unwrap();
let bytes = file.to_bytes().unwrap();

let decoded = MidiFile::parse(&bytes).unwrap();
assert_eq!(decoded, file);
assert_eq!(decoded.header().track_count(), 1);
```

# Running status
Running status is honoured on read: a channel event whose status byte was
omitted reuses the previous channel status of the same track. On write every
channel event carries an explicit status byte.
"#]
#![warn(missing_docs)]
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod byte;
pub use byte::*;

mod error;
pub use error::*;

pub mod file;
pub mod message;
pub mod reader;
pub mod writer;

#[doc = r#"
Common re-exports when working with MIDI files
"#]
pub mod prelude {
    pub use crate::{
        byte::*,
        error::*,
        file::{
            ChannelEvent, EndOfTrack, FormatType, Header, MetaEvent, MetaType, MidiFile,
            RunningStatus, SmpteFps, SmpteHeader, SysExEvent, TicksPerQuarterNote, Timing, Track,
            TrackEvent, builder::*, chunk::*,
        },
        message::channel::*,
        reader::{FormatError, ReadResult, Reader, ReaderError, ReaderErrorKind},
        writer::{WriteResult, WriterError},
    };

    #[cfg(feature = "std")]
    pub use crate::file::FileError;
}

#[cfg(feature = "std")]
use std::path::Path;

/// Read and decode the MIDI file at `path`.
///
/// The whole file is loaded into memory before decoding.
#[cfg(feature = "std")]
pub fn read<P: AsRef<Path>>(path: P) -> Result<file::MidiFile, file::FileError> {
    file::MidiFile::read(path)
}

/// Encode `midi` and write it to `path`, replacing any existing file.
///
/// If this fails the file at `path` should be treated as truncated.
#[cfg(feature = "std")]
pub fn write<P: AsRef<Path>>(path: P, midi: &file::MidiFile) -> Result<(), file::FileError> {
    midi.write(path)
}
