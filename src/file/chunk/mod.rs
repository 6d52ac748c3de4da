#![doc = r#"
Contains types for MIDI file chunks

# Overview

MIDI files are organized into chunks, each identified by a 4-character ASCII type identifier
followed by a 32-bit big-endian length field and then the chunk data.

## [`RawHeaderChunk`]

The header chunk (identified by "MThd") must be the first chunk in a MIDI file. It holds
the [`FormatType`](crate::file::FormatType), the number of track chunks that follow and
the raw division that defines how delta-ticks are to be interpreted.

The header payload is 6 bytes. A longer declared length is accepted and the extra bytes
are skipped; a shorter one is an error. Headers are always written with a length of 6.

## Track Chunks

Track chunks (identified by "MTrk") contain the actual MIDI events:

- [`TrackChunkHeader`] - the tag and the length in bytes of the track data
- the event stream itself, decoded until the End-of-Track marker

The bytes used by the events, End-of-Track included, must add up to the declared
length exactly.

# Example Structure

```text
[Header Chunk: "MThd" 00 00 00 06 ffff nnnn dddd]
[Track Chunk 1: "MTrk" llll llll <events>]
...
[Track Chunk N: "MTrk" llll llll <events>]
```
"#]

mod header;
pub use header::*;

mod track;
pub use track::*;

use crate::reader::{FormatError, ReadResult, Reader, ReaderError};

/// Read a 4 byte chunk tag, failing at the tag's position if it differs.
pub(crate) fn expect_tag(
    reader: &mut Reader<'_>,
    tag: &[u8; 4],
    err: fn([u8; 4]) -> FormatError,
) -> ReadResult<()> {
    let position = reader.buffer_position();
    let found: [u8; 4] = reader.read_exact_size()?;
    if &found != tag {
        return Err(ReaderError::new(position, err(found).into()));
    }
    Ok(())
}
