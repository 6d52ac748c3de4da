use alloc::vec::Vec;

use super::expect_tag;
use crate::{
    file::{RunningStatus, Track, TrackEvent},
    reader::{FormatError, ReadResult, Reader, ReaderError, ReaderErrorKind},
    writer::{WriteResult, write_fixed_int},
};

/// Tag of a track chunk
pub const TRACK_TAG: &[u8; 4] = b"MTrk";

/// The tag and declared length preceding the events of a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackChunkHeader {
    length: u32,
}

impl TrackChunkHeader {
    /// Read `MTrk` and the 32-bit length that follows it.
    pub fn read(reader: &mut Reader<'_>) -> ReadResult<Self> {
        expect_tag(reader, TRACK_TAG, FormatError::TrackTag)?;
        let length = reader.read_u32()?;
        Ok(Self { length })
    }

    /// Write `MTrk` and a length, refusing lengths that need more than 32 bits.
    pub fn write(out: &mut Vec<u8>, length: usize) -> WriteResult<()> {
        out.extend_from_slice(TRACK_TAG);
        write_fixed_int(out, 4, length as u64)
    }

    /// Length in bytes of the track data
    pub const fn len(&self) -> u32 {
        self.length
    }

    /// True if the chunk declares no data at all
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl Track {
    /// Decode one `MTrk` chunk.
    ///
    /// Events are read until End-of-Track. The bytes they used must equal the
    /// declared chunk length. Running status starts out empty.
    pub fn read(reader: &mut Reader<'_>) -> ReadResult<Self> {
        let header = TrackChunkHeader::read(reader)?;
        let start = reader.buffer_position();

        let mut running_status = RunningStatus::default();
        let mut events = Vec::new();
        loop {
            let event = TrackEvent::read(reader, &mut running_status)?;
            let done = event.is_end_of_track();
            events.push(event);
            if done {
                break;
            }
        }

        let consumed = reader.buffer_position() - start;
        if consumed != header.len() as usize {
            return Err(ReaderError::new(
                reader.buffer_position(),
                ReaderErrorKind::FrameLengthMismatch {
                    declared: header.len(),
                    consumed,
                },
            ));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("Decoded track of {} events ({consumed} bytes)", events.len());

        Ok(Track::from_decoded(events))
    }

    /// Encode this track as an `MTrk` chunk.
    ///
    /// Events are encoded first so the chunk length is known before it is
    /// written.
    pub fn write(&self, out: &mut Vec<u8>) -> WriteResult<()> {
        let mut buffer = Vec::new();
        for event in self.events() {
            event.write(&mut buffer)?;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Encoded track of {} events ({} bytes)",
            self.len(),
            buffer.len()
        );

        TrackChunkHeader::write(out, buffer.len())?;
        out.extend_from_slice(&buffer);
        Ok(())
    }
}

#[test]
fn note_on_track_bytes() {
    use crate::{
        file::{ChannelEvent, EndOfTrack},
        message::channel::{Channel, VoiceEvent},
    };
    use alloc::vec;
    use pretty_assertions::assert_eq;

    let track = Track::new(vec![
        ChannelEvent::new(0, Channel::One, VoiceEvent::note_on(60, 100).unwrap()).into(),
        EndOfTrack { delta: 0 }.into(),
    ])
    .unwrap();

    let mut out = Vec::new();
    track.write(&mut out).unwrap();
    assert_eq!(
        out,
        [
            b'M', b'T', b'r', b'k', 0x00, 0x00, 0x00, 0x08, // header
            0x00, 0x90, 0x3C, 0x64, // note on
            0x00, 0xFF, 0x2F, 0x00, // end of track
        ]
    );

    let decoded = Track::read(&mut Reader::from_byte_slice(&out)).unwrap();
    assert_eq!(decoded, track);
}

#[test]
fn declared_length_too_long() {
    use pretty_assertions::assert_eq;
    let bytes = [
        b'M', b'T', b'r', b'k', 0x00, 0x00, 0x00, 0x05, 0x00, 0xFF, 0x2F, 0x00, 0x00,
    ];
    let err = Track::read(&mut Reader::from_byte_slice(&bytes)).unwrap_err();
    assert_eq!(
        err.error_kind(),
        &ReaderErrorKind::FrameLengthMismatch {
            declared: 5,
            consumed: 4
        }
    );
}

#[test]
fn declared_length_too_short() {
    use pretty_assertions::assert_eq;
    let bytes = [
        b'M', b'T', b'r', b'k', 0x00, 0x00, 0x00, 0x03, 0x00, 0xC0, 0x05, 0x00, 0xFF, 0x2F,
        0x00,
    ];
    let err = Track::read(&mut Reader::from_byte_slice(&bytes)).unwrap_err();
    assert_eq!(
        err.error_kind(),
        &ReaderErrorKind::FrameLengthMismatch {
            declared: 3,
            consumed: 7
        }
    );
}

#[test]
fn missing_end_of_track_runs_out_of_bytes() {
    let bytes = [
        b'M', b'T', b'r', b'k', 0x00, 0x00, 0x00, 0x04, 0x00, 0x90, 0x3C, 0x64,
    ];
    let err = Track::read(&mut Reader::from_byte_slice(&bytes)).unwrap_err();
    assert!(err.is_out_of_bounds());
}

#[test]
fn bad_track_tag() {
    use pretty_assertions::assert_eq;
    let bytes = [b'M', b'T', b'h', b'd', 0x00, 0x00, 0x00, 0x04];
    let err = Track::read(&mut Reader::from_byte_slice(&bytes)).unwrap_err();
    assert_eq!(
        err.error_kind(),
        &ReaderErrorKind::Format(FormatError::TrackTag(*b"MThd"))
    );
}
