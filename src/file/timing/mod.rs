mod smpte;
pub use smpte::*;

use crate::{ParseError, SmpteError};

/// The header timing type.
///
/// This is a view over the raw `division` field of a [`Header`](super::Header):
/// either the number of ticks per quarter note or the alternative SMPTE format,
/// chosen by the leading bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Timing {
    /// The midi file's delta times are defined using a tick rate per quarter note
    TicksPerQuarterNote(TicksPerQuarterNote),

    /// The midi file's delta times are defined using an SMPTE and MIDI Time Code
    Smpte(SmpteHeader),
}

impl Timing {
    /// The tickrate per quarter note defines what a "quarter note" means.
    ///
    /// The leading bit of the u16 is disregarded, so 1-32767
    pub const fn new_ticks_per_quarter_note(tpqn: u16) -> Self {
        Self::TicksPerQuarterNote(TicksPerQuarterNote {
            inner: (tpqn & 0x7FFF).to_be_bytes(),
        })
    }

    /// Define the timing in terms of fps and ticks per frame
    pub const fn new_smpte(fps: SmpteFps, ticks_per_frame: u8) -> Self {
        Self::Smpte(SmpteHeader {
            fps,
            ticks_per_frame,
        })
    }

    /// Interpret a raw header division.
    pub fn from_division(division: u16) -> Result<Self, ParseError> {
        let bytes = division.to_be_bytes();
        match bytes[0] >> 7 {
            0 => Ok(Timing::TicksPerQuarterNote(TicksPerQuarterNote {
                inner: bytes,
            })),
            _ => Ok(Timing::Smpte(SmpteHeader::new(bytes)?)),
        }
    }

    /// The raw division field for this timing.
    pub const fn division(&self) -> u16 {
        match self {
            Self::TicksPerQuarterNote(t) => u16::from_be_bytes(t.inner),
            Self::Smpte(s) => u16::from_be_bytes([s.fps.as_header_byte() as u8, s.ticks_per_frame]),
        }
    }

    /// Returns Some if the midi timing is defined
    /// as ticks per quarter note
    pub const fn ticks_per_quarter_note(&self) -> Option<u16> {
        match self {
            Self::TicksPerQuarterNote(t) => Some(t.ticks_per_quarter_note()),
            _ => None,
        }
    }
}

/// A representation of the `tpqn` timing for a MIDI file
#[derive(Debug, Clone, PartialEq, Eq, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TicksPerQuarterNote {
    pub(crate) inner: [u8; 2],
}
impl TicksPerQuarterNote {
    /// Returns the ticks per quarter note for the file.
    pub const fn ticks_per_quarter_note(&self) -> u16 {
        let v = u16::from_be_bytes(self.inner);
        v & 0x7FFF
    }
}

/// A representation of the `smpte` timing for a MIDI file
#[derive(Debug, Clone, PartialEq, Eq, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmpteHeader {
    pub(crate) fps: SmpteFps,
    pub(crate) ticks_per_frame: u8,
}

impl SmpteHeader {
    fn new(bytes: [u8; 2]) -> Result<Self, ParseError> {
        //first bit is known to be 1 when calling this
        //Bits 14 thru 8 contain one of the four values -24, -25, -29, or -30
        let byte = bytes[0] as i8;

        let fps = match byte {
            -24 => SmpteFps::TwentyFour,
            -25 => SmpteFps::TwentyFive,
            //drop frame (29.97)
            -29 => SmpteFps::TwentyNine,
            -30 => SmpteFps::Thirty,
            _ => return Err(SmpteError::HeaderFrameTime(byte).into()),
        };
        Ok(Self {
            fps,
            ticks_per_frame: bytes[1],
        })
    }

    /// Returns the frames per second
    pub const fn fps(&self) -> SmpteFps {
        self.fps
    }

    /// Returns the ticks per frame
    pub const fn ticks_per_frame(&self) -> u8 {
        self.ticks_per_frame
    }
}

#[test]
fn ticks_per_quarter_note_division() {
    use pretty_assertions::assert_eq;
    let timing = Timing::from_division(0x0060).unwrap();
    assert_eq!(timing.ticks_per_quarter_note(), Some(96));
    assert_eq!(timing.division(), 0x0060);
}

#[test]
fn smpte_division() {
    use pretty_assertions::assert_eq;
    // -25 fps, 40 ticks per frame
    let timing = Timing::from_division(0xE728).unwrap();
    let Timing::Smpte(smpte) = timing else {
        panic!("expected smpte timing, got {timing:?}");
    };
    assert_eq!(smpte.fps(), SmpteFps::TwentyFive);
    assert_eq!(smpte.ticks_per_frame(), 40);
    assert_eq!(timing.division(), 0xE728);
    assert_eq!(timing.ticks_per_quarter_note(), None);
}

#[test]
fn invalid_smpte_division() {
    use pretty_assertions::assert_eq;
    // -26 is not a frame rate
    assert_eq!(
        Timing::from_division(0xE600),
        Err(ParseError::Smpte(SmpteError::HeaderFrameTime(-26)))
    );
}
