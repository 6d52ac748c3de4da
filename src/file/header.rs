use crate::{
    ParseError,
    file::{FormatType, Timing},
};

#[doc = r#"
The contents of the `MThd` chunk.

The track count is derived from the tracks of the [`MidiFile`](super::MidiFile)
owning the header and cannot be set by hand.

The default header is format 1 with 220 ticks per quarter note.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Header {
    format: FormatType,
    track_count: u16,
    division: u16,
}

impl Default for Header {
    fn default() -> Self {
        Self::new(FormatType::Simultaneous, 220)
    }
}

impl Header {
    /// Create a header from a format and a raw division
    pub const fn new(format: FormatType, division: u16) -> Self {
        Self {
            format,
            track_count: 0,
            division,
        }
    }

    /// Create a header from a format and a timing
    pub const fn with_timing(format: FormatType, timing: Timing) -> Self {
        Self::new(format, timing.division())
    }

    pub(crate) const fn with_track_count(mut self, track_count: u16) -> Self {
        self.track_count = track_count;
        self
    }

    /// The file format
    pub const fn format(&self) -> FormatType {
        self.format
    }

    /// The number of tracks in the file
    pub const fn track_count(&self) -> u16 {
        self.track_count
    }

    /// The raw division field
    pub const fn division(&self) -> u16 {
        self.division
    }

    /// Interpret the division as ticks per quarter note or SMPTE timing
    pub fn timing(&self) -> Result<Timing, ParseError> {
        Timing::from_division(self.division)
    }
}

#[test]
fn default_header() {
    use pretty_assertions::assert_eq;
    let header = Header::default();
    assert_eq!(header.format(), FormatType::Simultaneous);
    assert_eq!(header.division(), 220);
    assert_eq!(header.track_count(), 0);
    assert_eq!(header.timing().unwrap().ticks_per_quarter_note(), Some(220));
}
