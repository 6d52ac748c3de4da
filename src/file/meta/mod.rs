#![doc = r#"
Well-known meta event types

Meta events carry track-level information that is not sent to a device:
names, lyrics, tempo and so on. The codec keeps every meta event as an
opaque type byte plus payload; [`MetaType`] only names the types that the
Standard MIDI File specification defines. Unknown types are preserved as is.
"#]

use num_enum::{IntoPrimitive, TryFromPrimitive};

#[doc = r#"
A meta event type byte defined by the Standard MIDI File specification.

```rust
# use smfio::prelude::*;
assert_eq!(MetaType::try_from(0x51).unwrap(), MetaType::Tempo);
assert!(MetaType::try_from(0x60).is_err());
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum MetaType {
    /// `FF 00 02 ssss`
    SequenceNumber = 0x00,
    /// `FF 01 len text`
    Text = 0x01,
    /// `FF 02 len text`
    Copyright = 0x02,
    /// `FF 03 len text`
    TrackName = 0x03,
    /// `FF 04 len text`
    InstrumentName = 0x04,
    /// `FF 05 len text`
    Lyric = 0x05,
    /// `FF 06 len text`
    Marker = 0x06,
    /// `FF 07 len text`
    CuePoint = 0x07,
    /// `FF 08 len text`
    ProgramName = 0x08,
    /// `FF 09 len text`
    DeviceName = 0x09,
    /// `FF 20 01 cc`
    ChannelPrefix = 0x20,
    /// `FF 21 01 pp`
    MidiPort = 0x21,
    /// `FF 2F 00`, the track terminator
    EndOfTrack = 0x2F,
    /// `FF 51 03 tttttt`
    Tempo = 0x51,
    /// `FF 54 05 hr mn se fr ff`
    SmpteOffset = 0x54,
    /// `FF 58 04 nn dd cc bb`
    TimeSignature = 0x58,
    /// `FF 59 02 sf mi`
    KeySignature = 0x59,
    /// `FF 7F len data`
    SequencerSpecific = 0x7F,
}

impl MetaType {
    /// True for the text-like types `0x01..=0x0F`.
    pub fn is_text(self) -> bool {
        matches!(u8::from(self), 0x01..=0x0F)
    }
}

#[test]
fn text_types_are_the_low_range() {
    for text in [
        MetaType::Text,
        MetaType::Copyright,
        MetaType::TrackName,
        MetaType::Lyric,
        MetaType::DeviceName,
    ] {
        assert!(text.is_text(), "{text:?}");
    }
    for other in [
        MetaType::SequenceNumber,
        MetaType::EndOfTrack,
        MetaType::Tempo,
        MetaType::SequencerSpecific,
    ] {
        assert!(!other.is_text(), "{other:?}");
    }
}

#[test]
fn meta_event_names_known_types_only() {
    use crate::file::MetaEvent;
    use pretty_assertions::assert_eq;

    let name = MetaEvent::new(0, 0x03, *b"Piano");
    assert_eq!(name.kind(), Some(MetaType::TrackName));
    assert!(name.kind().is_some_and(MetaType::is_text));

    assert_eq!(MetaEvent::new(0, 0x60, [0x01]).kind(), None);
}
