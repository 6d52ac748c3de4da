use num_enum::{IntoPrimitive, TryFromPrimitive};

#[doc = r#"
How the tracks of a file relate to each other.

The format is the first field of the `MThd` chunk.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum FormatType {
    /// Format 0: a single track carrying every channel
    SingleMultiChannel = 0,
    /// Format 1: several tracks played at the same time
    Simultaneous = 1,
    /// Format 2: several independent single-track patterns
    SequentiallyIndependent = 2,
}

impl FormatType {
    /// The format number written in the header
    pub fn number(self) -> u16 {
        self.into()
    }
}

#[test]
fn format_numbers() {
    use pretty_assertions::assert_eq;
    assert_eq!(FormatType::try_from(0u16).unwrap(), FormatType::SingleMultiChannel);
    assert_eq!(FormatType::try_from(2u16).unwrap(), FormatType::SequentiallyIndependent);
    assert!(FormatType::try_from(3u16).is_err());
    assert_eq!(FormatType::Simultaneous.number(), 1);
}
