#![doc = r#"
Contains all Channel Voice Message types

# Layout
```text
|-------------|----------|
| status (4b) | chan (4b)|   operand 1   [operand 2]
|-------------|----------|
```
The status nibble selects the [`VoiceKind`], which fixes how many 7-bit
operands follow.
"#]
mod voice;
pub use voice::*;

use crate::ParseError;
use num_enum::{IntoPrimitive, TryFromPrimitive};

#[doc = r#"
One of the sixteen MIDI channels.

On the wire channels are numbered 0-15; [`Channel::One`] is channel 0.
"#]
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, TryFromPrimitive, IntoPrimitive,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Channel {
    One = 0,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Eleven,
    Twelve,
    Thirteen,
    Fourteen,
    Fifteen,
    Sixteen,
}

impl Channel {
    /// Every channel, in wire order
    pub const ALL: [Self; 16] = [
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Eleven,
        Self::Twelve,
        Self::Thirteen,
        Self::Fourteen,
        Self::Fifteen,
        Self::Sixteen,
    ];

    /// Create a channel from its wire number (0-15)
    pub fn from_number(number: u8) -> Result<Self, ParseError> {
        Self::try_from(number).map_err(|e| ParseError::Channel(e.number))
    }

    /// Extract the channel from the low nibble of a status byte.
    pub const fn from_status(status: u8) -> Self {
        Self::ALL[(status & 0x0F) as usize]
    }

    /// The wire number of the channel (0-15)
    pub fn number(self) -> u8 {
        self.into()
    }
}

#[test]
fn channel_numbers() {
    use pretty_assertions::assert_eq;
    assert_eq!(Channel::from_number(0), Ok(Channel::One));
    assert_eq!(Channel::from_number(15), Ok(Channel::Sixteen));
    assert_eq!(Channel::from_number(16), Err(ParseError::Channel(16)));
    assert_eq!(Channel::from_status(0x9A), Channel::Eleven);
    assert_eq!(Channel::Ten.number(), 9);
}
