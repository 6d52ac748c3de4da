use core::fmt;

use crate::ParseError;

#[doc = r#"
A 7-bit MIDI data byte (0-127).

Every operand of a channel voice message is a data byte. The leading bit is
reserved for status bytes, so a value with the high bit set is rejected.
"#]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct DataByte(pub(crate) u8);

impl DataByte {
    /// The largest value a data byte can hold.
    pub const MAX: Self = Self(0x7F);

    /// Checks for correctness (leading 0 bit).
    pub const fn new(byte: u8) -> Result<Self, ParseError> {
        if byte & 0x80 != 0 {
            return Err(ParseError::DataByte(byte));
        }
        Ok(Self(byte))
    }

    /// Creates a data byte, masking off the leading bit.
    pub const fn new_unchecked(byte: u8) -> Self {
        Self(byte & 0x7F)
    }

    /// Returns the underlying byte
    pub const fn byte(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for DataByte {
    type Error = ParseError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DataByte> for u8 {
    fn from(value: DataByte) -> Self {
        value.0
    }
}

impl fmt::Display for DataByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[test]
fn data_byte_rejects_status_bytes() {
    use pretty_assertions::assert_eq;

    assert_eq!(DataByte::new(0x7F), Ok(DataByte::MAX));
    assert_eq!(DataByte::new(0x80), Err(ParseError::DataByte(0x80)));
    assert_eq!(DataByte::new_unchecked(0xBC).byte(), 0x3C);
}
