use crate::{DataByte, ParseError};
use num_enum::{IntoPrimitive, TryFromPrimitive};

#[doc = r#"
The kind of a channel voice message, identified by the high nibble of its
status byte.
"#]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum VoiceKind {
    /// `0x8n` key, velocity
    NoteOff = 0x8,
    /// `0x9n` key, velocity
    NoteOn = 0x9,
    /// `0xAn` key, pressure
    PolyKeyPressure = 0xA,
    /// `0xBn` controller, value
    ControlChange = 0xB,
    /// `0xCn` program
    ProgramChange = 0xC,
    /// `0xDn` pressure
    ChannelPressure = 0xD,
    /// `0xEn` least significant 7 bits, most significant 7 bits
    PitchWheel = 0xE,
}

impl VoiceKind {
    /// Number of data bytes following the status byte.
    pub const fn operand_count(self) -> usize {
        match self {
            Self::ProgramChange | Self::ChannelPressure => 1,
            _ => 2,
        }
    }

    /// Build the status byte for this kind on `channel` (0-15).
    pub const fn status(self, channel: u8) -> u8 {
        ((self as u8) << 4) | (channel & 0x0F)
    }
}

#[doc = r#"
The payload of a channel voice message.

Operands are raw 7-bit values; no musical meaning is attached to them.

# Example
```rust
# use smfio::prelude::*;
let bend = VoiceEvent::pitch_wheel(0x00, 0x40).unwrap();
assert_eq!(bend.kind(), VoiceKind::PitchWheel);
assert_eq!(bend.pitch_wheel_value(), Some(0x2000));
```
"#]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VoiceEvent {
    /// Release a key
    NoteOff {
        /// The key released
        key: DataByte,
        /// Release velocity
        velocity: DataByte,
    },
    /// Press a key. A velocity of 0 is conventionally a note off.
    NoteOn {
        /// The key pressed
        key: DataByte,
        /// Attack velocity
        velocity: DataByte,
    },
    /// Aftertouch for a single key
    PolyKeyPressure {
        /// The key
        key: DataByte,
        /// Pressure applied
        pressure: DataByte,
    },
    /// A controller value changed
    ControlChange {
        /// Controller number
        controller: DataByte,
        /// New value
        value: DataByte,
    },
    /// Select a program (patch)
    ProgramChange {
        /// Program number
        program: DataByte,
    },
    /// Aftertouch for the whole channel
    ChannelPressure {
        /// Pressure applied
        pressure: DataByte,
    },
    /// Pitch wheel position, split into two 7-bit halves
    PitchWheel {
        /// Least significant 7 bits
        lsb: DataByte,
        /// Most significant 7 bits
        msb: DataByte,
    },
}

impl VoiceEvent {
    /// Create a note on message
    pub fn note_on(key: u8, velocity: u8) -> Result<Self, ParseError> {
        Ok(Self::NoteOn {
            key: DataByte::new(key)?,
            velocity: DataByte::new(velocity)?,
        })
    }

    /// Create a note off message
    pub fn note_off(key: u8, velocity: u8) -> Result<Self, ParseError> {
        Ok(Self::NoteOff {
            key: DataByte::new(key)?,
            velocity: DataByte::new(velocity)?,
        })
    }

    /// Create a control change message
    pub fn control_change(controller: u8, value: u8) -> Result<Self, ParseError> {
        Ok(Self::ControlChange {
            controller: DataByte::new(controller)?,
            value: DataByte::new(value)?,
        })
    }

    /// Create a program change message
    pub fn program_change(program: u8) -> Result<Self, ParseError> {
        Ok(Self::ProgramChange {
            program: DataByte::new(program)?,
        })
    }

    /// Create a pitch wheel message from its two halves
    pub fn pitch_wheel(lsb: u8, msb: u8) -> Result<Self, ParseError> {
        Ok(Self::PitchWheel {
            lsb: DataByte::new(lsb)?,
            msb: DataByte::new(msb)?,
        })
    }

    /// Assemble a message from its kind and operands.
    ///
    /// `second` is ignored by one-operand kinds.
    pub const fn from_operands(kind: VoiceKind, first: DataByte, second: DataByte) -> Self {
        match kind {
            VoiceKind::NoteOff => Self::NoteOff {
                key: first,
                velocity: second,
            },
            VoiceKind::NoteOn => Self::NoteOn {
                key: first,
                velocity: second,
            },
            VoiceKind::PolyKeyPressure => Self::PolyKeyPressure {
                key: first,
                pressure: second,
            },
            VoiceKind::ControlChange => Self::ControlChange {
                controller: first,
                value: second,
            },
            VoiceKind::ProgramChange => Self::ProgramChange { program: first },
            VoiceKind::ChannelPressure => Self::ChannelPressure { pressure: first },
            VoiceKind::PitchWheel => Self::PitchWheel {
                lsb: first,
                msb: second,
            },
        }
    }

    /// The kind of message
    pub const fn kind(&self) -> VoiceKind {
        match self {
            Self::NoteOff { .. } => VoiceKind::NoteOff,
            Self::NoteOn { .. } => VoiceKind::NoteOn,
            Self::PolyKeyPressure { .. } => VoiceKind::PolyKeyPressure,
            Self::ControlChange { .. } => VoiceKind::ControlChange,
            Self::ProgramChange { .. } => VoiceKind::ProgramChange,
            Self::ChannelPressure { .. } => VoiceKind::ChannelPressure,
            Self::PitchWheel { .. } => VoiceKind::PitchWheel,
        }
    }

    /// The operands in wire order. The second is `None` for one-operand kinds.
    pub const fn operands(&self) -> (DataByte, Option<DataByte>) {
        match *self {
            Self::NoteOff { key, velocity } | Self::NoteOn { key, velocity } => {
                (key, Some(velocity))
            }
            Self::PolyKeyPressure { key, pressure } => (key, Some(pressure)),
            Self::ControlChange { controller, value } => (controller, Some(value)),
            Self::ProgramChange { program } => (program, None),
            Self::ChannelPressure { pressure } => (pressure, None),
            Self::PitchWheel { lsb, msb } => (lsb, Some(msb)),
        }
    }

    /// The combined 14-bit pitch wheel value, if this is a pitch wheel message.
    pub const fn pitch_wheel_value(&self) -> Option<u16> {
        match self {
            Self::PitchWheel { lsb, msb } => Some(((msb.0 as u16) << 7) | lsb.0 as u16),
            _ => None,
        }
    }
}

#[test]
fn status_nibbles() {
    use pretty_assertions::assert_eq;
    assert_eq!(VoiceKind::try_from(0x9).unwrap(), VoiceKind::NoteOn);
    assert!(VoiceKind::try_from(0xF).is_err());
    assert!(VoiceKind::try_from(0x7).is_err());
    assert_eq!(VoiceKind::NoteOn.status(3), 0x93);
    assert_eq!(VoiceKind::ProgramChange.operand_count(), 1);
    assert_eq!(VoiceKind::PitchWheel.operand_count(), 2);
}

#[test]
fn operands_follow_kind() {
    use pretty_assertions::assert_eq;
    let cc = VoiceEvent::control_change(7, 100).unwrap();
    assert_eq!(cc.kind(), VoiceKind::ControlChange);
    assert_eq!(
        cc.operands(),
        (DataByte::new(7).unwrap(), Some(DataByte::new(100).unwrap()))
    );

    let pc = VoiceEvent::program_change(42).unwrap();
    assert_eq!(pc.operands(), (DataByte::new(42).unwrap(), None));

    assert_eq!(
        VoiceEvent::note_on(60, 128),
        Err(ParseError::DataByte(128))
    );
}
