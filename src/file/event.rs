#![doc = r#"
Track events and their binary encoding

```text
event:         delta:VLQ ( channelEvent | metaEvent | sysexEvent )
channelEvent:  status:u8 operand1:u8 [operand2:u8]
               | operand1:u8 [operand2:u8]            (running status)
metaEvent:     0xFF type:u8 length:VLQ data
sysexEvent:    (0xF0 | 0xF7) length:VLQ data
```
"#]

use alloc::vec::Vec;

use crate::{
    DataByte,
    file::MetaType,
    message::channel::{Channel, VoiceEvent, VoiceKind},
    reader::{ReadResult, Reader, ReaderError, ReaderErrorKind},
    writer::{WriteResult, write_varlen, write_varlen_len},
};

/// Introduces a system exclusive message
pub const PREFIX_SYSEX: u8 = 0xF0;
/// Introduces an escaped ("no transmit") system exclusive message
pub const PREFIX_SYSEX_ESCAPE: u8 = 0xF7;
/// Introduces a meta event
pub const PREFIX_META: u8 = 0xFF;
/// Meta type of the End-of-Track marker
pub const META_END_OF_TRACK: u8 = 0x2F;

#[doc = r#"
A channel voice message with its delta time
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelEvent {
    /// Ticks since the previous event in the track
    pub delta: u32,
    /// The channel addressed
    pub channel: Channel,
    /// The message itself
    pub message: VoiceEvent,
}

impl ChannelEvent {
    /// Create a channel event
    pub const fn new(delta: u32, channel: Channel, message: VoiceEvent) -> Self {
        Self {
            delta,
            channel,
            message,
        }
    }

    /// The status byte this event is written with
    pub fn status(&self) -> u8 {
        self.message.kind().status(self.channel.number())
    }
}

#[doc = r#"
A meta event with any type other than End-of-Track.

Types the codec does not know are kept verbatim.
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetaEvent {
    /// Ticks since the previous event in the track
    pub delta: u32,
    /// The meta type byte
    pub meta_type: u8,
    /// The payload, exactly as declared by its length
    pub data: Vec<u8>,
}

impl MetaEvent {
    /// Create a meta event
    pub fn new(delta: u32, meta_type: u8, data: impl Into<Vec<u8>>) -> Self {
        Self {
            delta,
            meta_type,
            data: data.into(),
        }
    }

    /// The well-known type of this event, if it has one
    pub fn kind(&self) -> Option<MetaType> {
        MetaType::try_from(self.meta_type).ok()
    }
}

#[doc = r#"
A system exclusive message.

`escaped` records whether the message was introduced by `0xF7` (a
continuation packet or an arbitrary "escape") rather than `0xF0`.
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SysExEvent {
    /// Ticks since the previous event in the track
    pub delta: u32,
    /// True if the prefix byte was `0xF7`
    pub escaped: bool,
    /// The payload, exactly as declared by its length
    pub data: Vec<u8>,
}

impl SysExEvent {
    /// Create a system exclusive event
    pub fn new(delta: u32, escaped: bool, data: impl Into<Vec<u8>>) -> Self {
        Self {
            delta,
            escaped,
            data: data.into(),
        }
    }

    /// The byte introducing this message
    pub const fn prefix(&self) -> u8 {
        if self.escaped {
            PREFIX_SYSEX_ESCAPE
        } else {
            PREFIX_SYSEX
        }
    }
}

/// The mandatory last event of every track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EndOfTrack {
    /// Ticks since the previous event in the track
    pub delta: u32,
}

#[doc = r#"
Any event found in a track chunk
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrackEvent {
    /// A channel voice message
    Channel(ChannelEvent),
    /// A meta event other than End-of-Track
    Meta(MetaEvent),
    /// A system exclusive message
    SysEx(SysExEvent),
    /// The track terminator
    EndOfTrack(EndOfTrack),
}

impl From<ChannelEvent> for TrackEvent {
    fn from(value: ChannelEvent) -> Self {
        Self::Channel(value)
    }
}

impl From<MetaEvent> for TrackEvent {
    fn from(value: MetaEvent) -> Self {
        Self::Meta(value)
    }
}

impl From<SysExEvent> for TrackEvent {
    fn from(value: SysExEvent) -> Self {
        Self::SysEx(value)
    }
}

impl From<EndOfTrack> for TrackEvent {
    fn from(value: EndOfTrack) -> Self {
        Self::EndOfTrack(value)
    }
}

/// The running status of a single track.
///
/// Holds the last channel status byte seen. A fresh value must be used for
/// every track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunningStatus(Option<u8>);

impl RunningStatus {
    /// The status byte in effect, if any
    pub const fn status(&self) -> Option<u8> {
        self.0
    }
}

impl TrackEvent {
    /// Ticks since the previous event in the track
    pub const fn delta(&self) -> u32 {
        match self {
            Self::Channel(e) => e.delta,
            Self::Meta(e) => e.delta,
            Self::SysEx(e) => e.delta,
            Self::EndOfTrack(e) => e.delta,
        }
    }

    /// True for the End-of-Track marker
    pub const fn is_end_of_track(&self) -> bool {
        matches!(self, Self::EndOfTrack(_))
    }

    /// Decode one event.
    ///
    /// `running_status` is updated by every channel event carrying its own
    /// status byte, and supplies the status of those that omit it.
    pub fn read(reader: &mut Reader<'_>, running_status: &mut RunningStatus) -> ReadResult<Self> {
        let delta = reader.read_varlen()?;
        let prefix = reader.read_u8()?;

        match prefix {
            PREFIX_SYSEX | PREFIX_SYSEX_ESCAPE => {
                let data = read_length_prefixed(reader)?;
                Ok(Self::SysEx(SysExEvent {
                    delta,
                    escaped: prefix == PREFIX_SYSEX_ESCAPE,
                    data,
                }))
            }
            PREFIX_META => {
                let meta_type = reader.read_u8()?;
                let data = read_length_prefixed(reader)?;
                if meta_type != META_END_OF_TRACK {
                    return Ok(Self::Meta(MetaEvent {
                        delta,
                        meta_type,
                        data,
                    }));
                }
                if !data.is_empty() {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        "End-of-Track carries {} bytes of data, discarding them",
                        data.len()
                    );
                }
                Ok(Self::EndOfTrack(EndOfTrack { delta }))
            }
            _ => read_channel_event(reader, delta, prefix, running_status).map(Self::Channel),
        }
    }

    /// Encode this event, always with an explicit status byte.
    pub fn write(&self, out: &mut Vec<u8>) -> WriteResult<()> {
        write_varlen(out, self.delta())?;
        match self {
            Self::Channel(event) => {
                out.push(event.status());
                let (first, second) = event.message.operands();
                out.push(first.byte());
                if let Some(second) = second {
                    out.push(second.byte());
                }
            }
            Self::Meta(event) => {
                out.extend_from_slice(&[PREFIX_META, event.meta_type]);
                write_varlen_len(out, event.data.len())?;
                out.extend_from_slice(&event.data);
            }
            Self::SysEx(event) => {
                out.push(event.prefix());
                write_varlen_len(out, event.data.len())?;
                out.extend_from_slice(&event.data);
            }
            Self::EndOfTrack(_) => {
                out.extend_from_slice(&[PREFIX_META, META_END_OF_TRACK, 0x00]);
            }
        }
        Ok(())
    }
}

fn read_length_prefixed(reader: &mut Reader<'_>) -> ReadResult<Vec<u8>> {
    let length = reader.read_varlen()?;
    Ok(reader.read_slice(length as usize)?.to_vec())
}

fn read_data_byte(reader: &mut Reader<'_>) -> ReadResult<DataByte> {
    let position = reader.buffer_position();
    let byte = reader.read_u8()?;
    DataByte::new(byte)
        .map_err(|_| ReaderError::new(position, ReaderErrorKind::InvalidDataByte(byte)))
}

fn read_channel_event(
    reader: &mut Reader<'_>,
    delta: u32,
    prefix: u8,
    running_status: &mut RunningStatus,
) -> ReadResult<ChannelEvent> {
    let prefix_position = reader.buffer_position() - 1;

    // a data byte in the prefix position is the first operand of a
    // message reusing the previous status
    let (status, first) = if prefix & 0x80 != 0 {
        (prefix, None)
    } else {
        let Some(status) = running_status.0 else {
            return Err(ReaderError::new(
                prefix_position,
                ReaderErrorKind::MissingRunningStatus(prefix),
            ));
        };
        #[cfg(feature = "tracing")]
        tracing::trace!("running status {status:#04X} at {prefix_position}");
        (status, Some(DataByte(prefix)))
    };

    let kind = VoiceKind::try_from(status >> 4).map_err(|_| {
        ReaderError::new(prefix_position, ReaderErrorKind::UnsupportedEvent(status))
    })?;
    running_status.0 = Some(status);

    let first = match first {
        Some(first) => first,
        None => read_data_byte(reader)?,
    };
    let second = match kind.operand_count() {
        2 => read_data_byte(reader)?,
        _ => DataByte::default(),
    };

    Ok(ChannelEvent {
        delta,
        channel: Channel::from_status(status),
        message: VoiceEvent::from_operands(kind, first, second),
    })
}

#[cfg(test)]
fn decode_all(bytes: &[u8]) -> ReadResult<Vec<TrackEvent>> {
    let mut reader = Reader::from_byte_slice(bytes);
    let mut running_status = RunningStatus::default();
    let mut events = Vec::new();
    while !reader.is_empty() {
        events.push(TrackEvent::read(&mut reader, &mut running_status)?);
    }
    Ok(events)
}

#[test]
fn running_status_reuses_previous_status() {
    use pretty_assertions::assert_eq;
    let events = decode_all(&[0x00, 0x90, 0x3C, 0x64, 0x00, 0x3C, 0x00]).unwrap();
    assert_eq!(
        events,
        [
            TrackEvent::Channel(ChannelEvent::new(
                0,
                Channel::One,
                VoiceEvent::note_on(0x3C, 0x64).unwrap()
            )),
            TrackEvent::Channel(ChannelEvent::new(
                0,
                Channel::One,
                VoiceEvent::note_on(0x3C, 0x00).unwrap()
            )),
        ]
    );
}

#[test]
fn running_status_one_operand() {
    use pretty_assertions::assert_eq;
    let events = decode_all(&[0x00, 0xC5, 0x01, 0x10, 0x02]).unwrap();
    assert_eq!(events.len(), 2);
    let TrackEvent::Channel(second) = &events[1] else {
        panic!("expected a channel event, got {:?}", events[1]);
    };
    assert_eq!(second.delta, 0x10);
    assert_eq!(second.channel, Channel::Six);
    assert_eq!(second.message, VoiceEvent::program_change(2).unwrap());
}

#[test]
fn running_status_survives_meta_events() {
    use pretty_assertions::assert_eq;
    let events = decode_all(&[
        0x00, 0xB0, 0x07, 0x64, // control change
        0x00, 0xFF, 0x06, 0x01, b'A', // marker
        0x00, 0x0A, 0x20, // control change, running status
    ])
    .unwrap();
    assert_eq!(
        events[2],
        TrackEvent::Channel(ChannelEvent::new(
            0,
            Channel::One,
            VoiceEvent::control_change(0x0A, 0x20).unwrap()
        ))
    );
}

#[test]
fn data_byte_without_running_status() {
    use pretty_assertions::assert_eq;
    let err = decode_all(&[0x00, 0x3C, 0x64]).unwrap_err();
    assert_eq!(err.error_kind(), &ReaderErrorKind::MissingRunningStatus(0x3C));
    assert_eq!(err.position(), 1);
}

#[test]
fn system_common_status_is_unsupported() {
    use pretty_assertions::assert_eq;
    let err = decode_all(&[0x00, 0xF2, 0x00, 0x00]).unwrap_err();
    assert_eq!(err.error_kind(), &ReaderErrorKind::UnsupportedEvent(0xF2));
}

#[test]
fn operand_with_status_bit() {
    use pretty_assertions::assert_eq;
    let err = decode_all(&[0x00, 0x90, 0x3C, 0x90]).unwrap_err();
    assert_eq!(err.error_kind(), &ReaderErrorKind::InvalidDataByte(0x90));
    assert_eq!(err.position(), 3);
}

#[test]
fn pitch_wheel_reads_both_halves() {
    use pretty_assertions::assert_eq;
    let events = decode_all(&[0x00, 0xE3, 0x00, 0x40]).unwrap();
    let TrackEvent::Channel(event) = &events[0] else {
        panic!("expected a channel event, got {:?}", events[0]);
    };
    assert_eq!(event.channel, Channel::Four);
    assert_eq!(event.message.pitch_wheel_value(), Some(0x2000));
}

#[test]
fn unknown_meta_is_preserved() {
    use pretty_assertions::assert_eq;
    let events = decode_all(&[0x00, 0xFF, 0x60, 0x02, 0xAB, 0xCD]).unwrap();
    assert_eq!(
        events,
        [TrackEvent::Meta(MetaEvent::new(0, 0x60, [0xAB, 0xCD]))]
    );
    let TrackEvent::Meta(meta) = &events[0] else {
        unreachable!()
    };
    assert_eq!(meta.kind(), None);
}

#[test]
fn sysex_keeps_its_prefix() {
    use pretty_assertions::assert_eq;
    let bytes = [
        0x00, 0xF0, 0x03, 0x43, 0x12, 0xF7, // complete message
        0x10, 0xF7, 0x02, 0x01, 0xF7, // escaped packet
    ];
    let events = decode_all(&bytes).unwrap();
    assert_eq!(
        events,
        [
            TrackEvent::SysEx(SysExEvent::new(0, false, [0x43, 0x12, 0xF7])),
            TrackEvent::SysEx(SysExEvent::new(0x10, true, [0x01, 0xF7])),
        ]
    );

    let mut out = Vec::new();
    for event in &events {
        event.write(&mut out).unwrap();
    }
    assert_eq!(out, bytes);
}

#[test]
fn end_of_track_drops_payload() {
    use pretty_assertions::assert_eq;
    let events = decode_all(&[0x05, 0xFF, 0x2F, 0x01, 0x00]).unwrap();
    assert_eq!(events, [TrackEvent::EndOfTrack(EndOfTrack { delta: 5 })]);
}

#[test]
fn channel_events_always_carry_status() {
    use pretty_assertions::assert_eq;
    let mut out = Vec::new();
    for key in [0x3C, 0x40] {
        TrackEvent::Channel(ChannelEvent::new(
            0x80,
            Channel::Ten,
            VoiceEvent::note_on(key, 0x50).unwrap(),
        ))
        .write(&mut out)
        .unwrap();
    }
    assert_eq!(
        out,
        [0x81, 0x00, 0x99, 0x3C, 0x50, 0x81, 0x00, 0x99, 0x40, 0x50]
    );
}

#[test]
fn delta_too_large_to_write() {
    use crate::writer::WriterError;
    use pretty_assertions::assert_eq;
    let mut out = Vec::new();
    let err = TrackEvent::EndOfTrack(EndOfTrack { delta: 0x1000_0000 })
        .write(&mut out)
        .unwrap_err();
    assert_eq!(err, WriterError::VarLenOverflow(0x1000_0000));
}
