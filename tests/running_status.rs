use pretty_assertions::assert_eq;
use smfio::prelude::*;

fn smf(track_data: &[&[u8]]) -> Vec<u8> {
    let mut bytes = vec![b'M', b'T', b'h', b'd', 0, 0, 0, 6, 0, 1, 0, track_data.len() as u8, 0, 0x60];
    for data in track_data {
        bytes.extend_from_slice(b"MTrk");
        bytes.extend_from_slice(&(data.len() as u32).to_be_bytes());
        bytes.extend_from_slice(data);
    }
    bytes
}

fn note_on(delta: u32, channel: Channel, key: u8, velocity: u8) -> TrackEvent {
    ChannelEvent::new(delta, channel, VoiceEvent::note_on(key, velocity).unwrap()).into()
}

#[test]
fn note_on_then_running_note_on() {
    let bytes = smf(&[&[
        0x00, 0x90, 0x3C, 0x64, // note on
        0x00, 0x3C, 0x00, // running status
        0x00, 0xFF, 0x2F, 0x00,
    ]]);
    let file = MidiFile::parse(&bytes).unwrap();
    assert_eq!(
        file.tracks()[0].body(),
        [
            note_on(0, Channel::One, 0x3C, 0x64),
            note_on(0, Channel::One, 0x3C, 0x00),
        ]
    );
}

#[test]
fn written_output_expands_running_status() {
    let bytes = smf(&[&[
        0x00, 0x92, 0x3C, 0x64, //
        0x10, 0x40, 0x64, //
        0x10, 0x43, 0x64, //
        0x00, 0xFF, 0x2F, 0x00,
    ]]);
    let file = MidiFile::parse(&bytes).unwrap();
    let written = file.to_bytes().unwrap();
    assert_eq!(
        &written[22..],
        [
            0x00, 0x92, 0x3C, 0x64, //
            0x10, 0x92, 0x40, 0x64, //
            0x10, 0x92, 0x43, 0x64, //
            0x00, 0xFF, 0x2F, 0x00,
        ]
    );
    assert_eq!(MidiFile::parse(&written).unwrap(), file);
}

#[test]
fn status_change_mid_run() {
    let bytes = smf(&[&[
        0x00, 0x90, 0x3C, 0x64, //
        0x00, 0x40, 0x64, // note on, running
        0x00, 0xB0, 0x40, 0x7F, // sustain pedal
        0x00, 0x40, 0x00, // control change, running
        0x00, 0xFF, 0x2F, 0x00,
    ]]);
    let file = MidiFile::parse(&bytes).unwrap();
    let body = file.tracks()[0].body();
    assert_eq!(
        body[3],
        TrackEvent::from(ChannelEvent::new(
            0,
            Channel::One,
            VoiceEvent::control_change(0x40, 0).unwrap()
        ))
    );
}

#[test]
fn running_status_does_not_cross_tracks() {
    let bytes = smf(&[
        &[0x00, 0x90, 0x3C, 0x64, 0x00, 0xFF, 0x2F, 0x00],
        &[0x00, 0x3C, 0x00, 0x00, 0xFF, 0x2F, 0x00],
    ]);
    let err = MidiFile::parse(&bytes).unwrap_err();
    assert_eq!(err.error_kind(), &ReaderErrorKind::MissingRunningStatus(0x3C));
    // 14 header bytes, 16 bytes of track 1, 8 byte track 2 chunk header, 1 byte delta
    assert_eq!(err.position(), 39);
}
