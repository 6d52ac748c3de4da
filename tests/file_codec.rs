use pretty_assertions::assert_eq;
use smfio::prelude::*;

fn note(delta: u32, channel: Channel, message: VoiceEvent) -> TrackEvent {
    ChannelEvent::new(delta, channel, message).into()
}

/// A format 1 file with a conductor track and a track using every event kind.
fn full_document() -> MidiFile {
    let conductor = TrackBuilder::new()
        .push(MetaEvent::new(0, 0x03, *b"Conductor"))
        .push(MetaEvent::new(0, 0x51, [0x07, 0xA1, 0x20]))
        .push(MetaEvent::new(0, 0x58, [0x04, 0x02, 0x18, 0x08]))
        .end(0)
        .unwrap();

    let voices = TrackBuilder::new()
        .push(SysExEvent::new(0, false, [0x7E, 0x7F, 0x09, 0x01, 0xF7]))
        .push(note(0, Channel::Two, VoiceEvent::program_change(19).unwrap()))
        .push(note(0, Channel::Two, VoiceEvent::control_change(7, 100).unwrap()))
        .push(note(0, Channel::Two, VoiceEvent::note_on(60, 100).unwrap()))
        .push(note(
            48,
            Channel::Two,
            VoiceEvent::PolyKeyPressure {
                key: DataByte::new(60).unwrap(),
                pressure: DataByte::new(30).unwrap(),
            },
        ))
        .push(note(
            48,
            Channel::Two,
            VoiceEvent::ChannelPressure {
                pressure: DataByte::new(20).unwrap(),
            },
        ))
        .push(note(0, Channel::Two, VoiceEvent::pitch_wheel(0x7F, 0x7F).unwrap()))
        .push(note(200, Channel::Two, VoiceEvent::note_off(60, 64).unwrap()))
        .push(MetaEvent::new(0, 0x7F, [0x00, 0x00, 0x41]))
        .push(SysExEvent::new(0x0FFF_FFFF, true, Vec::<u8>::new()))
        .end(1000)
        .unwrap();

    MidiFile::new(
        Header::new(FormatType::Simultaneous, 480),
        vec![conductor, voices],
    )
    .unwrap()
}

#[test]
fn document_survives_encode_then_decode() {
    let file = full_document();
    let bytes = file.to_bytes().unwrap();
    let decoded = MidiFile::parse(&bytes).unwrap();
    assert_eq!(decoded, file);
    // and the bytes are stable
    assert_eq!(decoded.to_bytes().unwrap(), bytes);
}

#[test]
fn header_bytes() {
    let bytes = [
        b'M', b'T', b'h', b'd', 0x00, 0x00, 0x00, 0x06, 0x00, 0x01, 0x00, 0x01, 0x00, 0x60,
        b'M', b'T', b'r', b'k', 0x00, 0x00, 0x00, 0x04, 0x00, 0xFF, 0x2F, 0x00,
    ];
    let file = MidiFile::parse(&bytes).unwrap();
    let header = file.header();
    assert_eq!(header.format(), FormatType::Simultaneous);
    assert_eq!(header.track_count(), 1);
    assert_eq!(header.division(), 96);
    assert_eq!(header.timing().unwrap().ticks_per_quarter_note(), Some(96));
}

#[test]
fn track_count_follows_the_tracks() {
    let file = MidiFile::new(
        Header::default(),
        vec![Track::empty(0), Track::empty(10), Track::empty(20)],
    )
    .unwrap();
    assert_eq!(file.header().track_count(), 3);

    let bytes = file.to_bytes().unwrap();
    assert_eq!(&bytes[8..14], [0x00, 0x01, 0x00, 0x03, 0x00, 0xDC]);

    // a header carried over from another file does not leak its count
    let (header, mut tracks) = file.into_parts();
    tracks.truncate(1);
    let file = MidiFile::new(header, tracks).unwrap();
    assert_eq!(file.header().track_count(), 1);
    assert_eq!(&file.to_bytes().unwrap()[10..12], [0x00, 0x01]);
}

#[test]
fn extended_header_is_written_back_with_length_six() {
    let bytes = [
        b'M', b'T', b'h', b'd', 0x00, 0x00, 0x00, 0x0A, 0x00, 0x00, 0x00, 0x01, 0x00, 0x60,
        0xDE, 0xAD, 0xBE, 0xEF, // extension
        b'M', b'T', b'r', b'k', 0x00, 0x00, 0x00, 0x04, 0x00, 0xFF, 0x2F, 0x00,
    ];
    let file = MidiFile::parse(&bytes).unwrap();
    assert_eq!(file.format_type(), FormatType::SingleMultiChannel);

    let mut expected = bytes.to_vec();
    expected.drain(14..18);
    expected[7] = 0x06;
    assert_eq!(file.to_bytes().unwrap(), expected);
}

#[test]
fn smpte_division_is_kept_raw() {
    let timing = Timing::new_smpte(SmpteFps::TwentyNine, 80);
    let file = MidiFile::new(
        Header::with_timing(FormatType::SequentiallyIndependent, timing),
        vec![Track::empty(0)],
    )
    .unwrap();
    let decoded = MidiFile::parse(&file.to_bytes().unwrap()).unwrap();
    assert_eq!(decoded.header().division(), 0xE350);
    assert_eq!(decoded.header().timing().unwrap(), timing);
}

#[test]
fn unknown_meta_type_is_opaque() {
    let bytes = [
        b'M', b'T', b'h', b'd', 0x00, 0x00, 0x00, 0x06, 0x00, 0x00, 0x00, 0x01, 0x00, 0x60,
        b'M', b'T', b'r', b'k', 0x00, 0x00, 0x00, 0x0A, //
        0x00, 0xFF, 0x01, 0x02, b'h', b'i', // text meta
        0x00, 0xFF, 0x2F, 0x00,
    ];
    let file = MidiFile::parse(&bytes).unwrap();
    let events = file.tracks()[0].events();
    assert_eq!(events.len(), 2);
    let TrackEvent::Meta(meta) = &events[0] else {
        panic!("expected a meta event, got {:?}", events[0]);
    };
    assert_eq!(meta.meta_type, 0x01);
    assert_eq!(meta.data, b"hi");
    assert_eq!(meta.kind(), Some(MetaType::Text));
    assert!(events[1].is_end_of_track());
}

#[test]
fn zero_tracks() {
    let file = MidiFile::new(Header::default(), Vec::new()).unwrap();
    let bytes = file.to_bytes().unwrap();
    assert_eq!(bytes.len(), 14);
    assert_eq!(MidiFile::parse(&bytes).unwrap(), file);
}
