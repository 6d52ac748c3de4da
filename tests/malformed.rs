use pretty_assertions::assert_eq;
use smfio::prelude::*;

const HEADER_ONE_TRACK: [u8; 14] = [
    b'M', b'T', b'h', b'd', 0x00, 0x00, 0x00, 0x06, 0x00, 0x00, 0x00, 0x01, 0x00, 0x60,
];

fn with_track(chunk: &[u8]) -> Vec<u8> {
    let mut bytes = HEADER_ONE_TRACK.to_vec();
    bytes.extend_from_slice(chunk);
    bytes
}

#[test]
fn bad_header_tag() {
    let mut bytes = with_track(&[b'M', b'T', b'r', b'k', 0, 0, 0, 4, 0x00, 0xFF, 0x2F, 0x00]);
    bytes[..4].copy_from_slice(b"XXXX");

    let err = MidiFile::parse(&bytes).unwrap_err();
    assert!(err.is_format_error());
    assert_eq!(
        err.error_kind(),
        &ReaderErrorKind::Format(FormatError::HeaderTag(*b"XXXX"))
    );
    assert_eq!(err.position(), 0);
}

#[test]
fn empty_input() {
    let err = MidiFile::parse(&[]).unwrap_err();
    assert!(err.is_out_of_bounds());
}

#[test]
fn truncated_in_header() {
    let err = MidiFile::parse(&HEADER_ONE_TRACK[..11]).unwrap_err();
    assert!(err.is_out_of_bounds());
    assert_eq!(err.position(), 10);
}

#[test]
fn fewer_tracks_than_announced() {
    let err = MidiFile::parse(&HEADER_ONE_TRACK).unwrap_err();
    assert!(err.is_out_of_bounds());
    assert_eq!(err.position(), 14);
}

#[test]
fn truncated_meta_payload() {
    let bytes = with_track(&[b'M', b'T', b'r', b'k', 0, 0, 0, 9, 0x00, 0xFF, 0x03, 0x05, b'a']);
    let err = MidiFile::parse(&bytes).unwrap_err();
    assert!(err.is_out_of_bounds());
}

#[test]
fn overlong_delta() {
    let bytes = with_track(&[
        b'M', b'T', b'r', b'k', 0, 0, 0, 9, 0x80, 0x80, 0x80, 0x80, 0x00, 0xFF, 0x2F, 0x00,
    ]);
    let err = MidiFile::parse(&bytes).unwrap_err();
    assert_eq!(err.error_kind(), &ReaderErrorKind::MalformedVarLen);
    assert_eq!(err.position(), 22);
}

#[test]
fn system_realtime_byte_in_track() {
    let bytes = with_track(&[b'M', b'T', b'r', b'k', 0, 0, 0, 5, 0x00, 0xF8, 0x00, 0xFF, 0x2F]);
    let err = MidiFile::parse(&bytes).unwrap_err();
    assert_eq!(err.error_kind(), &ReaderErrorKind::UnsupportedEvent(0xF8));
    assert_eq!(err.position(), 23);
}

#[test]
fn frame_length_mismatch() {
    let bytes = with_track(&[
        b'M', b'T', b'r', b'k', 0, 0, 0, 0x20, 0x00, 0x90, 0x3C, 0x64, 0x00, 0xFF, 0x2F, 0x00,
    ]);
    let err = MidiFile::parse(&bytes).unwrap_err();
    assert_eq!(
        err.error_kind(),
        &ReaderErrorKind::FrameLengthMismatch {
            declared: 0x20,
            consumed: 8
        }
    );
}

#[test]
fn track_chunk_with_other_tag() {
    let bytes = with_track(&[b'X', b'F', b'I', b'H', 0, 0, 0, 4, 0x00, 0xFF, 0x2F, 0x00]);
    let err = MidiFile::parse(&bytes).unwrap_err();
    assert_eq!(
        err.error_kind(),
        &ReaderErrorKind::Format(FormatError::TrackTag(*b"XFIH"))
    );
    assert_eq!(err.position(), 14);
}

#[test]
fn errors_render_their_position() {
    let err = MidiFile::parse(b"RIFF").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Reading at Position 0, Format: Invalid header chunk tag [82, 73, 70, 70], expected \"MThd\""
    );
}
