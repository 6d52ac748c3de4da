use pretty_assertions::assert_eq;
use smfio::prelude::*;

fn sample() -> MidiFile {
    let track = TrackBuilder::new()
        .push(MetaEvent::new(0, 0x03, *b"Melody"))
        .push(ChannelEvent::new(
            0,
            Channel::One,
            VoiceEvent::note_on(64, 80).unwrap(),
        ))
        .push(ChannelEvent::new(
            220,
            Channel::One,
            VoiceEvent::note_off(64, 0).unwrap(),
        ))
        .end(0)
        .unwrap();
    MidiFile::new(Header::default(), vec![track]).unwrap()
}

#[test]
fn write_then_read_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("melody.mid");

    let file = sample();
    smfio::write(&path, &file).unwrap();

    let on_disk = std::fs::read(&path).unwrap();
    assert_eq!(on_disk, file.to_bytes().unwrap());
    assert_eq!(smfio::read(&path).unwrap(), file);
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = smfio::read(dir.path().join("nope.mid")).unwrap_err();
    assert!(matches!(err, FileError::Io(_)));
}

#[test]
fn corrupt_file_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.mid");
    std::fs::write(&path, b"MThd\x00\x00\x00\x02").unwrap();

    let err = smfio::read(&path).unwrap_err();
    let FileError::Read(err) = err else {
        panic!("expected a decode error, got {err:?}");
    };
    assert_eq!(
        err.error_kind(),
        &ReaderErrorKind::Format(FormatError::HeaderLength(2))
    );
}

#[test]
fn unencodable_document_leaves_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never.mid");

    let track = TrackBuilder::new()
        .push(SysExEvent::new(0x1000_0000, false, vec![0xF7]))
        .end(0)
        .unwrap();
    let file = MidiFile::new(Header::default(), vec![track]).unwrap();

    let err = file.write(&path).unwrap_err();
    assert!(matches!(
        err,
        FileError::Write(WriterError::VarLenOverflow(0x1000_0000))
    ));
    assert!(!path.exists());
}
