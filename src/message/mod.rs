#![doc = r#"
MIDI messages that can appear inside a track
"#]

pub mod channel;
