use alloc::vec::Vec;

use crate::{
    TrackError,
    file::{EndOfTrack, Track, TrackEvent},
};

#[doc = r#"
Assembles a [`Track`] one event at a time.

The End-of-Track marker is added by [`TrackBuilder::end`], which is the only
way to finish the track.

# Example
```rust
# use smfio::prelude::*;
let track = TrackBuilder::new()
    .push(MetaEvent::new(0, 0x03, *b"Lead"))
    .push(ChannelEvent::new(0, Channel::One, VoiceEvent::note_on(60, 90).unwrap()))
    .push(ChannelEvent::new(96, Channel::One, VoiceEvent::note_off(60, 0).unwrap()))
    .end(0)
    .unwrap();
assert_eq!(track.len(), 4);
```
"#]
#[derive(Debug, Clone, Default)]
pub struct TrackBuilder {
    events: Vec<TrackEvent>,
}

impl TrackBuilder {
    /// Start an empty track
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event
    pub fn push(mut self, event: impl Into<TrackEvent>) -> Self {
        self.add_event(event);
        self
    }

    /// Append an event in place
    pub fn add_event(&mut self, event: impl Into<TrackEvent>) -> &mut Self {
        self.events.push(event.into());
        self
    }

    /// Number of events pushed so far
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True if no events have been pushed
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Close the track with an End-of-Track marker `delta` ticks after the
    /// last event.
    ///
    /// Fails if an End-of-Track marker was pushed by hand.
    pub fn end(mut self, delta: u32) -> Result<Track, TrackError> {
        self.events.push(EndOfTrack { delta }.into());
        Track::new(self.events)
    }
}

#[test]
fn builder_rejects_manual_end_of_track() {
    use pretty_assertions::assert_eq;
    let result = TrackBuilder::new()
        .push(EndOfTrack { delta: 0 })
        .end(0);
    assert_eq!(result, Err(TrackError::EventAfterEndOfTrack(1)));
}

#[test]
fn builder_in_place() {
    use crate::file::MetaEvent;
    use pretty_assertions::assert_eq;
    let mut builder = TrackBuilder::new();
    for text in [*b"one", *b"two"] {
        builder.add_event(MetaEvent::new(0, 0x01, text));
    }
    assert_eq!(builder.len(), 2);
    let track = builder.end(10).unwrap();
    assert_eq!(track.end_of_track(), EndOfTrack { delta: 10 });
}
