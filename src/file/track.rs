use alloc::vec::Vec;

use crate::{
    TrackError,
    file::{EndOfTrack, META_END_OF_TRACK, TrackEvent},
};

#[doc = r#"
An ordered list of events, played back in order.

The last event is always exactly one [`TrackEvent::EndOfTrack`]; nothing
follows it. [`Track::new`] refuses anything else, so every `Track` value can
be written as a valid `MTrk` chunk.

# Example
```rust
# use smfio::prelude::*;
let track = Track::new(vec![
    MetaEvent::new(0, 0x03, *b"Piano").into(),
    EndOfTrack { delta: 96 }.into(),
])
.unwrap();
assert_eq!(track.len(), 2);
assert_eq!(track.end_of_track(), EndOfTrack { delta: 96 });

assert_eq!(Track::new(vec![]), Err(TrackError::Empty));
```
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<TrackEvent>", into = "Vec<TrackEvent>")
)]
pub struct Track {
    events: Vec<TrackEvent>,
}

impl Track {
    /// Validate and wrap a list of events.
    pub fn new(events: Vec<TrackEvent>) -> Result<Self, TrackError> {
        let Some(last) = events.last() else {
            return Err(TrackError::Empty);
        };
        if !last.is_end_of_track() {
            return Err(TrackError::MissingEndOfTrack);
        }
        for (index, event) in events.iter().enumerate().take(events.len() - 1) {
            match event {
                TrackEvent::EndOfTrack(_) => return Err(TrackError::EventAfterEndOfTrack(index + 1)),
                TrackEvent::Meta(meta) if meta.meta_type == META_END_OF_TRACK => {
                    return Err(TrackError::StrayEndOfTrackMeta(index));
                }
                _ => {}
            }
        }
        Ok(Self { events })
    }

    /// A track holding nothing but its End-of-Track marker.
    pub fn empty(delta: u32) -> Self {
        Self {
            events: alloc::vec![EndOfTrack { delta }.into()],
        }
    }

    /// Wrap events already known to end with a single End-of-Track.
    pub(crate) fn from_decoded(events: Vec<TrackEvent>) -> Self {
        debug_assert!(events.last().is_some_and(TrackEvent::is_end_of_track));
        Self { events }
    }

    /// All events, End-of-Track included
    pub fn events(&self) -> &[TrackEvent] {
        &self.events
    }

    /// The events before End-of-Track
    pub fn body(&self) -> &[TrackEvent] {
        &self.events[..self.events.len() - 1]
    }

    /// The End-of-Track marker closing this track
    pub fn end_of_track(&self) -> EndOfTrack {
        match self.events.last() {
            Some(TrackEvent::EndOfTrack(end)) => *end,
            _ => EndOfTrack::default(),
        }
    }

    /// Number of events, End-of-Track included. Never zero.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Always false: a track holds at least its End-of-Track marker.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Total ticks from the start of the track to End-of-Track.
    pub fn duration_ticks(&self) -> u64 {
        self.events.iter().map(|e| e.delta() as u64).sum()
    }

    /// Give up the event list
    pub fn into_events(self) -> Vec<TrackEvent> {
        self.events
    }
}

impl TryFrom<Vec<TrackEvent>> for Track {
    type Error = TrackError;
    fn try_from(value: Vec<TrackEvent>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Track> for Vec<TrackEvent> {
    fn from(value: Track) -> Self {
        value.events
    }
}

#[test]
fn track_invariants() {
    use crate::file::MetaEvent;
    use alloc::vec;
    use pretty_assertions::assert_eq;

    let end = TrackEvent::from(EndOfTrack { delta: 0 });
    let marker = TrackEvent::from(MetaEvent::new(0, 0x06, *b"A"));

    assert_eq!(
        Track::new(vec![marker.clone()]),
        Err(TrackError::MissingEndOfTrack)
    );
    assert_eq!(
        Track::new(vec![end.clone(), end.clone()]),
        Err(TrackError::EventAfterEndOfTrack(1))
    );
    assert_eq!(
        Track::new(vec![
            marker.clone(),
            MetaEvent::new(0, 0x2F, Vec::new()).into(),
            end.clone()
        ]),
        Err(TrackError::StrayEndOfTrackMeta(1))
    );

    let track = Track::new(vec![marker.clone(), end.clone()]).unwrap();
    assert_eq!(track.body(), [marker]);
    assert_eq!(Track::empty(0).events(), [end]);
}

#[test]
fn duration_sums_deltas() {
    use crate::file::MetaEvent;
    use alloc::vec;
    use pretty_assertions::assert_eq;

    let track = Track::new(vec![
        MetaEvent::new(10, 0x01, Vec::new()).into(),
        MetaEvent::new(20, 0x01, Vec::new()).into(),
        EndOfTrack { delta: 30 }.into(),
    ])
    .unwrap();
    assert_eq!(track.duration_ticks(), 60);
}
