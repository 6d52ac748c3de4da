use thiserror::Error;

#[doc = r#"
Errors produced when a value does not fit the MIDI field it was given to.
"#]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A data byte had its leading (status) bit set.
    #[error("Invalid data byte {0:#04X}: the leading bit must be 0")]
    DataByte(u8),
    /// Channels are numbered 0-15.
    #[error("Invalid channel {0}: must be between 0 and 15")]
    Channel(u8),
    /// An invalid SMPTE division
    #[error("Smpte: {0}")]
    Smpte(#[from] SmpteError),
}

/// An error interpreting an SMPTE division.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SmpteError {
    /// The frame rate must be one of -24, -25, -29 or -30.
    #[error("Invalid frames per second in division: {0}")]
    HeaderFrameTime(i8),
}

#[doc = r#"
Violations of the track invariant: a track is a non-empty list of events
whose last (and only last) element is the End-of-Track marker.
"#]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TrackError {
    /// A track must hold at least its End-of-Track marker.
    #[error("A track must contain at least an End-of-Track event")]
    Empty,
    /// The final event was not an End-of-Track marker.
    #[error("The last event of a track must be End-of-Track")]
    MissingEndOfTrack,
    /// An End-of-Track marker was followed by more events.
    #[error("Event {0} follows the End-of-Track marker")]
    EventAfterEndOfTrack(usize),
    /// A generic meta event used the End-of-Track type (0x2F).
    #[error("Meta event {0} has type 0x2F; use TrackEvent::EndOfTrack instead")]
    StrayEndOfTrackMeta(usize),
}
