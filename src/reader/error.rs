use thiserror::Error;

#[doc = r#"
A set of errors that can occur while reading data into the midi representation
"#]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Reading at Position {position}, {kind}")]
pub struct ReaderError {
    position: usize,
    pub(crate) kind: ReaderErrorKind,
}

/// A kind of error that a reader can produce
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReaderErrorKind {
    /// The chunk layout is not a Standard MIDI File.
    #[error("Format: {0}")]
    Format(#[from] FormatError),
    /// The input ended in the middle of a field.
    #[error("Read out of bounds!")]
    OutOfBounds,
    /// A variable-length quantity ran past four bytes.
    #[error("Variable-length quantity is longer than 4 bytes")]
    MalformedVarLen,
    /// A fixed-width integer wider than 32 bits was requested.
    #[error("Cannot read a {0} byte integer, the limit is 4")]
    FieldWidth(usize),
    /// A channel status nibble outside `0x8..=0xE`.
    #[error("Unsupported event status byte {0:#04X}")]
    UnsupportedEvent(u8),
    /// A data byte appeared where a status byte was required.
    #[error("Data byte {0:#04X} without a running status in effect")]
    MissingRunningStatus(u8),
    /// A channel event operand had its leading bit set.
    #[error("Invalid data byte {0:#04X} in channel event")]
    InvalidDataByte(u8),
    /// The declared track length disagrees with the bytes its events used.
    #[error("Track declared {declared} bytes but its events used {consumed}")]
    FrameLengthMismatch {
        /// Length from the chunk header
        declared: u32,
        /// Bytes read up to and including End-of-Track
        consumed: usize,
    },
}

/// Chunk framing errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The file did not start with `MThd`.
    #[error("Invalid header chunk tag {0:?}, expected \"MThd\"")]
    HeaderTag([u8; 4]),
    /// A track chunk did not start with `MTrk`.
    #[error("Invalid track chunk tag {0:?}, expected \"MTrk\"")]
    TrackTag([u8; 4]),
    /// The header chunk is shorter than its 6 byte payload.
    #[error("Header chunk length {0} is shorter than 6")]
    HeaderLength(u32),
    /// Only formats 0, 1 and 2 exist.
    #[error("Unknown file format {0}")]
    Format(u16),
}

impl ReaderError {
    /// Create a reader error from a position and kind
    pub const fn new(position: usize, kind: ReaderErrorKind) -> Self {
        Self { position, kind }
    }
    /// True if out of bounds or unexpected end of file
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(self.kind, ReaderErrorKind::OutOfBounds)
    }
    /// True if the chunk layout itself was invalid
    pub const fn is_format_error(&self) -> bool {
        matches!(self.kind, ReaderErrorKind::Format(_))
    }
    /// Returns the error kind of the reader.
    pub fn error_kind(&self) -> &ReaderErrorKind {
        &self.kind
    }
    /// Returns the position where the read error occurred.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Create a new out of bounds error
    pub const fn oob(position: usize) -> Self {
        Self {
            position,
            kind: ReaderErrorKind::OutOfBounds,
        }
    }
}

/// The Read Result type (see [`ReaderError`])
pub type ReadResult<T> = Result<T, ReaderError>;
