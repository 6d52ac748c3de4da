use thiserror::Error;

#[doc = r#"
Errors that can occur while encoding a midi representation into bytes
"#]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WriterError {
    /// A value does not fit the fixed-width field it is written to.
    #[error("Value {value} does not fit in {width} bytes")]
    Overflow {
        /// The value that was written
        value: u64,
        /// Width of the field in bytes
        width: usize,
    },
    /// A fixed-width field wider than 64 bits was requested.
    #[error("Cannot write a {0} byte integer, the limit is 8")]
    FieldWidth(usize),
    /// Variable-length quantities hold at most `0x0FFF_FFFF`.
    #[error("Value {0:#X} is too large for a variable-length quantity")]
    VarLenOverflow(u64),
}

/// The Write Result type (see [`WriterError`])
pub type WriteResult<T> = Result<T, WriterError>;
