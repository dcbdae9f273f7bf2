//! Error types for the reader and writer cursors.

use alloc::string::String;

use thiserror::Error;

// DECODE ERROR
// ================================================================================================

/// Errors which can occur while decoding values from a byte channel.
///
/// Every variant is terminal for the current decode pass: the cursor position is unspecified
/// after a failure, and the pass must be abandoned rather than resumed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The channel could not supply the exact number of bytes an operation required.
    #[error("unexpected end of stream")]
    EndOfStream,
    /// A variable-length integer did not terminate within the maximum useful encoded length
    /// for the target width, or its final group carried bits beyond that width.
    #[error("variable-length integer does not fit in {width} bits")]
    VarintOverflow {
        /// Bit width of the integer being decoded.
        width: u32,
    },
    /// A string payload was not valid UTF-8.
    #[error("string payload is not valid UTF-8")]
    InvalidUtf8,
    /// A decoded byte violated the wire grammar.
    #[error("invalid value: {0}")]
    InvalidValue(String),
    /// The underlying channel reported an I/O failure.
    #[error("channel error: {0}")]
    Io(String),
}

// ENCODE ERROR
// ================================================================================================

/// Errors which can occur while encoding values into a byte channel.
///
/// Like [DecodeError], every variant is terminal for the current encode pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A byte length or element count does not fit the `u32` prefix domain. The maximum `u32`
    /// value is reserved as a sentinel, so lengths must be strictly below it.
    #[error("length {len} does not fit in a u32 length prefix")]
    LengthOverflow {
        /// The offending length or count.
        len: usize,
    },
    /// The underlying channel reported an I/O failure.
    #[error("channel error: {0}")]
    Io(String),
}
