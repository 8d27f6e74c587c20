//! Error types for arithmetic coding.

use thiserror::Error;

/// Error variants for arithmetic coding operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A model cannot be built from a sequence of length zero.
    #[error("cannot build a model from an empty sequence")]
    EmptyInput,

    /// The encoder saw a symbol that is absent from the model.
    #[error("symbol at position {0} is not present in the model")]
    UnknownSymbol(usize),

    /// The interval handed to the codeword selector violates
    /// `0 <= low < high <= 1`. Indicates an upstream bug, never
    /// expected from well-formed input.
    #[error("interval bounds are not ordered within [0, 1]")]
    MalformedInterval,

    /// The decoder's number falls into none of the model's
    /// sub-intervals; the model, codeword, or length do not match.
    #[error("number lies outside every sub-interval of the model")]
    NoMatchingInterval,

    /// The precision-doubling search exceeded its cap without
    /// separating the interval bounds.
    #[error("interval bounds still identical at {0} binary digits")]
    PrecisionExhausted(usize),

    /// A codeword string contained a character other than '0' or '1'.
    #[error("invalid codeword digit {0:?}")]
    InvalidDigit(char),
}

/// A specialized Result type for arithmetic coding operations.
pub type Result<T> = std::result::Result<T, Error>;
