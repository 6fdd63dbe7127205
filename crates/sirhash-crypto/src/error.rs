//! Error types for the hashing pipeline.

/// Failures a hash computation can report.
///
/// Arithmetic wraparound is never an error; only the two boundary
/// conditions below are.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    /// The supplied value cannot be interpreted as a byte sequence.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The message bit-length does not fit in the 64-bit length field.
    #[error("Message too large: {len} bytes exceeds the 2^64-bit length field")]
    MessageTooLarge { len: usize },
}

pub type Result<T> = std::result::Result<T, HashError>;
