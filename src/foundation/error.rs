/// Convenience result type used across tuxeye.
pub type TuxeyeResult<T> = Result<T, TuxeyeError>;

/// Top-level error taxonomy used by codec, theme and scene APIs.
#[derive(thiserror::Error, Debug)]
pub enum TuxeyeError {
    /// The input does not start with the 8-byte `farbfeld` magic.
    #[error("invalid magic: expected 'farbfeld'")]
    InvalidMagic,

    /// The input ended before the header or the declared pixel data was complete.
    #[error("truncated input: expected {expected} bytes, got {actual}")]
    TruncatedInput {
        /// Bytes required by the header.
        expected: u64,
        /// Bytes actually available.
        actual: u64,
    },

    /// Underlying read or write failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Pixel storage could not be reserved.
    #[error("allocation failure: could not reserve {bytes} bytes")]
    AllocationFailure {
        /// Requested size in bytes (saturated at `u64::MAX` on overflow).
        bytes: u64,
    },

    /// Malformed non-image input (theme descriptors, raw buffer parts).
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error with context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TuxeyeError {
    /// Build a [`TuxeyeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TuxeyeError::TruncatedInput`] value.
    pub fn truncated(expected: u64, actual: u64) -> Self {
        Self::TruncatedInput { expected, actual }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
