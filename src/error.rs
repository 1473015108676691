//! Error types for lzcodec

use thiserror::Error;

/// Error type for compression and decompression
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A code that names no dictionary entry and is not the entry being defined
    #[error("Invalid code {code}: next unassigned code is {next}")]
    InvalidCode { code: u32, next: u32 },

    /// The stream opened with a control code other than literal or end-of-stream
    #[error("Invalid control code: {0}")]
    InvalidControlCode(u32),

    /// The symbol source ran out before the end-of-stream code
    #[error("Truncated stream: no end-of-stream code")]
    Truncated,

    /// Decoded code units do not form valid UTF-16
    #[error("Decoded data is not valid UTF-16")]
    InvalidUtf16,

    /// Input exceeds the configured ceiling
    #[error("Input too large: {len} code units (max {max})")]
    InputTooLarge { len: usize, max: usize },

    /// Decoded output exceeds the configured ceiling
    #[error("Output too large: exceeds {max} code units")]
    OutputTooLarge { max: usize },
}

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Error type for the payload field patcher
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatchError {
    /// Slide positions are 1-indexed
    #[error("Invalid target slide: {0}")]
    InvalidTarget(u32),

    /// The payload could not be decompressed or re-compressed
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    /// None of the enabled field rules matched the payload
    #[error("No resume position field found in payload")]
    FieldNotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CodecError::InvalidCode { code: 9, next: 6 };
        assert_eq!(err.to_string(), "Invalid code 9: next unassigned code is 6");
    }

    #[test]
    fn test_limit_errors() {
        let err = CodecError::InputTooLarge { len: 20, max: 10 };
        assert!(err.to_string().contains("20"));
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_codec_error_conversion() {
        let err: PatchError = CodecError::Truncated.into();
        assert!(matches!(err, PatchError::Codec(CodecError::Truncated)));
        assert!(err.to_string().starts_with("Codec error"));
    }
}
