//! Error types for wavpatcher

use thiserror::Error;

/// Result type alias for header operations
pub type Result<T> = std::result::Result<T, WavError>;

/// Errors raised while inspecting or patching a file.
///
/// Structural problems (not RIFF, missing `fmt ` chunk, truncation) are
/// reported through [`crate::InspectReason`] rather than as errors.
#[derive(Debug, Error)]
pub enum WavError {
    /// I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Offset cannot point at a `fmt ` format tag in this file
    #[error("invalid tag offset {offset} for file of {len} bytes")]
    InvalidOffset { offset: u64, len: u64 },

    /// Bad discovery pattern
    #[error("pattern error: {0}")]
    Pattern(#[from] glob::PatternError),
}
