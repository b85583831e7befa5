//! Error types for folio.

use std::path::PathBuf;

/// Errors that can occur while configuring or running a splitter.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid token target (must be > 0).
    #[error("invalid token target: {0} (must be > 0)")]
    InvalidTarget(usize),

    /// Overlap rate outside `[0, 1)`.
    #[error("overlap rate {0} out of range [0, 1)")]
    InvalidOverlapRate(f64),

    /// Minimum chunk ratio outside `(0, 1]`.
    #[error("min chunk ratio {0} out of range (0, 1]")]
    InvalidMinRatio(f64),

    /// Invalid token ceiling for chapter modes (must be > 0).
    #[error("invalid max tokens: {0} (must be > 0)")]
    InvalidMaxTokens(usize),

    /// Input text is blank (possibly after normalization).
    #[error("input text is empty")]
    EmptyInput,

    /// No supported encoding could decode the file.
    #[error("unable to decode {} with any supported encoding", path.display())]
    Decode {
        /// The file that failed to decode.
        path: PathBuf,
    },

    /// Underlying I/O failure while reading input.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Tokenizer backend failed to load.
    #[error("tokenizer error: {0}")]
    Tokenizer(String),
}

/// Result type for folio operations.
pub type Result<T> = std::result::Result<T, Error>;
