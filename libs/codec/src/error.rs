//! Codec-level errors for tick file decoding
//!
//! Every error is local to one input file; callers report it with the file
//! name and move on to the next file.

use std::io;
use thiserror::Error;

/// Errors raised while probing or decoding a tick stream
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Stream ended before the format probe window was filled
    #[error("Insufficient data to probe record format: need {need} bytes, got {got} ({diagnosis})")]
    InsufficientData {
        need: usize,
        got: usize,
        diagnosis: String,
    },

    /// Underlying reader or writer failed
    #[error("I/O error while {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: io::Error,
    },
}

impl DecodeError {
    /// Create InsufficientData with a hint about what the short stream looks like
    pub fn insufficient_data(need: usize, got: usize) -> Self {
        let diagnosis = match got {
            0 => "empty file",
            n if n < need / 2 => "shorter than a single compact record",
            _ => "file truncated or corrupted",
        };

        Self::InsufficientData {
            need,
            got,
            diagnosis: diagnosis.to_string(),
        }
    }

    pub fn io(context: &'static str, source: io::Error) -> Self {
        Self::Io { context, source }
    }
}

/// Errors raised while inferring decode parameters from a file path
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InferenceError {
    /// No run of at least six uppercase letters in the path
    #[error("cannot guess symbol and time parameters from filename `{path}`")]
    NoSymbol { path: String },
}

/// Result type for decode operations
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;
