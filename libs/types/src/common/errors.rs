//! Error types for pip precision and decode context validation

use thiserror::Error;

/// Errors that can occur when constructing a pip precision
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PrecisionError {
    /// Scale factor 10^digits would not fit the 32-bit fixed-point price range
    #[error("Pip precision {digits} exceeds maximum of {max} fractional digits")]
    TooManyDigits { digits: u8, max: u8 },
}

/// Errors that can occur when assembling a decode context
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContextError {
    /// Symbol is empty; every decoded line must carry an instrument code
    #[error("Decode context symbol cannot be empty")]
    EmptySymbol,
}
