//! Error types for rich text construction.

use thiserror::Error;

/// Errors that can occur when constructing or parsing a color.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// RGB value does not fit in 24 bits.
    #[error("rgb value {0:#X} is outside the 24-bit range")]
    OutOfRange(u32),

    /// Unknown palette name.
    #[error("unknown color name: {0}")]
    UnknownName(String),

    /// Invalid hex color format.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
}
