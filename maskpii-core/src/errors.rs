//! errors.rs - Custom error types for the maskpii-core library.
//!
//! Masking itself never fails; these errors only come from loading and
//! validating a `MaskConfig` or serialising match reports.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All error types produced by `maskpii-core`.
///
/// Marked `#[non_exhaustive]` so new variants can be added without a breaking change.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MaskPiiError {
    #[error("Failed to parse mask configuration: {0}")]
    ConfigParse(String),

    #[error("Mask character '{0}' is not allowed: a digit mask would be picked up again by the phone detector")]
    InvalidMaskChar(char),

    #[error("Failed to serialize match report: {0}")]
    SerializationError(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),
}
