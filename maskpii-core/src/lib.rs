// maskpii-core/src/lib.rs
//! # maskpii Core Library
//!
//! `maskpii-core` redacts two classes of personally identifiable information
//! in free-form text: email addresses and phone numbers. Matched characters
//! are replaced by a configurable mask character and everything else is
//! copied through untouched, so the output has the same length as the input.
//!
//! It is meant to run in-process, e.g. right before text is logged or shown.
//! The byte-level scanners live in `maskpii-scan`; this crate adds the
//! `Masker` pipeline, configuration loading and match reporting.
//!
//! ## Modules
//!
//! * `config`: `MaskConfig`, YAML loading and merging of overrides.
//! * `detector`: the `Detector` trait.
//! * `detectors`: `EmailDetector` and `PhoneDetector`.
//! * `masker`: the `Masker` builder and pipeline.
//! * `pii_match`: match reports, summaries and PII-safe debug logging.
//! * `headless`: one-shot helpers.
//! * `errors`: `MaskPiiError`.
//!
//! ## Usage Example
//!
//! ```rust
//! use maskpii_core::Masker;
//!
//! let masker = Masker::new().mask_emails().mask_phones().with_mask_char('#');
//! let output = masker.process("Email bob@example.org, phone +1 (800) 123-4567");
//! assert_eq!(output, "Email b##@example.org, phone +# (###) ###-4567");
//! ```
//!
//! ## Error Handling
//!
//! Masking is total: every input, including empty or non-ASCII text, yields
//! an output. Only configuration loading returns errors (`anyhow::Error`
//! with context, or `MaskPiiError`).
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod detector;
pub mod detectors;
pub mod errors;
pub mod headless;
pub mod masker;
pub mod pii_match;

/// Re-exports the configuration types.
pub use config::{merge_config, MaskConfig, PartialMaskConfig};

/// Re-exports the custom error type for clear error reporting.
pub use errors::MaskPiiError;

pub use detector::Detector;
pub use detectors::{EmailDetector, PhoneDetector};

pub use masker::Masker;

/// Re-exports types for match reporting.
pub use pii_match::{
    canonical_sample_hash, matches_to_json, redact_sensitive, MaskSummaryItem, PiiKind, PiiMatch,
};

pub use headless::{headless_mask_string, headless_mask_with_config_file};

pub use maskpii_scan::DEFAULT_MASK_CHAR;
