// maskpii-core/src/detector.rs
//! Defines the `Detector` trait implemented by every PII detector.
//!
//! A detector is a pure function of `(text, mask_char)`. The `Masker` owns a
//! fixed, ordered list of detectors and pipes the output of one into the next.
//!
//! License: MIT OR APACHE 2.0

use crate::pii_match::{PiiKind, PiiMatch};

pub trait Detector: Send + Sync {
    /// The class of PII this detector masks.
    fn kind(&self) -> PiiKind;

    /// Returns `content` with every match masked. Unmatched bytes are copied verbatim.
    fn mask(&self, content: &str, mask_char: char) -> String;

    /// Lists the matches `mask` would replace, with their masked renderings.
    ///
    /// Offsets are byte offsets into `content`. `sample_hash` is left unset.
    fn find_matches(&self, content: &str, mask_char: char) -> Vec<PiiMatch>;
}
