// maskpii-core/src/masker.rs
//! The `Masker`: a configured pipeline of detectors.
//!
//! Detectors always run in the same order, email first and phone second,
//! each over the output of the previous one. Digits inside an email local
//! part are therefore already masked before the phone detector sees them.
//!
//! License: MIT OR APACHE 2.0

use std::borrow::Cow;
use log::debug;

use crate::config::MaskConfig;
use crate::detector::Detector;
use crate::detectors::{EmailDetector, PhoneDetector};
use crate::pii_match::{ensure_match_hashes, summarize, MaskSummaryItem, PiiMatch};
use maskpii_scan::DEFAULT_MASK_CHAR;

/// A configurable masker for email addresses and phone numbers.
///
/// ```rust
/// use maskpii_core::Masker;
///
/// let masker = Masker::new().mask_emails().mask_phones();
/// assert_eq!(
///     masker.process("Contact: alice@example.com or 090-1234-5678."),
///     "Contact: a****@example.com or ***-****-5678."
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Masker {
    config: MaskConfig,
}

impl Masker {
    /// A masker with every detector disabled and `'*'` as mask character.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &MaskConfig) -> Self {
        Self {
            config: config.normalized(),
        }
    }

    /// Enables email address masking.
    pub fn mask_emails(mut self) -> Self {
        self.config.email = true;
        self
    }

    /// Enables phone number masking.
    pub fn mask_phones(mut self) -> Self {
        self.config.phone = true;
        self
    }

    /// Sets the mask character. NUL falls back to `'*'`.
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.config.mask_char = if mask_char == '\0' { DEFAULT_MASK_CHAR } else { mask_char };
        self
    }

    pub fn config(&self) -> MaskConfig {
        self.config
    }

    pub fn mask_char(&self) -> char {
        self.config.mask_char
    }

    fn detectors(&self) -> Vec<&'static dyn Detector> {
        let mut detectors: Vec<&'static dyn Detector> = Vec::with_capacity(2);
        if self.config.email {
            detectors.push(&EmailDetector);
        }
        if self.config.phone {
            detectors.push(&PhoneDetector);
        }
        detectors
    }

    /// Masks all enabled PII classes in `input`, borrowing it when nothing is enabled.
    pub fn process_cow<'a>(&self, input: &'a str) -> Cow<'a, str> {
        if self.config.is_noop() {
            return Cow::Borrowed(input);
        }

        let mut result = Cow::Borrowed(input);
        for detector in self.detectors() {
            debug!("Applying {} detector to {} bytes.", detector.kind(), result.len());
            result = Cow::Owned(detector.mask(&result, self.config.mask_char));
        }
        result
    }

    /// Masks all enabled PII classes in `input`.
    pub fn process(&self, input: &str) -> String {
        self.process_cow(input).into_owned()
    }

    /// Lists every match `process` would mask, emails first, then phones.
    ///
    /// Phone offsets refer to the text after email masking, which equals the
    /// input offsets whenever the mask character is ASCII.
    pub fn find_matches(&self, input: &str) -> Vec<PiiMatch> {
        let mut matches = Vec::new();
        let mut current = Cow::Borrowed(input);
        let detectors = self.detectors();

        for (idx, detector) in detectors.iter().enumerate() {
            matches.extend(detector.find_matches(&current, self.config.mask_char));
            if idx + 1 < detectors.len() {
                current = Cow::Owned(detector.mask(&current, self.config.mask_char));
            }
        }

        ensure_match_hashes(&mut matches);
        debug!("Found {} PII matches.", matches.len());
        matches
    }

    /// Counts matches per PII class without returning the masked text.
    pub fn analyze(&self, input: &str) -> Vec<MaskSummaryItem> {
        summarize(&self.find_matches(input))
    }
}
