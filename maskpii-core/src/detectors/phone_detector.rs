// maskpii-core/src/detectors/phone_detector.rs
//! Masks all but the last four digits of phone-like digit runs.
//! License: MIT OR APACHE 2.0

use maskpii_scan::phone::{mask_phones_in_text, PhoneScanner};
use maskpii_scan::transform::mask_phone_candidate;

use crate::detector::Detector;
use crate::pii_match::{log_pii_match_debug, PiiKind, PiiMatch};

#[derive(Debug, Default, Clone, Copy)]
pub struct PhoneDetector;

impl Detector for PhoneDetector {
    fn kind(&self) -> PiiKind {
        PiiKind::Phone
    }

    fn mask(&self, content: &str, mask_char: char) -> String {
        mask_phones_in_text(content, mask_char)
    }

    fn find_matches(&self, content: &str, mask_char: char) -> Vec<PiiMatch> {
        PhoneScanner::new(content.as_bytes())
            .map(|found| {
                let original = &content[found.span()];
                let m = PiiMatch {
                    kind: PiiKind::Phone,
                    original: original.to_string(),
                    masked: mask_phone_candidate(original, mask_char),
                    start: found.start,
                    end: found.end,
                    sample_hash: None,
                };
                log_pii_match_debug(module_path!(), &m);
                m
            })
            .collect()
    }
}
