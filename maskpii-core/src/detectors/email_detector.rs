// maskpii-core/src/detectors/email_detector.rs
//! Masks the local part of `local@domain` addresses, keeping its first byte.
//! License: MIT OR APACHE 2.0

use maskpii_scan::email::{mask_emails_in_text, EmailScanner};
use maskpii_scan::transform::mask_local;

use crate::detector::Detector;
use crate::pii_match::{log_pii_match_debug, PiiKind, PiiMatch};

#[derive(Debug, Default, Clone, Copy)]
pub struct EmailDetector;

impl Detector for EmailDetector {
    fn kind(&self) -> PiiKind {
        PiiKind::Email
    }

    fn mask(&self, content: &str, mask_char: char) -> String {
        mask_emails_in_text(content, mask_char)
    }

    fn find_matches(&self, content: &str, mask_char: char) -> Vec<PiiMatch> {
        EmailScanner::new(content.as_bytes())
            .map(|found| {
                let masked = format!(
                    "{}@{}",
                    mask_local(&content[found.local()], mask_char),
                    &content[found.domain()]
                );
                let m = PiiMatch {
                    kind: PiiKind::Email,
                    original: content[found.span()].to_string(),
                    masked,
                    start: found.start(),
                    end: found.end(),
                    sample_hash: None,
                };
                log_pii_match_debug(module_path!(), &m);
                m
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_matches_reports_spans() {
        let content = "Contact: alice@example.com.";
        let matches = EmailDetector.find_matches(content, '*');
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].original, "alice@example.com");
        assert_eq!(matches[0].masked, "a****@example.com");
        assert_eq!((matches[0].start, matches[0].end), (9, 26));
        assert_eq!(&content[matches[0].start..matches[0].end], matches[0].original);
    }

    #[test]
    fn test_mask_and_find_matches_agree() {
        let content = "alice@example.com and bob@example.org";
        let masked = EmailDetector.mask(content, '*');
        for m in EmailDetector.find_matches(content, '*') {
            assert_eq!(&masked[m.start..m.end], m.masked);
        }
    }
}
