// maskpii-core/src/pii_match.rs
//! Data structures for reporting what was masked, and helpers that keep raw
//! PII out of debug logs.

use serde::{Deserialize, Serialize};
use std::fmt;
use log::debug;

use lazy_static::lazy_static;
use sha2::{Digest, Sha256};

use crate::errors::MaskPiiError;

lazy_static! {
    /// Whether raw PII may appear in debug logs. Read once from the environment.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("MASKPII_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// The class of PII a detector looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PiiKind {
    Email,
    Phone,
}

impl PiiKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PiiKind::Email => "email",
            PiiKind::Phone => "phone",
        }
    }
}

impl fmt::Display for PiiKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single confirmed and masked match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PiiMatch {
    pub kind: PiiKind,
    pub original: String,
    pub masked: String,
    /// Byte offset into the text the detector scanned.
    pub start: usize,
    pub end: usize,
    #[serde(default)]
    pub sample_hash: Option<String>,
}

/// Per-kind totals for one `analyze` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaskSummaryItem {
    pub kind: PiiKind,
    pub occurrences: usize,
    pub original_texts: Vec<String>,
    pub masked_texts: Vec<String>,
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.len())
    }
}

fn get_loggable_content(sensitive_content: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        sensitive_content.to_string()
    } else {
        redact_sensitive(sensitive_content)
    }
}

pub fn log_pii_match_debug(module_path: &str, m: &PiiMatch) {
    debug!(
        "{} Found PiiMatch: Kind='{}', Span={}..{}, Original='{}', Masked='{}'",
        module_path,
        m.kind,
        m.start,
        m.end,
        get_loggable_content(&m.original),
        m.masked
    );
}

/// Stable hash of a match, usable for de-duplication without keeping the PII.
pub fn canonical_sample_hash(kind: PiiKind, snippet: &str) -> String {
    let normalized = snippet
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    let mut hasher = Sha256::new();
    hasher.update(kind.as_str().as_bytes());
    hasher.update(b":");
    hasher.update(normalized.as_bytes());
    hex::encode(hasher.finalize())
}

pub fn ensure_match_hashes(matches: &mut [PiiMatch]) {
    for m in matches.iter_mut() {
        if m.sample_hash.is_none() {
            m.sample_hash = Some(canonical_sample_hash(m.kind, &m.original));
        }
    }
}

/// Groups matches by kind. Kinds without matches are left out.
pub fn summarize(matches: &[PiiMatch]) -> Vec<MaskSummaryItem> {
    let mut summary: Vec<MaskSummaryItem> = Vec::new();
    for m in matches {
        let idx = match summary.iter().position(|item| item.kind == m.kind) {
            Some(idx) => idx,
            None => {
                summary.push(MaskSummaryItem {
                    kind: m.kind,
                    occurrences: 0,
                    original_texts: Vec::new(),
                    masked_texts: Vec::new(),
                });
                summary.len() - 1
            }
        };
        let item = &mut summary[idx];
        item.occurrences += 1;
        item.original_texts.push(m.original.clone());
        item.masked_texts.push(m.masked.clone());
    }
    summary
}

/// Serialises a match report as JSON. Original texts are replaced by `redact_sensitive` placeholders.
pub fn matches_to_json(matches: &[PiiMatch]) -> Result<String, MaskPiiError> {
    let scrubbed: Vec<PiiMatch> = matches
        .iter()
        .map(|m| PiiMatch {
            original: redact_sensitive(&m.original),
            ..m.clone()
        })
        .collect();
    serde_json::to_string(&scrubbed).map_err(|e| MaskPiiError::SerializationError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(kind: PiiKind, original: &str, masked: &str) -> PiiMatch {
        PiiMatch {
            kind,
            original: original.to_string(),
            masked: masked.to_string(),
            start: 0,
            end: original.len(),
            sample_hash: None,
        }
    }

    #[test]
    fn test_redact_sensitive_short_string() {
        assert_eq!(redact_sensitive("abc"), "[REDACTED]".to_string());
    }

    #[test]
    fn test_redact_sensitive_long_string() {
        assert_eq!(redact_sensitive("123456789"), "[REDACTED: 9 chars]".to_string());
    }

    #[test]
    fn test_canonical_sample_hash_consistency() {
        let h1 = canonical_sample_hash(PiiKind::Email, "Test@Example.COM ");
        let h2 = canonical_sample_hash(PiiKind::Email, "test@example.com");
        assert_eq!(h1, h2);
        assert_ne!(h1, canonical_sample_hash(PiiKind::Phone, "test@example.com"));
    }

    #[test]
    fn test_summarize_groups_by_kind() {
        let matches = vec![
            sample(PiiKind::Email, "alice@example.com", "a****@example.com"),
            sample(PiiKind::Phone, "090-1234-5678", "***-****-5678"),
            sample(PiiKind::Email, "bob@example.org", "b**@example.org"),
        ];
        let summary = summarize(&matches);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].kind, PiiKind::Email);
        assert_eq!(summary[0].occurrences, 2);
        assert_eq!(summary[0].masked_texts, ["a****@example.com", "b**@example.org"]);
        assert_eq!(summary[1].kind, PiiKind::Phone);
        assert_eq!(summary[1].occurrences, 1);
        assert!(summarize(&[]).is_empty());
    }

    #[test]
    fn test_matches_to_json_drops_original() {
        let json = matches_to_json(&[sample(PiiKind::Email, "alice@example.com", "a****@example.com")]).unwrap();
        assert!(json.contains("\"kind\":\"email\""));
        assert!(json.contains("a****@example.com"));
        assert!(!json.contains("alice@example.com"));
    }
}
