//! Heuristic email domain validation.
//!
//! No TLD list and no punycode: a domain is accepted when it has at least two
//! dot-separated labels, each label is alphanumeric with inner hyphens only,
//! and the final label is at least two alphabetic bytes.

use crate::classify::{is_alpha, is_alphanumeric};

/// Returns `true` if `domain` is an acceptable email domain.
pub fn is_valid_domain(domain: &[u8]) -> bool {
    if domain.is_empty() || domain.starts_with(b".") || domain.ends_with(b".") {
        return false;
    }

    let mut label_count = 0usize;
    let mut last_label: &[u8] = &[];

    for label in domain.split(|b| *b == b'.') {
        if label.is_empty() || label.starts_with(b"-") || label.ends_with(b"-") {
            return false;
        }
        if !label.iter().all(|&b| is_alphanumeric(b) || b == b'-') {
            return false;
        }
        label_count += 1;
        last_label = label;
    }

    if label_count < 2 {
        return false;
    }

    last_label.len() >= 2 && last_label.iter().all(|&b| is_alpha(b))
}

/// Finds the longest prefix of `text[start..end]` that validates as a domain.
///
/// The candidate end is walked back one byte at a time from `end`, so trailing
/// punctuation (a sentence-ending `.`, a dangling `-`) is dropped while
/// `sub.domain.com` is still taken whole. Returns the exclusive end of the
/// accepted domain, or `None` if no non-empty prefix validates.
pub fn longest_valid_domain_end(text: &[u8], start: usize, end: usize) -> Option<usize> {
    if start >= end || end > text.len() {
        return None;
    }
    (start + 1..=end)
        .rev()
        .find(|&candidate_end| is_valid_domain(&text[start..candidate_end]))
}
