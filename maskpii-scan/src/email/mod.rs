//! Single-pass email scanner.
//!
//! Each `@` is treated as an anchor: the local part is grown backwards over
//! local bytes, the domain forwards over domain bytes, and the domain run is
//! then trimmed from the right until it validates. Matches never overlap;
//! the local part of a match never reaches back into the previous match.

use alloc::string::String;
use core::ops::Range;

use crate::classify::{is_domain_byte, is_local_byte};
use crate::domain::longest_valid_domain_end;
use crate::transform::push_masked_local;

/// A confirmed `local@domain` match, in byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailMatch {
    pub local_start: usize,
    /// Position of the `@`.
    pub at: usize,
    /// Exclusive end of the validated domain.
    pub domain_end: usize,
}

impl EmailMatch {
    pub fn start(&self) -> usize {
        self.local_start
    }

    pub fn end(&self) -> usize {
        self.domain_end
    }

    pub fn span(&self) -> Range<usize> {
        self.local_start..self.domain_end
    }

    pub fn local(&self) -> Range<usize> {
        self.local_start..self.at
    }

    pub fn domain(&self) -> Range<usize> {
        self.at + 1..self.domain_end
    }
}

/// Lazily yields email matches from left to right.
#[derive(Debug, Clone)]
pub struct EmailScanner<'a> {
    text: &'a [u8],
    cursor: usize,
    boundary: usize,
}

impl<'a> EmailScanner<'a> {
    pub fn new(text: &'a [u8]) -> Self {
        Self {
            text,
            cursor: 0,
            boundary: 0,
        }
    }

    /// Tries to build a match around the `@` at `at`.
    fn match_at(&self, at: usize) -> Option<EmailMatch> {
        let text = self.text;

        let mut local_start = at;
        while local_start > self.boundary && is_local_byte(text[local_start - 1]) {
            local_start -= 1;
        }
        if local_start == at {
            return None;
        }

        let domain_start = at + 1;
        let mut domain_end = domain_start;
        while domain_end < text.len() && is_domain_byte(text[domain_end]) {
            domain_end += 1;
        }
        if domain_end == domain_start {
            return None;
        }

        let valid_end = longest_valid_domain_end(text, domain_start, domain_end)?;
        Some(EmailMatch {
            local_start,
            at,
            domain_end: valid_end,
        })
    }
}

impl<'a> Iterator for EmailScanner<'a> {
    type Item = EmailMatch;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < self.text.len() {
            let i = self.cursor;
            if self.text[i] == b'@' {
                if let Some(found) = self.match_at(i) {
                    self.cursor = found.domain_end;
                    self.boundary = found.domain_end;
                    return Some(found);
                }
            }
            self.cursor = i + 1;
        }
        None
    }
}

/// Masks the local part of every email in `text`, leaving everything else as is.
pub fn mask_emails_in_text(text: &str, mask_char: char) -> String {
    let mut output = String::with_capacity(text.len());
    let mut last = 0;

    for found in EmailScanner::new(text.as_bytes()) {
        output.push_str(&text[last..found.local_start]);
        push_masked_local(&mut output, &text[found.local()], mask_char);
        output.push('@');
        output.push_str(&text[found.domain()]);
        last = found.domain_end;
    }

    output.push_str(&text[last..]);
    output
}
