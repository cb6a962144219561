//! Single-pass phone number scanner.
//!
//! A candidate opens on a digit, `+` or `(` and runs over phone punctuation.
//! Runs with fewer than five digits are noise; accepted runs are cut right
//! after their last digit so trailing separators stay outside the match.

use alloc::string::String;
use core::ops::Range;

use crate::classify::{is_digit, is_phone_char, is_phone_start};
use crate::transform::push_masked_phone;
use crate::MIN_PHONE_DIGITS;

/// A confirmed phone match, in byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneMatch {
    pub start: usize,
    /// Exclusive end, directly after the last digit.
    pub end: usize,
    pub digit_count: usize,
}

impl PhoneMatch {
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Lazily yields phone matches from left to right.
#[derive(Debug, Clone)]
pub struct PhoneScanner<'a> {
    text: &'a [u8],
    cursor: usize,
}

impl<'a> PhoneScanner<'a> {
    pub fn new(text: &'a [u8]) -> Self {
        Self { text, cursor: 0 }
    }
}

impl<'a> Iterator for PhoneScanner<'a> {
    type Item = PhoneMatch;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.text;
        while self.cursor < text.len() {
            let start = self.cursor;
            if !is_phone_start(text[start]) {
                self.cursor += 1;
                continue;
            }

            let mut run_end = start;
            while run_end < text.len() && is_phone_char(text[run_end]) {
                run_end += 1;
            }

            let mut digit_count = 0usize;
            let mut last_digit = None;
            for (idx, &b) in text[start..run_end].iter().enumerate() {
                if is_digit(b) {
                    digit_count += 1;
                    last_digit = Some(start + idx);
                }
            }

            match last_digit {
                Some(last) if digit_count >= MIN_PHONE_DIGITS => {
                    let end = last + 1;
                    self.cursor = end;
                    return Some(PhoneMatch {
                        start,
                        end,
                        digit_count,
                    });
                }
                _ => self.cursor = run_end,
            }
        }
        None
    }
}

/// Masks every phone number in `text` except for its last four digits.
pub fn mask_phones_in_text(text: &str, mask_char: char) -> String {
    let mut output = String::with_capacity(text.len());
    let mut last = 0;

    for found in PhoneScanner::new(text.as_bytes()) {
        output.push_str(&text[last..found.start]);
        push_masked_phone(&mut output, &text[found.span()], mask_char);
        last = found.end;
    }

    output.push_str(&text[last..]);
    output
}
