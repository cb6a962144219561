//! Length-preserving masking transforms.
//!
//! Both transforms emit exactly one character per input byte, so with an
//! ASCII mask character the output has the same byte length as the input.

use alloc::string::String;

use crate::classify::is_digit;
use crate::VISIBLE_PHONE_DIGITS;

/// Appends the masked rendering of an email local part to `out`.
///
/// The first byte stays, every following byte becomes `mask_char`. A one-byte
/// local part is masked entirely.
pub fn push_masked_local(out: &mut String, local: &str, mask_char: char) {
    let bytes = local.as_bytes();
    match bytes.len() {
        0 => {}
        1 => out.push(mask_char),
        len => {
            out.push(bytes[0] as char);
            out.extend(core::iter::repeat(mask_char).take(len - 1));
        }
    }
}

/// Appends the masked rendering of a phone candidate to `out`.
///
/// All digits but the last four are replaced; punctuation is untouched. A
/// candidate with four digits or fewer is copied as is.
pub fn push_masked_phone(out: &mut String, candidate: &str, mask_char: char) {
    let digit_count = candidate.bytes().filter(|&b| is_digit(b)).count();
    let masked_digits = digit_count.saturating_sub(VISIBLE_PHONE_DIGITS);
    let mut seen = 0usize;

    for &b in candidate.as_bytes() {
        if is_digit(b) {
            seen += 1;
            if seen <= masked_digits {
                out.push(mask_char);
                continue;
            }
        }
        out.push(b as char);
    }
}

/// Returns the masked rendering of an email local part.
pub fn mask_local(local: &str, mask_char: char) -> String {
    let mut out = String::with_capacity(local.len());
    push_masked_local(&mut out, local, mask_char);
    out
}

/// Returns the masked rendering of a phone candidate.
pub fn mask_phone_candidate(candidate: &str, mask_char: char) -> String {
    let mut out = String::with_capacity(candidate.len());
    push_masked_phone(&mut out, candidate, mask_char);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_local_lengths() {
        assert_eq!(mask_local("a", '*'), "*");
        assert_eq!(mask_local("ab", '*'), "a*");
        assert_eq!(mask_local("alice", '*'), "a****");
        assert_eq!(mask_local("a.b+c_d", '#'), "a######");
        assert_eq!(mask_local("", '*'), "");
    }

    #[test]
    fn test_mask_phone_keeps_last_four_digits() {
        assert_eq!(mask_phone_candidate("090-1234-5678", '*'), "***-****-5678");
        assert_eq!(mask_phone_candidate("+1 (800) 123-4567", '*'), "+* (***) ***-4567");
        assert_eq!(mask_phone_candidate("12345", '*'), "*2345");
    }

    #[test]
    fn test_mask_phone_four_digits_or_fewer_untouched() {
        assert_eq!(mask_phone_candidate("1234", '*'), "1234");
        assert_eq!(mask_phone_candidate("(12)", '*'), "(12)");
        assert_eq!(mask_phone_candidate("+-", '*'), "+-");
    }

    #[test]
    fn test_transforms_preserve_length() {
        for local in ["x", "xy", "first.last+tag"] {
            assert_eq!(mask_local(local, '*').len(), local.len());
        }
        for phone in ["555 123 4567", "(03) 1234-5678", "12"] {
            assert_eq!(mask_phone_candidate(phone, '#').len(), phone.len());
        }
    }
}
