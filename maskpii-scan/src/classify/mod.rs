//! Byte classes used by the scanners.
//!
//! Every predicate works on a single byte. Bytes >= 0x80 never match, so a
//! multi-byte UTF-8 sequence always ends a candidate run.

/// Byte allowed inside an email local part.
#[inline]
pub fn is_local_byte(byte: u8) -> bool {
    matches!(
        byte,
        b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'.' | b'_' | b'%' | b'+' | b'-'
    )
}

/// Byte allowed inside a domain candidate.
#[inline]
pub fn is_domain_byte(byte: u8) -> bool {
    matches!(byte, b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'.')
}

/// Byte that may open a phone candidate.
#[inline]
pub fn is_phone_start(byte: u8) -> bool {
    is_digit(byte) || byte == b'+' || byte == b'('
}

/// Byte allowed inside a phone candidate body.
#[inline]
pub fn is_phone_char(byte: u8) -> bool {
    is_digit(byte) || matches!(byte, b' ' | b'-' | b'(' | b')' | b'+')
}

#[inline]
pub fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

#[inline]
pub fn is_alpha(byte: u8) -> bool {
    byte.is_ascii_alphabetic()
}

#[inline]
pub fn is_alphanumeric(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
}
