#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod classify;
pub mod domain;
pub mod email;
pub mod phone;
pub mod transform;

pub use email::{mask_emails_in_text, EmailMatch, EmailScanner};
pub use phone::{mask_phones_in_text, PhoneMatch, PhoneScanner};

/// The mask character used when none (or NUL) is supplied.
pub const DEFAULT_MASK_CHAR: char = '*';

/// Minimum number of digits a run needs before it is treated as a phone number.
pub const MIN_PHONE_DIGITS: usize = 5;

/// Number of trailing phone digits left readable.
pub const VISIBLE_PHONE_DIGITS: usize = 4;
