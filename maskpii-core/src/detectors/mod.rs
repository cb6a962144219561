//! Concrete `Detector` implementations.
//!
//! Each detector is a thin adapter over a scanner in `maskpii-scan`.

pub mod email_detector;
pub mod phone_detector;

pub use email_detector::EmailDetector;
pub use phone_detector::PhoneDetector;
