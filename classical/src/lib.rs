//! Classical ciphers and the one-time pad.
//!
//! These are character- and byte-stream transforms with a `(text, key) -> text`
//! contract. None of them is secure except the one-time pad with a key that is
//! truly random, at least as long as the message and never reused.

mod errors;
pub mod hill;
pub mod otp;
pub mod shift;
pub mod vigenere;

pub use errors::ClassicalError;
pub use hill::HillKey;
