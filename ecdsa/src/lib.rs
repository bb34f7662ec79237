//! ECDSA over the short Weierstrass curves of the `curve` crate.
//!
//! # Example
//!
//! ```
//! use curve::DomainParams;
//! use ecdsa::{SigningKey, VerifyingKey};
//!
//! let params = DomainParams::secp256k1();
//! let mut rng = rand::rng();
//!
//! // Generate a random signing key and derive the verifying key
//! let signing_key = SigningKey::random(&params, &mut rng).expect("keygen");
//! let verifying_key = VerifyingKey::from(&signing_key);
//!
//! let signature = signing_key
//!     .sign_message(&params, &mut rng, b"hello ecdsa")
//!     .expect("signing failed");
//! assert!(verifying_key.verify_message(&params, b"hello ecdsa", &signature));
//! ```
//!
//! # Security Considerations
//!
//! - Randomness must come from a cryptographically secure generator; the API
//!   only accepts [`rand::CryptoRng`] sources
//! - Every signature uses a fresh nonce; reusing one reveals the private key
//! - Arithmetic is not constant time

mod constants;
mod errors;
mod keys;
mod signatures;


pub use constants::MAX_SIGNING_ATTEMPTS;
pub use errors::EcdsaError;
pub use keys::{SigningKey, VerifyingKey};
pub use signatures::{Signature, hash_message, sign, sign_message, verify, verify_message};
