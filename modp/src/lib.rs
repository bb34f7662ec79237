//! Diffie-Hellman key exchange and ElGamal encryption and signatures over the
//! multiplicative group of integers modulo a prime.
//!
//! These are the scalar-exponent counterparts of the elliptic-curve protocols
//! in the `elgamal` and `ecdsa` crates. Every operation takes the group as an
//! explicit [`ModpGroup`] value.

mod constants;
pub mod diffie_hellman;
mod encryption;
mod errors;
mod group;
mod signature;

pub use constants::MAX_SIGNING_ATTEMPTS;
pub use encryption::{Ciphertext, decrypt, encrypt};
pub use errors::ModpError;
pub use group::ModpGroup;
pub use signature::{Signature, sign, verify};
