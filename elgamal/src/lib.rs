//! EC-ElGamal encryption of curve points.
//!
//! A message is a point `M` on the curve; mapping application data to points
//! is left to the caller. With recipient key `Q = d * G` and a fresh ephemeral
//! scalar `y`, the ciphertext is `(C1, C2) = (y * G, M + y * Q)` and decryption
//! recovers `M = C2 - d * C1`.
//!
//! # Example
//!
//! ```
//! use curve::{DomainParams, KeyPair};
//!
//! let params = DomainParams::toy();
//! let mut rng = rand::rng();
//! let keys = KeyPair::generate(&params, &mut rng).expect("keygen");
//! let message = params.curve().point_u64(10, 9).expect("point");
//!
//! let ciphertext = elgamal::encrypt(&params, keys.public_point(), &message, &mut rng)
//!     .expect("encrypt");
//! let decrypted = elgamal::decrypt(&params, keys.private_scalar(), &ciphertext)
//!     .expect("decrypt");
//! assert_eq!(decrypted, message);
//! ```

mod codec;
mod errors;

#[cfg(test)]
mod tests;

pub use codec::{Ciphertext, decrypt, encrypt};
pub use errors::ElGamalError;
