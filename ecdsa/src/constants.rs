//! Constants used in the ECDSA implementation.

/// Upper bound on nonce draws for a single signature.
///
/// A nonce is discarded when `R = y * G` is the identity, when `r = 0` or when
/// `s = 0`. On any curve with a large prime order each of these has negligible
/// probability, so signing practically always succeeds on the first draw. The
/// bound only turns a broken random source or degenerate parameters into an
/// error instead of an endless loop.
pub const MAX_SIGNING_ATTEMPTS: u32 = 128;

/// Size of a SHA-256 digest in bits.
pub(crate) const DIGEST_BITS: u64 = 256;
