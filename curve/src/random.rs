use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::CryptoRng;

use crate::errors::CurveError;

/// Draws a scalar uniformly from `[1, bound - 1]` by rejection sampling.
///
/// Candidates are `bits(bound)` random bits; zero and values `>= bound` are
/// discarded. Each draw is accepted with probability above one half, so the
/// expected number of draws is below two.
pub fn random_scalar<R: CryptoRng + ?Sized>(
    rng: &mut R,
    bound: &BigUint,
) -> Result<BigUint, CurveError> {
    if *bound <= BigUint::one() {
        return Err(CurveError::InvalidScalarRange);
    }

    let bits = bound.bits();
    let len = bits.div_ceil(8) as usize;
    let excess = (len as u64 * 8 - bits) as u32;
    let mut buf = vec![0u8; len];

    loop {
        rng.fill_bytes(&mut buf);
        buf[0] &= 0xffu8 >> excess;
        let candidate = BigUint::from_bytes_be(&buf);
        if !candidate.is_zero() && candidate < *bound {
            return Ok(candidate);
        }
    }
}
