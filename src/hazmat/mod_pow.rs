//! Modular exponentiation by repeated squaring.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::Error;

/// Calculates `base^exponent mod modulus`.
///
/// Uses right-to-left binary exponentiation, so the cost is `O(log exponent)` multiplications
/// of numbers bounded by `modulus`. The arithmetic is not constant-time.
///
/// Returns [`Error::ZeroModulus`] if `modulus` is zero.
pub fn mod_pow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> Result<BigUint, Error> {
    if modulus.is_zero() {
        return Err(Error::ZeroModulus);
    }
    Ok(pow_mod_nonzero(base, exponent, modulus))
}

/// Same as [`mod_pow`] for callers that already ensured `modulus` is non-zero.
pub(crate) fn pow_mod_nonzero(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    debug_assert!(!modulus.is_zero());

    // Reducing the accumulator too makes `x^0 mod 1 == 0`.
    let mut result = BigUint::one() % modulus;
    let mut base = base % modulus;
    let mut exponent = exponent.clone();

    while !exponent.is_zero() {
        if exponent.is_odd() {
            result = (result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exponent >>= 1u32;
    }

    result
}
