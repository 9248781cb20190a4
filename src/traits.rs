use num_bigint::{BigInt, BigUint};

use crate::{Error, presets::is_probable_prime};

/// A source of uniformly distributed big integers.
///
/// The quality of the randomness (seeding, entropy) is the responsibility of the implementor.
/// Any [`CryptoRng`](rand_core::CryptoRng) can be used through the [`RngSource`](crate::RngSource) adapter.
pub trait RandomSource {
    /// Returns an integer uniformly distributed over the numbers of exactly `bits` bits,
    /// that is, in `[2^(bits-1), 2^bits)` (the most significant bit is always set).
    ///
    /// Returns zero if `bits` is zero.
    fn sample_bits(&mut self, bits: u32) -> BigUint;

    /// Returns an integer uniformly distributed in the inclusive range `[low, high]`.
    ///
    /// Panics if `low > high`.
    fn sample_range(&mut self, low: &BigUint, high: &BigUint) -> BigUint;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn sample_bits(&mut self, bits: u32) -> BigUint {
        (**self).sample_bits(bits)
    }

    fn sample_range(&mut self, low: &BigUint, high: &BigUint) -> BigUint {
        (**self).sample_range(low, high)
    }
}

/// Provides a method-call way to run the primality check,
/// wrapping the standalone function [`is_probable_prime`].
pub trait ProbablePrime {
    /// Probabilistically checks if the number is prime, drawing Miller-Rabin witnesses from `source`.
    ///
    /// See [`is_probable_prime`] for details about the performed checks and the error contract.
    fn is_probable_prime_with<S: RandomSource + ?Sized>(
        &self,
        source: &mut S,
        tests: Option<u32>,
    ) -> Result<bool, Error>;
}

impl ProbablePrime for BigInt {
    fn is_probable_prime_with<S: RandomSource + ?Sized>(
        &self,
        source: &mut S,
        tests: Option<u32>,
    ) -> Result<bool, Error> {
        is_probable_prime(source, self, tests)
    }
}

impl ProbablePrime for BigUint {
    fn is_probable_prime_with<S: RandomSource + ?Sized>(
        &self,
        source: &mut S,
        tests: Option<u32>,
    ) -> Result<bool, Error> {
        is_probable_prime(source, &BigInt::from(self.clone()), tests)
    }
}
