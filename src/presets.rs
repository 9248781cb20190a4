use core::num::NonZeroU64;

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::ToPrimitive;
use rand_core::CryptoRng;
use tracing::{debug, trace, warn};

#[cfg(feature = "default-rng")]
use rand_core::{OsRng, TryRngCore};

use crate::{
    error::Error,
    hazmat::{has_small_factor, miller_rabin},
    rng::RngSource,
    traits::RandomSource,
};

/// The number of Miller-Rabin rounds used when the caller does not request a specific number.
///
/// A composite passes all of them with probability at most `4^-10` (about `9.5e-7`),
/// see [`DEFAULT_ERROR_BOUND`].
pub const DEFAULT_ROUNDS: u32 = 10;

/// The worst-case false positive probability of [`is_probable_prime`] with [`DEFAULT_ROUNDS`].
pub const DEFAULT_ERROR_BOUND: f64 = crate::hazmat::error_bound(DEFAULT_ROUNDS);

/// The smallest bit length accepted by the prime generators.
pub const MIN_BIT_LENGTH: u32 = 8;

/// Options for random prime generation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// The number of Miller-Rabin rounds each candidate must pass.
    ///
    /// `None` by default, which means [`DEFAULT_ROUNDS`]. `Some(0)` is rejected.
    pub rounds: Option<u32>,
    /// The maximum number of candidates to sample before giving up with
    /// [`Error::AttemptsExhausted`].
    ///
    /// `None` by default, which means the search continues until a prime is found.
    /// The expected number of candidates is `O(bit_length)`, so a cap is only needed
    /// to put a hard bound on latency (e.g. with a misbehaving random source).
    pub max_attempts: Option<NonZeroU64>,
}

/// Checks that an explicitly requested number of rounds is usable, resolving the default.
pub(crate) fn resolve_rounds(tests: Option<u32>) -> Result<u32, Error> {
    match tests {
        Some(0) => Err(Error::InvalidRounds),
        Some(rounds) => Ok(rounds),
        None => Ok(DEFAULT_ROUNDS),
    }
}

/// Checks that primes of `bit_length` bits can be generated.
pub(crate) fn check_bit_length(bit_length: u32) -> Result<(), Error> {
    if bit_length < MIN_BIT_LENGTH {
        return Err(Error::BitLengthTooSmall {
            bit_length,
            min: MIN_BIT_LENGTH,
        });
    }
    Ok(())
}

/// Probabilistically checks if `candidate` is prime, drawing Miller-Rabin witnesses from `source`.
///
/// Performed checks, in order:
/// - numbers below 1 are not prime;
/// - 2 and 3 are prime;
/// - other even numbers are not prime;
/// - numbers with a factor in [`SMALL_PRIMES`](crate::hazmat::SMALL_PRIMES) are not prime;
/// - otherwise, `tests` (or [`DEFAULT_ROUNDS`] if `None`) rounds of Miller-Rabin check
///   with random bases decide the result.
///
/// A `true` result means "probably prime": a composite is reported as prime
/// with probability at most `4^(-tests)`. A `false` result is always correct.
///
/// Returns [`Error::InvalidRounds`] if `tests` is `Some(0)`, whatever the candidate.
pub fn is_probable_prime<S: RandomSource + ?Sized>(
    source: &mut S,
    candidate: &BigInt,
    tests: Option<u32>,
) -> Result<bool, Error> {
    let rounds = resolve_rounds(tests)?;

    let candidate = match candidate.sign() {
        Sign::Plus => candidate.magnitude(),
        Sign::Minus | Sign::NoSign => return Ok(false),
    };

    Ok(is_probable_prime_unsigned(source, candidate, rounds))
}

/// The primality check for a non-negative candidate and an already validated number of rounds.
pub(crate) fn is_probable_prime_unsigned<S: RandomSource + ?Sized>(
    source: &mut S,
    candidate: &BigUint,
    rounds: u32,
) -> bool {
    match candidate.to_u8() {
        Some(0 | 1) => return false,
        Some(2 | 3) => return true,
        _ => {}
    }

    if candidate.is_even() || has_small_factor(candidate) {
        return false;
    }

    miller_rabin(source, candidate, rounds)
}

/// Returns a random probable prime of exactly `bit_length` bits (that is, with the most significant bit set),
/// sampling candidates from `source` until one passes [`is_probable_prime`] with `tests` rounds.
///
/// Returns [`Error::BitLengthTooSmall`] if `bit_length` is less than [`MIN_BIT_LENGTH`],
/// and [`Error::InvalidRounds`] if `tests` is `Some(0)`.
///
/// The search is not bounded; use [`random_prime_with_options`] to cap the number of sampled candidates.
pub fn random_prime<S: RandomSource + ?Sized>(
    source: &mut S,
    bit_length: u32,
    tests: Option<u32>,
) -> Result<BigUint, Error> {
    let options = GenerateOptions {
        rounds: tests,
        max_attempts: None,
    };
    random_prime_with_options(source, bit_length, options)
}

/// Returns a random probable prime of exactly `bit_length` bits, configured by `options`.
///
/// See [`random_prime`] for details. In addition, returns [`Error::AttemptsExhausted`]
/// if `options.max_attempts` candidates were rejected.
pub fn random_prime_with_options<S: RandomSource + ?Sized>(
    source: &mut S,
    bit_length: u32,
    options: GenerateOptions,
) -> Result<BigUint, Error> {
    check_bit_length(bit_length)?;
    let rounds = resolve_rounds(options.rounds)?;

    let mut attempts: u64 = 0;
    loop {
        if let Some(max_attempts) = options.max_attempts {
            if attempts >= max_attempts.get() {
                warn!(bit_length, attempts, "no probable prime found within the attempt limit");
                return Err(Error::AttemptsExhausted { attempts });
            }
        }
        attempts += 1;

        let candidate = source.sample_bits(bit_length);
        if is_probable_prime_unsigned(source, &candidate, rounds) {
            debug!(bit_length, rounds, attempts, "found a probable prime");
            return Ok(candidate);
        }
        trace!(bit_length, attempts, "candidate rejected");
    }
}

/// Probabilistically checks if `candidate` is prime using the provided RNG.
///
/// See [`is_probable_prime`] for details about the performed checks.
pub fn is_probable_prime_with_rng<R: CryptoRng + ?Sized>(
    rng: &mut R,
    candidate: &BigInt,
    tests: Option<u32>,
) -> Result<bool, Error> {
    is_probable_prime(&mut RngSource(rng), candidate, tests)
}

/// Returns a random probable prime of exactly `bit_length` bits using the provided RNG.
///
/// See [`random_prime`] for details.
pub fn random_prime_with_rng<R: CryptoRng + ?Sized>(
    rng: &mut R,
    bit_length: u32,
    tests: Option<u32>,
) -> Result<BigUint, Error> {
    random_prime(&mut RngSource(rng), bit_length, tests)
}

/// Probabilistically checks if `candidate` is prime using [`OsRng`] as the RNG.
///
/// See [`is_probable_prime`] for details about the performed checks.
#[cfg(feature = "default-rng")]
pub fn is_prime(candidate: &BigInt, tests: Option<u32>) -> Result<bool, Error> {
    is_probable_prime_with_rng(&mut OsRng.unwrap_err(), candidate, tests)
}

/// Returns a random probable prime of exactly `bit_length` bits using [`OsRng`] as the RNG.
///
/// See [`random_prime`] for details.
#[cfg(feature = "default-rng")]
pub fn generate_prime(bit_length: u32, tests: Option<u32>) -> Result<BigUint, Error> {
    random_prime_with_rng(&mut OsRng.unwrap_err(), bit_length, tests)
}
