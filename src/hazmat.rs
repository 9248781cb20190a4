//! Components to build your own primality test.
//! Handle with care.

mod error_bound;
mod miller_rabin;
mod mod_pow;
#[cfg(test)]
pub(crate) mod pseudoprimes;
mod trial_division;

pub use error_bound::{error_bound, minimum_mr_iterations, rounds_for_error_bound};
pub use miller_rabin::{MillerRabin, miller_rabin};
pub use mod_pow::mod_pow;
pub(crate) use mod_pow::pow_mod_nonzero;
pub use trial_division::{SMALL_PRIMES, has_small_factor};

/// Possible results of various primality tests.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Primality {
    /// The number is definitely composite.
    Composite,
    /// The number is definitely prime.
    Prime,
    /// The number is probably prime (see the documentation of the test for the error bound).
    ProbablyPrime,
}

impl Primality {
    /// Returns `true` if the result indicates that the number is probably prime.
    pub fn is_probably_prime(&self) -> bool {
        match self {
            Self::Composite => false,
            Self::Prime | Self::ProbablyPrime => true,
        }
    }

    /// Returns `true` if the result indicates that the number is definitely composite.
    pub fn is_composite(&self) -> bool {
        *self == Self::Composite
    }
}
