//! Miller-Rabin primality test.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;

use super::{Primality, pow_mod_nonzero};
use crate::traits::RandomSource;

/// Precomputed data used to perform Miller-Rabin primality test[^Pomerance1980].
///
/// The numbers that pass it are commonly called "strong probable primes"
/// (or "strong pseudoprimes" if they are, in fact, composite).
/// A composite passes a single round with a random base with probability at most 1/4.
///
/// [^Pomerance1980]:
///   C. Pomerance, J. L. Selfridge, S. S. Wagstaff "The Pseudoprimes to 25*10^9",
///   Math. Comp. 35 1003-1026 (1980),
///   DOI: [10.2307/2006210](https://dx.doi.org/10.2307/2006210)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MillerRabin {
    // The odd number that may or may not be a prime.
    candidate: BigUint,
    /// `candidate - 1`, the value a squaring chain must reach for the round to pass.
    minus_one: BigUint,
    /// The `s` exponent in the Miller-Rabin test, that finds `s` and `r` odd s.t. `candidate - 1 ==
    /// 2^s * r` (the pair `s` and `r` is unique).
    s: u64,
    /// The `r` factor in the Miller-Rabin test, that finds `s` and `r` odd s.t. `candidate -
    /// 1 == 2^s * r` (the pair `s` and `r` is unique).
    r: BigUint,
}

impl MillerRabin {
    /// Initializes a Miller-Rabin test for `candidate`.
    ///
    /// Returns `None` if `candidate` is even or smaller than 3.
    pub fn new(candidate: &BigUint) -> Option<Self> {
        if candidate.is_even() || candidate < &BigUint::from(3u32) {
            return None;
        }

        let minus_one = candidate - 1u32;

        // Find `s` and odd `r` such that `candidate - 1 == 2^s * r`.
        let mut s = 0;
        let mut r = minus_one.clone();
        while r.is_even() {
            r >>= 1u32;
            s += 1;
        }

        Some(Self {
            candidate: candidate.clone(),
            minus_one,
            s,
            r,
        })
    }

    /// The number being tested.
    pub fn candidate(&self) -> &BigUint {
        &self.candidate
    }

    /// Perform a Miller-Rabin check with a given base.
    pub fn test(&self, base: &BigUint) -> Primality {
        let one = BigUint::one();
        let mut y = pow_mod_nonzero(base, &self.r, &self.candidate);

        if y == one || y == self.minus_one {
            return Primality::ProbablyPrime;
        }

        // At most `s - 1` squarings: `base^(candidate - 1)` is never `-1`.
        let two = BigUint::from(2u32);
        for _ in 1..self.s {
            y = pow_mod_nonzero(&y, &two, &self.candidate);
            if y == self.minus_one {
                return Primality::ProbablyPrime;
            }
            if y == one {
                // A nontrivial square root of 1.
                return Primality::Composite;
            }
        }

        Primality::Composite
    }

    /// Perform a Miller-Rabin check with base 2.
    pub fn test_base_two(&self) -> Primality {
        self.test(&BigUint::from(2u32))
    }

    /// Perform a Miller-Rabin check with a random base (in the range `[2, candidate-2]`,
    /// because the test holds trivially for bases 1 or `candidate-1`) drawn from `source`.
    ///
    /// *Note:* if `candidate == 3` (which would make the above range contain no numbers)
    /// no check is actually performed and [`Primality::Prime`] is returned.
    pub fn test_random_base<S: RandomSource + ?Sized>(&self, source: &mut S) -> Primality {
        if self.candidate == BigUint::from(3u32) {
            return Primality::Prime;
        }

        // The candidate is odd, so by now it is guaranteed to be >= 5.
        let base = source.sample_range(&BigUint::from(2u32), &(&self.candidate - 2u32));
        self.test(&base)
    }
}

/// Runs `rounds` Miller-Rabin checks on `candidate` with independent random bases drawn from `source`.
///
/// Returns `true` if all of them pass. For a composite the probability of that is at most `4^(-rounds)`.
///
/// Returns `false` without drawing any bases if `candidate` is even, smaller than 3, or `rounds` is zero.
pub fn miller_rabin<S: RandomSource + ?Sized>(source: &mut S, candidate: &BigUint, rounds: u32) -> bool {
    if rounds == 0 {
        return false;
    }
    let Some(mr) = MillerRabin::new(candidate) else {
        return false;
    };
    (0..rounds).all(|_| mr.test_random_base(source).is_probably_prime())
}
