//! Trial division by a fixed table of small primes,
//! used to discard most composites before the slower Miller-Rabin rounds.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

/// The primes below 256.
pub const SMALL_PRIMES: [u8; 54] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97, 101, 103, 107,
    109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191, 193, 197, 199, 211, 223, 227, 229,
    233, 239, 241, 251,
];

/// Returns `true` if `candidate` is a multiple of one of [`SMALL_PRIMES`] other than itself.
///
/// This is only a filter: a composite whose prime factors are all larger than 251 returns `false`.
pub fn has_small_factor(candidate: &BigUint) -> bool {
    if candidate.to_u8().is_some_and(|small| SMALL_PRIMES.contains(&small)) {
        return false;
    }

    SMALL_PRIMES
        .iter()
        .any(|&prime| (candidate % u32::from(prime)).is_zero())
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;

    use super::{SMALL_PRIMES, has_small_factor};

    #[test]
    fn table_is_complete() {
        let reference = (2u32..256)
            .filter(|n| (2..*n).all(|d| n % d != 0))
            .collect::<alloc::vec::Vec<_>>();
        let table = SMALL_PRIMES.iter().map(|&p| u32::from(p)).collect::<alloc::vec::Vec<_>>();
        assert_eq!(table, reference);
    }

    #[test]
    fn small_primes_are_not_flagged() {
        for prime in SMALL_PRIMES {
            assert!(!has_small_factor(&BigUint::from(prime)));
        }
    }

    #[test]
    fn multiples_are_flagged() {
        for n in [0u32, 4, 9, 15, 21, 221, 341, 253, 251 * 251, 2 * 65537] {
            assert!(has_small_factor(&BigUint::from(n)), "{n} should have a small factor");
        }
    }

    #[test]
    fn large_factors_slip_through() {
        // 257 * 263, both factors are outside the table.
        assert!(!has_small_factor(&BigUint::from(257u32 * 263)));
        assert!(!has_small_factor(&BigUint::from(1u32)));
        assert!(!has_small_factor(&BigUint::from(65537u32)));
    }
}
