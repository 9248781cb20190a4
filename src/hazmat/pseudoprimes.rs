//! This module contains various pseudoprimes
//! (composites that are classified as primes by some tests) for testing purposes.

use num_bigint::BigUint;

/// The limit below which every composite has a factor in [`SMALL_PRIMES`](super::SMALL_PRIMES)
/// (`257^2`), so the verdict of the full test is deterministic.
pub(crate) const TRIAL_DIVISION_LIMIT: u64 = 257 * 257;

/// Strong pseudoprimes to base 2 (OEIS:A001262) under 500000.
pub(crate) const STRONG_BASE_2: &[u32] = &[
    2047, 3277, 4033, 4681, 8321, 15841, 29341, 42799, 49141, 52633, 65281, 74665, 80581, 85489, 88357, 90751, 104653,
    130561, 196093, 220729, 233017, 252601, 253241, 256999, 271951, 280601, 314821, 357761, 390937, 458989, 476971,
    486737, 489997,
];

/// Strong pseudoprimes to base 2 without a factor below 256.
pub(crate) const STRONG_BASE_2_NO_SMALL_FACTOR: &[u32] = &[280601, 390937, 458989];

/// Carmichael numbers (OEIS:A002997).
pub(crate) const CARMICHAEL: &[u32] = &[
    561, 1105, 1729, 2465, 2821, 6601, 10585, 15841, 29341, 41041, 46657, 52633, 62745, 63973, 75361,
];

/// A large Carmichael number.
/// Source: F. Arnault, "Constructing Carmichael Numbers Which Are Strong
/// Pseudoprimes to Several Bases". Journal of Symbolic Computation 20(2) 151-161 (1995),
/// DOI: 10.1006/jsco.1995.1042.
/// This is a composite that can pass Miller-Rabin test to all prime bases less than 307,
/// and has no factors below 256.
pub(crate) fn large_carmichael_number() -> BigUint {
    let hex = concat![
        "204b212272",
        "807927b357671aefdd4b4b7a0f127496",
        "25cd71b549d6b8b9895e97fcf9fadcaf",
        "26c618da83c9ec7f6b39020661ba422e",
        "6c820ac14d3b8329d6c71d16a1953afd",
        "60a0aa4c63019f9c29c08d05b0c4fcd0",
        "41febeaa5b0e8475e6e96cc49478ef6e",
        "9ae877b4d3be8107bd3c64b35ebc7f2b",
        "d719c6417207aaec2151812719b5b5ba",
        "e64562bcd2ed44177a2ac314a44f344d",
        "f4a12e0d4fb8ff99c4099bfc77924b2b"
    ];
    BigUint::parse_bytes(hex.as_bytes(), 16).expect("valid hex literal")
}

/// Primes of various sizes: Mersenne primes `2^127-1`, `2^521-1`, `2^607-1`, `2^1279-1`,
/// and the field moduli of Curve25519 (`2^255-19`) and NIST P-256.
pub(crate) fn large_primes() -> alloc::vec::Vec<BigUint> {
    let one = BigUint::from(1u32);
    let mersenne = |exp: u32| (&one << exp) - 1u32;
    let p256 = (&one << 256u32) - (&one << 224u32) + (&one << 192u32) + (&one << 96u32) - 1u32;
    alloc::vec![
        mersenne(127),
        mersenne(521),
        mersenne(607),
        mersenne(1279),
        (&one << 255u32) - 19u32,
        p256,
    ]
}

#[cfg(test)]
mod tests {
    use num_traits::ToPrimitive;

    use super::{STRONG_BASE_2, STRONG_BASE_2_NO_SMALL_FACTOR, large_carmichael_number};
    use crate::hazmat::{SMALL_PRIMES, has_small_factor};

    #[test]
    fn table_consistency() {
        for num in STRONG_BASE_2_NO_SMALL_FACTOR {
            assert!(STRONG_BASE_2.contains(num));
            assert!(SMALL_PRIMES.iter().all(|p| num % u32::from(*p) != 0));
        }
        let n = large_carmichael_number();
        assert_eq!(n.bits(), 1318);
        assert!(!has_small_factor(&n));
        assert!(n.to_u64().is_none());
    }
}
