use alloc::vec;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand_core::CryptoRng;

use crate::traits::RandomSource;

/// Adapter from [`CryptoRng`] to [`RandomSource`].
///
/// Integers are built from little-endian random bytes with the excess high bits masked off,
/// and ranges are sampled by rejection, so both operations are exactly uniform.
#[derive(Debug)]
pub struct RngSource<'r, R>(pub &'r mut R)
where
    R: ?Sized;

impl<R: CryptoRng + ?Sized> RandomSource for RngSource<'_, R> {
    fn sample_bits(&mut self, bits: u32) -> BigUint {
        if bits == 0 {
            return BigUint::zero();
        }
        let mut value = random_bits(self.0, u64::from(bits));
        value |= BigUint::one() << (bits - 1);
        value
    }

    fn sample_range(&mut self, low: &BigUint, high: &BigUint) -> BigUint {
        assert!(low <= high, "The sampling range [{low}, {high}] is empty");
        let width = high - low;
        if width.is_zero() {
            return low.clone();
        }
        let bits = width.bits();
        // Each draw is accepted with probability above 1/2.
        loop {
            let offset = random_bits(self.0, bits);
            if offset <= width {
                return low + offset;
            }
        }
    }
}

/// Returns an integer uniformly distributed in `[0, 2^bits)`.
fn random_bits<R: CryptoRng + ?Sized>(rng: &mut R, bits: u64) -> BigUint {
    let len = bits.div_ceil(8) as usize;
    let mut bytes = vec![0u8; len];
    rng.fill_bytes(&mut bytes);
    let excess = (len as u64) * 8 - bits;
    if let Some(top) = bytes.last_mut() {
        *top &= 0xffu8 >> excess;
    }
    BigUint::from_bytes_le(&bytes)
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use num_traits::ToPrimitive;
    use rand_chacha::ChaCha8Rng;
    use rand_core::{OsRng, SeedableRng, TryRngCore};

    use super::{RngSource, random_bits};
    use crate::traits::RandomSource;

    #[test]
    fn sample_bits_sets_the_top_bit() {
        let mut rng = ChaCha8Rng::from_seed(*b"01234567890123456789012345678901");
        let mut source = RngSource(&mut rng);
        for bits in 1..=130u32 {
            for _ in 0..10 {
                let value = source.sample_bits(bits);
                assert_eq!(value.bits(), u64::from(bits));
            }
        }
        assert_eq!(source.sample_bits(0), BigUint::from(0u32));
    }

    #[test]
    fn random_bits_stays_below_the_bound() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for bits in 0..=70u64 {
            for _ in 0..10 {
                assert!(random_bits(&mut rng, bits).bits() <= bits);
            }
        }
    }

    #[test]
    fn sample_range_is_inclusive() {
        let mut rng = OsRng.unwrap_err();
        let mut source = RngSource(&mut rng);

        let low = BigUint::from(2u32);
        let high = BigUint::from(4u32);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let value = source.sample_range(&low, &high);
            assert!(value >= low && value <= high);
            let idx = (value - 2u32).to_usize().unwrap();
            seen[idx] = true;
        }
        assert_eq!(seen, [true; 3]);

        let single = BigUint::from(17u32);
        assert_eq!(source.sample_range(&single, &single), single);
    }

    #[test]
    #[should_panic(expected = "is empty")]
    fn sample_range_rejects_empty_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut source = RngSource(&mut rng);
        source.sample_range(&BigUint::from(3u32), &BigUint::from(2u32));
    }
}
