//! Prime-finding functions that can parallelize across multiple cores.

use core::num::NonZeroU64;

use num_bigint::BigUint;
use rand_core::{CryptoRng, SeedableRng};
use rayon::iter::{ParallelBridge, ParallelIterator};
use tracing::{debug, warn};

use crate::{
    error::Error,
    presets::{GenerateOptions, check_bit_length, is_probable_prime_unsigned, resolve_rounds},
    rng::RngSource,
    traits::RandomSource,
};

/// An iterator producing independent RNGs seeded from a parent RNG,
/// one for each candidate to be tested.
#[derive(Debug)]
struct Forks<'a, R> {
    rng: &'a mut R,
    remaining: u64,
}

impl<R> Iterator for Forks<'_, R>
where
    R: CryptoRng + SeedableRng,
{
    type Item = R;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(R::from_rng(&mut *self.rng))
    }
}

/// Returns a random probable prime of exactly `bit_length` bits using the provided RNG.
///
/// Uses `threadcount` threads to test candidates concurrently. Each candidate is sampled
/// and tested with its own RNG seeded from `rng`, so no random source is shared between threads.
///
/// See [`random_prime_with_options`](crate::random_prime_with_options) for the meaning of `options`
/// and the returned errors. In addition, returns [`Error::ThreadPool`]
/// if the platform is unable to spawn threads.
pub fn random_prime<R>(
    rng: &mut R,
    bit_length: u32,
    options: GenerateOptions,
    threadcount: usize,
) -> Result<BigUint, Error>
where
    R: CryptoRng + SeedableRng + Send,
{
    check_bit_length(bit_length)?;
    let rounds = resolve_rounds(options.rounds)?;

    let threadpool = rayon::ThreadPoolBuilder::new()
        .num_threads(threadcount)
        .build()
        .map_err(|_| Error::ThreadPool)?;

    let limit = options.max_attempts.map_or(u64::MAX, NonZeroU64::get);
    let forks = Forks { rng, remaining: limit };

    let found = threadpool.install(|| {
        forks.par_bridge().find_map_any(|mut rng| {
            let mut source = RngSource(&mut rng);
            let candidate = source.sample_bits(bit_length);
            is_probable_prime_unsigned(&mut source, &candidate, rounds).then_some(candidate)
        })
    });

    match found {
        Some(prime) => {
            debug!(bit_length, rounds, threadcount, "found a probable prime");
            Ok(prime)
        }
        None => {
            warn!(bit_length, attempts = limit, "no probable prime found within the attempt limit");
            Err(Error::AttemptsExhausted { attempts: limit })
        }
    }
}
