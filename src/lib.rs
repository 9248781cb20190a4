#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications,
    clippy::unwrap_used
)]

extern crate alloc;

mod error;
pub mod hazmat;
mod presets;
mod rng;
mod traits;

#[cfg(feature = "multicore")]
pub mod multicore;

pub use error::Error;
pub use hazmat::mod_pow;
pub use presets::{
    DEFAULT_ERROR_BOUND, DEFAULT_ROUNDS, GenerateOptions, MIN_BIT_LENGTH, is_probable_prime,
    is_probable_prime_with_rng, random_prime, random_prime_with_options, random_prime_with_rng,
};
#[cfg(feature = "default-rng")]
pub use presets::{generate_prime, is_prime};
pub use rng::RngSource;
pub use traits::{ProbablePrime, RandomSource};

pub use num_bigint::{BigInt, BigUint};
