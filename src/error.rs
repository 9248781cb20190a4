use core::fmt;

/// Errors returned by the crate's API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The requested bit length is too small for a meaningful prime.
    BitLengthTooSmall {
        /// The requested bit length.
        bit_length: u32,
        /// The smallest bit length accepted by the generators.
        min: u32,
    },
    /// An explicitly requested number of Miller-Rabin rounds was zero.
    InvalidRounds,
    /// Modular exponentiation was asked to reduce modulo zero.
    ZeroModulus,
    /// The configured cap on sampled candidates was reached before a prime was found.
    AttemptsExhausted {
        /// The number of candidates that were sampled and rejected.
        attempts: u64,
    },
    /// The thread pool used for parallel prime search could not be created.
    #[cfg(feature = "multicore")]
    ThreadPool,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Error::BitLengthTooSmall { bit_length, min } => write!(
                f,
                concat![
                    "The requested bit length of the candidate ({}) ",
                    "is too small for a meaningful prime (at least {} bits are required)."
                ],
                bit_length, min
            ),
            Error::InvalidRounds => write!(f, "The number of Miller-Rabin rounds must be 1 or greater."),
            Error::ZeroModulus => write!(f, "Modular exponentiation with a zero modulus."),
            Error::AttemptsExhausted { attempts } => write!(
                f,
                "No probable prime was found within the limit of {} sampled candidates.",
                attempts
            ),
            #[cfg(feature = "multicore")]
            Error::ThreadPool => write!(f, "The thread pool for the parallel prime search could not be created."),
        }
    }
}

impl core::error::Error for Error {}
