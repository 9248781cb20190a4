//! Error bounds of the Miller-Rabin test with random bases,
//! for choosing the number of rounds.

/// Calculates `base^exp`.
const fn powi(mut base: f64, mut exp: u32) -> f64 {
    let mut result = 1.;
    while exp > 0 {
        if exp & 1 == 1 {
            result *= base;
        }
        base *= base;
        exp >>= 1;
    }
    result
}

/// Returns the worst-case probability `4^(-rounds)` that a composite passes `rounds`
/// Miller-Rabin checks with independent random bases.
pub const fn error_bound(rounds: u32) -> f64 {
    powi(0.25, rounds)
}

/// Returns the smallest number of rounds (at least 1) for which [`error_bound`]
/// does not exceed `2^(-log2_target)`.
pub fn rounds_for_error_bound(log2_target: u32) -> u32 {
    log2_target.div_ceil(2).max(1)
}

/**
Returns the probability `p_{k,t}` that an odd `k`-bit integer chosen at random which passes `t` rounds
of MR testing with random bases is actually composite.

Taken from FIPS-186.5[^FIPS], Section C.1, Eq. (2); FIPS in turn quotes Damgård et al[^Damgard].
There it can be found as Eq. (4.1), with the factors bounded by Proposition 1 and Proposition 2 in Section 4.

For sufficiently large `k` (`k ≥ 51`) it holds that `p_{k,t} ≤ 4^{–t}`, so this average-case bound
is never worse than [`error_bound`] for candidates produced by random sampling.

[^FIPS]: FIPS-186.5 standard, <https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.186-5.pdf>
[^Damgard]:
    Damgård I, Landrock P, Pomerance C (1993) Average Case Error Estimates for the Strong
    Probable Prime Test. Mathematics of Computation 61(203):177-194 (1993),
    <https://www.ams.org/journals/mcom/1993-61-203/S0025-5718-1993-1189518-9/S0025-5718-1993-1189518-9.pdf>
*/
fn pseudoprime_probability(k: u32, t: u32, cap_m: u32) -> f64 {
    // Eq. (2) from [^FIPS] with `2^{k-2}` factored out:
    // p_{k,t} = 2.00743 ln(2) k 2^{-2} (
    //     2^{-Mt} +
    //     8 (pi^2 - 6) / 3 * sum(m=3..M) sum(j=2..m) 2^{m - (m-1)t - j - (k-1)/j})
    let k_f = f64::from(k);
    let t_f = f64::from(t);

    let mut s = 0.;
    for m in 3..=cap_m {
        let m_f = f64::from(m);
        for j in 2..=m {
            let j_f = f64::from(j);
            s += libm::exp2(m_f - (m_f - 1.) * t_f - j_f - (k_f - 1.) / j_f);
        }
    }

    const PI: f64 = core::f64::consts::PI;

    // `2.00743 * ln(2) * 2^(-2)`
    const COEFF: f64 = 0.3478611111678627;

    COEFF * k_f * (libm::exp2(-f64::from(cap_m) * t_f) + 8. * (PI * PI - 6.) / 3. * s)
}

/// For a random candidate of size `bit_length`, returns the minimum number of Miller-Rabin tests with
/// random bases required for the probability of the candidate being composite after passing them all
/// to be smaller than `2^{-log2_target}`.
///
/// Returns `None` if the number of iterations could not be found for the given bounds.
///
/// This function implements the formula prescribed by the FIPS.186-5 standard[^FIPS].
/// Note that it is an average-case bound that only applies to randomly generated candidates
/// (such as the ones tested by [`random_prime`](crate::random_prime)); for validating numbers
/// from an untrusted party use [`rounds_for_error_bound`].
///
/// [^FIPS]: FIPS-186.5 standard, <https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.186-5.pdf>
pub fn minimum_mr_iterations(bit_length: u32, log2_target: u32) -> Option<u32> {
    if bit_length < 2 {
        return None;
    }
    let cap_m_limit = (libm::floor(libm::sqrt(4. * f64::from(bit_length - 1))) as u32).saturating_sub(1);
    let target = powi(0.5, log2_target);

    (1..=log2_target.div_ceil(2)).find(|&t| {
        (3..=cap_m_limit).any(|cap_m| pseudoprime_probability(bit_length, t, cap_m) < target)
    })
}
