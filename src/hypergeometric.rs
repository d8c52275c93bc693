//! Hypergeometric point probabilities in log space
//!
//! P(X = x) for drawing `col1` items without replacement from a population of
//! `row1 + row2` in which `row1` count as successes. Binomial coefficients
//! are summed as `ln C(n,k)` terms and exponentiated once at the end, so no
//! intermediate factorial can overflow.

use crate::log_factorial::ln_factorial;

/// `ln C(n, k)`.
///
/// `k` is signed so callers can probe outside the support (`k < 0` or
/// `k > n`) and get `-inf` back, which collapses to probability 0 after
/// exponentiation.
pub fn ln_choose(n: u64, k: i64) -> f64 {
    if k < 0 || k as u64 > n {
        return f64::NEG_INFINITY;
    }
    let k = k as u64;
    ln_factorial(n as usize) - ln_factorial(k as usize) - ln_factorial((n - k) as usize)
}

/// Hypergeometric point probability P(X = x).
///
/// `row1`, `row2`, `col1` are the margins of a real contingency table, so
/// `col1 <= row1 + row2` always holds. Combinatorially impossible `x` yields
/// exactly 0.
pub fn hypergeom_prob(x: i64, row1: u64, row2: u64, col1: u64) -> f64 {
    let n = row1 + row2;
    let log_p =
        ln_choose(row1, x) + ln_choose(row2, col1 as i64 - x) - ln_choose(n, col1 as i64);
    log_p.exp()
}

/// Support bounds `[max(0, col1 - row2), min(row1, col1)]` of the
/// distribution with the given margins. Both ends inclusive.
pub fn support(row1: u64, row2: u64, col1: u64) -> (u64, u64) {
    (col1.saturating_sub(row2), row1.min(col1))
}
