//! Prime number generation for subject and session identifiers
//!
//! Uses a sieve of Eratosthenes over `[0, high]`, then filters to the
//! requested lower bound. Ranges are small in practice (identifier pools for
//! a few dozen subjects), so the O(high log log high) sieve is more than
//! adequate.

/// Largest sieve upper bound accepted for identifier generation.
///
/// Bounds the mark array allocation below; identifier ranges beyond this are
/// rejected as a configuration error before any allocation happens.
pub const SIEVE_LIMIT: u64 = 10_000_000;

/// Generate all primes in `[low, high]`, ascending.
///
/// Returns an empty vector when `high < 2` or `low > high`. Callers taking
/// `high` from user input must cap it at [`SIEVE_LIMIT`] first; the mark
/// array is allocated at `high + 1` entries.
pub fn sieve_primes(low: u64, high: u64) -> Vec<u64> {
    if high < 2 || low > high {
        return Vec::new();
    }

    let limit = high as usize;
    let mut composite = vec![false; limit + 1];
    let mut p = 2usize;
    while p * p <= limit {
        if !composite[p] {
            let mut multiple = p * p;
            while multiple <= limit {
                composite[multiple] = true;
                multiple += p;
            }
        }
        p += 1;
    }

    let start = low.max(2) as usize;
    (start..=limit)
        .filter(|&n| !composite[n])
        .map(|n| n as u64)
        .collect()
}
