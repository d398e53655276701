//! Subject identifier assignment
//!
//! Identifiers are either sequential (`1..=count`) or drawn without
//! replacement from the primes in a bounded range. Prime mode shuffles the
//! sieved primes before taking `count` of them, so assigned IDs are spread
//! across the range rather than being the smallest primes in order.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Error, Result};
use crate::primes::{sieve_primes, SIEVE_LIMIT};

/// Identifier assignment mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdMode {
    /// IDs `1..=count` in order
    Sequential,
    /// Distinct primes sampled from `[min, max]` without replacement
    Prime { min: u64, max: u64 },
}

/// Assign `count` distinct positive identifiers.
///
/// Prime mode fails with [`Error::InsufficientPrimes`] when the range holds
/// fewer primes than requested, and with [`Error::Config`] when the upper
/// bound exceeds the sieve limit (the mark array would be allocated at that
/// size). Under a fixed generator seed the selection is exactly reproducible.
pub fn assign_ids<R: Rng>(count: usize, mode: &IdMode, rng: &mut R) -> Result<Vec<u64>> {
    match mode {
        IdMode::Sequential => Ok((1..=count as u64).collect()),
        IdMode::Prime { min, max } => {
            if *max > SIEVE_LIMIT {
                return Err(Error::Config(format!(
                    "prime ID range upper bound {max} exceeds sieve limit {SIEVE_LIMIT}"
                )));
            }
            let mut primes = sieve_primes(*min, *max);
            if primes.len() < count {
                return Err(Error::InsufficientPrimes {
                    requested: count,
                    available: primes.len(),
                    low: *min,
                    high: *max,
                });
            }
            primes.shuffle(rng);
            primes.truncate(count);
            Ok(primes)
        }
    }
}
