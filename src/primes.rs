//! Prime engine: sieve of Eratosthenes and consecutive prime gaps.
//!
//! The gap sequence g_n = p_{n+1} - p_n is the raw rhythm that drives the
//! cosmic blink pattern. A precomputed prime list can also be loaded from a
//! plain JSON array, bypassing the sieve.

use std::fs;
use std::path::Path;

use log::debug;
use serde_json::Number;

use crate::error::{Result, WhiteholeError};

/// All primes in [2, n_max], ascending. Empty for n_max < 2.
pub fn generate_primes(n_max: usize) -> Vec<u64> {
    if n_max < 2 {
        return Vec::new();
    }
    let mut is_prime = vec![true; n_max + 1];
    is_prime[0] = false;
    is_prime[1] = false;

    let mut i = 2;
    while i * i <= n_max {
        if is_prime[i] {
            for j in (i * i..=n_max).step_by(i) {
                is_prime[j] = false;
            }
        }
        i += 1;
    }

    is_prime
        .iter()
        .enumerate()
        .filter(|(_, p)| **p)
        .map(|(k, _)| k as u64)
        .collect()
}

/// Consecutive differences; length `primes.len() - 1` (empty for < 2 primes).
pub fn prime_gaps(primes: &[u64]) -> Vec<u64> {
    primes.windows(2).map(|w| w[1] - w[0]).collect()
}

/// An ordered prime sequence together with its gap sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimeGapSeries {
    primes: Vec<u64>,
    gaps: Vec<u64>,
}

impl PrimeGapSeries {
    /// Sieve all primes up to `n_max`.
    pub fn up_to(n_max: usize) -> Self {
        let primes = generate_primes(n_max);
        debug!("sieved {} primes up to {}", primes.len(), n_max);
        Self::from_sorted(primes)
    }

    /// Build from an externally supplied prime list.
    ///
    /// The list must be strictly ascending; primality is not re-checked.
    pub fn from_primes(primes: Vec<u64>) -> Result<Self> {
        if let Some(w) = primes.windows(2).find(|w| w[1] <= w[0]) {
            return Err(WhiteholeError::InvalidData(format!(
                "primes must be strictly ascending, found {} then {}",
                w[0], w[1]
            )));
        }
        Ok(Self::from_sorted(primes))
    }

    /// Parse a JSON array of numbers, e.g. `[2, 3, 5, 7]`.
    ///
    /// Integer literals are taken exactly. Float literals such as `7.0` are
    /// accepted only when integral and at most 2^53, the range in which an
    /// f64 represents every integer.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let values: Vec<Number> = serde_json::from_str(json)?;
        let primes = values.iter().map(json_to_u64).collect::<Result<Vec<_>>>()?;
        Self::from_primes(primes)
    }

    /// Load a precomputed prime list from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let series = Self::from_json_str(&text)?;
        debug!(
            "loaded {} primes from {}",
            series.primes.len(),
            path.as_ref().display()
        );
        Ok(series)
    }

    fn from_sorted(primes: Vec<u64>) -> Self {
        let gaps = prime_gaps(&primes);
        Self { primes, gaps }
    }

    pub fn primes(&self) -> &[u64] {
        &self.primes
    }

    pub fn gaps(&self) -> &[u64] {
        &self.gaps
    }

    /// Gaps as floating point, the form every statistic consumes.
    pub fn gaps_f64(&self) -> Vec<f64> {
        self.gaps.iter().map(|&g| g as f64).collect()
    }

    /// Largest gap, or None when there are no gaps.
    pub fn max_gap(&self) -> Option<u64> {
        self.gaps.iter().copied().max()
    }

    pub fn is_empty(&self) -> bool {
        self.gaps.is_empty()
    }
}

const MAX_EXACT_F64_INT: f64 = 9_007_199_254_740_992.0;

fn json_to_u64(n: &Number) -> Result<u64> {
    if let Some(v) = n.as_u64() {
        return Ok(v);
    }
    match n.as_f64() {
        Some(v) if v >= 0.0 && v.fract() == 0.0 && v <= MAX_EXACT_F64_INT => Ok(v as u64),
        _ => Err(WhiteholeError::InvalidData(format!(
            "expected a non-negative integer up to u64::MAX, found {}",
            n
        ))),
    }
}
