//! Cosmic blinking driven by the prime gap sequence.
//!
//! The universe "blinks" at times t_n = (Σ_{k≤n} g_k) · t_P / max(g): the
//! cumulative gap sequence rescaled so the largest gap spans one Planck time.
//! Superposed on the blinks is a quasiperiodic rhythm
//!
//!   ω(t) = cos(2π φ₁ t) + cos(2π φ₂ t),   φ₁/φ₂ = golden ratio
//!
//! whose incommensurate frequencies never realign.
//!
//! Every statistic below is a read-only projection of the gap sequence,
//! recomputed on each call.

use log::debug;

use crate::error::{Result, WhiteholeError};
use crate::primes::PrimeGapSeries;
use crate::units::{EPSILON, GOLDEN_RATIO, PI};

/// Window within which a blink counts as coincident with t.
pub const BLINK_TOLERANCE: f64 = 1e-10;

/// Number of logarithmic scales in the box-counting fit.
pub const FRACTAL_SCALES: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct CosmicBlinkPattern {
    series: PrimeGapSeries,
    planck_time: f64,
    /// Age of the universe in seconds (age in Planck times × t_P)
    universe_time: f64,
    blink_times: Vec<f64>,
}

impl CosmicBlinkPattern {
    /// Sieve primes up to `n_primes` and derive the blink schedule.
    pub fn new(n_primes: usize, planck_time: f64, age_of_universe: f64) -> Result<Self> {
        Self::from_series(PrimeGapSeries::up_to(n_primes), planck_time, age_of_universe)
    }

    /// Use an existing (possibly precomputed) prime series.
    pub fn from_series(series: PrimeGapSeries, planck_time: f64, age_of_universe: f64) -> Result<Self> {
        let max_gap = match series.max_gap() {
            Some(g) if g > 0 => g as f64,
            _ => {
                return Err(WhiteholeError::domain(
                    "n_primes",
                    series.primes().len() as f64,
                    "blink pattern needs at least two primes",
                ))
            }
        };
        if !(planck_time.is_finite() && planck_time > 0.0) {
            return Err(WhiteholeError::domain("planck_time", planck_time, "must be positive and finite"));
        }
        if !(age_of_universe.is_finite() && age_of_universe > 0.0) {
            return Err(WhiteholeError::domain(
                "age_of_universe",
                age_of_universe,
                "must be positive and finite",
            ));
        }

        let scale = planck_time / max_gap;
        let blink_times = series
            .gaps()
            .iter()
            .scan(0u64, |acc, &g| {
                *acc += g;
                Some(*acc as f64 * scale)
            })
            .collect::<Vec<_>>();

        debug!(
            "blink pattern: {} primes, {} blinks, max gap {}",
            series.primes().len(),
            blink_times.len(),
            max_gap
        );

        Ok(Self {
            series,
            planck_time,
            universe_time: age_of_universe * planck_time,
            blink_times,
        })
    }

    pub fn series(&self) -> &PrimeGapSeries {
        &self.series
    }

    pub fn primes(&self) -> &[u64] {
        self.series.primes()
    }

    pub fn gaps(&self) -> &[u64] {
        self.series.gaps()
    }

    pub fn planck_time(&self) -> f64 {
        self.planck_time
    }

    pub fn universe_time(&self) -> f64 {
        self.universe_time
    }

    /// Monotone non-decreasing blink instants (seconds).
    pub fn blink_times(&self) -> &[f64] {
        &self.blink_times
    }

    fn max_gap(&self) -> f64 {
        // Non-empty and positive, checked at construction
        self.series.max_gap().unwrap_or(1) as f64
    }

    /// Discrete δ(t - t_n): number of blinks within 1e-10 of `t`.
    ///
    /// Blink instants sit near the Planck scale, so for arbitrary macroscopic
    /// `t` this is zero.
    pub fn blink_operator(&self, t: f64) -> usize {
        self.blink_times
            .iter()
            .filter(|&&tb| (t - tb).abs() < BLINK_TOLERANCE)
            .count()
    }

    /// ω(t) with φ₁ = 1 and φ₂ = φ₁/golden.
    pub fn quasiperiodic_modulation(&self, t: f64) -> f64 {
        quasiperiodic_modulation(t, 1.0, 1.0 / GOLDEN_RATIO)
    }

    /// ω(t) with explicit frequencies; `phi_2 = None` means φ₁/golden.
    pub fn quasiperiodic_modulation_with(&self, t: f64, phi_1: f64, phi_2: Option<f64>) -> f64 {
        quasiperiodic_modulation(t, phi_1, phi_2.unwrap_or(phi_1 / GOLDEN_RATIO))
    }

    /// Gaps min-max rescaled to [-1, 1]. A constant sequence maps to all -1.
    pub fn eigenvalue_bifurcation_sequence(&self) -> Vec<f64> {
        let gaps = self.series.gaps_f64();
        let min = gaps.iter().copied().fold(f64::INFINITY, f64::min);
        let max = gaps.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let range = max - min;
        gaps.iter()
            .map(|&g| if range > 0.0 { 2.0 * (g - min) / range - 1.0 } else { -1.0 })
            .collect()
    }

    /// gap[index] / max(gap); 0 for an index past the last gap.
    pub fn multiverse_branching_probability(&self, blink_index: usize) -> f64 {
        match self.series.gaps().get(blink_index) {
            Some(&g) => g as f64 / self.max_gap(),
            None => 0.0,
        }
    }

    /// Shannon entropy (bits) of the gaps read as unnormalized weights.
    pub fn information_content_blink(&self) -> f64 {
        let gaps = self.series.gaps_f64();
        let total: f64 = gaps.iter().sum();
        let entropy: f64 = gaps
            .iter()
            .map(|&g| {
                let p = g / total;
                -p * (p + EPSILON).log2()
            })
            .sum();
        entropy.max(0.0)
    }

    /// Box-counting dimension of the gap distribution.
    ///
    /// At each of 20 scales s, log-spaced from 1 to max(gap), counts the gaps
    /// with (g mod s) < s/2, then fits log10(count + 1) against log10(s) and
    /// returns the negated slope. A single scale (max gap 1) gives 0.
    pub fn fractal_dimension(&self) -> f64 {
        let gaps = self.series.gaps_f64();
        let log_max = self.max_gap().log10();

        let mut xs = Vec::with_capacity(FRACTAL_SCALES);
        let mut ys = Vec::with_capacity(FRACTAL_SCALES);
        for i in 0..FRACTAL_SCALES {
            let log_scale = log_max * i as f64 / (FRACTAL_SCALES - 1) as f64;
            let scale = 10f64.powf(log_scale);
            let count = gaps.iter().filter(|&&g| g % scale < scale / 2.0).count();
            xs.push(scale.log10());
            ys.push((count as f64 + 1.0).log10());
        }

        -least_squares_slope(&xs, &ys)
    }
}

/// cos(2π φ₁ t) + cos(2π φ₂ t)
pub fn quasiperiodic_modulation(t: f64, phi_1: f64, phi_2: f64) -> f64 {
    (2.0 * PI * phi_1 * t).cos() + (2.0 * PI * phi_2 * t).cos()
}

/// Slope of the ordinary least-squares line through (x, y); 0 when x is constant.
fn least_squares_slope(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len() as f64;
    if n == 0.0 {
        return 0.0;
    }
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;
    let (sxy, sxx) = xs
        .iter()
        .zip(ys)
        .fold((0.0, 0.0), |(sxy, sxx), (&x, &y)| {
            (sxy + (x - mean_x) * (y - mean_y), sxx + (x - mean_x) * (x - mean_x))
        });
    if sxx > 0.0 {
        sxy / sxx
    } else {
        0.0
    }
}
