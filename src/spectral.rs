//! Spectral analysis of gap sequences and toy CMB signatures.
//!
//! # Gap spectrum
//!
//! Power P_k = |Σ_n g_n e^{-2πikn/N}|² via the FFT, reported against the
//! standard DFT frequency layout
//!
//! ```text
//! [0, 1, ..., ⌈N/2⌉-1, -⌊N/2⌋, ..., -1] / N
//! ```
//!
//! # CMB
//!
//! The blink rhythm is read as a modulation of the angular power spectrum,
//! M(ℓ) = sin(πℓ/100) · cos(ω(ℓ/100)). Deviations from a prediction are
//! scored with a plain chi-square Σ (o - p)² / (p + ε).

use num_complex::Complex64;
use rustfft::FftPlanner;

use crate::cosmology::CosmicBlinkPattern;
use crate::error::{Result, WhiteholeError};
use crate::units::{EPSILON, PI};

/// Frequencies of a length-`n` DFT in cycles per sample.
pub fn fft_frequencies(n: usize) -> Vec<f64> {
    let half = (n + 1) / 2;
    (0..n)
        .map(|k| {
            let signed = if k < half { k as f64 } else { k as f64 - n as f64 };
            signed / n as f64
        })
        .collect()
}

pub struct PrimeGapAnalyzer;

impl PrimeGapAnalyzer {
    /// (frequencies, |FFT|²) of the gap sequence.
    pub fn gap_spectrum(gaps: &[f64]) -> (Vec<f64>, Vec<f64>) {
        let n = gaps.len();
        if n == 0 {
            return (Vec::new(), Vec::new());
        }
        let mut buffer: Vec<Complex64> = gaps.iter().map(|&g| Complex64::new(g, 0.0)).collect();
        let mut planner = FftPlanner::<f64>::new();
        let fft = planner.plan_fft_forward(n);
        fft.process(&mut buffer);

        let power = buffer.iter().map(|z| z.norm_sqr()).collect();
        (fft_frequencies(n), power)
    }

    /// Mean-removed autocorrelation at lags 0..n-1, normalized so lag 0 is 1.
    ///
    /// A constant sequence has zero variance and yields all zeros.
    pub fn autocorrelation(gaps: &[f64]) -> Vec<f64> {
        let n = gaps.len();
        if n == 0 {
            return Vec::new();
        }
        let mean = gaps.iter().sum::<f64>() / n as f64;
        let centered: Vec<f64> = gaps.iter().map(|&g| g - mean).collect();

        let raw: Vec<f64> = (0..n)
            .map(|lag| {
                centered[lag..]
                    .iter()
                    .zip(&centered[..n - lag])
                    .map(|(a, b)| a * b)
                    .sum()
            })
            .collect();

        let zero_lag = raw[0];
        if zero_lag == 0.0 {
            return vec![0.0; n];
        }
        raw.iter().map(|&r| r / zero_lag).collect()
    }

    /// Index and frequency of the strongest non-DC spectral component.
    pub fn dominant_frequency(gaps: &[f64]) -> Option<(usize, f64)> {
        let (freqs, power) = Self::gap_spectrum(gaps);
        power
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(k, _)| freqs[*k] > 0.0)
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(k, _)| (k, freqs[k]))
    }
}

/// Blink-pattern signatures in the CMB angular power spectrum.
pub struct CmbAnalyzer<'a> {
    pattern: &'a CosmicBlinkPattern,
}

impl<'a> CmbAnalyzer<'a> {
    pub fn new(pattern: &'a CosmicBlinkPattern) -> Self {
        Self { pattern }
    }

    /// (ℓ, M(ℓ)) for ℓ in [2, ell_max).
    pub fn predicted_cmb_multipole_modulation(&self, ell_max: usize) -> (Vec<usize>, Vec<f64>) {
        let ells: Vec<usize> = (2..ell_max).collect();
        let modulation = ells
            .iter()
            .map(|&ell| {
                let x = ell as f64 / 100.0;
                (PI * x).sin() * self.pattern.quasiperiodic_modulation(x).cos()
            })
            .collect();
        (ells, modulation)
    }

    /// χ² = Σ (observed - predicted)² / (predicted + 1e-10)
    pub fn anomaly_significance(&self, observed_power: &[f64], predicted_power: &[f64]) -> Result<f64> {
        if observed_power.len() != predicted_power.len() {
            return Err(WhiteholeError::domain(
                "observed_power",
                observed_power.len() as f64,
                "length must match predicted_power",
            ));
        }
        Ok(observed_power
            .iter()
            .zip(predicted_power)
            .map(|(&o, &p)| {
                let residual = o - p;
                residual * residual / (p + EPSILON)
            })
            .sum())
    }
}

/// Two-peak mock CMB angular power spectrum for ℓ in [2, ell_max].
///
/// C_ℓ = 5000 exp(-(ℓ-220)²/10⁴) + 1000 exp(-(ℓ-550)²/22500)
pub fn mock_cmb_spectrum(ell_max: usize) -> (Vec<usize>, Vec<f64>) {
    let ells: Vec<usize> = (2..=ell_max).collect();
    let power = ells
        .iter()
        .map(|&ell| {
            let l = ell as f64;
            5000.0 * (-(l - 220.0).powi(2) / 10000.0).exp() + 1000.0 * (-(l - 550.0).powi(2) / 22500.0).exp()
        })
        .collect();
    (ells, power)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primes::PrimeGapSeries;
    use crate::units::{AGE_OF_UNIVERSE, PLANCK_TIME};
    use approx::assert_relative_eq;
    use num_traits::Zero;

    /// O(N²) DFT power, cross-checks the FFT path.
    fn naive_power_spectrum(signal: &[f64]) -> Vec<f64> {
        let n = signal.len();
        (0..n)
            .map(|k| {
                signal
                    .iter()
                    .enumerate()
                    .fold(Complex64::zero(), |acc, (j, &x)| {
                        acc + Complex64::from_polar(x, -2.0 * PI * (k * j) as f64 / n as f64)
                    })
                    .norm_sqr()
            })
            .collect()
    }

    fn gaps_below(n: usize) -> Vec<f64> {
        PrimeGapSeries::up_to(n).gaps_f64()
    }

    // ── Spectrum ───────────────────────────────────────────────────────

    #[test]
    fn frequencies_match_dft_layout() {
        assert_eq!(fft_frequencies(4), vec![0.0, 0.25, -0.5, -0.25]);
        assert_eq!(fft_frequencies(5), vec![0.0, 0.2, 0.4, -0.4, -0.2]);
        assert!(fft_frequencies(0).is_empty());
    }

    #[test]
    fn dc_power_is_squared_sum() {
        let gaps = gaps_below(100);
        let (freqs, power) = PrimeGapAnalyzer::gap_spectrum(&gaps);
        assert_eq!(freqs.len(), 24);
        assert_eq!(power.len(), 24);
        assert_relative_eq!(power[0], 95.0 * 95.0, max_relative = 1e-12);
    }

    #[test]
    fn fft_matches_naive_dft() {
        let gaps = gaps_below(500);
        let (_, fast) = PrimeGapAnalyzer::gap_spectrum(&gaps);
        let slow = naive_power_spectrum(&gaps);
        for (f, s) in fast.iter().zip(&slow) {
            assert_relative_eq!(*f, *s, epsilon = 1e-6, max_relative = 1e-9);
        }
    }

    #[test]
    fn parseval_holds() {
        let gaps = gaps_below(300);
        let (_, power) = PrimeGapAnalyzer::gap_spectrum(&gaps);
        let energy: f64 = gaps.iter().map(|g| g * g).sum();
        let spectral: f64 = power.iter().sum::<f64>() / gaps.len() as f64;
        assert_relative_eq!(energy, spectral, max_relative = 1e-10);
    }

    #[test]
    fn dominant_frequency_of_pure_tone() {
        let n = 64;
        let signal: Vec<f64> = (0..n).map(|j| (2.0 * PI * 5.0 * j as f64 / n as f64).cos()).collect();
        let (k, f) = PrimeGapAnalyzer::dominant_frequency(&signal).unwrap();
        assert_eq!(k, 5);
        assert_relative_eq!(f, 5.0 / 64.0);
    }

    #[test]
    fn empty_spectrum() {
        let (f, p) = PrimeGapAnalyzer::gap_spectrum(&[]);
        assert!(f.is_empty() && p.is_empty());
        assert!(PrimeGapAnalyzer::dominant_frequency(&[]).is_none());
    }

    // ── Autocorrelation ────────────────────────────────────────────────

    #[test]
    fn autocorrelation_starts_at_one() {
        for n in [30, 100, 1000] {
            let ac = PrimeGapAnalyzer::autocorrelation(&gaps_below(n));
            assert_relative_eq!(ac[0], 1.0, epsilon = 1e-12);
            assert!(ac.iter().all(|&r| r.abs() <= 1.0 + 1e-12));
        }
    }

    #[test]
    fn autocorrelation_known_values() {
        // centered [-1, 1, -1, 1]: lags give 4, -3, 2, -1
        let ac = PrimeGapAnalyzer::autocorrelation(&[0.0, 2.0, 0.0, 2.0]);
        assert_eq!(ac.len(), 4);
        assert_relative_eq!(ac[1], -0.75);
        assert_relative_eq!(ac[2], 0.5);
        assert_relative_eq!(ac[3], -0.25);
    }

    #[test]
    fn autocorrelation_of_constant_is_zero() {
        assert_eq!(PrimeGapAnalyzer::autocorrelation(&[2.0, 2.0, 2.0]), vec![0.0; 3]);
        assert!(PrimeGapAnalyzer::autocorrelation(&[]).is_empty());
    }

    // ── CMB ────────────────────────────────────────────────────────────

    #[test]
    fn multipole_modulation_range() {
        let pattern = CosmicBlinkPattern::new(100, PLANCK_TIME, AGE_OF_UNIVERSE).unwrap();
        let cmb = CmbAnalyzer::new(&pattern);
        let (ells, m) = cmb.predicted_cmb_multipole_modulation(100);
        assert_eq!(ells.len(), 98);
        assert_eq!(ells[0], 2);
        assert_eq!(*ells.last().unwrap(), 99);
        assert!(m.iter().all(|&x| x.abs() <= 1.0));

        let x: f64 = 0.5;
        let expected = (PI * x).sin() * pattern.quasiperiodic_modulation(x).cos();
        assert_relative_eq!(m[48], expected, epsilon = 1e-12);
    }

    #[test]
    fn multipole_modulation_empty_below_two() {
        let pattern = CosmicBlinkPattern::new(100, PLANCK_TIME, AGE_OF_UNIVERSE).unwrap();
        let (ells, m) = CmbAnalyzer::new(&pattern).predicted_cmb_multipole_modulation(2);
        assert!(ells.is_empty() && m.is_empty());
    }

    #[test]
    fn chi_square_values() {
        let pattern = CosmicBlinkPattern::new(100, PLANCK_TIME, AGE_OF_UNIVERSE).unwrap();
        let cmb = CmbAnalyzer::new(&pattern);
        assert_eq!(cmb.anomaly_significance(&[1.0, 2.0], &[1.0, 2.0]).unwrap(), 0.0);
        let chi2 = cmb.anomaly_significance(&[3.0, 1.0], &[1.0, 2.0]).unwrap();
        assert_relative_eq!(chi2, 4.0 + 0.5, epsilon = 1e-8);
        // zero prediction guarded by epsilon
        assert!(cmb.anomaly_significance(&[1.0], &[0.0]).unwrap().is_finite());
        assert!(cmb.anomaly_significance(&[1.0], &[1.0, 2.0]).is_err());
    }

    #[test]
    fn mock_cmb_peaks_at_220() {
        let (ells, power) = mock_cmb_spectrum(2000);
        assert_eq!(ells.len(), 1999);
        assert_eq!(*ells.last().unwrap(), 2000);
        let peak = power
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| ells[i])
            .unwrap();
        assert_eq!(peak, 220);
    }
}
