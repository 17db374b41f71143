//! Schwarzschild geometry, Kruskal-Szekeres extension and the quantum bounce.
//!
//! Natural units G = c = 1. For a hole of mass M:
//!
//! ```text
//! ds² = -(1 - 2M/r) dt² + (1 - 2M/r)⁻¹ dr² + r² (dθ² + sin²θ dφ²)
//! ```
//!
//! # Kruskal-Szekeres
//!
//! Outside the horizon (r > 2M):
//!   T_K = √(r/2M - 1) e^{r/4M} sinh(t/4M)
//!   R_K = √(r/2M - 1) e^{r/4M} cosh(t/4M)
//!
//! so R_K² - T_K² = (r/2M - 1) e^{r/2M} is constant along every orbit of
//! Schwarzschild time. The extended chart holds the black-hole, white-hole
//! and mirror regions.
//!
//! # Bounce
//!
//! Loop quantum gravity caps density at ρ_c = m_pl²; energies pick up the
//! factor √(1 - ρ/ρ_c), and the black → white transition is a pure phase
//! exp(i S_eff) in the WKB approximation.

use num_complex::Complex64;

use crate::error::{Result, WhiteholeError};
use crate::units::{critical_density, schwarzschild_radius, PLANCK_MASS};

/// Diagonal Schwarzschild metric components at a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricComponents {
    pub g_tt: f64,
    pub g_rr: f64,
    pub g_theta_theta: f64,
    pub g_phi_phi: f64,
}

/// A Schwarzschild hole with Planck-scale bounce corrections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackWhiteHoleSystem {
    /// Hole mass M (natural units)
    mass: f64,
    /// Planck mass m_pl for quantum corrections
    planck_mass: f64,
}

impl BlackWhiteHoleSystem {
    /// Hole of mass `mass` with the default Planck mass.
    pub fn new(mass: f64) -> Result<Self> {
        Self::with_planck_mass(mass, PLANCK_MASS)
    }

    pub fn with_planck_mass(mass: f64, planck_mass: f64) -> Result<Self> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(WhiteholeError::domain("mass", mass, "must be positive and finite"));
        }
        if !(planck_mass.is_finite() && planck_mass > 0.0) {
            return Err(WhiteholeError::domain(
                "planck_mass",
                planck_mass,
                "must be positive and finite",
            ));
        }
        Ok(Self { mass, planck_mass })
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn planck_mass(&self) -> f64 {
        self.planck_mass
    }

    /// r_s = 2M
    pub fn schwarzschild_radius(&self) -> f64 {
        schwarzschild_radius(self.mass)
    }

    /// ρ_c = m_pl²
    pub fn critical_density(&self) -> f64 {
        critical_density(self.planck_mass)
    }

    fn check_exterior(&self, r: f64) -> Result<()> {
        // NaN fails the comparison and is rejected too
        if r > self.schwarzschild_radius() {
            Ok(())
        } else {
            Err(WhiteholeError::domain("r", r, "inside event horizon"))
        }
    }

    /// Metric components on the polar axis (θ = 0).
    pub fn schwarzschild_metric(&self, r: f64) -> Result<MetricComponents> {
        self.schwarzschild_metric_at(r, 0.0)
    }

    /// Metric components at radius `r` and polar angle `theta`.
    pub fn schwarzschild_metric_at(&self, r: f64, theta: f64) -> Result<MetricComponents> {
        self.check_exterior(r)?;
        let lapse = 1.0 - 2.0 * self.mass / r;
        let sin_theta = theta.sin();
        Ok(MetricComponents {
            g_tt: -lapse,
            g_rr: 1.0 / lapse,
            g_theta_theta: r * r,
            g_phi_phi: r * r * sin_theta * sin_theta,
        })
    }

    /// Map Schwarzschild (t, r) to Kruskal-Szekeres (T_K, R_K).
    pub fn kruskal_szekeres_transform(&self, t: f64, r: f64) -> Result<(f64, f64)> {
        self.check_exterior(r)?;
        let m = self.mass;
        let factor = (r / (2.0 * m) - 1.0).sqrt() * (r / (4.0 * m)).exp();
        let tau = t / (4.0 * m);
        Ok((factor * tau.sinh(), factor * tau.cosh()))
    }

    /// E' = E √(1 - ρ/ρ_c).
    ///
    /// Densities above ρ_c would need an imaginary correction and are
    /// rejected.
    pub fn quantum_bounce_correction(&self, energy: f64, density: f64) -> Result<f64> {
        let rho_c = self.critical_density();
        if density > rho_c || density.is_nan() {
            return Err(WhiteholeError::domain("density", density, "exceeds critical Planck density"));
        }
        Ok(energy * (1.0 - density / rho_c).sqrt())
    }

    /// A_BW = exp(i · rhythm · (M²/m_pl) · t), a unit-modulus phase.
    pub fn black_to_white_transition_amplitude(&self, time_planck: f64, rhythm_modulation: f64) -> Complex64 {
        let action = (self.mass * self.mass / self.planck_mass) * time_planck;
        Complex64::from_polar(1.0, rhythm_modulation * action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn unit_hole() -> BlackWhiteHoleSystem {
        BlackWhiteHoleSystem::new(1.0).unwrap()
    }

    // ── Metric ─────────────────────────────────────────────────────────

    #[test]
    fn metric_at_r10() {
        let g = unit_hole().schwarzschild_metric(10.0).unwrap();
        assert_relative_eq!(g.g_tt, -0.8, epsilon = 1e-12);
        assert_relative_eq!(g.g_rr, 1.25, epsilon = 1e-12);
        assert_eq!(g.g_theta_theta, 100.0);
        assert_eq!(g.g_phi_phi, 0.0);
    }

    #[test]
    fn metric_signature_outside_horizon() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let mass: f64 = rng.gen_range(0.1..10.0);
            let hole = BlackWhiteHoleSystem::new(mass).unwrap();
            let r = 2.0 * mass * (1.0 + rng.gen_range(1e-6..50.0));
            let g = hole.schwarzschild_metric(r).unwrap();
            assert!(g.g_tt < 0.0 && g.g_rr > 0.0, "M={} r={}: {:?}", mass, r, g);
            assert_relative_eq!(g.g_rr * (1.0 - 2.0 * mass / r), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn metric_rejects_horizon_and_interior() {
        let hole = unit_hole();
        for r in [2.0, 1.999, 1.0, 0.0, -3.0, f64::NAN] {
            let err = hole.schwarzschild_metric(r).unwrap_err();
            assert_eq!(err.param(), Some("r"));
        }
    }

    #[test]
    fn metric_equatorial_phi_component() {
        let g = unit_hole().schwarzschild_metric_at(10.0, std::f64::consts::FRAC_PI_2).unwrap();
        assert_relative_eq!(g.g_phi_phi, 100.0, epsilon = 1e-9);
    }

    // ── Kruskal-Szekeres ───────────────────────────────────────────────

    #[test]
    fn kruskal_hyperbola_invariant() {
        let hole = BlackWhiteHoleSystem::new(1.5).unwrap();
        for r in [3.1, 4.0, 7.5, 12.0] {
            let m = hole.mass();
            let factor = (r / (2.0 * m) - 1.0).sqrt() * (r / (4.0 * m)).exp();
            for t in [-8.0, -1.0, 0.0, 0.5, 3.0, 10.0] {
                let (tk, rk) = hole.kruskal_szekeres_transform(t, r).unwrap();
                assert_relative_eq!(rk * rk - tk * tk, factor * factor, max_relative = 1e-9);
            }
        }
    }

    #[test]
    fn kruskal_at_zero_time_is_on_axis() {
        let (tk, rk) = unit_hole().kruskal_szekeres_transform(0.0, 4.0).unwrap();
        assert_eq!(tk, 0.0);
        assert!(rk > 0.0);
    }

    #[test]
    fn kruskal_rejects_interior() {
        assert!(unit_hole().kruskal_szekeres_transform(1.0, 2.0).is_err());
    }

    // ── Bounce and transition ──────────────────────────────────────────

    #[test]
    fn bounce_correction_values() {
        let hole = BlackWhiteHoleSystem::with_planck_mass(1.0, 2.0).unwrap();
        assert_eq!(hole.critical_density(), 4.0);
        assert_relative_eq!(hole.quantum_bounce_correction(10.0, 0.0).unwrap(), 10.0);
        assert_relative_eq!(hole.quantum_bounce_correction(10.0, 3.0).unwrap(), 5.0, epsilon = 1e-12);
        assert_eq!(hole.quantum_bounce_correction(10.0, 4.0).unwrap(), 0.0);
    }

    #[test]
    fn bounce_above_critical_density_is_domain_error() {
        let hole = unit_hole();
        let err = hole.quantum_bounce_correction(1.0, 1.0).unwrap_err();
        assert_eq!(err.param(), Some("density"));
    }

    #[test]
    fn transition_amplitude_is_unit_modulus() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let hole = BlackWhiteHoleSystem::new(rng.gen_range(0.1..5.0)).unwrap();
            let t: f64 = rng.gen_range(-1e-6..1e-6);
            let rhythm: f64 = rng.gen_range(-3.0..3.0);
            let amp = hole.black_to_white_transition_amplitude(t, rhythm);
            assert_relative_eq!(amp.norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn transition_amplitude_at_zero_time() {
        let amp = unit_hole().black_to_white_transition_amplitude(0.0, 1.0);
        assert_relative_eq!(amp.re, 1.0);
        assert_relative_eq!(amp.im, 0.0);
    }

    #[test]
    fn invalid_mass_rejected() {
        for m in [0.0, -1.0, f64::INFINITY, f64::NAN] {
            let err = BlackWhiteHoleSystem::new(m).unwrap_err();
            assert_eq!(err.param(), Some("mass"));
        }
    }
}
