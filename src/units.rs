//! Physical constants and numeric guards.
//!
//! Natural units (G = c = ℏ = 1) throughout the spacetime layer; the
//! cosmology layer carries Planck time in seconds.

/// Pi
pub const PI: f64 = std::f64::consts::PI;

/// Planck mass (kg); sets the critical bounce density ρ_c = m_pl²
pub const PLANCK_MASS: f64 = 2.176e-8;

/// Planck time (s)
pub const PLANCK_TIME: f64 = 5.39e-44;

/// Age of the universe in Planck times
pub const AGE_OF_UNIVERSE: f64 = 4.4e17;

/// Golden ratio φ = (1 + √5)/2, the incommensurate rhythm ratio
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Additive guard for near-zero denominators and log arguments
pub const EPSILON: f64 = 1e-10;

/// Eigenvalues below this are treated as numerical zeros
pub const EIGEN_CUTOFF: f64 = 1e-10;

/// Schwarzschild radius r_s = 2M (natural units)
pub fn schwarzschild_radius(mass: f64) -> f64 {
    2.0 * mass
}

/// Critical (Planck) density ρ_c = m_pl²
pub fn critical_density(planck_mass: f64) -> f64 {
    planck_mass * planck_mass
}
