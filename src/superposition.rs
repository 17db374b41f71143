//! Two-level superposition of black- and white-hole states.
//!
//!   |Ψ_BW⟩ = α|Black⟩ + β e^{iφ}|White⟩
//!
//! The density matrix ρ = |Ψ⟩⟨Ψ| is rank one by construction, so the purity
//! is (|α|² + |β|²)². For a unit-norm state the von Neumann entropy is zero.
//! Amplitudes are not renormalized: an unnormalized state has a single
//! eigenvalue λ = ‖ψ‖² and reports -λ log₂ λ, which may be negative.

use nalgebra::{Matrix2, SymmetricEigen, Vector2};
use num_complex::Complex64;

use crate::units::EIGEN_CUTOFF;

const ROUNDING_TOLERANCE: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuperpositionState {
    pub alpha: Complex64,
    pub beta: Complex64,
    /// Relative phase φ between the black and white components
    pub phase_diff: f64,
}

impl Default for SuperpositionState {
    fn default() -> Self {
        let amp = Complex64::new(std::f64::consts::FRAC_1_SQRT_2, 0.0);
        Self { alpha: amp, beta: amp, phase_diff: 0.0 }
    }
}

impl SuperpositionState {
    pub fn new(alpha: Complex64, beta: Complex64, phase_diff: f64) -> Self {
        Self { alpha, beta, phase_diff }
    }

    /// Real amplitudes, the common case.
    pub fn from_real(alpha: f64, beta: f64, phase_diff: f64) -> Self {
        Self::new(Complex64::new(alpha, 0.0), Complex64::new(beta, 0.0), phase_diff)
    }

    /// (α, β e^{iφ})
    pub fn state_vector(&self) -> Vector2<Complex64> {
        Vector2::new(self.alpha, self.beta * Complex64::from_polar(1.0, self.phase_diff))
    }

    /// ‖ψ‖ = √(|α|² + |β|²)
    pub fn norm(&self) -> f64 {
        self.state_vector().norm()
    }

    /// Same state rescaled to unit norm; a zero vector is returned unchanged.
    pub fn normalized(&self) -> Self {
        let n = self.norm();
        if n == 0.0 {
            return *self;
        }
        Self::new(self.alpha / n, self.beta / n, self.phase_diff)
    }

    /// ρ = ψψ†
    pub fn density_matrix(&self) -> Matrix2<Complex64> {
        let psi = self.state_vector();
        psi * psi.adjoint()
    }

    /// Tr(ρ²)
    pub fn purity(&self) -> f64 {
        let rho = self.density_matrix();
        (rho * rho).trace().re
    }

    /// S = -Σ λ log₂ λ over the eigenvalues of ρ above the numerical-zero cutoff.
    ///
    /// Zero only for unit-norm states; see [`normalized`](Self::normalized).
    pub fn entanglement_entropy(&self) -> f64 {
        let eigen = SymmetricEigen::new(self.density_matrix());
        let s: f64 = eigen
            .eigenvalues
            .iter()
            .filter(|&&lam| lam > EIGEN_CUTOFF)
            .map(|&lam| -lam * lam.log2())
            .sum();
        // rounding noise around the pure-state zero
        if s < 0.0 && s > -ROUNDING_TOLERANCE {
            0.0
        } else {
            s
        }
    }
}
