//! Linguistic operator algebra: Subject, Verb, Object and the measurement Eye.
//!
//! # Operator families
//!
//! **Pauli (d = 2)**: S = σx (flip), V = σy (phase-space rotation),
//! O = σz (measurement basis). All three are Hermitian, traceless and
//! involutory, and pairwise non-commuting.
//!
//! **Generalized (d > 2)**: S is the cyclic shift, V = diag(e^{2πik/d}) the
//! clock matrix, O = |d-1⟩⟨d-1| projects onto the final state. Only O is
//! Hermitian here.
//!
//! # Hamiltonian
//!
//!   H_ling = g (S⊗V + V⊗O + h.c.)   for d = 2   (4×4)
//!   H_ling = g (S + V + O)           for d > 2   (d×d)
//!
//! The two branches disagree on output dimension; callers must size the
//! initial state from [`LinguisticOperators::hamiltonian_dim`].

use nalgebra::{DMatrix, DVector, SymmetricEigen};
use num_complex::Complex64;
use num_traits::{One, Zero};
use serde::Serialize;

use crate::error::{Result, WhiteholeError};
use crate::units::PI;

/// Elementwise tolerance for Hermiticity checks.
const HERMITIAN_TOL: f64 = 1e-8;

/// Taylor terms in the scaled matrix exponential.
const EXP_TAYLOR_TERMS: usize = 20;

pub type CMatrix = DMatrix<Complex64>;
pub type CVector = DVector<Complex64>;

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

/// Operator family, selected once from the Hilbert space dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinguisticOperators {
    /// d = 2, Pauli matrices
    Pauli,
    /// d > 2, clock/shift/projector construction
    Generalized { dim: usize },
}

impl Default for LinguisticOperators {
    fn default() -> Self {
        LinguisticOperators::Pauli
    }
}

/// Self-check of the operator algebra.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StructureReport {
    pub s_norm: f64,
    pub v_norm: f64,
    pub o_norm: f64,
    /// ‖[V, S]‖
    pub vs_commutator_norm: f64,
    /// ‖[O, V]‖
    pub ov_commutator_norm: f64,
    pub s_hermitian: bool,
    pub v_hermitian: bool,
    pub o_hermitian: bool,
}

impl LinguisticOperators {
    pub fn new(dimension: usize) -> Result<Self> {
        match dimension {
            0 | 1 => Err(WhiteholeError::domain(
                "dimension",
                dimension as f64,
                "operator algebra needs at least two states",
            )),
            2 => Ok(LinguisticOperators::Pauli),
            dim => Ok(LinguisticOperators::Generalized { dim }),
        }
    }

    /// Hilbert space dimension d of a single operator.
    pub fn dimension(&self) -> usize {
        match *self {
            LinguisticOperators::Pauli => 2,
            LinguisticOperators::Generalized { dim } => dim,
        }
    }

    /// Dimension of [`Self::linguistic_hamiltonian`]: d² for Pauli, d otherwise.
    pub fn hamiltonian_dim(&self) -> usize {
        match *self {
            LinguisticOperators::Pauli => 4,
            LinguisticOperators::Generalized { dim } => dim,
        }
    }

    /// Subject S: agent of the action.
    pub fn subject_operator(&self) -> CMatrix {
        match *self {
            LinguisticOperators::Pauli => {
                CMatrix::from_row_slice(2, 2, &[c(0.0, 0.0), c(1.0, 0.0), c(1.0, 0.0), c(0.0, 0.0)])
            }
            LinguisticOperators::Generalized { dim } => {
                let mut s = CMatrix::zeros(dim, dim);
                s[(dim - 1, 0)] = Complex64::one();
                for i in 0..dim - 1 {
                    s[(i, i + 1)] = Complex64::one();
                }
                s
            }
        }
    }

    /// Verb V: transference between subject and object.
    pub fn verb_operator(&self) -> CMatrix {
        match *self {
            LinguisticOperators::Pauli => {
                CMatrix::from_row_slice(2, 2, &[c(0.0, 0.0), c(0.0, -1.0), c(0.0, 1.0), c(0.0, 0.0)])
            }
            LinguisticOperators::Generalized { dim } => {
                let roots = CVector::from_iterator(
                    dim,
                    (0..dim).map(|k| Complex64::from_polar(1.0, 2.0 * PI * k as f64 / dim as f64)),
                );
                CMatrix::from_diagonal(&roots)
            }
        }
    }

    /// Object O: recipient of the action.
    pub fn object_operator(&self) -> CMatrix {
        match *self {
            LinguisticOperators::Pauli => {
                CMatrix::from_row_slice(2, 2, &[c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0)])
            }
            LinguisticOperators::Generalized { dim } => {
                let mut o = CMatrix::zeros(dim, dim);
                o[(dim - 1, dim - 1)] = Complex64::one();
                o
            }
        }
    }

    /// Eye E: symmetric coupling of the observer to the S-V-O chain.
    pub fn measurement_eye_operator(&self) -> CMatrix {
        match *self {
            LinguisticOperators::Pauli => {
                CMatrix::from_row_slice(2, 2, &[c(1.0, 0.0), c(0.5, 0.0), c(0.5, 0.0), c(1.0, 0.0)])
                    / c(1.5, 0.0)
            }
            LinguisticOperators::Generalized { dim } => {
                let d = dim as f64;
                let coupling = CMatrix::identity(dim, dim) + CMatrix::from_element(dim, dim, c(0.5, 0.0));
                coupling / c(d + 0.5 * d * d, 0.0)
            }
        }
    }

    /// H_ling with coupling constant g.
    pub fn linguistic_hamiltonian(&self, coupling_strength: f64) -> CMatrix {
        let s = self.subject_operator();
        let v = self.verb_operator();
        let o = self.object_operator();
        let g = c(coupling_strength, 0.0);
        match self {
            LinguisticOperators::Pauli => {
                let h_sv = s.kronecker(&v);
                let h_vo = v.kronecker(&o);
                let hc = h_sv.adjoint() + h_vo.adjoint();
                (h_sv + h_vo + hc) * g
            }
            LinguisticOperators::Generalized { .. } => (s + v + o) * g,
        }
    }

    /// Evolve `initial_state` under H_ling (g = 1) for `time_steps` steps of `dt`.
    ///
    /// Returns `time_steps + 1` states, the first being the initial one.
    pub fn subject_verb_object_sequence(
        &self,
        initial_state: &CVector,
        time_steps: usize,
        dt: f64,
    ) -> Result<Vec<CVector>> {
        let h = self.linguistic_hamiltonian(1.0);
        evolve_with(&h, initial_state, time_steps, dt)
    }

    /// [V, S] = VS - SV
    pub fn commutation_relation(&self) -> CMatrix {
        let s = self.subject_operator();
        let v = self.verb_operator();
        commutator(&v, &s)
    }

    pub fn verify_linguistic_structure(&self) -> StructureReport {
        let s = self.subject_operator();
        let v = self.verb_operator();
        let o = self.object_operator();
        StructureReport {
            s_norm: s.norm(),
            v_norm: v.norm(),
            o_norm: o.norm(),
            vs_commutator_norm: commutator(&v, &s).norm(),
            ov_commutator_norm: commutator(&o, &v).norm(),
            s_hermitian: is_hermitian(&s),
            v_hermitian: is_hermitian(&v),
            o_hermitian: is_hermitian(&o),
        }
    }
}

/// [A, B] = AB - BA
pub fn commutator(a: &CMatrix, b: &CMatrix) -> CMatrix {
    a * b - b * a
}

/// Elementwise A ≈ A† within an absolute tolerance of 1e-8.
pub fn is_hermitian(m: &CMatrix) -> bool {
    if !m.is_square() {
        return false;
    }
    let adj = m.adjoint();
    m.iter().zip(adj.iter()).all(|(a, b)| (a - b).norm() <= HERMITIAN_TOL)
}

/// U = exp(-i H dt).
///
/// Hermitian H goes through the eigendecomposition H = QΛQ†, which keeps U
/// unitary to machine precision. Other matrices use a scaled Taylor series
/// followed by repeated squaring.
pub fn propagator(h: &CMatrix, dt: f64) -> CMatrix {
    if is_hermitian(h) {
        let eigen = SymmetricEigen::new(h.clone());
        let phases = CVector::from_iterator(
            h.nrows(),
            eigen.eigenvalues.iter().map(|&lam| Complex64::from_polar(1.0, -lam * dt)),
        );
        let q = &eigen.eigenvectors;
        q * CMatrix::from_diagonal(&phases) * q.adjoint()
    } else {
        expm(&(h * c(0.0, -dt)))
    }
}

/// Matrix exponential by scaling and squaring.
fn expm(a: &CMatrix) -> CMatrix {
    let n = a.nrows();
    let norm = a.norm();
    let squarings = if norm > 0.5 {
        (norm / 0.5).log2().ceil() as i32
    } else {
        0
    };
    let scaled = a / c(2f64.powi(squarings), 0.0);

    let mut result = CMatrix::identity(n, n);
    let mut term = CMatrix::identity(n, n);
    for k in 1..=EXP_TAYLOR_TERMS {
        term = &term * &scaled / c(k as f64, 0.0);
        result += &term;
    }
    for _ in 0..squarings {
        result = &result * &result;
    }
    result
}

/// Repeatedly apply exp(-i H dt) to `initial_state`.
pub fn evolve_with(h: &CMatrix, initial_state: &CVector, time_steps: usize, dt: f64) -> Result<Vec<CVector>> {
    if initial_state.len() != h.nrows() {
        return Err(WhiteholeError::domain(
            "initial_state",
            initial_state.len() as f64,
            "length must match the Hamiltonian dimension",
        ));
    }
    let u = propagator(h, dt);
    let mut states = Vec::with_capacity(time_steps + 1);
    let mut psi = initial_state.clone();
    states.push(psi.clone());
    for _ in 0..time_steps {
        psi = &u * psi;
        states.push(psi.clone());
    }
    Ok(states)
}

/// Basis state |k⟩ in dimension `dim`.
pub fn basis_state(dim: usize, k: usize) -> CVector {
    let mut v = CVector::from_element(dim, Complex64::zero());
    if k < dim {
        v[k] = Complex64::one();
    }
    v
}
