//! 4-D tesseract grid used as an indexing scaffold.
//!
//! The r×r×r×r grid holds r⁴ integer vertices. Vertex i has coordinates
//! x_d = ⌊i / r^d⌋ mod r, so axis 0 varies fastest. Axes read as
//! (subject, verb, object, time).
//!
//! Edges follow the causal S → V → O order: each vertex links to its
//! wrapped +1 neighbour along the first three axes. The time axis carries no
//! edges; it only drives the resonance phase.

use std::collections::HashMap;

use log::debug;

use crate::error::{Result, WhiteholeError};
use crate::operators::LinguisticOperators;
use crate::units::{EPSILON, PI};

/// Fixed grid dimension.
pub const DIMENSION: usize = 4;

/// Largest accepted resolution (32⁴ ≈ 10⁶ vertices).
pub const MAX_RESOLUTION: usize = 32;

/// Gaps entering the resonance sum.
pub const RESONANCE_GAPS: usize = 10;

pub type Vertex = [usize; DIMENSION];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TesseractMapper {
    resolution: usize,
    vertices: Vec<Vertex>,
}

impl TesseractMapper {
    pub fn new(resolution: usize) -> Result<Self> {
        if resolution == 0 || resolution > MAX_RESOLUTION {
            return Err(WhiteholeError::domain(
                "resolution",
                resolution as f64,
                "must be between 1 and 32",
            ));
        }
        let count = resolution.pow(DIMENSION as u32);
        let vertices = (0..count)
            .map(|i| {
                let mut coords = [0usize; DIMENSION];
                let mut remaining = i;
                for c in coords.iter_mut() {
                    *c = remaining % resolution;
                    remaining /= resolution;
                }
                coords
            })
            .collect();
        debug!("tesseract: resolution {}, {} vertices", resolution, count);
        Ok(Self { resolution, vertices })
    }

    pub fn dimension(&self) -> usize {
        DIMENSION
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Vertex coordinate scaled into [0, 1).
    fn axis(&self, vertex: &Vertex, d: usize) -> f64 {
        vertex[d] as f64 / self.resolution as f64
    }

    /// x₀/r·‖S‖ + x₁/r·‖V‖ + x₂/r·‖O‖ per vertex.
    pub fn color_by_subject_verb_object(&self, operators: &LinguisticOperators) -> Vec<f64> {
        let s_norm = operators.subject_operator().norm();
        let v_norm = operators.verb_operator().norm();
        let o_norm = operators.object_operator().norm();
        self.vertices
            .iter()
            .map(|v| self.axis(v, 0) * s_norm + self.axis(v, 1) * v_norm + self.axis(v, 2) * o_norm)
            .collect()
    }

    /// Mean cos(2π x₃/r · g / ḡ) over the first ten gaps, per vertex.
    ///
    /// The sum is always divided by ten, so shorter gap lists damp the
    /// resonance. ḡ is the mean of the whole list.
    pub fn color_by_prime_gap_resonance(&self, prime_gaps: &[f64]) -> Vec<f64> {
        if prime_gaps.is_empty() {
            return vec![0.0; self.vertices.len()];
        }
        let gap_mean = (prime_gaps.iter().sum::<f64>() / prime_gaps.len() as f64).max(EPSILON);
        let leading = &prime_gaps[..prime_gaps.len().min(RESONANCE_GAPS)];

        self.vertices
            .iter()
            .map(|v| {
                let time_phase = self.axis(v, 3) * 2.0 * PI;
                leading
                    .iter()
                    .map(|&g| (time_phase * g / gap_mean).cos())
                    .sum::<f64>()
                    / RESONANCE_GAPS as f64
            })
            .collect()
    }

    /// (i, j) pairs linking each vertex to its +1 (mod r) neighbour along
    /// axes 0, 1 and 2, in vertex order then axis order.
    pub fn edge_list_svo_order(&self) -> Vec<(usize, usize)> {
        let index: HashMap<Vertex, usize> = self
            .vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (*v, i))
            .collect();

        let mut edges = Vec::with_capacity(self.vertices.len() * (DIMENSION - 1));
        for (i, vertex) in self.vertices.iter().enumerate() {
            for d in 0..DIMENSION - 1 {
                let mut neighbor = *vertex;
                neighbor[d] = (neighbor[d] + 1) % self.resolution;
                if let Some(&j) = index.get(&neighbor) {
                    edges.push((i, j));
                }
            }
        }
        edges
    }
}
