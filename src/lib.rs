//! # whitehole-sim
//!
//! Numerical toolkit for a black-hole/white-hole superposition model with
//! prime-gap cosmic rhythms. Four layers share no state:
//!
//! ```text
//! Prime Engine (sieve, gaps)
//!   ↓ gap sequence
//! Cosmic Blink Pattern (blink times, quasiperiodic rhythm, statistics)
//!   ↓                         ↓
//! Spectral / CMB analysis    Tesseract coloring ← Linguistic operators
//!
//! Spacetime (Schwarzschild, Kruskal-Szekeres, bounce)   independent
//! Superposition (|Black⟩ + e^{iφ}|White⟩, ρ, entropy)   independent
//! ```
//!
//! Every operation is a pure, deterministic evaluation over explicit
//! parameters. Formula-level domain violations (a radius inside the horizon,
//! a density above the Planck density) return
//! [`WhiteholeError::Domain`](error::WhiteholeError::Domain); statistical
//! degeneracies are absorbed by 1e-10 guards and return finite values.
//!
//! ## Usage
//!
//! ```no_run
//! use whitehole_sim::prelude::*;
//!
//! let kit = Toolkit::new(SimConfig::default()).unwrap();
//! let g = kit.black_white_hole_system().schwarzschild_metric(10.0).unwrap();
//! println!("g_tt = {}", g.g_tt);
//! let entropy = kit.cosmic_blink_pattern().information_content_blink();
//! println!("blink entropy = {:.3} bits", entropy);
//! ```

pub mod units;
pub mod error;
pub mod config;
pub mod primes;
pub mod spacetime;
pub mod superposition;
pub mod operators;
pub mod cosmology;
pub mod spectral;
pub mod tesseract;
pub mod toolkit;

pub use error::{Result, WhiteholeError};

pub mod prelude {
    pub use crate::config::*;
    pub use crate::cosmology::*;
    pub use crate::error::{Result, WhiteholeError};
    pub use crate::operators::*;
    pub use crate::primes::*;
    pub use crate::spacetime::*;
    pub use crate::spectral::*;
    pub use crate::superposition::*;
    pub use crate::tesseract::*;
    pub use crate::toolkit::*;
}
