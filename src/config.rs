//! Simulation parameters with documented defaults.
//!
//! Every field has a default, so a JSON file only needs the overrides:
//!
//! ```json
//! { "mass": 2.5, "tesseract_resolution": 4 }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WhiteholeError};
use crate::tesseract::MAX_RESOLUTION;
use crate::units::{AGE_OF_UNIVERSE, PLANCK_MASS, PLANCK_TIME};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Hole mass M (natural units)
    pub mass: f64,
    /// Planck mass for bounce corrections
    pub planck_mass: f64,
    /// Sieve bound for the prime gap series
    pub n_primes: usize,
    /// Planck time (s)
    pub planck_time: f64,
    /// Age of the universe in Planck times
    pub age_of_universe: f64,
    /// Hilbert space dimension of the linguistic operators
    pub operator_dimension: usize,
    /// Hamiltonian coupling g
    pub coupling_strength: f64,
    /// Evolution time step
    pub dt: f64,
    /// Evolution step count
    pub time_steps: usize,
    /// Points per tesseract axis
    pub tesseract_resolution: usize,
    /// Upper (exclusive) multipole for CMB modulation
    pub ell_max: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            planck_mass: PLANCK_MASS,
            n_primes: 1000,
            planck_time: PLANCK_TIME,
            age_of_universe: AGE_OF_UNIVERSE,
            operator_dimension: 2,
            coupling_strength: 1.0,
            dt: 0.01,
            time_steps: 100,
            tesseract_resolution: 8,
            ell_max: 100,
        }
    }
}

impl SimConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Range checks shared by every constructor downstream.
    pub fn validate(&self) -> Result<()> {
        let positive = |name: &'static str, v: f64| {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(WhiteholeError::domain(name, v, "must be positive and finite"))
            }
        };
        positive("mass", self.mass)?;
        positive("planck_mass", self.planck_mass)?;
        positive("planck_time", self.planck_time)?;
        positive("age_of_universe", self.age_of_universe)?;
        positive("dt", self.dt)?;

        if self.n_primes < 3 {
            return Err(WhiteholeError::domain(
                "n_primes",
                self.n_primes as f64,
                "blink pattern needs at least two primes",
            ));
        }
        if self.operator_dimension < 2 {
            return Err(WhiteholeError::domain(
                "operator_dimension",
                self.operator_dimension as f64,
                "operator algebra needs at least two states",
            ));
        }
        if self.tesseract_resolution == 0 || self.tesseract_resolution > MAX_RESOLUTION {
            return Err(WhiteholeError::domain(
                "tesseract_resolution",
                self.tesseract_resolution as f64,
                "must be between 1 and 32",
            ));
        }
        if !self.coupling_strength.is_finite() {
            return Err(WhiteholeError::domain(
                "coupling_strength",
                self.coupling_strength,
                "must be finite",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SimConfig::default();
        config.validate().unwrap();
        assert_eq!(config.mass, 1.0);
        assert_eq!(config.n_primes, 1000);
        assert_eq!(config.tesseract_resolution, 8);
        assert_eq!(config.ell_max, 100);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SimConfig::from_json_str(r#"{ "mass": 2.5, "tesseract_resolution": 4 }"#).unwrap();
        assert_eq!(config.mass, 2.5);
        assert_eq!(config.tesseract_resolution, 4);
        assert_eq!(config.n_primes, 1000);
        assert_eq!(config.planck_mass, PLANCK_MASS);
    }

    #[test]
    fn round_trips_through_json() {
        let config = SimConfig { operator_dimension: 3, ..SimConfig::default() };
        let json = serde_json::to_string(&config).unwrap();
        let loaded = SimConfig::from_json_str(&json).unwrap();
        assert_eq!(loaded.planck_time, 5.39e-44);
        assert_eq!(loaded, config);
    }

    #[test]
    fn invalid_values_name_the_parameter() {
        let cases = [
            (r#"{ "mass": -1.0 }"#, "mass"),
            (r#"{ "n_primes": 2 }"#, "n_primes"),
            (r#"{ "operator_dimension": 1 }"#, "operator_dimension"),
            (r#"{ "tesseract_resolution": 64 }"#, "tesseract_resolution"),
            (r#"{ "dt": 0.0 }"#, "dt"),
        ];
        for (json, param) in cases {
            let err = SimConfig::from_json_str(json).unwrap_err();
            assert_eq!(err.param(), Some(param), "{}", json);
        }
    }

    #[test]
    fn malformed_json_is_json_error() {
        assert!(matches!(
            SimConfig::from_json_str("{ mass: 1 }"),
            Err(WhiteholeError::Json(_))
        ));
    }
}
