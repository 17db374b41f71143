//! One-shot facade over every layer, built from a [`SimConfig`].

use log::info;

use crate::config::SimConfig;
use crate::cosmology::CosmicBlinkPattern;
use crate::error::Result;
use crate::operators::LinguisticOperators;
use crate::primes::PrimeGapSeries;
use crate::spacetime::BlackWhiteHoleSystem;
use crate::spectral::{CmbAnalyzer, PrimeGapAnalyzer};
use crate::superposition::SuperpositionState;
use crate::tesseract::TesseractMapper;

/// Public entry points, in export order.
pub const ENTRY_POINTS: [&str; 7] = [
    "BlackWhiteHoleSystem",
    "SuperpositionState",
    "LinguisticOperators",
    "CosmicBlinkPattern",
    "TesseractMapper",
    "PrimeGapAnalyzer",
    "CMBAnalyzer",
];

#[derive(Debug, Clone)]
pub struct Toolkit {
    config: SimConfig,
    system: BlackWhiteHoleSystem,
    superposition: SuperpositionState,
    operators: LinguisticOperators,
    pattern: CosmicBlinkPattern,
    tesseract: TesseractMapper,
}

impl Toolkit {
    /// Validate `config` and build every component from it.
    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate()?;
        let series = PrimeGapSeries::up_to(config.n_primes);
        Self::with_series(config, series)
    }

    /// Same as [`Toolkit::new`] but with a precomputed prime series.
    pub fn with_series(config: SimConfig, series: PrimeGapSeries) -> Result<Self> {
        config.validate()?;
        let system = BlackWhiteHoleSystem::with_planck_mass(config.mass, config.planck_mass)?;
        let operators = LinguisticOperators::new(config.operator_dimension)?;
        let pattern = CosmicBlinkPattern::from_series(series, config.planck_time, config.age_of_universe)?;
        let tesseract = TesseractMapper::new(config.tesseract_resolution)?;
        info!(
            "toolkit ready: M = {}, {} gaps, d = {}, {} tesseract vertices",
            config.mass,
            pattern.gaps().len(),
            operators.dimension(),
            tesseract.num_vertices()
        );
        Ok(Self {
            config,
            system,
            superposition: SuperpositionState::default(),
            operators,
            pattern,
            tesseract,
        })
    }

    pub fn names() -> &'static [&'static str] {
        &ENTRY_POINTS
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn black_white_hole_system(&self) -> &BlackWhiteHoleSystem {
        &self.system
    }

    pub fn superposition_state(&self) -> &SuperpositionState {
        &self.superposition
    }

    pub fn linguistic_operators(&self) -> &LinguisticOperators {
        &self.operators
    }

    pub fn cosmic_blink_pattern(&self) -> &CosmicBlinkPattern {
        &self.pattern
    }

    pub fn tesseract_mapper(&self) -> &TesseractMapper {
        &self.tesseract
    }

    pub fn prime_gap_analyzer(&self) -> PrimeGapAnalyzer {
        PrimeGapAnalyzer
    }

    pub fn cmb_analyzer(&self) -> CmbAnalyzer<'_> {
        CmbAnalyzer::new(&self.pattern)
    }
}
