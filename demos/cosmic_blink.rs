//! Prime-gap rhythm demo.
//!
//! Shows:
//! 1. Blink pattern statistics as the sieve bound grows
//! 2. Quasiperiodic modulation never repeating
//! 3. Mock CMB spectrum vs. blink-modulated prediction

use whitehole_sim::prelude::*;
use whitehole_sim::units::{AGE_OF_UNIVERSE, PLANCK_TIME};

fn main() -> Result<()> {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║        Cosmic Blinking — Prime Gap Rhythms          ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    demo_scaling()?;
    demo_modulation()?;
    demo_cmb()?;
    Ok(())
}

fn demo_scaling() -> Result<()> {
    println!("═══ 1. Statistics vs. Sieve Bound ═══");
    println!();
    println!("  {:>8}  {:>6}  {:>8}  {:>10}  {:>10}", "N", "gaps", "max gap", "H (bits)", "D_frac");
    println!("  {:─>8}  {:─>6}  {:─>8}  {:─>10}  {:─>10}", "", "", "", "", "");
    for n in [100, 1_000, 10_000, 100_000] {
        let p = CosmicBlinkPattern::new(n, PLANCK_TIME, AGE_OF_UNIVERSE)?;
        println!(
            "  {:>8}  {:>6}  {:>8}  {:>10.4}  {:>10.4}",
            n,
            p.gaps().len(),
            p.gaps().iter().max().copied().unwrap_or(0),
            p.information_content_blink(),
            p.fractal_dimension()
        );
    }
    println!();
    Ok(())
}

fn demo_modulation() -> Result<()> {
    println!("═══ 2. Golden-Ratio Modulation ═══");
    println!();
    let p = CosmicBlinkPattern::new(100, PLANCK_TIME, AGE_OF_UNIVERSE)?;
    for t in [0.0, 1.0, 2.0, 3.0, 5.0, 8.0, 13.0] {
        println!("  ω({:>4}) = {:+.6}", t, p.quasiperiodic_modulation(t));
    }
    println!();
    Ok(())
}

fn demo_cmb() -> Result<()> {
    println!("═══ 3. CMB Multipole Modulation ═══");
    println!();
    let p = CosmicBlinkPattern::new(1000, PLANCK_TIME, AGE_OF_UNIVERSE)?;
    let cmb = CmbAnalyzer::new(&p);
    let (ells, modulation) = cmb.predicted_cmb_multipole_modulation(100);
    let (_, mock) = mock_cmb_spectrum(99);
    for depth in [0.001, 0.01, 0.1] {
        let predicted: Vec<f64> = mock
            .iter()
            .zip(&modulation)
            .map(|(c, m)| c * (1.0 + depth * m))
            .collect();
        let chi2 = cmb.anomaly_significance(&mock, &predicted)?;
        println!("  depth {:>5}: χ² over {} multipoles = {:.4}", depth, ells.len(), chi2);
    }
    println!();
    Ok(())
}
