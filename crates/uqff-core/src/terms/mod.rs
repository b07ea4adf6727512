//! The built-in physics term library
//!
//! Forty-six terms across six families. [`register_all`] installs the full
//! set under its canonical registry names; callers that want a smaller
//! registry register individual terms directly.
//!
//! Registry names are the stable public identifiers (CSV columns, CLI
//! arguments) and do not always match the Rust type names; the short
//! helper names (`MuS`, `Bj`, ...) in particular are kept for continuity
//! with published result sets.

pub mod gravity;
pub mod helpers;
pub mod muge;
pub mod resonance;
pub mod systems;

use crate::registry::TermRegistry;
use crate::term::Category;

/// Register the complete built-in term library.
pub fn register_all(registry: &mut TermRegistry) {
    use Category::*;

    // Universal gravity family
    registry.register("UniversalGravity1", Box::new(gravity::UniversalGravity1), Gravity);
    registry.register("UniversalGravity2", Box::new(gravity::UniversalGravity2), Gravity);
    registry.register("UniversalGravity3", Box::new(gravity::UniversalGravity3), Gravity);
    registry.register("UniversalGravity4", Box::new(gravity::UniversalGravity4), Gravity);
    registry.register("UniversalBuoyancy", Box::new(gravity::UniversalBuoyancy), Gravity);
    registry.register("UniversalMagnetism", Box::new(gravity::UniversalMagnetism), Gravity);
    registry.register("UniversalAether", Box::new(gravity::UniversalAether), Gravity);

    // Unified field and the two combined MUGE equations
    registry.register("UnifiedField", Box::new(gravity::UnifiedField), UnifiedField);
    registry.register("CompressedMUGE", Box::new(muge::CompressedMuge), Muge);
    registry.register("ResonanceMUGE", Box::new(muge::ResonanceMuge), Resonance);

    // Named astrophysical systems
    registry.register("SGR1745Magnetar", Box::new(systems::Sgr1745Magnetar), Astrophysics);
    registry.register("SagittariusAStar", Box::new(systems::SagittariusAStar), Astrophysics);
    registry.register("TapestryStarbirth", Box::new(systems::TapestryStarbirth), Astrophysics);
    registry.register("Westerlund2Cluster", Box::new(systems::Westerlund2Cluster), Astrophysics);
    registry.register("PillarsCreation", Box::new(systems::PillarsCreation), Astrophysics);
    registry.register("RingsRelativity", Box::new(systems::RingsRelativity), Astrophysics);
    registry.register("StudentGuideUniverse", Box::new(systems::StudentGuideUniverse), Astrophysics);

    // Intermediate stellar quantities
    registry.register("MuS", Box::new(helpers::MagneticDipoleMoment::default()), Helper);
    registry.register("GradMsR", Box::new(helpers::SurfaceGravityGradient::default()), Helper);
    registry.register("Bj", Box::new(helpers::MagneticStringField::default()), Helper);
    registry.register("OmegaST", Box::new(helpers::TimeVaryingRotationFrequency::default()), Helper);
    registry.register("MuJ", Box::new(helpers::StringDipoleMoment::default()), Helper);
    registry.register("ReactorEfficiency", Box::new(helpers::ReactorEfficiency), Helper);
    registry.register("NavierStokesQuasarJet", Box::new(helpers::NavierStokesQuasarJet), Helper);

    // Compressed MUGE components
    registry.register("MUGECompressedBase", Box::new(muge::CompressedBase::default()), MugeCompressed);
    registry.register("MUGEExpansion", Box::new(muge::ExpansionFactor::default()), MugeCompressed);
    registry.register("MUGESuperAdjustment", Box::new(muge::SuperconductiveAdjustment::default()), MugeCompressed);
    registry.register("MUGEEnvelope", Box::new(muge::EnvelopeModulation), MugeCompressed);
    registry.register("MUGEUgSum", Box::new(muge::UgSum), MugeCompressed);
    registry.register("MUGECosmological", Box::new(muge::CosmologicalTerm), MugeCompressed);
    registry.register("MUGEQuantum", Box::new(muge::QuantumCorrection), MugeCompressed);
    registry.register("MUGEFluid", Box::new(muge::FluidCoupling::default()), MugeCompressed);
    registry.register("MUGEPerturbation", Box::new(muge::DensityPerturbation::default()), MugeCompressed);

    // Resonance components
    registry.register("MUGEResonanceADPM", Box::new(resonance::DpmAcceleration), Resonance);
    registry.register("MUGEResonanceATHz", Box::new(resonance::ThzContribution), Resonance);
    registry.register("MUGEResonanceAvacDiff", Box::new(resonance::VacuumDifferential), Resonance);
    registry.register("MUGEResonanceASuperFreq", Box::new(resonance::SuperconductiveFrequency), Resonance);
    registry.register("MUGEResonanceAAetherRes", Box::new(resonance::AetherResonance), Resonance);
    registry.register("MUGEResonanceUg4i", Box::new(resonance::ReactorGravity), Resonance);
    registry.register("MUGEResonanceAQuantumFreq", Box::new(resonance::QuantumFrequency), Resonance);
    registry.register("MUGEResonanceAAetherFreq", Box::new(resonance::AetherFrequency), Resonance);
    registry.register("MUGEResonanceAFluidFreq", Box::new(resonance::FluidFrequency), Resonance);
    registry.register("MUGEResonanceOsc", Box::new(resonance::OscillatoryTerm), Resonance);
    registry.register("MUGEResonanceAExpFreq", Box::new(resonance::ExpansionFrequency), Resonance);
    registry.register("MUGEResonanceFTRZ", Box::new(resonance::TrzFactor), Resonance);
    registry.register("MUGEResonanceWormhole", Box::new(resonance::WormholeMetric), Resonance);
}
