//! Named astrophysical system terms
//!
//! Each term evaluates the combined resonance equation against one fixed,
//! well-known system. The shared parameter map is ignored on purpose: the
//! system's own parameters are overlaid on a private map so a sweep over
//! the ambient map never perturbs these reference points.

use crate::params::ParameterMap;
use crate::term::PhysicsTerm;
use crate::terms::muge::ResonanceMuge;

fn resonance_for(pairs: &[(&str, f64)], t: f64) -> f64 {
    let params: ParameterMap = pairs.iter().copied().collect();
    ResonanceMuge.evaluate(t, &params)
}

/// SGR 1745-2900, the Galactic Centre magnetar.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sgr1745Magnetar;

impl PhysicsTerm for Sgr1745Magnetar {
    fn evaluate(&self, t: f64, _params: &ParameterMap) -> f64 {
        resonance_for(
            &[
                ("I", 1e21),
                ("A", 3.142e8),
                ("mass", 2.984e30),
                ("B_field", 1e10),
                ("radius", 1e4),
                ("Vsys", 4.189e12),
                ("vexp", 1e3),
            ],
            t,
        )
    }

    fn name(&self) -> &'static str {
        "Sgr1745Magnetar"
    }

    fn description(&self) -> &'static str {
        "SGR 1745-2900: Magnetar system (I=1e21, M=2.984e30 kg, B=1e10 T, z=0.0009)"
    }
}

/// Sagittarius A*, the Galactic Centre supermassive black hole.
#[derive(Debug, Clone, Copy, Default)]
pub struct SagittariusAStar;

impl PhysicsTerm for SagittariusAStar {
    fn evaluate(&self, t: f64, _params: &ParameterMap) -> f64 {
        resonance_for(
            &[
                ("mass", 8.155e36),
                ("M_DM", 1e37),
                ("Vsys", 3.552e45),
                ("radius", 1e12),
                ("vexp", 5e6),
                ("I", 1e23),
                ("A", 2.813e30),
            ],
            t,
        )
    }

    fn name(&self) -> &'static str {
        "SagittariusAStar"
    }

    fn description(&self) -> &'static str {
        "Sagittarius A*: Supermassive black hole (M=8.155e36 kg, M_DM=1e37 kg, Vsys=3.552e45 m^3)"
    }
}

/// Tapestry of Blazing Starbirth nebula.
#[derive(Debug, Clone, Copy, Default)]
pub struct TapestryStarbirth;

impl PhysicsTerm for TapestryStarbirth {
    fn evaluate(&self, t: f64, _params: &ParameterMap) -> f64 {
        resonance_for(
            &[
                ("mass", 1.989e35),
                ("Vsys", 1e53),
                ("radius", 3.086e17),
                ("I", 1e22),
                ("A", 1e35),
            ],
            t,
        )
    }

    fn name(&self) -> &'static str {
        "TapestryStarbirth"
    }

    fn description(&self) -> &'static str {
        "Tapestry of Blazing Starbirth: Nebula (M=1.989e35 kg, Vsys=1e53 m^3, r=10 pc)"
    }
}

/// Westerlund 2 stellar cluster.
#[derive(Debug, Clone, Copy, Default)]
pub struct Westerlund2Cluster;

impl PhysicsTerm for Westerlund2Cluster {
    fn evaluate(&self, t: f64, _params: &ParameterMap) -> f64 {
        resonance_for(
            &[
                ("mass", 1.989e35),
                ("Vsys", 1e53),
                ("radius", 3.086e17),
                ("I", 1e22),
                ("A", 1e35),
            ],
            t,
        )
    }

    fn name(&self) -> &'static str {
        "Westerlund2Cluster"
    }

    fn description(&self) -> &'static str {
        "Westerlund 2: Stellar cluster (similar to Tapestry parameters)"
    }
}

/// Pillars of Creation molecular cloud.
#[derive(Debug, Clone, Copy, Default)]
pub struct PillarsCreation;

impl PhysicsTerm for PillarsCreation {
    fn evaluate(&self, t: f64, _params: &ParameterMap) -> f64 {
        resonance_for(
            &[
                ("mass", 1.989e32),
                ("radius", 9.46e15),
                ("Vsys", 3.552e48),
                ("I", 1e21),
                ("A", 2.813e32),
            ],
            t,
        )
    }

    fn name(&self) -> &'static str {
        "PillarsCreation"
    }

    fn description(&self) -> &'static str {
        "Pillars of Creation: Molecular cloud (M=1.989e32 kg, r=1 ly)"
    }
}

/// Rings of Relativity lensed structure.
#[derive(Debug, Clone, Copy, Default)]
pub struct RingsRelativity;

impl PhysicsTerm for RingsRelativity {
    fn evaluate(&self, t: f64, _params: &ParameterMap) -> f64 {
        resonance_for(
            &[
                ("mass", 1.989e36),
                ("radius", 3.086e17),
                ("Vsys", 1e54),
                ("vexp", 1e5),
                ("I", 1e22),
            ],
            t,
        )
    }

    fn name(&self) -> &'static str {
        "RingsRelativity"
    }

    fn description(&self) -> &'static str {
        "Rings of Relativity: Cosmological structure (M=1.989e36 kg, z=0.01)"
    }
}

/// Observable-universe scale reference point.
#[derive(Debug, Clone, Copy, Default)]
pub struct StudentGuideUniverse;

impl PhysicsTerm for StudentGuideUniverse {
    fn evaluate(&self, t: f64, _params: &ParameterMap) -> f64 {
        resonance_for(
            &[
                ("mass", 1e53),
                ("radius", 1e26),
                ("Vsys", 1e80),
                ("vexp", 3e8),
                ("I", 1e24),
                ("A", 1e52),
            ],
            t,
        )
    }

    fn name(&self) -> &'static str {
        "StudentGuideUniverse"
    }

    fn description(&self) -> &'static str {
        "Student's Guide to the Universe: Observable universe (M=1e53 kg, r=10 Gly, t_Hubble=4.35e17 s)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_terms_ignore_ambient_map() {
        // Sweeping the ambient map must not move a fixed reference point.
        let ambient: ParameterMap = [("I", 1e60), ("Vsys", 1e99)].into_iter().collect();
        let clean = ParameterMap::new();

        let term = Sgr1745Magnetar;
        assert_eq!(
            term.evaluate(0.0, &ambient).to_bits(),
            term.evaluate(0.0, &clean).to_bits()
        );
    }

    #[test]
    fn test_systems_produce_distinct_magnitudes() {
        let params = ParameterMap::new();
        let magnetar = Sgr1745Magnetar.evaluate(0.0, &params);
        let black_hole = SagittariusAStar.evaluate(0.0, &params);
        let universe = StudentGuideUniverse.evaluate(0.0, &params);

        assert_ne!(magnetar, black_hole);
        assert!(universe.abs() > magnetar.abs());
    }

    #[test]
    fn test_westerlund_matches_tapestry_parameters() {
        // Both systems share a parameter set, so their values coincide.
        let params = ParameterMap::new();
        assert_eq!(
            Westerlund2Cluster.evaluate(1e3, &params).to_bits(),
            TapestryStarbirth.evaluate(1e3, &params).to_bits()
        );
    }

    #[test]
    fn test_all_systems_finite() {
        let params = ParameterMap::new();
        let values = [
            Sgr1745Magnetar.evaluate(1e10, &params),
            SagittariusAStar.evaluate(1e10, &params),
            TapestryStarbirth.evaluate(1e10, &params),
            Westerlund2Cluster.evaluate(1e10, &params),
            PillarsCreation.evaluate(1e10, &params),
            RingsRelativity.evaluate(1e10, &params),
            StudentGuideUniverse.evaluate(1e10, &params),
        ];
        for value in values {
            assert!(value.is_finite());
        }
    }
}
