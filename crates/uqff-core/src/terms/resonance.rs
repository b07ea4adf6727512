//! Modular resonance acceleration components
//!
//! Thirteen terms mirroring the contributions of the combined resonance
//! equation, each evaluable on its own. Every downstream term reads the
//! base DPM acceleration from the `aDPM` parameter, which the evaluation
//! engine injects at the start of each round; without it they degrade to
//! zero rather than failing.
//!
//! Division guards follow the family convention: a zero denominator yields
//! 0.0, and `validate` reports the misconfiguration.

use std::f64::consts::PI;

use crate::params::ParameterMap;
use crate::term::PhysicsTerm;

/// Base DPM acceleration, the seed value for the rest of the family.
#[derive(Debug, Clone, Copy, Default)]
pub struct DpmAcceleration;

impl PhysicsTerm for DpmAcceleration {
    fn evaluate(&self, _t: f64, params: &ParameterMap) -> f64 {
        let inertia = params.get_or("I", 1e45);
        let area = params.get_or("A", 7e22);
        let omega1 = params.get_or("omega1", 1e-8);
        let omega2 = params.get_or("omega2", 5e-9);
        let f_dpm = params.get_or("fDPM", 1e12);
        let evac_neb = params.get_or("Evac_neb", 7.09e-36);
        let c_res = params.get_or("c_res", 3e8);
        let vsys = params.get_or("Vsys", 1e56);

        let force = inertia * area * (omega1 - omega2);
        force * f_dpm * evac_neb * c_res * vsys
    }

    fn name(&self) -> &'static str {
        "DpmAcceleration"
    }

    fn description(&self) -> &'static str {
        "Base DPM acceleration: aDPM = I*A*(omega1-omega2) * fDPM * Evac_neb * c_res * Vsys"
    }
}

/// THz frequency contribution, proportional to the base acceleration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThzContribution;

impl PhysicsTerm for ThzContribution {
    fn evaluate(&self, _t: f64, params: &ParameterMap) -> f64 {
        let a_dpm = params.get_or("aDPM", 0.0);
        let f_thz = params.get_or("fTHz", 1e12);
        let evac_neb = params.get_or("Evac_neb", 7.09e-36);
        let vexp = params.get_or("vexp", 1e6);
        let evac_ism = params.get_or("Evac_ISM", 7.09e-37);
        let c_res = params.get_or("c_res", 3e8);

        let denom = evac_ism * c_res;
        if denom == 0.0 {
            return 0.0;
        }
        f_thz * evac_neb * vexp * a_dpm / denom
    }

    fn validate(&self, params: &ParameterMap) -> bool {
        params.get_or("Evac_ISM", 7.09e-37) * params.get_or("c_res", 3e8) != 0.0
    }

    fn name(&self) -> &'static str {
        "ThzContribution"
    }

    fn description(&self) -> &'static str {
        "THz frequency contribution: aTHz = fTHz * Evac_neb * vexp * aDPM / (Evac_ISM * c_res)"
    }
}

/// Vacuum energy differential between nebular and ISM densities.
#[derive(Debug, Clone, Copy, Default)]
pub struct VacuumDifferential;

impl PhysicsTerm for VacuumDifferential {
    fn evaluate(&self, _t: f64, params: &ParameterMap) -> f64 {
        let a_dpm = params.get_or("aDPM", 0.0);
        let delta_evac = params.get_or("Delta_Evac", 6.381e-36);
        let vexp = params.get_or("vexp", 1e6);
        let evac_neb = params.get_or("Evac_neb", 7.09e-36);
        let c_res = params.get_or("c_res", 3e8);

        let denom = evac_neb * c_res * c_res;
        if denom == 0.0 {
            return 0.0;
        }
        delta_evac * vexp * vexp * a_dpm / denom
    }

    fn validate(&self, params: &ParameterMap) -> bool {
        let c_res = params.get_or("c_res", 3e8);
        params.get_or("Evac_neb", 7.09e-36) * c_res * c_res != 0.0
    }

    fn name(&self) -> &'static str {
        "VacuumDifferential"
    }

    fn description(&self) -> &'static str {
        "Vacuum energy differential: avac_diff = Delta_Evac * vexp^2 * aDPM / (Evac_neb * c_res^2)"
    }
}

/// Superconductive frequency resonance.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuperconductiveFrequency;

impl PhysicsTerm for SuperconductiveFrequency {
    fn evaluate(&self, _t: f64, params: &ParameterMap) -> f64 {
        let a_dpm = params.get_or("aDPM", 0.0);
        let f_super = params.get_or("Fsuper", 6.287e-19);
        let f_thz = params.get_or("fTHz", 1e12);
        let evac_neb = params.get_or("Evac_neb", 7.09e-36);
        let c_res = params.get_or("c_res", 3e8);

        let denom = evac_neb * c_res;
        if denom == 0.0 {
            return 0.0;
        }
        f_super * f_thz * a_dpm / denom
    }

    fn validate(&self, params: &ParameterMap) -> bool {
        params.get_or("Evac_neb", 7.09e-36) * params.get_or("c_res", 3e8) != 0.0
    }

    fn name(&self) -> &'static str {
        "SuperconductiveFrequency"
    }

    fn description(&self) -> &'static str {
        "Superconductive frequency resonance: asuper_freq = Fsuper * fTHz * aDPM / (Evac_neb * c_res)"
    }
}

/// Aether resonance coupling, TRZ-boosted.
#[derive(Debug, Clone, Copy, Default)]
pub struct AetherResonance;

impl PhysicsTerm for AetherResonance {
    fn evaluate(&self, _t: f64, params: &ParameterMap) -> f64 {
        let a_dpm = params.get_or("aDPM", 0.0);
        let ua_scm = params.get_or("UA_SCM", 10.0);
        let omega_i = params.get_or("omega_i", 1e-8);
        let f_thz = params.get_or("fTHz", 1e12);
        let f_trz = params.get_or("fTRZ", 0.1);

        ua_scm * omega_i * f_thz * a_dpm * (1.0 + f_trz)
    }

    fn name(&self) -> &'static str {
        "AetherResonance"
    }

    fn description(&self) -> &'static str {
        "Aether resonance coupling: aaether_res = UA_SCM * omega_i * fTHz * aDPM * (1 + fTRZ)"
    }
}

/// Reactor gravity component with exponentially decaying efficiency.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReactorGravity;

impl PhysicsTerm for ReactorGravity {
    fn evaluate(&self, t: f64, params: &ParameterMap) -> f64 {
        let a_dpm = params.get_or("aDPM", 0.0);
        let k4_res = params.get_or("k4_res", 1.0);
        let freact = params.get_or("freact", 1e10);
        let evac_neb = params.get_or("Evac_neb", 7.09e-36);
        let c_res = params.get_or("c_res", 3e8);

        let denom = evac_neb * c_res;
        if denom == 0.0 {
            return 0.0;
        }
        let ereact = 1046.0 * (-0.0005 * t).exp();
        k4_res * ereact * freact * a_dpm / denom
    }

    fn validate(&self, params: &ParameterMap) -> bool {
        params.get_or("Evac_neb", 7.09e-36) * params.get_or("c_res", 3e8) != 0.0
    }

    fn name(&self) -> &'static str {
        "ReactorGravity"
    }

    fn description(&self) -> &'static str {
        "Reactor gravity component: Ug4i = k4_res * Ereact * freact * aDPM / (Evac_neb * c_res), Ereact = 1046 * exp(-0.0005*t)"
    }
}

/// Quantum frequency contribution.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuantumFrequency;

impl PhysicsTerm for QuantumFrequency {
    fn evaluate(&self, _t: f64, params: &ParameterMap) -> f64 {
        let a_dpm = params.get_or("aDPM", 0.0);
        let fquantum = params.get_or("fquantum", 1.445e-17);
        let evac_neb = params.get_or("Evac_neb", 7.09e-36);
        let evac_ism = params.get_or("Evac_ISM", 7.09e-37);
        let c_res = params.get_or("c_res", 3e8);

        let denom = evac_ism * c_res;
        if denom == 0.0 {
            return 0.0;
        }
        fquantum * evac_neb * a_dpm / denom
    }

    fn validate(&self, params: &ParameterMap) -> bool {
        params.get_or("Evac_ISM", 7.09e-37) * params.get_or("c_res", 3e8) != 0.0
    }

    fn name(&self) -> &'static str {
        "QuantumFrequency"
    }

    fn description(&self) -> &'static str {
        "Quantum frequency contribution: aquantum_freq = fquantum * Evac_neb * aDPM / (Evac_ISM * c_res)"
    }
}

/// Aether frequency component.
#[derive(Debug, Clone, Copy, Default)]
pub struct AetherFrequency;

impl PhysicsTerm for AetherFrequency {
    fn evaluate(&self, _t: f64, params: &ParameterMap) -> f64 {
        let a_dpm = params.get_or("aDPM", 0.0);
        let f_aether = params.get_or("fAether", 1.576e-35);
        let evac_neb = params.get_or("Evac_neb", 7.09e-36);
        let evac_ism = params.get_or("Evac_ISM", 7.09e-37);
        let c_res = params.get_or("c_res", 3e8);

        let denom = evac_ism * c_res;
        if denom == 0.0 {
            return 0.0;
        }
        f_aether * evac_neb * a_dpm / denom
    }

    fn validate(&self, params: &ParameterMap) -> bool {
        params.get_or("Evac_ISM", 7.09e-37) * params.get_or("c_res", 3e8) != 0.0
    }

    fn name(&self) -> &'static str {
        "AetherFrequency"
    }

    fn description(&self) -> &'static str {
        "Aether frequency component: aAether_freq = fAether * Evac_neb * aDPM / (Evac_ISM * c_res)"
    }
}

/// Fluid dynamics frequency, the only downstream term independent of aDPM.
#[derive(Debug, Clone, Copy, Default)]
pub struct FluidFrequency;

impl PhysicsTerm for FluidFrequency {
    fn evaluate(&self, _t: f64, params: &ParameterMap) -> f64 {
        let ffluid = params.get_or("ffluid", 1e6);
        let evac_neb = params.get_or("Evac_neb", 7.09e-36);
        let vsys = params.get_or("Vsys", 1e56);
        let evac_ism = params.get_or("Evac_ISM", 7.09e-37);
        let c_res = params.get_or("c_res", 3e8);

        let denom = evac_ism * c_res;
        if denom == 0.0 {
            return 0.0;
        }
        ffluid * evac_neb * vsys / denom
    }

    fn validate(&self, params: &ParameterMap) -> bool {
        params.get_or("Evac_ISM", 7.09e-37) * params.get_or("c_res", 3e8) != 0.0
    }

    fn name(&self) -> &'static str {
        "FluidFrequency"
    }

    fn description(&self) -> &'static str {
        "Fluid dynamics frequency: afluid_freq = ffluid * Evac_neb * Vsys / (Evac_ISM * c_res)"
    }
}

/// Oscillatory term, simplified to zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct OscillatoryTerm;

impl PhysicsTerm for OscillatoryTerm {
    fn evaluate(&self, _t: f64, _params: &ParameterMap) -> f64 {
        0.0
    }

    fn name(&self) -> &'static str {
        "OscillatoryTerm"
    }

    fn description(&self) -> &'static str {
        "Oscillatory term (simplified to zero in current implementation)"
    }
}

/// Hubble expansion frequency; the only time-growing resonance component.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpansionFrequency;

impl PhysicsTerm for ExpansionFrequency {
    fn evaluate(&self, t: f64, params: &ParameterMap) -> f64 {
        let a_dpm = params.get_or("aDPM", 0.0);
        let evac_neb = params.get_or("Evac_neb", 7.09e-36);
        let evac_ism = params.get_or("Evac_ISM", 7.09e-37);
        let c_res = params.get_or("c_res", 3e8);
        let h_z = params.get_or("H_z", 2.270e-18);

        let denom = evac_ism * c_res;
        if denom == 0.0 {
            return 0.0;
        }
        let fexp = 2.0 * PI * h_z * t;
        fexp * evac_neb * a_dpm / denom
    }

    fn validate(&self, params: &ParameterMap) -> bool {
        params.get_or("Evac_ISM", 7.09e-37) * params.get_or("c_res", 3e8) != 0.0
    }

    fn name(&self) -> &'static str {
        "ExpansionFrequency"
    }

    fn description(&self) -> &'static str {
        "Expansion frequency (Hubble): aexp_freq = fexp * Evac_neb * aDPM / (Evac_ISM * c_res), fexp = 2*PI*H_z*t"
    }
}

/// TRZ factor pass-through.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrzFactor;

impl PhysicsTerm for TrzFactor {
    fn evaluate(&self, _t: f64, params: &ParameterMap) -> f64 {
        params.get_or("fTRZ", 0.1)
    }

    fn name(&self) -> &'static str {
        "TrzFactor"
    }

    fn description(&self) -> &'static str {
        "TRZ factor component (pass-through): returns fTRZ parameter directly"
    }
}

/// Wormhole metric contribution.
#[derive(Debug, Clone, Copy, Default)]
pub struct WormholeMetric;

impl PhysicsTerm for WormholeMetric {
    fn evaluate(&self, _t: f64, params: &ParameterMap) -> f64 {
        let r = params.get_or("r", 1.0);
        let b = params.get_or("b", 1.0);
        let f_worm = params.get_or("f_worm", 1.0);
        let evac_neb = params.get_or("Evac_neb", 7.09e-36);

        let denom = b * b + r * r;
        if denom == 0.0 {
            return 0.0;
        }
        f_worm * evac_neb / denom
    }

    fn validate(&self, params: &ParameterMap) -> bool {
        let r = params.get_or("r", 1.0);
        let b = params.get_or("b", 1.0);
        b * b + r * r != 0.0
    }

    fn name(&self) -> &'static str {
        "WormholeMetric"
    }

    fn description(&self) -> &'static str {
        "Wormhole metric contribution: a_wormhole = f_worm * Evac_neb / (b^2 + r^2)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dpm_acceleration_defaults() {
        let term = DpmAcceleration;
        let value = term.evaluate(0.0, &ParameterMap::new());

        let force = 1e45 * 7e22 * (1e-8 - 5e-9);
        let expected = force * 1e12 * 7.09e-36 * 3e8 * 1e56;
        assert_relative_eq!(value, expected, max_relative = 1e-12);
        assert!(value > 0.0);
    }

    #[test]
    fn test_downstream_terms_vanish_without_base() {
        // No aDPM key in the map: every dependent term degrades to zero.
        let params = ParameterMap::new();
        assert_eq!(ThzContribution.evaluate(0.0, &params), 0.0);
        assert_eq!(VacuumDifferential.evaluate(0.0, &params), 0.0);
        assert_eq!(SuperconductiveFrequency.evaluate(0.0, &params), 0.0);
        assert_eq!(AetherResonance.evaluate(0.0, &params), 0.0);
        assert_eq!(ReactorGravity.evaluate(0.0, &params), 0.0);
        assert_eq!(QuantumFrequency.evaluate(0.0, &params), 0.0);
        assert_eq!(AetherFrequency.evaluate(0.0, &params), 0.0);
        assert_eq!(ExpansionFrequency.evaluate(1e10, &params), 0.0);
    }

    #[test]
    fn test_thz_scales_linearly_with_base() {
        let term = ThzContribution;
        let p1: ParameterMap = [("aDPM", 1.0)].into_iter().collect();
        let p2: ParameterMap = [("aDPM", 2.0)].into_iter().collect();

        let v1 = term.evaluate(0.0, &p1);
        assert_relative_eq!(v1, 1e12 * 7.09e-36 * 1e6 / (7.09e-37 * 3e8), max_relative = 1e-12);
        assert_relative_eq!(term.evaluate(0.0, &p2), 2.0 * v1, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_denominator_soft_fails() {
        let params: ParameterMap = [("aDPM", 1.0), ("Evac_ISM", 0.0)].into_iter().collect();
        assert_eq!(ThzContribution.evaluate(0.0, &params), 0.0);
        assert!(!ThzContribution.validate(&params));
        assert_eq!(QuantumFrequency.evaluate(0.0, &params), 0.0);
        assert_eq!(FluidFrequency.evaluate(0.0, &params), 0.0);
    }

    #[test]
    fn test_reactor_gravity_decays_with_time() {
        let term = ReactorGravity;
        let params: ParameterMap = [("aDPM", 1.0)].into_iter().collect();

        let early = term.evaluate(0.0, &params);
        let late = term.evaluate(1e4, &params);
        assert!(early > late);

        let expected_early = 1046.0 * 1e10 / (7.09e-36 * 3e8);
        assert_relative_eq!(early, expected_early, max_relative = 1e-12);
    }

    #[test]
    fn test_expansion_frequency_zero_at_t_zero() {
        let term = ExpansionFrequency;
        let params: ParameterMap = [("aDPM", 1.0)].into_iter().collect();
        assert_eq!(term.evaluate(0.0, &params), 0.0);
        assert!(term.evaluate(1e10, &params) > 0.0);
    }

    #[test]
    fn test_fluid_frequency_independent_of_base() {
        let with_base: ParameterMap = [("aDPM", 1e30)].into_iter().collect();
        let without = ParameterMap::new();
        assert_relative_eq!(
            FluidFrequency.evaluate(0.0, &with_base),
            FluidFrequency.evaluate(0.0, &without),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_trz_and_wormhole() {
        assert_relative_eq!(TrzFactor.evaluate(0.0, &ParameterMap::new()), 0.1);

        let value = WormholeMetric.evaluate(0.0, &ParameterMap::new());
        assert_relative_eq!(value, 7.09e-36 / 2.0, max_relative = 1e-12);
    }

    #[test]
    fn test_oscillatory_is_zero() {
        assert_eq!(OscillatoryTerm.evaluate(123.0, &ParameterMap::new()), 0.0);
    }
}
