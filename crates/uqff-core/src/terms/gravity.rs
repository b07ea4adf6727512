//! Universal gravity, buoyancy, magnetism and aether components (Ug1-4,
//! Ubi, Um, A_mu_nu) plus the unified-field combination.
//!
//! Coefficients are fixed per term; inputs come from the parameter map
//! with the documented default used when a key is absent.

use std::f64::consts::PI;

use crate::params::ParameterMap;
use crate::term::PhysicsTerm;

/// Ug1: magnetic dipole-gradient gravity with defect modulation.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniversalGravity1;

impl UniversalGravity1 {
    const K1: f64 = 1.5;
    const ALPHA: f64 = 0.001;
    const DELTA_DEF: f64 = 0.01;
}

impl PhysicsTerm for UniversalGravity1 {
    fn evaluate(&self, t: f64, params: &ParameterMap) -> f64 {
        let mu_s = params.get_or("mu_s", 1e20);
        let grad_ms_r = params.get_or("grad_Ms_r", 1e-5);
        let tn = params.get_or("tn", t);

        let defect = 1.0 + Self::DELTA_DEF * (0.001 * t).sin();
        Self::K1 * mu_s * grad_ms_r * (-Self::ALPHA * t).exp() * (PI * tn).cos() * defect
    }

    fn name(&self) -> &'static str {
        "UniversalGravity1"
    }

    fn description(&self) -> &'static str {
        "Ug1: Magnetic dipole-gradient gravity with defect modulation (k1*mu_s*grad(M/r)*exp(-alpha*t)*cos(PI*tn)*defect)"
    }
}

/// Ug2: charge-reactivity gravity with solar wind modulation.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniversalGravity2;

impl UniversalGravity2 {
    const K2: f64 = 1.2;
    const QA: f64 = 1e-10;
    const DELTA_SW: f64 = 0.01;
    const V_SW: f64 = 5e5;
    const H_SCM: f64 = 1.0;
}

impl PhysicsTerm for UniversalGravity2 {
    fn evaluate(&self, _t: f64, params: &ParameterMap) -> f64 {
        let qua = params.get_or("QUA", 1e-11);
        let mass = params.get_or("mass", 1e30);
        let radius = params.get_or("radius", 1e13);
        let ereact = params.get_or("Ereact", 1.0);
        let step = params.get_or("step_function", 1.0);

        let wind_mod = 1.0 + Self::DELTA_SW * Self::V_SW;
        Self::K2 * (Self::QA + qua) * mass / (radius * radius) * step * wind_mod * Self::H_SCM * ereact
    }

    fn name(&self) -> &'static str {
        "UniversalGravity2"
    }

    fn description(&self) -> &'static str {
        "Ug2: Charge-reactivity gravity with solar wind modulation (k2*(QA+QUA)*M/r^2*S*wind_mod*HSCm*Ereact)"
    }
}

/// Ug3: magnetic string rotation gravity.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniversalGravity3;

impl UniversalGravity3 {
    const K3: f64 = 1.8;
}

impl PhysicsTerm for UniversalGravity3 {
    fn evaluate(&self, t: f64, params: &ParameterMap) -> f64 {
        let bj = params.get_or("Bj", 1e-3);
        let omega_s_t = params.get_or("omega_s_t", 1e-6);
        let pcore = params.get_or("Pcore", 1e-3);
        let ereact = params.get_or("Ereact", 1.0);

        Self::K3 * bj * (omega_s_t * t * PI).cos() * pcore * ereact
    }

    fn name(&self) -> &'static str {
        "UniversalGravity3"
    }

    fn description(&self) -> &'static str {
        "Ug3: Magnetic string rotation gravity (k3*Bj*cos(omega_s_t*t*PI)*Pcore*Ereact)"
    }
}

/// Ug4: vacuum energy concentration gravity.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniversalGravity4;

impl UniversalGravity4 {
    const K4: f64 = 2.0;
    const RHO_V: f64 = 6e-27;
    const CONCENTRATION: f64 = 1.0;
    const ALPHA: f64 = 0.001;
    const F_FEEDBACK: f64 = 0.1;
}

impl PhysicsTerm for UniversalGravity4 {
    fn evaluate(&self, t: f64, params: &ParameterMap) -> f64 {
        let mbh = params.get_or("Mbh", 8.15e36);
        let dg = params.get_or("dg", 2.55e20);
        let tn = params.get_or("tn", t);

        let decay = (-Self::ALPHA * t).exp();
        let cycle = (PI * tn).cos();
        Self::K4 * Self::RHO_V * Self::CONCENTRATION * mbh / dg * decay * cycle * (1.0 + Self::F_FEEDBACK)
    }

    fn name(&self) -> &'static str {
        "UniversalGravity4"
    }

    fn description(&self) -> &'static str {
        "Ug4: Vacuum energy concentration gravity (k4*rho_v*C*Mbh/dg*exp(-alpha*t)*cos(PI*tn)*(1+f_feedback))"
    }
}

/// Ubi: universal buoyancy from galactic rotation.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniversalBuoyancy;

impl UniversalBuoyancy {
    const BETA_I: f64 = 0.6;
    const OMEGA_G: f64 = 7.3e-16;
    const EPSILON_SW: f64 = 0.001;
    const UUA: f64 = 1.0;
}

impl PhysicsTerm for UniversalBuoyancy {
    fn evaluate(&self, t: f64, params: &ParameterMap) -> f64 {
        let ugi = params.get_or("Ugi", 1.0);
        let mbh = params.get_or("Mbh", 8.15e36);
        let dg = params.get_or("dg", 2.55e20);
        let rho_sw = params.get_or("rho_sw", 8e-21);
        let tn = params.get_or("tn", t);

        let wind_mod = 1.0 + Self::EPSILON_SW * rho_sw;
        -Self::BETA_I * ugi * Self::OMEGA_G * mbh / dg * wind_mod * Self::UUA * (PI * tn).cos()
    }

    fn name(&self) -> &'static str {
        "UniversalBuoyancy"
    }

    fn description(&self) -> &'static str {
        "Ubi: Universal buoyancy from galactic rotation (-beta_i*Ugi*Omega_g*Mbh/dg*wind_mod*UUA*cos(PI*tn))"
    }
}

/// Um: billion magnetic strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniversalMagnetism;

impl UniversalMagnetism {
    const GAMMA: f64 = 0.00005;
    const NUM_STRINGS: f64 = 1e9;
}

impl PhysicsTerm for UniversalMagnetism {
    fn evaluate(&self, t: f64, params: &ParameterMap) -> f64 {
        let mu_j = params.get_or("mu_j", 1e20);
        let rj = params.get_or("rj", 1e13);
        let pscm = params.get_or("PSCm", 1e-3);
        let ereact = params.get_or("Ereact", 1.0);
        let tn = params.get_or("tn", t);

        let decay = 1.0 - (-Self::GAMMA * t * (PI * tn).cos()).exp();
        let single = mu_j / rj * decay;
        single * Self::NUM_STRINGS * pscm * ereact
    }

    fn name(&self) -> &'static str {
        "UniversalMagnetism"
    }

    fn description(&self) -> &'static str {
        "Um: Billion magnetic strings (num_strings*mu_j/rj*(1-exp(-gamma*t*cos(PI*tn)))*PSCm*Ereact)"
    }
}

/// A_mu_nu: cosmic aether metric tensor trace.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniversalAether;

impl UniversalAether {
    const ETA: f64 = 1e-22;
    const TS00: f64 = 1.27e3 + 1.11e7;
}

impl PhysicsTerm for UniversalAether {
    fn evaluate(&self, t: f64, params: &ParameterMap) -> f64 {
        let tn = params.get_or("tn", t);

        // Trace of the perturbed Minkowski metric: -2 + 4*mod.
        let modulation = Self::ETA * Self::TS00 * (PI * tn).cos();
        -2.0 + 4.0 * modulation
    }

    fn name(&self) -> &'static str {
        "UniversalAether"
    }

    fn description(&self) -> &'static str {
        "A_mu_nu: Cosmic aether metric tensor trace (Minkowski + eta*Ts00*cos(PI*tn))"
    }
}

/// FU: complete unified field, summing precomputed component aggregates.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnifiedField;

impl PhysicsTerm for UnifiedField {
    fn evaluate(&self, _t: f64, params: &ParameterMap) -> f64 {
        let sum_ugi = params.get_or("sum_Ugi", 0.0);
        let sum_ubi = params.get_or("sum_Ubi", 0.0);
        let um = params.get_or("Um", 0.0);
        let a_scalar = params.get_or("A_scalar", 0.0);

        sum_ugi + sum_ubi + um + a_scalar
    }

    fn name(&self) -> &'static str {
        "UnifiedField"
    }

    fn description(&self) -> &'static str {
        "FU: Complete unified field (sum_Ugi + sum_Ubi + Um + A_mu_nu_trace)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ug1_at_origin() {
        let term = UniversalGravity1;
        let params = ParameterMap::new();

        // t = tn = 0: defect = 1, decay = 1, cos = 1.
        let expected = 1.5 * 1e20 * 1e-5;
        assert_relative_eq!(term.evaluate(0.0, &params), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_ug2_uses_map_overrides() {
        let term = UniversalGravity2;
        let params: ParameterMap = [("mass", 2e30), ("radius", 1e4)].into_iter().collect();

        let wind_mod = 1.0 + 0.01 * 5e5;
        let expected = 1.2 * (1e-10 + 1e-11) * 2e30 / 1e8 * wind_mod;
        assert_relative_eq!(term.evaluate(0.0, &params), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_buoyancy_is_negative_at_origin() {
        let term = UniversalBuoyancy;
        let value = term.evaluate(0.0, &ParameterMap::new());
        assert!(value < 0.0);
    }

    #[test]
    fn test_aether_trace_near_minkowski() {
        let term = UniversalAether;
        let value = term.evaluate(0.0, &ParameterMap::new());
        // eta*Ts00 ~ 1e-15, so the trace stays essentially -2.
        assert_relative_eq!(value, -2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_unified_field_sums_aggregates() {
        let term = UnifiedField;
        let params: ParameterMap = [
            ("sum_Ugi", 1.0),
            ("sum_Ubi", -0.5),
            ("Um", 2.0),
            ("A_scalar", 0.25),
        ]
        .into_iter()
        .collect();

        assert_relative_eq!(term.evaluate(0.0, &params), 2.75, epsilon = 1e-12);
        assert_relative_eq!(term.evaluate(0.0, &ParameterMap::new()), 0.0);
    }

    #[test]
    fn test_determinism() {
        let params: ParameterMap = [("tn", 0.3)].into_iter().collect();
        for term in [
            Box::new(UniversalGravity1) as Box<dyn PhysicsTerm>,
            Box::new(UniversalGravity3),
            Box::new(UniversalGravity4),
            Box::new(UniversalMagnetism),
        ] {
            let a = term.evaluate(1e7, &params);
            let b = term.evaluate(1e7, &params);
            assert_eq!(a.to_bits(), b.to_bits(), "{} not deterministic", term.name());
        }
    }
}
