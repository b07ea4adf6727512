//! Magnetic Universal Gravity Equation (MUGE) terms
//!
//! Two combined equations plus the nine modular components that make up the
//! compressed form. The combined terms read their inputs from the parameter
//! map; the components carry their inputs as instance fields so a component
//! can be re-pointed at another system without touching the shared map.
//!
//! Components that divide by a configurable quantity soft-fail: a zero
//! denominator yields 0.0 from `evaluate` and `false` from `validate`,
//! so one misconfigured term can never abort a whole round.

use std::f64::consts::PI;

use crate::params::ParameterMap;
use crate::term::PhysicsTerm;

const G: f64 = 6.674e-11;
const H0: f64 = 2.269e-18;
const LAMBDA: f64 = 1.1e-52;
const HBAR: f64 = 1.0546e-34;

/// Combined compressed MUGE: adjusted Newtonian base plus cosmological,
/// quantum, fluid and perturbation contributions.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompressedMuge;

impl CompressedMuge {
    const G_PRECISE: f64 = 6.67430e-11;
    const C: f64 = 3.0e8;
    const DELTA_X_P: f64 = 1e-68;
    const INTEGRAL_PSI: f64 = 2.176e-18;
    const T_HUBBLE: f64 = 4.35e17;
}

impl PhysicsTerm for CompressedMuge {
    fn evaluate(&self, t: f64, params: &ParameterMap) -> f64 {
        let mass = params.get_or("mass", 1e30);
        let radius = params.get_or("radius", 1e4);
        let b_field = params.get_or("B_field", 1e10);
        let bcrit = params.get_or("Bcrit", 1e11);
        let rho_fluid = params.get_or("rho_fluid", 1e-15);
        let vsys = params.get_or("Vsys", 4.189e12);
        let g_local = params.get_or("g_local", 10.0);
        let m_dm = params.get_or("M_DM", 0.0);
        let delta_rho_rho = params.get_or("delta_rho_rho", 1e-5);

        if radius == 0.0 || bcrit == 0.0 {
            return 0.0;
        }

        let base = Self::G_PRECISE * mass / (radius * radius);
        let expansion = 1.0 + H0 * t;
        let super_adj = 1.0 - b_field / bcrit;
        let envelope = 1.0;
        let adjusted_base = base * expansion * super_adj * envelope;

        let cosm = LAMBDA * Self::C * Self::C / 3.0;
        let quantum = (HBAR / Self::DELTA_X_P) * Self::INTEGRAL_PSI * (2.0 * PI / Self::T_HUBBLE);
        let fluid = rho_fluid * vsys * g_local;
        let perturbation =
            (mass + m_dm) * (delta_rho_rho + 3.0 * Self::G_PRECISE * mass / (radius * radius * radius));

        adjusted_base + cosm + quantum + fluid + perturbation
    }

    fn validate(&self, params: &ParameterMap) -> bool {
        params.get_or("radius", 1e4) != 0.0 && params.get_or("Bcrit", 1e11) != 0.0
    }

    fn name(&self) -> &'static str {
        "CompressedMUGE"
    }

    fn description(&self) -> &'static str {
        "Compressed MUGE: 9-term gravity equation (base*expansion*super_adj + cosm + quantum + fluid + perturbation)"
    }
}

/// Combined resonance MUGE: the thirteen resonance contributions summed,
/// seeded by the internally computed DPM acceleration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResonanceMuge;

impl ResonanceMuge {
    const F_DPM: f64 = 1e12;
    const F_THZ: f64 = 1e12;
    const EVAC_NEB: f64 = 7.09e-36;
    const EVAC_ISM: f64 = 7.09e-37;
    const DELTA_EVAC: f64 = 6.381e-36;
    const F_SUPER: f64 = 6.287e-19;
    const UA_SCM: f64 = 10.0;
    const OMEGA_I: f64 = 1e-8;
    const K4_RES: f64 = 1.0;
    const F_REACT: f64 = 1e10;
    const F_QUANTUM: f64 = 1.445e-17;
    const F_AETHER: f64 = 1.576e-35;
    const F_TRZ: f64 = 0.1;
    const C_RES: f64 = 3e8;
    const H_Z: f64 = 2.270e-18;
}

impl PhysicsTerm for ResonanceMuge {
    fn evaluate(&self, t: f64, params: &ParameterMap) -> f64 {
        let inertia = params.get_or("I", 1e21);
        let area = params.get_or("A", 3.142e8);
        let omega1 = params.get_or("omega1", 1e-3);
        let omega2 = params.get_or("omega2", -1e-3);
        let vsys = params.get_or("Vsys", 4.189e12);
        let vexp = params.get_or("vexp", 1e3);
        let ffluid = params.get_or("ffluid", 1.269e-14);
        let r = params.get_or("radius", 1e4);

        let f_dpm_force = inertia * area * (omega1 - omega2);
        let a_dpm = f_dpm_force * Self::F_DPM * Self::EVAC_NEB * Self::C_RES * vsys;

        let a_thz = Self::F_THZ * Self::EVAC_NEB * vexp * a_dpm / Self::EVAC_ISM / Self::C_RES;
        let a_vac_diff =
            Self::DELTA_EVAC * vexp * vexp * a_dpm / Self::EVAC_NEB / (Self::C_RES * Self::C_RES);
        let a_super_freq = Self::F_SUPER * Self::F_THZ * a_dpm / Self::EVAC_NEB / Self::C_RES;
        let a_aether_res = Self::UA_SCM * Self::OMEGA_I * Self::F_THZ * a_dpm * (1.0 + Self::F_TRZ);

        let ereact = 1046.0 * (-0.0005 * t).exp();
        let ug4i = Self::K4_RES * ereact * Self::F_REACT * a_dpm / Self::EVAC_NEB * Self::C_RES;

        let a_quantum_freq = Self::F_QUANTUM * Self::EVAC_NEB * a_dpm / Self::EVAC_ISM / Self::C_RES;
        let a_aether_freq = Self::F_AETHER * Self::EVAC_NEB * a_dpm / Self::EVAC_ISM / Self::C_RES;
        let a_fluid_freq = ffluid * Self::EVAC_NEB * vsys / Self::EVAC_ISM / Self::C_RES;

        let osc = 0.0;

        let fexp = 2.0 * PI * Self::H_Z * t;
        let a_exp_freq = fexp * Self::EVAC_NEB * a_dpm / Self::EVAC_ISM / Self::C_RES;

        let f_trz = Self::F_TRZ;

        let (b, f_worm) = (1.0, 1.0);
        let a_wormhole = f_worm * Self::EVAC_NEB / (b * b + r * r);

        a_dpm
            + a_thz
            + a_vac_diff
            + a_super_freq
            + a_aether_res
            + ug4i
            + a_quantum_freq
            + a_aether_freq
            + a_fluid_freq
            + osc
            + a_exp_freq
            + f_trz
            + a_wormhole
    }

    fn name(&self) -> &'static str {
        "ResonanceMUGE"
    }

    fn description(&self) -> &'static str {
        "Resonance MUGE: 13-term resonance equation (aDPM + aTHz + avac_diff + ... + wormhole)"
    }
}

/// Newtonian gravitational base of the compressed equation.
#[derive(Debug, Clone, Copy)]
pub struct CompressedBase {
    pub mass: f64,
    pub radius: f64,
}

impl Default for CompressedBase {
    fn default() -> Self {
        Self {
            mass: 2.984e30,
            radius: 1e4,
        }
    }
}

impl PhysicsTerm for CompressedBase {
    fn evaluate(&self, _t: f64, _params: &ParameterMap) -> f64 {
        if self.radius == 0.0 {
            return 0.0;
        }
        G * self.mass / (self.radius * self.radius)
    }

    fn validate(&self, _params: &ParameterMap) -> bool {
        self.mass > 0.0 && self.radius > 0.0
    }

    fn name(&self) -> &'static str {
        "CompressedBase"
    }

    fn description(&self) -> &'static str {
        "Compressed MUGE base term: G*M/r^2 (Newtonian gravitational acceleration)"
    }
}

/// Hubble expansion factor, keyed by a fixed system age.
#[derive(Debug, Clone, Copy)]
pub struct ExpansionFactor {
    pub system_age: f64,
}

impl Default for ExpansionFactor {
    fn default() -> Self {
        Self { system_age: 3.799e10 }
    }
}

impl PhysicsTerm for ExpansionFactor {
    fn evaluate(&self, _t: f64, _params: &ParameterMap) -> f64 {
        1.0 + H0 * self.system_age
    }

    fn validate(&self, _params: &ParameterMap) -> bool {
        self.system_age >= 0.0
    }

    fn name(&self) -> &'static str {
        "ExpansionFactor"
    }

    fn description(&self) -> &'static str {
        "Hubble expansion factor: 1 + H0*t where H0 = 2.269e-18 s^-1 (dimensionless)"
    }
}

/// Superconductive suppression of the base acceleration.
#[derive(Debug, Clone, Copy)]
pub struct SuperconductiveAdjustment {
    pub field: f64,
    pub critical_field: f64,
}

impl Default for SuperconductiveAdjustment {
    fn default() -> Self {
        Self {
            field: 1e10,
            critical_field: 1e11,
        }
    }
}

impl PhysicsTerm for SuperconductiveAdjustment {
    fn evaluate(&self, _t: f64, _params: &ParameterMap) -> f64 {
        if self.critical_field == 0.0 {
            return 0.0;
        }
        1.0 - self.field / self.critical_field
    }

    fn validate(&self, _params: &ParameterMap) -> bool {
        self.critical_field > 0.0 && self.field >= 0.0
    }

    fn name(&self) -> &'static str {
        "SuperconductiveAdjustment"
    }

    fn description(&self) -> &'static str {
        "Superconductive magnetic adjustment: 1 - B/Bcrit (dimensionless suppression factor)"
    }
}

/// Neutral envelope modulation, an extension point for stellar envelopes.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvelopeModulation;

impl PhysicsTerm for EnvelopeModulation {
    fn evaluate(&self, _t: f64, _params: &ParameterMap) -> f64 {
        1.0
    }

    fn name(&self) -> &'static str {
        "EnvelopeModulation"
    }

    fn description(&self) -> &'static str {
        "Envelope modulation factor (currently neutral = 1.0)"
    }
}

/// Placeholder aggregate of the Ug1-4 components.
#[derive(Debug, Clone, Copy, Default)]
pub struct UgSum;

impl PhysicsTerm for UgSum {
    fn evaluate(&self, _t: f64, _params: &ParameterMap) -> f64 {
        0.0
    }

    fn name(&self) -> &'static str {
        "UgSum"
    }

    fn description(&self) -> &'static str {
        "Sum of Ug1-4 components (simplified to 0)"
    }
}

/// Dark-energy acceleration from the cosmological constant.
#[derive(Debug, Clone, Copy, Default)]
pub struct CosmologicalTerm;

impl CosmologicalTerm {
    const C: f64 = 2.998e8;
}

impl PhysicsTerm for CosmologicalTerm {
    fn evaluate(&self, _t: f64, _params: &ParameterMap) -> f64 {
        LAMBDA * Self::C * Self::C / 3.0
    }

    fn name(&self) -> &'static str {
        "CosmologicalTerm"
    }

    fn description(&self) -> &'static str {
        "Cosmological constant term: Lambda*c^2/3 where Lambda = 1.1e-52 m^-2"
    }
}

/// Quantum uncertainty correction over the Hubble time.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuantumCorrection;

impl QuantumCorrection {
    const DELTA_X_P: f64 = 1e-68;
    const INTEGRAL_PSI: f64 = 2.176e-18;
    const T_HUBBLE: f64 = 4.35e17;
}

impl PhysicsTerm for QuantumCorrection {
    fn evaluate(&self, _t: f64, _params: &ParameterMap) -> f64 {
        (HBAR / Self::DELTA_X_P) * Self::INTEGRAL_PSI * (2.0 * PI / Self::T_HUBBLE)
    }

    fn name(&self) -> &'static str {
        "QuantumCorrection"
    }

    fn description(&self) -> &'static str {
        "Quantum uncertainty term: (hbar/Delta_xp)*integral_psi*(2*PI/tHubble)"
    }
}

/// Navier-Stokes fluid coupling force.
#[derive(Debug, Clone, Copy)]
pub struct FluidCoupling {
    pub density: f64,
    pub volume: f64,
    pub g_local: f64,
}

impl Default for FluidCoupling {
    fn default() -> Self {
        Self {
            density: 1e-15,
            volume: 4.189e12,
            g_local: 10.0,
        }
    }
}

impl PhysicsTerm for FluidCoupling {
    fn evaluate(&self, _t: f64, _params: &ParameterMap) -> f64 {
        self.density * self.volume * self.g_local
    }

    fn validate(&self, _params: &ParameterMap) -> bool {
        self.density >= 0.0 && self.volume > 0.0 && self.g_local >= 0.0
    }

    fn name(&self) -> &'static str {
        "FluidCoupling"
    }

    fn description(&self) -> &'static str {
        "Fluid dynamics term: rho_fluid * Vsys * g_local (units: N)"
    }
}

/// Dark-matter density perturbation.
#[derive(Debug, Clone, Copy)]
pub struct DensityPerturbation {
    pub mass: f64,
    pub dark_matter_mass: f64,
    pub delta_rho_rho: f64,
    pub radius: f64,
}

impl Default for DensityPerturbation {
    fn default() -> Self {
        Self {
            mass: 2.984e30,
            dark_matter_mass: 0.0,
            delta_rho_rho: 1e-5,
            radius: 1e4,
        }
    }
}

impl PhysicsTerm for DensityPerturbation {
    fn evaluate(&self, _t: f64, _params: &ParameterMap) -> f64 {
        if self.radius == 0.0 {
            return 0.0;
        }
        let r3 = self.radius * self.radius * self.radius;
        (self.mass + self.dark_matter_mass) * (self.delta_rho_rho + 3.0 * G * self.mass / r3)
    }

    fn validate(&self, _params: &ParameterMap) -> bool {
        self.mass >= 0.0 && self.dark_matter_mass >= 0.0 && self.radius > 0.0
    }

    fn name(&self) -> &'static str {
        "DensityPerturbation"
    }

    fn description(&self) -> &'static str {
        "Dark matter perturbation: (M+M_DM)*(delta_rho/rho + 3*G*M/r^3)"
    }
}
