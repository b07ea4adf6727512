//! Intermediate stellar quantities used as inputs by the larger field terms
//!
//! These terms model one star's magnetic and rotational state. The physical
//! constants are configurable per instance so the same formulas serve other
//! stars, with solar values as the defaults.

use crate::params::ParameterMap;
use crate::term::PhysicsTerm;

const G: f64 = 6.674e-11;

/// mu_s(t): time-varying magnetic dipole moment.
#[derive(Debug, Clone, Copy)]
pub struct MagneticDipoleMoment {
    pub base_field: f64,
    pub cycle_freq: f64,
    pub stellar_radius: f64,
    pub scm_contribution: f64,
}

impl Default for MagneticDipoleMoment {
    fn default() -> Self {
        Self {
            base_field: 1e-4,
            cycle_freq: 2.7e-6,
            stellar_radius: 6.96e8,
            scm_contribution: 1e3,
        }
    }
}

impl PhysicsTerm for MagneticDipoleMoment {
    fn evaluate(&self, t: f64, _params: &ParameterMap) -> f64 {
        let bs_t = self.base_field + 0.4 * (self.cycle_freq * t).sin() + self.scm_contribution;
        bs_t * self.stellar_radius.powi(3)
    }

    fn validate(&self, _params: &ParameterMap) -> bool {
        self.stellar_radius > 0.0 && self.base_field >= 0.0
    }

    fn name(&self) -> &'static str {
        "MagneticDipoleMoment"
    }

    fn description(&self) -> &'static str {
        "mu_s(t): Time-varying magnetic dipole moment (Bs(t)*Rs^3)"
    }
}

/// grad(Ms/r): surface gravity gradient G*Ms/Rs^2.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceGravityGradient {
    pub mass: f64,
    pub radius: f64,
}

impl Default for SurfaceGravityGradient {
    fn default() -> Self {
        Self {
            mass: 1.989e30,
            radius: 6.96e8,
        }
    }
}

impl PhysicsTerm for SurfaceGravityGradient {
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
        "SurfaceGravityGradient"
    }

    fn description(&self) -> &'static str {
        "grad(Ms/r): Surface gravity gradient (G*Ms/Rs^2)"
    }
}

/// Bj(t): magnetic string field strength with solar-cycle modulation.
#[derive(Debug, Clone, Copy)]
pub struct MagneticStringField {
    pub cycle_freq: f64,
    pub scm_contribution: f64,
}

impl Default for MagneticStringField {
    fn default() -> Self {
        Self {
            cycle_freq: 2.7e-6,
            scm_contribution: 1e3,
        }
    }
}

impl PhysicsTerm for MagneticStringField {
    fn evaluate(&self, t: f64, _params: &ParameterMap) -> f64 {
        1e-3 + 0.4 * (self.cycle_freq * t).sin() + self.scm_contribution
    }

    fn name(&self) -> &'static str {
        "MagneticStringField"
    }

    fn description(&self) -> &'static str {
        "Bj(t): Magnetic string field strength with solar-cycle modulation"
    }
}

/// omega_s(t): rotation frequency with cyclic slowdown.
#[derive(Debug, Clone, Copy)]
pub struct TimeVaryingRotationFrequency {
    pub base_omega: f64,
    pub cycle_freq: f64,
}

impl Default for TimeVaryingRotationFrequency {
    fn default() -> Self {
        Self {
            base_omega: 2.7e-6,
            cycle_freq: 2.7e-6,
        }
    }
}

impl PhysicsTerm for TimeVaryingRotationFrequency {
    fn evaluate(&self, t: f64, _params: &ParameterMap) -> f64 {
        self.base_omega - 0.4e-6 * (self.cycle_freq * t).sin()
    }

    fn name(&self) -> &'static str {
        "TimeVaryingRotationFrequency"
    }

    fn description(&self) -> &'static str {
        "omega_s(t): Rotation frequency with cyclic slowdown"
    }
}

/// mu_j(t): string dipole moment Bj(t)*Rs^3.
#[derive(Debug, Clone, Copy)]
pub struct StringDipoleMoment {
    pub cycle_freq: f64,
    pub stellar_radius: f64,
    pub scm_contribution: f64,
}

impl Default for StringDipoleMoment {
    fn default() -> Self {
        Self {
            cycle_freq: 2.7e-6,
            stellar_radius: 6.96e8,
            scm_contribution: 1e3,
        }
    }
}

impl PhysicsTerm for StringDipoleMoment {
    fn evaluate(&self, t: f64, _params: &ParameterMap) -> f64 {
        let bj = 1e-3 + 0.4 * (self.cycle_freq * t).sin() + self.scm_contribution;
        bj * self.stellar_radius.powi(3)
    }

    fn validate(&self, _params: &ParameterMap) -> bool {
        self.stellar_radius > 0.0
    }

    fn name(&self) -> &'static str {
        "StringDipoleMoment"
    }

    fn description(&self) -> &'static str {
        "mu_j(t): String dipole moment (Bj(t)*Rs^3)"
    }
}

/// Ereact: superconductive reactor efficiency with exponential decay.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReactorEfficiency;

impl ReactorEfficiency {
    const KAPPA: f64 = 0.0005;
}

impl PhysicsTerm for ReactorEfficiency {
    fn evaluate(&self, t: f64, params: &ParameterMap) -> f64 {
        let rho_scm = params.get_or("rho_SCm", 1e15);
        let v_scm = params.get_or("v_SCm", 0.99 * 3e8);
        let rho_a = params.get_or("rho_A", 1e-23);

        (rho_scm * v_scm * v_scm / rho_a) * (-Self::KAPPA * t).exp()
    }

    fn validate(&self, params: &ParameterMap) -> bool {
        params.get_or("rho_A", 1e-23) != 0.0
    }

    fn name(&self) -> &'static str {
        "ReactorEfficiency"
    }

    fn description(&self) -> &'static str {
        "Ereact: Superconductive reactor efficiency (rho_SCm*v_SCm^2/rho_A*exp(-kappa*t))"
    }
}

/// Simplified Navier-Stokes update step for a quasar jet.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavierStokesQuasarJet;

impl NavierStokesQuasarJet {
    const DT_NS: f64 = 0.1;
}

impl PhysicsTerm for NavierStokesQuasarJet {
    fn evaluate(&self, _t: f64, params: &ParameterMap) -> f64 {
        let uqff_g = params.get_or("uqff_g", 0.0);
        let v_jet = params.get_or("v_jet", 0.99 * 3e8);

        Self::DT_NS * uqff_g + v_jet / 1e10
    }

    fn name(&self) -> &'static str {
        "NavierStokesQuasarJet"
    }

    fn description(&self) -> &'static str {
        "Simplified Navier-Stokes velocity update for a quasar jet"
    }
}
