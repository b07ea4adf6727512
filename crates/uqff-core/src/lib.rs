//! uqff-core - UQFF physics term evaluation framework
//!
//! A registry of named, closed-form astrophysical formula evaluators
//! ("physics terms") driven by a time-stepping simulation harness.
//!
//! # Architecture
//!
//! - Terms are pure scalar functions `f(t, params) -> f64` behind one
//!   trait, registered by name with an explicit category tag
//! - A flat string-keyed [`ParameterMap`] carries inputs; every consumer
//!   defines a documented default for a missing key
//! - One fixed dependency (the base DPM acceleration) is computed first
//!   each round and injected into the map before dependents run
//! - The driver steps over a time range or sweeps one parameter, collects
//!   rounds and exports them as rectangular CSV
//!
//! # Example
//!
//! ```rust,ignore
//! use uqff_core::prelude::*;
//!
//! let mut registry = TermRegistry::new();
//! terms::register_all(&mut registry);
//!
//! let mut driver = SimulationDriver::new(&registry, AstrophysicalSystem::default());
//! let rounds = driver.run_time_series(0.0, 1e10, 1e9)?;
//! export::save_time_series("run.csv", rounds, driver.active_terms())?;
//! ```

pub mod catalogue;
pub mod driver;
pub mod engine;
pub mod error;
pub mod export;
pub mod params;
pub mod registry;
pub mod symbolic;
pub mod system;
pub mod term;
pub mod terms;

pub use catalogue::{SystemCatalogue, SystemKind, SystemRecord};
pub use driver::{RunSummary, SimulationDriver};
pub use engine::{EvaluationEngine, EvaluationRound, BASE_PARAM_KEY, BASE_TERM_NAME};
pub use error::ConfigError;
pub use export::ExportError;
pub use params::ParameterMap;
pub use registry::TermRegistry;
pub use symbolic::{parse_symbolic, OfflineBridge, SymbolicBridge};
pub use system::AstrophysicalSystem;
pub use term::{Category, PhysicsTerm};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::catalogue::{SystemCatalogue, SystemKind, SystemRecord};
    pub use crate::driver::{RunSummary, SimulationDriver};
    pub use crate::engine::{EvaluationEngine, EvaluationRound};
    pub use crate::error::ConfigError;
    pub use crate::export;
    pub use crate::params::ParameterMap;
    pub use crate::registry::TermRegistry;
    pub use crate::system::AstrophysicalSystem;
    pub use crate::term::{Category, PhysicsTerm};
    pub use crate::terms;
}
