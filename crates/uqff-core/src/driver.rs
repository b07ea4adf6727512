//! Simulation driver: repeats evaluation rounds over time or a parameter sweep

use std::time::Instant;

use tracing::{debug, info};

use crate::engine::{EvaluationEngine, EvaluationRound};
use crate::error::ConfigError;
use crate::registry::TermRegistry;
use crate::system::AstrophysicalSystem;

/// Condensed view of a finished run: endpoint subtotals and the largest
/// contributors (by absolute value) at the final step.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub rounds: usize,
    pub first_t: f64,
    pub last_t: f64,
    pub first_gravity: f64,
    pub first_resonance: f64,
    pub last_gravity: f64,
    pub last_resonance: f64,
    pub top_terms: Vec<(String, f64)>,
}

/// Repeats evaluation rounds over a time range or a parameter sweep and
/// collects the result series.
///
/// The series is append-only for the duration of one run and cleared at
/// the start of the next. Wall-clock elapsed time is logged as an
/// observability metric only and never affects results.
pub struct SimulationDriver<'r> {
    engine: EvaluationEngine<'r>,
    system: AstrophysicalSystem,
    active_terms: Vec<String>,
    results: Vec<EvaluationRound>,
}

impl<'r> SimulationDriver<'r> {
    /// Create a driver over `registry` with all registered terms active.
    pub fn new(registry: &'r TermRegistry, system: AstrophysicalSystem) -> Self {
        let active_terms = registry.names().iter().map(|s| s.to_string()).collect();
        Self {
            engine: EvaluationEngine::new(registry),
            system,
            active_terms,
            results: Vec::new(),
        }
    }

    /// Restrict evaluation to a subset of term names. Names that are not
    /// registered still get a 0.0 column in every round.
    pub fn set_active_terms(&mut self, terms: Vec<String>) {
        self.active_terms = terms;
    }

    /// Active term names, in column order.
    pub fn active_terms(&self) -> &[String] {
        &self.active_terms
    }

    pub fn system(&self) -> &AstrophysicalSystem {
        &self.system
    }

    /// Result series of the most recent run.
    pub fn results(&self) -> &[EvaluationRound] {
        &self.results
    }

    /// Run one evaluation round per time step from `t_start` to `t_end`
    /// inclusive, in increasing-time order.
    ///
    /// Step i evaluates at `t_start + i * dt` for
    /// `i = 0 ..= floor((t_end - t_start) / dt)`, so the series length is
    /// always `floor((t_end - t_start) / dt) + 1`.
    pub fn run_time_series(
        &mut self,
        t_start: f64,
        t_end: f64,
        dt: f64,
    ) -> Result<&[EvaluationRound], ConfigError> {
        if dt <= 0.0 {
            return Err(ConfigError::NonPositiveTimeStep { dt });
        }
        if t_end < t_start {
            return Err(ConfigError::ReversedTimeRange { t_start, t_end });
        }

        self.results.clear();
        let steps = ((t_end - t_start) / dt).floor() as usize;
        info!(
            system = %self.system.name,
            t_start,
            t_end,
            dt,
            active = self.active_terms.len(),
            "running time-series simulation"
        );

        let started = Instant::now();
        for i in 0..=steps {
            let t = t_start + i as f64 * dt;
            let mut params = self.system.to_params();
            params.insert("t", t);

            let round = self.engine.evaluate_round(t, &mut params, &self.active_terms);
            debug!(
                step = i,
                t,
                total_gravity = round.total_gravity,
                total_resonance = round.total_resonance,
                "round complete"
            );
            self.results.push(round);
        }

        info!(
            rounds = self.results.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "time-series simulation complete"
        );
        Ok(&self.results)
    }

    /// Vary one named parameter over `steps` equally spaced points in
    /// `[min, max]` (both ends inclusive) at a fixed evaluation time.
    ///
    /// Each point overlays the swept value onto a fresh copy of the system
    /// parameter map, runs the dependency injection and evaluation exactly
    /// as in time-series mode, and appends one round keyed by the swept
    /// value instead of by time.
    pub fn run_parameter_sweep(
        &mut self,
        param: &str,
        min: f64,
        max: f64,
        steps: usize,
        t_eval: f64,
    ) -> Result<&[EvaluationRound], ConfigError> {
        if steps < 2 {
            return Err(ConfigError::TooFewSweepSteps { steps });
        }
        if max <= min {
            return Err(ConfigError::EmptySweepRange { min, max });
        }

        self.results.clear();
        let step_size = (max - min) / (steps - 1) as f64;
        info!(
            param,
            min,
            max,
            steps,
            t_eval,
            "running parameter sweep"
        );

        let started = Instant::now();
        for i in 0..steps {
            let value = min + i as f64 * step_size;
            let mut params = self.system.to_params();
            params.insert(param, value);

            let mut round = self.engine.evaluate_round(t_eval, &mut params, &self.active_terms);
            round.t = value;
            self.results.push(round);
        }

        info!(
            rounds = self.results.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "parameter sweep complete"
        );
        Ok(&self.results)
    }

    /// Summarize the most recent run; `None` when no run has happened.
    pub fn summary(&self) -> Option<RunSummary> {
        let first = self.results.first()?;
        let last = self.results.last()?;

        let mut magnitudes: Vec<(String, f64)> = last
            .values
            .iter()
            .map(|(name, value)| (name.clone(), value.abs()))
            .collect();
        magnitudes.sort_by(|a, b| b.1.total_cmp(&a.1));
        magnitudes.truncate(5);

        Some(RunSummary {
            rounds: self.results.len(),
            first_t: first.t,
            last_t: last.t,
            first_gravity: first.total_gravity,
            first_resonance: first.total_resonance,
            last_gravity: last.total_gravity,
            last_resonance: last.total_resonance,
            top_terms: magnitudes,
        })
    }
}
