//! Evaluation engine: one round over the active term set

use crate::params::ParameterMap;
use crate::registry::TermRegistry;

/// Name of the base dependency term evaluated before all others.
pub const BASE_TERM_NAME: &str = "MUGEResonanceADPM";

/// Parameter key the base term's output is injected under.
pub const BASE_PARAM_KEY: &str = "aDPM";

/// Result of evaluating all active terms at one axis value.
///
/// `t` is the evaluation time in time-series mode, or the swept parameter
/// value in sweep mode. Values are stored in active-term order so export
/// columns stay stable; immutable once appended to a result series.
#[derive(Debug, Clone)]
pub struct EvaluationRound {
    pub t: f64,
    pub values: Vec<(String, f64)>,
    pub total_gravity: f64,
    pub total_resonance: f64,
}

impl EvaluationRound {
    /// Value recorded for `name` in this round, `None` when the name was
    /// not part of the active set.
    pub fn value(&self, name: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }
}

/// Drives one evaluation round over an active term subset.
pub struct EvaluationEngine<'r> {
    registry: &'r TermRegistry,
}

impl<'r> EvaluationEngine<'r> {
    pub fn new(registry: &'r TermRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &TermRegistry {
        self.registry
    }

    /// Dependency-resolution step: evaluate the base term and inject its
    /// output into the map before dependents are evaluated.
    ///
    /// When the base term is absent the key is simply not injected and
    /// dependents fall back to their own default for it. The value is
    /// recomputed fresh each round; there is no cross-round caching.
    pub fn inject_base_dependency(&self, t: f64, params: &mut ParameterMap) {
        if let Some(base) = self.registry.get(BASE_TERM_NAME) {
            let value = base.evaluate(t, params);
            params.insert(BASE_PARAM_KEY, value);
        }
    }

    /// Evaluate every name in `active` at axis value `t`.
    ///
    /// Every active name gets an entry in the round: terms that are missing
    /// from the registry or fail `validate` are recorded as `0.0`, never
    /// skipped, so the result set stays rectangular. Subtotals are the
    /// arithmetic sum over the stored category tags; units across terms are
    /// intentionally heterogeneous and the engine does not normalize them.
    pub fn evaluate_round(
        &self,
        t: f64,
        params: &mut ParameterMap,
        active: &[String],
    ) -> EvaluationRound {
        self.inject_base_dependency(t, params);

        let mut values = Vec::with_capacity(active.len());
        let mut total_gravity = 0.0;
        let mut total_resonance = 0.0;

        for name in active {
            let value = match self.registry.get(name) {
                Some(term) if term.validate(params) => term.evaluate(t, params),
                _ => 0.0,
            };
            values.push((name.clone(), value));

            let resonance = self
                .registry
                .category_of(name)
                .map(|c| c.is_resonance())
                .unwrap_or(false);
            if resonance {
                total_resonance += value;
            } else {
                total_gravity += value;
            }
        }

        EvaluationRound {
            t,
            values,
            total_gravity,
            total_resonance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::{Category, PhysicsTerm};
    use approx::assert_relative_eq;

    struct Fixed {
        name: &'static str,
        value: f64,
    }

    impl PhysicsTerm for Fixed {
        fn evaluate(&self, _t: f64, _params: &ParameterMap) -> f64 {
            self.value
        }
        fn name(&self) -> &'static str {
            self.name
        }
        fn description(&self) -> &'static str {
            "constant test term"
        }
    }

    struct Rejecting;

    impl PhysicsTerm for Rejecting {
        fn evaluate(&self, _t: f64, _params: &ParameterMap) -> f64 {
            99.0
        }
        fn validate(&self, _params: &ParameterMap) -> bool {
            false
        }
        fn name(&self) -> &'static str {
            "Rejecting"
        }
        fn description(&self) -> &'static str {
            "always fails validation"
        }
    }

    /// Reads the injected base value back out of the parameter map.
    struct ReadsBase;

    impl PhysicsTerm for ReadsBase {
        fn evaluate(&self, _t: f64, params: &ParameterMap) -> f64 {
            params.get_or(BASE_PARAM_KEY, -1.0)
        }
        fn name(&self) -> &'static str {
            "ReadsBase"
        }
        fn description(&self) -> &'static str {
            "echoes the injected base dependency"
        }
    }

    fn active(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_subtotals_follow_category_tags() {
        let mut registry = TermRegistry::new();
        registry.register("G1", Box::new(Fixed { name: "G1", value: 2.0 }), Category::Gravity);
        registry.register("G2", Box::new(Fixed { name: "G2", value: 3.0 }), Category::Muge);
        registry.register("R1", Box::new(Fixed { name: "R1", value: 5.0 }), Category::Resonance);

        let engine = EvaluationEngine::new(&registry);
        let mut params = ParameterMap::new();
        let round = engine.evaluate_round(0.0, &mut params, &active(&["G1", "G2", "R1"]));

        assert_relative_eq!(round.total_gravity, 5.0, epsilon = 1e-12);
        assert_relative_eq!(round.total_resonance, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_every_active_name_has_an_entry() {
        let mut registry = TermRegistry::new();
        registry.register("G1", Box::new(Fixed { name: "G1", value: 2.0 }), Category::Gravity);
        registry.register("Rejecting", Box::new(Rejecting), Category::Gravity);

        let engine = EvaluationEngine::new(&registry);
        let mut params = ParameterMap::new();
        let names = active(&["G1", "Rejecting", "Missing"]);
        let round = engine.evaluate_round(0.0, &mut params, &names);

        assert_eq!(round.values.len(), 3);
        assert_eq!(round.value("G1"), Some(2.0));
        assert_eq!(round.value("Rejecting"), Some(0.0));
        assert_eq!(round.value("Missing"), Some(0.0));
    }

    #[test]
    fn test_base_dependency_injected_before_dependents() {
        let mut registry = TermRegistry::new();
        registry.register(
            BASE_TERM_NAME,
            Box::new(Fixed { name: BASE_TERM_NAME, value: 7.5 }),
            Category::Resonance,
        );
        registry.register("ReadsBase", Box::new(ReadsBase), Category::Resonance);

        let engine = EvaluationEngine::new(&registry);
        let mut params = ParameterMap::new();
        let round = engine.evaluate_round(0.0, &mut params, &active(&["ReadsBase"]));

        assert_eq!(round.value("ReadsBase"), Some(7.5));
        assert_eq!(params.get(BASE_PARAM_KEY), Some(7.5));
    }

    #[test]
    fn test_absent_base_term_leaves_key_uninjected() {
        let mut registry = TermRegistry::new();
        registry.register("ReadsBase", Box::new(ReadsBase), Category::Resonance);

        let engine = EvaluationEngine::new(&registry);
        let mut params = ParameterMap::new();
        let round = engine.evaluate_round(0.0, &mut params, &active(&["ReadsBase"]));

        // Falls back to the term's own default for the key.
        assert_eq!(round.value("ReadsBase"), Some(-1.0));
        assert!(!params.contains(BASE_PARAM_KEY));
    }
}
