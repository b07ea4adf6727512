//! Core physics term trait and category tags

use crate::params::ParameterMap;

/// Category assigned at registration time.
///
/// Round subtotals are computed from the stored tag, never by pattern
/// matching term names: everything tagged [`Category::Resonance`] goes
/// into the resonance subtotal, everything else into the gravity one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Universal gravity, buoyancy, magnetism and aether components
    Gravity,
    /// Complete unified field combination
    UnifiedField,
    /// Compressed / resonance MUGE equations and their components
    Muge,
    /// Modular breakdown of the compressed MUGE equation
    MugeCompressed,
    /// Resonance family; accumulates into the resonance subtotal
    Resonance,
    /// Named astrophysical system evaluations
    Astrophysics,
    /// Time-varying helper quantities consumed by other terms
    Helper,
}

impl Category {
    /// Whether values in this category accumulate into the resonance subtotal.
    #[inline]
    pub fn is_resonance(self) -> bool {
        matches!(self, Category::Resonance)
    }
}

/// A named, pure scalar function of time and a parameter map.
///
/// # Contract
///
/// - `evaluate` reads the parameter map but never mutates shared state;
///   two calls with identical `(t, params)` return bit-identical results
/// - Missing parameter keys are not an error: every implementation defines
///   a documented default for each key it reads (see [`ParameterMap::get_or`])
/// - A zero or otherwise invalid denominator makes `evaluate` return `0.0`
///   and `validate` return `false`; terms never panic on bad numerics
pub trait PhysicsTerm {
    /// Evaluate the term at time `t` with the given parameters.
    fn evaluate(&self, t: f64, params: &ParameterMap) -> f64;

    /// Pre-check that the parameters (and internal coefficients) are usable.
    ///
    /// Default accepts everything; terms that divide by a configurable
    /// mass, radius or critical field override this.
    fn validate(&self, _params: &ParameterMap) -> bool {
        true
    }

    /// Canonical term name.
    fn name(&self) -> &'static str;

    /// Human-readable formula description.
    fn description(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resonance_bucket() {
        assert!(Category::Resonance.is_resonance());
        assert!(!Category::Gravity.is_resonance());
        assert!(!Category::Muge.is_resonance());
        assert!(!Category::Helper.is_resonance());
    }
}
