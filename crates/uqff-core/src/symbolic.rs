//! Seam to an external symbolic verification service
//!
//! The service accepts a formatted expression string and answers with
//! either a numeric result or a human-readable error string prefixed
//! `[ERROR: ...]`. Replies starting with `[` are failure sentinels, never
//! numbers: they are logged and skipped, and never abort a simulation.

use tracing::warn;

/// External symbolic evaluation service.
pub trait SymbolicBridge {
    /// Evaluate an expression, returning either a numeric string or an
    /// `[ERROR: ...]` sentinel.
    fn eval_to_string(&self, expression: &str) -> String;
}

/// Interpret a bridge reply: `None` on the failure sentinel or on a reply
/// that does not parse as a number.
pub fn parse_symbolic(reply: &str) -> Option<f64> {
    let trimmed = reply.trim();
    if trimmed.starts_with('[') {
        warn!(reply = %trimmed, "symbolic bridge returned failure sentinel");
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(reply = %trimmed, "symbolic bridge reply is not numeric");
            None
        }
    }
}

/// Evaluate through the bridge and parse the reply in one step.
pub fn eval_symbolic(bridge: &dyn SymbolicBridge, expression: &str) -> Option<f64> {
    parse_symbolic(&bridge.eval_to_string(expression))
}

/// Stand-in used when no symbolic engine is linked: always answers with
/// the failure sentinel, so verification degrades to a logged warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineBridge;

impl SymbolicBridge for OfflineBridge {
    fn eval_to_string(&self, _expression: &str) -> String {
        "[ERROR: symbolic engine not linked]".to_string()
    }
}
