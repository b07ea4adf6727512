//! String-keyed parameter map passed through each evaluation round

use std::collections::HashMap;

/// Mapping from parameter name to value.
///
/// Keys are unique, insertion order is irrelevant. A missing key is never
/// an error: consumers read through [`ParameterMap::get_or`] with their own
/// documented default. This is the substitute for strongly typed function
/// signatures across the heterogeneous term set.
#[derive(Debug, Clone, Default)]
pub struct ParameterMap {
    values: HashMap<String, f64>,
}

impl ParameterMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: f64) {
        self.values.insert(key.into(), value);
    }

    /// Exact lookup, `None` when absent.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    /// Lookup with a fallback default for a missing key.
    #[inline]
    pub fn get_or(&self, key: &str, default: f64) -> f64 {
        self.values.get(key).copied().unwrap_or(default)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for ParameterMap {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
