//! Owning registry of physics terms keyed by name

use indexmap::IndexMap;
use tracing::warn;

use crate::term::{Category, PhysicsTerm};

struct Entry {
    term: Box<dyn PhysicsTerm>,
    category: Category,
}

/// Owning collection mapping term name to term instance plus category tag.
///
/// Names are unique. Registering a duplicate name replaces the prior entry
/// (last write wins, count unchanged) and logs a warning so collisions stay
/// visible. Enumeration order is registration order.
#[derive(Default)]
pub struct TermRegistry {
    terms: IndexMap<String, Entry>,
}

impl TermRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `term` under `name` with its category tag.
    ///
    /// Overwrites silently when `name` already exists, apart from a
    /// registration-time warning; the entry keeps its original position.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        term: Box<dyn PhysicsTerm>,
        category: Category,
    ) {
        let name = name.into();
        if self.terms.contains_key(&name) {
            warn!(term = %name, "duplicate term registration, replacing prior entry");
        }
        self.terms.insert(name, Entry { term, category });
    }

    /// Look up a term by name. Never constructs a default term.
    pub fn get(&self, name: &str) -> Option<&dyn PhysicsTerm> {
        self.terms.get(name).map(|e| e.term.as_ref())
    }

    /// Category tag stored at registration time.
    pub fn category_of(&self, name: &str) -> Option<Category> {
        self.terms.get(name).map(|e| e.category)
    }

    /// All registered names, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.terms.keys().map(String::as_str).collect()
    }

    /// Names carrying the given category tag, in registration order.
    pub fn names_by_category(&self, category: Category) -> Vec<&str> {
        self.terms
            .iter()
            .filter(|(_, e)| e.category == category)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Number of registered terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
