//! Static catalogue of named astrophysical systems

use indexmap::IndexMap;

/// Coarse classification of catalogued systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SystemKind {
    Magnetar,
    SupermassiveBlackHole,
    Galaxy,
    StarFormingRegion,
    Nebula,
    PlanetarySystem,
    Quasar,
    StellarCluster,
    #[default]
    Unknown,
}

/// Fixed bundle of observed physical parameters for one system.
///
/// All quantities in SI units. The default record is the documented
/// "unknown" result: zeroed fields and [`SystemKind::Unknown`].
#[derive(Debug, Clone, Default)]
pub struct SystemRecord {
    pub name: String,
    pub kind: SystemKind,
    pub mass: f64,                  // kg
    pub radius: f64,                // m
    pub distance: f64,              // m
    pub magnetic_field: f64,        // T
    pub redshift: f64,
    pub luminosity: f64,            // W
    pub temperature: f64,           // K
    pub system_volume: f64,         // m^3
    pub dark_matter_mass: f64,      // kg
    pub vacuum_energy_density: f64, // J/m^3
    pub catalog_id: String,
}

/// Read-only lookup from short identifier to a [`SystemRecord`].
///
/// Unknown identifiers yield the default record rather than failing.
pub struct SystemCatalogue {
    systems: IndexMap<String, SystemRecord>,
}

impl Default for SystemCatalogue {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCatalogue {
    /// Build the catalogue with its built-in systems.
    pub fn new() -> Self {
        let mut catalogue = Self {
            systems: IndexMap::new(),
        };

        catalogue.add(
            "SGR1745",
            SystemRecord {
                name: "SGR 1745-2900".to_string(),
                kind: SystemKind::Magnetar,
                mass: 2.984e30,
                radius: 1.2e4,
                distance: 2.55e20,
                magnetic_field: 1e10,
                luminosity: 3.8e32,
                catalog_id: "SGR 1745-2900".to_string(),
                ..SystemRecord::default()
            },
        );

        catalogue.add(
            "SGRA_STAR",
            SystemRecord {
                name: "Sagittarius A*".to_string(),
                kind: SystemKind::SupermassiveBlackHole,
                mass: 8.155e36,
                radius: 1.2e10,
                distance: 2.55e20,
                dark_matter_mass: 1e37,
                system_volume: 3.552e45,
                catalog_id: "Sgr A*".to_string(),
                ..SystemRecord::default()
            },
        );

        catalogue.add(
            "M82",
            SystemRecord {
                name: "M82".to_string(),
                kind: SystemKind::Galaxy,
                mass: 5e40,
                radius: 3.7e20,
                distance: 1.1e23,
                luminosity: 5e37,
                catalog_id: "M82 / NGC 3034".to_string(),
                ..SystemRecord::default()
            },
        );

        catalogue.add(
            "TEMPLATE",
            SystemRecord {
                name: "Template System".to_string(),
                ..SystemRecord::default()
            },
        );

        catalogue
    }

    /// Add or replace a system record.
    pub fn add(&mut self, id: impl Into<String>, record: SystemRecord) {
        self.systems.insert(id.into(), record);
    }

    /// Parameters for `id`; the default record when the id is unknown.
    pub fn get(&self, id: &str) -> SystemRecord {
        self.systems.get(id).cloned().unwrap_or_default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.systems.contains_key(id)
    }

    /// All identifiers, in insertion order.
    pub fn ids(&self) -> Vec<&str> {
        self.systems.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_systems_present() {
        let catalogue = SystemCatalogue::new();
        assert_eq!(catalogue.len(), 4);
        assert!(catalogue.contains("SGR1745"));
        assert!(catalogue.contains("SGRA_STAR"));

        let sgra = catalogue.get("SGRA_STAR");
        assert_eq!(sgra.kind, SystemKind::SupermassiveBlackHole);
        assert_eq!(sgra.mass, 8.155e36);
        assert_eq!(sgra.dark_matter_mass, 1e37);
    }

    #[test]
    fn test_unknown_id_yields_default_record() {
        let catalogue = SystemCatalogue::new();
        let record = catalogue.get("NGC_DOES_NOT_EXIST");

        assert_eq!(record.kind, SystemKind::Unknown);
        assert_eq!(record.mass, 0.0);
        assert!(record.name.is_empty());
    }

    #[test]
    fn test_ids_in_insertion_order() {
        let catalogue = SystemCatalogue::new();
        assert_eq!(catalogue.ids(), vec!["SGR1745", "SGRA_STAR", "M82", "TEMPLATE"]);
    }
}
