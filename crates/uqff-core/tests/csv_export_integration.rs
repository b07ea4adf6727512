//! File-based CSV export tests for simulation runs
//!
//! Covers header layout, row counts, rectangularity and the scientific
//! number format on real files written through the public API.

use std::fs;
use std::path::PathBuf;

use uqff_core::export;
use uqff_core::prelude::*;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(name)
}

fn read_and_cleanup(path: &PathBuf) -> String {
    let contents = fs::read_to_string(path).expect("failed to read exported CSV");
    let _ = fs::remove_file(path);
    contents
}

fn full_registry() -> TermRegistry {
    let mut registry = TermRegistry::new();
    terms::register_all(&mut registry);
    registry
}

#[test]
fn test_time_series_file_layout() {
    let registry = full_registry();
    let mut driver = SimulationDriver::new(&registry, AstrophysicalSystem::default());
    driver.run_time_series(0.0, 4.0, 1.0).unwrap();

    let path = temp_path("uqff_test_time_series.csv");
    let order: Vec<String> = driver.active_terms().to_vec();
    export::save_time_series(&path, driver.results(), &order).unwrap();

    let contents = read_and_cleanup(&path);
    let lines: Vec<&str> = contents.lines().collect();

    // Header plus five data rows.
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("t,total_gravity,total_resonance,UniversalGravity1"));

    // Rectangular: t + 2 subtotals + 46 term columns everywhere.
    let expected_cols = 3 + 46;
    for line in &lines {
        assert_eq!(line.split(',').count(), expected_cols);
    }

    // Scientific notation with six fractional digits.
    assert!(lines[1].starts_with("0.000000e0,"));
    assert!(lines[5].starts_with("4.000000e0,"));
}

#[test]
fn test_sweep_file_layout() {
    let registry = full_registry();
    let mut driver = SimulationDriver::new(&registry, AstrophysicalSystem::default());
    driver.run_parameter_sweep("Bs_t", 1e13, 1e16, 4, 0.0).unwrap();

    let path = temp_path("uqff_test_sweep.csv");
    export::save_sweep(&path, "Bs_t", driver.results()).unwrap();

    let contents = read_and_cleanup(&path);
    let lines: Vec<&str> = contents.lines().collect();

    assert_eq!(lines[0], "Bs_t,total_gravity,total_resonance");
    assert_eq!(lines.len(), 5);
    assert!(lines[1].starts_with("1.000000e13,"));
    assert!(lines[4].starts_with("1.000000e16,"));
}

#[test]
fn test_export_failure_leaves_results_intact() {
    let registry = full_registry();
    let mut driver = SimulationDriver::new(&registry, AstrophysicalSystem::default());
    driver.run_time_series(0.0, 1.0, 1.0).unwrap();

    let order: Vec<String> = driver.active_terms().to_vec();
    let bogus = PathBuf::from("/nonexistent-dir/uqff.csv");
    assert!(export::save_time_series(&bogus, driver.results(), &order).is_err());

    // The in-memory series survives for a retry elsewhere.
    assert_eq!(driver.results().len(), 2);
    let good = temp_path("uqff_test_retry.csv");
    export::save_time_series(&good, driver.results(), &order).unwrap();
    let _ = fs::remove_file(&good);
}
