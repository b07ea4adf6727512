//! CSV export for result series
//!
//! Rows are rectangular by construction: every row has the same columns as
//! the header, with absent terms recorded as 0.0. Values use scientific
//! notation with six digits of fractional precision. Export failures leave
//! the in-memory result series intact for retry or alternate export.

use std::io::Write;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::engine::EvaluationRound;

/// Export I/O failure, reported distinctly from computation errors.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("cannot write output file: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv formatting failed: {0}")]
    Csv(#[from] csv::Error),
}

fn sci(value: f64) -> String {
    format!("{:.6e}", value)
}

/// Write a time-series run to `writer`.
///
/// Header: `t,total_gravity,total_resonance,<term...>` with term columns in
/// the given enumeration order.
pub fn write_time_series<W: Write>(
    writer: W,
    rounds: &[EvaluationRound],
    term_order: &[String],
) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["t".to_string(), "total_gravity".to_string(), "total_resonance".to_string()];
    header.extend(term_order.iter().cloned());
    wtr.write_record(&header)?;

    for round in rounds {
        let mut record = vec![sci(round.t), sci(round.total_gravity), sci(round.total_resonance)];
        for name in term_order {
            record.push(sci(round.value(name).unwrap_or(0.0)));
        }
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Save a time-series run to a CSV file.
pub fn save_time_series<P: AsRef<Path>>(
    path: P,
    rounds: &[EvaluationRound],
    term_order: &[String],
) -> Result<(), ExportError> {
    let file = std::fs::File::create(path.as_ref())?;
    write_time_series(file, rounds, term_order)?;
    info!(path = %path.as_ref().display(), rows = rounds.len(), "time-series export complete");
    Ok(())
}

/// Write a parameter sweep to `writer`.
///
/// Header: `<param_name>,total_gravity,total_resonance`; one row per sweep
/// point, keyed by the swept value.
pub fn write_sweep<W: Write>(
    writer: W,
    param_name: &str,
    rounds: &[EvaluationRound],
) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record([param_name, "total_gravity", "total_resonance"])?;
    for round in rounds {
        wtr.write_record([sci(round.t), sci(round.total_gravity), sci(round.total_resonance)])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Save a parameter sweep to a CSV file.
pub fn save_sweep<P: AsRef<Path>>(
    path: P,
    param_name: &str,
    rounds: &[EvaluationRound],
) -> Result<(), ExportError> {
    let file = std::fs::File::create(path.as_ref())?;
    write_sweep(file, param_name, rounds)?;
    info!(path = %path.as_ref().display(), rows = rounds.len(), "sweep export complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(t: f64, values: &[(&str, f64)], gravity: f64, resonance: f64) -> EvaluationRound {
        EvaluationRound {
            t,
            values: values.iter().map(|(n, v)| (n.to_string(), *v)).collect(),
            total_gravity: gravity,
            total_resonance: resonance,
        }
    }

    #[test]
    fn test_time_series_header_and_column_order() {
        let rounds = vec![round(0.0, &[("A", 1.0), ("B", 2.0)], 3.0, 0.0)];
        let order = vec!["A".to_string(), "B".to_string()];

        let mut buffer = Vec::new();
        write_time_series(&mut buffer, &rounds, &order).unwrap();
        let csv = String::from_utf8(buffer).unwrap();
        let mut lines = csv.lines();

        assert_eq!(lines.next().unwrap(), "t,total_gravity,total_resonance,A,B");
        let row = lines.next().unwrap();
        assert!(row.starts_with("0.000000e0,3.000000e0,0.000000e0"));
    }

    #[test]
    fn test_rows_stay_rectangular_when_term_missing_from_round() {
        // Round recorded without "B": the column must still be present as 0.
        let rounds = vec![round(1.0, &[("A", 1.5)], 1.5, 0.0)];
        let order = vec!["A".to_string(), "B".to_string()];

        let mut buffer = Vec::new();
        write_time_series(&mut buffer, &rounds, &order).unwrap();
        let csv = String::from_utf8(buffer).unwrap();

        let header_cols = csv.lines().next().unwrap().split(',').count();
        let row_cols = csv.lines().nth(1).unwrap().split(',').count();
        assert_eq!(header_cols, 5);
        assert_eq!(row_cols, 5);
        assert!(csv.lines().nth(1).unwrap().ends_with("0.000000e0"));
    }

    #[test]
    fn test_sweep_layout() {
        let rounds = vec![
            round(1e13, &[], 5.0, 7.0),
            round(1e16, &[], 6.0, 8.0),
        ];

        let mut buffer = Vec::new();
        write_sweep(&mut buffer, "B", &rounds).unwrap();
        let csv = String::from_utf8(buffer).unwrap();
        let mut lines = csv.lines();

        assert_eq!(lines.next().unwrap(), "B,total_gravity,total_resonance");
        assert_eq!(lines.count(), 2);
    }

    #[test]
    fn test_scientific_formatting() {
        assert_eq!(sci(1.988e9), "1.988000e9");
        assert_eq!(sci(0.0), "0.000000e0");
        assert_eq!(sci(-6.381e-36), "-6.381000e-36");
    }
}
