//! Curated surface for reporting code.
//!
//! Collects the read-only views an external collaborator needs: the ranked
//! designs, their field table, and the aggregates.

pub use crate::geometry::{GeometryResult, DEFAULT_APERTURE_AREA};
pub use crate::sweep::{ResultSet, Summary, Sweep, SweepCfg, SweepHealth};

/// Rows of `GeometryResult::FIELDS`-ordered values, best design first.
pub fn table(results: &ResultSet) -> Vec<[f64; 11]> {
    results.iter().map(GeometryResult::values).collect()
}

/// One column of the ranked table by field name, `None` for unknown names.
pub fn column(results: &ResultSet, field: &str) -> Option<Vec<f64>> {
    let idx = GeometryResult::FIELDS.iter().position(|f| *f == field)?;
    Some(results.iter().map(|r| r.values()[idx]).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::{run_sweep, Axis};

    fn small() -> Sweep {
        let cfg = SweepCfg {
            widths: Axis::new(0.5, 1.5, 3),
            rim_angles: Axis::new(70.0, 80.0, 2),
            ..SweepCfg::default()
        };
        run_sweep(&cfg).unwrap()
    }

    #[test]
    fn table_rows_follow_ranking() {
        let sweep = small();
        let rows = table(sweep.results());
        assert_eq!(rows.len(), 6);
        for (row, r) in rows.iter().zip(sweep.results()) {
            assert_eq!(row[6], r.surface_area);
        }
    }

    #[test]
    fn column_lookup_by_name() {
        let sweep = small();
        let widths = column(sweep.results(), "width").unwrap();
        assert_eq!(widths.len(), 6);
        assert!(widths.iter().all(|w| [0.5, 1.0, 1.5].contains(w)));
        assert!(column(sweep.results(), "efficiency").is_none());
    }
}
