//! Exhaustive (width × rim angle) sweep and ranking.
//!
//! Purpose
//! - Evaluate every cell of the Cartesian grid under one aperture area, drop
//!   the cells that fail, and rank the survivors by reflective surface area.
//!
//! Model
//! - Configuration errors (`ConfigError`) are returned before any cell runs.
//! - Per-cell `GeometryError`s are never returned: the cell is dropped,
//!   counted in `SweepHealth` by kind, and logged at debug level.
//! - Cells are independent. With the `parallel` feature they are mapped on the
//!   rayon pool into a grid-ordered buffer; ranking starts after the join, so
//!   the output is identical to a sequential run.
//!
//! Code cross-refs: `geometry::evaluate`, `rank::ResultSet`

mod cfg;
mod rank;

pub use cfg::{Axis, SweepCfg, MAX_GRID_CELLS};
pub use rank::{ResultSet, Summary, SweepHealth};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{ConfigError, GeometryError};
use crate::geometry::{evaluate, DesignInput, GeometryResult};
use crate::quad::QuadCfg;

/// Outcome of one sweep run. Owns its results; nothing is shared across runs.
#[derive(Clone, Debug)]
pub struct Sweep {
    cfg: SweepCfg,
    results: ResultSet,
    health: SweepHealth,
}

impl Sweep {
    #[inline]
    pub fn cfg(&self) -> &SweepCfg {
        &self.cfg
    }

    /// All surviving designs, best first.
    #[inline]
    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    /// The configured top-K prefix.
    #[inline]
    pub fn top(&self) -> &[GeometryResult] {
        self.results.top_k(self.cfg.top_k)
    }

    #[inline]
    pub fn summary(&self) -> Summary {
        self.results.summary()
    }

    #[inline]
    pub fn health(&self) -> SweepHealth {
        self.health
    }

    pub fn into_results(self) -> ResultSet {
        self.results
    }
}

/// Validate `cfg`, sweep its grid and rank the survivors.
pub fn run_sweep(cfg: &SweepCfg) -> Result<Sweep, ConfigError> {
    cfg.validate()?;
    let widths = cfg.widths.samples();
    let rim_angles = cfg.rim_angles.samples();
    let (results, health) = evaluate_grid(&widths, &rim_angles, cfg.aperture_area, &cfg.quad);
    tracing::info!(
        cells = health.cells,
        evaluated = health.evaluated,
        domain_failures = health.domain_failures,
        convergence_failures = health.convergence_failures,
        best_surface_area = ?results.best().map(|r| r.surface_area),
        "sweep"
    );
    Ok(Sweep {
        cfg: *cfg,
        results,
        health,
    })
}

/// Evaluate the grid `widths × rim_angles` (width-major) and rank it.
///
/// Accepts arbitrary samples, including invalid ones; those cells are dropped.
pub fn evaluate_grid(
    widths: &[f64],
    rim_angles: &[f64],
    aperture_area: f64,
    quad: &QuadCfg,
) -> (ResultSet, SweepHealth) {
    let cells: Vec<DesignInput> = widths
        .iter()
        .flat_map(|&w| rim_angles.iter().map(move |&phi| DesignInput::new(w, phi)))
        .collect();

    let outcomes = evaluate_cells(&cells, aperture_area, quad);

    let mut health = SweepHealth {
        cells: cells.len(),
        ..SweepHealth::default()
    };
    let mut survivors = Vec::with_capacity(cells.len());
    for (cell, outcome) in cells.iter().zip(outcomes) {
        match outcome {
            Ok(r) => survivors.push(r),
            Err(err) => {
                tracing::debug!(
                    width = cell.width,
                    rim_angle = cell.rim_angle_deg,
                    kind = ?err.kind(),
                    %err,
                    "cell dropped"
                );
                health.record(&err);
            }
        }
    }
    health.evaluated = survivors.len();
    (ResultSet::from_unordered(survivors), health)
}

#[cfg(feature = "parallel")]
fn evaluate_cells(
    cells: &[DesignInput],
    aperture_area: f64,
    quad: &QuadCfg,
) -> Vec<Result<GeometryResult, GeometryError>> {
    cells
        .par_iter()
        .map(|&cell| evaluate(cell, aperture_area, quad))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn evaluate_cells(
    cells: &[DesignInput],
    aperture_area: f64,
    quad: &QuadCfg,
) -> Vec<Result<GeometryResult, GeometryError>> {
    cells
        .iter()
        .map(|&cell| evaluate(cell, aperture_area, quad))
        .collect()
}

/// Sequential reference path, independent of the `parallel` feature.
pub fn evaluate_grid_sequential(
    widths: &[f64],
    rim_angles: &[f64],
    aperture_area: f64,
    quad: &QuadCfg,
) -> (ResultSet, SweepHealth) {
    let mut health = SweepHealth::default();
    let mut survivors = Vec::new();
    for &w in widths {
        for &phi in rim_angles {
            health.cells += 1;
            match evaluate(DesignInput::new(w, phi), aperture_area, quad) {
                Ok(r) => survivors.push(r),
                Err(err) => health.record(&err),
            }
        }
    }
    health.evaluated = survivors.len();
    (ResultSet::from_unordered(survivors), health)
}
