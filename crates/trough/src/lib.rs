//! Parabolic-trough cross-section sweep.
//!
//! Explores trough geometries at a fixed aperture area (width × length) and
//! ranks them by reflective surface area.
//!
//! Layout
//! - `quad`: adaptive Gauss–Kronrod quadrature.
//! - `geometry`: one (width, rim angle) design → `GeometryResult`.
//! - `sweep`: grid enumeration, per-cell failure accounting, ranking, top-K.
//! - `error`: `GeometryError` (per cell), `QuadError`, `ConfigError` (per run).
//!
//! Persistence, plotting and console output are left to callers; see the
//! `trough-cli` crate for one such caller.

pub mod api;
pub mod error;
pub mod geometry;
pub mod quad;
pub mod sweep;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{ConfigError, ErrorKind, GeometryError, QuadError};
pub use geometry::{evaluate, evaluate_design, DesignInput, GeometryResult};
pub use sweep::{run_sweep, Axis, ResultSet, Summary, Sweep, SweepCfg, SweepHealth};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geometry::{
        evaluate, evaluate_design, DesignInput, GeometryResult, DEFAULT_APERTURE_AREA,
    };
    pub use crate::quad::QuadCfg;
    pub use crate::sweep::{run_sweep, Axis, ResultSet, Summary, Sweep, SweepCfg, SweepHealth};
    pub use nalgebra::Point2;
}
