//! Error taxonomy for the trough sweep.
//!
//! - `GeometryError`: one grid cell could not be evaluated. Recoverable; the
//!   sweep drops the cell and counts it by `ErrorKind`.
//! - `QuadError`: the arc-length integral failed; surfaces as
//!   `GeometryError::Convergence`.
//! - `ConfigError`: the run as a whole is meaningless. Returned before any
//!   cell is evaluated.

use thiserror::Error;

/// Coarse classification of a per-cell failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid geometric input (width, aperture, rim angle).
    Domain,
    /// Numerical integration did not meet its accuracy budget.
    Convergence,
}

/// Failure of the adaptive integrator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuadError {
    #[error("integration bounds must be finite, got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("integrand is not finite at x={x}")]
    NonFinite { x: f64 },

    #[error(
        "interval budget of {limit} exhausted: error estimate {abs_err:e} exceeds tolerance {tolerance:e}"
    )]
    SubdivisionLimit {
        limit: usize,
        abs_err: f64,
        tolerance: f64,
    },
}

/// Failure to evaluate a single (width, rim angle) design.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("width must be positive and finite, got {width}")]
    NonPositiveWidth { width: f64 },

    #[error("aperture area must be positive and finite, got {area}")]
    NonPositiveAperture { area: f64 },

    #[error("rim angle must lie in (0°, 180°), got {rim_angle_deg}°")]
    RimAngleOutOfRange { rim_angle_deg: f64 },

    #[error("rim angle {rim_angle_deg}° gives a degenerate focal length {focal_length}")]
    DegenerateFocalLength {
        rim_angle_deg: f64,
        focal_length: f64,
    },

    #[error("width {width} leaves a non-finite trough length {length}")]
    UnboundedLength { width: f64, length: f64 },

    #[error("arc-length integral failed: {0}")]
    Convergence(#[from] QuadError),
}

impl GeometryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GeometryError::Convergence(_) => ErrorKind::Convergence,
            _ => ErrorKind::Domain,
        }
    }
}

/// Invalid sweep configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{axis} axis needs at least one sample")]
    EmptyAxis { axis: &'static str },

    #[error("{axis} axis endpoints must be finite, got [{min}, {max}]")]
    NonFiniteAxis {
        axis: &'static str,
        min: f64,
        max: f64,
    },

    #[error("aperture area must be positive and finite, got {0}")]
    NonPositiveAperture(f64),

    #[error("{widths} × {rim_angles} grid exceeds the limit of {limit} cells")]
    GridTooLarge {
        widths: usize,
        rim_angles: usize,
        limit: usize,
    },

    #[error("top_k must be at least 1")]
    ZeroTopK,

    #[error("quadrature config invalid: {0}")]
    Quadrature(String),
}
