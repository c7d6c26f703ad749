//! Parabolic-trough cross-section geometry.
//!
//! Purpose
//! - Map one `(width, rim angle)` design to its full profile under a fixed
//!   aperture area: `length = A / width`, `f = width / (4 tan(φ/2))`,
//!   `y = x² / (4f)`, arc length by adaptive quadrature, and the derived
//!   surface, concentration and aspect ratios.
//!
//! Conventions
//! - Vertex at the origin, symmetry axis along +y, rim angle in degrees on the
//!   way in, radians kept alongside in the result.
//! - Invalid inputs are `GeometryError` values; nothing here logs or panics.
//!
//! Code cross-refs: `quad::integrate`, `sweep::run_sweep`

mod calc;
mod types;

pub use calc::{arc_length, evaluate, evaluate_design};
pub use types::{DesignInput, GeometryResult, DEFAULT_APERTURE_AREA};

#[cfg(test)]
mod tests;
