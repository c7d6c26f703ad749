//! Design input and the evaluated cross-section record.
//!
//! - `DesignInput`: one grid cell, `(width, rim angle in degrees)`.
//! - `GeometryResult`: every derived quantity of one design. Immutable once
//!   produced by `calc::evaluate`.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Aperture area held fixed across a sweep (area units).
pub const DEFAULT_APERTURE_AREA: f64 = 2.0;

/// One (width, rim angle) design point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DesignInput {
    pub width: f64,
    pub rim_angle_deg: f64,
}

impl DesignInput {
    #[inline]
    pub fn new(width: f64, rim_angle_deg: f64) -> Self {
        Self {
            width,
            rim_angle_deg,
        }
    }
}

/// Evaluated trough cross-section.
///
/// Invariants:
/// - `width * length == aperture_area` of the run that produced it.
/// - `arc_length >= width` (the arc is never shorter than its chord).
///
/// Field order is the column order used by tabular exports.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeometryResult {
    pub width: f64,
    pub length: f64,
    /// Rim angle in degrees.
    pub rim_angle: f64,
    pub focal_length: f64,
    pub parabola_height: f64,
    pub arc_length: f64,
    pub surface_area: f64,
    pub concentration_ratio: f64,
    pub aspect_ratio: f64,
    pub rim_angle_rad: f64,
    /// `a` in `y = a·x²`.
    pub parabola_coefficient: f64,
}

impl GeometryResult {
    /// Column names in field order.
    pub const FIELDS: [&'static str; 11] = [
        "width",
        "length",
        "rim_angle",
        "focal_length",
        "parabola_height",
        "arc_length",
        "surface_area",
        "concentration_ratio",
        "aspect_ratio",
        "rim_angle_rad",
        "parabola_coefficient",
    ];

    /// Values in `FIELDS` order.
    pub fn values(&self) -> [f64; 11] {
        [
            self.width,
            self.length,
            self.rim_angle,
            self.focal_length,
            self.parabola_height,
            self.arc_length,
            self.surface_area,
            self.concentration_ratio,
            self.aspect_ratio,
            self.rim_angle_rad,
            self.parabola_coefficient,
        ]
    }

    /// Height of the profile at horizontal offset `x` from the vertex.
    #[inline]
    pub fn height_at(&self, x: f64) -> f64 {
        self.parabola_coefficient * x * x
    }

    /// Focus on the symmetry axis, vertex at the origin.
    #[inline]
    pub fn focus(&self) -> Point2<f64> {
        Point2::new(0.0, self.focal_length)
    }

    /// Left and right rim points `(∓width/2, parabola_height)`.
    pub fn rim_points(&self) -> [Point2<f64>; 2] {
        let half = 0.5 * self.width;
        [
            Point2::new(-half, self.parabola_height),
            Point2::new(half, self.parabola_height),
        ]
    }

    /// `n` evenly spaced points of `y = a·x²` over `[-width/2, width/2]`,
    /// both rims included. `n < 2` is raised to 2.
    pub fn profile(&self, n: usize) -> Vec<Point2<f64>> {
        let n = n.max(2);
        let half = 0.5 * self.width;
        let step = self.width / (n - 1) as f64;
        (0..n)
            .map(|i| {
                let x = if i == n - 1 {
                    half
                } else {
                    -half + i as f64 * step
                };
                Point2::new(x, self.height_at(x))
            })
            .collect()
    }
}
