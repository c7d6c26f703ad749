//! Closed-form parabola parameters plus the numerical arc length.

use std::f64::consts::PI;

use super::types::{DesignInput, GeometryResult, DEFAULT_APERTURE_AREA};
use crate::error::GeometryError;
use crate::quad::{integrate, QuadCfg};

/// Evaluate one design under a fixed aperture area.
///
/// Pre: `width > 0`, `0 < rim_angle_deg < 180`, `aperture_area > 0`, all finite.
/// Post: a fully populated `GeometryResult`; pure and deterministic.
pub fn evaluate(
    input: DesignInput,
    aperture_area: f64,
    quad: &QuadCfg,
) -> Result<GeometryResult, GeometryError> {
    let DesignInput {
        width,
        rim_angle_deg,
    } = input;
    if !(width.is_finite() && width > 0.0) {
        return Err(GeometryError::NonPositiveWidth { width });
    }
    if !(aperture_area.is_finite() && aperture_area > 0.0) {
        return Err(GeometryError::NonPositiveAperture {
            area: aperture_area,
        });
    }
    if !(rim_angle_deg.is_finite() && rim_angle_deg > 0.0 && rim_angle_deg < 180.0) {
        return Err(GeometryError::RimAngleOutOfRange { rim_angle_deg });
    }

    let length = aperture_area / width;
    if !length.is_finite() {
        return Err(GeometryError::UnboundedLength { width, length });
    }
    let rim_angle_rad = rim_angle_deg * PI / 180.0;
    let half_tan = (rim_angle_rad / 2.0).tan();
    let focal_length = width / (4.0 * half_tan);
    let parabola_coefficient = 1.0 / (4.0 * focal_length);
    // tan(φ/2) underflowing to 0, or a subnormal focal length, leaves no usable focus.
    if half_tan == 0.0
        || !(focal_length.is_finite() && focal_length > 0.0)
        || !parabola_coefficient.is_finite()
    {
        return Err(GeometryError::DegenerateFocalLength {
            rim_angle_deg,
            focal_length,
        });
    }
    let half = width / 2.0;
    let parabola_height = parabola_coefficient * half * half;

    let arc_length = arc_length(parabola_coefficient, width, quad)?;
    let surface_area = arc_length * length;

    Ok(GeometryResult {
        width,
        length,
        rim_angle: rim_angle_deg,
        focal_length,
        parabola_height,
        arc_length,
        surface_area,
        concentration_ratio: surface_area / aperture_area,
        aspect_ratio: length / width,
        rim_angle_rad,
        parabola_coefficient,
    })
}

/// `evaluate` with the default aperture area and integrator settings.
pub fn evaluate_design(width: f64, rim_angle_deg: f64) -> Result<GeometryResult, GeometryError> {
    evaluate(
        DesignInput::new(width, rim_angle_deg),
        DEFAULT_APERTURE_AREA,
        &QuadCfg::default(),
    )
}

/// Arc length of `y = a·x²` across the chord `[-width/2, width/2]`:
/// `∫ sqrt(1 + (2·a·u)²) du`.
pub fn arc_length(a: f64, width: f64, quad: &QuadCfg) -> Result<f64, GeometryError> {
    let half = width / 2.0;
    let slope = 2.0 * a;
    let r = integrate(|u| (1.0 + (slope * u).powi(2)).sqrt(), -half, half, quad)?;
    Ok(r.value)
}
