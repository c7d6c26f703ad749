//! Sweep configuration: grid axes, aperture, top-K and integrator settings.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::DEFAULT_APERTURE_AREA;
use crate::quad::QuadCfg;

/// Largest grid `run_sweep` accepts, in cells.
pub const MAX_GRID_CELLS: usize = 1 << 24;

/// Evenly spaced samples over `[min, max]`, both endpoints included.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

impl Axis {
    #[inline]
    pub fn new(min: f64, max: f64, count: usize) -> Self {
        Self { min, max, count }
    }

    /// Linspace samples. The last sample is `max` exactly; `count == 1` gives `[min]`.
    pub fn samples(&self) -> Vec<f64> {
        match self.count {
            0 => Vec::new(),
            1 => vec![self.min],
            n => {
                let step = (self.max - self.min) / (n - 1) as f64;
                (0..n)
                    .map(|i| {
                        if i == n - 1 {
                            self.max
                        } else {
                            self.min + i as f64 * step
                        }
                    })
                    .collect()
            }
        }
    }

    pub(crate) fn validate(&self, axis: &'static str) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::EmptyAxis { axis });
        }
        if !(self.min.is_finite() && self.max.is_finite()) {
            return Err(ConfigError::NonFiniteAxis {
                axis,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Full sweep configuration.
///
/// Defaults: aperture 2.0, widths `(0.5, 1.5, 21)`, rim angles `(70°, 80°, 11)`,
/// top 5.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepCfg {
    pub aperture_area: f64,
    pub widths: Axis,
    /// Rim angles in degrees.
    pub rim_angles: Axis,
    pub top_k: usize,
    pub quad: QuadCfg,
}

impl Default for SweepCfg {
    fn default() -> Self {
        Self {
            aperture_area: DEFAULT_APERTURE_AREA,
            widths: Axis::new(0.5, 1.5, 21),
            rim_angles: Axis::new(70.0, 80.0, 11),
            top_k: 5,
            quad: QuadCfg::default(),
        }
    }
}

impl SweepCfg {
    /// Reject configurations that make the whole run meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.aperture_area.is_finite() && self.aperture_area > 0.0) {
            return Err(ConfigError::NonPositiveAperture(self.aperture_area));
        }
        self.widths.validate("width")?;
        self.rim_angles.validate("rim angle")?;
        if !matches!(self.cell_count(), Some(n) if n <= MAX_GRID_CELLS) {
            return Err(ConfigError::GridTooLarge {
                widths: self.widths.count,
                rim_angles: self.rim_angles.count,
                limit: MAX_GRID_CELLS,
            });
        }
        if self.top_k == 0 {
            return Err(ConfigError::ZeroTopK);
        }
        self.quad.validate()
    }

    /// Number of grid cells, `None` on overflow.
    #[inline]
    pub fn cell_count(&self) -> Option<usize> {
        self.widths.count.checked_mul(self.rim_angles.count)
    }
}
