//! Ranked results and the aggregates computed over them.

use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, GeometryError};
use crate::geometry::GeometryResult;

/// Designs sorted by `surface_area`, largest first.
///
/// Invariant: `surface_area` is non-increasing along the sequence. Ties keep
/// evaluation (grid) order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultSet {
    ranked: Vec<GeometryResult>,
}

impl ResultSet {
    /// Rank an unordered collection.
    pub fn from_unordered(mut results: Vec<GeometryResult>) -> Self {
        results.sort_by(|a, b| b.surface_area.total_cmp(&a.surface_area));
        Self { ranked: results }
    }

    #[inline]
    pub fn as_slice(&self) -> &[GeometryResult] {
        &self.ranked
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GeometryResult> {
        self.ranked.iter()
    }

    /// Best design, if any survived.
    #[inline]
    pub fn best(&self) -> Option<&GeometryResult> {
        self.ranked.first()
    }

    /// First `min(k, len)` designs.
    pub fn top_k(&self, k: usize) -> &[GeometryResult] {
        &self.ranked[..k.min(self.ranked.len())]
    }

    pub fn summary(&self) -> Summary {
        Summary {
            count: self.ranked.len(),
            max_surface_area: max_field(&self.ranked, |r| r.surface_area),
            max_concentration_ratio: max_field(&self.ranked, |r| r.concentration_ratio),
        }
    }
}

fn max_field(results: &[GeometryResult], field: impl Fn(&GeometryResult) -> f64) -> Option<f64> {
    results.iter().map(field).reduce(f64::max)
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a GeometryResult;
    type IntoIter = std::slice::Iter<'a, GeometryResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranked.iter()
    }
}

/// Scalar aggregates over the surviving designs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    /// `None` when no design survived.
    pub max_surface_area: Option<f64>,
    pub max_concentration_ratio: Option<f64>,
}

/// Per-run cell accounting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepHealth {
    pub cells: usize,
    pub evaluated: usize,
    pub domain_failures: usize,
    pub convergence_failures: usize,
}

impl SweepHealth {
    #[inline]
    pub fn dropped(&self) -> usize {
        self.domain_failures + self.convergence_failures
    }

    pub(crate) fn record(&mut self, err: &GeometryError) {
        match err.kind() {
            ErrorKind::Domain => self.domain_failures += 1,
            ErrorKind::Convergence => self.convergence_failures += 1,
        }
    }
}
