//! Sweep configuration layering: defaults → JSON file → command-line flags.

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};
use trough::{Axis, SweepCfg};

/// Flags shared by every subcommand that needs a sweep configuration.
#[derive(Args, Debug, Default, Clone)]
pub struct SweepArgs {
    /// JSON file with any subset of the sweep configuration (axes as whole objects)
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub aperture_area: Option<f64>,
    #[arg(long)]
    pub width_min: Option<f64>,
    #[arg(long)]
    pub width_max: Option<f64>,
    #[arg(long)]
    pub width_count: Option<usize>,
    /// Rim angles are in degrees
    #[arg(long)]
    pub rim_min: Option<f64>,
    #[arg(long)]
    pub rim_max: Option<f64>,
    #[arg(long)]
    pub rim_count: Option<usize>,
    #[arg(long)]
    pub top_k: Option<usize>,
}

impl SweepArgs {
    pub fn resolve(&self) -> Result<SweepCfg> {
        let base = match &self.config {
            Some(path) => load_config(path)?,
            None => SweepCfg::default(),
        };
        Ok(self.apply(base))
    }

    fn apply(&self, mut cfg: SweepCfg) -> SweepCfg {
        if let Some(a) = self.aperture_area {
            cfg.aperture_area = a;
        }
        override_axis(
            &mut cfg.widths,
            self.width_min,
            self.width_max,
            self.width_count,
        );
        override_axis(
            &mut cfg.rim_angles,
            self.rim_min,
            self.rim_max,
            self.rim_count,
        );
        if let Some(k) = self.top_k {
            cfg.top_k = k;
        }
        cfg
    }
}

fn override_axis(axis: &mut Axis, min: Option<f64>, max: Option<f64>, count: Option<usize>) {
    if let Some(v) = min {
        axis.min = v;
    }
    if let Some(v) = max {
        axis.max = v;
    }
    if let Some(n) = count {
        axis.count = n;
    }
}

pub fn load_config(path: &Path) -> Result<SweepCfg> {
    let bytes = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn no_flags_means_defaults() {
        let cfg = SweepArgs::default().resolve().unwrap();
        assert_eq!(cfg, SweepCfg::default());
    }

    #[test]
    fn flags_override_single_fields() {
        let args = SweepArgs {
            width_count: Some(3),
            rim_max: Some(85.0),
            top_k: Some(2),
            ..SweepArgs::default()
        };
        let cfg = args.resolve().unwrap();
        assert_eq!(cfg.widths, Axis::new(0.5, 1.5, 3));
        assert_eq!(cfg.rim_angles, Axis::new(70.0, 85.0, 11));
        assert_eq!(cfg.top_k, 2);
        assert_eq!(cfg.aperture_area, 2.0);
    }

    #[test]
    fn file_then_flags() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sweep.json");
        fs::write(
            &path,
            r#"{"aperture_area": 3.0, "widths": {"min": 1.0, "max": 2.0, "count": 5}, "top_k": 3}"#,
        )
        .unwrap();
        let args = SweepArgs {
            config: Some(path),
            top_k: Some(4),
            ..SweepArgs::default()
        };
        let cfg = args.resolve().unwrap();
        assert_eq!(cfg.aperture_area, 3.0);
        assert_eq!(cfg.widths, Axis::new(1.0, 2.0, 5));
        assert_eq!(cfg.rim_angles, SweepCfg::default().rim_angles);
        assert_eq!(cfg.quad, SweepCfg::default().quad);
        assert_eq!(cfg.top_k, 4);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parsing config"));
        assert!(load_config(&dir.path().join("missing.json")).is_err());
    }
}
