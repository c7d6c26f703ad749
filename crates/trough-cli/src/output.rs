//! Tabular persistence of ranked designs and their profile curves.
//!
//! - Ranked table: one row per design, columns in `GeometryResult::FIELDS`
//!   order, floats with 5 decimals. `.parquet` paths get Parquet, anything
//!   else CSV.
//! - Profiles: `rank,x,y` rows for the top-K designs, for plotting tools.

use anyhow::{Context, Result};
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;
use trough::api;
use trough::{GeometryResult, ResultSet};

const FLOAT_PRECISION: usize = 5;

pub fn results_frame(results: &ResultSet) -> PolarsResult<DataFrame> {
    let rows = api::table(results);
    let columns: Vec<Series> = GeometryResult::FIELDS
        .iter()
        .enumerate()
        .map(|(i, &name)| {
            let values: Vec<f64> = rows.iter().map(|row| row[i]).collect();
            Series::new(name.into(), values)
        })
        .collect();
    DataFrame::new(columns)
}

pub fn profiles_frame(designs: &[GeometryResult], points: usize) -> PolarsResult<DataFrame> {
    let mut rank = Vec::new();
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for (i, design) in designs.iter().enumerate() {
        for p in design.profile(points) {
            rank.push(i as u32 + 1);
            xs.push(p.x);
            ys.push(p.y);
        }
    }
    DataFrame::new(vec![
        Series::new("rank".into(), rank),
        Series::new("x".into(), xs),
        Series::new("y".into(), ys),
    ])
}

pub fn write_results(results: &ResultSet, path: &Path) -> Result<()> {
    let mut df = results_frame(results)?;
    write_frame(&mut df, path)
}

pub fn write_profiles(designs: &[GeometryResult], points: usize, path: &Path) -> Result<()> {
    let mut df = profiles_frame(designs, points)?;
    write_frame(&mut df, path)
}

fn write_frame(df: &mut DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("parquet") => {
            ParquetWriter::new(file)
                .finish(df)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        _ => {
            CsvWriter::new(file)
                .include_header(true)
                .with_float_precision(Some(FLOAT_PRECISION))
                .finish(df)
                .with_context(|| format!("writing {}", path.display()))?;
        }
    }
    tracing::info!(path = %path.display(), rows = df.height(), "table_written");
    Ok(())
}
