mod config;
mod output;
mod provenance;
mod summary;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;
use trough::geometry::DEFAULT_APERTURE_AREA;
use trough::quad::QuadCfg;
use trough::{evaluate, run_sweep, DesignInput};

use config::SweepArgs;
use provenance::Payload;

#[derive(Parser)]
#[command(name = "trough")]
#[command(about = "Parabolic-trough cross-section sweep at fixed aperture area")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Sweep the width × rim-angle grid and write the ranked table
    Sweep {
        #[command(flatten)]
        cfg: SweepArgs,
        /// Ranked table (.csv, or .parquet)
        #[arg(long)]
        out: PathBuf,
        /// Optional profile curves of the top designs
        #[arg(long)]
        profiles: Option<PathBuf>,
        #[arg(long, default_value_t = 101)]
        profile_points: usize,
    },
    /// Evaluate one design and print it as JSON
    Evaluate {
        #[arg(long, allow_hyphen_values = true)]
        width: f64,
        /// Degrees
        #[arg(long, allow_hyphen_values = true)]
        rim_angle: f64,
        #[arg(long, default_value_t = DEFAULT_APERTURE_AREA)]
        aperture_area: f64,
    },
    /// Print a provenance JSON block for the effective configuration
    Report {
        #[command(flatten)]
        cfg: SweepArgs,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Sweep {
            cfg,
            out,
            profiles,
            profile_points,
        } => sweep(cfg, out, profiles, profile_points),
        Action::Evaluate {
            width,
            rim_angle,
            aperture_area,
        } => evaluate_one(width, rim_angle, aperture_area),
        Action::Report { cfg } => report(cfg),
    }
}

fn sweep(
    args: SweepArgs,
    out: PathBuf,
    profiles: Option<PathBuf>,
    profile_points: usize,
) -> Result<()> {
    let cfg = args.resolve()?;
    tracing::info!(
        aperture_area = cfg.aperture_area,
        widths = ?cfg.widths,
        rim_angles = ?cfg.rim_angles,
        cells = ?cfg.cell_count(),
        top_k = cfg.top_k,
        out = %out.display(),
        "sweep"
    );
    let sweep = run_sweep(&cfg).context("invalid sweep configuration")?;

    output::write_results(sweep.results(), &out)?;
    let mut payload = Payload::new(cfg)
        .with_health(sweep.health())
        .with_output(&out);
    if let Some(path) = &profiles {
        output::write_profiles(sweep.top(), profile_points, path)?;
        payload = payload.with_output(path);
    }
    provenance::write_sidecar(&out, &payload)?;

    print!("{}", summary::render(&sweep));
    Ok(())
}

fn evaluate_one(width: f64, rim_angle: f64, aperture_area: f64) -> Result<()> {
    tracing::info!(width, rim_angle, aperture_area, "evaluate");
    let result = evaluate(
        DesignInput::new(width, rim_angle),
        aperture_area,
        &QuadCfg::default(),
    )
    .with_context(|| format!("evaluating width={width} rim_angle={rim_angle}"))?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn report(args: SweepArgs) -> Result<()> {
    let cfg = args.resolve()?;
    let payload = Payload::new(cfg);
    let doc = provenance::document(&payload);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
