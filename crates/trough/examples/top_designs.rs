//! Timing probe for the default sweep.
//!
//! Purpose
//! - Give a reproducible data point for "how long does the default 21×11 grid
//!   take, and which designs come out on top?"
//!
//! Code: crates/trough/src/sweep/mod.rs::run_sweep

use std::time::Instant;

use trough::prelude::*;

fn main() {
    let cfg = SweepCfg::default();
    let start = Instant::now();
    let sweep = run_sweep(&cfg).expect("default configuration is valid");
    let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;

    let health = sweep.health();
    println!(
        "cells={} evaluated={} dropped={} sweep_time_ms={elapsed_ms:.3}",
        health.cells,
        health.evaluated,
        health.dropped()
    );
    for (rank, r) in sweep.top().iter().enumerate() {
        println!(
            "rank={} width={:.5} rim_angle={:.5} surface_area={:.5} concentration_ratio={:.5}",
            rank + 1,
            r.width,
            r.rim_angle,
            r.surface_area,
            r.concentration_ratio
        );
    }
}
