//! Human-readable sweep summary for the console.

use std::fmt::Write as _;
use trough::api;
use trough::Sweep;

/// Pearson correlation of two equally long samples.
/// `None` for fewer than two points or a zero-variance sample.
pub fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    let n = x.len();
    if n < 2 || n != y.len() {
        return None;
    }
    let mean = |v: &[f64]| v.iter().sum::<f64>() / n as f64;
    let (mx, my) = (mean(x), mean(y));
    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (a, b) in x.iter().zip(y) {
        let (dx, dy) = (a - mx, b - my);
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    if sxx <= 0.0 || syy <= 0.0 {
        return None;
    }
    Some((sxy / (sxx.sqrt() * syy.sqrt())).clamp(-1.0, 1.0))
}

fn fmt_opt(v: Option<f64>) -> String {
    v.map_or_else(|| "n/a".to_string(), |x| format!("{x:.5}"))
}

pub fn render(sweep: &Sweep) -> String {
    let health = sweep.health();
    let summary = sweep.summary();
    let results = sweep.results();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "designs evaluated: {} of {} (dropped: {} domain, {} convergence)",
        health.evaluated, health.cells, health.domain_failures, health.convergence_failures
    );
    let _ = writeln!(out, "max surface area: {}", fmt_opt(summary.max_surface_area));
    let _ = writeln!(
        out,
        "max concentration ratio: {}",
        fmt_opt(summary.max_concentration_ratio)
    );

    let top = sweep.top();
    let _ = writeln!(out, "top {} designs:", top.len());
    let _ = writeln!(
        out,
        "{:>4} {:>9} {:>10} {:>13} {:>13}",
        "rank", "width", "rim_angle", "surface_area", "concentration"
    );
    for (i, r) in top.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>4} {:>9.5} {:>10.5} {:>13.5} {:>13.5}",
            i + 1,
            r.width,
            r.rim_angle,
            r.surface_area,
            r.concentration_ratio
        );
    }

    let area = api::column(results, "surface_area").unwrap_or_default();
    for field in ["width", "rim_angle"] {
        let other = api::column(results, field).unwrap_or_default();
        let _ = writeln!(
            out,
            "corr(surface_area, {field}): {}",
            fmt_opt(pearson(&area, &other))
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use trough::{run_sweep, Axis, SweepCfg};

    #[test]
    fn pearson_on_lines_and_degenerate_input() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let up = [2.0, 4.0, 6.0, 8.0];
        let down = [4.0, 3.0, 2.0, 1.0];
        assert!((pearson(&x, &up).unwrap() - 1.0).abs() < 1e-12);
        assert!((pearson(&x, &down).unwrap() + 1.0).abs() < 1e-12);
        assert_eq!(pearson(&x, &[5.0; 4]), None);
        assert_eq!(pearson(&[1.0], &[1.0]), None);
        assert_eq!(pearson(&x, &up[..3]), None);
    }

    #[test]
    fn render_reports_counts_and_top_table() {
        let cfg = SweepCfg {
            widths: Axis::new(0.5, 1.5, 3),
            rim_angles: Axis::new(70.0, 80.0, 3),
            top_k: 3,
            ..SweepCfg::default()
        };
        let sweep = run_sweep(&cfg).unwrap();
        let text = render(&sweep);
        assert!(text.contains("designs evaluated: 9 of 9 (dropped: 0 domain, 0 convergence)"));
        assert!(text.contains("top 3 designs:"));
        assert!(text.contains("corr(surface_area, rim_angle): "));
        // header + three ranked rows follow the "top" line
        let after = text.split("top 3 designs:\n").nth(1).unwrap();
        assert_eq!(after.lines().take_while(|l| !l.starts_with("corr")).count(), 4);
    }

    #[test]
    fn rim_angle_drives_surface_area() {
        let sweep = run_sweep(&SweepCfg::default()).unwrap();
        let area = api::column(sweep.results(), "surface_area").unwrap();
        let rim = api::column(sweep.results(), "rim_angle").unwrap();
        assert!(pearson(&area, &rim).unwrap() > 0.99);
    }
}
