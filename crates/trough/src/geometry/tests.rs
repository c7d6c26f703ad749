use super::*;
use crate::error::{ErrorKind, GeometryError, QuadError};
use crate::quad::QuadCfg;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn closed_form_arc(a: f64, width: f64) -> f64 {
    let t = a * width;
    (t * (1.0 + t * t).sqrt() + t.asinh()) / (2.0 * a)
}

#[test]
fn reference_design_unit_width_eighty_degrees() {
    let r = evaluate_design(1.0, 80.0).unwrap();
    assert!((r.length - 2.0).abs() < 1e-12);
    assert!((r.focal_length - 0.297_938_4).abs() < 1e-6);
    assert!((r.parabola_coefficient - 0.839_099_6).abs() < 1e-6);
    assert!((r.parabola_height - 0.209_774_9).abs() < 1e-6);
    assert!((r.arc_length - 1.107_303_8).abs() < 1e-6);
    assert!((r.surface_area - 2.214_607_6).abs() < 1e-6);
    assert!((r.concentration_ratio - 1.107_303_8).abs() < 1e-6);
    assert!((r.aspect_ratio - 2.0).abs() < 1e-12);
    assert!((r.rim_angle_rad - 80f64.to_radians()).abs() < 1e-15);
    assert_eq!(r.rim_angle, 80.0);
}

#[test]
fn arc_length_agrees_with_closed_form_on_seeded_designs() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..64 {
        let w = rng.gen_range(0.1..5.0);
        let phi = rng.gen_range(1.0..179.0);
        let r = evaluate_design(w, phi).unwrap();
        let exact = closed_form_arc(r.parabola_coefficient, w);
        assert!(
            (r.arc_length - exact).abs() / exact < 1e-6,
            "w={w} phi={phi}: {} vs {exact}",
            r.arc_length
        );
    }
}

#[test]
fn aperture_is_preserved() {
    for area in [0.5, 2.0, 13.0] {
        for w in [0.3, 1.0, 2.7] {
            let r = evaluate(DesignInput::new(w, 75.0), area, &QuadCfg::default()).unwrap();
            assert!((r.width * r.length - area).abs() <= 1e-9 * area);
            assert!((r.concentration_ratio * area - r.surface_area).abs() < 1e-12);
        }
    }
}

#[test]
fn evaluation_is_deterministic() {
    let a = evaluate_design(0.85, 73.0).unwrap();
    let b = evaluate_design(0.85, 73.0).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.arc_length.to_bits(), b.arc_length.to_bits());
}

#[test]
fn domain_errors() {
    let cfg = QuadCfg::default();
    let e = evaluate(DesignInput::new(0.0, 80.0), 2.0, &cfg).unwrap_err();
    assert!(matches!(e, GeometryError::NonPositiveWidth { .. }));
    assert_eq!(e.kind(), ErrorKind::Domain);

    let e = evaluate(DesignInput::new(-1.0, 80.0), 2.0, &cfg).unwrap_err();
    assert!(matches!(e, GeometryError::NonPositiveWidth { .. }));

    let e = evaluate(DesignInput::new(f64::NAN, 80.0), 2.0, &cfg).unwrap_err();
    assert!(matches!(e, GeometryError::NonPositiveWidth { .. }));

    for phi in [0.0, -10.0, 180.0, 200.0, f64::INFINITY] {
        let e = evaluate(DesignInput::new(1.0, phi), 2.0, &cfg).unwrap_err();
        assert!(matches!(e, GeometryError::RimAngleOutOfRange { .. }), "{phi}");
        assert_eq!(e.kind(), ErrorKind::Domain);
    }

    let e = evaluate(DesignInput::new(1.0, 80.0), 0.0, &cfg).unwrap_err();
    assert!(matches!(e, GeometryError::NonPositiveAperture { .. }));
}

#[test]
fn subnormal_rim_angle_has_no_focus() {
    // tan(φ/2) underflows to zero
    let e = evaluate_design(1.0, f64::MIN_POSITIVE * 1e-10).unwrap_err();
    assert!(matches!(e, GeometryError::DegenerateFocalLength { .. }));
    assert_eq!(e.kind(), ErrorKind::Domain);
}

#[test]
fn subnormal_width_is_a_domain_failure() {
    // Focal length ~3e-311: positive and finite, but 1/(4f) overflows.
    let e = evaluate(DesignInput::new(1e-310, 80.0), 2.0, &QuadCfg::default()).unwrap_err();
    assert!(matches!(e, GeometryError::UnboundedLength { .. }));
    assert_eq!(e.kind(), ErrorKind::Domain);

    // Finite length, coefficient still overflows.
    let e = evaluate(DesignInput::new(1e-309, 80.0), 1e-3, &QuadCfg::default()).unwrap_err();
    assert!(matches!(e, GeometryError::DegenerateFocalLength { .. }));
    assert_eq!(e.kind(), ErrorKind::Domain);

    // Tiny but normal widths still evaluate.
    let r = evaluate(DesignInput::new(1e-150, 80.0), 2.0, &QuadCfg::default()).unwrap();
    assert!(r.surface_area.is_finite());
}

#[test]
fn starved_integrator_reports_convergence_kind() {
    let cfg = QuadCfg {
        eps_abs: 1e-300,
        eps_rel: 1e-300,
        max_intervals: 1,
    };
    let e = evaluate(DesignInput::new(1.0, 170.0), 2.0, &cfg).unwrap_err();
    assert!(matches!(
        e,
        GeometryError::Convergence(QuadError::SubdivisionLimit { .. })
    ));
    assert_eq!(e.kind(), ErrorKind::Convergence);
}

#[test]
fn wider_rim_angle_means_deeper_trough() {
    let shallow = evaluate_design(1.0, 70.0).unwrap();
    let deep = evaluate_design(1.0, 80.0).unwrap();
    assert!(deep.focal_length < shallow.focal_length);
    assert!(deep.parabola_height > shallow.parabola_height);
    assert!(deep.arc_length > shallow.arc_length);
}

#[test]
fn profile_spans_rim_to_rim() {
    let r = evaluate_design(1.2, 76.0).unwrap();
    let pts = r.profile(9);
    assert_eq!(pts.len(), 9);
    let [left, right] = r.rim_points();
    assert!((pts[0] - left).norm() < 1e-12);
    assert!((pts[8] - right).norm() < 1e-12);
    assert!(pts[4].x.abs() < 1e-12 && pts[4].y.abs() < 1e-12);
    // focus-to-rim distance equals y + f for a parabola
    let d = (right - r.focus()).norm();
    assert!((d - (r.parabola_height + r.focal_length)).abs() < 1e-12);
    assert_eq!(r.profile(0).len(), 2);
}

#[test]
fn profile_polyline_converges_to_arc_length() {
    let r = evaluate_design(1.0, 80.0).unwrap();
    let polyline = |n: usize| {
        let pts = r.profile(n);
        pts.windows(2).map(|w| (w[1] - w[0]).norm()).sum::<f64>()
    };
    let coarse = polyline(8);
    let fine = polyline(2048);
    assert!(coarse < fine);
    assert!(fine <= r.arc_length + 1e-12);
    assert!((fine - r.arc_length).abs() < 1e-6);
}

#[test]
fn field_table_matches_values() {
    let r = evaluate_design(0.5, 70.0).unwrap();
    let v = r.values();
    assert_eq!(GeometryResult::FIELDS.len(), v.len());
    assert_eq!(v[0], r.width);
    assert_eq!(v[6], r.surface_area);
    assert_eq!(v[10], r.parabola_coefficient);
}
