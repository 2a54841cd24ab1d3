use std::f64::consts::TAU;

use approx::assert_abs_diff_eq;
use curvelab_curve::{
    evaluate, sample_curve, uniform_samples, CurveError, Point2, PreparedCurve, Sample, Scheme,
    DEFAULT_STEPS,
};
use curvelab_math::dvec2;

fn wavy_points() -> Vec<Point2> {
    vec![
        dvec2(64.0, 240.0),
        dvec2(128.0, 120.0),
        dvec2(192.0, 300.0),
        dvec2(256.0, 200.0),
        dvec2(320.0, 260.0),
        dvec2(384.0, 140.0),
        dvec2(448.0, 240.0),
    ]
}

fn regular_polygon(sides: usize, radius: f64) -> Vec<Point2> {
    (0..sides)
        .map(|i| {
            let angle = TAU * i as f64 / sides as f64;
            dvec2(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// Joins between segment `k` and `k + 1` where the scheme promises position
/// continuity. The open B-spline only blends between its pinned ends.
fn continuous_joins(scheme: Scheme, curve: &PreparedCurve) -> Vec<usize> {
    let segments = curve.segment_count();
    match scheme {
        Scheme::BSpline if !curve.is_closed() => (1..segments.saturating_sub(2)).collect(),
        _ => (0..segments - 1).collect(),
    }
}

#[test]
fn test_position_continuity_all_schemes() {
    let pts = wavy_points();
    for scheme in Scheme::ALL {
        for closed in [false, true] {
            let curve = PreparedCurve::new(scheme, &pts, closed).unwrap();
            for k in continuous_joins(scheme, &curve) {
                let end = curve.point_at(k, 1.0).unwrap();
                let start = curve.point_at(k + 1, 0.0).unwrap();
                assert!(
                    end.abs_diff_eq(start, 1e-6),
                    "{} (closed={}) breaks at join {}: {} vs {}",
                    scheme,
                    closed,
                    k,
                    end,
                    start
                );
            }
        }
    }
}

#[test]
fn test_natural_spline_derivative_continuity() {
    let pts = wavy_points();
    for scheme in [Scheme::NaturalSpline, Scheme::NaturalSplineClosed] {
        let curve = PreparedCurve::new(scheme, &pts, false).unwrap();
        let segments = curve.segment_count();
        for k in 0..segments - 1 {
            let left = curve.tangent_at(k, 1.0).unwrap();
            let right = curve.tangent_at(k + 1, 0.0).unwrap();
            assert!(left.abs_diff_eq(right, 1e-6), "{} join {}", scheme, k);
        }
    }
}

#[test]
fn test_linear_is_exact() {
    let pts = [dvec2(0.0, 0.0), dvec2(10.0, 0.0), dvec2(10.0, 10.0)];
    let out = evaluate(Scheme::Linear, &pts, false, &[Sample::new(0, 0.5)]).unwrap();
    assert_eq!(out[0], dvec2(5.0, 0.0));
}

#[test]
fn test_lagrange_reproduces_control_points() {
    let pts = wavy_points();
    let samples: Vec<_> = (0..pts.len() - 1).map(|k| Sample::new(k, 0.0)).collect();
    let out = evaluate(Scheme::Lagrange, &pts, false, &samples).unwrap();
    for (k, p) in out.iter().enumerate() {
        assert!(p.abs_diff_eq(pts[k], 1e-9), "node {}", k);
    }
}

#[test]
fn test_natural_spline_on_collinear_points() {
    let pts = [dvec2(0.0, 0.0), dvec2(1.0, 0.0), dvec2(2.0, 0.0), dvec2(3.0, 0.0)];
    let out = sample_curve(Scheme::NaturalSpline, &pts, false, DEFAULT_STEPS).unwrap();
    assert_eq!(out.len(), 31);
    for p in &out {
        assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-12);
    }
    assert_abs_diff_eq!(out[15].x, 1.5, epsilon = 1e-12);
}

#[test]
fn test_closed_natural_spline_on_regular_polygon() {
    let pts = regular_polygon(8, 100.0);
    let curve = PreparedCurve::new(Scheme::NaturalSplineClosed, &pts, false).unwrap();
    assert_eq!(curve.segment_count(), 8);

    for (k, &p) in pts.iter().enumerate() {
        assert_eq!(curve.point_at(k, 0.0).unwrap(), p);
    }

    // Seam between the last and first point.
    let end = curve.point_at(7, 1.0).unwrap();
    assert!(end.abs_diff_eq(pts[0], 1e-9));
    let d_end = curve.tangent_at(7, 1.0).unwrap();
    let d_start = curve.tangent_at(0, 0.0).unwrap();
    assert!(d_end.abs_diff_eq(d_start, 1e-9));

    // Rotational symmetry: equal local parameters give equal radii.
    for i in 1..10 {
        let t = i as f64 / 10.0;
        let r0 = curve.point_at(0, t).unwrap().length();
        for k in 1..8 {
            let r = curve.point_at(k, t).unwrap().length();
            assert_abs_diff_eq!(r, r0, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_insufficient_points() {
    let one = [dvec2(1.0, 1.0)];
    for scheme in Scheme::ALL {
        let err = evaluate(scheme, &one, false, &[]).unwrap_err();
        assert!(
            matches!(err, CurveError::InsufficientPoints { found: 1, .. }),
            "{}: {:?}",
            scheme,
            err
        );
    }

    let three = [dvec2(0.0, 0.0), dvec2(1.0, 1.0), dvec2(2.0, 0.0)];
    for scheme in [Scheme::Bezier, Scheme::Hermite] {
        let err = evaluate(scheme, &three, false, &[Sample::new(0, 0.0)]).unwrap_err();
        assert_eq!(
            err,
            CurveError::InsufficientPoints {
                scheme: scheme.name(),
                required: 4,
                found: 3,
            }
        );
    }
    assert!(evaluate(Scheme::CatmullRom, &three, false, &[Sample::new(1, 0.5)]).is_ok());
}

#[test]
fn test_non_finite_point_is_rejected() {
    let mut pts = wavy_points();
    pts[3].y = f64::INFINITY;
    let err = evaluate(Scheme::NaturalSpline, &pts, false, &[]).unwrap_err();
    assert_eq!(err, CurveError::InvalidPoint { index: 3 });
}

#[test]
fn test_evaluation_is_idempotent() {
    let pts = wavy_points();
    for scheme in Scheme::ALL {
        let closed = scheme.effective_closed(false);
        let samples = uniform_samples(pts.len(), closed, DEFAULT_STEPS);
        let a = evaluate(scheme, &pts, closed, &samples).unwrap();
        let b = evaluate(scheme, &pts, closed, &samples).unwrap();
        assert_eq!(a.len(), samples.len());
        for (p, q) in a.iter().zip(b.iter()) {
            assert_eq!(p.x.to_bits(), q.x.to_bits());
            assert_eq!(p.y.to_bits(), q.y.to_bits());
        }
    }
}

#[test]
fn test_output_follows_request_order() {
    let pts = wavy_points();
    let forward = [Sample::new(0, 0.25), Sample::new(3, 0.5), Sample::new(5, 1.0)];
    let reversed: Vec<_> = forward.iter().rev().copied().collect();
    let a = evaluate(Scheme::CatmullRom, &pts, false, &forward).unwrap();
    let b = evaluate(Scheme::CatmullRom, &pts, false, &reversed).unwrap();
    let b_back: Vec<_> = b.iter().rev().copied().collect();
    assert_eq!(a.as_slice(), b_back.as_slice());
}

#[test]
fn test_invalid_sample_reports_index() {
    let pts = wavy_points();
    let samples = [Sample::new(0, 0.0), Sample::new(1, 0.5), Sample::new(6, 0.0)];
    let err = evaluate(Scheme::Hermite, &pts, false, &samples).unwrap_err();
    assert_eq!(
        err,
        CurveError::InvalidSample {
            index: 2,
            segment: 6,
            t: 0.0,
            segments: 6,
        }
    );
}

#[test]
fn test_catmull_rom_end_tangents() {
    let pts = wavy_points();
    let n = pts.len();
    let curve = PreparedCurve::new(Scheme::CatmullRom, &pts, false).unwrap();

    let start = curve.tangent_at(0, 0.0).unwrap();
    let expected_start = (-3.0 * pts[0] + 4.0 * pts[1] - pts[2]) * 0.5;
    assert!(start.abs_diff_eq(expected_start, 1e-9));

    let end = curve.tangent_at(n - 2, 1.0).unwrap();
    let expected_end = (pts[n - 3] - 4.0 * pts[n - 2] + 3.0 * pts[n - 1]) * 0.5;
    assert!(end.abs_diff_eq(expected_end, 1e-9));

    let interior = curve.tangent_at(2, 0.0).unwrap();
    assert!(interior.abs_diff_eq((pts[3] - pts[1]) * 0.5, 1e-9));
}

#[test]
fn test_bezier_uses_first_four_points() {
    let pts = wavy_points();
    let samples = uniform_samples(pts.len(), false, DEFAULT_STEPS);
    let out = evaluate(Scheme::Bezier, &pts, false, &samples).unwrap();
    assert_eq!(out[0], pts[0]);
    for p in out.iter().skip(DEFAULT_STEPS) {
        assert_eq!(*p, pts[3]);
    }
}

#[test]
fn test_bspline_does_not_reach_end_points() {
    let pts = wavy_points();
    let out = sample_curve(Scheme::BSpline, &pts, false, DEFAULT_STEPS).unwrap();
    let first = out[0];
    let last = out[out.len() - 1];
    assert_eq!(first, pts[1]);
    assert_eq!(last, pts[pts.len() - 2]);
}

#[test]
fn test_sampled_curve_bounding_box() {
    let pts = regular_polygon(6, 10.0);
    let out = sample_curve(Scheme::Linear, &pts, true, 4).unwrap();
    let aabb = out.aabb().unwrap();
    assert_abs_diff_eq!(aabb.max.x, 10.0, epsilon = 1e-12);
    assert_abs_diff_eq!(aabb.min.x, -10.0, epsilon = 1e-12);
    for p in &pts {
        assert!(aabb.contains_point(*p));
    }
}
