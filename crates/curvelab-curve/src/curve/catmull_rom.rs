//! Catmull-Rom spline with quadratic-fit end tangents.
//!
//! Interior tangents are central differences `(P[k+1] - P[k-1]) / 2`. An open
//! curve has no neighbour past either end, so the end tangents come from the
//! quadratic through the three nearest points instead:
//!
//! - the start tangent is `q'(0)` of the quadratic through `P0, P1, P2`
//!   placed at `s = 0, 1, 2`;
//! - the end tangent is `q'(2)` of the quadratic through
//!   `P[n-2], P[n-1], P[n]` placed at `s = 0, 1, 2`.

use curvelab_core::Result;
use curvelab_math::{dvec2, DMat3, DVec3, Point2, Vector2};
use serde::{Deserialize, Serialize};

use super::bezier::{bernstein, bernstein_derivative};
use super::hermite::hermite_controls;
use super::{check_points, segment_count, Curve};
use crate::Scheme;

/// Fit `q(s) = a·s² + b·s + c` through `y[0], y[1], y[2]` at `s = 0, 1, 2`.
///
/// Solves the 3×3 system with rows `[0,0,1]`, `[1,1,1]`, `[4,2,1]` once per
/// axis and returns `[a, b, c]`, each holding both axes.
pub fn quadratic_fit(y: [Point2; 3]) -> [Vector2; 3] {
    // Column-major: column j holds the coefficient of a, b or c for s = 0, 1, 2.
    let m = DMat3::from_cols(
        DVec3::new(0.0, 1.0, 4.0),
        DVec3::new(0.0, 1.0, 2.0),
        DVec3::new(1.0, 1.0, 1.0),
    );
    let inv = m.inverse();
    let x = inv * DVec3::new(y[0].x, y[1].x, y[2].x);
    let v = inv * DVec3::new(y[0].y, y[1].y, y[2].y);
    [dvec2(x.x, v.x), dvec2(x.y, v.y), dvec2(x.z, v.z)]
}

/// Tangent at `p0` leaving towards `p1`, `p2`.
pub fn start_tangent(p0: Point2, p1: Point2, p2: Point2) -> Vector2 {
    let [_, b, _] = quadratic_fit([p0, p1, p2]);
    b
}

/// Tangent at `p2` arriving from `p0`, `p1`.
pub fn end_tangent(p0: Point2, p1: Point2, p2: Point2) -> Vector2 {
    let [a, b, _] = quadratic_fit([p0, p1, p2]);
    4.0 * a + b
}

/// Catmull-Rom curve with one tangent per point, computed up front.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatmullRomCurve {
    pub points: Vec<Point2>,
    pub tangents: Vec<Vector2>,
    pub closed: bool,
}

impl CatmullRomCurve {
    pub fn new(points: &[Point2], closed: bool) -> Result<Self> {
        check_points(Scheme::CatmullRom, points)?;
        let tangents = if closed {
            cyclic_tangents(points)
        } else {
            open_tangents(points)
        };
        Ok(Self {
            points: points.to_vec(),
            tangents,
            closed,
        })
    }

    fn controls(&self, segment: usize) -> [Point2; 4] {
        let next = (segment + 1) % self.points.len();
        hermite_controls(
            self.points[segment],
            self.tangents[segment],
            self.tangents[next],
            self.points[next],
        )
    }
}

fn central(prev: Point2, next: Point2) -> Vector2 {
    (next - prev) * 0.5
}

fn open_tangents(points: &[Point2]) -> Vec<Vector2> {
    let n = points.len();
    if n == 2 {
        // No quadratic through two points: use the chord at both ends.
        let chord = points[1] - points[0];
        return vec![chord, chord];
    }

    let mut tangents = Vec::with_capacity(n);
    tangents.push(start_tangent(points[0], points[1], points[2]));
    for w in points.windows(3) {
        tangents.push(central(w[0], w[2]));
    }
    tangents.push(end_tangent(points[n - 3], points[n - 2], points[n - 1]));
    tangents
}

fn cyclic_tangents(points: &[Point2]) -> Vec<Vector2> {
    let n = points.len();
    (0..n)
        .map(|i| central(points[(i + n - 1) % n], points[(i + 1) % n]))
        .collect()
}

impl Curve for CatmullRomCurve {
    fn point_at(&self, segment: usize, t: f64) -> Point2 {
        let [p0, p1, p2, p3] = self.controls(segment);
        bernstein(p0, p1, p2, p3, t)
    }

    fn tangent_at(&self, segment: usize, t: f64) -> Vector2 {
        let [p0, p1, p2, p3] = self.controls(segment);
        bernstein_derivative(p0, p1, p2, p3, t)
    }

    fn segment_count(&self) -> usize {
        segment_count(self.points.len(), self.closed)
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}
