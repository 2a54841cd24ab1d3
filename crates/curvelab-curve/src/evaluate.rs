//! Curve preparation and sample evaluation.

use curvelab_core::{CurveError, Result, Tolerance};
use curvelab_math::{Boundary, Point2, Vector2};

use crate::curve::{
    BezierCurve, CatmullRomCurve, Curve, HermiteCurve, LagrangeCurve, LinearCurve, NaturalSpline,
    UniformBSpline,
};
use crate::{Sample, SampledCurve, Scheme};

/// A curve built from a snapshot of the control points.
///
/// Construction does all the per-call work (tangents, spline solve), so
/// repeated lookups only evaluate the per-segment basis. Editing the points
/// means preparing a new curve.
#[derive(Debug)]
pub struct PreparedCurve {
    scheme: Scheme,
    curve: Box<dyn Curve>,
}

impl PreparedCurve {
    pub fn new(scheme: Scheme, points: &[Point2], closed: bool) -> Result<Self> {
        Self::with_tolerance(scheme, points, closed, Tolerance::default())
    }

    pub fn with_tolerance(
        scheme: Scheme,
        points: &[Point2],
        closed: bool,
        tolerance: Tolerance,
    ) -> Result<Self> {
        let closed = scheme.effective_closed(closed);
        let curve: Box<dyn Curve> = match scheme {
            Scheme::Linear => Box::new(LinearCurve::new(points, closed)?),
            Scheme::Lagrange => Box::new(LagrangeCurve::new(points, closed)?),
            Scheme::Bezier => Box::new(BezierCurve::new(points, closed)?),
            Scheme::Hermite => Box::new(HermiteCurve::new(points, closed)?),
            Scheme::CatmullRom => Box::new(CatmullRomCurve::new(points, closed)?),
            Scheme::BSpline => Box::new(UniformBSpline::new(points, closed)?),
            Scheme::NaturalSpline | Scheme::NaturalSplineClosed => {
                let boundary = if closed {
                    Boundary::Cyclic
                } else {
                    Boundary::Natural
                };
                Box::new(NaturalSpline::new(points, boundary, tolerance)?)
            }
        };
        Ok(Self { scheme, curve })
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn segment_count(&self) -> usize {
        self.curve.segment_count()
    }

    pub fn is_closed(&self) -> bool {
        self.curve.is_closed()
    }

    /// Reject a sample whose segment is out of range or whose `t` is not in
    /// `[0, 1]`. `index` is the position in the caller's request list.
    fn check(&self, index: usize, sample: Sample) -> Result<Sample> {
        let segments = self.segment_count();
        if sample.segment < segments && (0.0..=1.0).contains(&sample.t) {
            Ok(sample)
        } else {
            Err(CurveError::InvalidSample {
                index,
                segment: sample.segment,
                t: sample.t,
                segments,
            })
        }
    }

    pub fn point_at(&self, segment: usize, t: f64) -> Result<Point2> {
        let s = self.check(0, Sample::new(segment, t))?;
        Ok(self.curve.point_at(s.segment, s.t))
    }

    /// First derivative with respect to the local parameter.
    pub fn tangent_at(&self, segment: usize, t: f64) -> Result<Vector2> {
        let s = self.check(0, Sample::new(segment, t))?;
        Ok(self.curve.tangent_at(s.segment, s.t))
    }

    /// Evaluate every sample in order. Fails on the first invalid sample
    /// without returning partial output.
    pub fn evaluate(&self, samples: &[Sample]) -> Result<SampledCurve> {
        samples
            .iter()
            .enumerate()
            .map(|(i, &sample)| {
                let s = self.check(i, sample)?;
                Ok(self.curve.point_at(s.segment, s.t))
            })
            .collect()
    }
}

/// Evaluate `samples` on the curve through `points` under `scheme`.
///
/// The points are only read during the call. `closed` is overridden for
/// [`Scheme::NaturalSplineClosed`], which is always closed, and for
/// [`Scheme::NaturalSpline`], which is always open.
pub fn evaluate(
    scheme: Scheme,
    points: &[Point2],
    closed: bool,
    samples: &[Sample],
) -> Result<SampledCurve> {
    PreparedCurve::new(scheme, points, closed)?.evaluate(samples)
}
