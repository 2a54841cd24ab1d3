//! Fixed-resolution sampling schedule.

use curvelab_core::Result;
use curvelab_math::Point2;

use crate::curve::segment_count;
use crate::evaluate::evaluate;
use crate::{Sample, SampledCurve, Scheme};

/// Samples per segment used by the curve editor: `t = 0, 0.1, ..., 0.9`.
pub const DEFAULT_STEPS: usize = 10;

/// Build the uniform sample schedule for `point_count` points.
///
/// Every segment gets `t = j / steps` for `j` in `0..steps`. A closed curve
/// covers its wrap segment the same way; an open curve ends with the exact
/// endpoint `(n - 2, 1.0)`.
///
/// # Returns
/// An empty schedule when there are fewer than two points or `steps` is zero.
pub fn uniform_samples(point_count: usize, closed: bool, steps: usize) -> Vec<Sample> {
    if point_count < 2 || steps == 0 {
        return Vec::new();
    }

    let segments = segment_count(point_count, closed);
    let mut samples = Vec::with_capacity(segments * steps + 1);
    for segment in 0..segments {
        for j in 0..steps {
            samples.push(Sample::new(segment, j as f64 / steps as f64));
        }
    }
    if !closed {
        samples.push(Sample::new(point_count - 2, 1.0));
    }
    samples
}

/// Sample the whole curve at `steps` samples per segment.
pub fn sample_curve(
    scheme: Scheme,
    points: &[Point2],
    closed: bool,
    steps: usize,
) -> Result<SampledCurve> {
    let closed = scheme.effective_closed(closed);
    let samples = uniform_samples(points.len(), closed, steps);
    evaluate(scheme, points, closed, &samples)
}
