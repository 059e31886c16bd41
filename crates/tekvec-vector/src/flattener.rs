//! Curve Flattener
//!
//! Samples lines and cubic Bezier segments into polylines, one per curve,
//! already flipped into the terminal's Y-up orientation.

use lyon::geom::{point, CubicBezierSegment};
use tekvec_core::constants::{DEFAULT_BEZIER_SAMPLES, MAX_Y_COORDINATE, MIN_BEZIER_SAMPLES};
use tekvec_core::{Curve, Point, Segment, TekError, TekResult};
use tracing::debug;

/// Flattened form of one curve, in drawing order.
pub type Polyline = Vec<Point>;

/// Flattening configuration
#[derive(Debug, Clone)]
pub struct FlattenerConfig {
    /// Points sampled along each cubic Bezier, both endpoints included
    pub bezier_samples: usize,
    /// Y value mirrored against when flipping into device orientation
    pub flip_height: f64,
}

impl Default for FlattenerConfig {
    fn default() -> Self {
        Self {
            bezier_samples: DEFAULT_BEZIER_SAMPLES,
            flip_height: MAX_Y_COORDINATE,
        }
    }
}

impl FlattenerConfig {
    /// Reject sample counts that would lose an endpoint.
    pub fn validate(&self) -> TekResult<()> {
        if self.bezier_samples < MIN_BEZIER_SAMPLES {
            return Err(TekError::InvalidParameter {
                name: "bezier_samples".to_string(),
                reason: format!(
                    "{} is below the minimum of {}",
                    self.bezier_samples, MIN_BEZIER_SAMPLES
                ),
            });
        }
        if !self.flip_height.is_finite() {
            return Err(TekError::InvalidParameter {
                name: "flip_height".to_string(),
                reason: "must be finite".to_string(),
            });
        }
        Ok(())
    }
}

/// Converts curves to polylines
#[derive(Debug, Default)]
pub struct CurveFlattener {
    config: FlattenerConfig,
}

impl CurveFlattener {
    /// Create a new flattener
    pub fn new(config: FlattenerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FlattenerConfig {
        &self.config
    }

    /// Flatten every curve, preserving curve order.
    ///
    /// Curves without segments contribute no polyline. Any unsupported
    /// segment aborts the whole call.
    pub fn flatten(&self, curves: &[Curve]) -> TekResult<Vec<Polyline>> {
        self.config.validate()?;

        let mut polylines = Vec::with_capacity(curves.len());
        for (index, curve) in curves.iter().enumerate() {
            let polyline = self.flatten_curve(index, curve)?;
            if !polyline.is_empty() {
                polylines.push(polyline);
            }
        }

        debug!(
            curves = curves.len(),
            polylines = polylines.len(),
            points = polylines.iter().map(Vec::len).sum::<usize>(),
            "flattened curves"
        );
        Ok(polylines)
    }

    /// Flatten a single curve. `index` is only used for error reporting.
    pub fn flatten_curve(&self, index: usize, curve: &Curve) -> TekResult<Polyline> {
        self.config.validate()?;
        let mut polyline: Polyline = Vec::new();

        for (seg_index, segment) in curve.segments().iter().enumerate() {
            let samples = self.samples_of(segment).ok_or_else(|| {
                TekError::UnsupportedSegmentKind {
                    curve: index,
                    segment: seg_index,
                    kind: segment.kind(),
                }
            })?;

            let mut flipped = samples
                .into_iter()
                .map(|p| p.flipped_y(self.config.flip_height))
                .peekable();

            // Contiguous segments repeat the shared endpoint; keep only one copy.
            let repeats = matches!(
                (polyline.last(), flipped.peek()),
                (Some(last), Some(first)) if last == first
            );
            if repeats {
                flipped.next();
            }
            polyline.extend(flipped);
        }

        Ok(polyline)
    }

    /// Sample points of one segment in source orientation, or `None` for
    /// primitives that are not flattened.
    pub fn sample_segment(&self, segment: &Segment) -> TekResult<Option<Vec<Point>>> {
        self.config.validate()?;
        Ok(self.samples_of(segment))
    }

    /// Sampling for an already validated configuration.
    fn samples_of(&self, segment: &Segment) -> Option<Vec<Point>> {
        match *segment {
            Segment::Line { start, end } => Some(vec![start, end]),
            Segment::CubicBezier { start, c1, c2, end } => {
                Some(sample_cubic(start, c1, c2, end, self.config.bezier_samples))
            }
            Segment::QuadraticBezier { .. } | Segment::Arc { .. } => None,
        }
    }
}

/// Evaluate a cubic Bezier at `samples` evenly spaced parameters in `[0, 1]`.
///
/// Fewer than two samples still yields both endpoints.
fn sample_cubic(start: Point, c1: Point, c2: Point, end: Point, samples: usize) -> Vec<Point> {
    let samples = samples.max(MIN_BEZIER_SAMPLES);
    let bezier = CubicBezierSegment {
        from: point(start.x, start.y),
        ctrl1: point(c1.x, c1.y),
        ctrl2: point(c2.x, c2.y),
        to: point(end.x, end.y),
    };
    let last = (samples - 1) as f64;

    (0..samples)
        .map(|i| {
            // Pin the endpoints so they match neighbouring segments exactly.
            if i == 0 {
                return start;
            }
            if i == samples - 1 {
                return end;
            }
            let p = bezier.sample(i as f64 / last);
            Point::new(p.x, p.y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tekvec_core::SegmentKind;

    fn flattener() -> CurveFlattener {
        CurveFlattener::default()
    }

    #[test]
    fn test_line_gives_two_flipped_points() {
        let curve = Curve::new(vec![Segment::line(
            Point::new(0.0, 0.0),
            Point::new(10.0, 20.0),
        )]);
        let polylines = flattener().flatten(&[curve]).unwrap();
        assert_eq!(
            polylines,
            vec![vec![Point::new(0.0, 779.0), Point::new(10.0, 759.0)]]
        );
    }

    #[test]
    fn test_cubic_samples_include_endpoints() {
        let start = Point::new(0.0, 0.0);
        let end = Point::new(30.0, 0.0);
        let seg = Segment::cubic(start, Point::new(10.0, 30.0), Point::new(20.0, 30.0), end);

        let samples = flattener().sample_segment(&seg).unwrap().unwrap();
        assert_eq!(samples.len(), DEFAULT_BEZIER_SAMPLES);
        assert_eq!(samples[0], start);
        assert_eq!(samples[DEFAULT_BEZIER_SAMPLES - 1], end);

        // Symmetric control polygon: t = 0.4 and t = 0.6 mirror around x = 15.
        assert!((samples[2].x + samples[3].x - 30.0).abs() < 1e-9);
        assert!((samples[2].y - samples[3].y).abs() < 1e-9);
    }

    #[test]
    fn test_cubic_matches_bernstein_form() {
        let p0 = Point::new(0.0, 0.0);
        let p1 = Point::new(0.0, 100.0);
        let p2 = Point::new(100.0, 100.0);
        let p3 = Point::new(100.0, 0.0);
        let samples = sample_cubic(p0, p1, p2, p3, 5);

        let t: f64 = 0.25;
        let s = 1.0 - t;
        let expected_x = 3.0 * s * t * t * 100.0 + t * t * t * 100.0;
        let expected_y = 3.0 * s * s * t * 100.0 + 3.0 * s * t * t * 100.0;
        assert!((samples[1].x - expected_x).abs() < 1e-9);
        assert!((samples[1].y - expected_y).abs() < 1e-9);
    }

    #[test]
    fn test_shared_endpoint_not_repeated() {
        let curve = Curve::polyline(&[
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ]);
        let polyline = flattener().flatten_curve(0, &curve).unwrap();
        assert_eq!(polyline.len(), 3);
    }

    #[test]
    fn test_line_then_cubic_joins_cleanly() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        let curve = Curve::new(vec![
            Segment::line(a, b),
            Segment::cubic(b, Point::new(15.0, 5.0), Point::new(15.0, 10.0), Point::new(10.0, 15.0)),
        ]);
        let polyline = flattener().flatten_curve(0, &curve).unwrap();
        assert_eq!(polyline.len(), 1 + DEFAULT_BEZIER_SAMPLES);
        assert!(polyline.windows(2).all(|w| w[0] != w[1]));
    }

    #[test]
    fn test_unsupported_kind_reports_location() {
        let good = Curve::polyline(&[Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        let bad = Curve::new(vec![
            Segment::line(Point::new(0.0, 0.0), Point::new(5.0, 0.0)),
            Segment::QuadraticBezier {
                start: Point::new(5.0, 0.0),
                control: Point::new(7.0, 3.0),
                end: Point::new(9.0, 0.0),
            },
        ]);

        let err = flattener().flatten(&[good, bad]).unwrap_err();
        assert_eq!(
            err,
            TekError::UnsupportedSegmentKind {
                curve: 1,
                segment: 1,
                kind: SegmentKind::QuadraticBezier,
            }
        );
    }

    #[test]
    fn test_empty_curve_is_skipped() {
        let polylines = flattener()
            .flatten(&[
                Curve::default(),
                Curve::polyline(&[Point::new(0.0, 0.0), Point::new(1.0, 0.0)]),
            ])
            .unwrap();
        assert_eq!(polylines.len(), 1);
    }

    #[test]
    fn test_zero_samples_rejected_per_curve() {
        let flattener = CurveFlattener::new(FlattenerConfig {
            bezier_samples: 0,
            ..Default::default()
        });
        let curve = Curve::new(vec![Segment::cubic(
            Point::new(0.0, 0.0),
            Point::new(10.0, 30.0),
            Point::new(20.0, 30.0),
            Point::new(30.0, 0.0),
        )]);

        let err = flattener.flatten_curve(0, &curve).unwrap_err();
        assert!(matches!(err, TekError::InvalidParameter { .. }));

        let err = flattener.sample_segment(&curve.segments()[0]).unwrap_err();
        assert!(matches!(err, TekError::InvalidParameter { .. }));
    }

    #[test]
    fn test_sample_cubic_keeps_endpoints_below_minimum() {
        let start = Point::new(0.0, 0.0);
        let end = Point::new(30.0, 0.0);
        let samples = sample_cubic(start, start, end, end, 0);
        assert_eq!(samples, vec![start, end]);
    }

    #[test]
    fn test_too_few_samples_rejected() {
        let flattener = CurveFlattener::new(FlattenerConfig {
            bezier_samples: 1,
            ..Default::default()
        });
        let err = flattener.flatten(&[]).unwrap_err();
        assert!(matches!(err, TekError::InvalidParameter { .. }));
    }
}
