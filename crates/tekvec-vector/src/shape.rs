//! All paths of one image.

use crate::encoder::{merge_contiguous, EncoderConfig, PathEncoder};
use crate::fitter::{union_bbox, FitTransform, Fitter, FitterConfig};
use crate::flattener::{CurveFlattener, FlattenerConfig};
use crate::tek_path::TekPath;
use tekvec_core::{BoundingBox, Curve, TekError, TekResult};

/// Ordered paths of one image. Fitted in place, encoded once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shape {
    paths: Vec<TekPath>,
}

/// Size figures for an encoded shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShapeStats {
    /// Paths before merging
    pub paths: usize,
    /// Paths after merging contiguous runs
    pub merged_paths: usize,
    /// Points written to the stream
    pub points: usize,
    /// Group Separator markers written
    pub markers: usize,
    /// Total stream length
    pub bytes: usize,
}

impl Shape {
    /// Flatten `curves` into one path per non-empty curve.
    pub fn from_curves(curves: &[Curve], config: &FlattenerConfig) -> TekResult<Self> {
        let polylines = CurveFlattener::new(config.clone()).flatten(curves)?;
        let paths = polylines
            .into_iter()
            .map(TekPath::new)
            .collect::<TekResult<Vec<_>>>()?;
        Ok(Self { paths })
    }

    pub fn from_paths(paths: Vec<TekPath>) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &[TekPath] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn point_count(&self) -> usize {
        self.paths.iter().map(TekPath::len).sum()
    }

    /// Union bounding box of all paths.
    pub fn bbox(&self) -> TekResult<BoundingBox> {
        union_bbox(&self.paths).ok_or(TekError::EmptyGeometry)
    }

    /// Scale and centre every path inside the device rectangle.
    pub fn fit(&mut self, config: &FitterConfig) -> TekResult<FitTransform> {
        Fitter::new(config.clone()).fit(&mut self.paths)
    }

    /// Paths as the encoder emits them, contiguous runs folded together.
    pub fn merged_paths(&self, merge_tolerance: f64) -> Vec<TekPath> {
        merge_contiguous(&self.paths, merge_tolerance)
    }

    /// Encode the shape into a vector-mode byte stream.
    pub fn encode(&self, config: &EncoderConfig) -> TekResult<Vec<u8>> {
        PathEncoder::new(config.clone()).encode(&self.paths)
    }

    /// Encode the shape and report what was written.
    pub fn encode_with_stats(&self, config: &EncoderConfig) -> TekResult<(Vec<u8>, ShapeStats)> {
        let stream = PathEncoder::new(config.clone()).encode_stream(&self.paths)?;
        let stats = ShapeStats {
            paths: self.paths.len(),
            merged_paths: stream.merged_paths,
            points: stream.points,
            markers: stream.merged_paths,
            bytes: stream.bytes.len(),
        };
        Ok((stream.bytes, stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tekvec_core::constants::{BYTES_PER_POINT, GROUP_SEPARATOR};
    use tekvec_core::{Point, Segment};

    fn line(a: (f64, f64), b: (f64, f64)) -> Curve {
        Curve::new(vec![Segment::line(a.into(), b.into())])
    }

    #[test]
    fn test_contiguous_curves_merge() {
        let shape = Shape::from_curves(
            &[line((10.0, 10.0), (50.0, 10.0)), line((50.0, 10.0), (50.0, 60.0))],
            &FlattenerConfig::default(),
        )
        .unwrap();

        assert_eq!(shape.len(), 2);
        let merged = shape.merged_paths(0.0);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].len(), 3);

        let bytes = shape.encode(&EncoderConfig::default()).unwrap();
        assert_eq!(bytes.iter().filter(|&&b| b == GROUP_SEPARATOR).count(), 1);
    }

    #[test]
    fn test_disjoint_curves_stay_apart() {
        let shape = Shape::from_curves(
            &[line((10.0, 10.0), (50.0, 10.0)), line((60.0, 10.0), (60.0, 60.0))],
            &FlattenerConfig::default(),
        )
        .unwrap();

        let merged = shape.merged_paths(0.0);
        assert_eq!(merged.len(), 2);
        assert!(merged.iter().all(|p| p.len() == 2));

        let bytes = shape.encode(&EncoderConfig::default()).unwrap();
        assert_eq!(bytes.len(), 2 + 4 * BYTES_PER_POINT);
        assert_eq!(bytes.iter().filter(|&&b| b == GROUP_SEPARATOR).count(), 2);
    }

    #[test]
    fn test_stats_match_encoding() {
        let mut shape = Shape::from_curves(
            &[
                line((0.0, 0.0), (10.0, 0.0)),
                line((10.0, 0.0), (10.0, 10.0)),
                line((20.0, 20.0), (30.0, 30.0)),
            ],
            &FlattenerConfig::default(),
        )
        .unwrap();
        shape.fit(&FitterConfig::default()).unwrap();

        let (bytes, stats) = shape.encode_with_stats(&EncoderConfig::default()).unwrap();
        assert_eq!(stats.paths, 3);
        assert_eq!(stats.merged_paths, 2);
        assert_eq!(stats.markers, 2);
        assert_eq!(stats.points, 5);
        assert_eq!(stats.bytes, bytes.len());
        assert_eq!(bytes, shape.encode(&EncoderConfig::default()).unwrap());
    }

    #[test]
    fn test_empty_shape_has_no_bbox() {
        assert_eq!(Shape::default().bbox().unwrap_err(), TekError::EmptyGeometry);
    }

    #[test]
    fn test_bbox_is_flipped() {
        let shape = Shape::from_curves(
            &[line((0.0, 0.0), (100.0, 100.0))],
            &FlattenerConfig::default(),
        )
        .unwrap();
        let bbox = shape.bbox().unwrap();
        assert_eq!(bbox.min_y, 679.0);
        assert_eq!(bbox.max_y, 779.0);
        assert_eq!(shape.paths()[0].first(), Point::new(0.0, 779.0));
    }
}
