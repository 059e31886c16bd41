//! Error types for the conversion pipeline.
//!
//! Every error is fatal for the conversion that raised it: no stage retries
//! and no stage hands back partial output. Variants carry the curve, segment,
//! path, or point index needed to find the offending input.

use crate::types::SegmentKind;
use thiserror::Error;

/// Errors raised while flattening, fitting, or encoding a shape.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TekError {
    /// A curve contains a primitive the flattener does not sample.
    #[error("Unsupported segment kind '{kind}' at curve {curve}, segment {segment}")]
    UnsupportedSegmentKind {
        /// Index of the curve in the input sequence.
        curve: usize,
        /// Index of the segment within that curve.
        segment: usize,
        /// The rejected primitive.
        kind: SegmentKind,
    },

    /// There are no points to fit or encode.
    #[error("Empty geometry: no points to fit")]
    EmptyGeometry,

    /// The bounding box has no extent (or a non-finite extent) on an axis.
    #[error("Degenerate geometry: bounding box is {width} x {height}")]
    DegenerateGeometry {
        /// Bounding box width before scaling.
        width: f64,
        /// Bounding box height before scaling.
        height: f64,
    },

    /// A coordinate does not fit the device grid.
    #[error("Coordinate ({x}, {y}) out of range at path {path}, point {point}")]
    CoordinateOutOfRange {
        /// Index of the (merged) path being encoded.
        path: usize,
        /// Index of the point within that path.
        point: usize,
        /// Offending X coordinate.
        x: f64,
        /// Offending Y coordinate.
        y: f64,
    },

    /// A conversion parameter is outside its valid range.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Result type alias for pipeline operations.
pub type TekResult<T> = Result<T, TekError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_segment_display() {
        let err = TekError::UnsupportedSegmentKind {
            curve: 2,
            segment: 5,
            kind: SegmentKind::Arc,
        };
        assert_eq!(
            err.to_string(),
            "Unsupported segment kind 'arc' at curve 2, segment 5"
        );
    }

    #[test]
    fn test_geometry_error_display() {
        assert_eq!(
            TekError::EmptyGeometry.to_string(),
            "Empty geometry: no points to fit"
        );

        let err = TekError::DegenerateGeometry {
            width: 0.0,
            height: 12.5,
        };
        assert_eq!(
            err.to_string(),
            "Degenerate geometry: bounding box is 0 x 12.5"
        );
    }

    #[test]
    fn test_out_of_range_display() {
        let err = TekError::CoordinateOutOfRange {
            path: 1,
            point: 3,
            x: 1024.0,
            y: -1.5,
        };
        assert_eq!(
            err.to_string(),
            "Coordinate (1024, -1.5) out of range at path 1, point 3"
        );
    }
}
