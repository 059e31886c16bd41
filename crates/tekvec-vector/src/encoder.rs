//! Path Encoder
//!
//! Serialises fitted paths into the Tektronix 4010 vector-mode stream.
//!
//! Each coordinate pair becomes four bytes, high-Y, low-Y, high-X, low-X,
//! each carrying five payload bits under a fixed tag:
//!
//! ```text
//! high-y  001 yyyyy   (y >> 5)
//! low-y   011 yyyyy   (y & 0x1F)
//! high-x  001 xxxxx   (x >> 5)
//! low-x   010 xxxxx   (x & 0x1F)
//! ```
//!
//! A Group Separator (0x1D) precedes every path that does not continue
//! from the previous one, so the terminal moves to its first point with the
//! beam off.

use crate::tek_path::TekPath;
use tekvec_core::constants::{
    BYTES_PER_POINT, GROUP_SEPARATOR, HIGH_BYTE_TAG, LOW_X_TAG, LOW_Y_TAG, MAX_X_UNITS,
    MAX_Y_UNITS, PAYLOAD_MASK,
};
use tekvec_core::{Point, TekError, TekResult};
use tracing::debug;

/// Encoder configuration
#[derive(Debug, Clone, Default)]
pub struct EncoderConfig {
    /// Largest per-axis distance at which a path's first point still counts
    /// as the previous path's last point. Zero means exact equality.
    pub merge_tolerance: f64,
}

impl EncoderConfig {
    pub fn validate(&self) -> TekResult<()> {
        if !self.merge_tolerance.is_finite() || self.merge_tolerance < 0.0 {
            return Err(TekError::InvalidParameter {
                name: "merge_tolerance".to_string(),
                reason: format!("{} is not a finite non-negative value", self.merge_tolerance),
            });
        }
        Ok(())
    }
}

/// Pack device units into the four wire bytes. Only the low ten bits of
/// each axis survive.
fn pack(x: i64, y: i64) -> [u8; BYTES_PER_POINT] {
    let tagged = |tag: u8, bits: i64| tag | (bits & PAYLOAD_MASK) as u8;
    [
        tagged(HIGH_BYTE_TAG, y >> 5),
        tagged(LOW_Y_TAG, y),
        tagged(HIGH_BYTE_TAG, x >> 5),
        tagged(LOW_X_TAG, x),
    ]
}

/// Encode a point, truncating toward zero and wrapping out-of-range values.
pub fn encode_point_wrapping(point: Point) -> [u8; BYTES_PER_POINT] {
    pack(point.x as i64, point.y as i64)
}

/// Encode a point, truncating toward zero.
///
/// Returns `None` when the truncated point is not finite or falls outside
/// `[0, 1023] x [0, 779]`.
pub fn encode_point(point: Point) -> Option<[u8; BYTES_PER_POINT]> {
    let x = point.x.trunc();
    let y = point.y.trunc();
    let in_range = |v: f64, max: i64| v.is_finite() && v >= 0.0 && v <= max as f64;
    if !in_range(x, MAX_X_UNITS) || !in_range(y, MAX_Y_UNITS) {
        return None;
    }
    Some(pack(x as i64, y as i64))
}

/// Fold paths whose first point coincides with the previous path's last
/// point into that previous path. Order is preserved and equal consecutive
/// points inside each result are collapsed.
pub fn merge_contiguous(paths: &[TekPath], tolerance: f64) -> Vec<TekPath> {
    let mut merged: Vec<TekPath> = Vec::with_capacity(paths.len());
    for path in paths {
        match merged.last_mut() {
            Some(prev) if path.first().coincides_with(prev.last(), tolerance) => {
                prev.append_continuation(path);
            }
            _ => merged.push(path.deduped()),
        }
    }
    merged
}

/// Encoded stream with the counts behind it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedStream {
    pub bytes: Vec<u8>,
    /// Paths written, one Group Separator each
    pub merged_paths: usize,
    /// Points written
    pub points: usize,
}

/// Serialises paths into a vector-mode byte stream
#[derive(Debug, Default)]
pub struct PathEncoder {
    config: EncoderConfig,
}

impl PathEncoder {
    /// Create a new encoder
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Merge contiguous paths, then emit a Group Separator and the packed
    /// points of each resulting path.
    ///
    /// Fails with [`TekError::CoordinateOutOfRange`] on the first point that
    /// does not fit the device grid; the indices refer to the merged paths.
    pub fn encode(&self, paths: &[TekPath]) -> TekResult<Vec<u8>> {
        self.encode_stream(paths).map(|stream| stream.bytes)
    }

    /// Same as [`PathEncoder::encode`], also returning path and point counts.
    pub fn encode_stream(&self, paths: &[TekPath]) -> TekResult<EncodedStream> {
        self.config.validate()?;

        let merged = merge_contiguous(paths, self.config.merge_tolerance);
        let points: usize = merged.iter().map(TekPath::len).sum();
        let mut out = Vec::with_capacity(merged.len() + points * BYTES_PER_POINT);

        for (path_index, path) in merged.iter().enumerate() {
            out.push(GROUP_SEPARATOR);
            for (point_index, p) in path.points().iter().enumerate() {
                let bytes = encode_point(*p).ok_or(TekError::CoordinateOutOfRange {
                    path: path_index,
                    point: point_index,
                    x: p.x,
                    y: p.y,
                })?;
                out.extend_from_slice(&bytes);
            }
        }

        debug!(
            paths = paths.len(),
            merged = merged.len(),
            points,
            bytes = out.len(),
            "encoded paths"
        );
        Ok(EncodedStream {
            bytes: out,
            merged_paths: merged.len(),
            points,
        })
    }
}
