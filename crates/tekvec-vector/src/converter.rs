//! Curve to vector-mode conversion
//!
//! Runs flattening, fitting, and encoding with one set of parameters.

use crate::encoder::EncoderConfig;
use crate::fitter::{FitTransform, FitterConfig};
use crate::flattener::FlattenerConfig;
use crate::shape::{Shape, ShapeStats};
use tekvec_core::{Curve, TekResult};
use tracing::{info, info_span};

/// Parameters for every pipeline stage
#[derive(Debug, Clone, Default)]
pub struct ConversionParameters {
    pub flatten: FlattenerConfig,
    pub fit: FitterConfig,
    pub encode: EncoderConfig,
}

impl ConversionParameters {
    /// Validate every stage up front so a bad value fails before any work.
    pub fn validate(&self) -> TekResult<()> {
        self.flatten.validate()?;
        self.fit.validate()?;
        self.encode.validate()
    }
}

/// Output of one conversion
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Vector-mode byte stream
    pub bytes: Vec<u8>,
    /// Scale and offset applied by the fitter
    pub transform: FitTransform,
    pub stats: ShapeStats,
}

/// Converts curves into vector-mode byte streams
#[derive(Debug, Default)]
pub struct TekConverter {
    params: ConversionParameters,
}

impl TekConverter {
    /// Create a new converter
    pub fn new(params: ConversionParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ConversionParameters {
        &self.params
    }

    /// Flatten and fit `curves` without encoding.
    pub fn prepare(&self, curves: &[Curve]) -> TekResult<(Shape, FitTransform)> {
        self.params.validate()?;
        let mut shape = Shape::from_curves(curves, &self.params.flatten)?;
        let transform = shape.fit(&self.params.fit)?;
        Ok((shape, transform))
    }

    /// Run the whole pipeline.
    pub fn convert(&self, curves: &[Curve]) -> TekResult<Conversion> {
        let span = info_span!("convert", curves = curves.len());
        let _guard = span.enter();

        let (shape, transform) = self.prepare(curves)?;
        let (bytes, stats) = shape.encode_with_stats(&self.params.encode)?;

        info!(
            paths = stats.paths,
            merged_paths = stats.merged_paths,
            points = stats.points,
            bytes = stats.bytes,
            scale = transform.scale,
            "converted curves to vector mode"
        );
        Ok(Conversion {
            bytes,
            transform,
            stats,
        })
    }
}

/// Convert `curves` with `params`, returning only the byte stream.
pub fn convert(curves: &[Curve], params: &ConversionParameters) -> TekResult<Vec<u8>> {
    TekConverter::new(params.clone())
        .convert(curves)
        .map(|conversion| conversion.bytes)
}
