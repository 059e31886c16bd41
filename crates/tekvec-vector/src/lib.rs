//! # tekvec Vector Pipeline
//!
//! Turns curves into a Tektronix 4010 vector-mode byte stream.
//!
//! ## Stages
//!
//! - **Flattener**: samples lines and cubic Beziers into polylines in device orientation
//! - **Fitter**: uniform scale and centring inside the margin-adjusted device rectangle
//! - **Encoder**: path merging, Group Separator markers, and 4-byte coordinate packing
//!
//! ## Supporting Types
//!
//! - **TekPath**: deduplicated point run, the encoder's unit of output
//! - **Shape**: every path of one image, fitted in place and encoded once
//! - **Converter**: runs the three stages with one set of parameters

pub mod converter;
pub mod encoder;
pub mod fitter;
pub mod flattener;
pub mod shape;
pub mod tek_path;

pub use converter::{convert, Conversion, ConversionParameters, TekConverter};
pub use encoder::{
    encode_point, encode_point_wrapping, merge_contiguous, EncodedStream, EncoderConfig,
    PathEncoder,
};
pub use fitter::{DegeneratePolicy, FitTransform, Fitter, FitterConfig};
pub use flattener::{CurveFlattener, FlattenerConfig, Polyline};
pub use shape::{Shape, ShapeStats};
pub use tek_path::TekPath;
