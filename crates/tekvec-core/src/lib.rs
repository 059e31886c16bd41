//! # tekvec Core
//!
//! Core types and constants shared by the tekvec crates.
//! Provides the geometry input model (points, segments, curves), bounding
//! boxes, the Tektronix 4010 device constants, and the error taxonomy used
//! by every stage of the conversion pipeline.

pub mod constants;
pub mod error;
pub mod types;

pub use error::{TekError, TekResult};

pub use types::{BoundingBox, Curve, Point, Segment, SegmentKind, Vector};
