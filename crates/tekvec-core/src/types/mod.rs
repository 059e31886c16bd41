//! Geometry input model.
//!
//! ## Modules
//!
//! - [`point`]: [`Point`] and [`Vector`] in user or device space
//! - [`segment`]: curve primitives and the [`Curve`] that groups them
//! - [`bbox`]: axis-aligned [`BoundingBox`]

pub mod bbox;
pub mod point;
pub mod segment;

pub use bbox::BoundingBox;
pub use point::{Point, Vector};
pub use segment::{Curve, Segment, SegmentKind};
