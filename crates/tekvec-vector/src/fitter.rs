//! Fitter
//!
//! Scales paths uniformly and centres them inside the device rectangle,
//! leaving a fixed margin on every side.

use crate::tek_path::TekPath;
use serde::{Deserialize, Serialize};
use std::fmt;
use tekvec_core::constants::{MARGIN, MAX_X_COORDINATE, MAX_Y_COORDINATE};
use tekvec_core::{BoundingBox, TekError, TekResult, Vector};
use tracing::{debug, warn};

/// What to do when the geometry has zero width or height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DegeneratePolicy {
    /// Fail with [`TekError::DegenerateGeometry`]
    #[default]
    Reject,
    /// Keep the input size (scale 1) and only centre the geometry
    UnitScale,
}

impl fmt::Display for DegeneratePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reject => write!(f, "reject"),
            Self::UnitScale => write!(f, "unit-scale"),
        }
    }
}

/// Fitting configuration
#[derive(Debug, Clone)]
pub struct FitterConfig {
    /// Right edge of the target rectangle
    pub max_x: f64,
    /// Top edge of the target rectangle
    pub max_y: f64,
    /// Free space kept on every side
    pub margin: f64,
    /// Handling of zero-extent geometry
    pub degenerate_policy: DegeneratePolicy,
}

impl Default for FitterConfig {
    fn default() -> Self {
        Self {
            max_x: MAX_X_COORDINATE,
            max_y: MAX_Y_COORDINATE,
            margin: MARGIN,
            degenerate_policy: DegeneratePolicy::Reject,
        }
    }
}

impl FitterConfig {
    /// The margin must leave a positive drawable extent on both axes.
    pub fn validate(&self) -> TekResult<()> {
        if !(self.max_x.is_finite() && self.max_x > 0.0) || !(self.max_y.is_finite() && self.max_y > 0.0)
        {
            return Err(TekError::InvalidParameter {
                name: "target".to_string(),
                reason: format!("{} x {} is not a positive finite size", self.max_x, self.max_y),
            });
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(TekError::InvalidParameter {
                name: "margin".to_string(),
                reason: format!("{} is not a finite non-negative value", self.margin),
            });
        }
        if 2.0 * self.margin >= self.max_x.min(self.max_y) {
            return Err(TekError::InvalidParameter {
                name: "margin".to_string(),
                reason: format!(
                    "{} leaves no drawable area in {} x {}",
                    self.margin, self.max_x, self.max_y
                ),
            });
        }
        Ok(())
    }

    /// Rectangle the fitted geometry is guaranteed to stay inside.
    pub fn drawable_area(&self) -> BoundingBox {
        BoundingBox {
            min_x: self.margin,
            min_y: self.margin,
            max_x: self.max_x - self.margin,
            max_y: self.max_y - self.margin,
        }
    }
}

/// The scale and offset a fit applied, in that order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitTransform {
    pub scale: f64,
    pub offset: Vector,
}

/// Union bounding box of every path, or `None` when there are no paths.
pub fn union_bbox(paths: &[TekPath]) -> Option<BoundingBox> {
    paths
        .iter()
        .map(TekPath::bbox)
        .reduce(BoundingBox::union)
}

/// Fits paths into the device rectangle
#[derive(Debug, Default)]
pub struct Fitter {
    config: FitterConfig,
}

impl Fitter {
    /// Create a new fitter
    pub fn new(config: FitterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FitterConfig {
        &self.config
    }

    /// Scale factor that makes `bbox` as large as possible without leaving
    /// the drawable area on either axis.
    pub fn scale_for(&self, bbox: &BoundingBox) -> TekResult<f64> {
        if bbox.is_degenerate() {
            let finite = bbox.width().is_finite() && bbox.height().is_finite();
            if finite && self.config.degenerate_policy == DegeneratePolicy::UnitScale {
                warn!(
                    width = bbox.width(),
                    height = bbox.height(),
                    "degenerate bounding box, fitting at unit scale"
                );
                return Ok(1.0);
            }
            return Err(TekError::DegenerateGeometry {
                width: bbox.width(),
                height: bbox.height(),
            });
        }

        let span = 2.0 * self.config.margin;
        let scale_x = (self.config.max_x - span) / bbox.width();
        let scale_y = (self.config.max_y - span) / bbox.height();
        Ok(scale_x.min(scale_y))
    }

    /// Scale and centre `paths` in place, returning the applied transform.
    pub fn fit(&self, paths: &mut [TekPath]) -> TekResult<FitTransform> {
        self.config.validate()?;

        let bbox = union_bbox(paths).ok_or(TekError::EmptyGeometry)?;
        let scale = self.scale_for(&bbox)?;
        for path in paths.iter_mut() {
            path.scale_in_place(scale);
        }

        let scaled = union_bbox(paths).ok_or(TekError::EmptyGeometry)?;
        let center = scaled.center();
        let offset = Vector::new(
            self.config.max_x / 2.0 - center.x,
            self.config.max_y / 2.0 - center.y,
        );
        for path in paths.iter_mut() {
            path.offset_in_place(offset);
        }

        debug!(
            scale,
            offset_x = offset.dx,
            offset_y = offset.dy,
            width = bbox.width(),
            height = bbox.height(),
            "fitted geometry"
        );
        Ok(FitTransform { scale, offset })
    }
}
