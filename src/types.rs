//! Core data contracts shared across the engine.
//!
//! All spatial values are normalized to the image frame: `x` grows to the
//! right, `y` grows downward, both in [0, 1]. Absence of a feature is always
//! an `Option`, never a sentinel value.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in normalized image coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    /// Construct from edge coordinates.
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Centre point of the rectangle.
    #[inline]
    pub fn center(&self) -> Point2<f32> {
        Point2::new(
            0.5 * (self.left + self.right),
            0.5 * (self.top + self.bottom),
        )
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Per-frame feature set fed into scoring. Built once per frame from the
/// sensor roll, the horizon estimator output, and the latest published
/// subject/gaze observation; immutable afterwards.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct FrameFeatures {
    /// Device roll in degrees (positive = clockwise tilt).
    pub roll_deg: f32,
    /// Normalized vertical position of the detected horizon, if confident.
    pub horizon_y: Option<f32>,
    /// Bounding box of the primary subject, if a detector result exists.
    pub subject_box: Option<Rect>,
    /// Signed gaze yaw of a detected face (negative = looking toward -x).
    pub gaze_yaw_deg: Option<f32>,
}

impl FrameFeatures {
    /// Centre of the subject box, when one is present.
    #[inline]
    pub fn subject_center(&self) -> Option<Point2<f32>> {
        self.subject_box.map(|b| b.center())
    }
}
