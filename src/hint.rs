//! Output contracts: hints, overlay descriptors and the per-frame evaluation.
//!
//! Hints carry a fixed integer priority (higher = more important) and are
//! displayed in descending priority order; equal priorities preserve
//! insertion order. Exactly one overlay descriptor is produced per
//! evaluation.

use crate::types::Rect;
use nalgebra::Point2;
use serde::Serialize;

/// Directional coaching hint.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Hint {
    /// Rotate the camera by `degrees` (positive = counter-clockwise).
    Rotate { degrees: f32 },
    /// Shift the subject by `(dx, dy)` in normalized units, `target - current`.
    Move { dx: f32, dy: f32 },
    /// Place the subject at a specific normalized point.
    PlaceAt { x: f32, y: f32 },
    /// Free-form guidance when geometry alone cannot help.
    Text { message: String },
}

impl Hint {
    /// Display priority; higher sorts first.
    #[inline]
    pub fn priority(&self) -> u8 {
        match self {
            Hint::Rotate { .. } => 10,
            Hint::Move { .. } => 9,
            Hint::PlaceAt { .. } => 8,
            Hint::Text { .. } => 5,
        }
    }
}

/// Sort hints for display: descending priority, stable within ties.
pub fn order_for_display(hints: &mut [Hint]) {
    hints.sort_by(|a, b| b.priority().cmp(&a.priority()));
}

/// Which composition grid to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GridKind {
    /// Rule-of-thirds lines at 1/3 and 2/3.
    Thirds,
    /// Golden-ratio lines at 0.382 and 0.618.
    Phi,
}

/// Guide geometry the presentation layer should render.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Overlay {
    Grid { grid: GridKind },
    Diagonals,
    HorizonLine { y: f32 },
    Targets { points: Vec<Point2<f32>> },
}

/// Result of a single strategy evaluation. Created fresh every frame and
/// never mutated after construction, apart from the registry echoing the
/// current subject box into `subject_box`.
#[derive(Clone, Debug, Serialize)]
pub struct Evaluation {
    /// Composition quality in [0, 100].
    pub score: u8,
    /// Hints in display order (descending priority).
    pub hints: Vec<Hint>,
    /// Guide geometry for the viewfinder.
    pub overlay: Overlay,
    /// Subject box the evaluation was based on, echoed from the features.
    pub subject_box: Option<Rect>,
}
