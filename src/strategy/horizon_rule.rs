//! Horizon placement: keep the detected horizon on the upper or lower
//! third line. The only rule driven by the estimator output rather than the
//! subject box; scoring is one-dimensional along y.

use super::fallback;
use crate::hint::{order_for_display, Evaluation, GridKind, Hint, Overlay};
use crate::score::{clamp_score, distance_score, roll_penalty};
use crate::types::FrameFeatures;

const APPLICABILITY_WITH_HORIZON: f32 = 0.9;
const APPLICABILITY_WITHOUT: f32 = 0.1;

const MAX_DIST: f32 = 0.35;
const ROLL_THRESHOLD_DEG: f32 = 1.5;
const ROLL_WEIGHT: f32 = 4.0;
const DEAD_ZONE: f32 = 0.02;
const FALLBACK_TEXT: &str = "horizon not visible";

pub(super) fn applicability(features: &FrameFeatures) -> f32 {
    if features.horizon_y.is_some() {
        APPLICABILITY_WITH_HORIZON
    } else {
        APPLICABILITY_WITHOUT
    }
}

pub(super) fn evaluate(features: &FrameFeatures) -> Evaluation {
    let Some(horizon_y) = features.horizon_y else {
        return fallback(
            FALLBACK_TEXT,
            Overlay::Grid {
                grid: GridKind::Thirds,
            },
            features,
        );
    };

    // Nearer of the two third lines; the upper one wins an exact tie.
    let upper = 1.0 / 3.0;
    let lower = 2.0 / 3.0;
    let target = if (horizon_y - upper).abs() <= (horizon_y - lower).abs() {
        upper
    } else {
        lower
    };

    let base = distance_score((horizon_y - target).abs(), MAX_DIST);
    let (penalty, rotate) = roll_penalty(features.roll_deg, ROLL_THRESHOLD_DEG, ROLL_WEIGHT);

    let mut hints = Vec::new();
    if let Some(rotate) = rotate {
        hints.push(rotate);
    }
    let dy = target - horizon_y;
    if dy.abs() > DEAD_ZONE {
        hints.push(Hint::Move { dx: 0.0, dy });
    }
    order_for_display(&mut hints);

    Evaluation {
        score: clamp_score(base - penalty),
        hints,
        overlay: Overlay::HorizonLine { y: horizon_y },
        subject_box: features.subject_box,
    }
}
