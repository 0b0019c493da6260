//! Leading lines: a subject near a frame diagonal with no face detected is
//! likely anchored by converging lines. Uses a steep linear falloff with a
//! floor instead of the shared squared mapping: even a rough alignment is
//! worth surfacing, but the reward saturates fast with distance.

use super::{fallback, nearest_diagonal};
use crate::hint::{order_for_display, Evaluation, Hint, Overlay};
use crate::score::{clamp_score, roll_penalty};
use crate::types::FrameFeatures;

const APPLICABILITY_CANDIDATE: f32 = 0.45;
const APPLICABILITY_DEFAULT: f32 = 0.2;

const DIST_SCALE: f32 = 300.0;
const BASE_FLOOR: f32 = 30.0;
const ROLL_THRESHOLD_DEG: f32 = 3.0;
const ROLL_WEIGHT: f32 = 2.0;
const DEAD_ZONE: f32 = 0.04;
const FALLBACK_TEXT: &str = "look for lines leading toward your subject";

pub(super) fn applicability(features: &FrameFeatures) -> f32 {
    if features.subject_box.is_some() && features.gaze_yaw_deg.is_none() {
        APPLICABILITY_CANDIDATE
    } else {
        APPLICABILITY_DEFAULT
    }
}

pub(super) fn evaluate(features: &FrameFeatures) -> Evaluation {
    let Some(subject) = features.subject_center() else {
        return fallback(FALLBACK_TEXT, Overlay::Diagonals, features);
    };
    let (dist, target) = nearest_diagonal(subject);
    let base = (100.0 - dist * DIST_SCALE).clamp(BASE_FLOOR, 100.0);
    let (penalty, rotate) = roll_penalty(features.roll_deg, ROLL_THRESHOLD_DEG, ROLL_WEIGHT);

    let mut hints = Vec::new();
    if let Some(rotate) = rotate {
        hints.push(rotate);
    }
    let dx = target.x - subject.x;
    let dy = target.y - subject.y;
    if dx.abs() > DEAD_ZONE || dy.abs() > DEAD_ZONE {
        hints.push(Hint::Move { dx, dy });
    }
    order_for_display(&mut hints);

    Evaluation {
        score: clamp_score(base - penalty),
        hints,
        overlay: Overlay::Diagonals,
        subject_box: features.subject_box,
    }
}
