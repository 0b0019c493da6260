//! Diagonal placement: reward subjects sitting on one of the two frame
//! diagonals. Tilt tolerance is loose here; a slanted camera often helps a
//! diagonal composition.

use super::{fallback, nearest_diagonal};
use crate::hint::{order_for_display, Evaluation, Hint, Overlay};
use crate::score::{clamp_score, distance_score, roll_penalty};
use crate::types::FrameFeatures;

pub(super) const APPLICABILITY: f32 = 0.35;

const MAX_DIST: f32 = 0.35;
const ROLL_THRESHOLD_DEG: f32 = 5.0;
const ROLL_WEIGHT: f32 = 2.0;
const DEAD_ZONE: f32 = 0.03;
const FALLBACK_TEXT: &str = "align your subject with a frame diagonal";

pub(super) fn evaluate(features: &FrameFeatures) -> Evaluation {
    let Some(subject) = features.subject_center() else {
        return fallback(FALLBACK_TEXT, Overlay::Diagonals, features);
    };
    let (dist, target) = nearest_diagonal(subject);
    let base = distance_score(dist, MAX_DIST);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rect;

    fn features_at(cx: f32, cy: f32) -> FrameFeatures {
        FrameFeatures {
            roll_deg: 0.0,
            horizon_y: None,
            subject_box: Some(Rect::new(cx - 0.05, cy - 0.05, cx + 0.05, cy + 0.05)),
            gaze_yaw_deg: None,
        }
    }

    #[test]
    fn subject_on_diagonal_scores_perfect() {
        let eval = evaluate(&features_at(0.25, 0.25));
        assert_eq!(eval.score, 100);
        assert!(eval.hints.is_empty());
        assert_eq!(eval.overlay, Overlay::Diagonals);
    }

    #[test]
    fn off_diagonal_subject_gets_a_move_toward_the_line() {
        // (0.6, 0.2) is nearer the anti-diagonal; projection is (0.7, 0.3).
        let eval = evaluate(&features_at(0.6, 0.2));
        assert!(eval.score < 100);
        let (dx, dy) = eval
            .hints
            .iter()
            .find_map(|h| match h {
                Hint::Move { dx, dy } => Some((*dx, *dy)),
                _ => None,
            })
            .expect("move hint expected off the diagonal");
        assert!((dx - 0.1).abs() < 1e-5, "dx={dx}");
        assert!((dy - 0.1).abs() < 1e-5, "dy={dy}");
    }
}
