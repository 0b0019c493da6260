//! Rule of thirds: place the subject on one of the four third-line
//! crossings.

use super::{evaluate_anchor, AnchorRule};
use crate::hint::{Evaluation, GridKind, Overlay};
use crate::types::FrameFeatures;
use nalgebra::Point2;

pub(super) const APPLICABILITY: f32 = 0.6;

const RULE: AnchorRule = AnchorRule {
    max_dist: 0.45,
    roll_threshold_deg: 2.0,
    roll_weight: 3.0,
    dead_zone: 0.03,
    fallback_text: "place your subject on a thirds crossing",
};

fn targets() -> [Point2<f32>; 4] {
    let lo = 1.0 / 3.0;
    let hi = 2.0 / 3.0;
    [
        Point2::new(lo, lo),
        Point2::new(hi, lo),
        Point2::new(lo, hi),
        Point2::new(hi, hi),
    ]
}

pub(super) fn evaluate(features: &FrameFeatures) -> Evaluation {
    evaluate_anchor(
        &RULE,
        &targets(),
        Overlay::Grid {
            grid: GridKind::Thirds,
        },
        features,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hint::Hint;
    use crate::types::Rect;

    fn features_at(cx: f32, cy: f32, roll_deg: f32) -> FrameFeatures {
        FrameFeatures {
            roll_deg,
            horizon_y: None,
            subject_box: Some(Rect::new(cx - 0.1, cy - 0.1, cx + 0.1, cy + 0.1)),
            gaze_yaw_deg: None,
        }
    }

    #[test]
    fn subject_on_crossing_scores_perfect() {
        let eval = evaluate(&features_at(1.0 / 3.0, 1.0 / 3.0, 0.0));
        assert_eq!(eval.score, 100);
        assert!(
            !eval
                .hints
                .iter()
                .any(|h| matches!(h, Hint::Move { .. } | Hint::Rotate { .. })),
            "no corrective hints expected on target: {:?}",
            eval.hints
        );
        assert_eq!(
            eval.overlay,
            Overlay::Grid {
                grid: GridKind::Thirds
            }
        );
    }

    #[test]
    fn centered_subject_is_pulled_toward_first_crossing() {
        let eval = evaluate(&features_at(0.5, 0.5, 0.0));
        // dist to (1/3, 1/3) is sqrt(2)/6 ~ 0.2357 with max_dist 0.45
        assert_eq!(eval.score, 72);
        let mv = eval
            .hints
            .iter()
            .find_map(|h| match h {
                Hint::Move { dx, dy } => Some((*dx, *dy)),
                _ => None,
            })
            .expect("move hint expected off-target");
        assert!((mv.0 + 1.0 / 6.0).abs() < 1e-4, "dx={}", mv.0);
        assert!((mv.1 + 1.0 / 6.0).abs() < 1e-4, "dy={}", mv.1);
    }

    #[test]
    fn tilt_subtracts_from_base_score() {
        let level = evaluate(&features_at(1.0 / 3.0, 1.0 / 3.0, 0.0));
        let tilted = evaluate(&features_at(1.0 / 3.0, 1.0 / 3.0, 10.0));
        // penalty = (10 - 2) * 3 = 24
        assert_eq!(level.score - tilted.score, 24);
        assert!(tilted
            .hints
            .iter()
            .any(|h| matches!(h, Hint::Rotate { degrees } if *degrees == -10.0)));
    }
}
