//! Portrait look-room: offset a face opposite to its gaze so the subject
//! looks into open frame space. The strongest-claiming rule when both a
//! subject box and a gaze yaw are available.

use super::{evaluate_anchor, AnchorRule};
use crate::hint::{Evaluation, GridKind, Overlay};
use crate::types::FrameFeatures;
use nalgebra::Point2;

const APPLICABILITY_PORTRAIT: f32 = 0.95;
const APPLICABILITY_DEFAULT: f32 = 0.2;

/// Yaw magnitudes below this are treated as looking at the camera.
const YAW_DEAD_ZONE_DEG: f32 = 0.1;
const LOOK_RIGHT_X: f32 = 0.38;
const LOOK_LEFT_X: f32 = 0.62;
const NEUTRAL_X: f32 = 0.5;
const TARGET_Y: f32 = 0.38;

const RULE: AnchorRule = AnchorRule {
    max_dist: 0.40,
    roll_threshold_deg: 2.0,
    roll_weight: 3.0,
    dead_zone: 0.03,
    fallback_text: "frame the face with room in the gaze direction",
};

pub(super) fn applicability(features: &FrameFeatures) -> f32 {
    if features.subject_box.is_some() && features.gaze_yaw_deg.is_some() {
        APPLICABILITY_PORTRAIT
    } else {
        APPLICABILITY_DEFAULT
    }
}

pub(super) fn evaluate(features: &FrameFeatures) -> Evaluation {
    // Positive yaw looks toward +x, so the face belongs on the left phi
    // line, and vice versa. Absent or near-zero yaw centres horizontally.
    let yaw = features.gaze_yaw_deg.unwrap_or(0.0);
    let target_x = if yaw > YAW_DEAD_ZONE_DEG {
        LOOK_RIGHT_X
    } else if yaw < -YAW_DEAD_ZONE_DEG {
        LOOK_LEFT_X
    } else {
        NEUTRAL_X
    };
    evaluate_anchor(
        &RULE,
        &[Point2::new(target_x, TARGET_Y)],
        Overlay::Grid {
            grid: GridKind::Phi,
        },
        features,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hint::Hint;
    use crate::score::roll_only_score;
    use crate::types::Rect;

    fn face_at(cx: f32, cy: f32, yaw: Option<f32>) -> FrameFeatures {
        FrameFeatures {
            roll_deg: 0.0,
            horizon_y: None,
            subject_box: Some(Rect::new(cx - 0.08, cy - 0.08, cx + 0.08, cy + 0.08)),
            gaze_yaw_deg: yaw,
        }
    }

    #[test]
    fn gaze_direction_picks_the_target_side() {
        let looking_right = evaluate(&face_at(LOOK_RIGHT_X, TARGET_Y, Some(20.0)));
        assert_eq!(looking_right.score, 100);

        let looking_left = evaluate(&face_at(LOOK_RIGHT_X, TARGET_Y, Some(-20.0)));
        assert!(looking_left.score < 100);
        let place = looking_left
            .hints
            .iter()
            .find_map(|h| match h {
                Hint::PlaceAt { x, y } => Some((*x, *y)),
                _ => None,
            })
            .expect("place hint expected when off-target");
        assert_eq!(place, (LOOK_LEFT_X, TARGET_Y));
    }

    #[test]
    fn neutral_gaze_centres_horizontally() {
        let eval = evaluate(&face_at(NEUTRAL_X, TARGET_Y, Some(0.05)));
        assert_eq!(eval.score, 100);
    }

    #[test]
    fn missing_face_falls_back() {
        let features = FrameFeatures {
            roll_deg: 6.0,
            ..Default::default()
        };
        let eval = evaluate(&features);
        assert_eq!(eval.score, roll_only_score(6.0) as u8);
        assert!(matches!(eval.hints.as_slice(), [Hint::Text { .. }]));
    }
}
