//! Golden ratio: like thirds, but with the crossings at the phi divisions
//! (0.382 / 0.618), a slightly tighter framing than the thirds grid.

use super::{evaluate_anchor, AnchorRule};
use crate::hint::{Evaluation, GridKind, Overlay};
use crate::types::FrameFeatures;
use nalgebra::Point2;

pub(super) const APPLICABILITY: f32 = 0.5;

const PHI_LO: f32 = 0.382;
const PHI_HI: f32 = 0.618;

const RULE: AnchorRule = AnchorRule {
    max_dist: 0.45,
    roll_threshold_deg: 2.0,
    roll_weight: 2.5,
    dead_zone: 0.03,
    fallback_text: "place your subject on a golden-ratio crossing",
};

fn targets() -> [Point2<f32>; 4] {
    [
        Point2::new(PHI_LO, PHI_LO),
        Point2::new(PHI_HI, PHI_LO),
        Point2::new(PHI_LO, PHI_HI),
        Point2::new(PHI_HI, PHI_HI),
    ]
}

pub(super) fn evaluate(features: &FrameFeatures) -> Evaluation {
    evaluate_anchor(
        &RULE,
        &targets(),
        Overlay::Grid {
            grid: GridKind::Phi,
        },
        features,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rect;

    #[test]
    fn subject_on_phi_crossing_scores_perfect() {
        let features = FrameFeatures {
            roll_deg: 0.0,
            horizon_y: None,
            subject_box: Some(Rect::new(
                PHI_HI - 0.05,
                PHI_LO - 0.05,
                PHI_HI + 0.05,
                PHI_LO + 0.05,
            )),
            gaze_yaw_deg: None,
        };
        let eval = evaluate(&features);
        assert_eq!(eval.score, 100);
        assert_eq!(
            eval.overlay,
            Overlay::Grid {
                grid: GridKind::Phi
            }
        );
    }
}
