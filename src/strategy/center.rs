//! Centred symmetry: dead-centre placement for symmetric scenes. Tighter
//! falloff and tilt tolerance than the grid rules, since symmetry breaks
//! quickly off-axis.

use super::{evaluate_anchor, AnchorRule};
use crate::hint::{Evaluation, Overlay};
use crate::types::FrameFeatures;
use nalgebra::Point2;

pub(super) const APPLICABILITY: f32 = 0.4;

const RULE: AnchorRule = AnchorRule {
    max_dist: 0.35,
    roll_threshold_deg: 1.5,
    roll_weight: 4.0,
    dead_zone: 0.02,
    fallback_text: "center your subject for a symmetric composition",
};

fn center_point() -> Point2<f32> {
    Point2::new(0.5, 0.5)
}

pub(super) fn evaluate(features: &FrameFeatures) -> Evaluation {
    let target = center_point();
    evaluate_anchor(
        &RULE,
        &[target],
        Overlay::Targets {
            points: vec![target],
        },
        features,
    )
}
