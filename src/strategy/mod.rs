//! Composition strategies: per-rule applicability and evaluation.
//!
//! The rule set is small and fixed, so strategies are a closed enum
//! dispatching to pure per-rule functions rather than trait objects; there
//! is no per-frame allocation beyond the hint list. Every rule follows the
//! same pattern: a base score from geometric proximity to its target (or
//! [`roll_only_score`](crate::score::roll_only_score) when the needed
//! feature is absent), a tilt deduction, dead-zoned directional hints, and
//! exactly one overlay descriptor.

mod center;
mod diagonal;
mod horizon_rule;
mod leading;
mod lookroom;
mod phi;
mod thirds;

use crate::hint::{order_for_display, Evaluation, Hint, Overlay};
use crate::score::geometry;
use crate::score::{clamp_score, distance_score, roll_only_score, roll_penalty};
use crate::types::FrameFeatures;
use nalgebra::Point2;
use serde::Serialize;

/// The fixed set of composition rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    Thirds,
    GoldenRatio,
    CenterSymmetry,
    Diagonal,
    Horizon,
    LeadingLines,
    PortraitLookroom,
}

impl StrategyKind {
    /// Stable string id, usable as a user-facing selection key.
    pub fn id(self) -> &'static str {
        match self {
            StrategyKind::Thirds => "thirds",
            StrategyKind::GoldenRatio => "golden_ratio",
            StrategyKind::CenterSymmetry => "center",
            StrategyKind::Diagonal => "diagonal",
            StrategyKind::Horizon => "horizon",
            StrategyKind::LeadingLines => "leading_lines",
            StrategyKind::PortraitLookroom => "lookroom",
        }
    }

    /// Self-reported fitness in [0, 1] for the current frame; used only for
    /// auto-ranking.
    pub fn applicability(self, features: &FrameFeatures) -> f32 {
        match self {
            StrategyKind::Thirds => thirds::APPLICABILITY,
            StrategyKind::GoldenRatio => phi::APPLICABILITY,
            StrategyKind::CenterSymmetry => center::APPLICABILITY,
            StrategyKind::Diagonal => diagonal::APPLICABILITY,
            StrategyKind::Horizon => horizon_rule::applicability(features),
            StrategyKind::LeadingLines => leading::applicability(features),
            StrategyKind::PortraitLookroom => lookroom::applicability(features),
        }
    }

    /// Evaluate the rule against the frame features.
    pub fn evaluate(self, features: &FrameFeatures) -> Evaluation {
        match self {
            StrategyKind::Thirds => thirds::evaluate(features),
            StrategyKind::GoldenRatio => phi::evaluate(features),
            StrategyKind::CenterSymmetry => center::evaluate(features),
            StrategyKind::Diagonal => diagonal::evaluate(features),
            StrategyKind::Horizon => horizon_rule::evaluate(features),
            StrategyKind::LeadingLines => leading::evaluate(features),
            StrategyKind::PortraitLookroom => lookroom::evaluate(features),
        }
    }
}

/// Shared configuration for rules that steer the subject toward fixed
/// anchor points.
pub(crate) struct AnchorRule {
    pub max_dist: f32,
    pub roll_threshold_deg: f32,
    pub roll_weight: f32,
    /// Per-axis offset magnitude below which no move hint is emitted.
    pub dead_zone: f32,
    pub fallback_text: &'static str,
}

/// Evaluate a point-target rule: nearest anchor, squared-falloff base score,
/// tilt deduction, dead-zoned `Move` + `PlaceAt` hints.
pub(crate) fn evaluate_anchor(
    rule: &AnchorRule,
    targets: &[Point2<f32>],
    overlay: Overlay,
    features: &FrameFeatures,
) -> Evaluation {
    let Some(subject) = features.subject_center() else {
        return fallback(rule.fallback_text, overlay, features);
    };
    let target = geometry::nearest_target(subject, targets);
    let base = distance_score(geometry::dist(subject, target), rule.max_dist);
    let (penalty, rotate) = roll_penalty(
        features.roll_deg,
        rule.roll_threshold_deg,
        rule.roll_weight,
    );

    let mut hints = Vec::new();
    if let Some(rotate) = rotate {
        hints.push(rotate);
    }
    let dx = target.x - subject.x;
    let dy = target.y - subject.y;
    if dx.abs() > rule.dead_zone || dy.abs() > rule.dead_zone {
        hints.push(Hint::Move { dx, dy });
        hints.push(Hint::PlaceAt {
            x: target.x,
            y: target.y,
        });
    }
    order_for_display(&mut hints);

    Evaluation {
        score: clamp_score(base - penalty),
        hints,
        overlay,
        subject_box: features.subject_box,
    }
}

/// Tilt-only evaluation used whenever the feature a rule needs is absent.
/// Never an error: the score stays informative for auto-ranking and a text
/// hint tells the operator what is missing.
pub(crate) fn fallback(message: &str, overlay: Overlay, features: &FrameFeatures) -> Evaluation {
    Evaluation {
        score: clamp_score(roll_only_score(features.roll_deg)),
        hints: vec![Hint::Text {
            message: message.to_string(),
        }],
        overlay,
        subject_box: features.subject_box,
    }
}

/// Distance and projection onto the closer of the two frame diagonals.
/// The main diagonal wins exact ties.
pub(crate) fn nearest_diagonal(p: Point2<f32>) -> (f32, Point2<f32>) {
    let d_main = geometry::main_diagonal_dist(p);
    let d_anti = geometry::anti_diagonal_dist(p);
    if d_main <= d_anti {
        (d_main, geometry::project_main_diagonal(p))
    } else {
        (d_anti, geometry::project_anti_diagonal(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rect;

    fn boxed(cx: f32, cy: f32) -> Option<Rect> {
        Some(Rect::new(cx - 0.05, cy - 0.05, cx + 0.05, cy + 0.05))
    }

    #[test]
    fn every_kind_scores_within_range() {
        let cases = [
            FrameFeatures::default(),
            FrameFeatures {
                roll_deg: 45.0,
                horizon_y: Some(0.5),
                subject_box: boxed(0.9, 0.9),
                gaze_yaw_deg: Some(-20.0),
            },
            FrameFeatures {
                roll_deg: -90.0,
                horizon_y: None,
                subject_box: boxed(0.1, 0.1),
                gaze_yaw_deg: None,
            },
        ];
        for kind in crate::registry::REGISTRATION_ORDER {
            for features in &cases {
                let eval = kind.evaluate(features);
                assert!(eval.score <= 100, "{:?} overflowed: {}", kind, eval.score);
                let app = kind.applicability(features);
                assert!(
                    (0.0..=1.0).contains(&app),
                    "{kind:?} applicability out of range: {app}"
                );
            }
        }
    }

    #[test]
    fn ids_are_unique_and_stable() {
        let ids: Vec<_> = crate::registry::REGISTRATION_ORDER
            .iter()
            .map(|k| k.id())
            .collect();
        let mut deduped = ids.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len(), "duplicate strategy id in {ids:?}");
    }

    #[test]
    fn nearest_diagonal_prefers_main_on_tie() {
        let (d, target) = nearest_diagonal(Point2::new(0.5, 0.5));
        assert!(d.abs() < 1e-6);
        assert!((target.x - target.y).abs() < 1e-6);
    }
}
