//! Strategy registry: auto-ranking and user-override resolution.
//!
//! Registration order is fixed and load-bearing: several rules share
//! constant applicability scores, and ranking keeps strict improvements
//! only, so the first-registered strategy wins every tie. Reordering this
//! list silently changes auto-mode's default pick on ambiguous frames.

use crate::hint::Evaluation;
use crate::strategy::StrategyKind;
use crate::types::FrameFeatures;
use log::debug;

/// Registration order used for ranking and tie-breaks. Do not reorder.
pub const REGISTRATION_ORDER: [StrategyKind; 7] = [
    StrategyKind::Thirds,
    StrategyKind::GoldenRatio,
    StrategyKind::CenterSymmetry,
    StrategyKind::Diagonal,
    StrategyKind::Horizon,
    StrategyKind::LeadingLines,
    StrategyKind::PortraitLookroom,
];

/// Resolves which strategy scores a frame: the applicability-ranked best in
/// auto mode, or a user-pinned id with silent fallback when unknown.
#[derive(Clone, Debug, Default)]
pub struct StrategyRegistry;

impl StrategyRegistry {
    pub fn new() -> Self {
        Self
    }

    /// All registered strategies, in registration order.
    pub fn strategies(&self) -> &'static [StrategyKind] {
        &REGISTRATION_ORDER
    }

    /// Look up a strategy by its stable id.
    pub fn resolve(&self, id: &str) -> Option<StrategyKind> {
        REGISTRATION_ORDER.iter().copied().find(|k| k.id() == id)
    }

    /// Highest-applicability strategy for the frame; first registered wins
    /// ties.
    pub fn best_strategy(&self, features: &FrameFeatures) -> StrategyKind {
        let mut best = REGISTRATION_ORDER[0];
        let mut best_score = best.applicability(features);
        for &kind in &REGISTRATION_ORDER[1..] {
            let score = kind.applicability(features);
            if score > best_score {
                best = kind;
                best_score = score;
            }
        }
        best
    }

    /// Resolve the active strategy and evaluate it.
    ///
    /// Auto mode (or an absent id) ranks by applicability; an unknown id
    /// also resolves to the ranked best rather than surfacing an error. The
    /// result's subject box is always overwritten with the current frame's,
    /// so individual rules need not carry it.
    pub fn evaluate(
        &self,
        features: &FrameFeatures,
        selected_id: Option<&str>,
        auto: bool,
    ) -> (StrategyKind, Evaluation) {
        let kind = if auto {
            self.best_strategy(features)
        } else {
            match selected_id {
                Some(id) => self.resolve(id).unwrap_or_else(|| {
                    debug!("unknown strategy id {id:?}, falling back to auto ranking");
                    self.best_strategy(features)
                }),
                None => self.best_strategy(features),
            }
        };
        let mut evaluation = kind.evaluate(features);
        evaluation.subject_box = features.subject_box;
        (kind, evaluation)
    }
}
