#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod engine;
pub mod hint;
pub mod image;
pub mod registry;
pub mod types;

// Building blocks – public for tools and tests, considered unstable.
pub mod horizon;
pub mod score;
pub mod strategy;
pub mod subject;

// --- High-level re-exports -------------------------------------------------

// Main entry points: engine + per-frame contracts.
pub use crate::engine::{CoachEngine, CoachReport, EngineParams, FrameInput};
pub use crate::hint::{Evaluation, GridKind, Hint, Overlay};
pub use crate::types::{FrameFeatures, Rect};

// Strategy surface for hosts that list or pin rules.
pub use crate::registry::{StrategyRegistry, REGISTRATION_ORDER};
pub use crate::strategy::StrategyKind;

// Detector boundary.
pub use crate::subject::{SubjectFeed, SubjectObservation};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use shot_coach::prelude::*;
///
/// # fn main() {
/// let (w, h) = (640usize, 480usize);
/// let luma = vec![0u8; w * h];
/// let img = ImageU8 { w, h, stride: w, data: &luma };
///
/// let mut engine = CoachEngine::new(EngineParams::default());
/// let report = engine.process(FrameInput {
///     roll_deg: 0.0,
///     luma: img,
///     subject_box: None,
///     gaze_yaw_deg: None,
///     strategy_id: None,
///     auto: true,
/// });
/// println!("score={} latency_ms={:.3}", report.evaluation.score, report.latency_ms);
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageU8;
    pub use crate::{CoachEngine, CoachReport, EngineParams, FrameInput, StrategyKind};
}
