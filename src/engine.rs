//! Per-frame coaching engine tying the horizon estimator and the strategy
//! registry together.
//!
//! One synchronous `process` call per frame: estimate the horizon, assemble
//! the feature set, resolve the active strategy, evaluate. No internal
//! threading, no blocking; the only carried state is the horizon EMA.
//!
//! Typical usage:
//! ```no_run
//! use shot_coach::image::ImageU8;
//! use shot_coach::{CoachEngine, EngineParams, FrameInput};
//!
//! # fn example(luma: ImageU8<'_>) {
//! let mut engine = CoachEngine::new(EngineParams::default());
//! let report = engine.process(FrameInput {
//!     roll_deg: -2.4,
//!     luma,
//!     subject_box: None,
//!     gaze_yaw_deg: None,
//!     strategy_id: None,
//!     auto: true,
//! });
//! println!("score={} hints={}", report.evaluation.score, report.evaluation.hints.len());
//! # }
//! ```

use crate::hint::Evaluation;
use crate::horizon::{HorizonEstimator, HorizonParams};
use crate::image::ImageU8;
use crate::registry::StrategyRegistry;
use crate::strategy::StrategyKind;
use crate::types::{FrameFeatures, Rect};
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Engine-wide parameters.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct EngineParams {
    pub horizon: HorizonParams,
}

/// Everything the engine consumes for one frame.
#[derive(Clone, Debug)]
pub struct FrameInput<'a> {
    /// Device roll from the orientation service, degrees.
    pub roll_deg: f32,
    /// Raw luminance plane for this frame.
    pub luma: ImageU8<'a>,
    /// Latest published subject box, possibly stale or absent.
    pub subject_box: Option<Rect>,
    /// Latest published gaze yaw, present only with a face result.
    pub gaze_yaw_deg: Option<f32>,
    /// User-pinned strategy id; ignored in auto mode.
    pub strategy_id: Option<&'a str>,
    /// When true the registry ranks strategies by applicability.
    pub auto: bool,
}

/// Per-frame engine output, handed to the presentation layer.
#[derive(Clone, Debug, Serialize)]
pub struct CoachReport {
    /// Strategy that produced the evaluation.
    pub strategy: StrategyKind,
    pub evaluation: Evaluation,
    /// Smoothed horizon estimate used for this frame, if confident.
    pub horizon_y: Option<f32>,
    pub latency_ms: f64,
}

/// Composition coaching engine. One instance per camera session; `process`
/// must not be called concurrently on the same instance because the horizon
/// estimator mutates its smoothing state in place.
#[derive(Clone, Debug)]
pub struct CoachEngine {
    horizon: HorizonEstimator,
    registry: StrategyRegistry,
}

impl CoachEngine {
    pub fn new(params: EngineParams) -> Self {
        Self {
            horizon: HorizonEstimator::new(params.horizon),
            registry: StrategyRegistry::new(),
        }
    }

    /// The registry backing strategy resolution.
    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    /// Process one frame and produce a coaching report.
    pub fn process(&mut self, frame: FrameInput<'_>) -> CoachReport {
        let start = Instant::now();

        let horizon_y = self.horizon.detect(&frame.luma);
        let features = FrameFeatures {
            roll_deg: frame.roll_deg,
            horizon_y,
            subject_box: frame.subject_box,
            gaze_yaw_deg: frame.gaze_yaw_deg,
        };

        let (strategy, evaluation) =
            self.registry
                .evaluate(&features, frame.strategy_id, frame.auto);
        debug!(
            "coach: strategy={} score={} horizon={:?}",
            strategy.id(),
            evaluation.score,
            horizon_y
        );

        CoachReport {
            strategy,
            evaluation,
            horizon_y,
            latency_ms: start.elapsed().as_secs_f64() * 1000.0,
        }
    }

    /// Drop temporal state; call when the camera session restarts or is
    /// reconfigured.
    pub fn reset(&mut self) {
        self.horizon.reset();
    }
}
