//! Boundary to the asynchronous subject/face detector.
//!
//! Detectors publish on their own schedule; the engine only ever reads the
//! most recent observation and never waits for one. [`SubjectFeed`] is a
//! single-slot, overwrite-on-write cache: `publish` replaces the slot,
//! `latest` clones it. By contract the value may be one or more frames
//! stale, or absent entirely; consumers carry that in their types via
//! `Option`.

use crate::types::Rect;
use std::sync::{Arc, Mutex};

/// One detector result: subject box plus optional gaze yaw, stamped with
/// the producer's frame counter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubjectObservation {
    pub rect: Rect,
    /// Present only when the detection was a face.
    pub gaze_yaw_deg: Option<f32>,
    /// Producer-side frame number, for staleness bookkeeping by the host.
    pub frame_stamp: u64,
}

/// Shared latest-observation slot. Cheap to clone; all clones share the
/// same slot.
#[derive(Clone, Debug, Default)]
pub struct SubjectFeed {
    slot: Arc<Mutex<Option<SubjectObservation>>>,
}

impl SubjectFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the slot with a fresh observation.
    pub fn publish(&self, observation: SubjectObservation) {
        *self.lock() = Some(observation);
    }

    /// Drop the current observation, e.g. when the detector loses track.
    pub fn clear(&self) {
        *self.lock() = None;
    }

    /// The most recently published observation, possibly stale, possibly
    /// absent. Never blocks beyond the slot lock.
    pub fn latest(&self) -> Option<SubjectObservation> {
        *self.lock()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<SubjectObservation>> {
        // A poisoned slot still holds a valid Option; keep serving it.
        self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(stamp: u64) -> SubjectObservation {
        SubjectObservation {
            rect: Rect::new(0.2, 0.2, 0.4, 0.4),
            gaze_yaw_deg: Some(-10.0),
            frame_stamp: stamp,
        }
    }

    #[test]
    fn starts_empty() {
        assert_eq!(SubjectFeed::new().latest(), None);
    }

    #[test]
    fn publish_overwrites_keeping_only_the_last() {
        let feed = SubjectFeed::new();
        feed.publish(obs(1));
        feed.publish(obs(2));
        assert_eq!(feed.latest().map(|o| o.frame_stamp), Some(2));
    }

    #[test]
    fn clones_share_the_slot() {
        let feed = SubjectFeed::new();
        let reader = feed.clone();
        feed.publish(obs(7));
        assert_eq!(reader.latest().map(|o| o.frame_stamp), Some(7));
        feed.clear();
        assert_eq!(reader.latest(), None);
    }
}
