//! Shared numeric primitives for composition scoring.
//!
//! Every strategy builds on the same three mappings:
//! - [`distance_score`] turns a geometric offset into a [0, 100] base score
//!   with a squared falloff (small offsets lose little, large offsets are
//!   punished superlinearly).
//! - [`roll_penalty`] converts device tilt beyond a dead-zone into a capped
//!   deduction plus a counter-rotation hint.
//! - [`roll_only_score`] is the fallback when no subject feature is
//!   available, so auto-ranking can still differentiate frames on tilt
//!   quality alone.

pub mod geometry;

use crate::hint::Hint;

/// Maximum deduction a tilt penalty may apply.
const MAX_ROLL_PENALTY: f32 = 30.0;

/// Map a distance to a [0, 100] score with squared falloff.
///
/// `dist / max_dist` is clamped to [0, 1] first, so any offset at or beyond
/// `max_dist` scores 0 and a zero offset scores exactly 100.
#[inline]
pub fn distance_score(dist: f32, max_dist: f32) -> f32 {
    let r = (dist / max_dist).clamp(0.0, 1.0);
    ((1.0 - r * r) * 100.0).clamp(0.0, 100.0)
}

/// Tilt deduction and corrective hint for a roll beyond `threshold_deg`.
///
/// Inside the threshold the penalty is zero and no hint is emitted. Beyond
/// it, the penalty grows linearly with `weight` up to a cap of 30, and the
/// hint asks the camera to rotate opposite to its tilt.
pub fn roll_penalty(roll_deg: f32, threshold_deg: f32, weight: f32) -> (f32, Option<Hint>) {
    let tilt = roll_deg.abs();
    if tilt <= threshold_deg {
        return (0.0, None);
    }
    let penalty = ((tilt - threshold_deg) * weight).min(MAX_ROLL_PENALTY);
    (
        penalty,
        Some(Hint::Rotate {
            degrees: -roll_deg,
        }),
    )
}

/// Fallback score in [10, 50] derived from tilt quality alone.
#[inline]
pub fn roll_only_score(roll_deg: f32) -> f32 {
    (50.0 - roll_deg.abs() * 2.5).clamp(10.0, 50.0)
}

/// Clamp-and-truncate a raw score into the result range.
#[inline]
pub(crate) fn clamp_score(score: f32) -> u8 {
    score.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_score_endpoints() {
        assert_eq!(distance_score(0.0, 0.45), 100.0);
        assert_eq!(distance_score(0.45, 0.45), 0.0);
        assert_eq!(distance_score(1.0, 0.45), 0.0);
    }

    #[test]
    fn distance_score_is_non_increasing() {
        let max_dist = 0.4;
        let mut prev = distance_score(0.0, max_dist);
        for step in 1..=40 {
            let d = step as f32 * 0.02;
            let s = distance_score(d, max_dist);
            assert!(
                s <= prev,
                "score increased from {prev} to {s} at dist {d}"
            );
            prev = s;
        }
    }

    #[test]
    fn roll_penalty_inside_threshold_is_silent() {
        for roll in [-2.0f32, -0.5, 0.0, 1.9, 2.0] {
            let (penalty, hint) = roll_penalty(roll, 2.0, 3.0);
            assert_eq!(penalty, 0.0, "roll {roll} should not be penalized");
            assert!(hint.is_none());
        }
    }

    #[test]
    fn roll_penalty_reference_case() {
        let (penalty, hint) = roll_penalty(10.0, 2.0, 3.0);
        assert_eq!(penalty, 24.0);
        match hint {
            Some(Hint::Rotate { degrees }) => assert_eq!(degrees, -10.0),
            other => panic!("expected rotate hint, got {other:?}"),
        }
    }

    #[test]
    fn roll_penalty_caps_at_thirty() {
        let (penalty, _) = roll_penalty(45.0, 2.0, 4.0);
        assert_eq!(penalty, 30.0);
        let (penalty, hint) = roll_penalty(-45.0, 2.0, 4.0);
        assert_eq!(penalty, 30.0);
        match hint {
            Some(Hint::Rotate { degrees }) => assert_eq!(degrees, 45.0),
            other => panic!("expected rotate hint, got {other:?}"),
        }
    }

    #[test]
    fn roll_only_score_stays_in_band() {
        assert_eq!(roll_only_score(0.0), 50.0);
        assert_eq!(roll_only_score(4.0), 40.0);
        assert_eq!(roll_only_score(90.0), 10.0);
        assert_eq!(roll_only_score(-90.0), 10.0);
    }
}
