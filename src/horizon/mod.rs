//! Stateful horizon-line estimator.
//!
//! One instance per camera session. Each `detect` call runs a fixed-cost
//! pipeline over the raw luma plane (downsample → row blur → vertical Sobel
//! → row profile → smoothing → width-validated peak) and gates the result on
//! edge strength before blending it into an exponential moving average.
//! Repeated gate rejections reset the temporal state so a stale horizon
//! never lingers after the scene changes.
//!
//! The EMA and miss-streak state are mutated in place, so a single instance
//! must not be called concurrently; concurrent sessions each own their own
//! estimator.

pub mod profile;

use crate::image::ImageU8;
use log::debug;
use serde::Deserialize;

use profile::{blur_rows, downsample_luma, find_peak, row_strength, smooth_profile, vertical_sobel};

/// Tuning knobs for the horizon pipeline. Defaults are the reference
/// parameters; loosen `strength_thresh` for low-contrast scenes.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct HorizonParams {
    /// Downsampled grid width.
    pub grid_w: usize,
    /// Downsampled grid height; sets the vertical resolution of the output.
    pub grid_h: usize,
    /// Fraction of the grid height excluded at the top and bottom before
    /// peak picking.
    pub margin_frac: f32,
    /// Half-width (rows) of the peak support window.
    pub peak_window: usize,
    /// Fraction of the peak strength a row must retain to count as support.
    pub peak_keep_ratio: f32,
    /// Minimum supporting rows within the window for a peak to be accepted.
    pub min_peak_support: usize,
    /// Edge-strength confidence gate; weaker peaks report no horizon.
    pub strength_thresh: f32,
    /// Consecutive misses after which the EMA state is dropped.
    pub max_miss_streak: u32,
    /// EMA blend weight for the newest accepted measurement.
    pub ema_alpha: f32,
    /// Run the pipeline every n-th call, reusing the previous output
    /// otherwise. `1` processes every frame.
    pub frame_skip: u64,
}

impl Default for HorizonParams {
    fn default() -> Self {
        Self {
            grid_w: 120,
            grid_h: 90,
            margin_frac: 0.05,
            peak_window: 3,
            peak_keep_ratio: 0.5,
            min_peak_support: 3,
            strength_thresh: 12.0,
            max_miss_streak: 5,
            ema_alpha: 0.3,
            frame_skip: 1,
        }
    }
}

/// Multi-stage horizon estimator with temporal smoothing.
#[derive(Clone, Debug)]
pub struct HorizonEstimator {
    params: HorizonParams,
    smoothed_y: Option<f32>,
    frame_counter: u64,
    miss_streak: u32,
    last_output: Option<f32>,
}

impl HorizonEstimator {
    pub fn new(params: HorizonParams) -> Self {
        Self {
            params,
            smoothed_y: None,
            frame_counter: 0,
            miss_streak: 0,
            last_output: None,
        }
    }

    pub fn params(&self) -> &HorizonParams {
        &self.params
    }

    /// Drop all temporal state. Call when the camera session restarts or is
    /// reconfigured.
    pub fn reset(&mut self) {
        self.smoothed_y = None;
        self.frame_counter = 0;
        self.miss_streak = 0;
        self.last_output = None;
    }

    /// Estimate the normalized horizon position for one frame, or `None`
    /// when no confident detection exists.
    pub fn detect(&mut self, luma: &ImageU8<'_>) -> Option<f32> {
        let skip = self.params.frame_skip.max(1);
        let run = self.frame_counter % skip == 0;
        self.frame_counter += 1;
        if !run {
            return self.last_output;
        }

        let mut grid = downsample_luma(luma, self.params.grid_w, self.params.grid_h);
        blur_rows(&mut grid);
        let mag = vertical_sobel(&grid);
        let strength = row_strength(&mag);
        let smoothed = smooth_profile(&strength, 2);

        let peak = find_peak(
            &smoothed,
            self.params.margin_frac,
            self.params.peak_window,
            self.params.peak_keep_ratio,
            self.params.min_peak_support,
        )
        .filter(|p| p.strength >= self.params.strength_thresh);

        match peak {
            Some(peak) => {
                let measured = (peak.row as f32 + 0.5) / self.params.grid_h as f32;
                let alpha = self.params.ema_alpha;
                let blended = match self.smoothed_y {
                    Some(prev) => alpha * measured + (1.0 - alpha) * prev,
                    None => measured,
                };
                self.smoothed_y = Some(blended);
                self.miss_streak = 0;
                self.last_output = Some(blended);
                self.last_output
            }
            None => {
                self.miss_streak += 1;
                if self.miss_streak > self.params.max_miss_streak
                    && self.smoothed_y.take().is_some()
                {
                    debug!(
                        "horizon: {} consecutive misses, dropping EMA state",
                        self.miss_streak
                    );
                }
                self.last_output = None;
                None
            }
        }
    }
}
