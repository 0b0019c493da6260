//! Signal-processing stages of the horizon pipeline.
//!
//! Operates on a small fixed grid downsampled from the raw luma plane:
//! row-only Gaussian blur, vertical Sobel magnitude, per-row strength
//! profile, profile smoothing, and a width-validated peak pick. Stages are
//! free functions over [`ImageF32`] so they are testable in isolation.

use crate::image::{ImageF32, ImageU8, ImageView, ImageViewMut};

/// Vertical Sobel taps applied to the rows above and below a pixel.
const SOBEL_ROW: [f32; 3] = [1.0, 2.0, 1.0];

/// Row-wise 3-tap Gaussian `[1, 2, 1] / 4`.
const BLUR_TAPS: [f32; 3] = [0.25, 0.5, 0.25];

/// Nearest-neighbour downsample of a strided luma plane into a `gw × gh`
/// float grid. Only the first `w` bytes of each source row are image data;
/// stride padding is never sampled.
pub fn downsample_luma(src: &ImageU8<'_>, gw: usize, gh: usize) -> ImageF32 {
    let mut grid = ImageF32::new(gw, gh);
    if src.w == 0 || src.h == 0 {
        return grid;
    }
    for gy in 0..gh {
        let sy = (gy * src.h / gh).min(src.h - 1);
        let src_row = src.row(sy);
        let dst_row = grid.row_mut(gy);
        for (gx, dst) in dst_row.iter_mut().enumerate() {
            let sx = (gx * src.w / gw).min(src.w - 1);
            *dst = src_row[sx] as f32;
        }
    }
    grid
}

/// In-place 3-tap blur along each row only. Horizontal edges survive; pixel
/// noise within a row is suppressed. Row ends clamp.
pub fn blur_rows(grid: &mut ImageF32) {
    if grid.w < 2 {
        return;
    }
    let mut scratch = vec![0.0f32; grid.w];
    for y in 0..grid.h {
        let row = grid.row_mut(y);
        scratch.copy_from_slice(row);
        for x in 0..row.len() {
            let left = scratch[x.saturating_sub(1)];
            let right = scratch[(x + 1).min(scratch.len() - 1)];
            row[x] = left * BLUR_TAPS[0] + scratch[x] * BLUR_TAPS[1] + right * BLUR_TAPS[2];
        }
    }
}

/// Vertical Sobel magnitude over interior pixels; the one-pixel border is
/// zero.
pub fn vertical_sobel(grid: &ImageF32) -> ImageF32 {
    let mut mag = ImageF32::new(grid.w, grid.h);
    if grid.w < 3 || grid.h < 3 {
        return mag;
    }
    for y in 1..grid.h - 1 {
        let above = grid.row(y - 1);
        let below = grid.row(y + 1);
        let out = mag.row_mut(y);
        for x in 1..grid.w - 1 {
            let mut sum = 0.0;
            for (k, tap) in SOBEL_ROW.iter().enumerate() {
                let xx = x + k - 1;
                sum += tap * (below[xx] - above[xx]);
            }
            out[x] = sum.abs();
        }
    }
    mag
}

/// Average edge magnitude across each row, excluding the zeroed border
/// columns. The result is a 1-D strength profile of length `grid.h`.
pub fn row_strength(mag: &ImageF32) -> Vec<f32> {
    let mut profile = vec![0.0f32; mag.h];
    if mag.w < 3 {
        return profile;
    }
    let interior = (mag.w - 2) as f32;
    for (y, out) in profile.iter_mut().enumerate() {
        let row = mag.row(y);
        *out = row[1..mag.w - 1].iter().sum::<f32>() / interior;
    }
    profile
}

/// Sliding-window mean over ±`radius` rows, clamped at the profile ends.
/// Suppresses isolated single-row spikes before the peak pick.
pub fn smooth_profile(profile: &[f32], radius: usize) -> Vec<f32> {
    let n = profile.len();
    let mut out = vec![0.0f32; n];
    for (i, slot) in out.iter_mut().enumerate() {
        let lo = i.saturating_sub(radius);
        let hi = (i + radius).min(n.saturating_sub(1));
        let window = &profile[lo..=hi];
        *slot = window.iter().sum::<f32>() / window.len() as f32;
    }
    out
}

/// An accepted profile peak.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProfilePeak {
    pub row: usize,
    pub strength: f32,
}

/// Strongest row outside the top/bottom margin bands, accepted only when
/// the peak is wide enough to be a real horizon edge: at least
/// `min_support` rows within ±`window` must retain `keep_ratio` of the peak
/// strength. Narrow texture spikes fail this and are rejected.
pub fn find_peak(
    profile: &[f32],
    margin_frac: f32,
    window: usize,
    keep_ratio: f32,
    min_support: usize,
) -> Option<ProfilePeak> {
    let n = profile.len();
    let margin = ((n as f32) * margin_frac) as usize;
    if n == 0 || 2 * margin >= n {
        return None;
    }

    let mut row = margin;
    let mut strength = profile[margin];
    for (i, &v) in profile.iter().enumerate().take(n - margin).skip(margin) {
        if v > strength {
            row = i;
            strength = v;
        }
    }

    let lo = row.saturating_sub(window);
    let hi = (row + window).min(n - 1);
    let floor = strength * keep_ratio;
    let support = profile[lo..=hi].iter().filter(|&&v| v >= floor).count();
    if support < min_support {
        return None;
    }

    Some(ProfilePeak { row, strength })
}
