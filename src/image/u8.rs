//! Borrowed 8-bit luminance view with row stride.
//!
//! This is the engine's per-frame input contract: camera planes frequently
//! carry row padding, so `stride >= w` and only the first `w` bytes of each
//! row are image data.

/// Read-only view over a single-channel 8-bit buffer.
#[derive(Clone, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    /// Bytes between consecutive rows (>= `w`).
    pub stride: usize,
    pub data: &'a [u8],
}

impl<'a> crate::image::traits::ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}
