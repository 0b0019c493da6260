/// Generates a uniform (textureless) luminance buffer.
pub fn flat_u8(width: usize, height: usize, value: u8) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    vec![value; width * height]
}

/// Generates a two-band sky/ground buffer with a hard horizontal edge at
/// `edge_y` (rows above are dark, rows at and below are bright).
pub fn horizon_u8(width: usize, height: usize, edge_y: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(edge_y < height, "edge row must lie inside the image");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        let val = if y < edge_y { 45u8 } else { 205u8 };
        img[y * width..(y + 1) * width].fill(val);
    }
    img
}

/// Same as [`horizon_u8`] but with per-row padding to exercise strides.
/// Padding bytes are 255 so accidental sampling is visible.
pub fn horizon_u8_strided(
    width: usize,
    height: usize,
    stride: usize,
    edge_y: usize,
) -> Vec<u8> {
    assert!(stride >= width, "stride must cover the image width");
    let mut img = vec![255u8; stride * height];
    for y in 0..height {
        let val = if y < edge_y { 45u8 } else { 205u8 };
        img[y * stride..y * stride + width].fill(val);
    }
    img
}
