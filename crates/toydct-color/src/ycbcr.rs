//! Full-range Y/Cb/Cr color conversion
//!
//! Uses the JFIF coefficients with chroma centered on 128. Conversion is done
//! in `f64` and stored as `f32`. Going back to 8-bit RGB clamps to `[0, 255]`
//! and truncates toward zero instead of rounding.

use num_traits::clamp;
use toydct_core::consts::{CHROMA_OFFSET, MAX_CHANNEL_VALUE};
use toydct_core::{Block, Rgb, YCbCr};

/// RGB -> Y/Cb/Cr forward matrix, one row per output channel
const RGB_TO_YCBCR: [[f64; 3]; 3] = [
    [0.299, 0.587, 0.114],
    [-0.168736, -0.331264, 0.5],
    [0.5, -0.418688, -0.081312],
];

const CR_TO_R: f64 = 1.402;
const CB_TO_G: f64 = 0.344136;
const CR_TO_G: f64 = 0.714136;
const CB_TO_B: f64 = 1.772;

/// Convert one RGB sample to Y/Cb/Cr
pub fn rgb_to_ycbcr(rgb: Rgb) -> YCbCr {
    let r = rgb.r as f64;
    let g = rgb.g as f64;
    let b = rgb.b as f64;

    let m = &RGB_TO_YCBCR;
    let y = m[0][0] * r + m[0][1] * g + m[0][2] * b;
    let cb = CHROMA_OFFSET + m[1][0] * r + m[1][1] * g + m[1][2] * b;
    let cr = CHROMA_OFFSET + m[2][0] * r + m[2][1] * g + m[2][2] * b;

    YCbCr::new(y as f32, cb as f32, cr as f32)
}

/// Convert Y/Cb/Cr back to unclamped RGB
pub fn ycbcr_to_rgb_f32(color: YCbCr) -> (f32, f32, f32) {
    let y = color.y as f64;
    let cb = color.cb as f64 - CHROMA_OFFSET;
    let cr = color.cr as f64 - CHROMA_OFFSET;

    let r = y + CR_TO_R * cr;
    let g = y - CB_TO_G * cb - CR_TO_G * cr;
    let b = y + CB_TO_B * cb;

    (r as f32, g as f32, b as f32)
}

/// Convert Y/Cb/Cr back to 8-bit RGB, truncating each channel
pub fn ycbcr_to_rgb(color: YCbCr) -> Rgb {
    let (r, g, b) = ycbcr_to_rgb_f32(color);
    Rgb::new(truncate_channel(r), truncate_channel(g), truncate_channel(b))
}

/// Clamp to `[0, 255]` and drop the fractional part
pub fn truncate_channel(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    clamp(value, 0.0, MAX_CHANNEL_VALUE).trunc() as u8
}

/// Convert a list of RGB blocks into a new Y/Cb/Cr list
pub fn blocks_to_ycbcr(blocks: &[Block<Rgb>]) -> Vec<Block<YCbCr>> {
    blocks.iter().map(|block| block.map(rgb_to_ycbcr)).collect()
}

/// Convert a list of Y/Cb/Cr blocks into a new RGB list
pub fn blocks_to_rgb(blocks: &[Block<YCbCr>]) -> Vec<Block<Rgb>> {
    blocks.iter().map(|block| block.map(ycbcr_to_rgb)).collect()
}
