//! Luma level shift
//!
//! Only the luma channel is recentered. Chroma keeps its 128 midpoint through
//! the whole pipeline.

use toydct_core::consts::LEVEL_SHIFT;
use toydct_core::{Block, YCbCr};

/// Which way to move luma
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftDirection {
    /// `Y - 128`, before the forward transform
    Encode,
    /// `Y + 128`, after the inverse transform
    Decode,
}

impl ShiftDirection {
    pub fn apply(self, y: f32) -> f32 {
        match self {
            ShiftDirection::Encode => y - LEVEL_SHIFT,
            ShiftDirection::Decode => y + LEVEL_SHIFT,
        }
    }
}

/// Shift the luma of every pixel in every block
pub fn level_shift(blocks: &mut [Block<YCbCr>], direction: ShiftDirection) {
    for block in blocks.iter_mut() {
        for pixel in block.pixels_mut() {
            pixel.color = pixel.color.with_luma(direction.apply(pixel.color.y));
        }
    }
}
