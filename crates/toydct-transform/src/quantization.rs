//! Quantization of luma coefficients
//!
//! The level `round(Y / step)` is only used as a zero test: coefficients whose
//! level rounds to zero are cleared, all others keep their unquantized value.
//! Nothing is divided back out, so there is no dequantization step.

use toydct_core::consts::BLOCK_SIZE;
use toydct_core::{Block, Parallelism, YCbCr};

use crate::for_each_block;

/// 8x8 quantization steps, indexed `[by][bx]` (vertical, horizontal frequency)
pub type QuantTable = [[u16; BLOCK_SIZE]; BLOCK_SIZE];

/// Luma table (JPEG Annex K, quality 50)
pub const LUMA_QUANT_TABLE: QuantTable = [
    [16, 11, 10, 16, 24, 40, 51, 61],
    [12, 12, 14, 19, 26, 58, 60, 55],
    [14, 13, 16, 24, 40, 57, 69, 56],
    [14, 17, 22, 29, 51, 87, 80, 62],
    [18, 22, 37, 56, 68, 109, 103, 77],
    [24, 35, 55, 64, 81, 104, 113, 92],
    [49, 64, 78, 87, 103, 121, 120, 101],
    [72, 92, 95, 98, 112, 100, 103, 99],
];

/// Chroma table. Chroma is never transformed, so the pipeline does not use it.
pub const CHROMA_QUANT_TABLE: QuantTable = [
    [17, 18, 24, 47, 99, 99, 99, 99],
    [18, 21, 26, 19, 66, 99, 99, 99],
    [24, 26, 56, 99, 99, 99, 99, 99],
    [47, 66, 99, 99, 99, 99, 99, 99],
    [99, 99, 99, 99, 99, 99, 99, 99],
    [99, 99, 99, 99, 99, 99, 99, 99],
    [99, 99, 99, 99, 99, 99, 99, 99],
    [99, 99, 99, 99, 99, 99, 99, 99],
];

/// Quantized level of a coefficient; halves round to even
pub fn quantized_level(value: f32, step: u16) -> i32 {
    (value / step as f32).round_ties_even() as i32
}

/// Zero every luma coefficient of `block` whose level rounds to zero
pub fn quantize_block(block: &mut Block<YCbCr>, table: &QuantTable) {
    for by in 0..BLOCK_SIZE {
        for bx in 0..BLOCK_SIZE {
            if quantized_level(block.luma(bx, by), table[by][bx]) == 0 {
                block.set_luma(bx, by, 0.0);
            }
        }
    }
}

/// Quantize the luma of every block
pub fn quantize_blocks(blocks: &mut [Block<YCbCr>], table: &QuantTable, parallelism: Parallelism) {
    for_each_block(blocks, parallelism, |block| quantize_block(block, table));
}
