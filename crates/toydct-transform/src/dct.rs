//! Separable 8-point cosine transform on block luma
//!
//! The forward transform is an unnormalized DCT-II:
//!
//! `out[i] = Σ_{j=0..8} in[j] · cos(π/8 · (j + 0.5) · i)`
//!
//! The inverse scales by `2/N`, halves the DC term, and sums only the
//! coefficients `1..=6`:
//!
//! `out[i] = 2/8 · (0.5 · in[0] + Σ_{j=1..7} in[j] · cos(π/8 · (i + 0.5) · j))`
//!
//! Coefficient 7 never reaches the inverse, so forward-then-inverse is exact
//! only for inputs without energy at that frequency (constant rows, for one).
//!
//! A 2D transform is two passes of the 1D function: first down every column,
//! then across every row. Both directions use that order.

use std::f64::consts::PI;

use toydct_core::consts::BLOCK_SIZE;
use toydct_core::{Block, Parallelism, YCbCr};

use crate::for_each_block;

const N: usize = BLOCK_SIZE;

/// Last coefficient index (exclusive) summed by the inverse transform
const IDCT_AC_END: usize = N - 1;

lazy_static::lazy_static! {
    /// `COS_TABLE[i][j] = cos(π/N · (j + 0.5) · i)`
    static ref COS_TABLE: [[f64; N]; N] = {
        let mut table = [[0.0f64; N]; N];
        for (i, row) in table.iter_mut().enumerate() {
            for (j, entry) in row.iter_mut().enumerate() {
                *entry = ((PI / N as f64) * (j as f64 + 0.5) * i as f64).cos();
            }
        }
        table
    };
}

/// Forward 1D transform of 8 samples
pub fn dct_1d(input: &[f32; N]) -> [f32; N] {
    let cos = &*COS_TABLE;
    std::array::from_fn(|i| {
        let sum: f64 = input
            .iter()
            .enumerate()
            .map(|(j, &v)| v as f64 * cos[i][j])
            .sum();
        sum as f32
    })
}

/// Inverse 1D transform of 8 coefficients
pub fn idct_1d(input: &[f32; N]) -> [f32; N] {
    let cos = &*COS_TABLE;
    std::array::from_fn(|i| {
        let mut sum = 0.0f64;
        for (j, &coeff) in input.iter().enumerate().take(IDCT_AC_END).skip(1) {
            sum += coeff as f64 * cos[j][i];
        }
        let dc = 0.5 * input[0] as f64;
        ((2.0 / N as f64) * (dc + sum)) as f32
    })
}

/// Transform direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    Forward,
    Inverse,
}

impl TransformKind {
    /// Apply the matching 1D transform to one line
    pub fn apply(self, line: &[f32; N]) -> [f32; N] {
        match self {
            TransformKind::Forward => dct_1d(line),
            TransformKind::Inverse => idct_1d(line),
        }
    }
}

/// Transform the luma of one block in place; chroma is untouched
pub fn transform_block(block: &mut Block<YCbCr>, kind: TransformKind) {
    // 1. every column, top to bottom
    for bx in 0..N {
        let column = kind.apply(&block.column_luma(bx));
        block.set_column_luma(bx, &column);
    }

    // 2. then every row, left to right
    for by in 0..N {
        let row = kind.apply(&block.row_luma(by));
        block.set_row_luma(by, &row);
    }
}

/// Transform the luma of every block
pub fn transform_blocks(blocks: &mut [Block<YCbCr>], kind: TransformKind, parallelism: Parallelism) {
    for_each_block(blocks, parallelism, |block| transform_block(block, kind));
}
