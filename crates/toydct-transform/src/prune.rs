//! Per-block coefficient pruning
//!
//! Keeps the `keep` luma coefficients with the largest magnitude in each block
//! and zeroes the rest. Ties are broken by row-major scan order, earlier wins.

use toydct_core::consts::BLOCK_PIXELS;
use toydct_core::{Block, Parallelism, ToyDctError, ToyDctResult, YCbCr};

use crate::for_each_block;

/// Check that a keep count fits in a block
pub fn validate_keep(keep: usize) -> ToyDctResult<()> {
    if keep == 0 || keep > BLOCK_PIXELS {
        return Err(ToyDctError::InvalidParameter(format!(
            "prune keep count must be in 1..={}, got {}",
            BLOCK_PIXELS, keep
        )));
    }
    Ok(())
}

/// Zero all but the `keep` largest-magnitude luma values of `block`
pub fn prune_block(block: &mut Block<YCbCr>, keep: usize) {
    let mut ranked: Vec<(usize, usize, f32)> = block
        .pixels()
        .map(|p| (p.bx(), p.by(), p.color.y.abs()))
        .collect();
    // stable sort keeps scan order among equal magnitudes
    ranked.sort_by(|a, b| b.2.total_cmp(&a.2));

    for &(bx, by, _) in ranked.iter().skip(keep) {
        block.set_luma(bx, by, 0.0);
    }
}

/// Prune every block
pub fn prune_blocks(
    blocks: &mut [Block<YCbCr>],
    keep: usize,
    parallelism: Parallelism,
) -> ToyDctResult<()> {
    validate_keep(keep)?;
    for_each_block(blocks, parallelism, |block| prune_block(block, keep));
    Ok(())
}
