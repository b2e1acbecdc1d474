//! Per-block scheduling

use rayon::prelude::*;
use toydct_core::{Block, Color, Parallelism};

/// Run `f` on every block, sequentially or across the rayon pool.
///
/// Blocks never read each other, so both modes give the same result.
pub fn for_each_block<C, F>(blocks: &mut [Block<C>], parallelism: Parallelism, f: F)
where
    C: Color,
    F: Fn(&mut Block<C>) + Send + Sync,
{
    match parallelism {
        Parallelism::Sequential => blocks.iter_mut().for_each(f),
        Parallelism::Rayon => blocks.par_iter_mut().for_each(f),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toydct_core::YCbCr;

    #[test]
    fn test_both_modes_visit_every_block() {
        for mode in [Parallelism::Sequential, Parallelism::Rayon] {
            let mut blocks: Vec<Block<YCbCr>> = (0..37)
                .map(|i| Block::from_fn(i, 0, |_, _| YCbCr::default()))
                .collect();

            for_each_block(&mut blocks, mode, |block| {
                let marker = block.block_x as f32;
                block.set_luma(0, 0, marker);
            });

            for block in &blocks {
                assert_eq!(block.luma(0, 0), block.block_x as f32);
            }
        }
    }
}
