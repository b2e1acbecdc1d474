//! Block partitioning
//!
//! Images are cut into non-overlapping 8x8 blocks in row-major block order:
//! every block of block-row 0 left to right, then block-row 1, and so on.
//! There is no padding. Every read goes through the grid's checked accessor,
//! so a width or height that is not a multiple of 8 fails with `OutOfRange`.

use toydct_core::consts::BLOCK_SIZE;
use toydct_core::{Block, Color, Dimensions, Rgb, RgbGrid, ToyDctResult};

/// Number of blocks needed along each axis, counting partial edge blocks
pub fn blocks_per_axis(dims: Dimensions) -> (u32, u32) {
    let size = BLOCK_SIZE as u32;
    (dims.width.div_ceil(size), dims.height.div_ceil(size))
}

/// Slice a grid into 8x8 RGB blocks
pub fn partition(grid: &RgbGrid) -> ToyDctResult<Vec<Block<Rgb>>> {
    let (blocks_x, blocks_y) = blocks_per_axis(grid.dimensions());
    let mut blocks = Vec::with_capacity((blocks_x * blocks_y) as usize);

    for block_y in 0..blocks_y {
        for block_x in 0..blocks_x {
            let block = Block::try_from_fn(block_x, block_y, |_, _, x, y| grid.get(x, y))?;
            blocks.push(block);
        }
    }

    Ok(blocks)
}

/// Paint every pixel of every block onto a fresh grid of size `dims`.
///
/// `render` turns a block color into the RGB value written at the pixel's
/// absolute coordinates. Pixels not covered by any block stay black.
pub fn paint_blocks<C, F>(blocks: &[Block<C>], dims: Dimensions, mut render: F) -> ToyDctResult<RgbGrid>
where
    C: Color,
    F: FnMut(C) -> Rgb,
{
    let mut grid = RgbGrid::new(dims)?;
    for block in blocks {
        for pixel in block.pixels() {
            grid.put(pixel.x(), pixel.y(), render(pixel.color))?;
        }
    }
    Ok(grid)
}
