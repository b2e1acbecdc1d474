//! Pixels and 8x8 blocks
//!
//! A [`Block`] is a fixed 8x8 grid stored row-major: `pixels[by][bx]`, with
//! `bx` the horizontal and `by` the vertical offset inside the block. Every
//! iterator on this type walks pixels in that same row-major order.

use crate::consts::BLOCK_SIZE;
use crate::{Color, YCbCr};

/// One image sample together with where it sits in the image and in its block
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pixel<C: Color> {
    pub color: C,
    x: u32,
    y: u32,
    bx: usize,
    by: usize,
}

impl<C: Color> Pixel<C> {
    /// Absolute column in the source image
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Absolute row in the source image
    pub fn y(&self) -> u32 {
        self.y
    }

    /// Column inside the containing block, in `0..8`
    pub fn bx(&self) -> usize {
        self.bx
    }

    /// Row inside the containing block, in `0..8`
    pub fn by(&self) -> usize {
        self.by
    }
}

/// 8x8 grid of pixels sharing one color representation
#[derive(Debug, Clone, PartialEq)]
pub struct Block<C: Color> {
    pixels: [[Pixel<C>; BLOCK_SIZE]; BLOCK_SIZE],
    /// Block column among all blocks of the image
    pub block_x: u32,
    /// Block row among all blocks of the image
    pub block_y: u32,
}

impl<C: Color> Block<C> {
    /// Build a block whose pixel colors come from `color_at(bx, by)`
    pub fn from_fn<F>(block_x: u32, block_y: u32, mut color_at: F) -> Self
    where
        F: FnMut(usize, usize) -> C,
    {
        let result: Result<Self, std::convert::Infallible> =
            Self::try_from_fn(block_x, block_y, |bx, by, _, _| Ok(color_at(bx, by)));
        match result {
            Ok(block) => block,
            Err(never) => match never {},
        }
    }

    /// Build a block, reading each color through a fallible accessor.
    ///
    /// The accessor receives `(bx, by, x, y)`. Pixels are visited in row-major
    /// order and the first error is returned.
    pub fn try_from_fn<F, E>(block_x: u32, block_y: u32, mut color_at: F) -> Result<Self, E>
    where
        F: FnMut(usize, usize, u32, u32) -> Result<C, E>,
    {
        let origin_x = block_x * BLOCK_SIZE as u32;
        let origin_y = block_y * BLOCK_SIZE as u32;
        let mut pixels = [[Pixel::<C>::default(); BLOCK_SIZE]; BLOCK_SIZE];

        for (by, row) in pixels.iter_mut().enumerate() {
            for (bx, pixel) in row.iter_mut().enumerate() {
                let x = origin_x + bx as u32;
                let y = origin_y + by as u32;
                *pixel = Pixel {
                    color: color_at(bx, by, x, y)?,
                    x,
                    y,
                    bx,
                    by,
                };
            }
        }

        Ok(Self {
            pixels,
            block_x,
            block_y,
        })
    }

    /// Pixel at block-relative (bx, by)
    pub fn pixel(&self, bx: usize, by: usize) -> &Pixel<C> {
        &self.pixels[by][bx]
    }

    /// Replace the color at block-relative (bx, by)
    pub fn set_color(&mut self, bx: usize, by: usize, color: C) {
        self.pixels[by][bx].color = color;
    }

    /// All 64 pixels in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = &Pixel<C>> {
        self.pixels.iter().flatten()
    }

    /// All 64 pixels in row-major order, mutably
    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut Pixel<C>> {
        self.pixels.iter_mut().flatten()
    }

    /// Convert every pixel color, keeping all coordinates
    pub fn map<D: Color, F>(&self, mut convert: F) -> Block<D>
    where
        F: FnMut(C) -> D,
    {
        Block::from_fn(self.block_x, self.block_y, |bx, by| {
            convert(self.pixels[by][bx].color)
        })
    }
}

impl Block<YCbCr> {
    pub fn luma(&self, bx: usize, by: usize) -> f32 {
        self.pixels[by][bx].color.y
    }

    pub fn set_luma(&mut self, bx: usize, by: usize, y: f32) {
        let pixel = &mut self.pixels[by][bx];
        pixel.color = pixel.color.with_luma(y);
    }

    /// Luma down column `bx`, top to bottom
    pub fn column_luma(&self, bx: usize) -> [f32; BLOCK_SIZE] {
        std::array::from_fn(|by| self.luma(bx, by))
    }

    /// Luma across row `by`, left to right
    pub fn row_luma(&self, by: usize) -> [f32; BLOCK_SIZE] {
        std::array::from_fn(|bx| self.luma(bx, by))
    }

    pub fn set_column_luma(&mut self, bx: usize, values: &[f32; BLOCK_SIZE]) {
        for (by, &y) in values.iter().enumerate() {
            self.set_luma(bx, by, y);
        }
    }

    pub fn set_row_luma(&mut self, by: usize, values: &[f32; BLOCK_SIZE]) {
        for (bx, &y) in values.iter().enumerate() {
            self.set_luma(bx, by, y);
        }
    }
}
