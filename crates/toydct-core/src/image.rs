//! Pixel grid holding a decoded RGB image

use crate::{Dimensions, Rgb, ToyDctError, ToyDctResult};

/// Row-major RGB pixel grid with checked (x, y) access
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbGrid {
    dimensions: Dimensions,
    pixels: Vec<Rgb>,
}

impl RgbGrid {
    /// Create a grid filled with black
    pub fn new(dimensions: Dimensions) -> ToyDctResult<Self> {
        Self::filled(dimensions, Rgb::default())
    }

    /// Create a grid with every pixel set to `fill`
    pub fn filled(dimensions: Dimensions, fill: Rgb) -> ToyDctResult<Self> {
        if dimensions.width == 0 || dimensions.height == 0 {
            return Err(ToyDctError::InvalidDimensions {
                width: dimensions.width,
                height: dimensions.height,
            });
        }

        Ok(Self {
            dimensions,
            pixels: vec![fill; dimensions.pixel_count()],
        })
    }

    /// Wrap an existing row-major pixel buffer
    pub fn from_pixels(dimensions: Dimensions, pixels: Vec<Rgb>) -> ToyDctResult<Self> {
        if dimensions.width == 0
            || dimensions.height == 0
            || pixels.len() != dimensions.pixel_count()
        {
            return Err(ToyDctError::InvalidDimensions {
                width: dimensions.width,
                height: dimensions.height,
            });
        }

        Ok(Self { dimensions, pixels })
    }

    /// Build a grid from packed 8-bit RGB bytes
    pub fn from_raw(dimensions: Dimensions, raw: &[u8]) -> ToyDctResult<Self> {
        if raw.len() != dimensions.pixel_count() * 3 {
            return Err(ToyDctError::InvalidDimensions {
                width: dimensions.width,
                height: dimensions.height,
            });
        }

        let pixels = raw
            .chunks_exact(3)
            .map(|px| Rgb::new(px[0], px[1], px[2]))
            .collect();
        Self::from_pixels(dimensions, pixels)
    }

    /// Packed 8-bit RGB bytes, row-major
    pub fn to_raw(&self) -> Vec<u8> {
        let mut raw = Vec::with_capacity(self.pixels.len() * 3);
        for px in &self.pixels {
            raw.extend_from_slice(&[px.r, px.g, px.b]);
        }
        raw
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Read the pixel at (x, y), failing with `OutOfRange` past the edges
    pub fn get(&self, x: u32, y: u32) -> ToyDctResult<Rgb> {
        let idx = self.index(x, y)?;
        Ok(self.pixels[idx])
    }

    /// Overwrite the pixel at (x, y), failing with `OutOfRange` past the edges
    pub fn put(&mut self, x: u32, y: u32, rgb: Rgb) -> ToyDctResult<()> {
        let idx = self.index(x, y)?;
        self.pixels[idx] = rgb;
        Ok(())
    }

    fn index(&self, x: u32, y: u32) -> ToyDctResult<usize> {
        if !self.dimensions.contains(x, y) {
            return Err(ToyDctError::OutOfRange {
                x,
                y,
                width: self.dimensions.width,
                height: self.dimensions.height,
            });
        }
        Ok(y as usize * self.dimensions.width as usize + x as usize)
    }
}
