//! Core types for toydct

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 8-bit RGB sample as decoded from the source image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Gray sample with all three channels set to `value`
    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }
}

/// Full-range luma/chroma sample.
///
/// After the forward transform `y` holds a frequency coefficient rather than a
/// brightness, which is why all channels are stored as floats.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct YCbCr {
    pub y: f32,
    pub cb: f32,
    pub cr: f32,
}

impl YCbCr {
    pub const fn new(y: f32, cb: f32, cr: f32) -> Self {
        Self { y, cb, cr }
    }

    /// Same chroma, new luma
    pub const fn with_luma(self, y: f32) -> Self {
        Self::new(y, self.cb, self.cr)
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Rgb {}
    impl Sealed for super::YCbCr {}
}

/// Color representation a [`crate::Block`] can hold.
///
/// Sealed: the pipeline only ever works with [`Rgb`] and [`YCbCr`].
pub trait Color: sealed::Sealed + Copy + Default + std::fmt::Debug + Send + Sync {
    /// Short name used in log output
    const NAME: &'static str;
}

impl Color for Rgb {
    const NAME: &'static str = "RGB";
}

impl Color for YCbCr {
    const NAME: &'static str = "YCbCr";
}

/// Image dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }
}

/// How per-block stages are scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Parallelism {
    /// One block after another on the calling thread
    #[default]
    Sequential,
    /// Blocks spread over the rayon thread pool
    Rayon,
}
