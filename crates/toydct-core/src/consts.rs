//! Constants used throughout the toydct pipeline

/// Block edge length in pixels
pub const BLOCK_SIZE: usize = 8;

/// Number of pixels in a block
pub const BLOCK_PIXELS: usize = BLOCK_SIZE * BLOCK_SIZE;

/// Offset that recenters 8-bit luma around zero
pub const LEVEL_SHIFT: f32 = 128.0;

/// Chroma midpoint for the full-range Y/Cb/Cr conversion
pub const CHROMA_OFFSET: f64 = 128.0;

/// Coefficients kept per block by the pruner when no count is given
pub const DEFAULT_PRUNE_KEEP: usize = 10;

/// Maximum value of an 8-bit channel
pub const MAX_CHANNEL_VALUE: f32 = 255.0;
