//! Block transforms for toydct
//!
//! This crate implements block partitioning, the separable 8x8 DCT applied to
//! luma, table quantization, coefficient pruning, and the scheduling helper
//! that spreads per-block stages over rayon.

pub mod dct;
pub mod partition;
pub mod prune;
pub mod quantization;
pub mod schedule;

pub use dct::*;
pub use partition::*;
pub use prune::*;
pub use quantization::*;
pub use schedule::*;
