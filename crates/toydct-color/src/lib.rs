//! Color space transformations for toydct
//!
//! This crate implements:
//! - RGB <-> full-range Y/Cb/Cr, per pixel and per block list
//! - The luma level shift applied around the transform

pub mod level;
pub mod ycbcr;

pub use level::*;
pub use ycbcr::*;
