//! Core types and utilities for the toydct block codec
//!
//! This crate provides the fundamental data structures used throughout the
//! workspace: color representations, pixels and 8x8 blocks, the RGB pixel grid,
//! constants, and the error type.

pub mod block;
pub mod consts;
pub mod error;
pub mod image;
pub mod types;

pub use block::*;
pub use error::{ToyDctError, ToyDctResult};
pub use image::*;
pub use types::*;
