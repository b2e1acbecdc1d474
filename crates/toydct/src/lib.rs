//! # toydct - block DCT pipeline
//!
//! This crate provides the high-level API for running the toydct transform
//! core: partition an RGB image into 8x8 blocks, convert to Y/Cb/Cr, shift and
//! transform luma, quantize, then reverse the transform to check what survives.
//!
//! ## Quick Start
//!
//! ```no_run
//! use toydct::{Pipeline, PipelineOptions, OutputFormat};
//!
//! let pipeline = Pipeline::new(PipelineOptions::default().format(OutputFormat::Png));
//! let output = pipeline.run_file("lisa.jpg", "out").unwrap();
//! println!("{} blocks", output.coefficients.len());
//! ```
//!
//! ### In memory
//!
//! ```
//! use toydct::{Dimensions, MemorySink, Pipeline, Rgb, RgbGrid};
//!
//! let grid = RgbGrid::filled(Dimensions::new(16, 16), Rgb::gray(128)).unwrap();
//! let mut sink = MemorySink::new();
//! let output = Pipeline::default().run(&grid, &mut sink).unwrap();
//! assert_eq!(output.reconstructed_rgb().unwrap(), grid);
//! assert_eq!(sink.phases.len(), 2);
//! ```
//!
//! ## Scope
//!
//! The pipeline stops at the quantized coefficient matrix: there is no
//! entropy coding, zigzag ordering, chroma subsampling or container format.

// Re-export core types
pub use toydct_core::consts;
pub use toydct_core::{
    Block, Color, Dimensions, Parallelism, Pixel, Rgb, RgbGrid, ToyDctError, ToyDctResult, YCbCr,
};

// Re-export stages
pub use toydct_color::{
    blocks_to_rgb, blocks_to_ycbcr, level_shift, rgb_to_ycbcr, ycbcr_to_rgb, ShiftDirection,
};
pub use toydct_transform::{
    dct_1d, idct_1d, partition, prune_blocks, quantize_blocks, transform_blocks, QuantTable,
    TransformKind, CHROMA_QUANT_TABLE, LUMA_QUANT_TABLE,
};

// Re-export pipeline
pub use toydct_pipeline::{
    load_rgb, save_rgb, FileSink, LumaStats, MemorySink, OutputFormat, PhaseMasks,
    Pipeline, PipelineOptions, PipelineOutput, Stage, StageStats, VisualizationSink,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
