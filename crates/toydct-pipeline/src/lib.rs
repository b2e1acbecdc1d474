//! toydct pipeline orchestration
//!
//! Runs the fixed encode path (partition, color convert, level shift, forward
//! transform, quantize) followed by the verification path (inverse transform,
//! level shift back), dumping visualization images before and after.

pub mod io;
pub mod stats;
pub mod visualize;

use std::fs;
use std::path::Path;

use log::{debug, info};
use toydct_color::{blocks_to_ycbcr, level_shift, ShiftDirection};
use toydct_core::{Block, Color, Dimensions, Parallelism, Rgb, RgbGrid, ToyDctResult, YCbCr};
use toydct_transform::{
    partition, prune_blocks, quantize_blocks, transform_blocks, validate_keep, TransformKind,
    LUMA_QUANT_TABLE,
};

pub use io::*;
pub use stats::*;
pub use visualize::*;

/// Phase tag of the dump taken right after color conversion
pub const PHASE_CONVERTED: &str = "1";

/// Phase tag of the dump taken after reconstruction
pub const PHASE_RECONSTRUCTED: &str = "2";

/// Pipeline options
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Zero coefficients whose quantized level is zero
    pub quantize: bool,
    /// Keep only this many coefficients per block
    pub prune: Option<usize>,
    /// Per-block scheduling of transform, quantizer and pruner
    pub parallelism: Parallelism,
    /// Format used by [`Pipeline::run_file`]
    pub format: OutputFormat,
    /// Also render the Cr-tinted mask
    pub dump_cr: bool,
    /// Also render the every-other-block image
    pub dump_checkerboard: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            quantize: true,
            prune: None,
            parallelism: Parallelism::Sequential,
            format: OutputFormat::Jpeg,
            dump_cr: false,
            dump_checkerboard: false,
        }
    }
}

impl PipelineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quantize(mut self, quantize: bool) -> Self {
        self.quantize = quantize;
        self
    }

    pub fn prune(mut self, keep: Option<usize>) -> Self {
        self.prune = keep;
        self
    }

    pub fn parallelism(mut self, parallelism: Parallelism) -> Self {
        self.parallelism = parallelism;
        self
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn dump_cr(mut self, dump_cr: bool) -> Self {
        self.dump_cr = dump_cr;
        self
    }

    pub fn dump_checkerboard(mut self, dump_checkerboard: bool) -> Self {
        self.dump_checkerboard = dump_checkerboard;
        self
    }

    pub fn validate(&self) -> ToyDctResult<()> {
        if let Some(keep) = self.prune {
            validate_keep(keep)?;
        }
        Ok(())
    }

    fn mask_selection(&self) -> MaskSelection {
        MaskSelection {
            cr: self.dump_cr,
            checkerboard: self.dump_checkerboard,
        }
    }
}

/// Result of one pipeline run
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub dimensions: Dimensions,
    /// Luma coefficients after quantization and pruning
    pub coefficients: Vec<Block<YCbCr>>,
    /// Blocks after the verification path
    pub reconstructed: Vec<Block<YCbCr>>,
    /// Luma statistics after every stage, in order
    pub stats: Vec<StageStats>,
}

impl PipelineOutput {
    /// Reconstructed image, clamped and truncated to 8 bits
    pub fn reconstructed_rgb(&self) -> ToyDctResult<RgbGrid> {
        let rgb = toydct_color::blocks_to_rgb(&self.reconstructed);
        toydct_transform::paint_blocks(&rgb, self.dimensions, |c| c)
    }

    pub fn stats_for(&self, stage: Stage) -> Option<&LumaStats> {
        self.stats
            .iter()
            .find(|s| s.stage == stage)
            .map(|s| &s.luma)
    }
}

/// Block transform pipeline
pub struct Pipeline {
    options: PipelineOptions,
}

impl Pipeline {
    pub fn new(options: PipelineOptions) -> Self {
        Self { options }
    }

    /// Load `input`, run the pipeline, and write the dumps into `out_dir`
    pub fn run_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        out_dir: Q,
    ) -> ToyDctResult<PipelineOutput> {
        self.options.validate()?;

        let grid = load_rgb(input.as_ref())?;
        info!(
            "Loaded {} ({}x{})",
            input.as_ref().display(),
            grid.width(),
            grid.height()
        );

        fs::create_dir_all(out_dir.as_ref())?;
        let mut sink = FileSink::new(out_dir, self.options.format);
        self.run(&grid, &mut sink)
    }

    /// Run every stage on `grid`, emitting both visualization phases to `sink`
    pub fn run<S: VisualizationSink + ?Sized>(
        &self,
        grid: &RgbGrid,
        sink: &mut S,
    ) -> ToyDctResult<PipelineOutput> {
        self.options.validate()?;

        let dims = grid.dimensions();
        info!("Running pipeline on {}x{} image", dims.width, dims.height);

        // Step 1: partition into 8x8 RGB blocks
        let rgb_blocks = partition(grid)?;
        debug!("Partitioned into {} {} blocks", rgb_blocks.len(), Rgb::NAME);

        // Step 2: convert to Y/Cb/Cr
        let mut blocks = blocks_to_ycbcr(&rgb_blocks);
        debug!("Converted {} to {}", Rgb::NAME, YCbCr::NAME);
        let mut stats = Vec::new();
        record(&mut stats, Stage::Converted, &blocks);

        // Step 3: first dump
        self.dump(PHASE_CONVERTED, &blocks, dims, sink)?;

        // Steps 4-6: shift, transform, quantize
        stats.extend(self.encode(&mut blocks)?);
        let coefficients = blocks.clone();

        // Steps 7-8: inverse transform, shift back
        stats.extend(self.decode(&mut blocks));

        // Step 9: second dump
        self.dump(PHASE_RECONSTRUCTED, &blocks, dims, sink)?;

        Ok(PipelineOutput {
            dimensions: dims,
            coefficients,
            reconstructed: blocks,
            stats,
        })
    }

    /// Level shift, forward transform, then quantize and/or prune
    pub fn encode(&self, blocks: &mut [Block<YCbCr>]) -> ToyDctResult<Vec<StageStats>> {
        self.options.validate()?;
        let parallelism = self.options.parallelism;
        let mut stats = Vec::new();

        level_shift(blocks, ShiftDirection::Encode);
        record(&mut stats, Stage::Shifted, blocks);

        transform_blocks(blocks, TransformKind::Forward, parallelism);
        record(&mut stats, Stage::Transformed, blocks);

        if self.options.quantize {
            quantize_blocks(blocks, &LUMA_QUANT_TABLE, parallelism);
            record(&mut stats, Stage::Quantized, blocks);
        }

        if let Some(keep) = self.options.prune {
            prune_blocks(blocks, keep, parallelism)?;
            record(&mut stats, Stage::Pruned, blocks);
        }

        Ok(stats)
    }

    /// Inverse transform, then level shift back
    pub fn decode(&self, blocks: &mut [Block<YCbCr>]) -> Vec<StageStats> {
        let mut stats = Vec::new();

        transform_blocks(blocks, TransformKind::Inverse, self.options.parallelism);
        record(&mut stats, Stage::Inverted, blocks);

        level_shift(blocks, ShiftDirection::Decode);
        record(&mut stats, Stage::Restored, blocks);

        stats
    }

    fn dump<S: VisualizationSink + ?Sized>(
        &self,
        phase: &str,
        blocks: &[Block<YCbCr>],
        dims: Dimensions,
        sink: &mut S,
    ) -> ToyDctResult<()> {
        let masks = render_masks(blocks, dims, self.options.mask_selection())?;
        debug!("Emitting visualization phase {}", phase);
        sink.emit(phase, &masks)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(PipelineOptions::default())
    }
}

fn record(stats: &mut Vec<StageStats>, stage: Stage, blocks: &[Block<YCbCr>]) {
    if let Some(luma) = LumaStats::of(blocks) {
        debug!(
            "{}: luma in [{:.2}, {:.2}], {:.1}% zero",
            stage,
            luma.min,
            luma.max,
            luma.zero_ratio() * 100.0
        );
        stats.push(StageStats { stage, luma });
    }
}
