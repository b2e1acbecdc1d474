use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use toydct::consts::DEFAULT_PRUNE_KEEP;
use toydct::{OutputFormat, Parallelism, Pipeline, PipelineOptions, Stage};

/// Run one toydct pipeline over an image and write the phase dumps
#[derive(Parser, Debug)]
#[command(name = "toydct", version, about)]
struct Args {
    /// Source image, any format the image crate can decode
    input: PathBuf,

    /// Directory receiving mask_*_1 and mask_*_2
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Keep only the K largest luma coefficients per block, as `--prune=K`
    /// (10 if K is omitted)
    #[arg(long, value_name = "K", require_equals = true)]
    prune: Option<Option<usize>>,

    /// Skip the quantizer
    #[arg(long)]
    no_quantize: bool,

    /// Spread per-block stages over all cores
    #[arg(long)]
    parallel: bool,

    /// Output image format (jpeg or png)
    #[arg(long, default_value_t = OutputFormat::Jpeg)]
    format: OutputFormat,

    /// Also write the Cr-tinted mask
    #[arg(long)]
    dump_cr: bool,

    /// Also write the every-other-block image
    #[arg(long)]
    dump_checkerboard: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let parallelism = if args.parallel {
        Parallelism::Rayon
    } else {
        Parallelism::Sequential
    };
    let options = PipelineOptions::new()
        .quantize(!args.no_quantize)
        .prune(args.prune.map(|keep| keep.unwrap_or(DEFAULT_PRUNE_KEEP)))
        .parallelism(parallelism)
        .format(args.format)
        .dump_cr(args.dump_cr)
        .dump_checkerboard(args.dump_checkerboard);

    let output = Pipeline::new(options)
        .run_file(&args.input, &args.out_dir)
        .with_context(|| format!("pipeline failed for {}", args.input.display()))?;

    let last_encode_stage = [Stage::Pruned, Stage::Quantized, Stage::Transformed]
        .into_iter()
        .find_map(|stage| output.stats_for(stage));
    if let Some(stats) = last_encode_stage {
        info!(
            "{} blocks, {:.1}% of luma coefficients zero",
            output.coefficients.len(),
            stats.zero_ratio() * 100.0
        );
    }

    Ok(())
}
