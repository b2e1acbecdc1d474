//! Visualization dumps of the Y/Cb/Cr block list
//!
//! A phase renders up to five images of the source size: the luma mask, the
//! Cb-tinted and Cr-tinted masks, the reconstructed RGB image, and a
//! checkerboard of every other block.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use toydct_color::{blocks_to_rgb, truncate_channel};
use toydct_core::{Block, Dimensions, Rgb, RgbGrid, ToyDctResult, YCbCr};
use toydct_transform::paint_blocks;

use crate::io::{save_rgb, OutputFormat};

/// Which optional images to render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaskSelection {
    pub cr: bool,
    pub checkerboard: bool,
}

/// All images rendered for one phase
#[derive(Debug, Clone)]
pub struct PhaseMasks {
    /// `(Y, Y, Y)`
    pub y: RgbGrid,
    /// `(255, 255, Cb)`
    pub cb: RgbGrid,
    /// `(Cr, 255, 255)`
    pub cr: Option<RgbGrid>,
    /// Blocks converted back to RGB
    pub rgb: RgbGrid,
    /// Every other block of `rgb` on black
    pub checkerboard: Option<RgbGrid>,
}

impl PhaseMasks {
    /// Images paired with their phase-tagged names, in write order
    pub fn named(&self, phase: &str) -> Vec<(String, &RgbGrid)> {
        let mut out = vec![
            (format!("mask_y_{}", phase), &self.y),
            (format!("mask_cb_{}", phase), &self.cb),
        ];
        if let Some(cr) = &self.cr {
            out.push((format!("mask_cr_{}", phase), cr));
        }
        out.push((format!("mask_rgb_{}", phase), &self.rgb));
        if let Some(checkerboard) = &self.checkerboard {
            out.push((format!("every_other_block_{}", phase), checkerboard));
        }
        out
    }
}

/// Render every image of a phase in memory
pub fn render_masks(
    blocks: &[Block<YCbCr>],
    dims: Dimensions,
    selection: MaskSelection,
) -> ToyDctResult<PhaseMasks> {
    let y = paint_blocks(blocks, dims, |c| Rgb::gray(truncate_channel(c.y)))?;
    let cb = paint_blocks(blocks, dims, |c| Rgb::new(255, 255, truncate_channel(c.cb)))?;
    let cr = if selection.cr {
        Some(paint_blocks(blocks, dims, |c| {
            Rgb::new(truncate_channel(c.cr), 255, 255)
        })?)
    } else {
        None
    };

    let rgb_blocks = blocks_to_rgb(blocks);
    let rgb = paint_blocks(&rgb_blocks, dims, |c| c)?;
    let checkerboard = if selection.checkerboard {
        Some(render_checkerboard(&rgb_blocks, dims)?)
    } else {
        None
    };

    Ok(PhaseMasks {
        y,
        cb,
        cr,
        rgb,
        checkerboard,
    })
}

/// Draw blocks whose `block_x + block_y` is even; the rest stay black
pub fn render_checkerboard(blocks: &[Block<Rgb>], dims: Dimensions) -> ToyDctResult<RgbGrid> {
    let mut grid = RgbGrid::new(dims)?;
    for block in blocks
        .iter()
        .filter(|b| (b.block_x + b.block_y) % 2 == 0)
    {
        for pixel in block.pixels() {
            grid.put(pixel.x(), pixel.y(), pixel.color)?;
        }
    }
    Ok(grid)
}

/// Receiver of per-phase visualization images
pub trait VisualizationSink {
    fn emit(&mut self, phase: &str, masks: &PhaseMasks) -> ToyDctResult<()>;
}

/// Sink that keeps every phase in memory
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub phases: Vec<(String, PhaseMasks)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self, phase: &str) -> Option<&PhaseMasks> {
        self.phases
            .iter()
            .find(|(name, _)| name == phase)
            .map(|(_, masks)| masks)
    }
}

impl VisualizationSink for MemorySink {
    fn emit(&mut self, phase: &str, masks: &PhaseMasks) -> ToyDctResult<()> {
        self.phases.push((phase.to_string(), masks.clone()));
        Ok(())
    }
}

/// Sink writing each image as `<dir>/<name>.<ext>`.
///
/// If any write of a phase fails, the files already written for that phase
/// are removed before the error is returned.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
    format: OutputFormat,
}

impl FileSink {
    pub fn new<P: AsRef<Path>>(dir: P, format: OutputFormat) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            format,
        }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", name, self.format.extension()))
    }
}

impl VisualizationSink for FileSink {
    fn emit(&mut self, phase: &str, masks: &PhaseMasks) -> ToyDctResult<()> {
        let mut written: Vec<PathBuf> = Vec::new();

        for (name, grid) in masks.named(phase) {
            let path = self.path_for(&name);
            if let Err(err) = save_rgb(grid, &path, self.format) {
                for stale in &written {
                    if let Err(rm_err) = fs::remove_file(stale) {
                        warn!("Could not remove {}: {}", stale.display(), rm_err);
                    }
                }
                return Err(err);
            }
            info!("Wrote {}", path.display());
            written.push(path);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_blocks() -> Vec<Block<YCbCr>> {
        (0..4)
            .map(|i| {
                Block::from_fn(i % 2, i / 2, |bx, _| {
                    YCbCr::new(10.0 * bx as f32 + 0.9, 90.0 + i as f32, 200.0)
                })
            })
            .collect()
    }

    #[test]
    fn test_mask_colors() {
        let masks = render_masks(
            &sample_blocks(),
            Dimensions::new(16, 16),
            MaskSelection {
                cr: true,
                checkerboard: false,
            },
        )
        .unwrap();

        assert_eq!(masks.y.get(3, 0).unwrap(), Rgb::gray(30));
        assert_eq!(masks.cb.get(9, 9).unwrap(), Rgb::new(255, 255, 93));
        assert_eq!(masks.cr.as_ref().unwrap().get(0, 0).unwrap(), Rgb::new(200, 255, 255));
        assert!(masks.checkerboard.is_none());
    }

    #[test]
    fn test_names() {
        let masks = render_masks(&sample_blocks(), Dimensions::new(16, 16), MaskSelection::default())
            .unwrap();
        let names: Vec<String> = masks.named("2").into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["mask_y_2", "mask_cb_2", "mask_rgb_2"]);
    }

    #[test]
    fn test_checkerboard() {
        let blocks: Vec<Block<Rgb>> = (0..4)
            .map(|i| Block::from_fn(i % 2, i / 2, |_, _| Rgb::gray(255)))
            .collect();
        let grid = render_checkerboard(&blocks, Dimensions::new(16, 16)).unwrap();
        assert_eq!(grid.get(0, 0).unwrap(), Rgb::gray(255));
        assert_eq!(grid.get(8, 0).unwrap(), Rgb::gray(0));
        assert_eq!(grid.get(0, 8).unwrap(), Rgb::gray(0));
        assert_eq!(grid.get(15, 15).unwrap(), Rgb::gray(255));
    }

    #[test]
    fn test_file_sink_writes_phase() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FileSink::new(dir.path(), OutputFormat::Png);
        let masks = render_masks(
            &sample_blocks(),
            Dimensions::new(16, 16),
            MaskSelection {
                cr: true,
                checkerboard: true,
            },
        )
        .unwrap();
        sink.emit("1", &masks).unwrap();

        for name in ["mask_y_1", "mask_cb_1", "mask_cr_1", "mask_rgb_1", "every_other_block_1"] {
            assert!(sink.path_for(name).exists(), "{} missing", name);
        }
    }

    #[test]
    fn test_file_sink_missing_dir_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FileSink::new(dir.path().join("nope"), OutputFormat::Png);
        let masks = render_masks(&sample_blocks(), Dimensions::new(16, 16), MaskSelection::default())
            .unwrap();
        assert!(sink.emit("1", &masks).is_err());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_file_sink_removes_partial_phase() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FileSink::new(dir.path(), OutputFormat::Png);
        // a directory where the second image should go makes that write fail
        fs::create_dir(sink.path_for("mask_cb_1")).unwrap();
        let masks = render_masks(&sample_blocks(), Dimensions::new(16, 16), MaskSelection::default())
            .unwrap();

        assert!(sink.emit("1", &masks).is_err());
        assert!(!sink.path_for("mask_y_1").exists());
        assert!(!sink.path_for("mask_rgb_1").exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
