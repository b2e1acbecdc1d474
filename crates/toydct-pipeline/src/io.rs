//! Image file I/O at the pipeline boundary

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use image::{ImageError, ImageFormat, RgbImage};
use toydct_core::{Dimensions, RgbGrid, ToyDctError, ToyDctResult};

/// File format for written images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jpeg,
    Png,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Png => "png",
        }
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            OutputFormat::Jpeg => ImageFormat::Jpeg,
            OutputFormat::Png => ImageFormat::Png,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Jpeg => f.write_str("jpeg"),
            OutputFormat::Png => f.write_str("png"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ToyDctError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "jpeg" | "jpg" => Ok(OutputFormat::Jpeg),
            "png" => Ok(OutputFormat::Png),
            other => Err(ToyDctError::UnsupportedFormat(format!(
                "unknown output format '{}'",
                other
            ))),
        }
    }
}

/// Map decoder/encoder failures onto the toydct error taxonomy
pub fn map_image_error(err: ImageError) -> ToyDctError {
    match err {
        ImageError::IoError(e) => ToyDctError::IoError(e),
        other => ToyDctError::UnsupportedFormat(other.to_string()),
    }
}

/// Decode an image file into an RGB grid
pub fn load_rgb<P: AsRef<Path>>(path: P) -> ToyDctResult<RgbGrid> {
    let image = image::open(path.as_ref()).map_err(map_image_error)?;
    grid_from_rgb8(&image.to_rgb8())
}

/// Encode a grid to `path` in the given format
pub fn save_rgb<P: AsRef<Path>>(grid: &RgbGrid, path: P, format: OutputFormat) -> ToyDctResult<()> {
    let image = rgb8_from_grid(grid)?;
    image
        .save_with_format(path.as_ref(), format.image_format())
        .map_err(map_image_error)
}

fn grid_from_rgb8(image: &RgbImage) -> ToyDctResult<RgbGrid> {
    let dims = Dimensions::new(image.width(), image.height());
    RgbGrid::from_raw(dims, image.as_raw())
}

fn rgb8_from_grid(grid: &RgbGrid) -> ToyDctResult<RgbImage> {
    RgbImage::from_raw(grid.width(), grid.height(), grid.to_raw()).ok_or(
        ToyDctError::InvalidDimensions {
            width: grid.width(),
            height: grid.height(),
        },
    )
}
