//! Output format selection from the file extension.

use std::path::Path;

use image::ImageFormat;

use crate::error::{Error, Result};

/// How an output file is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Encoded by the `image` crate
    Raster(ImageFormat),
    /// Written as SVG text
    Svg,
    /// Written as a single-page PDF
    Pdf,
}

impl OutputFormat {
    /// Pick the format from a path's extension (case-insensitive).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .ok_or_else(|| {
                Error::UnsupportedFormat(format!("{} has no file extension", path.display()))
            })?;

        match ext.as_str() {
            "svg" => return Ok(OutputFormat::Svg),
            "pdf" => return Ok(OutputFormat::Pdf),
            _ => {}
        }

        match ImageFormat::from_extension(&ext) {
            Some(format) if format.writing_enabled() => Ok(OutputFormat::Raster(format)),
            _ => Err(Error::UnsupportedFormat(ext)),
        }
    }
}
