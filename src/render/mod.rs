//! Rendering module for drawing layouts as images.

mod canvas;
mod format;
mod json;
mod options;
mod pdf;
mod raster;
mod style;
mod svg;

use std::fs;
use std::path::Path;

use image::DynamicImage;

use crate::error::Result;
use crate::model::Layout;

pub use canvas::{Canvas, PixelRect, Viewport};
pub use format::OutputFormat;
pub use json::{to_json, JsonFormat};
pub use options::RenderOptions;
pub use pdf::to_pdf;
pub use raster::render_image;
pub use style::{Color, LayerStyle, LAYERS};
pub use svg::to_svg;

/// Render a layout and write it to `path`, overwriting any existing file.
///
/// The format follows the file extension: `svg` or `pdf` for vector output,
/// or any raster format the `image` crate can encode.
pub fn render_to_file<P: AsRef<Path>>(
    layout: &Layout,
    path: P,
    options: &RenderOptions,
) -> Result<()> {
    let path = path.as_ref();

    match OutputFormat::from_path(path)? {
        OutputFormat::Svg => {
            let svg = to_svg(layout, options)?;
            fs::write(path, svg)?;
        }
        OutputFormat::Pdf => {
            let pdf = to_pdf(layout, options)?;
            fs::write(path, pdf)?;
        }
        OutputFormat::Raster(format) => {
            let img = render_image(layout, options)?;
            // Opaque background; RGB keeps alpha-less encoders (JPEG) happy.
            let rgb = DynamicImage::ImageRgba8(img).to_rgb8();
            rgb.save_with_format(path, format)?;
        }
    }

    log::info!("Wrote {} boxes to {}", layout.total_boxes(), path.display());
    Ok(())
}
