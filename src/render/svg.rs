//! SVG rendering.
//!
//! Produces the same picture as the raster path, as vector outlines in
//! pixel coordinates so both outputs line up.

use std::fmt::{self, Write};

use crate::error::{Error, Result};
use crate::model::Layout;

use super::canvas::Canvas;
use super::style::LAYERS;
use super::RenderOptions;

/// Convert a layout to an SVG document.
pub fn to_svg(layout: &Layout, options: &RenderOptions) -> Result<String> {
    let canvas = Canvas::for_layout(layout, options)?;
    let mut out = String::new();
    write_svg(&mut out, layout, &canvas, options)
        .map_err(|e| Error::Render(format!("SVG formatting error: {}", e)))?;
    Ok(out)
}

fn write_svg(
    out: &mut String,
    layout: &Layout,
    canvas: &Canvas,
    options: &RenderOptions,
) -> fmt::Result {
    let (width, height) = (canvas.width_px(), canvas.height_px());

    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    )?;
    writeln!(
        out,
        r#"  <rect width="100%" height="100%" fill="{}"/>"#,
        options.background.hex()
    )?;

    for layer in LAYERS.iter() {
        let boxes = layout.boxes(layer.class);
        if boxes.is_empty() {
            continue;
        }

        writeln!(
            out,
            r#"  <g class="{}" fill="none" stroke="{}" stroke-width="{:.3}">"#,
            layer.class,
            layer.color.hex(),
            layer.line_width_px(options.dpi)
        )?;
        for bbox in boxes {
            let rect = canvas.pixel_rect(bbox);
            writeln!(
                out,
                r#"    <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}"/>"#,
                rect.left,
                rect.top,
                rect.right - rect.left,
                rect.bottom - rect.top
            )?;
        }
        writeln!(out, "  </g>")?;
    }

    writeln!(out, "</svg>")
}
