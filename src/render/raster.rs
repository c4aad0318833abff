//! Raster rendering with imageproc.

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

use crate::error::Result;
use crate::model::Layout;

use super::canvas::{Canvas, PixelRect};
use super::style::LAYERS;
use super::RenderOptions;

// Keeps rounded coordinates well inside i32 for absurd boxes.
const COORD_LIMIT: f64 = 1.0e7;

/// Draw every box of a layout as an unfilled outline on a blank canvas.
pub fn render_image(layout: &Layout, options: &RenderOptions) -> Result<RgbaImage> {
    let canvas = Canvas::for_layout(layout, options)?;
    let mut img = RgbaImage::from_pixel(
        canvas.width_px(),
        canvas.height_px(),
        options.background.to_rgba(),
    );

    for layer in LAYERS.iter() {
        let boxes = layout.boxes(layer.class);
        let thickness = stroke_px(layer.line_width_px(options.dpi));
        let color = layer.color.to_rgba();

        for bbox in boxes {
            draw_outline(&mut img, canvas.pixel_rect(bbox), thickness, color);
        }
        log::debug!(
            "Drew {} {} boxes ({} degenerate, {} px stroke)",
            boxes.len(),
            layer.class,
            boxes.iter().filter(|bbox| bbox.is_degenerate()).count(),
            thickness
        );
    }

    Ok(img)
}

/// Whole-pixel stroke width, never thinner than one pixel.
fn stroke_px(width: f64) -> u32 {
    (width.round() as u32).max(1)
}

fn to_px(value: f64) -> i64 {
    value.clamp(-COORD_LIMIT, COORD_LIMIT).round() as i64
}

/// Stroke a rectangle outline centered on its edges.
fn draw_outline(img: &mut RgbaImage, rect: PixelRect, thickness: u32, color: Rgba<u8>) {
    let (x0, y0) = (to_px(rect.left), to_px(rect.top));
    let width = (to_px(rect.right) - x0).max(1);
    let height = (to_px(rect.bottom) - y0).max(1);

    let t = i64::from(thickness);
    for grow in -(t / 2)..=((t - 1) / 2) {
        let (w, h) = (width + 2 * grow, height + 2 * grow);
        if w <= 0 || h <= 0 {
            continue;
        }
        let ring = Rect::at((x0 - grow) as i32, (y0 - grow) as i32).of_size(w as u32, h as u32);
        draw_hollow_rect_mut(img, ring, color);
    }
}
