//! Mapping from page coordinates to output pixels.

use crate::error::{Error, Result};
use crate::model::{BBox, Layout};

use super::RenderOptions;

/// Axis limits of the plot, in page units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    x_limits: (f64, f64),
    y_limits: (f64, f64),
    y_inverted: bool,
}

impl Viewport {
    /// Create a viewport with y growing upward.
    pub fn new(x_limits: (f64, f64), y_limits: (f64, f64)) -> Self {
        Self {
            x_limits,
            y_limits,
            y_inverted: false,
        }
    }

    /// Flip the vertical axis so that the lower y limit is at the top.
    pub fn invert_y(mut self) -> Self {
        self.y_inverted = !self.y_inverted;
        self
    }

    /// Horizontal limits `(min, max)`.
    pub fn x_limits(&self) -> (f64, f64) {
        self.x_limits
    }

    /// Vertical limits `(min, max)`, before inversion.
    pub fn y_limits(&self) -> (f64, f64) {
        self.y_limits
    }

    /// Whether the lower y limit is drawn at the top.
    pub fn is_y_inverted(&self) -> bool {
        self.y_inverted
    }

    /// Extent along x.
    pub fn width(&self) -> f64 {
        self.x_limits.1 - self.x_limits.0
    }

    /// Extent along y.
    pub fn height(&self) -> f64 {
        self.y_limits.1 - self.y_limits.0
    }
}

/// A box in pixel space with `left <= right` and `top <= bottom`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    /// Left edge
    pub left: f64,
    /// Top edge
    pub top: f64,
    /// Right edge
    pub right: f64,
    /// Bottom edge
    pub bottom: f64,
}

/// The drawing surface: a viewport plus its pixel size at a 1:1 aspect.
#[derive(Debug, Clone, Copy)]
pub struct Canvas {
    viewport: Viewport,
    scale: f64,
    width_px: u32,
    height_px: u32,
}

impl Canvas {
    /// Size the canvas from the first page box of a layout.
    ///
    /// The extent is `[0, right] x [0, bottom]` of the first page only;
    /// boxes of later pages are drawn into the same extent.
    pub fn for_layout(layout: &Layout, options: &RenderOptions) -> Result<Self> {
        let page = layout.first_page().ok_or(Error::NoPages)?;
        if page.right <= 0 || page.bottom <= 0 {
            return Err(Error::Render(format!(
                "first page box {:?} has no positive extent",
                page
            )));
        }

        let viewport = Viewport::new((0.0, page.right as f64), (0.0, page.bottom as f64))
            .invert_y();
        Self::new(viewport, options)
    }

    /// Fit a viewport into the plot area at equal x/y scale.
    pub fn new(viewport: Viewport, options: &RenderOptions) -> Result<Self> {
        let (width, height) = (viewport.width(), viewport.height());
        if !(width > 0.0 && height > 0.0) {
            return Err(Error::Render(format!(
                "empty viewport {:?} x {:?}",
                viewport.x_limits(),
                viewport.y_limits()
            )));
        }

        let (plot_w, plot_h) = options.plot_size_px();
        let scale = (plot_w / width).min(plot_h / height);
        let width_px = ((width * scale).round() as u32).max(1);
        let height_px = ((height * scale).round() as u32).max(1);

        log::debug!(
            "Canvas {}x{} px for extent {}x{} (scale {:.4})",
            width_px,
            height_px,
            width,
            height,
            scale
        );

        Ok(Self {
            viewport,
            scale,
            width_px,
            height_px,
        })
    }

    /// Axis limits the canvas was sized from.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Pixels per page unit.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Output width in pixels.
    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    /// Output height in pixels.
    pub fn height_px(&self) -> u32 {
        self.height_px
    }

    /// Map a point in page units to pixel coordinates (origin top-left).
    pub fn to_pixel(&self, x: f64, y: f64) -> (f64, f64) {
        let (x0, _) = self.viewport.x_limits();
        let (y0, _) = self.viewport.y_limits();
        let nx = (x - x0) / self.viewport.width();
        let ny = (y - y0) / self.viewport.height();
        let ny = if self.viewport.is_y_inverted() {
            ny
        } else {
            1.0 - ny
        };
        (
            nx * f64::from(self.width_px),
            ny * f64::from(self.height_px),
        )
    }

    /// Pixel rectangle covered by a box, corners normalized.
    pub fn pixel_rect(&self, bbox: &BBox) -> PixelRect {
        let (ax, ay) = self.to_pixel(bbox.left as f64, bbox.top as f64);
        let (bx, by) = self.to_pixel(bbox.right as f64, bbox.bottom as f64);
        PixelRect {
            left: ax.min(bx),
            top: ay.min(by),
            right: ax.max(bx),
            bottom: ay.max(by),
        }
    }
}
