//! Rendering options and configuration.

use super::style::Color;

/// Options for rendering a layout to an image.
///
/// The defaults model a 6.4 x 4.8 inch figure whose plot area is
/// 4.96 x 3.696 inches, saved at 400 dpi with the plot area cropped tight.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Output resolution in dots per inch
    pub dpi: u32,

    /// Width of the plot area in inches
    pub plot_width_in: f64,

    /// Height of the plot area in inches
    pub plot_height_in: f64,

    /// Canvas background color
    pub background: Color,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output resolution.
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi.max(1);
        self
    }

    /// Set the plot area size in inches.
    pub fn with_plot_size(mut self, width_in: f64, height_in: f64) -> Self {
        self.plot_width_in = width_in;
        self.plot_height_in = height_in;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Plot area size in pixels.
    pub fn plot_size_px(&self) -> (f64, f64) {
        let dpi = f64::from(self.dpi);
        (self.plot_width_in * dpi, self.plot_height_in * dpi)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            dpi: 400,
            plot_width_in: 6.4 * (0.9 - 0.125),
            plot_height_in: 4.8 * (0.88 - 0.11),
            background: Color::WHITE,
        }
    }
}
