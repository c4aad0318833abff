//! Per-class outline styles and draw order.

use crate::model::ElementClass;
use image::Rgba;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Color {
    /// Default canvas background.
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);

    /// Create a color from its components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Fully opaque RGBA pixel.
    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, 255])
    }

    /// `#RRGGBB` notation.
    pub fn hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// How the boxes of one class are stroked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerStyle {
    /// Element class drawn by this layer
    pub class: ElementClass,
    /// Outline color
    pub color: Color,
    /// Outline width in points (1/72 inch)
    pub line_width_pt: f64,
}

/// Layers in draw order; later layers are drawn over earlier ones.
pub const LAYERS: [LayerStyle; 5] = [
    LayerStyle {
        class: ElementClass::Page,
        color: Color::rgb(0xFF, 0x00, 0xFF),
        line_width_pt: 0.5,
    },
    LayerStyle {
        class: ElementClass::Area,
        color: Color::rgb(0x00, 0x00, 0xFF),
        line_width_pt: 0.5,
    },
    LayerStyle {
        class: ElementClass::Paragraph,
        color: Color::rgb(0xF0, 0xF0, 0xF0),
        line_width_pt: 0.1,
    },
    LayerStyle {
        class: ElementClass::Line,
        color: Color::rgb(0xFF, 0x00, 0x00),
        line_width_pt: 0.1,
    },
    LayerStyle {
        class: ElementClass::Word,
        color: Color::rgb(0x00, 0x00, 0x00),
        line_width_pt: 0.1,
    },
];

impl LayerStyle {
    /// Stroke width in output pixels at the given resolution.
    pub fn line_width_px(&self, dpi: u32) -> f64 {
        self.line_width_pt * f64::from(dpi) / 72.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_order_matches_class_order() {
        let classes: Vec<ElementClass> = LAYERS.iter().map(|layer| layer.class).collect();
        assert_eq!(classes, ElementClass::ALL.to_vec());
    }

    #[test]
    fn test_page_stroke_is_heaviest() {
        let page = LAYERS[0];
        assert!(LAYERS[1..]
            .iter()
            .all(|layer| layer.line_width_pt <= page.line_width_pt));
    }

    #[test]
    fn test_color_hex() {
        assert_eq!(LAYERS[0].color.hex(), "#FF00FF");
        assert_eq!(LAYERS[2].color.hex(), "#F0F0F0");
        assert_eq!(Color::WHITE.to_rgba(), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_line_width_px() {
        let width = LAYERS[0].line_width_px(72);
        assert!((width - 0.5).abs() < 1e-9);
        let width = LAYERS[4].line_width_px(400);
        assert!((width - 400.0 / 720.0).abs() < 1e-9);
    }
}
