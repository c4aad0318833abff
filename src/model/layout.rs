//! Element classes and the flat per-class box lists.

use super::BBox;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five hOCR structural levels we draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementClass {
    /// `div.ocr_page`
    Page,
    /// `div.ocr_carea`
    Area,
    /// `p.ocr_par`
    Paragraph,
    /// `span.ocr_line`
    Line,
    /// `span.ocrx_word`
    Word,
}

impl ElementClass {
    /// All classes, outermost first. This is also the draw order.
    pub const ALL: [ElementClass; 5] = [
        ElementClass::Page,
        ElementClass::Area,
        ElementClass::Paragraph,
        ElementClass::Line,
        ElementClass::Word,
    ];

    /// HTML tag the class is expected on.
    pub fn tag(self) -> &'static str {
        match self {
            ElementClass::Page | ElementClass::Area => "div",
            ElementClass::Paragraph => "p",
            ElementClass::Line | ElementClass::Word => "span",
        }
    }

    /// hOCR class name.
    pub fn hocr_class(self) -> &'static str {
        match self {
            ElementClass::Page => "ocr_page",
            ElementClass::Area => "ocr_carea",
            ElementClass::Paragraph => "ocr_par",
            ElementClass::Line => "ocr_line",
            ElementClass::Word => "ocrx_word",
        }
    }

    /// CSS selector matching the class, e.g. `span.ocrx_word`.
    pub fn selector(self) -> String {
        format!("{}.{}", self.tag(), self.hocr_class())
    }
}

impl fmt::Display for ElementClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hocr_class())
    }
}

/// Boxes extracted from one hOCR document, one flat list per class.
///
/// Lists keep document order. Nesting between classes is not recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Page boxes
    pub pages: Vec<BBox>,
    /// Content area boxes
    pub areas: Vec<BBox>,
    /// Paragraph boxes
    pub paragraphs: Vec<BBox>,
    /// Line boxes
    pub lines: Vec<BBox>,
    /// Word boxes
    pub words: Vec<BBox>,
}

impl Layout {
    /// Create an empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Boxes of the given class.
    pub fn boxes(&self, class: ElementClass) -> &[BBox] {
        match class {
            ElementClass::Page => &self.pages,
            ElementClass::Area => &self.areas,
            ElementClass::Paragraph => &self.paragraphs,
            ElementClass::Line => &self.lines,
            ElementClass::Word => &self.words,
        }
    }

    fn boxes_mut(&mut self, class: ElementClass) -> &mut Vec<BBox> {
        match class {
            ElementClass::Page => &mut self.pages,
            ElementClass::Area => &mut self.areas,
            ElementClass::Paragraph => &mut self.paragraphs,
            ElementClass::Line => &mut self.lines,
            ElementClass::Word => &mut self.words,
        }
    }

    /// Append a box to the list of its class.
    pub fn push(&mut self, class: ElementClass, bbox: BBox) {
        self.boxes_mut(class).push(bbox);
    }

    /// The first page box, which sizes the canvas.
    pub fn first_page(&self) -> Option<&BBox> {
        self.pages.first()
    }

    /// Total number of boxes over all classes.
    pub fn total_boxes(&self) -> usize {
        ElementClass::ALL
            .iter()
            .map(|&class| self.boxes(class).len())
            .sum()
    }

    /// Check if no box of any class was found.
    pub fn is_empty(&self) -> bool {
        self.total_boxes() == 0
    }
}
