//! # hocrplot
//!
//! Draw the layout boxes of an hOCR document as an image.
//!
//! hOCR files (as written by Tesseract with the `hocr` config) describe a
//! page as nested `ocr_page`, `ocr_carea`, `ocr_par`, `ocr_line` and
//! `ocrx_word` elements, each with a `bbox` in its `title`. This library
//! extracts those boxes and renders them as colored outlines on a blank
//! canvas the size of the first page.
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> hocrplot::Result<()> {
//!     hocrplot::annotate_file("page.hocr", "page-boxes.png")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Output formats
//!
//! The output format follows the file extension: `svg` or `pdf` for vector
//! output, or any raster format the `image` crate encodes (PNG, JPEG, BMP, ...).

pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{BBox, ElementClass, Layout};
pub use parser::{ErrorMode, HocrParser, ParseOptions};
pub use render::{JsonFormat, OutputFormat, RenderOptions};

use std::path::Path;

/// Parse an hOCR file and return its boxes.
///
/// # Example
///
/// ```no_run
/// use hocrplot::parse_file;
///
/// let layout = parse_file("page.hocr").unwrap();
/// println!("Words: {}", layout.words.len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Layout> {
    HocrParser::open(path)?.parse()
}

/// Parse an hOCR file with custom options.
///
/// # Example
///
/// ```no_run
/// use hocrplot::{parse_file_with_options, ParseOptions};
///
/// let options = ParseOptions::new().lenient();
/// let layout = parse_file_with_options("page.hocr", options).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Layout> {
    HocrParser::open_with_options(path, options)?.parse()
}

/// Parse hOCR markup held in memory.
pub fn parse_str(text: &str) -> Result<Layout> {
    HocrParser::from_html(text).parse()
}

/// Parse hOCR markup held in memory with custom options.
pub fn parse_str_with_options(text: &str, options: ParseOptions) -> Result<Layout> {
    HocrParser::from_html_with_options(text, options).parse()
}

/// Parse an hOCR file and render its boxes to `output`.
///
/// # Example
///
/// ```no_run
/// hocrplot::annotate_file("page.hocr", "page.svg").unwrap();
/// ```
pub fn annotate_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    Hocrplot::new().annotate(input, output).map(|_| ())
}

/// Parse and render with custom options.
pub fn annotate_file_with_options<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    parse_options: ParseOptions,
    render_options: RenderOptions,
) -> Result<()> {
    Hocrplot::new()
        .with_parse_options(parse_options)
        .with_render_options(render_options)
        .annotate(input, output)
        .map(|_| ())
}

/// Builder for parsing and rendering hOCR documents.
///
/// # Example
///
/// ```no_run
/// use hocrplot::Hocrplot;
///
/// let layout = Hocrplot::new()
///     .lenient()
///     .with_dpi(200)
///     .annotate("page.hocr", "page.png")?;
/// println!("{} boxes drawn", layout.total_boxes());
/// # Ok::<(), hocrplot::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Hocrplot {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Hocrplot {
    /// Create a builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip elements without a bbox instead of failing.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Set the output resolution.
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.render_options = self.render_options.with_dpi(dpi);
        self
    }

    /// Replace the parse options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    /// Replace the render options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Parse an hOCR file.
    pub fn parse<P: AsRef<Path>>(&self, input: P) -> Result<Layout> {
        parse_file_with_options(input, self.parse_options.clone())
    }

    /// Parse `input`, render it to `output` and return the parsed layout.
    pub fn annotate<P: AsRef<Path>, Q: AsRef<Path>>(&self, input: P, output: Q) -> Result<Layout> {
        let layout = self.parse(input)?;
        render::render_to_file(&layout, output, &self.render_options)?;
        Ok(layout)
    }
}
