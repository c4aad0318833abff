//! Error types for hocrplot library.

use std::io;
use thiserror::Error;

use crate::model::ElementClass;

/// Result type alias for hocrplot operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while parsing hOCR or rendering boxes.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input document is not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// A layout element has no `title` attribute.
    #[error("{class} element has no title attribute")]
    MissingTitle {
        /// Class of the offending element
        class: ElementClass,
    },

    /// A layout element's title has no `bbox` clause.
    #[error("{class} element has no bbox in its title")]
    MissingBbox {
        /// Class of the offending element
        class: ElementClass,
    },

    /// A `bbox` clause could not be turned into four integers.
    #[error("Invalid bbox: {0}")]
    InvalidBbox(String),

    /// A CSS selector for an element class failed to compile.
    #[error("Invalid selector: {0}")]
    Selector(String),

    /// The document contains no page element to size the canvas from.
    #[error("No ocr_page element found")]
    NoPages,

    /// The output path's extension is not a format we can write.
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// Error encoding the raster image.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Error building the PDF document.
    #[error("PDF error: {0}")]
    Pdf(String),

    /// Error during rendering (canvas geometry, SVG, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            _ => Error::Pdf(err.to_string()),
        }
    }
}
