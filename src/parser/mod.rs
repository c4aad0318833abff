//! hOCR parsing module.

mod hocr;
mod options;
mod title;

pub use hocr::HocrParser;
pub use options::{ErrorMode, ParseOptions};
pub use title::bbox_tokens;
