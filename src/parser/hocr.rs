//! hOCR document parser using scraper.

use std::fs;
use std::path::Path;

use scraper::{ElementRef, Html, Selector};

use crate::error::{Error, Result};
use crate::model::{BBox, ElementClass, Layout};

use super::options::{ErrorMode, ParseOptions};
use super::title::bbox_tokens;

/// hOCR document parser.
pub struct HocrParser {
    html: Html,
    options: ParseOptions,
}

impl HocrParser {
    /// Open an hOCR file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open an hOCR file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path)?;
        let text = String::from_utf8(data)
            .map_err(|e| Error::Encoding(format!("{}: {}", path.display(), e)))?;
        log::debug!("Read {} bytes from {}", text.len(), path.display());
        Ok(Self::from_html_with_options(&text, options))
    }

    /// Parse hOCR markup held in memory.
    pub fn from_html(text: &str) -> Self {
        Self::from_html_with_options(text, ParseOptions::default())
    }

    /// Parse hOCR markup held in memory with custom options.
    pub fn from_html_with_options(text: &str, options: ParseOptions) -> Self {
        // html5ever recovers from any malformed markup; broken structure
        // shows up as empty selections rather than errors.
        let html = Html::parse_document(text);
        Self { html, options }
    }

    /// Extract the five box lists.
    pub fn parse(&self) -> Result<Layout> {
        let mut layout = Layout::new();

        for class in ElementClass::ALL {
            for bbox in self.select_boxes(class)? {
                layout.push(class, bbox);
            }
            log::debug!(
                "Found {} {} boxes",
                layout.boxes(class).len(),
                class.hocr_class()
            );
        }

        if self.options.require_page && layout.pages.is_empty() {
            return Err(Error::NoPages);
        }

        Ok(layout)
    }

    /// Boxes of every element matching `tag.class`, in document order.
    fn select_boxes(&self, class: ElementClass) -> Result<Vec<BBox>> {
        let selector = Selector::parse(&class.selector())
            .map_err(|e| Error::Selector(format!("{}: {}", class.selector(), e)))?;

        let mut boxes = Vec::new();
        for element in self.html.select(&selector) {
            if let Some(bbox) = self.element_bbox(element, class)? {
                boxes.push(bbox);
            }
        }
        Ok(boxes)
    }

    fn element_bbox(&self, element: ElementRef<'_>, class: ElementClass) -> Result<Option<BBox>> {
        let Some(title) = element.value().attr("title") else {
            return self.skip_or_fail(Error::MissingTitle { class });
        };

        match bbox_tokens(title)? {
            Some(tokens) => BBox::from_tokens(&tokens).map(Some),
            None => self.skip_or_fail(Error::MissingBbox { class }),
        }
    }

    fn skip_or_fail(&self, error: Error) -> Result<Option<BBox>> {
        match self.options.error_mode {
            ErrorMode::Strict => Err(error),
            ErrorMode::Lenient => {
                log::warn!("Skipping element: {}", error);
                Ok(None)
            }
        }
    }
}
