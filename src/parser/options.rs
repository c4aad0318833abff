//! Parsing options and configuration.

/// Options for parsing hOCR documents.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// How to treat layout elements without a usable title
    pub error_mode: ErrorMode,

    /// Fail when the document has no `ocr_page` element
    pub require_page: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (skip elements without a bbox).
    pub fn lenient(self) -> Self {
        self.with_error_mode(ErrorMode::Lenient)
    }

    /// Require (or not) at least one page element.
    pub fn with_require_page(mut self, require: bool) -> Self {
        self.require_page = require;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Strict,
            require_page: true,
        }
    }
}

/// Error handling mode during parsing.
///
/// Malformed bbox tokens are an error in both modes; the mode only decides
/// what happens to elements whose title is missing or has no bbox clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on the first element without a bbox
    #[default]
    Strict,
    /// Skip elements without a bbox and continue
    Lenient,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options_builder() {
        let options = ParseOptions::new().lenient().with_require_page(false);

        assert_eq!(options.error_mode, ErrorMode::Lenient);
        assert!(!options.require_page);

        let options = options.with_error_mode(ErrorMode::Strict);
        assert_eq!(options.error_mode, ErrorMode::Strict);
    }

    #[test]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert_eq!(options.error_mode, ErrorMode::Strict);
        assert!(options.require_page);
    }
}
