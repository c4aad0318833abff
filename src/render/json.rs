//! JSON rendering of extracted boxes.

use crate::error::{Error, Result};
use crate::model::Layout;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a layout to JSON.
pub fn to_json(layout: &Layout, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(layout),
        JsonFormat::Compact => serde_json::to_string(layout),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
