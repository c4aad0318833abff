//! Bounding box record.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A box in page pixel coordinates (origin top-left, y grows downward).
///
/// Width and height are derived from the corners and are not validated:
/// a box whose right edge lies left of its left edge has a negative width
/// and is kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BBox {
    /// Left edge
    pub left: i64,
    /// Top edge
    pub top: i64,
    /// Right edge
    pub right: i64,
    /// Bottom edge
    pub bottom: i64,
    /// `right - left`
    pub width: i64,
    /// `bottom - top`
    pub height: i64,
}

impl BBox {
    /// Create a box from its four corners.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `right - left` or `bottom - top` overflows.
    /// Use [`BBox::try_new`] for untrusted input.
    pub fn new(left: i64, top: i64, right: i64, bottom: i64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
            width: right - left,
            height: bottom - top,
        }
    }

    /// Create a box, failing if a derived dimension does not fit in `i64`.
    pub fn try_new(left: i64, top: i64, right: i64, bottom: i64) -> Result<Self> {
        let (Some(width), Some(height)) = (right.checked_sub(left), bottom.checked_sub(top))
        else {
            return Err(Error::InvalidBbox(format!(
                "size of {} {} {} {} overflows",
                left, top, right, bottom
            )));
        };

        Ok(Self {
            left,
            top,
            right,
            bottom,
            width,
            height,
        })
    }

    /// Create a box from the raw `left top right bottom` tokens of a bbox clause.
    pub fn from_tokens(tokens: &[&str; 4]) -> Result<Self> {
        let mut values = [0i64; 4];
        for (value, token) in values.iter_mut().zip(tokens) {
            *value = token.parse().map_err(|_| {
                Error::InvalidBbox(format!("'{}' is not a 64-bit integer", token))
            })?;
        }
        let [left, top, right, bottom] = values;
        Self::try_new(left, top, right, bottom)
    }

    /// Check if the box has zero or negative area.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}
