//! Layout model types.
//!
//! The model is what the hOCR parser produces and the renderer consumes:
//! flat lists of integer boxes, one per structural class.

mod bbox;
mod layout;

pub use bbox::BBox;
pub use layout::{ElementClass, Layout};
