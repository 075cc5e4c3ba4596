//! Helper functions for templates
//!
//! These are the primitives templates call for URL generation and
//! HTML tag building.

mod html;
mod url;

pub use html::*;
pub use url::*;
