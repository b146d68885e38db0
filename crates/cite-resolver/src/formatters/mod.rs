//! Output formatters for citations and JSON.

mod citation;
mod json;

pub use self::json::*;
pub use citation::*;
