//! JSON response bodies.

use serde_json::{Value, json};

use crate::models::Candidate;

/// Body of a citation search response: `{"candidates": [...]}`.
#[must_use]
pub fn candidates_json(candidates: &[Candidate]) -> Value {
    json!({ "candidates": candidates })
}

/// Body of a failed request, `{"success": false, "error": "..."}`.
#[must_use]
pub fn error_json(message: &str) -> Value {
    json!({ "success": false, "error": message })
}
