//! Strict JSON check backed by serde_json
//!
//! ## Security
//!
//! JSON parsing is handled by serde_json which is memory-safe and handles
//! malformed input gracefully (returns errors instead of panicking). Nesting
//! depth is bounded by serde_json's recursion limit.

use serde::de::IgnoredAny;

use super::{ParseFailure, StructuredParser, strip_position_suffix};
use crate::position::{line_start_offset, offset_to_position};

pub struct JsonParser;

impl StructuredParser for JsonParser {
    fn name(&self) -> &'static str {
        "JSON"
    }

    fn check(&self, text: &str) -> Result<(), ParseFailure> {
        serde_json::from_str::<IgnoredAny>(text)
            .map(|_| ())
            .map_err(|e| failure_from_error(text, &e))
    }
}

/// serde_json reports a 1-based line and a byte column that includes the
/// offending byte; line 0 means no position is available.
fn failure_from_error(text: &str, error: &serde_json::Error) -> ParseFailure {
    let full = error.to_string();
    let message = strip_position_suffix(&full);

    if error.line() == 0 {
        return ParseFailure::at_origin(message);
    }

    let (line, column) = match line_start_offset(text, error.line()) {
        Some(start) => offset_to_position(text, start + error.column().saturating_sub(1)),
        None => (error.line(), error.column().max(1)),
    };
    ParseFailure::new(line, column, message)
}
