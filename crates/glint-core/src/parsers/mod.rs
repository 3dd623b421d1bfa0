//! Seam between the structured-data validators and the format parsers they
//! delegate to.
//!
//! A [`StructuredParser`] turns text into either success or a normalised
//! [`ParseFailure`]. Swapping `serde_json` or `serde_yaml` for another crate
//! only means another implementation of the trait; the validators and the
//! registry do not change.

pub mod json;
pub mod yaml;

use std::panic::{self, AssertUnwindSafe};

pub use json::JsonParser;
pub use yaml::YamlParser;

/// A parse error normalised to a 1-based position and a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl ParseFailure {
    pub fn new(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            column,
            message: message.into(),
        }
    }

    /// Failure with no recoverable position, anchored at (1,1).
    pub fn at_origin(message: impl Into<String>) -> Self {
        Self::new(1, 1, message)
    }
}

/// A strict format parser used only for its accept/reject decision.
pub trait StructuredParser: Send + Sync {
    /// Short name used in messages and logs, e.g. `"JSON"`.
    fn name(&self) -> &'static str;

    /// Parse `text`, discarding the value.
    fn check(&self, text: &str) -> Result<(), ParseFailure>;
}

/// Run `parser` and collapse a panic inside it into a single failure.
///
/// A lightweight check must never take down the caller, so anything the
/// dependency throws is reported the same way as a parse error.
pub fn check_guarded<P: StructuredParser + ?Sized>(
    parser: &P,
    text: &str,
) -> Result<(), ParseFailure> {
    match panic::catch_unwind(AssertUnwindSafe(|| parser.check(text))) {
        Ok(result) => result,
        Err(_) => {
            tracing::error!(parser = parser.name(), "parser panicked; reporting at origin");
            Err(ParseFailure::at_origin(format!(
                "{} parser failed unexpectedly",
                parser.name()
            )))
        }
    }
}

/// Strip the `" at line N column M"` suffix parser errors append to their
/// messages; the position is reported separately.
pub(crate) fn strip_position_suffix(message: &str) -> &str {
    match message.find(" at line ") {
        Some(idx) => &message[..idx],
        None => message,
    }
}
