//! YAML check backed by serde_yaml
//!
//! ## Security: YAML Bomb Protection
//!
//! Alias expansion and nesting are bounded by `serde_yaml`'s internal
//! limits (it refuses documents whose alias expansion or recursion depth
//! exceeds its caps), so a hostile document yields an error rather than
//! unbounded memory use.
//!
//! **Known Limitation**: within those caps a large document can still be
//! slow to parse; callers validating on every keystroke should debounce.

use serde::Deserialize;

use super::{ParseFailure, StructuredParser, strip_position_suffix};
use crate::position::offset_to_position;

pub struct YamlParser;

impl StructuredParser for YamlParser {
    fn name(&self) -> &'static str {
        "YAML"
    }

    /// Every document in a multi-document stream must parse.
    fn check(&self, text: &str) -> Result<(), ParseFailure> {
        for document in serde_yaml::Deserializer::from_str(text) {
            serde_yaml::Value::deserialize(document).map_err(|e| failure_from_error(text, &e))?;
        }
        Ok(())
    }
}

/// The error's byte index is absolute in the input stream, so converting it
/// with [`offset_to_position`] gives a 1-based position directly.
fn failure_from_error(text: &str, error: &serde_yaml::Error) -> ParseFailure {
    let full = error.to_string();
    let message = strip_position_suffix(&full);
    match error.location() {
        Some(location) => {
            let (line, column) = offset_to_position(text, location.index());
            ParseFailure::new(line, column, message)
        }
        None => ParseFailure::at_origin(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(text: &str) -> Result<(), ParseFailure> {
        YamlParser.check(text)
    }

    #[test]
    fn test_valid_mapping() {
        assert!(check("name: glint\ntags: [a, b]\nnested:\n  key: value\n").is_ok());
    }

    #[test]
    fn test_multi_document_stream() {
        assert!(check("a: 1\n---\nb: 2\n").is_ok());
    }

    #[test]
    fn test_empty_text_is_valid() {
        assert!(check("").is_ok());
        assert!(check("# only a comment\n").is_ok());
    }

    #[test]
    fn test_bad_indentation_reports_second_line() {
        let failure = check("key: value\n  bad: indent\n").unwrap_err();
        assert_eq!(failure.line, 2);
        assert!(failure.column >= 1);
        assert!(!failure.message.contains(" at line "));
    }

    #[test]
    fn test_tab_indentation_rejected() {
        assert!(check("a:\n\tb: 1\n").is_err());
    }

    #[test]
    fn test_unclosed_flow_sequence_rejected() {
        assert!(check("items: [1, 2\n").is_err());
    }

    #[test]
    fn test_error_in_later_document_points_into_it() {
        let failure = check("a: 1\n---\nb: c: d\n").unwrap_err();
        assert_eq!(failure.line, 3);
    }
}
