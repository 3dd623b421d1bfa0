//! Structured-data validators (JSON-001, YAML-001)
//!
//! Both formats are checked by delegating to a strict parser behind the
//! [`StructuredParser`] seam. Any failure, including a panic inside the
//! parser, becomes exactly one error finding.

use crate::{
    config::GlintConfig,
    diagnostics::Finding,
    parsers::{JsonParser, StructuredParser, YamlParser, check_guarded},
    position::clamp_position,
    rules::Validator,
};

/// Runs one [`StructuredParser`] and reports its failure under `rule`.
pub struct StructuredDataValidator<P> {
    parser: P,
    rule: &'static str,
    name: &'static str,
}

pub type JsonValidator = StructuredDataValidator<JsonParser>;
pub type YamlValidator = StructuredDataValidator<YamlParser>;

impl<P: StructuredParser> StructuredDataValidator<P> {
    pub fn with_parser(parser: P, rule: &'static str, name: &'static str) -> Self {
        Self { parser, rule, name }
    }
}

impl JsonValidator {
    pub fn new() -> Self {
        Self::with_parser(JsonParser, "JSON-001", "JsonValidator")
    }
}

impl Default for JsonValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl YamlValidator {
    pub fn new() -> Self {
        Self::with_parser(YamlParser, "YAML-001", "YamlValidator")
    }
}

impl Default for YamlValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: StructuredParser + 'static> Validator for StructuredDataValidator<P> {
    fn validate(&self, content: &str, config: &GlintConfig) -> Vec<Finding> {
        if !config.is_rule_enabled(self.rule) {
            return Vec::new();
        }

        match check_guarded(&self.parser, content) {
            Ok(()) => Vec::new(),
            Err(failure) => {
                tracing::trace!(
                    parser = self.parser.name(),
                    line = failure.line,
                    column = failure.column,
                    "structured parse failed"
                );
                let (line, column) = clamp_position(content, failure.line, failure.column);
                let message = format!("{} parse error: {}", self.parser.name(), failure.message);
                vec![Finding::error(line, column, self.rule, message)]
            }
        }
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
