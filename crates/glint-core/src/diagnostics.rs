//! Finding types and error reporting

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

/// One diagnostic produced by a validator.
///
/// Positions are 1-based and refer to the exact text version that was
/// scanned. A finding does not borrow the source buffer; callers re-resolve
/// the position against whatever buffer they are currently displaying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub line: usize,
    pub column: usize,
    pub message: String,
    pub severity: Severity,
    /// Stable rule id, e.g. `PY-003`
    pub rule: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Finding {
    fn new(
        severity: Severity,
        line: usize,
        column: usize,
        rule: &str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            line: line.max(1),
            column: column.max(1),
            message: message.into(),
            severity,
            rule: rule.to_string(),
            suggestion: None,
        }
    }

    pub fn error(line: usize, column: usize, rule: &str, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, line, column, rule, message)
    }

    pub fn warning(line: usize, column: usize, rule: &str, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, line, column, rule, message)
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Core library errors.
///
/// The classification and validation entry points never return these; they
/// surface only from configuration parsing and id lookups.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown language id: {id}")]
    UnknownLanguage { id: String },

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}
