//! # glint-core
//!
//! Language classification and lightweight diagnostics for source text.
//!
//! Classifies:
//! - by file extension, with content scanning as the fallback
//! - by weighted content signatures alone ([`detect_from_content`])
//!
//! Validates:
//! - JSON (strict parse)
//! - YAML (multi-document parse)
//! - Python (quotes, brackets, block colons, indentation)
//! - CSS, SCSS and Less (brace balance, missing semicolons)
//!
//! No entry point returns an error: classification falls back to
//! [`LanguageId::UNKNOWN`] and validation to an empty list.

pub mod classifier;
pub mod config;
pub mod diagnostics;
pub mod language;
pub mod parsers;
pub mod pipeline;
pub mod position;
pub mod registry;
pub mod rules;

pub use classifier::{
    CONFIDENCE_FLOOR, DetectionPolicy, LanguageScore, detect_from_content, resolve,
    resolve_with_policy, score_content, winner,
};
pub use config::{GlintConfig, RuleConfig, SeverityLevel, generate_schema};
pub use diagnostics::{CoreError, CoreResult, Finding, Severity};
pub use language::LanguageId;
pub use pipeline::{
    Analysis, SourceInput, analyze, analyze_batch, analyze_with_registry, validate, validate_str,
    validate_with_config,
};
pub use registry::{ValidatorFactory, ValidatorProvider, ValidatorRegistry, ValidatorRegistryBuilder};
pub use rules::Validator;
