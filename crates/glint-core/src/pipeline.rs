//! Engine entry points: validation by id and classify-then-validate.

use std::sync::OnceLock;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;

use crate::classifier::resolve_with_policy;
use crate::config::GlintConfig;
use crate::diagnostics::Finding;
use crate::language::LanguageId;
use crate::registry::ValidatorRegistry;

static DEFAULT_REGISTRY: OnceLock<ValidatorRegistry> = OnceLock::new();

fn default_registry() -> &'static ValidatorRegistry {
    DEFAULT_REGISTRY.get_or_init(ValidatorRegistry::with_defaults)
}

/// Validate `text` as `language` with the built-in validators and every rule
/// enabled.
///
/// Languages without a validator yield no findings.
///
/// # Examples
///
/// ```
/// use glint_core::{LanguageId, validate};
///
/// let findings = validate(LanguageId::Python, "if True\n    pass");
/// assert_eq!(findings.len(), 1);
/// assert_eq!(findings[0].line, 1);
///
/// assert!(validate(LanguageId::Rust, "fn main( {").is_empty());
/// ```
pub fn validate(language: LanguageId, text: &str) -> Vec<Finding> {
    validate_with_config(language, text, &GlintConfig::default(), default_registry())
}

/// Validate by canonical id string. The id must match exactly; anything
/// else yields no findings.
pub fn validate_str(language_id: &str, text: &str) -> Vec<Finding> {
    match LanguageId::from_canonical(language_id) {
        Some(language) => validate(language, text),
        None => {
            tracing::trace!(language_id, "no validator for unrecognised id");
            Vec::new()
        }
    }
}

/// Validate with explicit configuration and registry.
///
/// Rule toggles are applied inside each validator; the severity threshold is
/// applied to the validator's output here.
pub fn validate_with_config(
    language: LanguageId,
    text: &str,
    config: &GlintConfig,
    registry: &ValidatorRegistry,
) -> Vec<Finding> {
    let Some(validator) = registry.validator_for(language) else {
        tracing::trace!(language = %language, "no validator registered");
        return Vec::new();
    };

    let mut findings = validator.validate(text, config);
    findings.retain(|f| config.severity().reports(f.severity));
    tracing::debug!(
        language = %language,
        validator = validator.name(),
        findings = findings.len(),
        "validated"
    );
    findings
}

/// One text buffer to classify and validate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceInput {
    /// Caller-facing name such as a file path; carried through unchanged.
    pub label: Option<String>,
    pub extension: Option<String>,
    /// Skips classification when set.
    pub language: Option<LanguageId>,
    pub text: String,
}

impl SourceInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    pub fn with_language(mut self, language: LanguageId) -> Self {
        self.language = Some(language);
        self
    }
}

/// Outcome of [`analyze`] for one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub language: LanguageId,
    pub findings: Vec<Finding>,
}

impl Analysis {
    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(Finding::is_error)
    }
}

/// Classify one input (unless its language is given) and validate it.
pub fn analyze(input: &SourceInput, config: &GlintConfig) -> Analysis {
    analyze_with_registry(input, config, default_registry())
}

pub fn analyze_with_registry(
    input: &SourceInput,
    config: &GlintConfig,
    registry: &ValidatorRegistry,
) -> Analysis {
    let language = input.language.unwrap_or_else(|| {
        resolve_with_policy(
            input.extension.as_deref(),
            Some(&input.text),
            config.detection_policy(),
        )
    });

    Analysis {
        label: input.label.clone(),
        language,
        findings: validate_with_config(language, &input.text, config, registry),
    }
}

/// Analyse independent inputs. Output order matches input order.
#[cfg(feature = "parallel")]
pub fn analyze_batch(inputs: &[SourceInput], config: &GlintConfig) -> Vec<Analysis> {
    let registry = default_registry();
    inputs
        .par_iter()
        .map(|input| analyze_with_registry(input, config, registry))
        .collect()
}

/// Analyse independent inputs. Output order matches input order.
#[cfg(not(feature = "parallel"))]
pub fn analyze_batch(inputs: &[SourceInput], config: &GlintConfig) -> Vec<Analysis> {
    let registry = default_registry();
    inputs
        .iter()
        .map(|input| analyze_with_registry(input, config, registry))
        .collect()
}
