//! Engine configuration

use crate::classifier::DetectionPolicy;
use crate::diagnostics::{CoreResult, Severity};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default configuration file name looked up by the CLI.
pub const CONFIG_FILE_NAME: &str = ".glint.toml";

/// Configuration for classification and validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct GlintConfig {
    /// Severity level threshold
    #[schemars(description = "Minimum severity level to report (Error, Warning)")]
    severity: SeverityLevel,

    /// Scan content even when the extension is known
    #[schemars(
        description = "Always classify by content first, using the extension only when content is inconclusive"
    )]
    always_detect: bool,

    /// Rules to enable/disable
    #[schemars(description = "Configuration for enabling/disabling validation rules by category")]
    rules: RuleConfig,
}

impl Default for GlintConfig {
    fn default() -> Self {
        Self {
            severity: SeverityLevel::Warning,
            always_detect: false,
            rules: RuleConfig::default(),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[schemars(description = "Severity level for filtering findings")]
pub enum SeverityLevel {
    /// Only show errors
    Error,
    /// Show errors and warnings
    Warning,
}

impl SeverityLevel {
    /// Whether a finding of `severity` passes this threshold.
    pub fn reports(self, severity: Severity) -> bool {
        match self {
            SeverityLevel::Error => severity == Severity::Error,
            SeverityLevel::Warning => true,
        }
    }
}

/// Helper function for serde default
fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[schemars(description = "Configuration for enabling/disabling validation rules by category")]
pub struct RuleConfig {
    /// Enable JSON parse checks (JSON-*)
    #[serde(default = "default_true")]
    #[schemars(description = "Enable strict JSON parse checks (JSON-*)")]
    pub json: bool,

    /// Enable YAML parse checks (YAML-*)
    #[serde(default = "default_true")]
    #[schemars(description = "Enable YAML parse checks (YAML-*)")]
    pub yaml: bool,

    /// Enable Python line checks (PY-*)
    #[serde(default = "default_true")]
    #[schemars(description = "Enable Python quote, bracket, colon and indentation checks (PY-*)")]
    pub python: bool,

    /// Enable CSS-family brace checks (CSS-*)
    #[serde(default = "default_true")]
    #[schemars(description = "Enable CSS, SCSS and Less brace and semicolon checks (CSS-*)")]
    pub css: bool,

    /// Explicitly disabled rules by ID (e.g., ["PY-004", "CSS-003"])
    #[serde(default)]
    #[schemars(description = "List of rule IDs to explicitly disable (e.g., [\"PY-004\"])")]
    pub disabled_rules: Vec<String>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            json: true,
            yaml: true,
            python: true,
            css: true,
            disabled_rules: Vec::new(),
        }
    }
}

impl RuleConfig {
    fn is_category_enabled(&self, rule_id: &str) -> bool {
        match rule_id {
            s if s.starts_with("JSON-") => self.json,
            s if s.starts_with("YAML-") => self.yaml,
            s if s.starts_with("PY-") => self.python,
            s if s.starts_with("CSS-") => self.css,
            // Unknown rules are enabled by default
            _ => true,
        }
    }
}

/// Builder for constructing a [`GlintConfig`].
///
/// # Examples
///
/// ```
/// use glint_core::config::{GlintConfig, SeverityLevel};
///
/// let config = GlintConfig::builder()
///     .severity(SeverityLevel::Error)
///     .disable_rule("PY-004")
///     .build();
/// assert_eq!(config.severity(), SeverityLevel::Error);
/// assert!(!config.is_rule_enabled("PY-004"));
/// ```
#[derive(Debug, Default)]
pub struct GlintConfigBuilder {
    severity: Option<SeverityLevel>,
    always_detect: Option<bool>,
    rules: Option<RuleConfig>,
    disabled_rules: Vec<String>,
}

impl GlintConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the severity level threshold.
    pub fn severity(&mut self, severity: SeverityLevel) -> &mut Self {
        self.severity = Some(severity);
        self
    }

    pub fn always_detect(&mut self, always_detect: bool) -> &mut Self {
        self.always_detect = Some(always_detect);
        self
    }

    pub fn rules(&mut self, rules: RuleConfig) -> &mut Self {
        self.rules = Some(rules);
        self
    }

    /// Add a rule ID to the disabled list.
    pub fn disable_rule(&mut self, rule_id: impl Into<String>) -> &mut Self {
        self.disabled_rules.push(rule_id.into());
        self
    }

    pub fn build(&mut self) -> GlintConfig {
        let defaults = GlintConfig::default();
        let mut rules = self.rules.take().unwrap_or(defaults.rules);
        for rule_id in self.disabled_rules.drain(..) {
            if !rules.disabled_rules.contains(&rule_id) {
                rules.disabled_rules.push(rule_id);
            }
        }
        GlintConfig {
            severity: self.severity.take().unwrap_or(defaults.severity),
            always_detect: self.always_detect.take().unwrap_or(defaults.always_detect),
            rules,
        }
    }
}

impl GlintConfig {
    /// Create a new [`GlintConfigBuilder`].
    pub fn builder() -> GlintConfigBuilder {
        GlintConfigBuilder::new()
    }

    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> CoreResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Get the severity level threshold.
    #[inline]
    pub fn severity(&self) -> SeverityLevel {
        self.severity
    }

    #[inline]
    pub fn always_detect(&self) -> bool {
        self.always_detect
    }

    #[inline]
    pub fn rules(&self) -> &RuleConfig {
        &self.rules
    }

    pub fn set_severity(&mut self, severity: SeverityLevel) {
        self.severity = severity;
    }

    pub fn set_always_detect(&mut self, always_detect: bool) {
        self.always_detect = always_detect;
    }

    pub fn rules_mut(&mut self) -> &mut RuleConfig {
        &mut self.rules
    }

    /// A rule runs unless it is listed in `disabled_rules` or its category
    /// is switched off.
    pub fn is_rule_enabled(&self, rule_id: &str) -> bool {
        if self.rules.disabled_rules.iter().any(|r| r == rule_id) {
            return false;
        }
        self.rules.is_category_enabled(rule_id)
    }

    pub fn detection_policy(&self) -> DetectionPolicy {
        if self.always_detect {
            DetectionPolicy::AlwaysDetect
        } else {
            DetectionPolicy::ExtensionFirst
        }
    }
}

/// Generate a JSON Schema for the GlintConfig type.
///
/// This can be used to provide editor autocompletion and validation
/// for `.glint.toml` configuration files.
pub fn generate_schema() -> schemars::Schema {
    schemars::schema_for!(GlintConfig)
}
