//! Validator registry and factory functions.

use std::collections::{HashMap, HashSet};

use crate::language::LanguageId;
use crate::rules::{CssDialect, CssValidator, JsonValidator, PythonValidator, Validator, YamlValidator};

/// Factory function type that creates validator instances.
pub type ValidatorFactory = fn() -> Box<dyn Validator>;

/// A provider of validator factories.
///
/// Implement this trait to supply validators from an external source (e.g. a
/// secondary rule set). The built-in validators are packaged as a
/// `BuiltinProvider` (internal to the crate).
///
/// # Example
///
/// ```
/// use glint_core::{LanguageId, ValidatorFactory, ValidatorProvider, ValidatorRegistry};
///
/// struct MyProvider;
///
/// impl ValidatorProvider for MyProvider {
///     fn validators(&self) -> Vec<(LanguageId, ValidatorFactory)> {
///         vec![]
///     }
/// }
///
/// let registry = ValidatorRegistry::builder()
///     .with_defaults()
///     .with_provider(&MyProvider)
///     .build();
/// assert!(registry.has_validator(LanguageId::Json));
/// ```
pub trait ValidatorProvider: Send + Sync {
    /// Human-readable name for this provider.
    ///
    /// Defaults to the unqualified struct name (e.g., `"BuiltinProvider"`).
    fn name(&self) -> &str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }

    /// Return the validator factories supplied by this provider.
    fn validators(&self) -> Vec<(LanguageId, ValidatorFactory)>;
}

/// The built-in validator provider shipping with glint-core.
pub(crate) struct BuiltinProvider;

impl ValidatorProvider for BuiltinProvider {
    fn validators(&self) -> Vec<(LanguageId, ValidatorFactory)> {
        DEFAULTS.to_vec()
    }
}

/// Registry that maps a [`LanguageId`] to at most one validator factory.
///
/// Dispatch is by exact id. A language with no entry has no lightweight
/// checker, which is a normal condition rather than an error. Registering a
/// second factory for the same id replaces the first.
pub struct ValidatorRegistry {
    validators: HashMap<LanguageId, ValidatorFactory>,
    validator_names: HashMap<LanguageId, String>,
    disabled_validators: HashSet<String>,
}

impl ValidatorRegistry {
    /// Create an empty registry with no registered validators.
    pub fn new() -> Self {
        Self {
            validators: HashMap::new(),
            validator_names: HashMap::new(),
            disabled_validators: HashSet::new(),
        }
    }

    /// Create a registry pre-populated with built-in validators.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_defaults();
        registry
    }

    /// Create a [`ValidatorRegistryBuilder`] for ergonomic construction.
    ///
    /// # Example
    ///
    /// ```
    /// use glint_core::{LanguageId, ValidatorRegistry};
    ///
    /// let registry = ValidatorRegistry::builder()
    ///     .with_defaults()
    ///     .without_validator("PythonValidator")
    ///     .build();
    /// assert!(registry.validator_for(LanguageId::Python).is_none());
    /// ```
    pub fn builder() -> ValidatorRegistryBuilder {
        ValidatorRegistryBuilder::new()
    }

    /// Register a validator factory for a language, replacing any previous one.
    pub fn register(&mut self, language: LanguageId, factory: ValidatorFactory) {
        // Cache the validator name once at registration time so disabled
        // validators can be filtered before factory instantiation.
        let validator_name = factory().name().to_string();
        if self.validators.insert(language, factory).is_some() {
            tracing::debug!(language = %language, validator = %validator_name, "replacing validator");
        }
        self.validator_names.insert(language, validator_name);
    }

    /// Return the number of registered factories.
    pub fn total_factory_count(&self) -> usize {
        self.validators.len()
    }

    /// Build a fresh validator for `language`, unless none is registered or
    /// its [`name()`](Validator::name) has been disabled.
    pub fn validator_for(&self, language: LanguageId) -> Option<Box<dyn Validator>> {
        let factory = self.validators.get(&language)?;
        if !self.disabled_validators.is_empty()
            && let Some(name) = self.validator_names.get(&language)
            && self.disabled_validators.contains(name.as_str())
        {
            return None;
        }
        Some(factory())
    }

    /// Whether an enabled validator exists for `language`.
    pub fn has_validator(&self, language: LanguageId) -> bool {
        self.validators.contains_key(&language)
            && self
                .validator_names
                .get(&language)
                .is_none_or(|name| !self.disabled_validators.contains(name.as_str()))
    }

    /// Languages with an enabled validator, in vocabulary order.
    pub fn languages(&self) -> Vec<LanguageId> {
        LanguageId::ALL
            .iter()
            .copied()
            .filter(|&id| self.has_validator(id))
            .collect()
    }

    /// Disable a validator by name at runtime.
    ///
    /// The name must match the value returned by [`Validator::name()`]
    /// (e.g., `"CssValidator"`, which covers every CSS dialect).
    pub fn disable_validator(&mut self, name: impl Into<String>) {
        self.disabled_validators.insert(name.into());
    }

    /// Return the number of validator names currently disabled.
    pub fn disabled_validator_count(&self) -> usize {
        self.disabled_validators.len()
    }

    fn register_defaults(&mut self) {
        for &(language, factory) in DEFAULTS {
            self.register(language, factory);
        }
    }
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Builder for constructing a [`ValidatorRegistry`] with fine-grained control.
///
/// Supports adding built-in validators, custom [`ValidatorProvider`]
/// implementations, individual factories, and disabling validators by name.
pub struct ValidatorRegistryBuilder {
    entries: Vec<(LanguageId, ValidatorFactory)>,
    disabled_validators: HashSet<String>,
}

impl ValidatorRegistryBuilder {
    /// Create a new empty builder.
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            disabled_validators: HashSet::new(),
        }
    }

    /// Add all built-in validators (equivalent to [`ValidatorRegistry::with_defaults`]).
    pub fn with_defaults(&mut self) -> &mut Self {
        self.with_provider(&BuiltinProvider)
    }

    /// Add all validators from a [`ValidatorProvider`]. Later entries for the
    /// same language replace earlier ones.
    pub fn with_provider(&mut self, provider: &dyn ValidatorProvider) -> &mut Self {
        self.entries.extend(provider.validators());
        self
    }

    /// Register a single validator factory for a language.
    pub fn register(&mut self, language: LanguageId, factory: ValidatorFactory) -> &mut Self {
        self.entries.push((language, factory));
        self
    }

    /// Mark a validator name as disabled (excluded from the built registry).
    pub fn without_validator(&mut self, name: &str) -> &mut Self {
        self.disabled_validators.insert(name.to_string());
        self
    }

    /// Produce a [`ValidatorRegistry`] from this builder.
    ///
    /// Drains the builder's disabled set via [`std::mem::take`], so calling
    /// `build()` a second time produces a registry with no disabled validators.
    pub fn build(&mut self) -> ValidatorRegistry {
        let mut registry = ValidatorRegistry {
            validators: HashMap::new(),
            validator_names: HashMap::new(),
            disabled_validators: std::mem::take(&mut self.disabled_validators),
        };
        for &(language, factory) in &self.entries {
            registry.register(language, factory);
        }
        registry
    }
}

// ============================================================================
// Built-in defaults
// ============================================================================

const DEFAULTS: &[(LanguageId, ValidatorFactory)] = &[
    (LanguageId::Json, json_validator),
    (LanguageId::Yaml, yaml_validator),
    (LanguageId::Python, python_validator),
    (LanguageId::Css, css_validator),
    (LanguageId::Scss, scss_validator),
    (LanguageId::Less, less_validator),
];

fn json_validator() -> Box<dyn Validator> {
    Box::new(JsonValidator::new())
}

fn yaml_validator() -> Box<dyn Validator> {
    Box::new(YamlValidator::new())
}

fn python_validator() -> Box<dyn Validator> {
    Box::new(PythonValidator)
}

fn css_validator() -> Box<dyn Validator> {
    Box::new(CssValidator::new(CssDialect::Css))
}

fn scss_validator() -> Box<dyn Validator> {
    Box::new(CssValidator::new(CssDialect::Scss))
}

fn less_validator() -> Box<dyn Validator> {
    Box::new(CssValidator::new(CssDialect::Less))
}
