//! Validation rules

pub mod css;
pub mod python;
pub mod structured;

use crate::{config::GlintConfig, diagnostics::Finding};

pub use css::{CssDialect, CssValidator};
pub use python::PythonValidator;
pub use structured::{JsonValidator, StructuredDataValidator, YamlValidator};

/// Extract the short (unqualified) type name from `std::any::type_name`.
///
/// Given a fully-qualified path like `"glint_core::rules::python::PythonValidator"`,
/// returns `"PythonValidator"`. For generic types like `"Wrapper<foo::Bar>"`,
/// strips the generic suffix first, yielding `"Wrapper"`.
/// Falls back to the full name when no `::` separator is found.
fn short_type_name<T: ?Sized + 'static>() -> &'static str {
    let full = std::any::type_name::<T>();
    // Strip generic suffix (e.g., "Wrapper<foo::Bar>" -> "Wrapper")
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Trait for language validators.
///
/// Each validator is one forward pass over the text and is created by a
/// [`ValidatorFactory`](crate::ValidatorFactory) registered in the
/// [`ValidatorRegistry`](crate::ValidatorRegistry). Validators hold no state
/// between calls.
///
/// The [`name()`](Validator::name) method returns the identifier used by
/// [`ValidatorRegistry::disable_validator`](crate::ValidatorRegistry::disable_validator).
/// The default implementation derives the name from the concrete struct name
/// (e.g., `"PythonValidator"`).
pub trait Validator: 'static {
    /// Validate the given text and return any findings, in scan order.
    fn validate(&self, content: &str, config: &GlintConfig) -> Vec<Finding>;

    /// Return a short, human-readable name for this validator.
    fn name(&self) -> &'static str {
        short_type_name::<Self>()
    }
}
