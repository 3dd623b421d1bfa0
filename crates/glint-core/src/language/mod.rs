//! Static language reference data.
//!
//! This module provides:
//!
//! - [`LanguageId`] -- the canonical id vocabulary, including the unknown sentinel
//! - [`EXTENSIONS`] / [`lookup_extension`] -- the extension table
//! - [`SIGNATURES`] -- weighted content signatures for classification
//!
//! ## Adding a language
//!
//! Add a [`LanguageId`] variant, its extensions to [`EXTENSIONS`], and at
//! least one entry to [`SIGNATURES`]. Neither the classifier nor the
//! validator dispatch needs to change.

mod extensions;
mod signatures;
mod types;

pub use extensions::{EXTENSIONS, extensions_for, lookup_extension};
pub use signatures::{LanguageSignature, SIGNATURES};
pub use types::LanguageId;

pub(crate) use signatures::compiled_signatures;
