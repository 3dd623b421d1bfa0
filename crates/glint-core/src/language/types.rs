//! LanguageId enum shared by classification and validator dispatch.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::diagnostics::CoreError;

/// Canonical language identifier.
///
/// The same vocabulary selects a rendering syntax and a validator, so both
/// the extension table and the validator registry key on this enum. The
/// enum derives [`Hash`], [`Eq`], and [`Copy`] so it can key a
/// [`HashMap`](std::collections::HashMap) without allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LanguageId {
    JavaScript,
    TypeScript,
    Python,
    Java,
    CSharp,
    C,
    Cpp,
    Go,
    Rust,
    Ruby,
    Php,
    Swift,
    Kotlin,
    Html,
    Css,
    Scss,
    Less,
    Json,
    Yaml,
    Xml,
    Markdown,
    Shell,
    Sql,
    Lua,
    Toml,
    /// Unknown sentinel: no extension mapping and no confident content match
    PlainText,
}

impl LanguageId {
    /// Every id, sentinel last.
    pub const ALL: &'static [LanguageId] = &[
        LanguageId::JavaScript,
        LanguageId::TypeScript,
        LanguageId::Python,
        LanguageId::Java,
        LanguageId::CSharp,
        LanguageId::C,
        LanguageId::Cpp,
        LanguageId::Go,
        LanguageId::Rust,
        LanguageId::Ruby,
        LanguageId::Php,
        LanguageId::Swift,
        LanguageId::Kotlin,
        LanguageId::Html,
        LanguageId::Css,
        LanguageId::Scss,
        LanguageId::Less,
        LanguageId::Json,
        LanguageId::Yaml,
        LanguageId::Xml,
        LanguageId::Markdown,
        LanguageId::Shell,
        LanguageId::Sql,
        LanguageId::Lua,
        LanguageId::Toml,
        LanguageId::PlainText,
    ];

    /// The unknown sentinel.
    pub const UNKNOWN: LanguageId = LanguageId::PlainText;

    /// Canonical id string.
    pub fn as_str(self) -> &'static str {
        match self {
            LanguageId::JavaScript => "javascript",
            LanguageId::TypeScript => "typescript",
            LanguageId::Python => "python",
            LanguageId::Java => "java",
            LanguageId::CSharp => "csharp",
            LanguageId::C => "c",
            LanguageId::Cpp => "cpp",
            LanguageId::Go => "go",
            LanguageId::Rust => "rust",
            LanguageId::Ruby => "ruby",
            LanguageId::Php => "php",
            LanguageId::Swift => "swift",
            LanguageId::Kotlin => "kotlin",
            LanguageId::Html => "html",
            LanguageId::Css => "css",
            LanguageId::Scss => "scss",
            LanguageId::Less => "less",
            LanguageId::Json => "json",
            LanguageId::Yaml => "yaml",
            LanguageId::Xml => "xml",
            LanguageId::Markdown => "markdown",
            LanguageId::Shell => "shell",
            LanguageId::Sql => "sql",
            LanguageId::Lua => "lua",
            LanguageId::Toml => "toml",
            LanguageId::PlainText => "plaintext",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            LanguageId::JavaScript => "JavaScript",
            LanguageId::TypeScript => "TypeScript",
            LanguageId::Python => "Python",
            LanguageId::Java => "Java",
            LanguageId::CSharp => "C#",
            LanguageId::C => "C",
            LanguageId::Cpp => "C++",
            LanguageId::Go => "Go",
            LanguageId::Rust => "Rust",
            LanguageId::Ruby => "Ruby",
            LanguageId::Php => "PHP",
            LanguageId::Swift => "Swift",
            LanguageId::Kotlin => "Kotlin",
            LanguageId::Html => "HTML",
            LanguageId::Css => "CSS",
            LanguageId::Scss => "SCSS",
            LanguageId::Less => "Less",
            LanguageId::Json => "JSON",
            LanguageId::Yaml => "YAML",
            LanguageId::Xml => "XML",
            LanguageId::Markdown => "Markdown",
            LanguageId::Shell => "Shell",
            LanguageId::Sql => "SQL",
            LanguageId::Lua => "Lua",
            LanguageId::Toml => "TOML",
            LanguageId::PlainText => "Plain Text",
        }
    }

    /// Returns `true` for the unknown sentinel.
    #[must_use]
    pub fn is_unknown(self) -> bool {
        matches!(self, LanguageId::PlainText)
    }

    /// Exact, case-sensitive lookup of a canonical id string.
    pub fn from_canonical(id: &str) -> Option<Self> {
        LanguageId::ALL.iter().copied().find(|lang| lang.as_str() == id)
    }
}

impl Serialize for LanguageId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LanguageId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageId {
    type Err = CoreError;

    /// Parse a canonical id. Matching is exact apart from ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        LanguageId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CoreError::UnknownLanguage { id: s.to_string() })
    }
}
