//! Extension-to-language table.
//!
//! The lookup is pure (no I/O) and O(table size); the table is small enough
//! that a linear scan beats building a map.

use super::types::LanguageId;

/// File extensions (lower-case, no leading dot) and the language they map to.
///
/// Several extensions intentionally share an id (`sh`, `bash` and `zsh` are
/// all `shell`).
pub const EXTENSIONS: &[(&str, LanguageId)] = &[
    ("js", LanguageId::JavaScript),
    ("mjs", LanguageId::JavaScript),
    ("cjs", LanguageId::JavaScript),
    ("jsx", LanguageId::JavaScript),
    ("ts", LanguageId::TypeScript),
    ("mts", LanguageId::TypeScript),
    ("cts", LanguageId::TypeScript),
    ("tsx", LanguageId::TypeScript),
    ("py", LanguageId::Python),
    ("pyw", LanguageId::Python),
    ("pyi", LanguageId::Python),
    ("java", LanguageId::Java),
    ("cs", LanguageId::CSharp),
    ("c", LanguageId::C),
    ("h", LanguageId::C),
    ("cpp", LanguageId::Cpp),
    ("cc", LanguageId::Cpp),
    ("cxx", LanguageId::Cpp),
    ("hpp", LanguageId::Cpp),
    ("hh", LanguageId::Cpp),
    ("hxx", LanguageId::Cpp),
    ("go", LanguageId::Go),
    ("rs", LanguageId::Rust),
    ("rb", LanguageId::Ruby),
    ("php", LanguageId::Php),
    ("swift", LanguageId::Swift),
    ("kt", LanguageId::Kotlin),
    ("kts", LanguageId::Kotlin),
    ("html", LanguageId::Html),
    ("htm", LanguageId::Html),
    ("css", LanguageId::Css),
    ("scss", LanguageId::Scss),
    ("less", LanguageId::Less),
    ("json", LanguageId::Json),
    ("yaml", LanguageId::Yaml),
    ("yml", LanguageId::Yaml),
    ("xml", LanguageId::Xml),
    ("svg", LanguageId::Xml),
    ("xsd", LanguageId::Xml),
    ("md", LanguageId::Markdown),
    ("markdown", LanguageId::Markdown),
    ("sh", LanguageId::Shell),
    ("bash", LanguageId::Shell),
    ("zsh", LanguageId::Shell),
    ("sql", LanguageId::Sql),
    ("lua", LanguageId::Lua),
    ("toml", LanguageId::Toml),
];

/// Normalize an extension hint: trim, drop one leading dot, lower-case.
fn normalize_hint(hint: &str) -> String {
    let trimmed = hint.trim();
    trimmed
        .strip_prefix('.')
        .unwrap_or(trimmed)
        .to_ascii_lowercase()
}

/// Look up an extension hint in [`EXTENSIONS`].
///
/// Returns `None` for empty hints and unmapped extensions.
pub fn lookup_extension(hint: &str) -> Option<LanguageId> {
    let ext = normalize_hint(hint);
    if ext.is_empty() {
        return None;
    }
    EXTENSIONS
        .iter()
        .find(|(candidate, _)| *candidate == ext)
        .map(|&(_, id)| id)
}

/// Extensions mapped to `id`, in table order.
pub fn extensions_for(id: LanguageId) -> Vec<&'static str> {
    EXTENSIONS
        .iter()
        .filter(|(_, mapped)| *mapped == id)
        .map(|&(ext, _)| ext)
        .collect()
}
