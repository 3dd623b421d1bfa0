//! Content and extension based language classification.
//!
//! [`resolve`] trusts a known extension and only scans content when the
//! extension is missing or unmapped. [`detect_from_content`] scores every
//! [`SIGNATURES`](crate::language::SIGNATURES) entry against the text; each
//! pattern contributes its weight at most once, and signatures sharing an id
//! add up.

use serde::Serialize;

use crate::language::{LanguageId, compiled_signatures, lookup_extension};

/// Minimum winning score for a content guess to be trusted.
pub const CONFIDENCE_FLOOR: u32 = 2;

/// Accumulated score for one canonical id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageScore {
    pub language: LanguageId,
    pub score: u32,
}

/// How [`resolve_with_policy`] weighs the extension against the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetectionPolicy {
    /// A mapped extension wins; content is the fallback.
    #[default]
    ExtensionFirst,
    /// Content wins; the extension is the fallback when content is
    /// inconclusive.
    AlwaysDetect,
}

/// Per-id totals in first-declaration order. Ids scoring zero are omitted.
pub fn score_content(text: &str) -> Vec<LanguageScore> {
    let mut scores: Vec<LanguageScore> = Vec::new();

    for signature in compiled_signatures() {
        let score: u32 = signature
            .patterns
            .iter()
            .filter(|(re, _)| re.is_match(text))
            .map(|&(_, weight)| weight)
            .sum();

        match scores.iter_mut().find(|s| s.language == signature.id) {
            Some(entry) => entry.score += score,
            None => scores.push(LanguageScore {
                language: signature.id,
                score,
            }),
        }
    }

    scores.retain(|s| s.score > 0);
    scores
}

/// Strict maximum; on a tie the earlier entry wins.
pub fn winner(scores: &[LanguageScore]) -> Option<LanguageScore> {
    let mut best: Option<LanguageScore> = None;
    for &candidate in scores {
        if best.is_none_or(|b| candidate.score > b.score) {
            best = Some(candidate);
        }
    }
    best
}

/// Classify `text` by content alone.
///
/// Empty or whitespace-only text, and text whose best score is below
/// [`CONFIDENCE_FLOOR`], yield [`LanguageId::UNKNOWN`].
pub fn detect_from_content(text: &str) -> LanguageId {
    if text.trim().is_empty() {
        return LanguageId::UNKNOWN;
    }

    let scores = score_content(text);
    match winner(&scores) {
        Some(best) if best.score >= CONFIDENCE_FLOOR => {
            tracing::debug!(language = %best.language, score = best.score, "content classified");
            best.language
        }
        Some(best) => {
            tracing::debug!(
                language = %best.language,
                score = best.score,
                floor = CONFIDENCE_FLOOR,
                "best content score below confidence floor"
            );
            LanguageId::UNKNOWN
        }
        None => {
            tracing::trace!("no signature matched");
            LanguageId::UNKNOWN
        }
    }
}

/// Map an extension hint (case-insensitive, optional leading dot) to an id,
/// falling back to content detection when the hint is absent or unmapped.
///
/// # Examples
///
/// ```
/// use glint_core::{LanguageId, resolve};
///
/// assert_eq!(resolve(Some("py"), None), LanguageId::Python);
/// assert_eq!(resolve(Some(""), Some("def foo():\n    return 1")), LanguageId::Python);
/// assert_eq!(resolve(None, None), LanguageId::UNKNOWN);
/// ```
pub fn resolve(extension_hint: Option<&str>, text: Option<&str>) -> LanguageId {
    resolve_with_policy(extension_hint, text, DetectionPolicy::ExtensionFirst)
}

pub fn resolve_with_policy(
    extension_hint: Option<&str>,
    text: Option<&str>,
    policy: DetectionPolicy,
) -> LanguageId {
    let from_extension = extension_hint.and_then(lookup_extension);

    match policy {
        DetectionPolicy::ExtensionFirst => {
            if let Some(id) = from_extension {
                tracing::trace!(language = %id, "resolved from extension");
                return id;
            }
            match text {
                Some(text) => {
                    tracing::debug!(hint = ?extension_hint, "extension unmapped; scanning content");
                    detect_from_content(text)
                }
                None => LanguageId::UNKNOWN,
            }
        }
        DetectionPolicy::AlwaysDetect => {
            let detected = text.map_or(LanguageId::UNKNOWN, detect_from_content);
            if !detected.is_unknown() {
                return detected;
            }
            if let Some(id) = from_extension {
                tracing::debug!(language = %id, "content inconclusive; using extension");
                return id;
            }
            LanguageId::UNKNOWN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::EXTENSIONS;

    fn score_of(text: &str, id: LanguageId) -> u32 {
        score_content(text)
            .into_iter()
            .find(|s| s.language == id)
            .map_or(0, |s| s.score)
    }

    #[test]
    fn test_python_function() {
        assert_eq!(detect_from_content("def foo():\n    return 1"), LanguageId::Python);
    }

    #[test]
    fn test_jsx_scores_add_to_javascript() {
        let text = r#"const el = <App className="main" />;"#;
        assert_eq!(score_of(text, LanguageId::JavaScript), 4);
        assert_eq!(score_of(text, LanguageId::TypeScript), 1);
        assert_eq!(detect_from_content(text), LanguageId::JavaScript);
    }

    #[test]
    fn test_json_object() {
        let text = "{\n  \"name\": \"glint\",\n  \"private\": true\n}\n";
        assert_eq!(detect_from_content(text), LanguageId::Json);
    }

    #[test]
    fn test_yaml_document() {
        let text = "name: glint\nversion: 1\ndependencies:\n  - serde\n  - regex\n";
        assert_eq!(detect_from_content(text), LanguageId::Yaml);
    }

    #[test]
    fn test_rust_snippet() {
        let text = "fn main() {\n    let mut total = 0;\n    println!(\"{}\", total);\n}\n";
        assert_eq!(detect_from_content(text), LanguageId::Rust);
    }

    #[test]
    fn test_go_snippet() {
        let text = "package main\n\nimport \"fmt\"\n\nfunc main() {\n\tfmt.Println(\"hi\")\n}\n";
        assert_eq!(detect_from_content(text), LanguageId::Go);
    }

    #[test]
    fn test_css_rule() {
        assert_eq!(
            detect_from_content("body {\n  color: red;\n  margin: 0;\n}\n"),
            LanguageId::Css
        );
    }

    #[test]
    fn test_scss_beats_css() {
        let text = "$primary: #333;\n.nav {\n  color: $primary;\n  &:hover {\n    color: red;\n  }\n}\n";
        assert_eq!(score_of(text, LanguageId::Scss), 9);
        assert_eq!(score_of(text, LanguageId::Css), 7);
        assert_eq!(detect_from_content(text), LanguageId::Scss);
    }

    #[test]
    fn test_shell_shebang() {
        assert_eq!(
            detect_from_content("#!/bin/bash\necho \"hello\"\n"),
            LanguageId::Shell
        );
    }

    #[test]
    fn test_toml_manifest() {
        let text = "[package]\nname = \"glint\"\nversion = \"0.3.0\"\n";
        assert_eq!(detect_from_content(text), LanguageId::Toml);
    }

    #[test]
    fn test_sql_query() {
        assert_eq!(
            detect_from_content("SELECT id, name FROM users WHERE id = 1;"),
            LanguageId::Sql
        );
    }

    #[test]
    fn test_low_signal_is_unknown() {
        assert_eq!(detect_from_content("x"), LanguageId::UNKNOWN);
        assert_eq!(detect_from_content("hello world"), LanguageId::UNKNOWN);
    }

    #[test]
    fn test_empty_and_whitespace_are_unknown() {
        assert_eq!(detect_from_content(""), LanguageId::UNKNOWN);
        assert_eq!(detect_from_content("  \n\t\n"), LanguageId::UNKNOWN);
    }

    #[test]
    fn test_single_weight_one_match_is_below_floor() {
        // Only the `===` pattern (weight 1) matches
        let text = "a === b";
        assert_eq!(score_of(text, LanguageId::JavaScript), 1);
        assert_eq!(detect_from_content(text), LanguageId::UNKNOWN);
    }

    #[test]
    fn test_pattern_counts_once() {
        let once = "console.log(1)";
        let many = "console.log(1)\nconsole.log(2)\nconsole.log(3)";
        assert_eq!(
            score_of(once, LanguageId::JavaScript),
            score_of(many, LanguageId::JavaScript)
        );
    }

    #[test]
    fn test_winner_tie_goes_to_first() {
        let scores = [
            LanguageScore { language: LanguageId::Go, score: 3 },
            LanguageScore { language: LanguageId::Rust, score: 3 },
        ];
        assert_eq!(winner(&scores).unwrap().language, LanguageId::Go);
    }

    #[test]
    fn test_winner_strict_max() {
        let scores = [
            LanguageScore { language: LanguageId::Go, score: 2 },
            LanguageScore { language: LanguageId::Rust, score: 5 },
            LanguageScore { language: LanguageId::Lua, score: 5 },
        ];
        assert_eq!(winner(&scores).unwrap().language, LanguageId::Rust);
        assert!(winner(&[]).is_none());
    }

    #[test]
    fn test_scores_follow_declaration_order() {
        let text = "def foo():\n    return None\nconst x = 1;\nconsole.log(x)\n";
        let ids: Vec<_> = score_content(text).into_iter().map(|s| s.language).collect();
        let py = ids.iter().position(|&id| id == LanguageId::Python).unwrap();
        let js = ids.iter().position(|&id| id == LanguageId::JavaScript).unwrap();
        assert!(py < js);
        assert!(score_content(text).iter().all(|s| s.score > 0));
    }

    #[test]
    fn test_resolve_extension_without_content() {
        assert_eq!(resolve(Some("py"), None), LanguageId::Python);
        assert_eq!(resolve(Some(".PY"), None), LanguageId::Python);
    }

    #[test]
    fn test_resolve_extension_ignores_content() {
        let python = "def foo():\n    return 1";
        assert_eq!(resolve(Some("rs"), Some(python)), LanguageId::Rust);
    }

    #[test]
    fn test_resolve_every_table_entry() {
        for &(ext, id) in EXTENSIONS {
            assert_eq!(resolve(Some(ext), Some("SELECT * FROM t")), id, "extension {ext}");
        }
    }

    #[test]
    fn test_resolve_falls_back_to_content() {
        assert_eq!(
            resolve(Some(""), Some("def foo():\n    return 1")),
            LanguageId::Python
        );
        assert_eq!(
            resolve(Some("weird"), Some("def foo():\n    return 1")),
            LanguageId::Python
        );
        assert_eq!(resolve(None, Some("def foo():\n    return 1")), LanguageId::Python);
    }

    #[test]
    fn test_resolve_nothing_is_unknown() {
        assert_eq!(resolve(None, None), LanguageId::UNKNOWN);
        assert_eq!(resolve(Some("weird"), None), LanguageId::UNKNOWN);
    }

    #[test]
    fn test_always_detect_prefers_content() {
        let python = "def foo():\n    return 1";
        assert_eq!(
            resolve_with_policy(Some("txt"), Some(python), DetectionPolicy::AlwaysDetect),
            LanguageId::Python
        );
        assert_eq!(
            resolve_with_policy(Some("rs"), Some(python), DetectionPolicy::AlwaysDetect),
            LanguageId::Python
        );
    }

    #[test]
    fn test_always_detect_falls_back_to_extension() {
        assert_eq!(
            resolve_with_policy(Some("rs"), Some("x"), DetectionPolicy::AlwaysDetect),
            LanguageId::Rust
        );
        assert_eq!(
            resolve_with_policy(Some("rs"), None, DetectionPolicy::AlwaysDetect),
            LanguageId::Rust
        );
        assert_eq!(
            resolve_with_policy(None, Some("x"), DetectionPolicy::AlwaysDetect),
            LanguageId::UNKNOWN
        );
    }
}
