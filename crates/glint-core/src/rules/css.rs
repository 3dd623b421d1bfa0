//! CSS-family brace checks (CSS-001 to CSS-003)
//!
//! Brace depth is cumulative over the whole file. Comments and quoted
//! strings are skipped while counting. SCSS and Less also accept `//` line
//! comments.

use crate::{
    config::GlintConfig,
    diagnostics::Finding,
    position::{end_of_line, segment_count},
    rules::Validator,
};

const RULE_UNMATCHED: &str = "CSS-001";
const RULE_UNCLOSED: &str = "CSS-002";
const RULE_SEMICOLON: &str = "CSS-003";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CssDialect {
    #[default]
    Css,
    Scss,
    Less,
}

impl CssDialect {
    fn has_line_comments(self) -> bool {
        matches!(self, CssDialect::Scss | CssDialect::Less)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CssValidator {
    dialect: CssDialect,
}

impl CssValidator {
    pub fn new(dialect: CssDialect) -> Self {
        Self { dialect }
    }

    pub fn dialect(&self) -> CssDialect {
        self.dialect
    }
}

impl Validator for CssValidator {
    fn validate(&self, content: &str, config: &GlintConfig) -> Vec<Finding> {
        let mut findings = Vec::new();
        let report_unmatched = config.is_rule_enabled(RULE_UNMATCHED);
        let report_semicolon = config.is_rule_enabled(RULE_SEMICOLON);

        let mut depth = 0usize;
        let mut in_comment = false;

        for (idx, line) in content.split('\n').enumerate() {
            let line_num = idx + 1;
            let depth_at_start = depth;
            let mut code = String::with_capacity(line.len());

            let chars: Vec<char> = line.chars().collect();
            let mut quote: Option<char> = None;
            let mut i = 0;
            while i < chars.len() {
                let c = chars[i];
                let next = chars.get(i + 1).copied();

                if in_comment {
                    if c == '*' && next == Some('/') {
                        in_comment = false;
                        i += 2;
                    } else {
                        i += 1;
                    }
                    continue;
                }

                if let Some(q) = quote {
                    code.push(c);
                    if c == '\\' {
                        if let Some(escaped) = next {
                            code.push(escaped);
                        }
                        i += 2;
                        continue;
                    }
                    if c == q {
                        quote = None;
                    }
                    i += 1;
                    continue;
                }

                match c {
                    '/' if next == Some('*') => {
                        in_comment = true;
                        i += 2;
                        continue;
                    }
                    '/' if next == Some('/')
                        && self.dialect.has_line_comments()
                        && (i == 0 || chars[i - 1] != ':') =>
                    {
                        break;
                    }
                    '"' | '\'' => quote = Some(c),
                    '{' => depth += 1,
                    '}' => {
                        if depth == 0 {
                            if report_unmatched {
                                findings.push(
                                    Finding::error(
                                        line_num,
                                        i + 1,
                                        RULE_UNMATCHED,
                                        "Unmatched closing brace",
                                    )
                                    .with_suggestion("Remove the extra '}'"),
                                );
                            }
                        } else {
                            depth -= 1;
                        }
                    }
                    _ => {}
                }
                code.push(c);
                i += 1;
            }

            if report_semicolon
                && depth_at_start > 0
                && missing_semicolon(code.trim())
            {
                findings.push(
                    Finding::warning(
                        line_num,
                        end_of_line(line.trim_end()),
                        RULE_SEMICOLON,
                        "Missing semicolon after declaration",
                    )
                    .with_suggestion("Add ';' at the end of the declaration"),
                );
            }
        }

        if depth > 0 && config.is_rule_enabled(RULE_UNCLOSED) {
            let last_line_num = segment_count(content);
            let last_line = content.rsplit('\n').next().unwrap_or("");
            let message = if depth == 1 {
                "1 unclosed brace".to_string()
            } else {
                format!("{} unclosed braces", depth)
            };
            findings.push(Finding::error(
                last_line_num,
                end_of_line(last_line),
                RULE_UNCLOSED,
                message,
            ));
        }

        findings
    }
}

/// A declaration-looking line inside a block that does not end a statement.
fn missing_semicolon(code: &str) -> bool {
    !code.is_empty()
        && !code.starts_with('@')
        && code.contains(':')
        && !code.ends_with('{')
        && !code.ends_with('}')
        && !code.ends_with(';')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Severity;

    fn validate(content: &str) -> Vec<Finding> {
        CssValidator::new(CssDialect::Css).validate(content, &GlintConfig::default())
    }

    fn validate_scss(content: &str) -> Vec<Finding> {
        CssValidator::new(CssDialect::Scss).validate(content, &GlintConfig::default())
    }

    fn rules(findings: &[Finding]) -> Vec<&str> {
        findings.iter().map(|f| f.rule.as_str()).collect()
    }

    #[test]
    fn test_clean_stylesheet_has_no_findings() {
        let content = "body {\n  color: red;\n  margin: 0;\n}\n\na:hover { color: blue; }\n";
        assert!(validate(content).is_empty());
    }

    #[test]
    fn test_extra_closing_brace() {
        let findings = validate("a { color: red; } }");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].rule, "CSS-001");
        assert_eq!(findings[0].severity, Severity::Error);
        assert_eq!((findings[0].line, findings[0].column), (1, 19));
        assert_eq!(findings[0].message, "Unmatched closing brace");
    }

    #[test]
    fn test_unclosed_brace_at_last_line() {
        let findings = validate("a {");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].rule, "CSS-002");
        assert_eq!((findings[0].line, findings[0].column), (1, 4));
        assert_eq!(findings[0].message, "1 unclosed brace");
    }

    #[test]
    fn test_unclosed_count_is_pluralised() {
        let findings = validate("@media screen {\n  a {\n    color: red;\n");
        assert_eq!(rules(&findings), vec!["CSS-002"]);
        assert_eq!(findings[0].message, "2 unclosed braces");
    }

    #[test]
    fn test_unclosed_anchor_uses_newline_segments() {
        // A trailing newline opens an empty final segment
        let findings = validate("@media screen {\n  a {\n    color: red;\n");
        assert_eq!((findings[0].line, findings[0].column), (4, 1));

        let findings = validate("a {\n  color: red;");
        assert_eq!((findings[0].line, findings[0].column), (2, 14));
    }

    #[test]
    fn test_depth_resets_after_unmatched_close() {
        // Without the reset the second rule would look balanced
        let findings = validate("}\na {\n  color: red;\n}\n");
        assert_eq!(rules(&findings), vec!["CSS-001"]);
        assert_eq!(findings[0].line, 1);
    }

    #[test]
    fn test_missing_semicolon_warning() {
        let findings = validate("a {\n  color: red\n}");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].rule, "CSS-003");
        assert_eq!(findings[0].severity, Severity::Warning);
        assert_eq!((findings[0].line, findings[0].column), (2, 13));
    }

    #[test]
    fn test_semicolon_check_only_inside_blocks() {
        assert!(validate("a:hover\n{\n  color: red;\n}").is_empty());
    }

    #[test]
    fn test_at_rules_and_selectors_not_declarations() {
        let content = "@media (min-width: 10px) {\n  @import url(x.css)\n  a:hover {\n    color: red;\n  }\n}\n";
        assert!(validate(content).is_empty());
    }

    #[test]
    fn test_braces_in_comments_and_strings_ignored() {
        let content = "/* { */\na::before {\n  content: \"}\";\n}\n";
        assert!(validate(content).is_empty());
    }

    #[test]
    fn test_multiline_comment_lines_skipped() {
        let content = "a {\n  /* color: red\n     margin: 0 */\n  padding: 0;\n}\n";
        assert!(validate(content).is_empty());
    }

    #[test]
    fn test_line_comment_only_in_scss() {
        assert!(validate_scss("a {\n  // color: red {\n  margin: 0;\n}\n").is_empty());
        // Plain CSS has no `//` comments, so the brace counts
        assert_eq!(
            rules(&validate("a {\n  // color: red {\n  margin: 0;\n}\n")),
            vec!["CSS-002"]
        );
    }

    #[test]
    fn test_url_scheme_is_not_a_comment() {
        assert!(validate_scss("a {\n  background: url(http://x.org/a.png);\n}\n").is_empty());
    }

    #[test]
    fn test_nested_scss_rules() {
        let content = "$primary: #333;\n.nav {\n  color: $primary;\n  &:hover {\n    color: red;\n  }\n}\n";
        assert!(validate_scss(content).is_empty());
    }

    #[test]
    fn test_findings_order_errors_then_residual() {
        let findings = validate("}\na {\n  color: red\n");
        assert_eq!(rules(&findings), vec!["CSS-001", "CSS-003", "CSS-002"]);
    }

    #[test]
    fn test_rule_toggles() {
        let config = GlintConfig::builder().disable_rule("CSS-003").build();
        let findings = CssValidator::default().validate("a {\n  color: red\n}", &config);
        assert!(findings.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(validate("").is_empty());
    }

    #[test]
    fn test_dialect_accessor() {
        assert_eq!(CssValidator::new(CssDialect::Less).dialect(), CssDialect::Less);
        assert_eq!(CssValidator::default().name(), "CssValidator");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::position::clamp_position;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn validate_never_panics(content in ".*") {
            let _ = CssValidator::new(CssDialect::Scss).validate(&content, &GlintConfig::default());
        }

        #[test]
        fn positions_stay_inside_text(content in "[ \n{}:;/*\"a-z]{0,60}") {
            for finding in CssValidator::default().validate(&content, &GlintConfig::default()) {
                let clamped = clamp_position(&content, finding.line, finding.column);
                prop_assert_eq!(clamped, (finding.line, finding.column));
            }
        }

        #[test]
        fn balanced_rules_have_no_brace_errors(
            selectors in prop::collection::vec("[a-z]{1,8}", 1..5)
        ) {
            let content: String = selectors
                .iter()
                .map(|s| format!("{} {{\n  color: red;\n}}\n", s))
                .collect();
            prop_assert!(CssValidator::default().validate(&content, &GlintConfig::default()).is_empty());
        }
    }
}
