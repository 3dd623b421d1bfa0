//! Python line checks (PY-001 to PY-004)
//!
//! Every physical line is checked on its own; blank lines and full-line
//! comments are skipped. Nothing carries over from one line to the next:
//! quote parity and bracket balance are counted per line, so literals that
//! span lines are reported on the lines where they open and close. The
//! indentation check assumes 4-column style.

use crate::{
    config::GlintConfig,
    diagnostics::Finding,
    position::end_of_line,
    rules::Validator,
};

const RULE_STRING: &str = "PY-001";
const RULE_BRACKET: &str = "PY-002";
const RULE_COLON: &str = "PY-003";
const RULE_INDENT: &str = "PY-004";

const INDENT_WIDTH: usize = 4;

/// Keywords that open a block and must end with `:`.
const BLOCK_KEYWORDS: &[&str] = &[
    "if", "elif", "else", "for", "while", "def", "class", "with", "try", "except", "finally",
];

const BRACKETS: [(char, char); 3] = [('(', ')'), ('[', ']'), ('{', '}')];

pub struct PythonValidator;

impl Validator for PythonValidator {
    fn validate(&self, content: &str, config: &GlintConfig) -> Vec<Finding> {
        let mut findings = Vec::new();

        for (idx, line) in content.split('\n').enumerate() {
            let line_num = idx + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            if config.is_rule_enabled(RULE_STRING) {
                let quotes = count_quotes(line);
                for (kind, tally) in quotes.odd() {
                    findings.push(
                        Finding::error(line_num, tally.last_column, RULE_STRING, kind.message())
                            .with_suggestion(format!(
                                "Close the string with {}",
                                kind.delimiter(tally.last_quote)
                            )),
                    );
                }
            }

            if config.is_rule_enabled(RULE_BRACKET) {
                for (kind, tally) in count_brackets(line).iter().enumerate() {
                    if let Some((column, message)) = tally.imbalance(BRACKETS[kind]) {
                        findings.push(Finding::error(line_num, column, RULE_BRACKET, message));
                    }
                }
            }

            if config.is_rule_enabled(RULE_COLON)
                && let Some(keyword) = block_keyword(trimmed)
                && !trimmed.ends_with(':')
            {
                findings.push(
                    Finding::error(
                        line_num,
                        end_of_line(line.trim_end()),
                        RULE_COLON,
                        format!("Missing ':' after '{}' block header", keyword),
                    )
                    .with_suggestion("Add ':' at the end of the line"),
                );
            }

            if config.is_rule_enabled(RULE_INDENT) {
                let width = indent_width(line);
                if width % INDENT_WIDTH != 0 {
                    findings.push(Finding::warning(
                        line_num,
                        1,
                        RULE_INDENT,
                        format!(
                            "Indentation of {} columns is not a multiple of {}",
                            width, INDENT_WIDTH
                        ),
                    ));
                }
            }
        }

        findings
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteKind {
    Triple,
    Single,
    Double,
}

impl QuoteKind {
    fn message(self) -> &'static str {
        match self {
            QuoteKind::Triple => "Unclosed triple-quoted string",
            QuoteKind::Single => "Unclosed single-quoted string",
            QuoteKind::Double => "Unclosed double-quoted string",
        }
    }

    fn delimiter(self, quote: char) -> String {
        let count = if self == QuoteKind::Triple { 3 } else { 1 };
        std::iter::repeat_n(quote, count).collect()
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct QuoteTally {
    count: usize,
    /// Column of the last occurrence (first char of a triple).
    last_column: usize,
    last_quote: char,
}

impl QuoteTally {
    fn record(&mut self, quote: char, column: usize) {
        self.count += 1;
        self.last_column = column;
        self.last_quote = quote;
    }
}

#[derive(Debug, Default)]
struct QuoteCounts {
    triple: QuoteTally,
    single: QuoteTally,
    double: QuoteTally,
}

impl QuoteCounts {
    /// Kinds with an odd count, triple quotes first.
    fn odd(&self) -> impl Iterator<Item = (QuoteKind, QuoteTally)> {
        [
            (QuoteKind::Triple, self.triple),
            (QuoteKind::Single, self.single),
            (QuoteKind::Double, self.double),
        ]
        .into_iter()
        .filter(|(_, tally)| tally.count % 2 == 1)
    }
}

/// Count unescaped quote occurrences on one line.
///
/// A run of three identical quotes counts once as a triple quote and not
/// as single or double quotes. `\` escapes the character after it.
fn count_quotes(line: &str) -> QuoteCounts {
    let chars: Vec<char> = line.chars().collect();
    let mut counts = QuoteCounts::default();

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        match c {
            '\\' => {
                i += 2;
                continue;
            }
            '\'' | '"' => {
                if chars.get(i + 1) == Some(&c) && chars.get(i + 2) == Some(&c) {
                    counts.triple.record(c, i + 1);
                    i += 3;
                    continue;
                }
                let tally = if c == '\'' {
                    &mut counts.single
                } else {
                    &mut counts.double
                };
                tally.record(c, i + 1);
            }
            _ => {}
        }
        i += 1;
    }

    counts
}

#[derive(Debug, Default, Clone, Copy)]
struct BracketTally {
    /// Openers minus closers.
    net: isize,
    last_open: usize,
    last_close: usize,
}

impl BracketTally {
    fn imbalance(&self, (open, close): (char, char)) -> Option<(usize, String)> {
        let excess = self.net.unsigned_abs();
        match self.net {
            0 => None,
            n if n > 0 => {
                let message = if excess == 1 {
                    format!("Unclosed '{}'", open)
                } else {
                    format!("{} unclosed '{}'", excess, open)
                };
                Some((self.last_open, message))
            }
            _ => {
                let message = if excess == 1 {
                    format!("Unmatched closing '{}'", close)
                } else {
                    format!("{} unmatched closing '{}'", excess, close)
                };
                Some((self.last_close, message))
            }
        }
    }
}

/// Net open/close count per bracket kind over the whole line.
fn count_brackets(line: &str) -> [BracketTally; 3] {
    let mut tallies = [BracketTally::default(); 3];
    for (i, c) in line.chars().enumerate() {
        for (kind, &(open, close)) in BRACKETS.iter().enumerate() {
            if c == open {
                tallies[kind].net += 1;
                tallies[kind].last_open = i + 1;
            } else if c == close {
                tallies[kind].net -= 1;
                tallies[kind].last_close = i + 1;
            }
        }
    }
    tallies
}

/// The block keyword a trimmed line starts with, if any.
fn block_keyword(trimmed: &str) -> Option<&'static str> {
    BLOCK_KEYWORDS.iter().copied().find(|kw| {
        trimmed
            .strip_prefix(kw)
            .is_some_and(|after| !after.starts_with(|c: char| c.is_alphanumeric() || c == '_'))
    })
}

/// Leading whitespace width in columns; a tab advances to the next tab stop.
fn indent_width(line: &str) -> usize {
    let mut width = 0;
    for c in line.chars() {
        match c {
            ' ' => width += 1,
            '\t' => width += INDENT_WIDTH - width % INDENT_WIDTH,
            _ => break,
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Severity;

    fn validate(content: &str) -> Vec<Finding> {
        PythonValidator.validate(content, &GlintConfig::default())
    }

    fn rules(findings: &[Finding]) -> Vec<&str> {
        findings.iter().map(|f| f.rule.as_str()).collect()
    }

    fn messages(findings: &[Finding]) -> Vec<&str> {
        findings.iter().map(|f| f.message.as_str()).collect()
    }

    #[test]
    fn test_clean_function_has_no_findings() {
        let content = "def add(a, b):\n    return a + b\n\nclass Point:\n    x = [1, 2]\n";
        assert!(validate(content).is_empty());
    }

    #[test]
    fn test_missing_colon_on_if() {
        let findings = validate("if True\n    pass");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].rule, "PY-003");
        assert_eq!(findings[0].severity, Severity::Error);
        assert_eq!((findings[0].line, findings[0].column), (1, 8));
        assert!(findings[0].message.contains("':'"));
    }

    #[test]
    fn test_unclosed_single_quote() {
        let findings = validate("x = 'abc");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].rule, "PY-001");
        assert_eq!(findings[0].column, 5);
        assert_eq!(findings[0].message, "Unclosed single-quoted string");
    }

    #[test]
    fn test_unclosed_double_quote() {
        let findings = validate("name = \"glint");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].message, "Unclosed double-quoted string");
    }

    #[test]
    fn test_apostrophe_inside_double_quotes_is_odd_single() {
        let findings = validate("x = \"it's\"");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].rule, "PY-001");
        assert_eq!(findings[0].message, "Unclosed single-quoted string");
        assert_eq!(findings[0].column, 8);
    }

    #[test]
    fn test_quote_kinds_counted_independently() {
        assert!(validate("msg = 'say \"hi\"'").is_empty());
        let findings = validate("msg = 'a' + \"b");
        assert_eq!(messages(&findings), vec!["Unclosed double-quoted string"]);
    }

    #[test]
    fn test_reported_at_last_quote_of_kind() {
        let findings = validate("s = 'é' + 'x");
        assert_eq!(findings[0].column, 11);
    }

    #[test]
    fn test_escaped_quote_not_counted() {
        assert!(validate(r"msg = 'it\'s fine'").is_empty());
        let findings = validate(r"msg = 'broken\'");
        assert_eq!(rules(&findings), vec!["PY-001"]);
        assert_eq!(findings[0].column, 7);
    }

    #[test]
    fn test_triple_quote_closed_on_same_line() {
        assert!(validate("doc = \"\"\"one line\"\"\"").is_empty());
    }

    #[test]
    fn test_triple_quote_opened_reports_triple_not_single() {
        let findings = validate("    \"\"\"Start of a docstring");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].message, "Unclosed triple-quoted string");
        assert_eq!(findings[0].column, 5);
    }

    #[test]
    fn test_triple_quote_closing_line_reported_again() {
        let findings = validate("\"\"\"\nbody\n\"\"\"");
        assert_eq!(rules(&findings), vec!["PY-001", "PY-001"]);
        assert_eq!(findings[0].line, 1);
        assert_eq!(findings[1].line, 3);
    }

    #[test]
    fn test_suggestion_names_delimiter() {
        let findings = validate("x = '''abc");
        assert_eq!(findings[0].suggestion.as_deref(), Some("Close the string with '''"));
    }

    #[test]
    fn test_multiple_unclosed_counted() {
        let findings = validate("x = ((1");
        assert_eq!(findings[0].message, "2 unclosed '('");
        assert_eq!(findings[0].column, 6);
    }

    #[test]
    fn test_unmatched_closer_reported_at_closer() {
        let findings = validate("x = 1)");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].message, "Unmatched closing ')'");
        assert_eq!(findings[0].column, 6);
    }

    #[test]
    fn test_bracket_kinds_tracked_independently() {
        let findings = validate("x = (]");
        assert_eq!(
            messages(&findings),
            vec!["Unclosed '('", "Unmatched closing ']'"]
        );
    }

    #[test]
    fn test_bracket_balance_is_net_per_line() {
        assert!(validate("x = a)(b").is_empty());
        let findings = validate("y = f(a))");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].message, "Unmatched closing ')'");
    }

    #[test]
    fn test_brackets_inside_strings_counted() {
        let findings = validate("x = ')'");
        assert_eq!(rules(&findings), vec!["PY-002"]);
        assert_eq!(findings[0].column, 6);
        assert!(validate("x = '(' + ')'").is_empty());
    }

    #[test]
    fn test_multiline_literal_reported_per_line() {
        let findings = validate("items = [\n    1,\n]");
        assert_eq!(rules(&findings), vec!["PY-002", "PY-002"]);
        assert_eq!(findings[0].line, 1);
        assert_eq!(findings[1].line, 3);
        assert_eq!(findings[1].message, "Unmatched closing ']'");
    }

    #[test]
    fn test_header_with_open_bracket_still_needs_colon() {
        let findings = validate("if (a and");
        assert_eq!(rules(&findings), vec!["PY-002", "PY-003"]);
        assert_eq!(findings[1].column, 10);
    }

    #[test]
    fn test_header_with_trailing_comment_flagged() {
        let findings = validate("if x:  # note");
        assert_eq!(rules(&findings), vec!["PY-003"]);
        assert_eq!(findings[0].column, 14);
    }

    #[test]
    fn test_header_with_line_continuation_flagged() {
        assert_eq!(rules(&validate("if a and \\")), vec!["PY-003"]);
    }

    #[test]
    fn test_every_block_keyword_checked() {
        for kw in BLOCK_KEYWORDS {
            let findings = validate(&format!("{} thing", kw));
            assert_eq!(rules(&findings), vec!["PY-003"], "keyword {kw}");
        }
    }

    #[test]
    fn test_identifier_with_keyword_prefix_is_not_header() {
        assert!(validate("format = 1").is_empty());
        assert!(validate("class_name = 'x'").is_empty());
        assert!(validate("iffy = True").is_empty());
    }

    #[test]
    fn test_keyword_followed_by_paren_is_header() {
        assert_eq!(rules(&validate("if(x)")), vec!["PY-003"]);
        assert!(validate("if(x):").is_empty());
    }

    #[test]
    fn test_one_line_body_flagged() {
        assert_eq!(rules(&validate("if x: pass")), vec!["PY-003"]);
    }

    #[test]
    fn test_two_space_indent_warns_at_column_one() {
        let findings = validate("def f():\n  return 1");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].rule, "PY-004");
        assert_eq!(findings[0].severity, Severity::Warning);
        assert_eq!((findings[0].line, findings[0].column), (2, 1));
    }

    #[test]
    fn test_tab_indent_is_four_columns() {
        assert!(validate("def f():\n\treturn 1").is_empty());
        assert_eq!(indent_width("  \tx"), 4);
        assert_eq!(indent_width("\t  x"), 6);
    }

    #[test]
    fn test_comment_lines_skipped() {
        assert!(validate("  # it's (unbalanced\nx = 1").is_empty());
    }

    #[test]
    fn test_findings_in_check_order_within_line() {
        let findings = validate("  if (x == 'a");
        assert_eq!(rules(&findings), vec!["PY-001", "PY-002", "PY-003", "PY-004"]);
    }

    #[test]
    fn test_disabled_rule_is_skipped() {
        let config = GlintConfig::builder().disable_rule("PY-004").build();
        let findings = PythonValidator.validate("def f():\n  return 1", &config);
        assert!(findings.is_empty());
    }
}
