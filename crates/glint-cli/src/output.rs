//! Text and JSON rendering of analysis results.

use colored::Colorize;
use glint_core::{Analysis, Finding, Severity};

pub const STDIN_LABEL: &str = "<stdin>";

/// One line per finding: `path:line:col: level[rule]: message`.
pub fn format_finding(label: &str, finding: &Finding) -> String {
    let level = match finding.severity {
        Severity::Error => "error".red().bold(),
        Severity::Warning => "warning".yellow().bold(),
    };
    let mut line = format!(
        "{}:{}:{}: {}[{}]: {}",
        label, finding.line, finding.column, level, finding.rule, finding.message
    );
    if let Some(suggestion) = &finding.suggestion {
        line.push_str(&format!("\n  {} {}", "help:".cyan(), suggestion));
    }
    line
}

pub fn format_text(results: &[Analysis]) -> String {
    let mut out = String::new();
    let mut errors = 0;
    let mut warnings = 0;

    for analysis in results {
        let label = analysis.label.as_deref().unwrap_or(STDIN_LABEL);
        for finding in &analysis.findings {
            match finding.severity {
                Severity::Error => errors += 1,
                Severity::Warning => warnings += 1,
            }
            out.push_str(&format_finding(label, finding));
            out.push('\n');
        }
    }

    let summary = format!(
        "{} checked, {} {}, {} {}",
        results.len(),
        errors,
        plural(errors, "error"),
        warnings,
        plural(warnings, "warning")
    );
    if errors > 0 {
        out.push_str(&summary.red().to_string());
    } else if warnings > 0 {
        out.push_str(&summary.yellow().to_string());
    } else {
        out.push_str(&summary.green().to_string());
    }
    out.push('\n');
    out
}

pub fn format_json(results: &[Analysis]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
