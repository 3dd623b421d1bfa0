//! Fuzz target for every built-in validator
//!
//! Properties validated:
//! - No panics on malformed input for any validated language
//! - Every finding satisfies 1 <= line <= segments and
//!   1 <= column <= line length + 1
//! - Structured-data validators report at most one finding

#![no_main]

use glint_core::{LanguageId, ValidatorRegistry, validate};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let lines: Vec<&str> = data.split('\n').collect();

    for language in ValidatorRegistry::with_defaults().languages() {
        let findings = validate(language, data);

        if matches!(language, LanguageId::Json | LanguageId::Yaml) {
            assert!(findings.len() <= 1);
        }

        for finding in findings {
            assert!(finding.line >= 1 && finding.line <= lines.len());
            assert!(finding.column >= 1);
            assert!(finding.column <= lines[finding.line - 1].chars().count() + 1);
        }
    }
});
