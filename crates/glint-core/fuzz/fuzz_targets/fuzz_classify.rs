//! Fuzz target for language classification
//!
//! Properties validated:
//! - No panics on arbitrary text, including pathological regex input
//! - The winning score meets the confidence floor unless the result is unknown
//! - Whitespace-only input is always unknown

#![no_main]

use glint_core::{CONFIDENCE_FLOOR, LanguageId, detect_from_content, resolve, score_content};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let detected = detect_from_content(data);

    if data.trim().is_empty() {
        assert_eq!(detected, LanguageId::UNKNOWN);
    } else if !detected.is_unknown() {
        let best = score_content(data)
            .into_iter()
            .find(|s| s.language == detected)
            .map_or(0, |s| s.score);
        assert!(best >= CONFIDENCE_FLOOR);
    }

    // First line doubles as an extension hint
    let hint = data.lines().next().unwrap_or("");
    let _ = resolve(Some(hint), Some(data));
});
