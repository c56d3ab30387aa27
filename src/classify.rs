//! Semantic classification of modified lines.
//!
//! Each category is an independent regex detector over a fixed, ordered rule
//! table, so new categories slot in without touching the alignment logic.
//! Patterns are compiled once into process-wide immutable state.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::diff::ChangeTag;

struct TagRule {
    tag: ChangeTag,
    pattern: Regex,
}

impl TagRule {
    fn new(tag: ChangeTag, pattern: &str) -> TagRule {
        TagRule {
            tag,
            pattern: Regex::new(pattern).expect("tag rule patterns are static and valid"),
        }
    }

    /// True when the category's matched substrings differ between the two
    /// texts. A line that still carries the same date is not a date change.
    fn matches_changed(&self, old: &str, new: &str) -> bool {
        let old_matches: BTreeSet<&str> =
            self.pattern.find_iter(old).map(|m| m.as_str()).collect();
        let new_matches: BTreeSet<&str> =
            self.pattern.find_iter(new).map(|m| m.as_str()).collect();
        old_matches != new_matches
    }
}

// Date, phone, and email follow common Western conventions and are best
// effort; currency, percentage, and numeric identifiers are script-agnostic.
static RULES: Lazy<Vec<TagRule>> = Lazy::new(|| {
    vec![
        TagRule::new(ChangeTag::Date, r"\b\d{4}[-/]\d{1,2}[-/]\d{1,2}\b"),
        TagRule::new(ChangeTag::Currency, r"[$€£]?\b\d{3,}(?:,\d{3})*(?:\.\d+)?\b"),
        TagRule::new(ChangeTag::Percentage, r"\b\d+(?:\.\d+)?%"),
        TagRule::new(ChangeTag::Identifier, r"\b[A-Z]{2,}-?\d{2,}\b"),
        TagRule::new(
            ChangeTag::Email,
            r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}",
        ),
        TagRule::new(ChangeTag::Phone, r"\+?\d{1,3}(?:[\s().-]\d{3,}){2,}"),
    ]
});

/// Tags describing what kind of content changed between `old` and `new`.
///
/// Detectors run independently, so a line can carry multiple tags; the
/// returned order follows the fixed rule table.
pub fn classify_pair(old: &str, new: &str) -> Vec<ChangeTag> {
    RULES
        .iter()
        .filter(|rule| rule.matches_changed(old, new))
        .map(|rule| rule.tag)
        .collect()
}
