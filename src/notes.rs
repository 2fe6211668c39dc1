//! Release-note filtering for conventional-commit subjects.
//!
//! Raw `git log` subject output is reduced to the lines worth publishing:
//! only allow-listed categories survive, duplicates are dropped, and an
//! empty result is replaced by a synthesized release line.

use std::collections::HashSet;

use crate::version::Version;

/// Conventional-commit categories kept in release notes by default.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "fix", "feat", "docs", "refactor", "optimize", "enhance", "openai",
];

/// The category token of a subject line: everything before the first ':',
/// or the whole line when there is no colon.
fn category_of(line: &str) -> &str {
    line.split_once(':').map_or(line, |(category, _)| category)
}

/// Filter raw log output into the ordered release-note lines.
///
/// Per line: trim whitespace, then surrounding quote characters (the log
/// format quotes each subject); skip empty lines; keep the line only if its
/// category matches the allow-list case-insensitively. Duplicates are
/// dropped, first occurrence wins, order is preserved. If nothing survives,
/// the result is the single line `release: <tag>` for the new version.
pub fn filter_release_notes(
    raw: &str,
    categories: &[String],
    new_version: &Version,
    tag_prefix: &str,
) -> Vec<String> {
    let mut notes = Vec::new();
    let mut seen = HashSet::new();

    for line in raw.lines() {
        let line = line.trim().trim_matches('"');
        if line.is_empty() {
            continue;
        }

        let category = category_of(line);
        if !categories.iter().any(|c| c.eq_ignore_ascii_case(category)) {
            continue;
        }

        if seen.insert(line.to_string()) {
            notes.push(line.to_string());
        }
    }

    if notes.is_empty() {
        notes.push(format!("release: {}", new_version.tag_name(tag_prefix)));
    }

    notes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_categories() -> Vec<String> {
        DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect()
    }

    fn filter(raw: &str) -> Vec<String> {
        filter_release_notes(raw, &default_categories(), &Version::new("1.0.4"), "v")
    }

    #[test]
    fn test_keeps_allow_listed_drops_rest() {
        let raw = "\"fix: a\"\n\"chore: b\"\n\"fix: a\"\n\"feat: c\"";
        assert_eq!(filter(raw), vec!["fix: a", "feat: c"]);
    }

    #[test]
    fn test_category_match_is_case_insensitive() {
        let raw = "\"Fix: upper\"\n\"FEAT: louder\"";
        assert_eq!(filter(raw), vec!["Fix: upper", "FEAT: louder"]);
    }

    #[test]
    fn test_category_with_scope_is_not_matched() {
        // "feat(ui)" is not an allow-list entry
        let raw = "\"feat(ui): scoped\"";
        assert_eq!(filter(raw), vec!["release: v1.0.4"]);
    }

    #[test]
    fn test_empty_log_falls_back_to_release_line() {
        assert_eq!(filter(""), vec!["release: v1.0.4"]);
    }

    #[test]
    fn test_fully_filtered_log_falls_back() {
        let raw = "\"chore: tidy\"\n\"ci: pipeline\"\n\"\"";
        assert_eq!(filter(raw), vec!["release: v1.0.4"]);
    }

    #[test]
    fn test_order_preserved_first_occurrence_wins() {
        let raw = "\"feat: one\"\n\"fix: two\"\n\"feat: one\"\n\"docs: three\"";
        assert_eq!(filter(raw), vec!["feat: one", "fix: two", "docs: three"]);
    }

    #[test]
    fn test_idempotent_on_filtered_output() {
        let raw = "\"fix: a\"\n\"chore: b\"\n\"feat: c\"";
        let once = filter(raw);

        let requoted: String = once
            .iter()
            .map(|l| format!("\"{}\"", l))
            .collect::<Vec<_>>()
            .join("\n");
        let twice = filter(&requoted);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_unquoted_lines_pass_through() {
        let raw = "fix: plain line";
        assert_eq!(filter(raw), vec!["fix: plain line"]);
    }

    #[test]
    fn test_custom_category_list() {
        let categories = vec!["chore".to_string()];
        let raw = "\"chore: b\"\n\"fix: a\"";
        let notes = filter_release_notes(raw, &categories, &Version::new("2.0.0"), "v");
        assert_eq!(notes, vec!["chore: b"]);
    }

    #[test]
    fn test_fallback_uses_configured_prefix() {
        let notes = filter_release_notes("", &default_categories(), &Version::new("3.1"), "rel-");
        assert_eq!(notes, vec!["release: rel-3.1"]);
    }
}
