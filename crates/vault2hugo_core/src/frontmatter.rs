//! Front-matter synthesis for Hugo.
//!
//! Builds the metadata block Hugo reads at the top of `index.md`: title,
//! timestamp, draft flag, the note's inline tags, and a year-based category.
//! Inline `#tag` tokens are collected into the `tags` field and removed from
//! the body.
//!
//! The block is assembled by string formatting rather than a YAML serializer:
//! the flat `tags: [a, b/c]` layout and the verbatim (unescaped) title are
//! part of the observable output. A title or tag containing `:` or `]`
//! produces malformed YAML — known limitation.

use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;

/// Inline tag token: `#` followed by ASCII word characters, optionally with
/// `/`-separated segments (`#a`, `#b/c`). Case-sensitive, ASCII only.
const TAG_PATTERN: &str = r"#[A-Za-z0-9_]+(?:/[A-Za-z0-9_]+)*";

/// Extract all inline tags from a note body, in first-appearance order.
///
/// The leading `#` is stripped; duplicates are kept.
///
/// # Examples
///
/// ```
/// use vault2hugo_core::frontmatter::extract_tags;
///
/// assert_eq!(extract_tags("note #a text #b/c"), vec!["a", "b/c"]);
/// ```
pub fn extract_tags(body: &str) -> Vec<String> {
    let tag_re = Regex::new(TAG_PATTERN).unwrap();
    tag_re
        .find_iter(body)
        .map(|m| m.as_str()[1..].to_string())
        .collect()
}

/// Remove every inline tag token from the body, then trim surrounding
/// whitespace.
pub fn strip_tags(body: &str) -> String {
    let tag_re = Regex::new(TAG_PATTERN).unwrap();
    tag_re.replace_all(body, "").trim().to_string()
}

/// Synthesize the front-matter block and prepend it to the tag-stripped body.
///
/// The clock is an explicit argument so the output is deterministic under
/// test; the orchestrator passes `Utc::now()`. The timestamp is RFC 3339 in
/// UTC with millisecond precision (`2024-05-01T09:30:00.000Z`), and the
/// `categories` entry is its four-digit year prefix.
pub fn synthesize(body: &str, title: &str, now: DateTime<Utc>) -> String {
    let date = now.to_rfc3339_opts(SecondsFormat::Millis, true);
    let tags = extract_tags(body).join(", ");
    let stripped = strip_tags(body);

    format!(
        "---\n\
         title: {title}\n\
         date: {date}\n\
         draft: false\n\
         tags: [{tags}]\n\
         categories: [{year}]\n\
         ---\n\n\
         {stripped}",
        year = &date[..4],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap()
    }

    // ── extract_tags ─────────────────────────────────────────────────────

    #[test]
    fn extracts_plain_and_hierarchical_tags_in_order() {
        assert_eq!(
            extract_tags("start #a middle #b/c end"),
            vec!["a".to_string(), "b/c".to_string()]
        );
    }

    #[test]
    fn keeps_duplicates() {
        assert_eq!(extract_tags("#a then #a again"), vec!["a", "a"]);
    }

    #[test]
    fn no_tags_yields_empty() {
        assert!(extract_tags("nothing here").is_empty());
    }

    #[test]
    fn heading_markers_are_not_tags() {
        // "# Heading" and "## Heading" have no word character directly
        // after the hash.
        assert!(extract_tags("# Heading\n\n## Another\n").is_empty());
    }

    #[test]
    fn tags_are_ascii_case_sensitive() {
        assert_eq!(extract_tags("#Tag #tag_2"), vec!["Tag", "tag_2"]);
    }

    // ── strip_tags ───────────────────────────────────────────────────────

    #[test]
    fn strips_tags_and_trims() {
        assert_eq!(strip_tags("  #a body text #b/c  "), "body text");
    }

    #[test]
    fn strip_leaves_untagged_body_alone() {
        assert_eq!(strip_tags("just text"), "just text");
    }

    // ── synthesize ───────────────────────────────────────────────────────

    #[test]
    fn synthesizes_full_block() {
        let out = synthesize("body #a more #b/c", "My Note", fixed_now());
        let expected = "---\n\
                        title: My Note\n\
                        date: 2024-05-01T09:30:00.000Z\n\
                        draft: false\n\
                        tags: [a, b/c]\n\
                        categories: [2024]\n\
                        ---\n\n\
                        body  more";
        assert_eq!(out, expected);
    }

    #[test]
    fn category_is_year_of_timestamp() {
        let now = Utc.with_ymd_and_hms(1999, 12, 31, 23, 59, 59).unwrap();
        let out = synthesize("x", "t", now);
        assert!(out.contains("categories: [1999]"));
    }

    #[test]
    fn tags_absent_from_output_body() {
        let out = synthesize("keep #a this #b/c", "t", fixed_now());
        let body = out.split("---\n\n").nth(1).unwrap();
        assert!(!body.contains("#a"));
        assert!(!body.contains("#b/c"));
    }

    #[test]
    fn empty_tag_list_renders_empty_brackets() {
        let out = synthesize("plain", "t", fixed_now());
        assert!(out.contains("tags: []"));
    }

    #[test]
    fn title_is_verbatim_and_unescaped() {
        // Known limitation: a colon in the title yields malformed YAML.
        let out = synthesize("x", "a: b", fixed_now());
        assert!(out.contains("title: a: b"));
    }

    #[test]
    fn deterministic_for_fixed_clock() {
        let a = synthesize("body #t", "n", fixed_now());
        let b = synthesize("body #t", "n", fixed_now());
        assert_eq!(a, b);
    }
}
