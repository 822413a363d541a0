//! Wiki-link to plain-markdown rewriting.
//!
//! Two global, single-pass replacement rules, applied in order:
//!
//! 1. Embedded image `![[X]]` → the literal text `![]($1)`
//! 2. Cross-reference `[[X]]` → `X`
//!
//! Nested or malformed brackets are not defended against.

use regex::{NoExpand, Regex};

/// Embedded image reference: `![[name]]`.
pub(crate) const IMAGE_PATTERN: &str = r"!\[\[([^\]]+)\]\]";

/// Plain wiki cross-reference: `[[target]]`.
const LINK_PATTERN: &str = r"\[\[([^\]]+)\]\]";

/// Rewrite both wiki-link syntaxes in `text` to plain markdown.
///
/// The image rule replaces every `![[X]]` with the *literal* string
/// `![]($1)` — the captured filename is not substituted into the URL. Every
/// bundle this tool has ever produced carries that placeholder, so it is kept
/// for output parity rather than silently changed; see the tests for the
/// intended-versus-actual forms.
///
/// The cross-reference rule then drops the bracket syntax, leaving the raw
/// target as visible text.
///
/// # Examples
///
/// ```
/// use vault2hugo_core::links::rewrite_wiki_links;
///
/// assert_eq!(rewrite_wiki_links("See [[Other Note]]"), "See Other Note");
/// assert_eq!(rewrite_wiki_links("![[pic.png]]"), "![]($1)");
/// ```
pub fn rewrite_wiki_links(text: &str) -> String {
    let image_re = Regex::new(IMAGE_PATTERN).unwrap();
    let link_re = Regex::new(LINK_PATTERN).unwrap();

    // NoExpand keeps "$1" literal instead of expanding the capture.
    let rewritten = image_re.replace_all(text, NoExpand("![]($1)"));
    link_re.replace_all(&rewritten, "$1").into_owned()
}
