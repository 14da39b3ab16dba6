//! `[[Title]]` reference extraction.

use regex::Regex;
use std::sync::LazyLock;

/// `[[`, one or more non-`]` characters, `]]`
static WIKILINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^\]]+)\]\]").expect("wikilink pattern is valid"));

/// Lazily yield the raw target of every `[[...]]` reference in `body`.
///
/// Targets are returned verbatim (no trimming, no case folding), left to
/// right and never overlapping. Malformed or unterminated brackets are
/// skipped. Calling again on the same body restarts the scan.
pub fn extract_references(body: &str) -> impl Iterator<Item = &str> + '_ {
    WIKILINK_RE
        .captures_iter(body)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(body: &str) -> Vec<&str> {
        extract_references(body).collect()
    }

    #[test]
    fn test_single_reference() {
        assert_eq!(refs("See [[Foo]] for more"), vec!["Foo"]);
    }

    #[test]
    fn test_multiple_in_order() {
        assert_eq!(refs("[[B]] then [[A]] then [[B]]"), vec!["B", "A", "B"]);
    }

    #[test]
    fn test_verbatim_target() {
        assert_eq!(refs("[[ Spaced Title ]]"), vec![" Spaced Title "]);
        assert_eq!(refs("[[foo]]"), vec!["foo"]);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(refs("").is_empty());
        assert!(refs("no links here").is_empty());
        assert!(refs("[single] and [[unterminated").is_empty());
        assert!(refs("[[]]").is_empty());
    }

    #[test]
    fn test_first_closing_brackets_end_match() {
        assert_eq!(refs("[[a]]b]]"), vec!["a"]);
        assert!(refs("[[a]b]]").is_empty());
    }

    #[test]
    fn test_nested_open_brackets() {
        assert_eq!(refs("[[[Foo]]"), vec!["[Foo"]);
    }

    #[test]
    fn test_multiline_targets() {
        assert_eq!(refs("[[Line\nBreak]]"), vec!["Line\nBreak"]);
    }

    #[test]
    fn test_restartable() {
        let body = "[[X]] [[Y]]";
        assert_eq!(refs(body), refs(body));
    }
}
