//! Text Sanitizer — flattens rich-text description fields to a single line.

use std::sync::LazyLock;

use regex::Regex;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*[\x{2022}\x{f0a7}]\s*").unwrap());
static LEADING_TABS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s*\t+").unwrap());
static BLANK_LINES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\n\r]\s*[\n\r]+").unwrap());

/// Characters stripped from both ends. U+2019 is a stray closing quote
/// left behind by word-processor pastes.
const EDGE_CHARS: &[char] = &['\n', '\r', '\t', '\u{2019}'];

/// Removes markup, bullet glyphs, and line structure from a description.
///
/// Order matters: tags go first so `<li>` wrappers don't shield bullets,
/// and blank-line runs collapse before the remaining breaks become spaces.
pub fn sanitize(text: &str) -> String {
    let text = TAG_RE.replace_all(text, "");
    let text = text.trim_matches(EDGE_CHARS);
    let text = BULLET_RE.replace_all(text, "");
    let text = LEADING_TABS_RE.replace_all(&text, "");
    let text = BLANK_LINES_RE.replace_all(&text, "\n");
    text.replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tags_and_collapses_paragraphs() {
        assert_eq!(sanitize("<p>Led a team</p>\n\n\nof 5"), "Led a team of 5");
    }

    #[test]
    fn test_keeps_inner_text_of_tags() {
        assert_eq!(
            sanitize("Built <strong>three</strong> <a href=\"x\">services</a>"),
            "Built three services"
        );
    }

    #[test]
    fn test_trims_edge_artifacts() {
        assert_eq!(sanitize("\n\t\u{2019}Shipped v2\u{2019}\r\n"), "Shipped v2");
    }

    #[test]
    fn test_removes_leading_bullets_per_line() {
        assert_eq!(
            sanitize("• Hired 4 engineers\n\u{f0a7} Cut costs 20%"),
            "Hired 4 engineers Cut costs 20%"
        );
    }

    #[test]
    fn test_removes_leading_tabs_per_line() {
        assert_eq!(sanitize("Duties:\n\t\tOn-call rotation"), "Duties: On-call rotation");
    }

    #[test]
    fn test_crlf_runs_become_single_space() {
        assert_eq!(sanitize("One\r\n\r\nTwo\r\nThree"), "One Two Three");
    }

    #[test]
    fn test_inline_bullet_is_kept() {
        assert_eq!(sanitize("Rust • Go"), "Rust • Go");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitize(""), "");
    }
}
