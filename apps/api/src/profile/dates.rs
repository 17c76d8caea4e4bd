use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

/// Format the job-board date picker stores, e.g. "March 14 2021".
const STORED_FORMAT: &str = "%B %d %Y";
const DISPLAY_FORMAT: &str = "%B %Y";

// chrono accepts short years and abbreviated month names; the date picker
// only ever writes the full month name and a four-digit year.
static STORED_SHAPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(january|february|march|april|may|june|july|august|september|october|november|december) \d{1,2} \d{4}$",
    )
    .unwrap()
});

/// Converts "March 14 2021" into "March 2021". Anything unparseable,
/// including the empty string, yields an empty string.
pub fn normalize_date(text: &str) -> String {
    if !STORED_SHAPE_RE.is_match(text) {
        return String::new();
    }
    NaiveDate::parse_from_str(text, STORED_FORMAT)
        .map(|date| date.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_default()
}
