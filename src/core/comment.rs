use regex::Regex;
use std::sync::LazyLock;

static RE_DELIMITERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[/*]+").expect("Invalid delimiter regex"));

static RE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Collapse a raw documentation comment into a single-line description.
///
/// Every `/` and `*` is dropped, which also takes care of the `*` markers
/// Javadoc puts at the start of continuation lines. Runs of whitespace,
/// newlines included, become one space and the result is trimmed.
/// Normalizing an already normalized comment returns it unchanged.
pub fn normalize_comment(raw: &str) -> String {
    let stripped = RE_DELIMITERS.replace_all(raw, "");
    let collapsed = RE_WHITESPACE.replace_all(&stripped, " ");
    collapsed.trim().to_string()
}
