//! Clause boundary detection.

use regex::Regex;
use std::sync::LazyLock;

/// Identifier token (`제3조`, `제3조의2`) followed by a parenthesized title.
///
/// Both half-width and full-width parentheses are accepted; whitespace between the
/// identifier and the opening parenthesis is allowed.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CLAUSE_HEADING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(제\d+조(?:의\d+)?)\s*[(（](.+?)[)）]").expect("valid regex")
});

/// Identifier and title of a paragraph that opens a clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClauseHeading {
    /// Identifier token, e.g. "제3조의2".
    pub number: String,

    /// Parenthesized title without the parentheses.
    pub title: String,
}

/// Test whether a paragraph opens a new clause.
///
/// # Examples
/// ```
/// use regulation_harvester::splitting::match_clause_heading;
///
/// let heading = match_clause_heading("제3조의2（정의） 이 규정에서").unwrap();
/// assert_eq!(heading.number, "제3조의2");
/// assert_eq!(heading.title, "정의");
///
/// assert!(match_clause_heading("제3조에 따른 위원회").is_none());
/// ```
pub fn match_clause_heading(paragraph: &str) -> Option<ClauseHeading> {
    let caps = CLAUSE_HEADING_PATTERN.captures(paragraph)?;
    Some(ClauseHeading {
        number: caps.get(1)?.as_str().to_string(),
        title: caps.get(2)?.as_str().to_string(),
    })
}
