//! Line classifier for the markdown subset found in generated text.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::BULLET_PREFIX;
use crate::document::Block;

/// Bold emphasis `**text**`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static BOLD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid regex"));

/// Kind of one trimmed line of free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    /// `## title` (any number of leading `#`, at least two); markers removed.
    Heading(String),
    /// `- item` or `* item`; marker removed.
    Bullet(String),
    /// A markdown table row, not rendered.
    TableRowSkip,
    /// Anything else, with bold markup removed.
    Plain(String),
}

/// Remove `**` emphasis, keeping the enclosed text.
///
/// # Examples
/// ```
/// use regulation_hwpml::markdown::strip_bold;
///
/// assert_eq!(strip_bold("**제3조**를 개정한다"), "제3조를 개정한다");
/// ```
#[must_use]
pub fn strip_bold(line: &str) -> Cow<'_, str> {
    BOLD_PATTERN.replace_all(line, "$1")
}

/// Classify one line. Surrounding whitespace is ignored.
#[must_use]
pub fn classify_line(line: &str) -> LineKind {
    let line = line.trim();
    if line.is_empty() {
        LineKind::Blank
    } else if line.starts_with("##") {
        LineKind::Heading(line.trim_start_matches('#').trim().to_string())
    } else if let Some(rest) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        LineKind::Bullet(rest.to_string())
    } else if line.starts_with('|') {
        LineKind::TableRowSkip
    } else {
        LineKind::Plain(strip_bold(line).into_owned())
    }
}

/// Classify every line of `text`.
pub fn classify_lines(text: &str) -> impl Iterator<Item = LineKind> + '_ {
    text.split('\n').map(classify_line)
}

impl LineKind {
    /// The body block for this line; `None` for skipped table rows.
    #[must_use]
    pub fn into_block(self) -> Option<Block> {
        match self {
            LineKind::Blank => Some(Block::Blank),
            LineKind::Heading(text) => Some(Block::heading(text)),
            LineKind::Bullet(text) => Some(Block::text(format!("{BULLET_PREFIX}{text}"))),
            LineKind::TableRowSkip => None,
            LineKind::Plain(text) => Some(Block::text(text)),
        }
    }
}
