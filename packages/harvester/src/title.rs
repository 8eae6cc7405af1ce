//! Display-name derivation for regulation documents.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::config::{TITLE_KEYWORDS, TITLE_MAX_CHARS, TITLE_SCAN_PARAGRAPHS};

/// Leading ordering prefix of source file names, e.g. `2-1__` or `12_`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static FILENAME_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[-_]\d*[-_]*").expect("valid regex"));

/// Derive a display name from the file name alone.
///
/// Strips the numeric ordering prefix and replaces underscores with spaces.
/// File names are NFC-normalized first, so decomposed Hangul compares equal
/// to precomposed text.
///
/// # Examples
/// ```
/// use regulation_harvester::title::name_from_filename;
///
/// assert_eq!(
///     name_from_filename("2-1__차의과학대학교_학칙_2025_09_01__.xml"),
///     "차의과학대학교 학칙 2025 09 01"
/// );
/// ```
pub fn name_from_filename(source_name: &str) -> String {
    let normalized: String = source_name.nfc().collect();
    let stem = Path::new(&normalized)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| normalized.clone());
    let stripped = FILENAME_PREFIX.replace(&stem, "");
    stripped.replace('_', " ").trim().to_string()
}

/// Whether a paragraph looks like a regulation title.
fn is_title_paragraph(paragraph: &str) -> bool {
    paragraph.chars().count() < TITLE_MAX_CHARS
        && TITLE_KEYWORDS.iter().any(|kw| paragraph.contains(kw))
}

/// Best-effort display name for a regulation.
///
/// Prefers the first short paragraph among the leading paragraphs that carries a
/// regulation keyword; otherwise uses the file-name-derived name, and the raw
/// file name when that is empty.
pub fn guess_display_name<S: AsRef<str>>(source_name: &str, paragraphs: &[S]) -> String {
    if let Some(title) = paragraphs
        .iter()
        .take(TITLE_SCAN_PARAGRAPHS)
        .map(|p| p.as_ref())
        .find(|p| is_title_paragraph(p))
    {
        return title.trim().to_string();
    }

    let name = name_from_filename(source_name);
    if name.is_empty() {
        source_name.to_string()
    } else {
        name
    }
}
