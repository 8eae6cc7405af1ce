//! Reverse parsing of comparison tables out of generated draft text.
//!
//! Drafts normally carry a markdown table (`| 현행 | 개정안 |`). When they do
//! not, prose sections introduced by `현행:` / `개정안:` style markers are
//! accepted as a single pair.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{
    AFTER_HEADER_LABELS, AFTER_MARKER, BEFORE_HEADER_LABELS, BEFORE_MARKER, MARKER_PUNCTUATION,
};
use crate::payload::RevisionPair;

/// Markdown table rule line, e.g. `|------|:---:|`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SEPARATOR_ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|[\s\-:]+\|").expect("valid regex"));

fn is_header_row(before: &str, after: &str) -> bool {
    BEFORE_HEADER_LABELS.contains(&before) || AFTER_HEADER_LABELS.contains(&after)
}

fn table_rows(text: &str) -> Vec<RevisionPair> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| line.starts_with('|') && !SEPARATOR_ROW.is_match(line))
        .filter_map(|line| {
            let segments: Vec<&str> = line.split('|').collect();
            // Drop the segments outside the outer delimiters.
            let cells: Vec<&str> = segments
                .get(1..segments.len().saturating_sub(1))
                .unwrap_or_default()
                .iter()
                .map(|cell| cell.trim())
                .collect();
            match cells.as_slice() {
                [before, after, ..] if !is_header_row(before, after) => {
                    Some(RevisionPair::new(*before, *after))
                }
                _ => None,
            }
        })
        .filter(|pair| !pair.before.is_empty() || !pair.after.is_empty())
        .collect()
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Before,
    After,
}

fn is_marker(line: &str, keyword: &str) -> bool {
    line.contains(keyword) && line.contains(MARKER_PUNCTUATION)
}

fn marked_sections(text: &str) -> Option<RevisionPair> {
    let mut before = String::new();
    let mut after = String::new();
    let mut section = None;

    for line in text.split('\n') {
        if is_marker(line, BEFORE_MARKER) {
            section = Some(Section::Before);
            continue;
        }
        if is_marker(line, AFTER_MARKER) {
            section = Some(Section::After);
            continue;
        }
        let target = match section {
            Some(Section::Before) => &mut before,
            Some(Section::After) => &mut after,
            None => continue,
        };
        target.push_str(line);
        target.push('\n');
    }

    let pair = RevisionPair::new(before.trim(), after.trim());
    (!pair.before.is_empty() || !pair.after.is_empty()).then_some(pair)
}

/// Extract comparison rows from draft text.
///
/// Table rows come first; the marker-section fallback is only consulted when
/// no table row was found. Returns an empty list when neither applies.
///
/// # Examples
/// ```
/// use regulation_hwpml::pairs::parse_pairs;
///
/// let draft = "| 현행 | 개정안 |\n|---|---|\n| 제1조 종전 | 제1조 변경 |";
/// let pairs = parse_pairs(draft);
/// assert_eq!(pairs.len(), 1);
/// assert_eq!(pairs[0].after, "제1조 변경");
///
/// assert!(parse_pairs("개정 방향을 검토하였다.").is_empty());
/// ```
#[must_use]
pub fn parse_pairs(text: &str) -> Vec<RevisionPair> {
    let rows = table_rows(text);
    if !rows.is_empty() {
        return rows;
    }
    marked_sections(text).into_iter().collect()
}

/// [`parse_pairs`], or the single placeholder pair carrying the whole draft.
#[must_use]
pub fn pairs_or_placeholder(draft: &str) -> Vec<RevisionPair> {
    let pairs = parse_pairs(draft);
    if pairs.is_empty() {
        tracing::debug!("No comparison rows in draft, using placeholder row");
        vec![RevisionPair::placeholder(draft)]
    } else {
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_markdown_table() {
        let draft = "\
다음과 같이 개정을 제안합니다.

| 현행 | 개정안 |
|------|--------|
| 제5조(휴학) 휴학은 2년 이내 | 제5조(휴학) 휴학은 3년 이내 |
| (신설) | 제5조의2(창업휴학) 신설 |
|||

위 내용은 검토가 필요합니다.";

        assert_eq!(
            parse_pairs(draft),
            vec![
                RevisionPair::new("제5조(휴학) 휴학은 2년 이내", "제5조(휴학) 휴학은 3년 이내"),
                RevisionPair::new("(신설)", "제5조의2(창업휴학) 신설"),
            ]
        );
    }

    #[test]
    fn test_header_variants_and_aligned_separator() {
        let draft = "| 現行 | 改正案 |\n|:---|:---:|\n| 가 | 나 |\n| 현 행 | 비고 |";
        assert_eq!(parse_pairs(draft), vec![RevisionPair::new("가", "나")]);
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let draft = "| 현행 | 개정안 | 비고 |\n| 가 | 나 | 자구 수정 |\n| 단일 셀 |";
        assert_eq!(parse_pairs(draft), vec![RevisionPair::new("가", "나")]);
    }

    #[test]
    fn test_marker_sections_fallback() {
        let draft = "【현행】\n제3조 종전 문구\n\n【개정안】\n제3조 새 문구\n② 항 신설\n";
        assert_eq!(
            parse_pairs(draft),
            vec![RevisionPair::new("제3조 종전 문구", "제3조 새 문구\n② 항 신설")]
        );
    }

    #[test]
    fn test_colon_markers_fallback() {
        let draft = "현행: \n제7조 기존\n개정안:\n제7조 변경";
        assert_eq!(
            parse_pairs(draft),
            vec![RevisionPair::new("제7조 기존", "제7조 변경")]
        );
    }

    #[test]
    fn test_plain_prose_yields_nothing() {
        assert!(parse_pairs("휴학 기간 연장이 필요하다는 의견이 많습니다.").is_empty());
        assert!(parse_pairs("").is_empty());
        // Markers without any following text do not produce a row.
        assert!(parse_pairs("현행:\n개정안:\n").is_empty());
    }

    #[test]
    fn test_pairs_or_placeholder() {
        let draft = "표 없이 작성된 초안";
        assert_eq!(
            pairs_or_placeholder(draft),
            vec![RevisionPair::placeholder(draft)]
        );
    }
}
