//! Scoring and ranking of regulations and clauses against a query.

use crate::config::{MAX_RELEVANT_CLAUSES, NAME_MATCH_BONUS};
use crate::search::index::IndexEntry;
use crate::types::{Clause, Regulation};

/// A regulation matched by a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult<'a> {
    /// The matched regulation (borrowed from the corpus).
    pub regulation: &'a Regulation,

    /// Relevance score, always positive for returned results.
    pub score: u64,
}

/// A clause matched by a query within one regulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClauseMatch<'a> {
    /// The matched clause.
    pub clause: &'a Clause,

    /// Occurrence count of the query words in the clause content.
    pub score: u64,
}

/// Split a query into lowercase whitespace-separated words.
///
/// # Examples
/// ```
/// use regulation_harvester::search::query_words;
///
/// assert_eq!(query_words("  AI  교육과정 "), vec!["ai", "교육과정"]);
/// assert!(query_words("   ").is_empty());
/// ```
#[must_use]
pub fn query_words(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(String::from)
        .collect()
}

/// Count non-overlapping occurrences of `word` in `text`.
///
/// # Examples
/// ```
/// use regulation_harvester::search::count_occurrences;
///
/// assert_eq!(count_occurrences("연구비와 연구비관리", "연구비"), 2);
/// assert_eq!(count_occurrences("aaaa", "aa"), 2);
/// ```
#[must_use]
pub fn count_occurrences(text: &str, word: &str) -> u64 {
    if word.is_empty() {
        return 0;
    }
    text.matches(word).count() as u64
}

fn score_entry(entry: &IndexEntry, words: &[String]) -> u64 {
    words
        .iter()
        .map(|word| {
            let count = count_occurrences(&entry.text_lower, word);
            if count > 0 && entry.name_lower.contains(word.as_str()) {
                count + NAME_MATCH_BONUS
            } else {
                count
            }
        })
        .sum()
}

/// Rank regulations against a free-text query.
///
/// Each query word contributes its substring occurrence count in the lowercased
/// full text, plus [`NAME_MATCH_BONUS`] when a word found in the text also occurs
/// in the display name. Zero-score documents are dropped.
/// Equal scores keep corpus order.
///
/// An empty query returns no results.
#[must_use]
pub fn search<'a>(
    query: &str,
    index: &[IndexEntry],
    regulations: &'a [Regulation],
    top_k: usize,
) -> Vec<SearchResult<'a>> {
    let words = query_words(query);
    if words.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<SearchResult<'a>> = index
        .iter()
        .zip(regulations)
        .filter_map(|(entry, regulation)| {
            let score = score_entry(entry, &words);
            (score > 0).then_some(SearchResult { regulation, score })
        })
        .collect();

    // Stable sort: ties stay in corpus order.
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(top_k);

    tracing::debug!(query, matches = results.len(), "Corpus search");
    results
}

/// Rank the clauses of one regulation against a query.
///
/// Same per-word occurrence scoring as [`search`] on each clause's lowercased
/// content, without a name bonus. Returns at most [`MAX_RELEVANT_CLAUSES`]
/// clauses; ties keep clause order. A regulation without clauses yields an empty
/// list and callers fall back to its full text.
#[must_use]
pub fn find_relevant_clauses<'a>(regulation: &'a Regulation, query: &str) -> Vec<ClauseMatch<'a>> {
    let words = query_words(query);
    if words.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<ClauseMatch<'a>> = regulation
        .clauses
        .iter()
        .filter_map(|clause| {
            let content = clause.content.to_lowercase();
            let score: u64 = words.iter().map(|w| count_occurrences(&content, w)).sum();
            (score > 0).then_some(ClauseMatch { clause, score })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches.truncate(MAX_RELEVANT_CLAUSES);
    matches
}

/// Shorten text to `max_chars` characters, appending `...` when cut.
///
/// # Examples
/// ```
/// use regulation_harvester::search::excerpt;
///
/// assert_eq!(excerpt("제1조(목적)", 3), "제1조...");
/// assert_eq!(excerpt("짧은 글", 300), "짧은 글");
/// ```
#[must_use]
pub fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
        None => text.to_string(),
    }
}
