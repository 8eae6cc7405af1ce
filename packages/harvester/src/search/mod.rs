//! Keyword relevance search over the corpus.
//!
//! Scores are raw substring occurrence counts plus a fixed bonus for query words
//! found in a document's display name. Matching is by substring, so a query word
//! also hits compounds that contain it (`교육` in `교육과정`).

mod engine;
mod index;

pub use engine::{
    count_occurrences, excerpt, find_relevant_clauses, query_words, search, ClauseMatch,
    SearchResult,
};
pub use index::{build_index, IndexEntry};
