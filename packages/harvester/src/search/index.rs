//! Corpus index: a lowercase projection of each regulation.

use crate::types::Regulation;

/// Read-optimized view of one regulation, 1:1 with the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Regulation id.
    pub id: String,

    /// Display name as stored on the regulation.
    pub display_name: String,

    /// Lowercased display name, used for the name bonus.
    pub name_lower: String,

    /// Lowercased full text.
    pub text_lower: String,

    /// Number of clauses.
    pub clause_count: usize,

    /// Length of the full text in characters.
    pub char_count: usize,
}

impl From<&Regulation> for IndexEntry {
    fn from(regulation: &Regulation) -> Self {
        Self {
            id: regulation.id.clone(),
            display_name: regulation.display_name.clone(),
            name_lower: regulation.display_name.to_lowercase(),
            text_lower: regulation.full_text.to_lowercase(),
            clause_count: regulation.clause_count,
            char_count: regulation.char_count,
        }
    }
}

/// Build the index for a regulation collection.
///
/// Pure and deterministic; entry `i` describes `regulations[i]`. Rebuild it
/// whenever the collection changes.
#[must_use]
pub fn build_index(regulations: &[Regulation]) -> Vec<IndexEntry> {
    regulations.iter().map(IndexEntry::from).collect()
}
