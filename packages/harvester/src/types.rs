//! Core data types for the harvester.
//!
//! These types represent regulation documents and their numbered clauses.
//! Serialized field names follow the corpus snapshot format
//! (`filename`, `name`, `articles`, `article_count`).

use serde::{Deserialize, Serialize};

/// A numbered, titled clause (조문) of a regulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    /// Normalized identifier (e.g., "제3조", "제3조의2").
    pub number: String,

    /// Short label from the identifier line (e.g., "목적").
    pub title: String,

    /// Identifier paragraph plus every following paragraph up to the next identifier,
    /// joined with newlines.
    pub content: String,
}

impl Clause {
    /// Create a new clause.
    #[must_use]
    pub fn new(
        number: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            title: title.into(),
            content: content.into(),
        }
    }

    /// Heading shown in listings, e.g. `제1조 (목적)`.
    #[must_use]
    pub fn heading(&self) -> String {
        format!("{} ({})", self.number, self.title)
    }
}

/// One regulation document of the corpus.
///
/// Created once per source file during ingestion and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Regulation {
    /// Corpus-unique identifier assigned by ingestion order (e.g., "REG-001").
    pub id: String,

    /// Source file name.
    #[serde(rename = "filename")]
    pub source_name: String,

    /// Best-effort derived title.
    #[serde(rename = "name")]
    pub display_name: String,

    /// Paragraphs joined with newlines, in source order.
    pub full_text: String,

    /// Extracted clauses in source order (may be empty).
    #[serde(rename = "articles")]
    pub clauses: Vec<Clause>,

    /// Number of clauses.
    #[serde(rename = "article_count")]
    pub clause_count: usize,

    /// Length of `full_text` in characters.
    pub char_count: usize,
}

impl Regulation {
    /// Build a regulation, deriving `full_text` and the counters from the paragraphs.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        source_name: impl Into<String>,
        display_name: impl Into<String>,
        paragraphs: &[String],
        clauses: Vec<Clause>,
    ) -> Self {
        let full_text = paragraphs.join("\n");
        let char_count = full_text.chars().count();
        Self {
            id: id.into(),
            source_name: source_name.into(),
            display_name: display_name.into(),
            full_text,
            clause_count: clauses.len(),
            clauses,
            char_count,
        }
    }

    /// Whether clause extraction produced anything for this document.
    ///
    /// Callers search the full text when this is `false`.
    #[must_use]
    pub fn has_clauses(&self) -> bool {
        !self.clauses.is_empty()
    }
}

/// A source file that could not be turned into a regulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestFailure {
    /// Source file name.
    pub source_name: String,

    /// Human-readable cause.
    pub reason: String,
}

/// Outcome of a batch ingestion pass.
#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    /// Successfully parsed regulations in ingestion order.
    pub regulations: Vec<Regulation>,

    /// Files that failed, in ingestion order.
    pub failures: Vec<IngestFailure>,
}

impl IngestReport {
    /// Number of files attempted.
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.regulations.len() + self.failures.len()
    }

    /// Aggregate counters over the successful documents.
    #[must_use]
    pub fn stats(&self) -> CorpusStats {
        CorpusStats::from_regulations(&self.regulations)
    }
}

/// Aggregate figures over a set of regulations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorpusStats {
    /// Number of regulations.
    pub regulations: usize,

    /// Total clause count.
    pub clauses: usize,

    /// Total character count.
    pub chars: usize,
}

impl CorpusStats {
    /// Sum the counters of the given regulations.
    #[must_use]
    pub fn from_regulations(regulations: &[Regulation]) -> Self {
        regulations.iter().fold(Self::default(), |acc, r| Self {
            regulations: acc.regulations + 1,
            clauses: acc.clauses + r.clause_count,
            chars: acc.chars + r.char_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn paragraphs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_clause_heading() {
        let clause = Clause::new("제3조의2", "정의", "제3조의2(정의) ...");
        assert_eq!(clause.heading(), "제3조의2 (정의)");
    }

    #[test]
    fn test_regulation_counts_characters_not_bytes() {
        let reg = Regulation::new("REG-001", "a.xml", "학칙", &paragraphs(&["학칙", "총칙"]), vec![]);
        assert_eq!(reg.full_text, "학칙\n총칙");
        assert_eq!(reg.char_count, 5);
        assert_eq!(reg.clause_count, 0);
        assert!(!reg.has_clauses());
    }

    #[test]
    fn test_regulation_snapshot_field_names() {
        let reg = Regulation::new(
            "REG-002",
            "2-1_학칙.xml",
            "학칙",
            &paragraphs(&["제1조(목적) 본문"]),
            vec![Clause::new("제1조", "목적", "제1조(목적) 본문")],
        );
        let value = serde_json::to_value(&reg).unwrap();
        assert_eq!(value["filename"], "2-1_학칙.xml");
        assert_eq!(value["name"], "학칙");
        assert_eq!(value["article_count"], 1);
        assert_eq!(value["articles"][0]["number"], "제1조");
        assert_eq!(value["char_count"], 10);
    }

    #[test]
    fn test_corpus_stats() {
        let a = Regulation::new("REG-001", "a.xml", "a", &paragraphs(&["abc"]), vec![]);
        let b = Regulation::new(
            "REG-002",
            "b.xml",
            "b",
            &paragraphs(&["제1조(목적)"]),
            vec![Clause::new("제1조", "목적", "제1조(목적)")],
        );
        let stats = CorpusStats::from_regulations(&[a, b]);
        assert_eq!(
            stats,
            CorpusStats {
                regulations: 2,
                clauses: 1,
                chars: 10,
            }
        );
    }
}
