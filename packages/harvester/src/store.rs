//! Loaded corpus and the process-wide handle to it.
//!
//! A [`Corpus`] pairs the regulations with their index and can be built freely.
//! The functions at module level manage one shared `Arc<Corpus>` for binaries that
//! load the snapshot once and serve many queries; it is set with [`init`] or
//! [`reload_from`] and cleared with [`invalidate`].

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use crate::config::validate_regulation_id;
use crate::error::{HarvesterError, Result};
use crate::search::{build_index, search, IndexEntry, SearchResult};
use crate::snapshot::load_snapshot;
use crate::types::{CorpusStats, Regulation};

static CURRENT: RwLock<Option<Arc<Corpus>>> = RwLock::new(None);

/// Regulations plus their index, rebuilt together.
#[derive(Debug, Clone)]
pub struct Corpus {
    regulations: Vec<Regulation>,
    index: Vec<IndexEntry>,
}

impl Corpus {
    /// Build a corpus and its index.
    #[must_use]
    pub fn new(regulations: Vec<Regulation>) -> Self {
        let index = build_index(&regulations);
        Self { regulations, index }
    }

    /// Load a corpus from a snapshot file.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::new(load_snapshot(path)?))
    }

    /// Regulations in corpus order.
    #[must_use]
    pub fn regulations(&self) -> &[Regulation] {
        &self.regulations
    }

    /// Index entries, one per regulation.
    #[must_use]
    pub fn index(&self) -> &[IndexEntry] {
        &self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.regulations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regulations.is_empty()
    }

    /// Look up a regulation by id.
    pub fn get(&self, id: &str) -> Result<&Regulation> {
        validate_regulation_id(id)?;
        self.regulations
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| HarvesterError::RegulationNotFound(id.to_string()))
    }

    /// Rank the corpus against a query.
    #[must_use]
    pub fn search(&self, query: &str, top_k: usize) -> Vec<SearchResult<'_>> {
        search(query, &self.index, &self.regulations, top_k)
    }

    #[must_use]
    pub fn stats(&self) -> CorpusStats {
        CorpusStats::from_regulations(&self.regulations)
    }
}

/// Install `corpus` as the process-wide corpus, replacing any previous one.
pub fn init(corpus: Corpus) -> Arc<Corpus> {
    let corpus = Arc::new(corpus);
    *CURRENT.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&corpus));
    tracing::debug!(regulations = corpus.len(), "Corpus installed");
    corpus
}

/// The process-wide corpus.
///
/// Returns [`HarvesterError::CorpusNotLoaded`] before [`init`] or after [`invalidate`].
pub fn current() -> Result<Arc<Corpus>> {
    CURRENT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .ok_or(HarvesterError::CorpusNotLoaded)
}

/// Load a snapshot and install it as the process-wide corpus.
///
/// On failure the previously installed corpus stays in place.
pub fn reload_from(path: &Path) -> Result<Arc<Corpus>> {
    let corpus = Corpus::load(path)?;
    tracing::info!(path = %path.display(), regulations = corpus.len(), "Corpus loaded");
    Ok(init(corpus))
}

/// Drop the process-wide corpus.
pub fn invalidate() {
    CURRENT.write().unwrap_or_else(PoisonError::into_inner).take();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::save_snapshot;
    use crate::types::Clause;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn regulations() -> Vec<Regulation> {
        vec![
            Regulation::new(
                "REG-001",
                "1_학칙.xml",
                "학칙",
                &["학칙".to_string(), "제1조(목적) 휴학".to_string()],
                vec![Clause::new("제1조", "목적", "제1조(목적) 휴학")],
            ),
            Regulation::new(
                "REG-002",
                "2_장학.xml",
                "장학금 지급 규정",
                &["장학금 지급".to_string()],
                vec![],
            ),
        ]
    }

    #[test]
    fn test_corpus_lookup() {
        let corpus = Corpus::new(regulations());

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.index().len(), 2);
        assert_eq!(corpus.get("REG-002").unwrap().display_name, "장학금 지급 규정");
        assert!(matches!(
            corpus.get("REG-009"),
            Err(HarvesterError::RegulationNotFound(_))
        ));
        assert!(matches!(
            corpus.get("nine"),
            Err(HarvesterError::InvalidRegulationId(_))
        ));
    }

    #[test]
    fn test_corpus_search_and_stats() {
        let corpus = Corpus::new(regulations());

        let results = corpus.search("장학금", 10);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score, 11);

        let stats = corpus.stats();
        assert_eq!(stats.regulations, 2);
        assert_eq!(stats.clauses, 1);
    }

    // Process-wide state is shared between tests, so the lifecycle is checked in one test.
    #[test]
    fn test_process_wide_lifecycle() {
        invalidate();
        assert!(matches!(current(), Err(HarvesterError::CorpusNotLoaded)));

        init(Corpus::new(regulations()));
        assert_eq!(current().unwrap().len(), 2);

        let dir = tempdir().unwrap();
        let path = dir.path().join("regulations.json");
        save_snapshot(&regulations()[..1], &path).unwrap();
        reload_from(&path).unwrap();
        assert_eq!(current().unwrap().len(), 1);

        assert!(reload_from(&dir.path().join("missing.json")).is_err());
        assert_eq!(current().unwrap().len(), 1);

        invalidate();
        assert!(current().is_err());
    }
}
