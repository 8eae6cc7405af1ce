//! Analysis, amendment and Q&A workflows over a loaded corpus.
//!
//! Each workflow makes at most one collaborator call and turns the reply into
//! an HWPML document. Collaborator failures are labeled with the step that
//! made the call (`analysis`, `amendment`, `chat`).

use regulation_harvester::{find_relevant_clauses, Corpus, Regulation};
use regulation_hwpml::{
    pairs_or_placeholder, AmendmentMetadata, Document, QaPair, RelatedRegulation, RevisionPair,
    Synthesizer,
};
use tracing::{info, warn};

use crate::client::{LlmClient, Message, Role};
use crate::error::{AssistantError, Result};
use crate::prompt::{self, ANALYSIS_CONTEXT_RESULTS};

/// Result of [`Assistant::analyze`].
#[derive(Debug)]
pub enum AnalysisOutcome {
    /// The query matched nothing; the collaborator was not consulted.
    NoMatches,
    Report {
        analysis: String,
        document: Document,
    },
}

/// Result of [`Assistant::draft_amendment`].
#[derive(Debug)]
pub struct AmendmentOutcome {
    pub draft: String,
    /// Comparison rows recovered from the draft, or the single placeholder row.
    pub pairs: Vec<RevisionPair>,
    pub document: Document,
}

/// Conversation about one regulation.
///
/// History alternates user and assistant messages; a failed turn is kept with
/// an error answer.
#[derive(Debug, Clone)]
pub struct QaSession<'r> {
    regulation: &'r Regulation,
    history: Vec<Message>,
}

impl<'r> QaSession<'r> {
    pub fn new(regulation: &'r Regulation) -> Self {
        Self {
            regulation,
            history: Vec::new(),
        }
    }

    pub fn regulation(&self) -> &Regulation {
        self.regulation
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// Complete (question, answer) pairs in order.
    pub fn pairs(&self) -> Vec<QaPair> {
        self.history
            .chunks_exact(2)
            .filter_map(|turn| match turn {
                [question, answer]
                    if question.role == Role::User && answer.role == Role::Assistant =>
                {
                    Some(QaPair::new(&question.content, &answer.content))
                }
                _ => None,
            })
            .collect()
    }

    fn record(&mut self, question: &str, answer: String) {
        self.history.push(Message::user(question));
        self.history.push(Message::assistant(answer));
    }
}

/// Build an amendment document from revision text without consulting the
/// collaborator.
pub fn export_amendment(
    synthesizer: &Synthesizer,
    title: &str,
    text: &str,
    metadata: &AmendmentMetadata,
) -> Result<Document> {
    let pairs = pairs_or_placeholder(text);
    Ok(synthesizer.amendment_document(title, &pairs, metadata)?)
}

/// Workflow runner bound to one collaborator.
pub struct Assistant<'a, C: LlmClient> {
    client: &'a C,
    institution: String,
    synthesizer: Synthesizer,
}

impl<'a, C: LlmClient> Assistant<'a, C> {
    pub fn new(client: &'a C, institution: impl Into<String>) -> Self {
        Self {
            client,
            institution: institution.into(),
            synthesizer: Synthesizer::new(),
        }
    }

    /// Replace the synthesizer, e.g. to pin the document date.
    pub fn with_synthesizer(mut self, synthesizer: Synthesizer) -> Self {
        self.synthesizer = synthesizer;
        self
    }

    pub fn synthesizer(&self) -> &Synthesizer {
        &self.synthesizer
    }

    /// Search the corpus and have the collaborator answer `query` from the hits.
    pub async fn analyze(
        &self,
        corpus: &Corpus,
        query: &str,
        top_k: usize,
    ) -> Result<AnalysisOutcome> {
        let results = corpus.search(query, top_k);
        if results.is_empty() {
            info!(query, "No regulations matched, skipping analysis");
            return Ok(AnalysisOutcome::NoMatches);
        }

        let request = prompt::analysis_request(&self.institution, query, &results);
        let analysis = self
            .client
            .complete(&request)
            .await
            .map_err(|e| AssistantError::collaborator("analysis", e))?;

        let related: Vec<RelatedRegulation> = results
            .iter()
            .take(ANALYSIS_CONTEXT_RESULTS)
            .map(|result| RelatedRegulation {
                name: result.regulation.display_name.clone(),
                clause_count: result.regulation.clause_count,
                score: result.score,
            })
            .collect();

        let title = format!("규정 분석: {query}");
        let document = self
            .synthesizer
            .analysis_document(&title, query, &analysis, &related)?;

        info!(query, hits = results.len(), "Analysis complete");
        Ok(AnalysisOutcome::Report { analysis, document })
    }

    /// Draft an amendment of `regulation` implementing `idea`.
    pub async fn draft_amendment(
        &self,
        regulation: &Regulation,
        idea: &str,
        metadata: &AmendmentMetadata,
    ) -> Result<AmendmentOutcome> {
        let clauses = find_relevant_clauses(regulation, idea);
        let request = prompt::amendment_request(&self.institution, regulation, &clauses, idea);
        let draft = self
            .client
            .complete(&request)
            .await
            .map_err(|e| AssistantError::collaborator("amendment", e))?;

        let pairs = pairs_or_placeholder(&draft);
        let title = format!("{} 개정안", regulation.display_name);
        let document = self
            .synthesizer
            .amendment_document(&title, &pairs, metadata)?;

        info!(
            regulation = %regulation.id,
            context_clauses = clauses.len(),
            rows = pairs.len(),
            "Amendment drafted"
        );
        Ok(AmendmentOutcome {
            draft,
            pairs,
            document,
        })
    }

    /// Ask one question in `session`.
    ///
    /// On failure the turn is still recorded, with the error text as answer.
    pub async fn ask(&self, session: &mut QaSession<'_>, question: &str) -> Result<String> {
        let request =
            prompt::chat_request(&self.institution, session.regulation, &session.history, question);

        match self.client.complete(&request).await {
            Ok(answer) => {
                session.record(question, answer.clone());
                Ok(answer)
            }
            Err(e) => {
                warn!(regulation = %session.regulation.id, error = %e, "Chat turn failed");
                session.record(question, format!("오류: {e}"));
                Err(AssistantError::collaborator("chat", e))
            }
        }
    }

    /// Q&A record of the session so far.
    pub fn transcript(&self, session: &QaSession<'_>) -> Document {
        self.synthesizer
            .qa_document(&session.regulation.display_name, &session.pairs())
    }
}
