//! Split engine that turns a paragraph stream into clauses.

use super::boundary::{match_clause_heading, ClauseHeading};
use crate::types::Clause;

/// State of the splitter between paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SplitState {
    /// No clause heading seen yet; paragraphs only contribute to the full text.
    #[default]
    NoOpenClause,

    /// A clause is accumulating paragraphs.
    ClauseOpen {
        heading: ClauseHeading,
        paragraphs: Vec<String>,
    },
}

/// Engine for splitting a regulation's paragraphs into clauses.
///
/// Feed paragraphs in source order with [`ClauseSplitter::push`] and call
/// [`ClauseSplitter::finish`] at end of input.
#[derive(Debug, Default)]
pub struct ClauseSplitter {
    state: SplitState,
    clauses: Vec<Clause>,
}

impl ClauseSplitter {
    /// Create a splitter with no open clause.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &SplitState {
        &self.state
    }

    /// Consume one paragraph.
    pub fn push(&mut self, paragraph: &str) {
        if let Some(heading) = match_clause_heading(paragraph) {
            self.close_open_clause();
            self.state = SplitState::ClauseOpen {
                heading,
                paragraphs: vec![paragraph.to_string()],
            };
            return;
        }

        match &mut self.state {
            SplitState::ClauseOpen { paragraphs, .. } => paragraphs.push(paragraph.to_string()),
            SplitState::NoOpenClause => {}
        }
    }

    /// Close any open clause and return all clauses in source order.
    #[must_use]
    pub fn finish(mut self) -> Vec<Clause> {
        self.close_open_clause();
        self.clauses
    }

    fn close_open_clause(&mut self) {
        if let SplitState::ClauseOpen {
            heading,
            paragraphs,
        } = std::mem::take(&mut self.state)
        {
            self.clauses.push(Clause {
                number: heading.number,
                title: heading.title,
                content: paragraphs.join("\n"),
            });
        }
    }
}

/// Split a paragraph sequence into clauses.
///
/// A document without any clause heading yields an empty list; that is a valid
/// result, not an error.
pub fn split_clauses<S: AsRef<str>>(paragraphs: &[S]) -> Vec<Clause> {
    let mut splitter = ClauseSplitter::new();
    for paragraph in paragraphs {
        splitter.push(paragraph.as_ref());
    }
    splitter.finish()
}
