//! Inputs of the document templates.

use serde::{Deserialize, Serialize};

use crate::config::PLACEHOLDER_BEFORE;

/// Planning details shown in the amendment summary table.
///
/// Every field is optional; absent or empty fields are left out of the table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmendmentMetadata {
    pub background: Option<String>,
    pub core_content: Option<String>,
    pub related_regs: Option<String>,
    pub department: Option<String>,
    pub cooperating: Option<String>,
    pub schedule: Option<String>,
    pub target: Option<String>,
}

impl AmendmentMetadata {
    /// `(label, value)` rows in display order, present fields only.
    #[must_use]
    pub fn rows(&self) -> Vec<(&'static str, &str)> {
        [
            ("개정 배경", &self.background),
            ("핵심 내용", &self.core_content),
            ("관련 규정", &self.related_regs),
            ("주관 부서", &self.department),
            ("협조 부서", &self.cooperating),
            ("예상 일정", &self.schedule),
            ("시행 목표", &self.target),
        ]
        .into_iter()
        .filter_map(|(label, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| (label, v))
        })
        .collect()
    }
}

/// One row of a comparison table: current wording and proposed wording.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionPair {
    pub before: String,
    pub after: String,
}

impl RevisionPair {
    #[must_use]
    pub fn new(before: impl Into<String>, after: impl Into<String>) -> Self {
        Self {
            before: before.into(),
            after: after.into(),
        }
    }

    /// Row used when a draft yields no comparison rows: the whole draft as the
    /// proposed wording.
    #[must_use]
    pub fn placeholder(draft: impl Into<String>) -> Self {
        Self::new(PLACEHOLDER_BEFORE, draft)
    }
}

/// A search hit listed in the analysis document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedRegulation {
    pub name: String,
    pub clause_count: usize,
    pub score: u64,
}

/// One answered question of a Q&A session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

impl QaPair {
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}
