//! The three generated document kinds: amendment, analysis and Q&A record.

use chrono::{Local, NaiveDate};

use crate::config::{
    ADDENDA_HEADING, AMENDMENT_DISCLAIMER, ANALYSIS_DISCLAIMER, ANALYSIS_HEADING,
    BODY_DATE_FORMAT, COMPARISON_HEADERS, COMPARISON_HEADING, COMPARISON_WIDTHS, DEFAULT_AUTHOR,
    EFFECTIVE_DATE_CLAUSE, METADATA_HEADERS, METADATA_HEADING, METADATA_WIDTHS, QA_DISCLAIMER,
    QA_TITLE_SUFFIX, RELATED_HEADERS, RELATED_HEADING, RELATED_WIDTHS, TRANSITIONAL_CLAUSE,
};
use crate::document::{Block, Document, Table};
use crate::error::Result;
use crate::markdown::{classify_lines, LineKind};
use crate::payload::{AmendmentMetadata, QaPair, RelatedRegulation, RevisionPair};
use crate::style::{CharStyle, ParaStyle};

/// Builds documents with a fixed author and date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synthesizer {
    author: String,
    date: NaiveDate,
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Synthesizer {
    /// Synthesizer with the default author, dated today (local time).
    #[must_use]
    pub fn new() -> Self {
        Self {
            author: DEFAULT_AUTHOR.to_string(),
            date: Local::now().date_naive(),
        }
    }

    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    fn start(&self, title: &str) -> Document {
        let mut doc = Document::new(title, self.author.as_str(), self.date);
        doc.push(Block::styled(title, CharStyle::Title, ParaStyle::Title));
        doc
    }

    fn today(&self) -> String {
        self.date.format(BODY_DATE_FORMAT).to_string()
    }

    /// Amendment proposal: summary table, comparison table, addenda.
    ///
    /// `pairs` become comparison rows as given; callers substitute a placeholder
    /// row when a draft produced none. The summary section is left out when no
    /// metadata field is set.
    pub fn amendment_document(
        &self,
        title: &str,
        pairs: &[RevisionPair],
        metadata: &AmendmentMetadata,
    ) -> Result<Document> {
        let mut doc = self.start(title);
        doc.push(Block::small(format!("작성일: {}", self.today())));
        doc.push(Block::small(format!(
            "작성: {} (AI 자동 생성 초안)",
            self.author
        )));
        doc.push(Block::Blank);

        let summary = metadata.rows();
        if !summary.is_empty() {
            doc.push(Block::heading(METADATA_HEADING));
            let rows = summary
                .into_iter()
                .map(|(label, value)| vec![label.to_string(), value.to_string()]);
            doc.push(Block::Table(
                Table::new(METADATA_HEADERS, rows).with_widths(&METADATA_WIDTHS)?,
            ));
            doc.push(Block::Blank);
        }

        doc.push(Block::heading(COMPARISON_HEADING));
        let rows = pairs
            .iter()
            .map(|pair| vec![pair.before.clone(), pair.after.clone()]);
        doc.push(Block::Table(
            Table::new(COMPARISON_HEADERS, rows).with_widths(&COMPARISON_WIDTHS)?,
        ));
        doc.push(Block::Blank);

        doc.push(Block::heading(ADDENDA_HEADING));
        doc.push(Block::text(EFFECTIVE_DATE_CLAUSE));
        doc.push(Block::text(TRANSITIONAL_CLAUSE));
        doc.push(Block::Blank);
        doc.push(Block::small(AMENDMENT_DISCLAIMER));

        tracing::info!(title, rows = pairs.len(), "Built amendment document");
        Ok(doc)
    }

    /// Analysis report: reflowed analysis text and the related regulations.
    pub fn analysis_document(
        &self,
        title: &str,
        query: &str,
        analysis: &str,
        related: &[RelatedRegulation],
    ) -> Result<Document> {
        let mut doc = self.start(title);
        doc.push(Block::small(format!(
            "작성일: {}  |  검색어: {query}",
            self.today()
        )));
        doc.push(Block::Blank);

        doc.push(Block::heading(ANALYSIS_HEADING));
        for block in classify_lines(analysis).filter_map(LineKind::into_block) {
            doc.push(block);
        }
        doc.push(Block::Blank);

        if !related.is_empty() {
            doc.push(Block::heading(RELATED_HEADING));
            let rows = related.iter().map(|r| {
                vec![
                    r.name.clone(),
                    r.clause_count.to_string(),
                    r.score.to_string(),
                ]
            });
            doc.push(Block::Table(
                Table::new(RELATED_HEADERS, rows).with_widths(&RELATED_WIDTHS)?,
            ));
        }

        doc.push(Block::Blank);
        doc.push(Block::small(ANALYSIS_DISCLAIMER));

        tracing::info!(title, related = related.len(), "Built analysis document");
        Ok(doc)
    }

    /// Q&A record of a chat about one regulation.
    ///
    /// Answers are reflowed like analysis text, except that blank lines are
    /// dropped.
    #[must_use]
    pub fn qa_document(&self, regulation_name: &str, pairs: &[QaPair]) -> Document {
        let title = format!("{regulation_name} {QA_TITLE_SUFFIX}");
        let mut doc = self.start(&title);
        doc.push(Block::small(format!("작성일: {}", self.today())));
        doc.push(Block::Blank);

        for (number, pair) in pairs.iter().enumerate() {
            doc.push(Block::heading(format!("Q{}. {}", number + 1, pair.question)));
            for block in classify_lines(&pair.answer)
                .filter(|kind| *kind != LineKind::Blank)
                .filter_map(LineKind::into_block)
            {
                doc.push(block);
            }
            doc.push(Block::Blank);
        }

        doc.push(Block::small(QA_DISCLAIMER));

        tracing::info!(title = %title, questions = pairs.len(), "Built Q&A document");
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn synthesizer() -> Synthesizer {
        Synthesizer::new().with_date(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap())
    }

    fn paragraph_texts(doc: &Document) -> Vec<String> {
        doc.blocks()
            .iter()
            .map(|block| match block {
                Block::Paragraph { text, .. } => text.clone(),
                Block::Blank => String::new(),
                Block::Table(_) => "<table>".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_amendment_layout() {
        let metadata = AmendmentMetadata {
            background: Some("창업 활성화".to_string()),
            department: Some("교무처".to_string()),
            ..AmendmentMetadata::default()
        };
        let pairs = vec![
            RevisionPair::new("제5조 종전", "제5조 변경"),
            RevisionPair::new("", "제5조의2 신설"),
        ];

        let doc = synthesizer()
            .amendment_document("학칙 개정안", &pairs, &metadata)
            .unwrap();

        assert_eq!(
            paragraph_texts(&doc),
            vec![
                "학칙 개정안",
                "작성일: 2025. 09. 01.",
                "작성: CHA 규정 혁신 어시스턴트 (AI 자동 생성 초안)",
                "",
                "■ 개정 기획안 요약",
                "<table>",
                "",
                "■ 신구대조문",
                "<table>",
                "",
                "■ 부칙",
                EFFECTIVE_DATE_CLAUSE,
                TRANSITIONAL_CLAUSE,
                "",
                AMENDMENT_DISCLAIMER,
            ]
        );

        let tables: Vec<&Table> = doc.tables().collect();
        assert_eq!(tables[0].rows().len(), 2);
        assert_eq!(tables[0].rows()[1], vec!["주관 부서".to_string(), "교무처".to_string()]);
        assert_eq!(tables[1].row_count(), pairs.len() + 1);
        assert_eq!(tables[1].widths(), &[8000, 8000]);
    }

    #[test]
    fn test_amendment_without_metadata_skips_summary() {
        let doc = synthesizer()
            .amendment_document(
                "개정안",
                &[RevisionPair::placeholder("초안")],
                &AmendmentMetadata::default(),
            )
            .unwrap();

        let texts = paragraph_texts(&doc);
        assert!(!texts.contains(&METADATA_HEADING.to_string()));
        assert_eq!(doc.tables().count(), 1);
    }

    #[test]
    fn test_analysis_reflow() {
        let analysis = "## 1. 관련 규정\n- 학칙 제5조\n\n| 규정 | 조문 |\n**휴학** 기간 연장 검토";
        let related = vec![RelatedRegulation {
            name: "학칙".to_string(),
            clause_count: 62,
            score: 27,
        }];

        let doc = synthesizer()
            .analysis_document("규정 분석: 휴학", "휴학", analysis, &related)
            .unwrap();

        assert_eq!(
            paragraph_texts(&doc),
            vec![
                "규정 분석: 휴학",
                "작성일: 2025. 09. 01.  |  검색어: 휴학",
                "",
                "■ AI 분석 결과",
                "1. 관련 규정",
                "  · 학칙 제5조",
                "",
                "휴학 기간 연장 검토",
                "",
                "■ 관련 규정 목록",
                "<table>",
                "",
                ANALYSIS_DISCLAIMER,
            ]
        );
        assert!(matches!(
            &doc.blocks()[4],
            Block::Paragraph { char_style: CharStyle::Heading, .. }
        ));
        let table = doc.tables().next().unwrap();
        assert_eq!(table.rows()[0], vec!["학칙", "62", "27"]);
    }

    #[test]
    fn test_analysis_without_related() {
        let doc = synthesizer()
            .analysis_document("분석", "q", "내용", &[])
            .unwrap();
        assert_eq!(doc.tables().count(), 0);
        assert_eq!(
            paragraph_texts(&doc)[4..],
            ["내용", "", "", ANALYSIS_DISCLAIMER]
        );
    }

    #[test]
    fn test_qa_document() {
        let pairs = vec![
            QaPair::new("휴학은 몇 년까지 가능한가요?", "**통산 3년**까지 가능합니다.\n\n- 군 휴학 제외"),
            QaPair::new("복학 신청 기간은?", "학기 개시 30일 전까지입니다."),
        ];

        let doc = synthesizer().qa_document("학칙", &pairs);

        assert_eq!(doc.title(), "학칙 Q&A 기록");
        assert_eq!(
            paragraph_texts(&doc),
            vec![
                "학칙 Q&A 기록",
                "작성일: 2025. 09. 01.",
                "",
                "Q1. 휴학은 몇 년까지 가능한가요?",
                "통산 3년까지 가능합니다.",
                "  · 군 휴학 제외",
                "",
                "Q2. 복학 신청 기간은?",
                "학기 개시 30일 전까지입니다.",
                "",
                QA_DISCLAIMER,
            ]
        );
    }

    #[test]
    fn test_injected_author_reaches_head_and_body() {
        let doc = synthesizer()
            .with_author("교무처")
            .amendment_document("개정안", &[], &AmendmentMetadata::default())
            .unwrap();

        assert_eq!(doc.author(), "교무처");
        assert_eq!(paragraph_texts(&doc)[2], "작성: 교무처 (AI 자동 생성 초안)");
    }
}
