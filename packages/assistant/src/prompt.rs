use std::borrow::Cow;

use regulation_harvester::{Clause, ClauseMatch, Regulation, SearchResult};

use crate::client::{LlmRequest, Message};

const SYSTEM_ANALYSIS: &str = include_str!("../prompts/system_analysis.txt");
const SYSTEM_AMENDMENT: &str = include_str!("../prompts/system_amendment.txt");
const SYSTEM_CHAT: &str = include_str!("../prompts/system_chat.txt");

/// Search hits described to the collaborator during analysis.
pub const ANALYSIS_CONTEXT_RESULTS: usize = 5;
/// Clause headings listed per search hit.
pub const ANALYSIS_CLAUSES_PER_RESULT: usize = 20;
/// Relevant clauses quoted in full when drafting an amendment.
pub const AMENDMENT_CONTEXT_CLAUSES: usize = 5;
/// Characters of regulation text embedded in the chat system prompt.
pub const CHAT_FULL_TEXT_CHARS: usize = 8000;
/// Most recent conversation turns replayed with each question.
pub const CHAT_HISTORY_TURNS: usize = 6;

const TRUNCATION_MARKER: &str = "\n...(이하 생략)";

fn system_prompt(template: &str, institution: &str) -> String {
    template.trim_end().replace("{institution}", institution)
}

/// Cut `text` to [`CHAT_FULL_TEXT_CHARS`] characters, marking the cut.
pub fn truncate_full_text(text: &str) -> Cow<'_, str> {
    match text.char_indices().nth(CHAT_FULL_TEXT_CHARS) {
        Some((cut, _)) => Cow::Owned(format!("{}{TRUNCATION_MARKER}", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}

/// One line per search hit: `[id] name — 조문: n1 (t1), n2 (t2)`.
pub fn analysis_context(results: &[SearchResult<'_>]) -> String {
    results
        .iter()
        .take(ANALYSIS_CONTEXT_RESULTS)
        .map(|result| {
            let regulation = result.regulation;
            let clauses = regulation
                .clauses
                .iter()
                .take(ANALYSIS_CLAUSES_PER_RESULT)
                .map(Clause::heading)
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "[{}] {} — 조문: {clauses}",
                regulation.id, regulation.display_name
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Request answering `query` from the given search hits.
pub fn analysis_request(
    institution: &str,
    query: &str,
    results: &[SearchResult<'_>],
) -> LlmRequest {
    let context = analysis_context(results);
    LlmRequest {
        system: system_prompt(SYSTEM_ANALYSIS, institution),
        messages: Vec::new(),
        prompt: format!(
            "질문: {query}\n\n\
             검색된 규정:\n{context}\n\n\
             위 규정을 바탕으로 질문에 답변해 주세요. \
             관련 규정명과 조문 번호를 구체적으로 언급하고, \
             개정이 필요한 부분이 있다면 제안해 주세요."
        ),
        temperature: 0.3,
        max_tokens: 1500,
    }
}

/// Request for a comparison-table amendment draft of one regulation.
pub fn amendment_request(
    institution: &str,
    regulation: &Regulation,
    clauses: &[ClauseMatch<'_>],
    idea: &str,
) -> LlmRequest {
    let clauses_text = clauses
        .iter()
        .take(AMENDMENT_CONTEXT_CLAUSES)
        .map(|m| format!("[{} ({})]\n{}", m.clause.number, m.clause.title, m.clause.content))
        .collect::<Vec<_>>()
        .join("\n\n");

    LlmRequest {
        system: system_prompt(SYSTEM_AMENDMENT, institution),
        messages: Vec::new(),
        prompt: format!(
            "규정명: {}\n\n\
             혁신 아이디어: {idea}\n\n\
             관련 현행 조문:\n{clauses_text}\n\n\
             위 조문을 바탕으로 신구대조문 형식의 개정안 초안을 작성해 주세요.\n\
             형식:\n\
             ## 신구대조문\n\
             | 현행 | 개정안 |\n\
             각 변경 항목별로 작성하고, 마지막에 부칙(경과규정)을 추가하세요.",
            regulation.display_name
        ),
        temperature: 0.4,
        max_tokens: 2000,
    }
}

/// Request answering `question` about one regulation, given earlier turns.
pub fn chat_request(
    institution: &str,
    regulation: &Regulation,
    history: &[Message],
    question: &str,
) -> LlmRequest {
    let system = system_prompt(SYSTEM_CHAT, institution)
        .replace("{regulation}", &regulation.display_name)
        .replace("{full_text}", &truncate_full_text(&regulation.full_text));
    let recent = &history[history.len().saturating_sub(CHAT_HISTORY_TURNS)..];

    LlmRequest {
        system,
        messages: recent.to_vec(),
        prompt: question.to_string(),
        temperature: 0.3,
        max_tokens: 1500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use regulation_harvester::find_relevant_clauses;

    fn regulation() -> Regulation {
        let paragraphs = vec![
            "차의과학대학교 학칙".to_string(),
            "제1조(목적) 이 학칙은 교육에 관한 사항을 정한다.".to_string(),
            "제2조(휴학) 휴학은 통산 2년을 초과할 수 없다.".to_string(),
        ];
        Regulation::new(
            "REG-001",
            "1-1__차의과학대학교_학칙",
            "차의과학대학교 학칙",
            &paragraphs,
            vec![
                Clause::new("제1조", "목적", "이 학칙은 교육에 관한 사항을 정한다."),
                Clause::new("제2조", "휴학", "휴학은 통산 2년을 초과할 수 없다. 휴학 연장 불가."),
            ],
        )
    }

    #[test]
    fn test_analysis_context_line() {
        let regulation = regulation();
        let results = vec![SearchResult {
            regulation: &regulation,
            score: 3,
        }];
        assert_eq!(
            analysis_context(&results),
            "[REG-001] 차의과학대학교 학칙 — 조문: 제1조 (목적), 제2조 (휴학)"
        );
    }

    #[test]
    fn test_analysis_context_limits() {
        let clauses: Vec<Clause> = (1..=25)
            .map(|n| Clause::new(format!("제{n}조"), "제목", "내용"))
            .collect();
        let regulations: Vec<Regulation> = (1..=7)
            .map(|n| {
                Regulation::new(
                    format!("REG-{n:03}"),
                    "규정",
                    "규정",
                    &["규정".to_string()],
                    clauses.clone(),
                )
            })
            .collect();
        let results: Vec<SearchResult> = regulations
            .iter()
            .map(|regulation| SearchResult {
                regulation,
                score: 1,
            })
            .collect();

        let context = analysis_context(&results);
        let lines: Vec<&str> = context.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].ends_with("제20조 (제목)"));
        assert_eq!(lines[0].matches(" (제목)").count(), 20);
    }

    #[test]
    fn test_analysis_request_parameters() {
        let request = analysis_request("테스트대학교", "휴학", &[]);
        assert!(request.system.starts_with("당신은 테스트대학교의 규정 전문가입니다."));
        assert!(request.prompt.starts_with("질문: 휴학\n\n검색된 규정:\n"));
        assert!(request.messages.is_empty());
        assert_eq!(request.temperature, 0.3);
        assert_eq!(request.max_tokens, 1500);
    }

    #[test]
    fn test_amendment_request_quotes_clauses() {
        let regulation = regulation();
        let clauses = find_relevant_clauses(&regulation, "휴학");
        let request = amendment_request("차의과학대학교", &regulation, &clauses, "휴학 연장");

        assert!(request
            .prompt
            .contains("관련 현행 조문:\n[제2조 (휴학)]\n휴학은 통산 2년을 초과할 수 없다. 휴학 연장 불가.\n\n"));
        assert!(request.prompt.contains("혁신 아이디어: 휴학 연장"));
        assert_eq!(request.temperature, 0.4);
        assert_eq!(request.max_tokens, 2000);
    }

    #[test]
    fn test_chat_request_keeps_recent_history() {
        let history: Vec<Message> = (0..8)
            .map(|n| {
                if n % 2 == 0 {
                    Message::user(format!("질문 {n}"))
                } else {
                    Message::assistant(format!("답변 {n}"))
                }
            })
            .collect();

        let request = chat_request("차의과학대학교", &regulation(), &history, "새 질문");

        assert_eq!(request.messages, history[2..].to_vec());
        assert_eq!(request.prompt, "새 질문");
        assert!(request
            .system
            .starts_with("당신은 차의과학대학교 '차의과학대학교 학칙' 전문가입니다."));
        assert!(request.system.ends_with("초과할 수 없다.\n---"));
    }

    #[test]
    fn test_truncate_full_text() {
        assert_eq!(truncate_full_text("짧은 규정"), "짧은 규정");

        let exact = "가".repeat(CHAT_FULL_TEXT_CHARS);
        assert_eq!(truncate_full_text(&exact), exact);

        let long = "가".repeat(CHAT_FULL_TEXT_CHARS + 1);
        let truncated = truncate_full_text(&long);
        assert_eq!(
            truncated,
            format!("{}\n...(이하 생략)", "가".repeat(CHAT_FULL_TEXT_CHARS))
        );
    }
}
