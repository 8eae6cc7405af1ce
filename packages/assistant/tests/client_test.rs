use regulation_assistant::{
    AnalysisOutcome, Assistant, AssistantConfig, AssistantError, LlmClient, LlmRequest, Message,
    OpenAiClient,
};
use regulation_harvester::{Clause, Corpus, Regulation};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn chat_response(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "gpt-4o-mini",
        "choices": [
            {
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }
        ],
        "usage": { "prompt_tokens": 120, "completion_tokens": 40, "total_tokens": 160 }
    })
}

fn sample_request() -> LlmRequest {
    LlmRequest {
        system: "당신은 규정 전문가입니다.".into(),
        messages: vec![Message::user("휴학은?"), Message::assistant("2년입니다.")],
        prompt: "복학은?".into(),
        temperature: 0.3,
        max_tokens: 1500,
    }
}

fn client_for(server: &MockServer) -> OpenAiClient {
    let config = AssistantConfig::builder("test-key")
        .api_base_url(server.uri())
        .timeout_secs(5)
        .build();
    OpenAiClient::new(&config).expect("client creation")
}

#[tokio::test]
async fn test_chat_completion_request_shape() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(serde_json::json!({
            "model": "gpt-4o-mini",
            "max_tokens": 1500,
            "messages": [
                { "role": "system", "content": "당신은 규정 전문가입니다." },
                { "role": "user", "content": "휴학은?" },
                { "role": "assistant", "content": "2년입니다." },
                { "role": "user", "content": "복학은?" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response("학기 개시 전입니다.")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let answer = client_for(&mock_server)
        .complete(&sample_request())
        .await
        .expect("completion");

    assert_eq!(answer, "학기 개시 전입니다.");
}

#[tokio::test]
async fn test_api_error_message_is_extracted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": {
                "message": "Incorrect API key provided",
                "type": "invalid_request_error"
            }
        })))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .complete(&sample_request())
        .await
        .expect_err("should be an error");

    match err {
        AssistantError::LlmApiError { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Incorrect API key provided");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .complete(&sample_request())
        .await
        .expect_err("should be an error");

    assert_eq!(
        err.to_string(),
        "LLM API error (status 503): upstream unavailable"
    );
}

#[tokio::test]
async fn test_empty_content_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response("  ")))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .complete(&sample_request())
        .await
        .expect_err("should be an error");

    assert!(matches!(err, AssistantError::LlmEmptyResponse));
}

#[tokio::test]
async fn test_analysis_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_partial_json(serde_json::json!({ "temperature": 0.3 })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(chat_response("## 관련 규정\n- 연구비 관리 규정 제3조")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let corpus = Corpus::new(vec![Regulation::new(
        "REG-001",
        "3_연구비_관리_규정",
        "연구비 관리 규정",
        &[
            "연구비 관리 규정".to_string(),
            "제3조(연구비 집행) 연구비는 목적에 맞게 집행한다.".to_string(),
        ],
        vec![Clause::new(
            "제3조",
            "연구비 집행",
            "연구비는 목적에 맞게 집행한다.",
        )],
    )]);

    let client = client_for(&mock_server);
    let assistant = Assistant::new(&client, "차의과학대학교");
    let outcome = assistant
        .analyze(&corpus, "연구비", 10)
        .await
        .expect("analysis");

    let AnalysisOutcome::Report { analysis, document } = outcome else {
        panic!("expected a report");
    };
    assert!(analysis.contains("제3조"));
    assert_eq!(document.title(), "규정 분석: 연구비");

    let xml = String::from_utf8(document.to_xml_bytes().expect("xml")).expect("utf-8");
    assert!(xml.contains("연구비 관리 규정 제3조"));
}
