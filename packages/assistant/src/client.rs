use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::AssistantConfig;
use crate::error::{AssistantError, Result};

/// Role of a message in the conversation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single message in the conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Request to the LLM.
///
/// `messages` is prior conversation; `prompt` is sent after it as the final
/// user turn.
#[derive(Debug, Clone)]
pub struct LlmRequest {
    pub system: String,
    pub messages: Vec<Message>,
    pub prompt: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

/// Trait for LLM clients, enabling mocking in tests.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, request: &LlmRequest) -> Result<String>;
}

/// OpenAI chat-completions client.
///
/// NOTE: Do NOT derive `Debug` on this struct, it would expose `api_key`.
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    api_base_url: String,
    model: String,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: Option<ErrorDetail>,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

fn role_name(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Assistant => "assistant",
    }
}

fn chat_messages(request: &LlmRequest) -> Vec<ChatMessage<'_>> {
    let mut messages = Vec::with_capacity(request.messages.len() + 2);
    messages.push(ChatMessage {
        role: "system",
        content: &request.system,
    });
    messages.extend(request.messages.iter().map(|m| ChatMessage {
        role: role_name(m.role),
        content: &m.content,
    }));
    messages.push(ChatMessage {
        role: "user",
        content: &request.prompt,
    });
    messages
}

impl OpenAiClient {
    pub fn new(config: &AssistantConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(AssistantError::LlmApiRequest)?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn complete(&self, request: &LlmRequest) -> Result<String> {
        let url = format!("{}/v1/chat/completions", self.api_base_url);

        let body = ChatRequest {
            model: &self.model,
            messages: chat_messages(request),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        debug!(
            model = %self.model,
            turns = body.messages.len(),
            max_tokens = request.max_tokens,
            "LLM request"
        );

        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        if status != 200 {
            let body_text = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body_text)
                .ok()
                .and_then(|r| r.error)
                .map(|e| e.message)
                .unwrap_or(body_text);
            warn!(status, message = %message, "LLM request rejected");
            return Err(AssistantError::LlmApiError { status, message });
        }

        let api_response: ChatResponse = resp
            .json()
            .await
            .map_err(|e| AssistantError::LlmResponseParse(e.to_string()))?;

        let content = api_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            warn!("LLM returned empty response");
            return Err(AssistantError::LlmEmptyResponse);
        }

        Ok(content)
    }
}

/// Test utilities for the LLM client.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_support {
    use super::*;
    use std::sync::Mutex;

    /// Mock LLM client for testing. Returns pre-configured responses in order
    /// and keeps every request it was given.
    pub struct MockLlmClient {
        responses: Mutex<Vec<Result<String>>>,
        requests: Mutex<Vec<LlmRequest>>,
    }

    impl MockLlmClient {
        pub fn new(responses: Vec<Result<String>>) -> Self {
            // Reverse so we can pop from the end
            let mut responses = responses;
            responses.reverse();
            Self {
                responses: Mutex::new(responses),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn with_response(content: &str) -> Self {
            Self::new(vec![Ok(content.to_string())])
        }

        pub fn with_responses(contents: Vec<&str>) -> Self {
            Self::new(contents.into_iter().map(|c| Ok(c.to_string())).collect())
        }

        /// Requests received so far, oldest first.
        pub fn requests(&self) -> Vec<LlmRequest> {
            self.requests
                .lock()
                .map(|requests| requests.clone())
                .unwrap_or_default()
        }
    }

    #[async_trait]
    impl LlmClient for MockLlmClient {
        async fn complete(&self, request: &LlmRequest) -> Result<String> {
            if let Ok(mut requests) = self.requests.lock() {
                requests.push(request.clone());
            }
            let mut responses = self.responses.lock().map_err(|e| {
                AssistantError::LlmResponseParse(format!("mock lock poisoned: {e}"))
            })?;
            responses.pop().unwrap_or(Err(AssistantError::LlmEmptyResponse))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_prompt_is_final_user_turn() {
        let request = LlmRequest {
            system: "시스템".into(),
            messages: vec![Message::user("첫 질문"), Message::assistant("첫 답변")],
            prompt: "둘째 질문".into(),
            temperature: 0.3,
            max_tokens: 1500,
        };

        let turns: Vec<(&str, &str)> = chat_messages(&request)
            .iter()
            .map(|m| (m.role, m.content))
            .collect();
        assert_eq!(
            turns,
            vec![
                ("system", "시스템"),
                ("user", "첫 질문"),
                ("assistant", "첫 답변"),
                ("user", "둘째 질문"),
            ]
        );
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&Message::assistant("네")).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"네"}"#);
    }
}
