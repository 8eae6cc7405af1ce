use std::fmt;

use crate::error::{AssistantError, Result};

const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_API_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_TIMEOUT_SECS: u64 = 120;
const DEFAULT_INSTITUTION: &str = "차의과학대학교";

/// Configuration for the text-generation collaborator.
///
/// `Debug` prints `api_key` as `[REDACTED]`.
#[derive(Clone)]
pub struct AssistantConfig {
    pub model: String,
    pub api_key: String,
    pub api_base_url: String,
    pub timeout_secs: u64,
    /// Institution named in the system prompts.
    pub institution: String,
}

impl fmt::Debug for AssistantConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssistantConfig")
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .field("api_base_url", &self.api_base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("institution", &self.institution)
            .finish()
    }
}

impl AssistantConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| AssistantError::Config("OPENAI_API_KEY not set".into()))?;

        let model = std::env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());

        let api_base_url =
            std::env::var("LLM_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.into());

        let timeout_secs = std::env::var("LLM_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let institution =
            std::env::var("ASSISTANT_INSTITUTION").unwrap_or_else(|_| DEFAULT_INSTITUTION.into());

        Ok(Self {
            model,
            api_key,
            api_base_url,
            timeout_secs,
            institution,
        })
    }

    /// Create a config builder for testing.
    pub fn builder(api_key: impl Into<String>) -> AssistantConfigBuilder {
        AssistantConfigBuilder {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.into(),
            api_base_url: DEFAULT_API_BASE_URL.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            institution: DEFAULT_INSTITUTION.into(),
        }
    }
}

/// Builder for constructing `AssistantConfig` in tests.
pub struct AssistantConfigBuilder {
    api_key: String,
    model: String,
    api_base_url: String,
    timeout_secs: u64,
    institution: String,
}

impl AssistantConfigBuilder {
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn institution(mut self, institution: impl Into<String>) -> Self {
        self.institution = institution.into();
        self
    }

    pub fn build(self) -> AssistantConfig {
        AssistantConfig {
            model: self.model,
            api_key: self.api_key,
            api_base_url: self.api_base_url,
            timeout_secs: self.timeout_secs,
            institution: self.institution,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = AssistantConfig::builder("sk-test").build();
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.api_base_url, "https://api.openai.com");
        assert_eq!(config.timeout_secs, 120);
        assert_eq!(config.institution, "차의과학대학교");
    }

    #[test]
    fn test_builder_overrides() {
        let config = AssistantConfig::builder("sk-test")
            .model("gpt-4o")
            .api_base_url("http://localhost:8080")
            .timeout_secs(5)
            .institution("테스트대학교")
            .build();
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.institution, "테스트대학교");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = AssistantConfig::builder("sk-live-0123456789")
            .model("gpt-4o")
            .build();
        let debug = format!("{config:?}");
        assert!(!debug.contains("sk-live-0123456789"));
        assert!(debug.contains("api_key: \"[REDACTED]\""));
        assert!(debug.contains("model: \"gpt-4o\""));
    }
}
