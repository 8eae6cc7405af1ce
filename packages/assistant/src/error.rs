use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error(transparent)]
    Harvester(#[from] regulation_harvester::HarvesterError),

    #[error("document generation failed: {0}")]
    Hwpml(#[from] regulation_hwpml::HwpmlError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("LLM API request failed: {0}")]
    LlmApiRequest(#[from] reqwest::Error),

    #[error("LLM API error (status {status}): {message}")]
    LlmApiError { status: u16, message: String },

    #[error("failed to parse LLM response: {0}")]
    LlmResponseParse(String),

    #[error("LLM returned empty response")]
    LlmEmptyResponse,

    #[error("{task} failed: {source}")]
    Collaborator {
        task: &'static str,
        #[source]
        source: Box<AssistantError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AssistantError {
    /// Label a collaborator failure with the workflow step it broke.
    pub fn collaborator(task: &'static str, source: AssistantError) -> Self {
        Self::Collaborator {
            task,
            source: Box::new(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, AssistantError>;
