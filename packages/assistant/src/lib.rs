//! Regulation Assistant - LLM-backed workflows over the regulation corpus.
//!
//! Builds on [`regulation_harvester`] for search and [`regulation_hwpml`] for
//! document output. A text-generation collaborator (OpenAI chat completions,
//! or [`client::test_support::MockLlmClient`] in tests) answers questions,
//! analyzes search hits and drafts amendments; the replies become HWPML
//! documents.
//!
//! # Architecture
//!
//! - [`config`]: Environment configuration
//! - [`error`]: Error types and Result alias
//! - [`client`]: Collaborator trait and HTTP client
//! - [`prompt`]: Prompt construction
//! - [`workflow`]: Analysis, amendment, Q&A and offline export
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod prompt;
pub mod workflow;

#[cfg(any(test, feature = "test-utils"))]
pub use client::test_support::MockLlmClient;
pub use client::{LlmClient, LlmRequest, Message, OpenAiClient, Role};
pub use config::AssistantConfig;
pub use error::{AssistantError, Result};
pub use workflow::{export_amendment, AmendmentOutcome, AnalysisOutcome, Assistant, QaSession};
