//! LLM Client Abstraction
//!
//! Defines the single interface the reasoning loop uses to talk to a
//! language model backend. Implementations live outside the core (see
//! `nagent-runtime` for the Gemini HTTP client); tests supply scripted
//! stubs.

use async_trait::async_trait;

use crate::error::Result;

/// Interface to a language-model backend
///
/// `generate` takes the fully rendered prompt (or transcript) and returns
/// the raw generated text. Implementations map their transport failures
/// onto the [`crate::AgentError`] taxonomy: `RateLimited`, `Timeout` and
/// `ServiceUnavailable` are retried by the loop's retry policy;
/// `InvalidRequest` and `Auth` are terminal.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Generate a completion for the given prompt
    async fn generate(&self, model: &str, prompt: &str) -> Result<String>;
}
