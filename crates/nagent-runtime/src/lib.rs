//! # nagent-runtime
//!
//! Runtime LLM clients for the nagent system.
//!
//! ## Clients
//!
//! - **Gemini**: Google Gemini over the `generateContent` HTTP API
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use nagent_core::{AgentConfig, ReActAgent, ToolRegistry};
//! use nagent_runtime::gemini::GeminiClient;
//!
//! let client = GeminiClient::from_env()?;
//! let agent = ReActAgent::new(Arc::new(client), ToolRegistry::empty(), AgentConfig::default());
//! ```

pub mod gemini;

pub use gemini::{GeminiClient, GeminiConfig};

// Re-export core types for convenience
pub use nagent_core::{
    AgentConfig, AgentError, AgentOutcome, LlmClient, ReActAgent, Result, SimpleAgent, Tool,
    ToolRegistry,
};
