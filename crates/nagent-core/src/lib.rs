//! # nagent-core
//!
//! Core agent reasoning loop with a provider-agnostic LLM client
//! abstraction and an extensible tool system.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       ReActAgent                             │
//! │  ┌────────────┐  ┌────────────┐  ┌────────┐  ┌───────────┐  │
//! │  │ Transcript │  │   Action   │  │  Tool  │  │ LlmClient │  │
//! │  │            │──│   Parser   │──│Registry│──│ (+ retry) │  │
//! │  └────────────┘  └────────────┘  └────────┘  └───────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The loop drives the model through Thought/Action/Observation cycles
//! until it emits a final answer or runs out of iterations. Transient
//! upstream failures are retried with exponential backoff; everything
//! else degrades into a textual answer rather than crashing the caller.
//! [`agent::SimpleAgent`] is the single-shot baseline that swaps the
//! action parser for structured-output extraction.

pub mod agent;
pub mod client;
pub mod error;
pub mod extract;
pub mod parser;
pub mod prompt;
pub mod retry;
pub mod tool;
pub mod transcript;

pub use agent::{AgentConfig, AgentOutcome, ReActAgent, SimpleAgent};
pub use client::LlmClient;
pub use error::{AgentError, Result};
pub use extract::AnswerRecord;
pub use parser::{AgentStep, ToolInvocation};
pub use retry::{RetryPolicy, call_with_retry};
pub use tool::{Tool, ToolRegistry};
pub use transcript::Transcript;
