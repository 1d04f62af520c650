//! Reasoning Loop
//!
//! Implements the ReAct (Reason + Act) pattern: the agent thinks, acts
//! through tools, observes the results, and repeats until it produces a
//! final answer or exhausts its iteration budget. A single-shot
//! [`SimpleAgent`] shares the retry policy and degraded-answer handling
//! but skips tools entirely.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::client::LlmClient;
use crate::error::{AgentError, Result};
use crate::parser::{self, AgentStep};
use crate::prompt;
use crate::retry::{RetryPolicy, call_with_retry};
use crate::tool::ToolRegistry;
use crate::transcript::Transcript;

/// Default iteration budget
pub const DEFAULT_MAX_ITERATIONS: usize = 5;

/// Returned when the model produced neither an action nor a final answer
/// on the last allowed iteration
pub const UNDETERMINED_ANSWER: &str = "Could not find an answer within the iteration limit.";

/// Returned when the iteration budget is exhausted without a final answer
pub const MAX_ITERATIONS_ANSWER: &str = "Reached max iterations without finding a final answer.";

/// Substituted when the single-shot record lacks an `answer` field
pub const NO_ANSWER_SENTINEL: &str = "No answer found in response.";

/// Agent configuration
#[derive(Clone, Debug)]
pub struct AgentConfig {
    /// Model identifier passed to the LLM client
    pub model: String,

    /// Maximum reasoning iterations before giving up
    pub max_iterations: usize,

    /// Backoff policy for model calls
    pub retry: RetryPolicy,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.0-flash".into(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            retry: RetryPolicy::default(),
        }
    }
}

/// The terminal output of one loop invocation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentOutcome {
    pub answer: String,
}

impl AgentOutcome {
    fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
        }
    }
}

/// ReAct reasoning agent
pub struct ReActAgent {
    client: Arc<dyn LlmClient>,
    tools: ToolRegistry,
    config: AgentConfig,
}

impl ReActAgent {
    pub fn new(client: Arc<dyn LlmClient>, tools: ToolRegistry, config: AgentConfig) -> Self {
        Self {
            client,
            tools,
            config,
        }
    }

    /// Create with default configuration
    pub fn with_defaults(client: Arc<dyn LlmClient>, tools: ToolRegistry) -> Self {
        Self::new(client, tools, AgentConfig::default())
    }

    /// Run the loop on a user query with a fresh, never-cancelled token
    pub async fn run_query(&self, user_input: &str) -> Result<AgentOutcome> {
        self.run_query_with_cancel(user_input, CancellationToken::new())
            .await
    }

    /// Run the loop on a user query.
    ///
    /// Always resolves to an [`AgentOutcome`] — upstream failures degrade
    /// into a textual answer — except for cancellation, which is the one
    /// condition surfaced as a true error.
    pub async fn run_query_with_cancel(
        &self,
        user_input: &str,
        cancel: CancellationToken,
    ) -> Result<AgentOutcome> {
        let mut transcript =
            Transcript::with_preamble(prompt::react_preamble(user_input, &self.tools));

        for iteration in 1..=self.config.max_iterations {
            let generated = match self.generate(&transcript, &cancel).await {
                Ok(text) => text,
                Err(AgentError::Cancelled) => return Err(AgentError::Cancelled),
                Err(err) => {
                    tracing::error!(iteration, error = %err, "model call failed, degrading to error answer");
                    return Ok(AgentOutcome::new(format!("Error: {err}")));
                }
            };

            transcript.push(generated.clone());

            match parser::parse_step(&generated) {
                AgentStep::FinalAnswer(answer) => {
                    tracing::debug!(iteration, "final answer found");
                    return Ok(AgentOutcome::new(answer));
                }
                AgentStep::ToolCall(invocation) => {
                    let observation = self.dispatch(&invocation.name, &invocation.argument, &cancel).await?;
                    transcript.push(format!("Observation: {observation}"));
                }
                AgentStep::Undetermined => {
                    if iteration == self.config.max_iterations {
                        return Ok(AgentOutcome::new(UNDETERMINED_ANSWER));
                    }
                    transcript.push(prompt::NUDGE);
                }
            }
        }

        Ok(AgentOutcome::new(MAX_ITERATIONS_ANSWER))
    }

    /// Call the model with the rendered transcript, under the retry policy
    async fn generate(&self, transcript: &Transcript, cancel: &CancellationToken) -> Result<String> {
        let rendered = transcript.render();
        call_with_retry(
            &self.config.retry,
            cancel,
            AgentError::is_retryable,
            || self.client.generate(&self.config.model, &rendered),
        )
        .await
    }

    /// Resolve and run one tool invocation, converting every fault into an
    /// observation string. Only cancellation escapes as an error.
    async fn dispatch(
        &self,
        name: &str,
        argument: &str,
        cancel: &CancellationToken,
    ) -> Result<String> {
        let Some(tool) = self.tools.resolve(name) else {
            tracing::warn!(tool = name, "model invoked unknown tool");
            return Ok(format!("Unknown tool: {name}"));
        };

        tracing::debug!(tool = name, "dispatching tool");
        // Cancellation must win over an already-completed tool run.
        tokio::select! {
            biased;
            () = cancel.cancelled() => Err(AgentError::Cancelled),
            outcome = tool.run(argument) => {
                Ok(outcome.unwrap_or_else(|err| format!("Error running tool {name}: {err}")))
            }
        }
    }
}

/// Single-shot, non-agentic baseline
///
/// One model call, then structured-output extraction. Shares the retry
/// policy and failure-to-degraded-answer conversion with the loop.
pub struct SimpleAgent {
    client: Arc<dyn LlmClient>,
    config: AgentConfig,
}

impl SimpleAgent {
    pub fn new(client: Arc<dyn LlmClient>, config: AgentConfig) -> Self {
        Self { client, config }
    }

    /// Run a query with a fresh, never-cancelled token
    pub async fn run_query(&self, user_input: &str) -> Result<AgentOutcome> {
        self.run_query_with_cancel(user_input, CancellationToken::new())
            .await
    }

    /// Run a single-shot query
    pub async fn run_query_with_cancel(
        &self,
        user_input: &str,
        cancel: CancellationToken,
    ) -> Result<AgentOutcome> {
        let rendered = prompt::simple_prompt(user_input);
        let generated = match call_with_retry(
            &self.config.retry,
            &cancel,
            AgentError::is_retryable,
            || self.client.generate(&self.config.model, &rendered),
        )
        .await
        {
            Ok(text) => text,
            Err(AgentError::Cancelled) => return Err(AgentError::Cancelled),
            Err(err) => {
                tracing::error!(error = %err, "model call failed, degrading to error answer");
                return Ok(AgentOutcome::new(format!("Error: {err}")));
            }
        };

        match crate::extract::extract_record(&generated) {
            Ok(record) => Ok(AgentOutcome::new(
                record.answer.unwrap_or_else(|| NO_ANSWER_SENTINEL.into()),
            )),
            Err(err) => {
                tracing::error!(error = %err, "model output unparseable, degrading to error answer");
                Ok(AgentOutcome::new(format!("Error: {err}")))
            }
        }
    }
}
