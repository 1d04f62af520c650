//! Action Parser
//!
//! Classifies a block of freshly generated model text into one of three
//! mutually exclusive signals: a final answer, a tool invocation, or
//! neither. The final-answer marker always wins over an action pattern
//! appearing in the same text; "neither" is a recoverable condition the
//! loop answers with a prompting nudge, not a fault.

use std::sync::OnceLock;

use regex::Regex;

/// Marker the model emits in front of its final answer
pub const FINAL_ANSWER_MARKER: &str = "Final Answer:";

/// A tool invocation extracted from model text
///
/// The argument is the raw text between the parentheses, passed through
/// verbatim. Tools receive unstructured strings by design.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolInvocation {
    pub name: String,
    pub argument: String,
}

/// Outcome of inspecting one block of generated text
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AgentStep {
    /// The model signalled its final answer
    FinalAnswer(String),
    /// The model requested a tool invocation
    ToolCall(ToolInvocation),
    /// Neither signal found
    Undetermined,
}

fn action_pattern() -> &'static Regex {
    static ACTION: OnceLock<Regex> = OnceLock::new();
    ACTION.get_or_init(|| Regex::new(r"Action:\s*(\w+)\((.*?)\)").expect("action pattern is valid"))
}

/// Parse one block of generated text into an [`AgentStep`]
pub fn parse_step(text: &str) -> AgentStep {
    // Marker takes precedence over any action pattern in the same text.
    if let Some(idx) = text.find(FINAL_ANSWER_MARKER) {
        let answer = text[idx + FINAL_ANSWER_MARKER.len()..].trim();
        return AgentStep::FinalAnswer(answer.to_string());
    }

    if let Some(captures) = action_pattern().captures(text) {
        return AgentStep::ToolCall(ToolInvocation {
            name: captures[1].to_string(),
            argument: captures[2].to_string(),
        });
    }

    AgentStep::Undetermined
}
