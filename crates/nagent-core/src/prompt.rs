//! Prompt Templates
//!
//! Render helpers for the ReAct transcript preamble and the single-shot
//! JSON-answer prompt.

use crate::tool::ToolRegistry;

const REACT_TEMPLATE: &str = r#"You are a helpful assistant. Answer the question below through a
series of Thought, Action and Observation steps.

Available tools:
{tools_description}

Use this format:
Question: the question you must answer
Thought: think about what to do next
Action: the action to take, one of the tools above, written as tool_name(args)
Observation: the result of the action
... (Thought/Action/Observation can repeat)
Thought: I now know the final answer
Final Answer: the final answer to the original question

Begin!

Question: {user_input}"#;

const SIMPLE_TEMPLATE: &str = r#"Answer the following question:
problem: {user_input}
answer:

Output format:

```json
{
  "answer": "the answer"
}
```"#;

/// Appended when the model produced neither an action nor a final answer
pub const NUDGE: &str = "Your previous response contained neither an Action nor a Final Answer. \
Either take an Action using one of the available tools, or respond with your Final Answer.";

/// Render the ReAct preamble for one loop invocation
pub fn react_preamble(user_input: &str, tools: &ToolRegistry) -> String {
    REACT_TEMPLATE
        .replace("{tools_description}", &tools.describe())
        .replace("{user_input}", user_input)
}

/// Render the single-shot prompt
pub fn simple_prompt(user_input: &str) -> String {
    SIMPLE_TEMPLATE.replace("{user_input}", user_input)
}
