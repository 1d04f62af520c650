//! Tool System
//!
//! Tools are uniform capabilities the model invokes by name with a raw
//! string argument, returning a string observation. The registry is built
//! once per loop invocation and is read-only afterwards.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{AgentError, Result};

/// Tool trait - implement to add new capabilities
///
/// `run` takes the argument text verbatim as the model wrote it; no
/// structured schema is imposed. Faults returned here are caught at the
/// dispatch site and fed back into the transcript as observations, never
/// propagated out of the loop.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique identifier used for dispatch
    fn name(&self) -> &str;

    /// One-line description shown to the model verbatim
    fn description(&self) -> &str;

    /// Execute the tool with the raw argument text
    async fn run(&self, argument: &str) -> Result<String>;
}

/// Registry of the tools available to one loop invocation
///
/// Preserves registration order, which is the order tools are listed in
/// the system prompt.
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Build a registry from an ordered sequence of tools.
    ///
    /// Duplicate names are a configuration error and fail fast.
    pub fn new(tools: Vec<Arc<dyn Tool>>) -> Result<Self> {
        let mut seen = HashSet::new();
        for tool in &tools {
            if !seen.insert(tool.name().to_string()) {
                return Err(AgentError::Config(format!(
                    "duplicate tool name: {}",
                    tool.name()
                )));
            }
        }
        Ok(Self { tools })
    }

    /// Registry with no tools
    pub fn empty() -> Self {
        Self { tools: Vec::new() }
    }

    /// Look up a tool by name
    pub fn resolve(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.iter().find(|t| t.name() == name).cloned()
    }

    /// Render the tool list for the system prompt, one line per tool
    pub fn describe(&self) -> String {
        self.tools
            .iter()
            .map(|t| format!("- {}: {}", t.name(), t.description()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoTool {
        name: &'static str,
    }

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &str {
            self.name
        }

        fn description(&self) -> &str {
            "Echo the argument back"
        }

        async fn run(&self, argument: &str) -> Result<String> {
            Ok(argument.to_string())
        }
    }

    #[test]
    fn resolve_unknown_name_yields_none() {
        let registry = ToolRegistry::new(vec![Arc::new(EchoTool { name: "echo" })]).unwrap();
        assert!(registry.resolve("echo").is_some());
        assert!(registry.resolve("missing").is_none());
    }

    #[test]
    fn duplicate_names_fail_fast() {
        let result = ToolRegistry::new(vec![
            Arc::new(EchoTool { name: "echo" }),
            Arc::new(EchoTool { name: "echo" }),
        ]);
        assert!(matches!(result, Err(AgentError::Config(_))));
    }

    #[test]
    fn describe_preserves_registration_order() {
        let registry = ToolRegistry::new(vec![
            Arc::new(EchoTool { name: "beta" }),
            Arc::new(EchoTool { name: "alpha" }),
        ])
        .unwrap();

        assert_eq!(
            registry.describe(),
            "- beta: Echo the argument back\n- alpha: Echo the argument back"
        );
    }
}
