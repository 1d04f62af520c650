//! Retrieval Tool
//!
//! Exposes a [`Retriever`] to the reasoning loop as a named tool.

use std::sync::Arc;

use async_trait::async_trait;

use nagent_core::error::Result;
use nagent_core::tool::Tool;

use crate::retriever::Retriever;

/// Fixed reply when nothing relevant is found
pub const NO_RESULTS: &str = "No relevant documents found.";

/// Default number of documents to retrieve
const DEFAULT_TOP_K: usize = 3;

/// Tool that searches a document store for passages relevant to the query
pub struct RetrieverTool {
    retriever: Arc<dyn Retriever>,
    k: usize,
}

impl RetrieverTool {
    pub fn new(retriever: Arc<dyn Retriever>) -> Self {
        Self {
            retriever,
            k: DEFAULT_TOP_K,
        }
    }

    /// Override the number of documents retrieved per query
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }
}

#[async_trait]
impl Tool for RetrieverTool {
    fn name(&self) -> &str {
        "retrieve"
    }

    fn description(&self) -> &str {
        "Search the document store for passages relevant to the query"
    }

    async fn run(&self, argument: &str) -> Result<String> {
        let hits = self.retriever.top_k(argument, self.k);

        let matched: Vec<&str> = hits
            .iter()
            .filter(|(_, score)| *score > 0)
            .filter_map(|(index, _)| self.retriever.document(*index))
            .collect();

        if matched.is_empty() {
            tracing::debug!(query = argument, "no relevant documents");
            return Ok(NO_RESULTS.to_string());
        }

        tracing::debug!(query = argument, count = matched.len(), "documents retrieved");
        Ok(matched.join("\n\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retriever::KeywordRetriever;

    fn tool_over(docs: &[&str]) -> RetrieverTool {
        let mut retriever = KeywordRetriever::new();
        retriever.fit(docs.iter().map(|d| (*d).to_string()).collect());
        RetrieverTool::new(Arc::new(retriever))
    }

    #[tokio::test]
    async fn returns_matching_documents_only() {
        let tool = tool_over(&["Apple is red", "Banana is yellow", "Cherry is red"]);
        let result = tool.run("red").await.unwrap();

        assert!(result.contains("Apple is red"));
        assert!(result.contains("Cherry is red"));
        assert!(!result.contains("Banana is yellow"));
    }

    #[tokio::test]
    async fn no_matches_yields_sentinel() {
        let tool = tool_over(&["Something"]);
        let result = tool.run("Nonexistent").await.unwrap();
        assert_eq!(result, NO_RESULTS);
    }

    #[tokio::test]
    async fn documents_are_joined_with_blank_line() {
        let tool = tool_over(&["Apple is red", "Cherry is red"]);
        let result = tool.run("red").await.unwrap();
        assert_eq!(result, "Apple is red\n\nCherry is red");
    }
}
