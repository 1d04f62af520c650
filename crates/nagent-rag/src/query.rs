//! Query Preprocessing
//!
//! Seam for rewriting or expanding user queries before retrieval. The
//! current implementations are intentionally trivial; an LLM-backed
//! rewriter can slot in behind the same surface.

/// Normalizes a query before it reaches the retriever
#[derive(Debug, Default)]
pub struct QueryRewriter;

impl QueryRewriter {
    pub fn new() -> Self {
        Self
    }

    pub fn rewrite(&self, query: &str) -> String {
        query.trim().to_string()
    }
}

/// Expand a query into retrieval variants
pub fn expand_query(query: &str) -> Vec<String> {
    vec![query.to_string()]
}
