//! # nagent-rag
//!
//! Keyword-matching document retrieval and the retrieval-backed tool for
//! the nagent reasoning loop.

pub mod query;
pub mod retriever;
pub mod tool;

pub use query::{QueryRewriter, expand_query};
pub use retriever::{KeywordRetriever, Retriever};
pub use tool::{NO_RESULTS, RetrieverTool};
