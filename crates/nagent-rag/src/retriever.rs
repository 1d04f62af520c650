//! Document Retrieval
//!
//! A retriever stores a document collection and ranks it against a query.
//! The agent never sees this interface directly; it goes through
//! [`crate::RetrieverTool`].

/// Interface to a document store
pub trait Retriever: Send + Sync {
    /// Top-k document indices with relevance scores, ordered by score
    /// descending. Zero scores may be included; callers filter them.
    fn top_k(&self, query: &str, k: usize) -> Vec<(usize, usize)>;

    /// Look up a document by index
    fn document(&self, index: usize) -> Option<&str>;
}

/// Ultra-simple keyword matching retriever
///
/// Scores a document by how many query words appear in it after
/// lowercasing and whitespace tokenization.
#[derive(Debug, Default)]
pub struct KeywordRetriever {
    documents: Vec<String>,
}

impl KeywordRetriever {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the documents to search over
    pub fn fit(&mut self, documents: Vec<String>) {
        self.documents = documents;
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn tokenize(text: &str) -> Vec<String> {
        text.to_lowercase()
            .split_whitespace()
            .map(str::to_owned)
            .collect()
    }

    /// Count how many query words appear in the document
    fn match_count(query: &str, document: &str) -> usize {
        let document_words = Self::tokenize(document);
        Self::tokenize(query)
            .iter()
            .filter(|word| document_words.contains(word))
            .count()
    }
}

impl Retriever for KeywordRetriever {
    fn top_k(&self, query: &str, k: usize) -> Vec<(usize, usize)> {
        let mut scores: Vec<(usize, usize)> = self
            .documents
            .iter()
            .enumerate()
            .map(|(i, doc)| (i, Self::match_count(query, doc)))
            .collect();

        // Stable sort keeps document order for equal scores.
        scores.sort_by(|a, b| b.1.cmp(&a.1));
        scores.truncate(k);
        scores
    }

    fn document(&self, index: usize) -> Option<&str> {
        self.documents.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fitted(docs: &[&str]) -> KeywordRetriever {
        let mut retriever = KeywordRetriever::new();
        retriever.fit(docs.iter().map(|d| (*d).to_string()).collect());
        retriever
    }

    #[test]
    fn ranks_by_keyword_matches() {
        let retriever = fitted(&["Apple is red", "Banana is yellow", "Cherry is red"]);
        let hits = retriever.top_k("red", 3);

        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].1, 1);
        assert_eq!(hits[1].1, 1);
        assert_eq!(hits[2].1, 0);
        assert_eq!(retriever.document(hits[2].0), Some("Banana is yellow"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let retriever = fitted(&["Apple is RED"]);
        let hits = retriever.top_k("red", 1);
        assert_eq!(hits[0].1, 1);
    }

    #[test]
    fn truncates_to_k() {
        let retriever = fitted(&["a", "b", "c", "d"]);
        assert_eq!(retriever.top_k("a", 2).len(), 2);
    }

    #[test]
    fn empty_store_yields_no_hits() {
        let retriever = KeywordRetriever::new();
        assert!(retriever.top_k("anything", 3).is_empty());
    }
}
