//! Reasoning Transcript
//!
//! Append-only record of one loop invocation: the rendered system prompt,
//! each model output, and each tool observation, in order. A transcript is
//! owned by exactly one invocation and discarded when it terminates.

/// Ordered, append-only sequence of text segments
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    segments: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transcript seeded with the rendered system prompt
    pub fn with_preamble(preamble: impl Into<String>) -> Self {
        let mut transcript = Self::new();
        transcript.push(preamble);
        transcript
    }

    /// Append a segment
    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    /// Render the full transcript as a single prompt string
    pub fn render(&self) -> String {
        self.segments.join("\n")
    }

    /// All segments in append order
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_preserve_append_order() {
        let mut transcript = Transcript::with_preamble("system");
        transcript.push("Thought: first");
        transcript.push("Observation: second");

        assert_eq!(transcript.len(), 3);
        assert_eq!(
            transcript.render(),
            "system\nThought: first\nObservation: second"
        );
    }

    #[test]
    fn empty_transcript_renders_empty() {
        let transcript = Transcript::new();
        assert!(transcript.is_empty());
        assert_eq!(transcript.render(), "");
    }
}
