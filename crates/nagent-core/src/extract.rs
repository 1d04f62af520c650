//! Structured-Output Extraction
//!
//! Pulls a JSON record out of noisy model output. Models frequently wrap
//! the requested JSON in code fences or surround it with prose; all three
//! shapes must parse identically. A missing `answer` field is not an
//! error, it degrades to a sentinel at the call site.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AgentError, Result};

/// The record the single-shot path expects from the model
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// The `answer` field, if the model produced one
    pub answer: Option<String>,
}

/// Extract an [`AnswerRecord`] from raw model output.
///
/// Fails with [`AgentError::MalformedOutput`] only when no JSON block can
/// be located at all. A block that parses but does not fit the record
/// shape degrades to an empty record rather than an error.
pub fn extract_record(text: &str) -> Result<AnswerRecord> {
    let value = parse_json_block(text).ok_or_else(|| {
        AgentError::MalformedOutput("no parseable JSON block in model output".into())
    })?;

    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Locate and parse the outermost well-formed JSON block in `text`
fn parse_json_block(text: &str) -> Option<Value> {
    let trimmed = text.trim();

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return Some(value);
    }

    // Code-fenced output: strip the fence markers and parse the interior.
    if trimmed.starts_with("```") {
        let stripped = trimmed
            .trim_start_matches("```json")
            .trim_start_matches("```JSON")
            .trim_start_matches("```");
        if let Some(end) = stripped.rfind("```") {
            if let Ok(value) = serde_json::from_str::<Value>(stripped[..end].trim()) {
                return Some(value);
            }
        }
    }

    // Prose around the block: take the outermost brace span.
    let start = trimmed.find('{')?;
    let end = trimmed.rfind('}')?;
    if end <= start {
        return None;
    }
    serde_json::from_str::<Value>(&trimmed[start..=end]).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_json_parses() {
        let record = extract_record(r#"{"answer": "X"}"#).unwrap();
        assert_eq!(record.answer.as_deref(), Some("X"));
    }

    #[test]
    fn fenced_json_parses() {
        let record = extract_record("```json\n{\"answer\": \"X\"}\n```").unwrap();
        assert_eq!(record.answer.as_deref(), Some("X"));
    }

    #[test]
    fn json_surrounded_by_prose_parses() {
        let text = "Sure, here is the result:\n{\"answer\": \"X\"}\nHope that helps!";
        let record = extract_record(text).unwrap();
        assert_eq!(record.answer.as_deref(), Some("X"));
    }

    #[test]
    fn all_three_shapes_parse_identically() {
        let clean = extract_record(r#"{"answer": "42"}"#).unwrap();
        let fenced = extract_record("```json\n{\"answer\": \"42\"}\n```").unwrap();
        let prose = extract_record("Of course.\n{\"answer\": \"42\"}\nDone.").unwrap();
        assert_eq!(clean, fenced);
        assert_eq!(fenced, prose);
    }

    #[test]
    fn missing_answer_field_is_not_an_error() {
        let record = extract_record(r#"{"result": "X"}"#).unwrap();
        assert_eq!(record.answer, None);
    }

    #[test]
    fn non_record_json_degrades_to_empty_record() {
        let record = extract_record("[1, 2, 3]").unwrap();
        assert_eq!(record.answer, None);
    }

    #[test]
    fn unparseable_text_is_malformed_output() {
        let result = extract_record("I could not produce JSON, sorry.");
        assert!(matches!(result, Err(AgentError::MalformedOutput(_))));
    }
}
