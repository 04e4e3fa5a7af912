//! Answer extraction from the oracle's free-text decode response.
//!
//! The decode prompt instructs the model to place its answer after a
//! literal marker token. That is a brittle wire format, so the parsing
//! rule lives here, testable independently of dispatch.

/// Marker the decode prompt asks the oracle to emit before its answer.
pub const ANSWER_MARKER: &str = "ANSWER:";

#[derive(Debug, Clone)]
pub struct AnswerParser {
    marker: String,
}

impl Default for AnswerParser {
    fn default() -> Self {
        Self {
            marker: ANSWER_MARKER.to_string(),
        }
    }
}

impl AnswerParser {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    /// Everything after the **last** occurrence of the marker, trimmed.
    /// A response without the marker yields the full trimmed body: a
    /// plausibly-wrong-but-present answer, distinct from a transport
    /// failure.
    pub fn extract<'a>(&self, body: &'a str) -> &'a str {
        match body.rfind(&self.marker) {
            Some(i) => body[i + self.marker.len()..].trim(),
            None => body.trim(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AnswerParser;

    #[test]
    fn extract_takes_text_after_marker() {
        let p = AnswerParser::default();
        assert_eq!(p.extract("reasoning... ANSWER:\nhi I love you"), "hi I love you");
    }

    #[test]
    fn extract_uses_last_marker_occurrence() {
        let p = AnswerParser::default();
        let body = "the example says ANSWER: hi I love you\nso here ANSWER: the waves crashed";
        assert_eq!(p.extract(body), "the waves crashed");
    }

    #[test]
    fn missing_marker_falls_back_to_full_body() {
        let p = AnswerParser::default();
        assert_eq!(p.extract("  i think it says hello  "), "i think it says hello");
    }

    #[test]
    fn marker_at_end_yields_empty_answer() {
        let p = AnswerParser::default();
        assert_eq!(p.extract("no answer ANSWER:"), "");
    }
}
