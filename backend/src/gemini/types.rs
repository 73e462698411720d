//! Gemini API wire types
//!
//! Structs that mirror the `generateContent` JSON request and response format.
//! The API speaks camelCase; every response field that Google may omit is
//! defaulted so partial responses still deserialize.

use serde::{Deserialize, Serialize};

/// Top-level Gemini API response
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GeminiApiResponse {
    /// List of candidate responses from the model
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Optional feedback about the prompt (e.g., if it was blocked)
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

impl GeminiApiResponse {
    /// Text of the first candidate, with all of its text parts joined
    ///
    /// Returns `None` when the prompt was blocked, there is no candidate,
    /// or the candidate carries no non-empty text.
    pub fn text(&self) -> Option<String> {
        if self
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_ref())
            .is_some()
        {
            return None;
        }

        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();

        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// A single candidate response from the model
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// The content of this candidate; absent when generation stopped early
    #[serde(default)]
    pub content: Option<Content>,
    /// Why the model stopped generating (if applicable)
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Content structure containing parts of the response
#[derive(Deserialize, Debug)]
pub struct Content {
    /// List of content parts (typically one text part)
    #[serde(default)]
    pub parts: Vec<Part>,
    /// Role of the content (e.g., "model")
    #[serde(default)]
    pub role: Option<String>,
}

/// A single part of content
#[derive(Deserialize, Debug)]
pub struct Part {
    /// The text content of this part, if it is a text part
    #[serde(default)]
    pub text: Option<String>,
}

/// Feedback about the prompt (e.g., if it was blocked)
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Reason the prompt was blocked (if applicable)
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// Google API error envelope returned with non-2xx statuses
#[derive(Deserialize, Debug)]
pub struct ApiErrorEnvelope {
    /// Error details
    pub error: ApiErrorBody,
}

/// Details inside the error envelope
#[derive(Deserialize, Debug)]
pub struct ApiErrorBody {
    /// Human-readable error message
    pub message: String,
    /// Canonical status name (e.g., "RESOURCE_EXHAUSTED")
    #[serde(default)]
    pub status: Option<String>,
}

/// Request structure for Gemini API
#[derive(Serialize, Debug)]
pub struct GeminiApiRequest {
    /// List of content items to send
    pub contents: Vec<RequestContent>,
}

impl GeminiApiRequest {
    /// Single-turn request carrying one text prompt
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

/// Content structure for requests
#[derive(Serialize, Debug)]
pub struct RequestContent {
    /// List of content parts
    pub parts: Vec<RequestPart>,
}

/// A single part for requests
#[derive(Serialize, Debug)]
pub struct RequestPart {
    /// The text content
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> GeminiApiResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_text_joins_parts() {
        let response = parse(
            r#"{"candidates":[{"content":{"parts":[{"text":"Hi "},{"text":"there!"}],"role":"model"},"finishReason":"STOP"}]}"#,
        );
        assert_eq!(response.text().as_deref(), Some("Hi there!"));
        assert_eq!(
            response.candidates[0].finish_reason.as_deref(),
            Some("STOP")
        );
    }

    #[test]
    fn test_text_none_without_candidates() {
        assert_eq!(parse(r#"{"candidates":[]}"#).text(), None);
        assert_eq!(parse("{}").text(), None);
    }

    #[test]
    fn test_text_none_when_candidate_has_no_content() {
        let response = parse(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#);
        assert_eq!(response.text(), None);
    }

    #[test]
    fn test_text_none_when_blocked() {
        let response = parse(
            r#"{"candidates":[{"content":{"parts":[{"text":"ignored"}]}}],"promptFeedback":{"blockReason":"SAFETY"}}"#,
        );
        assert_eq!(response.text(), None);
    }

    #[test]
    fn test_request_serialization() {
        let body = serde_json::to_value(GeminiApiRequest::from_prompt("Hello")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "contents": [{ "parts": [{ "text": "Hello" }] }] })
        );
    }
}
