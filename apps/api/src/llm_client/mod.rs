//! LLM Client — the single point of entry for all Gemini API calls.
//!
//! ARCHITECTURAL RULE: No other module may call the generative API directly.
//! Handlers reach it through `assistant::Assistant`, which owns the credential
//! and talks to a `TextGenerator`.
//!
//! One request per call. No retries: an upstream failure is terminal for the
//! invocation that hit it.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM response did not contain candidate text")]
    EmptyContent,
}

/// Transport seam between the extraction adapter and the generative API.
///
/// Carried in `AppState` (inside `Assistant`) as `Arc<dyn TextGenerator>` so
/// tests can swap in a scripted generator and count calls.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, api_key: &str, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate.
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .and_then(|p| p.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Transport errors are rendered to clients, so they never carry the request URL.
fn redact(err: reqwest::Error) -> LlmError {
    LlmError::Http(err.without_url())
}

/// Gemini `generateContent` client.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_base: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_base: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, api_key: &str, prompt: &str) -> Result<String, LlmError> {
        let request_body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(redact)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(redact)?;
        let text = parsed.text().ok_or(LlmError::EmptyContent)?;

        debug!("Gemini call succeeded: model={}, chars={}", self.model, text.len());

        Ok(text.to_string())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const MODEL: &str = "gemini-1.5-flash";

    fn candidate_body(text: &str) -> serde_json::Value {
        json!({
            "candidates": [{
                "content": { "parts": [{ "text": text }], "role": "model" },
                "finishReason": "STOP"
            }]
        })
    }

    #[tokio::test]
    async fn test_generate_returns_first_candidate_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("/models/{MODEL}:generateContent")))
            .and(header("x-goog-api-key", "test-key"))
            .and(query_param_is_missing("key"))
            .and(body_partial_json(json!({
                "contents": [{ "parts": [{ "text": "hello" }] }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("hi there")))
            .expect(1)
            .mount(&server)
            .await;

        let client = GeminiClient::new(server.uri(), MODEL);
        let text = client.generate("test-key", "hello").await.unwrap();
        assert_eq!(text, "hi there");
    }

    #[tokio::test]
    async fn test_non_success_status_is_api_error_without_retry() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("/models/{MODEL}:generateContent")))
            .respond_with(ResponseTemplate::new(503).set_body_json(json!({
                "error": { "code": 503, "message": "The model is overloaded." }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = GeminiClient::new(server.uri(), MODEL);
        let err = client.generate("test-key", "hello").await.unwrap_err();
        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "The model is overloaded.");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unparseable_error_body_is_passed_through() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_string("bad request"))
            .mount(&server)
            .await;

        let client = GeminiClient::new(server.uri(), MODEL);
        let err = client.generate("k", "p").await.unwrap_err();
        assert!(matches!(err, LlmError::Api { status: 400, ref message } if message == "bad request"));
    }

    #[tokio::test]
    async fn test_missing_candidates_is_empty_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&server)
            .await;

        let client = GeminiClient::new(server.uri(), MODEL);
        let err = client.generate("k", "p").await.unwrap_err();
        assert!(matches!(err, LlmError::EmptyContent));
    }

    #[tokio::test]
    async fn test_connect_failure_does_not_expose_key() {
        let client = GeminiClient::new("http://127.0.0.1:9", MODEL);
        let err = client.generate("SUPERSECRETKEY", "p").await.unwrap_err();

        assert!(matches!(err, LlmError::Http(_)));
        assert!(!err.to_string().contains("SUPERSECRETKEY"), "{err}");
        assert!(!format!("{err:?}").contains("SUPERSECRETKEY"));
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let client = GeminiClient::new("https://example.test/v1beta/", "gemini-pro");
        assert_eq!(
            client.endpoint(),
            "https://example.test/v1beta/models/gemini-pro:generateContent"
        );
    }
}
