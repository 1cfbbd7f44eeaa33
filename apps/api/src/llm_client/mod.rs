/// LLM Gateway — the single point of entry for all model calls in Vitae.
///
/// ARCHITECTURAL RULE: No other module may call the Anthropic API directly.
/// All LLM interactions MUST go through this module.
///
/// Every call is a single attempt: no retry, no backoff, no caching. A slow
/// provider is cut off by the client timeout and the failure is surfaced to
/// the stage that asked.
use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for all LLM calls in Vitae.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "claude-sonnet-4-5";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// One fully-built generation request: instruction text plus decoding
/// parameters. Produced by the per-stage prompt builders; consumed by the
/// gateway. Construction is deterministic — same inputs, same bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptSpec {
    pub system: &'static str,
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct LlmResponse {
    content: Vec<ContentBlock>,
    usage: Usage,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    input_tokens: u32,
    output_tokens: u32,
}

impl LlmResponse {
    /// Extracts the text content from the first text block.
    fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// The seam between workflow stages and the hosted model. Object-safe so the
/// workflow can run against a scripted stand-in under test.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Sends one prompt and returns the completion text verbatim.
    async fn complete(&self, spec: &PromptSpec) -> Result<String, LlmError>;
}

/// Calls the gateway and deserializes the completion as JSON.
/// The prompt must instruct the model to return valid JSON.
pub async fn complete_json<T: DeserializeOwned>(
    gateway: &dyn LlmGateway,
    spec: &PromptSpec,
) -> Result<T, LlmError> {
    let text = gateway.complete(spec).await?;

    // Strip markdown code fences if the model wraps JSON in them
    let text = strip_json_fences(&text);

    serde_json::from_str(text).map_err(LlmError::Parse)
}

/// Production gateway: wraps the Anthropic Messages API.
#[derive(Clone)]
pub struct AnthropicClient {
    client: Client,
    api_key: String,
}

impl AnthropicClient {
    pub fn new(api_key: String, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(timeout_secs))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl LlmGateway for AnthropicClient {
    async fn complete(&self, spec: &PromptSpec) -> Result<String, LlmError> {
        let request_body = AnthropicRequest {
            model: MODEL,
            max_tokens: spec.max_tokens,
            temperature: spec.temperature,
            system: spec.system,
            messages: vec![AnthropicMessage {
                role: "user",
                content: &spec.prompt,
            }],
        };

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse error message
            let message = serde_json::from_str::<AnthropicError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let llm_response: LlmResponse = response.json().await?;

        debug!(
            "LLM call succeeded: input_tokens={}, output_tokens={}",
            llm_response.usage.input_tokens, llm_response.usage.output_tokens
        );

        llm_response
            .text()
            .map(str::to_owned)
            .ok_or(LlmError::EmptyContent)
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    struct CannedGateway(&'static str);

    #[async_trait]
    impl LlmGateway for CannedGateway {
        async fn complete(&self, _spec: &PromptSpec) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    fn spec() -> PromptSpec {
        PromptSpec {
            system: "sys",
            prompt: "p".to_string(),
            temperature: 0.3,
            max_tokens: 64,
        }
    }

    #[tokio::test]
    async fn test_complete_json_parses_fenced_object() {
        #[derive(Deserialize)]
        struct Out {
            key: String,
        }
        let gw = CannedGateway("```json\n{\"key\": \"value\"}\n```");
        let out: Out = complete_json(&gw, &spec()).await.unwrap();
        assert_eq!(out.key, "value");
    }

    #[tokio::test]
    async fn test_complete_json_surfaces_parse_error() {
        #[derive(Deserialize, Debug)]
        struct Out {
            #[allow(dead_code)]
            key: String,
        }
        let gw = CannedGateway("I cannot produce JSON today.");
        let err = complete_json::<Out>(&gw, &spec()).await.unwrap_err();
        assert!(matches!(err, LlmError::Parse(_)));
    }
}
