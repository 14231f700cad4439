//! Anthropic API Provider
//!
//! Messages API adapter. The system content is an ordered pair of text
//! blocks (instruction prompt, context block), each marked ephemeral so
//! the vendor caches them across the batch; the user content is a
//! single message, with image blocks ahead of the text on the vision
//! path.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::transport::{Transport, VendorRequest};
use super::{ChatRequest, LlmProvider, ProviderKind, resolve_api_key};
use crate::config::LlmConfig;
use crate::types::{FramedocError, Result};

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";

/// Anthropic Messages API adapter with secure key handling
pub struct AnthropicProvider {
    api_key: SecretString,
    model: String,
    temperature: f32,
    max_tokens: usize,
    client: reqwest::Client,
    transport: Transport,
}

impl std::fmt::Debug for AnthropicProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnthropicProvider")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl AnthropicProvider {
    pub fn new(config: &LlmConfig, transport: Transport) -> Result<Self> {
        let api_key = resolve_api_key(config, ProviderKind::Anthropic)?;

        let model = config
            .model
            .clone()
            .unwrap_or_else(|| ProviderKind::Anthropic.default_model().to_string());

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FramedocError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            model,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            client,
            transport,
        })
    }

    fn build_request(&self, request: &ChatRequest) -> VendorRequest {
        // Two cached system blocks: instruction prompt, then context block
        let system = json!([
            {
                "type": "text",
                "text": request.system_prompt,
                "cache_control": { "type": "ephemeral" }
            },
            {
                "type": "text",
                "text": request.context_block,
                "cache_control": { "type": "ephemeral" }
            }
        ]);

        let content: Value = if request.attachments.is_empty() {
            Value::String(request.user_message.clone())
        } else {
            let mut blocks: Vec<Value> = request
                .attachments
                .iter()
                .map(|a| {
                    json!({
                        "type": "image",
                        "source": {
                            "type": "base64",
                            "media_type": a.media_type,
                            "data": a.data
                        }
                    })
                })
                .collect();
            blocks.push(json!({ "type": "text", "text": request.user_message }));
            Value::Array(blocks)
        };

        let body = json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "temperature": self.temperature,
            "system": system,
            "messages": [{ "role": "user", "content": content }]
        });

        VendorRequest {
            url: API_URL.to_string(),
            headers: vec![
                ("x-api-key", self.api_key.expose_secret().to_string()),
                ("anthropic-version", API_VERSION.to_string()),
            ],
            body,
        }
    }

    /// First "text"-typed block of the response content array.
    fn extract_text(body: &str) -> Result<String> {
        let response: Value = serde_json::from_str(body)?;
        response
            .get("content")
            .and_then(Value::as_array)
            .and_then(|blocks| {
                blocks
                    .iter()
                    .find(|b| b.get("type").and_then(Value::as_str) == Some("text"))
            })
            .and_then(|b| b.get("text"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| FramedocError::Envelope {
                provider: "anthropic".to_string(),
                message: "no text content block in response".to_string(),
            })
    }
}

#[async_trait]
impl LlmProvider for AnthropicProvider {
    async fn complete(&self, request: &ChatRequest) -> Result<String> {
        info!(
            "Generating with Anthropic (model: {}, attachments: {})",
            self.model,
            request.attachments.len()
        );

        let vendor_request = self.build_request(request);
        let body = self
            .transport
            .dispatch(
                &self.client,
                ProviderKind::Anthropic,
                &self.api_key,
                &self.model,
                &vendor_request,
            )
            .await?;

        debug!("Received Anthropic response, extracting text");
        Self::extract_text(&body)
    }

    fn name(&self) -> &str {
        "anthropic"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn check_key(&self) -> Result<bool> {
        let request = ChatRequest::text("Reply with the single word OK.", "-", "ping");
        let mut vendor_request = self.build_request(&request);
        vendor_request.body["max_tokens"] = json!(8);

        let result = self
            .transport
            .dispatch(
                &self.client,
                ProviderKind::Anthropic,
                &self.api_key,
                &self.model,
                &vendor_request,
            )
            .await;

        match result {
            Ok(_) => Ok(true),
            Err(FramedocError::Api { status, .. }) if status == 401 || status == 403 => {
                warn!("Anthropic rejected the API key");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}
