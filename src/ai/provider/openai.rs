//! OpenAI API Provider
//!
//! Chat Completions adapter. The instruction prompt and the context
//! block travel as two separate system-role messages ahead of the user
//! message; on the vision path the user content becomes a block array
//! with data-URI image entries ahead of the text.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::transport::{Transport, VendorRequest};
use super::{ChatRequest, LlmProvider, ProviderKind, resolve_api_key};
use crate::config::LlmConfig;
use crate::types::{FramedocError, Result};

const API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// OpenAI Chat Completions adapter with secure key handling
pub struct OpenAiProvider {
    api_key: SecretString,
    model: String,
    temperature: f32,
    max_tokens: usize,
    client: reqwest::Client,
    transport: Transport,
}

impl std::fmt::Debug for OpenAiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiProvider")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl OpenAiProvider {
    pub fn new(config: &LlmConfig, transport: Transport) -> Result<Self> {
        let api_key = resolve_api_key(config, ProviderKind::OpenAi)?;

        let model = config
            .model
            .clone()
            .unwrap_or_else(|| ProviderKind::OpenAi.default_model().to_string());

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
        let user_content: Value = if request.attachments.is_empty() {
            Value::String(request.user_message.clone())
        } else {
            let mut blocks: Vec<Value> = request
                .attachments
                .iter()
                .map(|a| {
                    json!({
                        "type": "image_url",
                        "image_url": {
                            "url": format!("data:{};base64,{}", a.media_type, a.data)
                        }
                    })
                })
                .collect();
            blocks.push(json!({ "type": "text", "text": request.user_message }));
            Value::Array(blocks)
        };

        let body = json!({
            "model": self.model,
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
            "messages": [
                { "role": "system", "content": request.system_prompt },
                { "role": "system", "content": request.context_block },
                { "role": "user", "content": user_content }
            ]
        });

        VendorRequest {
            url: API_URL.to_string(),
            headers: vec![(
                "Authorization",
                format!("Bearer {}", self.api_key.expose_secret()),
            )],
            body,
        }
    }

    /// `choices[0].message.content`
    fn extract_text(body: &str) -> Result<String> {
        let response: Value = serde_json::from_str(body)?;
        response
            .get("choices")
            .and_then(Value::as_array)
            .and_then(|choices| choices.first())
            .and_then(|c| c.pointer("/message/content"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| FramedocError::Envelope {
                provider: "openai".to_string(),
                message: "no message content in response".to_string(),
            })
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    async fn complete(&self, request: &ChatRequest) -> Result<String> {
        info!(
            "Generating with OpenAI (model: {}, attachments: {})",
            self.model,
            request.attachments.len()
        );

        let vendor_request = self.build_request(request);
        let body = self
            .transport
            .dispatch(
                &self.client,
                ProviderKind::OpenAi,
                &self.api_key,
                &self.model,
                &vendor_request,
            )
            .await?;

        debug!("Received OpenAI response, extracting text");
        Self::extract_text(&body)
    }

    fn name(&self) -> &str {
        "openai"
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
                ProviderKind::OpenAi,
                &self.api_key,
                &self.model,
                &vendor_request,
            )
            .await;

        match result {
            Ok(_) => Ok(true),
            Err(FramedocError::Api { status, .. }) if status == 401 || status == 403 => {
                warn!("OpenAI rejected the API key");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}
