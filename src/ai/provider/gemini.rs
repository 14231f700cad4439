//! Gemini API Provider
//!
//! generateContent adapter. Gemini has a single system-instruction
//! field, so the instruction prompt and context block are concatenated
//! there; the user message is the sole content part, with inline_data
//! image parts ahead of it on the vision path.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::transport::{Transport, VendorRequest};
use super::{ChatRequest, LlmProvider, ProviderKind, resolve_api_key};
use crate::config::LlmConfig;
use crate::types::{FramedocError, Result};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini generateContent adapter with secure key handling
pub struct GeminiProvider {
    api_key: SecretString,
    model: String,
    temperature: f32,
    max_tokens: usize,
    client: reqwest::Client,
    transport: Transport,
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl GeminiProvider {
    pub fn new(config: &LlmConfig, transport: Transport) -> Result<Self> {
        let api_key = resolve_api_key(config, ProviderKind::Gemini)?;

        let model = config
            .model
            .clone()
            .unwrap_or_else(|| ProviderKind::Gemini.default_model().to_string());

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
        let mut parts: Vec<Value> = request
            .attachments
            .iter()
            .map(|a| {
                json!({
                    "inline_data": {
                        "mime_type": a.media_type,
                        "data": a.data
                    }
                })
            })
            .collect();
        parts.push(json!({ "text": request.user_message }));

        let body = json!({
            "systemInstruction": {
                "parts": [{
                    "text": format!("{}\n\n{}", request.system_prompt, request.context_block)
                }]
            },
            "contents": [{ "role": "user", "parts": parts }],
            "generationConfig": {
                "temperature": self.temperature,
                "maxOutputTokens": self.max_tokens
            }
        });

        VendorRequest {
            url: format!("{}/{}:generateContent", API_BASE, self.model),
            headers: vec![(
                "x-goog-api-key",
                self.api_key.expose_secret().to_string(),
            )],
            body,
        }
    }

    /// `candidates[0].content.parts[0].text`
    fn extract_text(body: &str) -> Result<String> {
        let response: Value = serde_json::from_str(body)?;
        response
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| FramedocError::Envelope {
                provider: "gemini".to_string(),
                message: "no candidate text part in response".to_string(),
            })
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    async fn complete(&self, request: &ChatRequest) -> Result<String> {
        info!(
            "Generating with Gemini (model: {}, attachments: {})",
            self.model,
            request.attachments.len()
        );

        let vendor_request = self.build_request(request);
        let body = self
            .transport
            .dispatch(
                &self.client,
                ProviderKind::Gemini,
                &self.api_key,
                &self.model,
                &vendor_request,
            )
            .await?;

        debug!("Received Gemini response, extracting text");
        Self::extract_text(&body)
    }

    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn check_key(&self) -> Result<bool> {
        let request = ChatRequest::text("Reply with the single word OK.", "-", "ping");
        let mut vendor_request = self.build_request(&request);
        vendor_request.body["generationConfig"]["maxOutputTokens"] = json!(8);

        let result = self
            .transport
            .dispatch(
                &self.client,
                ProviderKind::Gemini,
                &self.api_key,
                &self.model,
                &vendor_request,
            )
            .await;

        match result {
            Ok(_) => Ok(true),
            Err(FramedocError::Api { status, .. }) if status == 401 || status == 403 => {
                warn!("Gemini rejected the API key");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}
