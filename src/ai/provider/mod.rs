//! LLM Provider Abstraction
//!
//! One adapter per vendor builds that vendor's request envelope from a
//! common (system prompt, context block, user message, attachments)
//! quadruple and extracts plain text from the vendor's response shape.
//!
//! Adapters never retry; the single bounded retry in this system lives
//! in the engine's regeneration path.
//!
//! ## Modules
//!
//! - `anthropic`: Anthropic Messages API
//! - `openai`: OpenAI Chat Completions API
//! - `gemini`: Google Gemini generateContent API
//! - `transport`: direct vs relay request routing

mod anthropic;
mod gemini;
mod openai;
pub mod transport;

pub use anthropic::AnthropicProvider;
pub use gemini::GeminiProvider;
pub use openai::OpenAiProvider;
pub use transport::{Transport, VendorRequest};

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{LlmConfig, TransportMode};
use crate::types::{FramedocError, Result};

// =============================================================================
// Request Types
// =============================================================================

/// A base64-encoded image sent with a vision request.
#[derive(Debug, Clone)]
pub struct ImageAttachment {
    /// MIME type, e.g. "image/png"
    pub media_type: String,
    /// Base64 payload without data-URI prefix
    pub data: String,
}

/// The vendor-neutral request every adapter translates.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// Fixed instructional prompt for the task
    pub system_prompt: String,
    /// Serialized design-system facts + project context
    pub context_block: String,
    /// Task-specific user message
    pub user_message: String,
    /// Screenshots for the vision path; empty for text-only requests
    pub attachments: Vec<ImageAttachment>,
}

impl ChatRequest {
    pub fn text(
        system_prompt: impl Into<String>,
        context_block: impl Into<String>,
        user_message: impl Into<String>,
    ) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            context_block: context_block.into(),
            user_message: user_message.into(),
            attachments: Vec::new(),
        }
    }

    pub fn with_attachments(mut self, attachments: Vec<ImageAttachment>) -> Self {
        self.attachments = attachments;
        self
    }
}

// =============================================================================
// Provider Identity
// =============================================================================

/// The three supported vendors. Fixed set, defined at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Anthropic,
    OpenAi,
    Gemini,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Anthropic => "anthropic",
            Self::OpenAi => "openai",
            Self::Gemini => "gemini",
        }
    }

    /// Selectable model identifiers for this vendor.
    pub fn models(&self) -> &'static [&'static str] {
        match self {
            Self::Anthropic => &[
                "claude-sonnet-4-20250514",
                "claude-3-5-sonnet-20241022",
                "claude-3-5-haiku-20241022",
            ],
            Self::OpenAi => &["gpt-4o", "gpt-4o-mini", "gpt-4-turbo"],
            Self::Gemini => &["gemini-2.0-flash", "gemini-1.5-pro", "gemini-1.5-flash"],
        }
    }

    /// First entry of [`Self::models`].
    pub fn default_model(&self) -> &'static str {
        self.models()[0]
    }

    /// Environment variable consulted when no key is configured.
    pub fn key_env_var(&self) -> &'static str {
        match self {
            Self::Anthropic => "ANTHROPIC_API_KEY",
            Self::OpenAi => "OPENAI_API_KEY",
            Self::Gemini => "GEMINI_API_KEY",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = FramedocError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "anthropic" => Ok(Self::Anthropic),
            "openai" => Ok(Self::OpenAi),
            "gemini" => Ok(Self::Gemini),
            _ => Err(FramedocError::Config(format!(
                "Unknown provider: {}. Supported: anthropic, openai, gemini",
                s
            ))),
        }
    }
}

// =============================================================================
// LLM Provider Trait
// =============================================================================

/// Shared LLM provider type used across the engine.
pub type SharedProvider = Arc<dyn LlmProvider>;

/// Vendor adapter: translate a [`ChatRequest`] into the vendor envelope,
/// send it, and extract the generated text.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// One request/response exchange. Non-2xx surfaces as
    /// `FramedocError::Api { status, body }`.
    async fn complete(&self, request: &ChatRequest) -> Result<String>;

    /// Provider name for logging
    fn name(&self) -> &str;

    /// Model name currently in use
    fn model(&self) -> &str;

    /// Minimal ping to check the configured key is accepted.
    async fn check_key(&self) -> Result<bool>;
}

/// Create a shared provider from configuration.
pub fn create_provider(config: &LlmConfig, transport: &crate::config::TransportConfig) -> Result<SharedProvider> {
    let kind: ProviderKind = config.provider.parse()?;
    let transport = match transport.mode {
        TransportMode::Direct => Transport::Direct,
        TransportMode::Relay => {
            let endpoint = transport
                .relay_url
                .as_deref()
                .ok_or_else(|| {
                    FramedocError::Config("transport.relay_url is required for relay mode".to_string())
                })?
                .parse::<url::Url>()
                .map_err(|e| FramedocError::Config(format!("Invalid relay URL: {}", e)))?;
            Transport::Relay { endpoint }
        }
    };

    match kind {
        ProviderKind::Anthropic => Ok(Arc::new(AnthropicProvider::new(config, transport)?)),
        ProviderKind::OpenAi => Ok(Arc::new(OpenAiProvider::new(config, transport)?)),
        ProviderKind::Gemini => Ok(Arc::new(GeminiProvider::new(config, transport)?)),
    }
}

/// Resolve the API key from config or the vendor's env var.
pub(crate) fn resolve_api_key(
    config: &LlmConfig,
    kind: ProviderKind,
) -> Result<secrecy::SecretString> {
    config
        .api_key
        .clone()
        .or_else(|| std::env::var(kind.key_env_var()).ok())
        .filter(|k| !k.trim().is_empty())
        .map(secrecy::SecretString::from)
        .ok_or(FramedocError::MissingApiKey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_kind_round_trip() {
        for kind in [ProviderKind::Anthropic, ProviderKind::OpenAi, ProviderKind::Gemini] {
            let parsed: ProviderKind = kind.as_str().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_unknown_provider_rejected() {
        assert!("mistral".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn test_default_model_is_listed() {
        for kind in [ProviderKind::Anthropic, ProviderKind::OpenAi, ProviderKind::Gemini] {
            assert!(kind.models().contains(&kind.default_model()));
        }
    }
}
