//! Configuration Types
//!
//! All configuration structures with sensible defaults.
//! Supports global (~/.config/framedoc/) and project (.framedoc/) level
//! configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::network::DEFAULT_TIMEOUT_SECS;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// LLM provider settings
    pub llm: LlmConfig,

    /// Request transport settings (direct or relay)
    pub transport: TransportConfig,

    /// Project-specific settings
    pub project: ProjectConfig,

    /// Generated output settings
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            llm: LlmConfig::default(),
            transport: TransportConfig::default(),
            project: ProjectConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `FramedocError::Config` on validation failure.
    pub fn validate(&self) -> crate::types::Result<()> {
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(crate::types::FramedocError::Config(format!(
                "LLM temperature must be between 0.0 and 2.0, got {}",
                self.llm.temperature
            )));
        }

        if self.llm.timeout_secs == 0 {
            return Err(crate::types::FramedocError::Config(
                "LLM timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.transport.mode == TransportMode::Relay {
            let endpoint = self.transport.relay_url.as_deref().unwrap_or_default();
            if url::Url::parse(endpoint).is_err() {
                return Err(crate::types::FramedocError::Config(format!(
                    "transport.relay_url must be a valid URL when mode is \"relay\", got {:?}",
                    endpoint
                )));
            }
        }

        Ok(())
    }
}

// =============================================================================
// LLM Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider type: "anthropic", "openai", "gemini"
    pub provider: String,

    /// Model name (provider-specific); provider default when absent
    pub model: Option<String>,

    /// API key. Falls back to the provider's env var when absent.
    /// Never serialized to output for security.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Temperature for LLM generation
    pub temperature: f32,

    /// Maximum tokens to generate
    pub max_tokens: usize,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "anthropic".to_string(),
            model: None,
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            temperature: 0.3,
            max_tokens: 4096,
        }
    }
}

// =============================================================================
// Transport Configuration
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    /// Call the vendor endpoint directly
    #[default]
    Direct,
    /// Route through a forwarding relay endpoint
    Relay,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TransportConfig {
    pub mode: TransportMode,

    /// Relay endpoint, required when mode is "relay"
    pub relay_url: Option<String>,
}

// =============================================================================
// Project Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProjectConfig {
    /// Project name (defaults to document name)
    pub name: Option<String>,

    /// Free-text project context sent with every request
    pub context: String,
}

// =============================================================================
// Output Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for exported markdown
    pub dir: PathBuf,

    /// Also write generated docs as markdown files
    pub markdown: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("handoff"),
            markdown: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_temperature_out_of_range_rejected() {
        let mut config = Config::default();
        config.llm.temperature = 3.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_relay_mode_requires_url() {
        let mut config = Config::default();
        config.transport.mode = TransportMode::Relay;
        assert!(config.validate().is_err());

        config.transport.relay_url = Some("https://relay.example.com/v1/forward".to_string());
        assert!(config.validate().is_ok());
    }
}
