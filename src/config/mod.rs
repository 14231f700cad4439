//! Configuration
//!
//! Layered TOML configuration with environment overrides.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{Config, LlmConfig, OutputConfig, ProjectConfig, TransportConfig, TransportMode};
