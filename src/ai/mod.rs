//! AI Integration Layer
//!
//! Multi-provider request shaping, prompt composition, and
//! structured-output recovery.

pub mod parse;
pub mod prompt;
pub mod provider;

pub use parse::{FlowAnalysis, SectionParser, extract_screen_spec, split_flow_response};
pub use prompt::{SectionOptions, build_context_block};
pub use provider::{
    AnthropicProvider, ChatRequest, GeminiProvider, ImageAttachment, LlmProvider, OpenAiProvider,
    ProviderKind, SharedProvider, Transport, create_provider,
};
