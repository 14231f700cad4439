//! Prompt Composition
//!
//! Assembles the fixed instructional prompts, the per-request context
//! block, and the task-specific user messages. String templating only;
//! the one correctness requirement is that headers and delimiters match
//! the parser grammar, which the templates import directly.

pub mod context;
pub mod templates;

pub use context::{NO_CONTEXT_PLACEHOLDER, build_context_block};
pub use templates::{
    SectionOptions, documentation_system_prompt, documentation_user_message, flow_system_prompt,
    flow_user_message, regeneration_fallback_note, regeneration_system_prompt,
    regeneration_user_message,
};
