//! Framedoc - AI-Driven Design Handoff Documentation
//!
//! Takes a design-canvas document export, calls one of three LLM
//! providers, and produces developer handoff documentation, user-flow
//! analysis with missing-state detection, and regenerated screens
//! written back into the document.
//!
//! ## Core Features
//!
//! - **Multi-Provider Adapters**: Anthropic, OpenAI, and Gemini request
//!   shaping behind one trait, with optional relay routing
//! - **Tolerant Response Parsing**: section grammar, delimiter-split
//!   edge-case payloads, and validated screen specs that degrade to
//!   defaults instead of failing
//! - **Batched Orchestration**: fixed-size concurrent batches with
//!   rate-limit pauses and per-item failure isolation
//! - **Canvas Mutation**: documentation cards, flow cards, and
//!   regenerated screens laid out back into the document
//!
//! ## Quick Start
//!
//! ```ignore
//! use framedoc::ai::provider::create_provider;
//! use framedoc::canvas::Document;
//! use framedoc::engine::{Engine, NullSink};
//!
//! let config = framedoc::config::ConfigLoader::load()?;
//! let provider = create_provider(&config.llm, &config.transport)?;
//! let engine = Engine::new(provider, Arc::new(NullSink), String::new());
//! let mut doc = Document::load(Path::new("app.json"))?;
//! let outcomes = engine.document_screens(&mut doc, &[], &Default::default()).await?;
//! ```
//!
//! ## Modules
//!
//! - [`ai`]: provider adapters, prompt composition, response parsing
//! - [`canvas`]: document model, fact extraction, generated-node layout
//! - [`engine`]: action orchestration, notifications, quality review
//! - [`config`]: layered TOML configuration

pub mod ai;
pub mod canvas;
pub mod cli;
pub mod config;
pub mod constants;
pub mod engine;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader, TransportMode};

// Error Types
pub use types::error::{ErrorCategory, ErrorClassifier, FramedocError, Result};

// Data Model
pub use types::{
    DesignSystemSnapshot, FrameDescriptor, MissingScreenItem, ScreenSpec, Severity,
};

// =============================================================================
// AI Re-exports
// =============================================================================

pub use ai::{
    ChatRequest,
    LlmProvider,
    ProviderKind,
    SectionParser,
    SharedProvider,
    Transport,
    create_provider,
    extract_screen_spec,
    split_flow_response,
};

// =============================================================================
// Engine Re-exports
// =============================================================================

pub use engine::{
    ActionContext, ActionKind, Engine, FlowReport, Notification, NotificationSink, NullSink,
    ScreenOutcome,
};

// =============================================================================
// Canvas Re-exports
// =============================================================================

pub use canvas::{Document, Node, NodeKind};
