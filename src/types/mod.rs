//! Core Types
//!
//! Data model shared across the pipeline: errors, design-system facts,
//! per-screen descriptors, and the structured shapes parsed from vendor
//! output.

pub mod design;
pub mod error;
pub mod frame;
pub mod missing;
pub mod screen;

pub use design::{ComponentBuckets, DesignSystemSnapshot};
pub use error::{ErrorCategory, ErrorClassifier, FramedocError, Result};
pub use frame::FrameDescriptor;
pub use missing::{MissingScreenItem, Severity};
pub use screen::{Color, NodeSpec, ScreenSpec, SpecNodeKind};
