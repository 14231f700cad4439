//! Canvas Document Layer
//!
//! The design-document side of the pipeline: the serialized node model,
//! fact extraction for prompts, and construction of generated nodes.

pub mod document;
pub mod layout;
pub mod snapshot;

pub use document::{Document, Node, NodeKind, Rect, StyleCatalog};
pub use layout::{
    build_screen_from_spec, render_documentation_cards, render_flow_cards,
    render_missing_screen_cards,
};
pub use snapshot::{describe_frame, extract_snapshot};
