//! Vendor Response Parsing
//!
//! Turns semi-structured LLM output into typed data. All parsers here
//! narrow to found/not-found and degrade to registered defaults; the
//! retry-vs-skip-vs-surface decision belongs to the engine.
//!
//! ## Modules
//!
//! - `sections`: ordered-header section parser for documentation and flow text
//! - `edge_cases`: delimiter split + missing-screens JSON payload
//! - `screen_json`: fence-stripped, validated visual screen specs
//! - `json_scan`: balanced-brace object scanner shared by the JSON paths

pub mod edge_cases;
pub mod json_scan;
pub mod screen_json;
pub mod sections;

pub use edge_cases::{FlowAnalysis, split_flow_response};
pub use json_scan::extract_object;
pub use screen_json::extract_screen_spec;
pub use sections::{DOC_SECTIONS, FLOW_SECTIONS, SectionParser, SectionSpec};
