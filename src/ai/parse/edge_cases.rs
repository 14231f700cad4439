//! Edge-Case Payload Extraction
//!
//! The flow prompt asks for markdown documentation, a literal delimiter
//! line, then one JSON object listing missing screens. This module
//! splits that two-part response. Parsing never fails outward: a
//! missing delimiter, absent object, or malformed JSON all degrade to
//! an empty missing-screens list.

use serde::Deserialize;
use tracing::{debug, warn};

use super::json_scan::extract_object;
use crate::constants::parse::EDGE_CASE_DELIMITER;
use crate::types::MissingScreenItem;

/// The two halves of a flow-analysis response.
#[derive(Debug, Clone)]
pub struct FlowAnalysis {
    /// Markdown flow documentation (everything before the delimiter)
    pub flow_text: String,
    /// Parsed missing screens; empty on any parse failure
    pub missing_screens: Vec<MissingScreenItem>,
}

#[derive(Deserialize)]
struct MissingScreensPayload {
    #[serde(default)]
    missing_screens: Vec<MissingScreenItem>,
}

/// Split a flow response on the edge-case delimiter and parse the
/// trailing JSON payload.
pub fn split_flow_response(text: &str) -> FlowAnalysis {
    match text.split_once(EDGE_CASE_DELIMITER) {
        None => {
            debug!("Flow response has no edge-case delimiter");
            FlowAnalysis {
                flow_text: text.trim().to_string(),
                missing_screens: Vec::new(),
            }
        }
        Some((before, after)) => {
            let missing_screens = parse_payload(after);
            FlowAnalysis {
                flow_text: before.trim().to_string(),
                missing_screens,
            }
        }
    }
}

fn parse_payload(after: &str) -> Vec<MissingScreenItem> {
    let Some(json) = extract_object(after) else {
        warn!("No JSON object found after edge-case delimiter");
        return Vec::new();
    };
    match serde_json::from_str::<MissingScreensPayload>(json) {
        Ok(payload) => payload.missing_screens,
        Err(e) => {
            warn!("Edge-case payload failed to parse: {}", e);
            Vec::new()
        }
    }
}
