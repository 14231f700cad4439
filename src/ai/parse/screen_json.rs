//! Visual-Spec Extraction
//!
//! The regeneration prompt asks for bare JSON, but vendors still wrap
//! output in code fences or prose now and then. This module strips
//! fences, scans for the first balanced object, and validates the
//! required fields before accepting the spec. Returns None rather than
//! an error on any failure; the engine owns the retry decision.

use tracing::{debug, warn};

use super::json_scan::extract_object;
use crate::types::ScreenSpec;

/// Extract and validate a [`ScreenSpec`] from raw vendor text.
pub fn extract_screen_spec(text: &str) -> Option<ScreenSpec> {
    let stripped = strip_code_fences(text);
    let Some(json) = extract_object(&stripped) else {
        warn!("No JSON object found in screen regeneration response");
        return None;
    };

    let spec: ScreenSpec = match serde_json::from_str(json) {
        Ok(spec) => spec,
        Err(e) => {
            warn!("Screen spec failed to parse: {}", e);
            return None;
        }
    };

    if !spec.is_valid() {
        warn!(
            "Screen spec rejected: name={:?}, size={}x{}",
            spec.name, spec.width, spec.height
        );
        return None;
    }

    debug!("Parsed screen spec '{}' with {} nodes", spec.name, spec.node_count());
    Some(spec)
}

/// Remove leading/trailing markdown code fences (```json ... ```).
fn strip_code_fences(text: &str) -> String {
    let mut s = text.trim();

    if s.starts_with("```")
        && let Some(first_newline) = s.find('\n')
    {
        s = &s[first_newline + 1..];
    }
    if let Some(stripped) = s.trim_end().strip_suffix("```") {
        s = stripped;
    }

    s.trim().to_string()
}
