//! Missing-Screen Items
//!
//! One AI-identified gap in a user flow. Produced by parsing vendor
//! output, consumed by the regeneration path and by summary-card
//! rendering.

use serde::{Deserialize, Serialize};

/// Severity of a missing screen. Closed set: an unrecognized value is a
/// deserialization failure, never coerced to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// One missing screen identified during flow analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissingScreenItem {
    pub name: String,
    pub reason: String,
    #[serde(default, alias = "componentsNeeded")]
    pub components_needed: Vec<String>,
    pub severity: Severity,
    #[serde(default, alias = "referenceScreen")]
    pub reference_screen: Option<String>,
}
