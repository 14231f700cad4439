//! Outbound Notifications
//!
//! The closed set of one-shot messages the engine emits while an action
//! runs. Notifications are fire-and-forget: they are not queued or
//! retried, and a sink that drops one simply misses it.

use std::sync::Arc;

use crate::types::MissingScreenItem;

/// The three user actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Documentation,
    FlowAnalysis,
    Regeneration,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Documentation => write!(f, "documentation"),
            Self::FlowAnalysis => write!(f, "flow analysis"),
            Self::Regeneration => write!(f, "regeneration"),
        }
    }
}

/// One-shot messages emitted toward the UI.
#[derive(Debug, Clone)]
pub enum Notification {
    /// Number of screens the action will operate on
    SelectionChanged { count: usize },
    /// Human-readable progress line
    Progress { message: String },
    /// An action finished, successfully or not
    ActionComplete { action: ActionKind, message: String },
    /// Structured edge-case result from flow analysis
    EdgeCases { missing: Vec<MissingScreenItem> },
    /// Screens created by the regeneration action
    ScreensCreated { count: usize },
    /// Classified user-facing error sentence
    Error { message: String },
    KeyValidated,
    KeyInvalid,
}

/// Receiver for engine notifications.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

pub type SharedSink = Arc<dyn NotificationSink>;

/// Sink that discards everything. Useful in tests and library embedding.
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&self, _notification: Notification) {}
}
