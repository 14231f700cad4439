//! Frame Descriptor
//!
//! Per-screen serializable facts captured at the start of an action and
//! read-only afterward. The layer tree is depth-limited text, not the
//! full node graph.

use serde::{Deserialize, Serialize};

/// Facts about one selected screen, as sent to the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameDescriptor {
    pub name: String,
    pub width: f64,
    pub height: f64,
    /// Indented textual layer tree, depth-limited at extraction time
    pub layer_tree: String,
    /// Component instance names present anywhere in the frame
    pub components: Vec<String>,
}

impl FrameDescriptor {
    /// Render the descriptor as a prompt section for one screen.
    pub fn to_prompt_section(&self) -> String {
        let mut out = format!(
            "## Screen: {}\n\nSize: {:.0}x{:.0}\n\nLayers:\n{}\n",
            self.name, self.width, self.height, self.layer_tree
        );
        if !self.components.is_empty() {
            out.push_str(&format!(
                "\nComponents used: {}\n",
                self.components.join(", ")
            ));
        }
        out
    }
}
