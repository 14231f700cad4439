//! Document Fact Extraction
//!
//! Builds the DesignSystemSnapshot and per-frame FrameDescriptors from
//! a loaded document. Runs fresh at the start of every action.

use crate::constants::canvas::LAYER_TREE_MAX_DEPTH;
use crate::types::{DesignSystemSnapshot, FrameDescriptor};

use super::document::{Document, Node, NodeKind};

/// Extract design-system facts from the whole document.
pub fn extract_snapshot(doc: &Document) -> DesignSystemSnapshot {
    let mut snapshot = DesignSystemSnapshot {
        color_styles: doc.styles.colors.clone(),
        text_styles: doc.styles.text.clone(),
        effect_styles: doc.styles.effects.clone(),
        ..DesignSystemSnapshot::default()
    };

    for frame in &doc.frames {
        let size = format!("{:.0}x{:.0}", frame.width, frame.height);
        *snapshot.frame_sizes.entry(size).or_insert(0) += 1;

        frame.walk(&mut |node| {
            if matches!(node.kind, NodeKind::Component | NodeKind::Instance) {
                snapshot.components.insert(component_name(node));
            }
            if let Some(spacing) = node.item_spacing {
                *snapshot.spacing.entry(spacing.round() as i64).or_insert(0) += 1;
            }
            if let Some(padding) = node.padding {
                *snapshot.padding.entry(padding.round() as i64).or_insert(0) += 1;
            }
        });
    }

    snapshot
}

/// Build the serializable facts for one selected frame.
pub fn describe_frame(frame: &Node) -> FrameDescriptor {
    let mut layer_tree = String::new();
    for child in &frame.children {
        write_layer(&mut layer_tree, child, 0);
    }

    let mut components = Vec::new();
    frame.walk(&mut |node| {
        if matches!(node.kind, NodeKind::Component | NodeKind::Instance) {
            let name = component_name(node).to_string();
            if !components.contains(&name) {
                components.push(name);
            }
        }
    });

    FrameDescriptor {
        name: frame.name.clone(),
        width: frame.width,
        height: frame.height,
        layer_tree,
        components,
    }
}

fn component_name(node: &Node) -> &str {
    node.component.as_deref().unwrap_or(&node.name)
}

fn write_layer(out: &mut String, node: &Node, depth: usize) {
    if depth >= LAYER_TREE_MAX_DEPTH {
        return;
    }
    out.push_str(&"  ".repeat(depth));
    out.push_str(&format!("- {} ({:?})\n", node.name, node.kind));
    for child in &node.children {
        write_layer(out, child, depth + 1);
    }
}
