//! Generated-Node Layout
//!
//! Builds the card sets and regenerated screens that flow back into the
//! document: documentation cards below a source frame, flow-analysis
//! and missing-screen cards beside the selection's bounding box, and
//! full screens constructed from a parsed VisualScreenSpec.

use std::collections::BTreeMap;

use chrono::Utc;
use tracing::debug;

use crate::ai::parse::{DOC_SECTIONS, FLOW_SECTIONS};
use crate::constants::canvas::{
    CARD_FONT_SIZE, CARD_GAP, CARD_HEADING_SIZE, CARD_PADDING, CARD_SPACING, CARD_WIDTH,
};
use crate::types::{FramedocError, MissingScreenItem, NodeSpec, Result, ScreenSpec};

use super::document::{Document, Node, NodeKind, Rect};

const CARD_BACKGROUND: &str = "#FFFFFF";
const HEADING_COLOR: &str = "#111111";
const BODY_COLOR: &str = "#333333";
const LINE_HEIGHT_FACTOR: f64 = 1.5;

/// Render one documentation card below its source frame.
///
/// Sections render in grammar order; sections whose content is empty are
/// skipped (defaults like the link placeholder still render).
pub fn render_documentation_cards(
    doc: &mut Document,
    source_name: &str,
    sections: &BTreeMap<&'static str, String>,
) -> Result<()> {
    let source = doc.find_frame(source_name).ok_or_else(|| {
        FramedocError::Document(format!("Source frame {:?} disappeared", source_name))
    })?;
    let x = source.x;
    let y = source.y + source.height + CARD_GAP;

    let mut card = begin_card(format!("{source_name} — Handoff"), x, y);
    for spec in DOC_SECTIONS {
        if let Some(content) = sections.get(spec.key)
            && !content.is_empty()
        {
            push_section(&mut card, spec.header, content);
        }
    }
    finish_card(&mut card);

    debug!("Rendered documentation card for {}", source_name);
    doc.add_frame(card);
    Ok(())
}

/// Render the flow-analysis card beside the selection's bounding box.
///
/// Recognized flow sections render individually; when the vendor used a
/// prose layout the parser did not recognize, the full flow text renders
/// as one body instead so the analysis is never lost.
pub fn render_flow_cards(
    doc: &mut Document,
    flow_text: &str,
    sections: &BTreeMap<&'static str, String>,
    anchor: Rect,
) {
    let mut card = begin_card("Flow Analysis", anchor.right() + CARD_GAP, anchor.y);
    if sections.values().all(String::is_empty) {
        push_section(&mut card, "Flow Analysis", flow_text);
    } else {
        for spec in FLOW_SECTIONS {
            if let Some(content) = sections.get(spec.key)
                && !content.is_empty()
            {
                push_section(&mut card, spec.header, content);
            }
        }
    }
    finish_card(&mut card);
    doc.add_frame(card);
}

/// Render one summary card per missing screen, stacked beside the flow card.
pub fn render_missing_screen_cards(
    doc: &mut Document,
    items: &[MissingScreenItem],
    anchor: Rect,
) {
    let x = anchor.right() + CARD_GAP * 2.0 + CARD_WIDTH;
    let mut y = anchor.y;

    for item in items {
        let mut card = begin_card(format!("Missing: {}", item.name), x, y);
        push_section(&mut card, &format!("{} ({})", item.name, item.severity), &item.reason);
        if !item.components_needed.is_empty() {
            push_section(
                &mut card,
                "Components needed",
                &item.components_needed.join(", "),
            );
        }
        if let Some(reference) = &item.reference_screen {
            push_section(&mut card, "Relates to", reference);
        }
        finish_card(&mut card);
        y = card.y + card.height + CARD_SPACING;
        doc.add_frame(card);
    }
}

/// Build a new screen from a parsed spec, anchored beside its reference
/// frame (or beside the document's frames when the reference is gone).
pub fn build_screen_from_spec(
    doc: &mut Document,
    spec: &ScreenSpec,
    reference_name: Option<&str>,
) -> Result<String> {
    let anchor = reference_name
        .and_then(|name| doc.find_frame(name))
        .map(|frame| Rect {
            x: frame.x,
            y: frame.y,
            width: frame.width,
            height: frame.height,
        })
        .or_else(|| {
            let all: Vec<&Node> = doc.frames.iter().collect();
            Document::bounding_box(&all)
        })
        .unwrap_or(Rect { x: 0.0, y: 0.0, width: 0.0, height: 0.0 });

    let mut root = Node::frame(
        spec.name.clone(),
        anchor.right() + CARD_GAP,
        anchor.y,
        spec.width,
        spec.height,
    );
    if let Some(background) = &spec.background {
        root.fills = vec![background.clone()];
    }
    root.children = spec.children.iter().map(node_from_spec).collect();

    let name = root.name.clone();
    debug!("Built screen {:?} ({} nodes)", name, spec.node_count());
    doc.add_frame(root);
    Ok(name)
}

fn node_from_spec(spec: &NodeSpec) -> Node {
    let kind = match spec.kind {
        crate::types::SpecNodeKind::Frame => NodeKind::Frame,
        crate::types::SpecNodeKind::Text => NodeKind::Text,
        crate::types::SpecNodeKind::Rectangle => NodeKind::Rectangle,
    };
    Node {
        name: spec.name.clone(),
        kind,
        x: spec.x,
        y: spec.y,
        width: spec.width,
        height: spec.height,
        fills: spec.fill.iter().cloned().collect(),
        corner_radius: spec.corner_radius,
        characters: spec.text.clone(),
        font_size: spec.font_size,
        font_weight: spec.font_weight,
        children: spec.children.iter().map(node_from_spec).collect(),
        ..Node::default()
    }
}

// =============================================================================
// Card Construction
// =============================================================================

fn begin_card(name: impl Into<String>, x: f64, y: f64) -> Node {
    let mut card = Node::frame(name, x, y, CARD_WIDTH, CARD_PADDING);
    card.fills = vec![CARD_BACKGROUND.to_string()];
    card.corner_radius = Some(8.0);
    card
}

/// Append a heading + body pair, advancing the card's height cursor.
fn push_section(card: &mut Node, heading: &str, body: &str) {
    let mut y = card.height;

    let mut heading_node = Node::text(heading.to_string(), heading.to_string());
    heading_node.x = CARD_PADDING;
    heading_node.y = y;
    heading_node.width = CARD_WIDTH - CARD_PADDING * 2.0;
    heading_node.height = CARD_HEADING_SIZE * LINE_HEIGHT_FACTOR;
    heading_node.font_size = Some(CARD_HEADING_SIZE);
    heading_node.font_weight = Some(700);
    heading_node.fills = vec![HEADING_COLOR.to_string()];
    y += heading_node.height + 4.0;

    let mut body_node = Node::text(format!("{heading} body"), body.to_string());
    body_node.x = CARD_PADDING;
    body_node.y = y;
    body_node.width = CARD_WIDTH - CARD_PADDING * 2.0;
    body_node.height = estimate_text_height(body);
    body_node.font_size = Some(CARD_FONT_SIZE);
    body_node.fills = vec![BODY_COLOR.to_string()];
    y += body_node.height + CARD_PADDING;

    card.children.push(heading_node);
    card.children.push(body_node);
    card.height = y;
}

/// Stamp the generation date and close out the card's height.
fn finish_card(card: &mut Node) {
    let stamp = format!("Generated {}", Utc::now().format("%Y-%m-%d"));
    let mut footer = Node::text("Generated", stamp);
    footer.x = CARD_PADDING;
    footer.y = card.height;
    footer.width = CARD_WIDTH - CARD_PADDING * 2.0;
    footer.height = CARD_FONT_SIZE * LINE_HEIGHT_FACTOR;
    footer.font_size = Some(CARD_FONT_SIZE);
    footer.fills = vec![BODY_COLOR.to_string()];
    card.height += footer.height + CARD_PADDING;
    card.children.push(footer);
}

fn estimate_text_height(text: &str) -> f64 {
    let lines = text.lines().count().max(1) as f64;
    lines * CARD_FONT_SIZE * LINE_HEIGHT_FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::parse::SectionParser;
    use crate::types::{Severity, SpecNodeKind};

    fn doc_with_login() -> Document {
        Document {
            frames: vec![Node::frame("Login", 100.0, 50.0, 375.0, 812.0)],
            ..Document::default()
        }
    }

    #[test]
    fn test_documentation_card_anchored_below_source() {
        let mut doc = doc_with_login();
        let sections = SectionParser::documentation().parse("## Purpose\nDoes X");
        render_documentation_cards(&mut doc, "Login", &sections).unwrap();

        assert_eq!(doc.frames.len(), 2);
        let card = &doc.frames[1];
        assert_eq!(card.x, 100.0);
        assert_eq!(card.y, 50.0 + 812.0 + CARD_GAP);
        // Purpose content plus the default link placeholder both render
        let texts: Vec<&str> = card
            .children
            .iter()
            .filter_map(|n| n.characters.as_deref())
            .collect();
        assert!(texts.contains(&"Does X"));
        assert!(texts.iter().any(|t| t.contains("component library")));
    }

    #[test]
    fn test_documentation_card_fails_when_source_missing() {
        let mut doc = doc_with_login();
        let sections = SectionParser::documentation().parse("## Purpose\nDoes X");
        assert!(render_documentation_cards(&mut doc, "Gone", &sections).is_err());
    }

    #[test]
    fn test_flow_card_anchored_beside_bbox() {
        let mut doc = doc_with_login();
        let text = "## Flow Overview\nTight loop.";
        let sections = SectionParser::flow().parse(text);
        let anchor = Rect { x: 100.0, y: 50.0, width: 375.0, height: 812.0 };
        render_flow_cards(&mut doc, text, &sections, anchor);
        let card = &doc.frames[1];
        assert_eq!(card.x, anchor.right() + CARD_GAP);
        assert_eq!(card.y, 50.0);
        assert!(card
            .children
            .iter()
            .any(|n| n.characters.as_deref() == Some("Tight loop.")));
    }

    #[test]
    fn test_flow_card_falls_back_to_raw_text() {
        let mut doc = doc_with_login();
        let text = "A prose analysis with no recognized headers.";
        let sections = SectionParser::flow().parse(text);
        let anchor = Rect { x: 0.0, y: 0.0, width: 375.0, height: 812.0 };
        render_flow_cards(&mut doc, text, &sections, anchor);
        let card = &doc.frames[1];
        assert!(card
            .children
            .iter()
            .any(|n| n.characters.as_deref() == Some(text)));
    }

    #[test]
    fn test_missing_screen_cards_stack_vertically() {
        let mut doc = doc_with_login();
        let items = vec![
            MissingScreenItem {
                name: "Error State".to_string(),
                reason: "No failure path".to_string(),
                components_needed: vec![],
                severity: Severity::High,
                reference_screen: Some("Login".to_string()),
            },
            MissingScreenItem {
                name: "Empty State".to_string(),
                reason: "List can be empty".to_string(),
                components_needed: vec![],
                severity: Severity::Low,
                reference_screen: None,
            },
        ];
        let anchor = Rect { x: 0.0, y: 0.0, width: 375.0, height: 812.0 };
        render_missing_screen_cards(&mut doc, &items, anchor);
        assert_eq!(doc.frames.len(), 3);
        assert!(doc.frames[2].y > doc.frames[1].y);
    }

    #[test]
    fn test_build_screen_anchors_beside_reference() {
        let mut doc = doc_with_login();
        let spec = ScreenSpec {
            name: "Error State".to_string(),
            width: 375.0,
            height: 812.0,
            background: Some("#FFFFFF".to_string()),
            children: vec![NodeSpec {
                kind: SpecNodeKind::Text,
                name: "Title".to_string(),
                x: 24.0,
                y: 64.0,
                width: 327.0,
                height: 32.0,
                fill: Some("#111111".to_string()),
                corner_radius: None,
                text: Some("Something went wrong".to_string()),
                font_size: Some(24.0),
                font_weight: Some(600),
                children: vec![],
            }],
        };
        let name = build_screen_from_spec(&mut doc, &spec, Some("Login")).unwrap();
        assert_eq!(name, "Error State");

        let screen = doc.find_frame("Error State").unwrap();
        assert_eq!(screen.x, 100.0 + 375.0 + CARD_GAP);
        assert_eq!(screen.children.len(), 1);
        assert_eq!(screen.children[0].kind, NodeKind::Text);
        assert_eq!(
            screen.children[0].characters.as_deref(),
            Some("Something went wrong")
        );
    }

    #[test]
    fn test_build_screen_without_reference_uses_document_bounds() {
        let mut doc = doc_with_login();
        let spec = ScreenSpec {
            name: "Orphan".to_string(),
            width: 100.0,
            height: 100.0,
            background: None,
            children: vec![],
        };
        build_screen_from_spec(&mut doc, &spec, None).unwrap();
        let screen = doc.find_frame("Orphan").unwrap();
        assert_eq!(screen.x, 100.0 + 375.0 + CARD_GAP);
    }
}
