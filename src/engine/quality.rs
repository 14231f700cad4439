//! Regeneration Quality Heuristic
//!
//! Advisory inspection of a parsed screen spec for the telltale signs
//! of a low-effort result: a near-uniform gray background, no rounded
//! corners anywhere, no text anywhere. Warnings are logged by the
//! caller and never block or reject the output.

use crate::types::{Color, NodeSpec, ScreenSpec, SpecNodeKind};

/// Gray detection: channels within this distance of each other
const GRAY_TOLERANCE: u8 = 8;
/// Mid-range band that excludes plain white and black backgrounds
const GRAY_BAND: std::ops::RangeInclusive<u8> = 60..=220;

/// Inspect a spec and return advisory warnings. Empty means no findings.
pub fn review(spec: &ScreenSpec) -> Vec<String> {
    let mut warnings = Vec::new();

    if let Some(color) = spec.background.as_deref().and_then(Color::parse)
        && color.is_grayish(GRAY_TOLERANCE)
        && GRAY_BAND.contains(&color.r)
    {
        warnings.push("background is a near-uniform gray".to_string());
    }

    if !any_node(&spec.children, &|n| n.corner_radius.unwrap_or(0.0) > 0.0) {
        warnings.push("no rounded corners anywhere in the tree".to_string());
    }

    if !any_node(&spec.children, &|n| {
        n.kind == SpecNodeKind::Text && n.text.as_deref().is_some_and(|t| !t.trim().is_empty())
    }) {
        warnings.push("no text content anywhere in the tree".to_string());
    }

    warnings
}

fn any_node(nodes: &[NodeSpec], predicate: &impl Fn(&NodeSpec) -> bool) -> bool {
    nodes
        .iter()
        .any(|n| predicate(n) || any_node(&n.children, predicate))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(kind: SpecNodeKind) -> NodeSpec {
        NodeSpec {
            kind,
            name: "n".to_string(),
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
            fill: None,
            corner_radius: None,
            text: None,
            font_size: None,
            font_weight: None,
            children: vec![],
        }
    }

    fn spec(background: Option<&str>, children: Vec<NodeSpec>) -> ScreenSpec {
        ScreenSpec {
            name: "S".to_string(),
            width: 375.0,
            height: 812.0,
            background: background.map(str::to_string),
            children,
        }
    }

    #[test]
    fn test_good_spec_has_no_warnings() {
        let mut button = node(SpecNodeKind::Rectangle);
        button.corner_radius = Some(8.0);
        let mut title = node(SpecNodeKind::Text);
        title.text = Some("Hello".to_string());
        let warnings = review(&spec(Some("#FFFFFF"), vec![button, title]));
        assert!(warnings.is_empty(), "{warnings:?}");
    }

    #[test]
    fn test_gray_background_flagged() {
        let mut title = node(SpecNodeKind::Text);
        title.text = Some("Hello".to_string());
        let mut rounded = node(SpecNodeKind::Rectangle);
        rounded.corner_radius = Some(4.0);
        let warnings = review(&spec(Some("#CCCCCC"), vec![title, rounded]));
        assert_eq!(warnings, vec!["background is a near-uniform gray"]);
    }

    #[test]
    fn test_white_background_not_flagged_as_gray() {
        let mut title = node(SpecNodeKind::Text);
        title.text = Some("Hello".to_string());
        let mut rounded = node(SpecNodeKind::Rectangle);
        rounded.corner_radius = Some(4.0);
        assert!(review(&spec(Some("#FFFFFF"), vec![title, rounded])).is_empty());
    }

    #[test]
    fn test_flat_gray_boxes_collect_all_warnings() {
        let warnings = review(&spec(Some("#BBBBBB"), vec![node(SpecNodeKind::Rectangle)]));
        assert_eq!(warnings.len(), 3);
    }

    #[test]
    fn test_nested_text_counts() {
        let mut inner = node(SpecNodeKind::Text);
        inner.text = Some("Deep".to_string());
        let mut frame = node(SpecNodeKind::Frame);
        frame.corner_radius = Some(12.0);
        frame.children = vec![inner];
        assert!(review(&spec(None, vec![frame])).is_empty());
    }
}
