//! Visual Screen Spec
//!
//! The typed tree a vendor returns when asked to regenerate a missing
//! screen. Each node exclusively owns its children; no back-references.
//! Depth is unbounded in principle but practically shallow.

use serde::{Deserialize, Serialize};

/// Node kinds the regeneration prompt allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SpecNodeKind {
    Frame,
    Text,
    Rectangle,
}

/// One node of a generated screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSpec {
    #[serde(rename = "type")]
    pub kind: SpecNodeKind,
    pub name: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    /// Hex fill color, e.g. "#1A73E8"
    #[serde(default)]
    pub fill: Option<String>,
    #[serde(default, alias = "cornerRadius")]
    pub corner_radius: Option<f64>,
    /// Text content, TEXT nodes only
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, alias = "fontSize")]
    pub font_size: Option<f64>,
    #[serde(default, alias = "fontWeight")]
    pub font_weight: Option<u16>,
    #[serde(default)]
    pub children: Vec<NodeSpec>,
}

impl NodeSpec {
    /// Count this node and all descendants.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(NodeSpec::node_count).sum::<usize>()
    }
}

/// Root of a generated screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenSpec {
    pub name: String,
    pub width: f64,
    pub height: f64,
    /// Hex background color
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub children: Vec<NodeSpec>,
}

impl ScreenSpec {
    /// Root plus all declared children, recursively.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(NodeSpec::node_count).sum::<usize>()
    }

    /// A spec is usable only with a non-empty name and positive finite size.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }
}

/// An sRGB color parsed from a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Parse "#RRGGBB" or "RRGGBB". Returns None for anything else.
    pub fn parse(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// True when all channels are within `tolerance` of each other.
    pub fn is_grayish(&self, tolerance: u8) -> bool {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        max - min <= tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(kind: SpecNodeKind) -> NodeSpec {
        NodeSpec {
            kind,
            name: "leaf".to_string(),
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

    #[test]
    fn test_node_count_recursive() {
        let mut frame = leaf(SpecNodeKind::Frame);
        frame.children = vec![leaf(SpecNodeKind::Text), leaf(SpecNodeKind::Rectangle)];
        let spec = ScreenSpec {
            name: "Error State".to_string(),
            width: 375.0,
            height: 812.0,
            background: None,
            children: vec![frame, leaf(SpecNodeKind::Text)],
        };
        // root + frame + 2 grandchildren + sibling text
        assert_eq!(spec.node_count(), 5);
    }

    #[test]
    fn test_validity_rules() {
        let mut spec = ScreenSpec {
            name: "Ok".to_string(),
            width: 375.0,
            height: 812.0,
            background: None,
            children: vec![],
        };
        assert!(spec.is_valid());

        spec.name = "  ".to_string();
        assert!(!spec.is_valid());

        spec.name = "Ok".to_string();
        spec.width = 0.0;
        assert!(!spec.is_valid());

        spec.width = f64::NAN;
        assert!(!spec.is_valid());
    }

    #[test]
    fn test_deserialize_with_aliases() {
        let node: NodeSpec = serde_json::from_str(
            r#"{"type": "TEXT", "name": "Title", "fontSize": 24, "cornerRadius": 4}"#,
        )
        .unwrap();
        assert_eq!(node.kind, SpecNodeKind::Text);
        assert_eq!(node.font_size, Some(24.0));
        assert_eq!(node.corner_radius, Some(4.0));
    }

    #[test]
    fn test_color_parse() {
        assert_eq!(
            Color::parse("#1A73E8"),
            Some(Color {
                r: 0x1A,
                g: 0x73,
                b: 0xE8
            })
        );
        assert_eq!(Color::parse("ffffff"), Some(Color { r: 255, g: 255, b: 255 }));
        assert_eq!(Color::parse("#fff"), None);
        assert_eq!(Color::parse("not-a-color"), None);
    }

    #[test]
    fn test_grayish_detection() {
        assert!(Color::parse("#cccccc").unwrap().is_grayish(8));
        assert!(!Color::parse("#1A73E8").unwrap().is_grayish(8));
    }
}
