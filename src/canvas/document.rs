//! Canvas Document Model
//!
//! A serialized design-canvas export: a tree of frames and layers plus
//! the document's style catalog. Loaded from JSON, mutated by the
//! layout module, saved back. Field names follow the camelCase
//! convention of canvas export files.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{FramedocError, Result};

/// Node kinds found in canvas exports. Unknown kinds are preserved as
/// `Other` rather than failing the load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NodeKind {
    Frame,
    Text,
    Rectangle,
    Component,
    Instance,
    Group,
    #[serde(other)]
    Other,
}

fn new_node_id() -> String {
    Uuid::new_v4().to_string()
}

/// One node of the canvas tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Node {
    #[serde(default = "new_node_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Hex fill colors, outermost first
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
    /// Text content (TEXT nodes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characters: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,
    /// Auto-layout gap between children
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_spacing: Option<f64>,
    /// Auto-layout padding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
    /// Source component name (INSTANCE nodes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            id: new_node_id(),
            name: String::new(),
            kind: NodeKind::Frame,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            fills: Vec::new(),
            corner_radius: None,
            characters: None,
            font_size: None,
            font_weight: None,
            item_spacing: None,
            padding: None,
            component: None,
            children: Vec::new(),
        }
    }
}

impl Node {
    /// Plain frame at a position.
    pub fn frame(name: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Frame,
            x,
            y,
            width,
            height,
            ..Self::default()
        }
    }

    /// Text node with content.
    pub fn text(name: impl Into<String>, characters: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Text,
            characters: Some(characters.into()),
            ..Self::default()
        }
    }

    /// Visit this node and all descendants depth-first.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}

/// Named styles declared in the document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleCatalog {
    pub colors: Vec<String>,
    pub text: Vec<String>,
    pub effects: Vec<String>,
}

/// An axis-aligned bounding box in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// A loaded canvas document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub name: String,
    pub styles: StyleCatalog,
    /// Top-level screen frames, in document order
    pub frames: Vec<Node>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            name: "Untitled".to_string(),
            styles: StyleCatalog::default(),
            frames: Vec::new(),
        }
    }
}

impl Document {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|e| FramedocError::Document(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&raw)
            .map_err(|e| FramedocError::Document(format!("{}: {}", path.display(), e)))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw)
            .map_err(|e| FramedocError::Document(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }

    /// Select top-level frames by name, preserving document order. An empty
    /// name list selects every top-level frame. Unknown names are an error
    /// so typos fail loudly before any network call.
    pub fn select(&self, names: &[String]) -> Result<Vec<&Node>> {
        if names.is_empty() {
            return Ok(self.frames.iter().collect());
        }
        for name in names {
            if !self.frames.iter().any(|f| &f.name == name) {
                return Err(FramedocError::Document(format!(
                    "No top-level frame named {:?}",
                    name
                )));
            }
        }
        Ok(self
            .frames
            .iter()
            .filter(|f| names.contains(&f.name))
            .collect())
    }

    pub fn find_frame(&self, name: &str) -> Option<&Node> {
        self.frames.iter().find(|f| f.name == name)
    }

    pub fn add_frame(&mut self, node: Node) {
        self.frames.push(node);
    }

    /// Bounding box of a node set. None for an empty set.
    pub fn bounding_box(nodes: &[&Node]) -> Option<Rect> {
        let first = nodes.first()?;
        let mut min_x = first.x;
        let mut min_y = first.y;
        let mut max_x = first.x + first.width;
        let mut max_y = first.y + first.height;
        for node in &nodes[1..] {
            min_x = min_x.min(node.x);
            min_y = min_y.min(node.y);
            max_x = max_x.max(node.x + node.width);
            max_y = max_y.max(node.y + node.height);
        }
        Some(Rect {
            x: min_x,
            y: min_y,
            width: max_x - min_x,
            height: max_y - min_y,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Document {
        Document {
            name: "App".to_string(),
            styles: StyleCatalog::default(),
            frames: vec![
                Node::frame("Login", 0.0, 0.0, 375.0, 812.0),
                Node::frame("Home", 475.0, 0.0, 375.0, 812.0),
                Node::frame("Settings", 950.0, 0.0, 375.0, 812.0),
            ],
        }
    }

    #[test]
    fn test_select_all_when_names_empty() {
        let doc = sample();
        let selected = doc.select(&[]).unwrap();
        assert_eq!(selected.len(), 3);
    }

    #[test]
    fn test_select_preserves_document_order() {
        let doc = sample();
        let names = vec!["Settings".to_string(), "Login".to_string()];
        let selected = doc.select(&names).unwrap();
        let ordered: Vec<&str> = selected.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(ordered, vec!["Login", "Settings"]);
    }

    #[test]
    fn test_select_unknown_name_fails() {
        let doc = sample();
        assert!(doc.select(&["Nope".to_string()]).is_err());
    }

    #[test]
    fn test_bounding_box_spans_selection() {
        let doc = sample();
        let selected = doc.select(&[]).unwrap();
        let bbox = Document::bounding_box(&selected).unwrap();
        assert_eq!(bbox.x, 0.0);
        assert_eq!(bbox.right(), 1325.0);
        assert_eq!(bbox.height, 812.0);
    }

    #[test]
    fn test_load_save_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.json");
        let doc = sample();
        doc.save(&path).unwrap();
        let loaded = Document::load(&path).unwrap();
        assert_eq!(loaded.frames.len(), 3);
        assert_eq!(loaded.frames[0].name, "Login");
    }

    #[test]
    fn test_unknown_node_kind_tolerated() {
        let json = r#"{
            "name": "Doc",
            "frames": [{"id": "1", "name": "Vector Thing", "type": "VECTOR",
                        "x": 0, "y": 0, "width": 10, "height": 10}]
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.frames[0].kind, NodeKind::Other);
    }

    #[test]
    fn test_camel_case_fields() {
        let json = r#"{"id": "1", "name": "Box", "type": "RECTANGLE",
                       "x": 0, "y": 0, "width": 10, "height": 10,
                       "cornerRadius": 8, "itemSpacing": 12}"#;
        let node: Node = serde_json::from_str(json).unwrap();
        assert_eq!(node.corner_radius, Some(8.0));
        assert_eq!(node.item_spacing, Some(12.0));
    }
}
