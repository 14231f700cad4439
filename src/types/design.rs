//! Design System Snapshot
//!
//! A point-in-time extraction of the document's reusable vocabulary:
//! component names bucketed by role, style names, and the frequency
//! tables that tell the model which spacing and frame sizes the file
//! actually uses. Rebuilt fresh per action, never persisted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::canvas::SNAPSHOT_TOP_N;

/// Component names grouped into the five role buckets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComponentBuckets {
    pub buttons: Vec<String>,
    pub inputs: Vec<String>,
    pub cards: Vec<String>,
    pub modals: Vec<String>,
    pub other: Vec<String>,
}

impl ComponentBuckets {
    /// Place a component name into its bucket by keyword.
    pub fn insert(&mut self, name: &str) {
        let lower = name.to_lowercase();
        let bucket = if lower.contains("button") || lower.contains("btn") {
            &mut self.buttons
        } else if lower.contains("input") || lower.contains("field") || lower.contains("form") {
            &mut self.inputs
        } else if lower.contains("card") {
            &mut self.cards
        } else if lower.contains("modal") || lower.contains("dialog") || lower.contains("sheet") {
            &mut self.modals
        } else {
            &mut self.other
        };
        if !bucket.iter().any(|n| n == name) {
            bucket.push(name.to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
            && self.inputs.is_empty()
            && self.cards.is_empty()
            && self.modals.is_empty()
            && self.other.is_empty()
    }
}

/// Serializable design-system facts sent with every vendor request.
///
/// BTreeMap keys keep the serialized context block deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DesignSystemSnapshot {
    pub components: ComponentBuckets,
    pub color_styles: Vec<String>,
    pub text_styles: Vec<String>,
    pub effect_styles: Vec<String>,
    /// item spacing value (rounded) -> occurrence count
    pub spacing: BTreeMap<i64, usize>,
    /// padding value (rounded) -> occurrence count
    pub padding: BTreeMap<i64, usize>,
    /// "WxH" frame size -> occurrence count
    pub frame_sizes: BTreeMap<String, usize>,
}

impl DesignSystemSnapshot {
    /// Render the snapshot as the design-system section of the context block.
    pub fn to_context_section(&self) -> String {
        let mut out = String::from("## Design System\n\n");

        out.push_str("Components:\n");
        if self.components.is_empty() {
            out.push_str("- (none found)\n");
        } else {
            push_bucket(&mut out, "Buttons", &self.components.buttons);
            push_bucket(&mut out, "Inputs", &self.components.inputs);
            push_bucket(&mut out, "Cards", &self.components.cards);
            push_bucket(&mut out, "Modals", &self.components.modals);
            push_bucket(&mut out, "Other", &self.components.other);
        }

        push_styles(&mut out, "Color styles", &self.color_styles);
        push_styles(&mut out, "Text styles", &self.text_styles);
        push_styles(&mut out, "Effect styles", &self.effect_styles);

        push_frequency(&mut out, "Common spacing values", &self.spacing, "px");
        push_frequency(&mut out, "Common padding values", &self.padding, "px");

        if !self.frame_sizes.is_empty() {
            out.push_str("\nFrame sizes in use:\n");
            for (size, count) in top_n(&self.frame_sizes) {
                out.push_str(&format!("- {size} ({count} frames)\n"));
            }
        }

        out
    }
}

fn push_bucket(out: &mut String, label: &str, names: &[String]) {
    if !names.is_empty() {
        out.push_str(&format!("- {label}: {}\n", names.join(", ")));
    }
}

fn push_styles(out: &mut String, label: &str, names: &[String]) {
    if !names.is_empty() {
        out.push_str(&format!("\n{label}: {}\n", names.join(", ")));
    }
}

fn push_frequency(out: &mut String, label: &str, table: &BTreeMap<i64, usize>, unit: &str) {
    if table.is_empty() {
        return;
    }
    let entries: Vec<String> = top_n_i64(table)
        .into_iter()
        .map(|(value, count)| format!("{value}{unit} (x{count})"))
        .collect();
    out.push_str(&format!("\n{label}: {}\n", entries.join(", ")));
}

fn top_n(table: &BTreeMap<String, usize>) -> Vec<(&String, usize)> {
    let mut entries: Vec<_> = table.iter().map(|(k, v)| (k, *v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries.truncate(SNAPSHOT_TOP_N);
    entries
}

fn top_n_i64(table: &BTreeMap<i64, usize>) -> Vec<(i64, usize)> {
    let mut entries: Vec<_> = table.iter().map(|(k, v)| (*k, *v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(SNAPSHOT_TOP_N);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_classification() {
        let mut buckets = ComponentBuckets::default();
        buckets.insert("Primary Button");
        buckets.insert("Search Field");
        buckets.insert("Product Card");
        buckets.insert("Confirm Dialog");
        buckets.insert("Avatar");

        assert_eq!(buckets.buttons, vec!["Primary Button"]);
        assert_eq!(buckets.inputs, vec!["Search Field"]);
        assert_eq!(buckets.cards, vec!["Product Card"]);
        assert_eq!(buckets.modals, vec!["Confirm Dialog"]);
        assert_eq!(buckets.other, vec!["Avatar"]);
    }

    #[test]
    fn test_bucket_dedup() {
        let mut buckets = ComponentBuckets::default();
        buckets.insert("Primary Button");
        buckets.insert("Primary Button");
        assert_eq!(buckets.buttons.len(), 1);
    }

    #[test]
    fn test_context_section_mentions_components_and_spacing() {
        let mut snapshot = DesignSystemSnapshot::default();
        snapshot.components.insert("Primary Button");
        snapshot.color_styles.push("brand/primary".to_string());
        snapshot.spacing.insert(8, 12);
        snapshot.spacing.insert(16, 4);
        snapshot.frame_sizes.insert("375x812".to_string(), 6);

        let section = snapshot.to_context_section();
        assert!(section.contains("Buttons: Primary Button"));
        assert!(section.contains("brand/primary"));
        assert!(section.contains("8px (x12)"));
        assert!(section.contains("375x812 (6 frames)"));
    }

    #[test]
    fn test_frequency_sorted_by_count_descending() {
        let mut table = BTreeMap::new();
        table.insert(4, 1);
        table.insert(8, 20);
        table.insert(16, 5);
        let top = top_n_i64(&table);
        assert_eq!(top[0].0, 8);
        assert_eq!(top[1].0, 16);
        assert_eq!(top[2].0, 4);
    }
}
