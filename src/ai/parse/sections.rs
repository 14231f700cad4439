//! Section Parser
//!
//! Splits vendor markdown into named sections by scanning lines against
//! an ordered header grammar. Tolerant of markdown heading markers,
//! bold markers, parenthetical suffixes, and trailing colons. Every
//! registered key is always present in the output: a section the vendor
//! omitted gets its pre-registered default, never an absent key.
//! Leading text before the first recognized header is discarded.

use std::collections::BTreeMap;

use regex::Regex;

use crate::constants::parse::LINK_PLACEHOLDER;

/// One entry of a section grammar.
#[derive(Debug, Clone, Copy)]
pub struct SectionSpec {
    /// Stable lookup key
    pub key: &'static str,
    /// Exact header text the prompt instructs the vendor to emit
    pub header: &'static str,
    /// Content used when the vendor omits the section
    pub default: &'static str,
}

/// Per-screen documentation sections, in render order.
pub const DOC_SECTIONS: &[SectionSpec] = &[
    SectionSpec { key: "purpose", header: "Purpose", default: "" },
    SectionSpec { key: "use_cases", header: "Use Cases", default: "" },
    SectionSpec { key: "edge_cases", header: "Edge Cases & Results", default: "" },
    SectionSpec { key: "platform_constraints", header: "Platform Constraints", default: "" },
    SectionSpec { key: "data_logic", header: "Data Logic", default: "" },
    SectionSpec {
        key: "component_library",
        header: "Link to Component Library",
        default: LINK_PLACEHOLDER,
    },
    SectionSpec { key: "animations", header: "Animations & Interactions", default: "" },
    SectionSpec { key: "attachments", header: "Attachments", default: "" },
];

/// Flow-analysis sections, in render order.
pub const FLOW_SECTIONS: &[SectionSpec] = &[
    SectionSpec { key: "flow_overview", header: "Flow Overview", default: "" },
    SectionSpec { key: "entry_points", header: "Entry Points", default: "" },
    SectionSpec { key: "key_screens", header: "Key Screens", default: "" },
    SectionSpec { key: "decision_points", header: "Decision Points", default: "" },
    SectionSpec { key: "edge_cases_identified", header: "Edge Cases Identified", default: "" },
    SectionSpec { key: "recommendations", header: "Recommendations", default: "" },
];

/// Header-scanning parser over a fixed grammar.
pub struct SectionParser {
    specs: &'static [SectionSpec],
    patterns: Vec<Regex>,
    strip_bold: bool,
}

impl SectionParser {
    /// Parser for the per-screen documentation grammar.
    pub fn documentation() -> Self {
        Self::new(DOC_SECTIONS, false)
    }

    /// Parser for the flow-analysis grammar. Also strips `**` markers.
    pub fn flow() -> Self {
        Self::new(FLOW_SECTIONS, true)
    }

    fn new(specs: &'static [SectionSpec], strip_bold: bool) -> Self {
        let patterns = specs
            .iter()
            .map(|spec| {
                // Optional heading markers, optional bold, optional
                // parenthetical suffix, optional trailing colon.
                let pattern = format!(
                    r"(?i)^\s*(?:#{{1,6}}\s*)?(?:\*\*\s*)?{}(?:\s*\*\*)?\s*(?:\([^)]*\))?\s*:?\s*$",
                    regex::escape(spec.header)
                );
                // Grammar headers are static literals; escape() keeps the
                // pattern well-formed for any of them.
                Regex::new(&pattern).expect("static header pattern")
            })
            .collect();
        Self { specs, patterns, strip_bold }
    }

    /// The grammar's headers in order, for prompt construction. Keeping the
    /// prompt and the parser on one list prevents drift between them.
    pub fn headers(&self) -> Vec<&'static str> {
        self.specs.iter().map(|s| s.header).collect()
    }

    /// Split `text` into sections. Every grammar key is present in the
    /// result; missing sections carry their default.
    pub fn parse(&self, text: &str) -> BTreeMap<&'static str, String> {
        let mut buffers: Vec<String> = vec![String::new(); self.specs.len()];
        let mut current: Option<usize> = None;

        for line in text.lines() {
            if let Some(idx) = self.match_header(line) {
                current = Some(idx);
                continue;
            }
            if let Some(idx) = current {
                buffers[idx].push_str(line);
                buffers[idx].push('\n');
            }
            // Lines before the first recognized header are discarded.
        }

        self.specs
            .iter()
            .zip(buffers)
            .map(|(spec, buffer)| {
                let content = self.clean(&buffer);
                let content = if content.is_empty() {
                    spec.default.to_string()
                } else {
                    content
                };
                (spec.key, content)
            })
            .collect()
    }

    fn match_header(&self, line: &str) -> Option<usize> {
        self.patterns.iter().position(|p| p.is_match(line))
    }

    /// Strip residual markdown markers from assembled section content.
    fn clean(&self, buffer: &str) -> String {
        let mut cleaned: String = buffer
            .lines()
            .map(strip_heading_markers)
            .collect::<Vec<_>>()
            .join("\n");
        if self.strip_bold {
            cleaned = cleaned.replace("**", "");
        }
        cleaned.trim().to_string()
    }
}

fn strip_heading_markers(line: &str) -> &str {
    let trimmed = line.trim_start();
    let stripped = trimmed.trim_start_matches('#');
    if stripped.len() < trimmed.len() {
        stripped.trim_start()
    } else {
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_headers_in_order() {
        let text = "\
## Purpose
Lets the user sign in.

## Use Cases
- First-time login

## Edge Cases & Results
Wrong password shows an inline error.

## Platform Constraints
iOS only.

## Data Logic
Auth token cached.

## Link to Component Library
https://example.com/library

## Animations & Interactions
Button presses scale to 98%.

## Attachments
None.
";
        let sections = SectionParser::documentation().parse(text);
        assert_eq!(sections["purpose"], "Lets the user sign in.");
        assert_eq!(sections["use_cases"], "- First-time login");
        assert_eq!(sections["edge_cases"], "Wrong password shows an inline error.");
        assert_eq!(sections["component_library"], "https://example.com/library");
        assert_eq!(sections["attachments"], "None.");
    }

    #[test]
    fn test_leading_noise_discarded() {
        let text = "Sure! Here is the documentation you asked for.\n\n## Purpose\nDoes X";
        let sections = SectionParser::documentation().parse(text);
        assert_eq!(sections["purpose"], "Does X");
    }

    #[test]
    fn test_missing_sections_get_defaults() {
        let sections = SectionParser::documentation().parse("## Purpose\nDoes X");
        assert_eq!(sections["purpose"], "Does X");
        assert_eq!(sections["use_cases"], "");
        // The link section defaults to the fill-in placeholder
        assert_eq!(sections["component_library"], LINK_PLACEHOLDER);
        // Every key exists even on an empty input
        let empty = SectionParser::documentation().parse("");
        assert_eq!(empty.len(), DOC_SECTIONS.len());
    }

    #[test]
    fn test_header_tolerance() {
        for line in [
            "Purpose",
            "purpose:",
            "### Purpose",
            "**Purpose**",
            "## **Purpose**",
            "## Purpose (overview)",
        ] {
            let text = format!("{line}\nDoes X");
            let sections = SectionParser::documentation().parse(&text);
            assert_eq!(sections["purpose"], "Does X", "header form: {line}");
        }
    }

    #[test]
    fn test_residual_heading_markers_stripped_from_content() {
        let text = "## Purpose\n### Summary\nDoes X";
        let sections = SectionParser::documentation().parse(text);
        assert_eq!(sections["purpose"], "Summary\nDoes X");
    }

    #[test]
    fn test_flow_parser_strips_bold() {
        let text = "## Flow Overview\nThe **happy path** has three steps.";
        let sections = SectionParser::flow().parse(text);
        assert_eq!(sections["flow_overview"], "The happy path has three steps.");
    }

    #[test]
    fn test_gemini_style_response_parses() {
        // Text as extracted from a Gemini candidates envelope
        let text = "## Purpose\nDoes X";
        let sections = SectionParser::documentation().parse(text);
        assert_eq!(sections["purpose"], "Does X");
        for spec in DOC_SECTIONS {
            if spec.key != "purpose" {
                assert_eq!(sections[spec.key], spec.default);
            }
        }
    }

    #[test]
    fn test_headers_listed_for_prompt() {
        let headers = SectionParser::documentation().headers();
        assert_eq!(headers[0], "Purpose");
        assert_eq!(headers.len(), DOC_SECTIONS.len());
    }
}
