//! Task Prompts
//!
//! The literal instruction prompts and user messages for the three
//! actions. Header lists and the edge-case delimiter are taken from the
//! parser grammar so the two sides cannot drift apart.

use crate::ai::parse::SectionParser;
use crate::constants::parse::{EDGE_CASE_DELIMITER, LINK_PLACEHOLDER};
use crate::types::{DesignSystemSnapshot, FrameDescriptor, MissingScreenItem};

/// Optional documentation sections the user can switch on.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionOptions {
    pub include_platform_constraints: bool,
    pub include_data_logic: bool,
}

// =============================================================================
// Per-Screen Documentation
// =============================================================================

pub fn documentation_system_prompt() -> &'static str {
    "You are a senior product designer writing developer handoff documentation. \
     You write precise, implementation-ready notes that a frontend developer can \
     act on without asking follow-up questions. You ground every statement in the \
     screen facts you are given and never speculate about features you cannot see."
}

pub fn documentation_user_message(frame: &FrameDescriptor, options: &SectionOptions) -> String {
    let skipped: &[&str] = match (
        options.include_platform_constraints,
        options.include_data_logic,
    ) {
        (true, true) => &[],
        (true, false) => &["Data Logic"],
        (false, true) => &["Platform Constraints"],
        (false, false) => &["Platform Constraints", "Data Logic"],
    };

    let mut prompt = String::from("Write developer handoff documentation for this screen.\n\n");
    prompt.push_str(&frame.to_prompt_section());

    prompt.push_str("\n# Output Format\n\n");
    prompt.push_str("Respond in markdown using EXACTLY these section headers, in this order:\n\n");
    for header in SectionParser::documentation().headers() {
        if skipped.contains(&header) {
            continue;
        }
        prompt.push_str(&format!("## {header}\n"));
    }

    prompt.push_str(&format!(
        "\nRules:\n\
         - Use only the headers above. Do not add, rename, or reorder sections.\n\
         - Under \"Link to Component Library\", write the literal placeholder {LINK_PLACEHOLDER} \
           so a human can insert the real link later.\n\
         - Under \"Attachments\", list any design references a developer should request.\n\
         - Keep each section concise and concrete.\n"
    ));

    prompt
}

// =============================================================================
// Flow Analysis
// =============================================================================

pub fn flow_system_prompt() -> &'static str {
    "You are a UX auditor reviewing a multi-screen user flow. You identify missing \
     states (errors, empty states, loading, permissions, edge conditions) that the \
     design does not yet cover, and you are rigorous about referencing the screens \
     you were actually shown."
}

pub fn flow_user_message(frames: &[FrameDescriptor]) -> String {
    let mut prompt = String::from("Analyze the user flow formed by these screens, in order.\n\n");
    for frame in frames {
        prompt.push_str(&frame.to_prompt_section());
        prompt.push('\n');
    }

    prompt.push_str("# Output Format\n\n");
    prompt.push_str("Your response has exactly two parts.\n\n");
    prompt.push_str("Part 1 - markdown flow analysis using EXACTLY these section headers, in this order:\n\n");
    prompt.push_str("## Flow Overview\n## Flow Steps\n## Missing States\n## Shared Tokens\n## Accessibility\n");

    prompt.push_str(&format!(
        "\nPart 2 - after the analysis, output a line containing only:\n\
         {EDGE_CASE_DELIMITER}\n\
         followed by a single JSON object and nothing else:\n\n"
    ));
    prompt.push_str(
        r#"{
  "missing_screens": [
    {
      "name": "screen name",
      "reason": "why this screen is missing from the flow",
      "components_needed": ["exact component names from the design system"],
      "severity": "high" | "medium" | "low",
      "reference_screen": "name of the existing screen it relates to"
    }
  ]
}
"#,
    );
    prompt.push_str("\nUse an empty \"missing_screens\" array if the flow is complete. \
                     severity must be exactly one of high, medium, or low.\n");

    prompt
}

// =============================================================================
// Screen Regeneration
// =============================================================================

pub fn regeneration_system_prompt() -> &'static str {
    "You are a UI designer producing a concrete screen layout as structured data. \
     You match the visual language of the reference screens you are shown: the \
     same spacing rhythm, corner radii, type scale, and color usage. You output \
     machine-readable JSON only."
}

pub fn regeneration_user_message(
    item: &MissingScreenItem,
    reference: Option<&FrameDescriptor>,
) -> String {
    let mut prompt = format!(
        "Design the missing screen \"{}\".\n\nWhy it is needed: {}\n",
        item.name, item.reason
    );
    if !item.components_needed.is_empty() {
        prompt.push_str(&format!(
            "Components to include: {}\n",
            item.components_needed.join(", ")
        ));
    }
    if let Some(frame) = reference {
        prompt.push_str("\nMatch the structure and style of this reference screen:\n\n");
        prompt.push_str(&frame.to_prompt_section());
    }

    prompt.push_str("\n# Output Format\n\n");
    prompt.push_str(
        "Return ONLY a JSON object - no markdown fencing, no explanation. Schema by example:\n\n",
    );
    prompt.push_str(
        r##"{
  "name": "Error State",
  "width": 375,
  "height": 812,
  "background": "#FFFFFF",
  "children": [
    {
      "type": "FRAME",
      "name": "Header",
      "x": 0, "y": 0, "width": 375, "height": 56,
      "fill": "#FFFFFF",
      "children": [
        {
          "type": "TEXT",
          "name": "Title",
          "x": 24, "y": 16, "width": 327, "height": 24,
          "text": "Something went wrong",
          "fontSize": 17, "fontWeight": 600, "fill": "#111111"
        }
      ]
    },
    {
      "type": "RECTANGLE",
      "name": "Retry Button",
      "x": 24, "y": 720, "width": 327, "height": 48,
      "fill": "#1A73E8", "cornerRadius": 8
    }
  ]
}
"##,
    );
    prompt.push_str(
        "\nRules:\n\
         - \"type\" is one of FRAME, TEXT, RECTANGLE.\n\
         - Coordinates are relative to the parent node.\n\
         - Give every TEXT node real copy, not lorem ipsum.\n\
         - Use rounded corners and real colors, not placeholder gray boxes.\n",
    );

    prompt
}

/// Text-only fallback appended when no screenshot is available.
pub fn regeneration_fallback_note(snapshot: &DesignSystemSnapshot) -> String {
    format!(
        "No screenshot of the reference screen is available. Rely on the design \
         system summary below instead.\n\n{}",
        snapshot.to_context_section()
    )
}
