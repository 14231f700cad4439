//! Context Block
//!
//! The per-request grounding sent with every vendor call: free-text
//! project context plus the serialized design-system snapshot.

use crate::types::DesignSystemSnapshot;

/// Placeholder used when the user supplied no project context.
pub const NO_CONTEXT_PLACEHOLDER: &str = "No additional project context was provided.";

/// Assemble the context block from project context and snapshot.
pub fn build_context_block(project_context: &str, snapshot: &DesignSystemSnapshot) -> String {
    let mut out = String::from("# Project Context\n\n");

    let trimmed = project_context.trim();
    if trimmed.is_empty() {
        out.push_str(NO_CONTEXT_PLACEHOLDER);
    } else {
        out.push_str(trimmed);
    }
    out.push_str("\n\n");

    out.push_str(&snapshot.to_context_section());

    out.push_str(
        "\nWhen referring to components or styles, use their exact names \
         as listed above. Do not invent component or style names.\n",
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_context_uses_placeholder() {
        let block = build_context_block("   ", &DesignSystemSnapshot::default());
        assert!(block.contains(NO_CONTEXT_PLACEHOLDER));
    }

    #[test]
    fn test_context_is_trimmed_and_included() {
        let block = build_context_block("  Banking app for iOS.  ", &DesignSystemSnapshot::default());
        assert!(block.contains("Banking app for iOS."));
        assert!(!block.contains(NO_CONTEXT_PLACEHOLDER));
    }

    #[test]
    fn test_exact_name_instruction_present() {
        let block = build_context_block("", &DesignSystemSnapshot::default());
        assert!(block.contains("exact names"));
    }
}
