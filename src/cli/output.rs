//! Console Output
//!
//! The terminal notification sink plus markdown export of generated
//! documentation.

use std::fs;
use std::path::{Path, PathBuf};

use console::style;

use crate::ai::parse::DOC_SECTIONS;
use crate::engine::{FlowReport, Notification, NotificationSink, ScreenOutcome};
use crate::types::Result;

/// Notification sink that prints styled lines to the terminal.
pub struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn notify(&self, notification: Notification) {
        match notification {
            Notification::SelectionChanged { count } => {
                println!("{} {} screens selected", style("→").cyan(), count);
            }
            Notification::Progress { message } => {
                println!("{} {}", style("…").dim(), style(message).dim());
            }
            Notification::ActionComplete { action, message } => {
                println!("{} {} complete: {}", style("✓").green(), action, message);
            }
            Notification::EdgeCases { missing } => {
                println!("{} Missing screens identified:", style("!").yellow());
                for item in &missing {
                    println!(
                        "  {} {} ({}) — {}",
                        style("•").yellow(),
                        style(&item.name).bold(),
                        item.severity,
                        item.reason
                    );
                }
            }
            Notification::ScreensCreated { count } => {
                println!("{} {} screens created", style("✓").green(), count);
            }
            Notification::Error { message } => {
                eprintln!("{} {}", style("✗").red(), message);
            }
            Notification::KeyValidated => {
                println!("{} API key is valid", style("✓").green());
            }
            Notification::KeyInvalid => {
                eprintln!("{} API key was rejected", style("✗").red());
            }
        }
    }
}

// =============================================================================
// Markdown Export
// =============================================================================

/// Write one documented screen as markdown. Failed screens are skipped.
pub fn write_screen_markdown(dir: &Path, outcome: &ScreenOutcome) -> Result<Option<PathBuf>> {
    let ScreenOutcome::Documented { name, sections } = outcome else {
        return Ok(None);
    };

    let mut markdown = format!("# {name}\n\n");
    for spec in DOC_SECTIONS {
        if let Some(content) = sections.get(spec.key)
            && !content.is_empty()
        {
            markdown.push_str(&format!("## {}\n\n{}\n\n", spec.header, content));
        }
    }

    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.md", sanitize_file_name(name)));
    fs::write(&path, markdown)?;
    Ok(Some(path))
}

/// Write the flow analysis (and missing-screen list) as markdown.
pub fn write_flow_markdown(dir: &Path, report: &FlowReport) -> Result<PathBuf> {
    let mut markdown = format!("# Flow Analysis\n\n{}\n", report.flow_text);

    if !report.missing_screens.is_empty() {
        markdown.push_str("\n## Missing Screens\n\n");
        for item in &report.missing_screens {
            markdown.push_str(&format!(
                "- **{}** ({}): {}\n",
                item.name, item.severity, item.reason
            ));
        }
    }

    fs::create_dir_all(dir)?;
    let path = dir.join("flow-analysis.md");
    fs::write(&path, markdown)?;
    Ok(path)
}

/// Replace path-hostile characters in a frame name.
fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            other => other,
        })
        .collect()
}
