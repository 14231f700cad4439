//! CLI Helpers

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cli::output::ConsoleSink;
use crate::config::Config;
use crate::engine::Engine;
use crate::types::Result;

/// Build an engine from loaded configuration with the console sink.
pub fn build_engine(config: &Config) -> Result<Engine> {
    let provider = crate::ai::provider::create_provider(&config.llm, &config.transport)?;
    Ok(Engine::new(
        provider,
        Arc::new(ConsoleSink),
        config.project.context.clone(),
    ))
}

/// Where to save the mutated document: in place, or next to the input
/// with a `.handoff.json` suffix.
pub fn output_document_path(input: &Path, in_place: bool) -> PathBuf {
    if in_place {
        return input.to_path_buf();
    }
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");
    input.with_file_name(format!("{stem}.handoff.json"))
}
