//! `framedoc document` — per-screen handoff documentation

use std::path::PathBuf;

use console::style;
use tracing::info;

use crate::ai::prompt::SectionOptions;
use crate::canvas::Document;
use crate::cli::output::write_screen_markdown;
use crate::cli::util::{build_engine, output_document_path};
use crate::config::ConfigLoader;
use crate::types::Result;

pub struct DocumentArgs {
    pub file: PathBuf,
    /// Frame names to document; empty documents every top-level frame
    pub screens: Vec<String>,
    pub include_platform: bool,
    pub include_data_logic: bool,
    pub in_place: bool,
}

pub async fn run(args: DocumentArgs) -> Result<()> {
    let config = ConfigLoader::load()?;
    let engine = build_engine(&config)?;

    let mut doc = Document::load(&args.file)?;
    let options = SectionOptions {
        include_platform_constraints: args.include_platform,
        include_data_logic: args.include_data_logic,
    };

    let outcomes = engine
        .document_screens(&mut doc, &args.screens, &options)
        .await?;

    let out_path = output_document_path(&args.file, args.in_place);
    doc.save(&out_path)?;
    info!("Saved document to {}", out_path.display());

    if config.output.markdown {
        for outcome in &outcomes {
            if let Some(path) = write_screen_markdown(&config.output.dir, outcome)? {
                println!("{} {}", style("wrote").dim(), path.display());
            }
        }
    }

    println!(
        "{} Document saved: {}",
        style("✓").green(),
        out_path.display()
    );
    Ok(())
}
