//! `framedoc regenerate` — build missing screens from a saved flow report

use std::path::PathBuf;

use console::style;
use tracing::info;

use crate::canvas::Document;
use crate::cli::util::{build_engine, output_document_path};
use crate::config::ConfigLoader;
use crate::engine::{FlowReport, default_report_path};
use crate::types::Result;

pub struct RegenerateArgs {
    pub file: PathBuf,
    /// Flow report produced by `framedoc flows`
    pub report: Option<PathBuf>,
    /// Directory of `<screen name>.png` screenshots for the vision path
    pub screenshots: Option<PathBuf>,
    pub in_place: bool,
}

pub async fn run(args: RegenerateArgs) -> Result<()> {
    let config = ConfigLoader::load()?;
    let engine = build_engine(&config)?;

    let report_path = args.report.unwrap_or_else(default_report_path);
    let report = FlowReport::load(&report_path)?;
    info!(
        "Loaded flow report from {} ({} missing screens)",
        report_path.display(),
        report.missing_screens.len()
    );

    let mut doc = Document::load(&args.file)?;
    let created = engine
        .regenerate_missing(&mut doc, &report, args.screenshots.as_deref())
        .await?;

    let out_path = output_document_path(&args.file, args.in_place);
    doc.save(&out_path)?;

    println!(
        "{} {} screens created, document saved: {}",
        style("✓").green(),
        created,
        out_path.display()
    );
    Ok(())
}
