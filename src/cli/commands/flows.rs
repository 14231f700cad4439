//! `framedoc flows` — multi-screen flow analysis

use std::path::PathBuf;

use console::style;
use tracing::info;

use crate::canvas::Document;
use crate::cli::output::write_flow_markdown;
use crate::cli::util::{build_engine, output_document_path};
use crate::config::ConfigLoader;
use crate::engine::default_report_path;
use crate::types::Result;

pub struct FlowsArgs {
    pub file: PathBuf,
    pub screens: Vec<String>,
    /// Where to save the flow report for a later `regenerate`
    pub report: Option<PathBuf>,
    pub in_place: bool,
}

pub async fn run(args: FlowsArgs) -> Result<()> {
    let config = ConfigLoader::load()?;
    let engine = build_engine(&config)?;

    let mut doc = Document::load(&args.file)?;
    let report = engine.analyze_flow(&mut doc, &args.screens).await?;

    let out_path = output_document_path(&args.file, args.in_place);
    doc.save(&out_path)?;
    info!("Saved document to {}", out_path.display());

    let report_path = args.report.unwrap_or_else(default_report_path);
    report.save(&report_path)?;
    println!(
        "{} Flow report saved: {} (used by `framedoc regenerate`)",
        style("✓").green(),
        report_path.display()
    );

    if config.output.markdown {
        let path = write_flow_markdown(&config.output.dir, &report)?;
        println!("{} {}", style("wrote").dim(), path.display());
    }

    Ok(())
}
