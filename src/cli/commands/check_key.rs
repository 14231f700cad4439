//! `framedoc check-key` — validate the configured API key

use crate::cli::util::build_engine;
use crate::config::ConfigLoader;
use crate::types::Result;

pub async fn run() -> Result<()> {
    let config = ConfigLoader::load()?;
    let engine = build_engine(&config)?;
    // The sink prints key-validated / key-invalid
    engine.validate_key().await?;
    Ok(())
}
