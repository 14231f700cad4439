//! `framedoc config` — configuration management

use crate::config::ConfigLoader;
use crate::types::Result;

pub fn show(as_json: bool) -> Result<()> {
    ConfigLoader::show_config(as_json)
}

pub fn path() -> Result<()> {
    ConfigLoader::show_path();
    Ok(())
}

pub fn edit(global: bool) -> Result<()> {
    ConfigLoader::edit_config(global)
}

pub fn init(global: bool, force: bool, name: Option<&str>) -> Result<()> {
    if global {
        let dir = ConfigLoader::init_global(force)?;
        println!("Global config initialized: {}", dir.display());
    } else {
        let dir = ConfigLoader::init_project(name)?;
        println!("Project config initialized: {}", dir.display());
    }
    Ok(())
}
