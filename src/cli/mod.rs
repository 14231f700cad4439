//! Command-Line Interface
//!
//! Subcommand implementations, console output, and shared helpers.

pub mod commands;
pub mod output;
pub mod util;

pub use output::ConsoleSink;
