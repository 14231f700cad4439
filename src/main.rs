use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::runtime::Runtime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use framedoc::cli::commands;
use framedoc::types::ErrorClassifier;

#[derive(Parser)]
#[command(name = "framedoc")]
#[command(
    version,
    about = "AI-driven developer handoff documentation for design-canvas exports"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate handoff documentation for selected screens
    Document {
        /// Canvas document export (JSON)
        file: PathBuf,
        #[arg(long, short, value_delimiter = ',', help = "Frame names to document (default: all)")]
        screens: Vec<String>,
        #[arg(long, help = "Include the Platform Constraints section")]
        platform: bool,
        #[arg(long = "data-logic", help = "Include the Data Logic section")]
        data_logic: bool,
        #[arg(long, help = "Overwrite the input file instead of writing a sibling")]
        in_place: bool,
    },

    /// Analyze the selected screens as one user flow
    Flows {
        /// Canvas document export (JSON)
        file: PathBuf,
        #[arg(long, short, value_delimiter = ',', help = "Frame names in flow order (default: all)")]
        screens: Vec<String>,
        #[arg(long, help = "Where to save the flow report (default: .framedoc/flow-report.json)")]
        report: Option<PathBuf>,
        #[arg(long, help = "Overwrite the input file instead of writing a sibling")]
        in_place: bool,
    },

    /// Build missing screens identified by a previous flow analysis
    Regenerate {
        /// Canvas document export (JSON)
        file: PathBuf,
        #[arg(long, help = "Flow report to consume (default: .framedoc/flow-report.json)")]
        report: Option<PathBuf>,
        #[arg(long, help = "Directory of <screen>.png screenshots for the vision path")]
        screenshots: Option<PathBuf>,
        #[arg(long, help = "Overwrite the input file instead of writing a sibling")]
        in_place: bool,
    },

    /// Validate the configured API key with a minimal request
    CheckKey,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
    /// Show configuration file paths
    Path,
    /// Edit configuration file with $EDITOR
    Edit {
        #[arg(long, short, help = "Edit global config")]
        global: bool,
    },
    /// Initialize configuration
    Init {
        #[arg(long, short, help = "Initialize global config")]
        global: bool,
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
        #[arg(long, help = "Project name")]
        name: Option<String>,
    },
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31mFramedoc encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }

        eprintln!("\n\x1b[33mPlease report this issue at:\x1b[0m");
        eprintln!("  https://github.com/framedoc/framedoc/issues");
        eprintln!();

        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Every error reaches the terminal as one classified sentence
            eprintln!("\x1b[31m{}\x1b[0m", ErrorClassifier::user_message(&e));
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> framedoc::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Document {
            file,
            screens,
            platform,
            data_logic,
            in_place,
        } => {
            let rt = Runtime::new()?;
            rt.block_on(commands::document::run(commands::document::DocumentArgs {
                file,
                screens,
                include_platform: platform,
                include_data_logic: data_logic,
                in_place,
            }))?;
        }
        Commands::Flows {
            file,
            screens,
            report,
            in_place,
        } => {
            let rt = Runtime::new()?;
            rt.block_on(commands::flows::run(commands::flows::FlowsArgs {
                file,
                screens,
                report,
                in_place,
            }))?;
        }
        Commands::Regenerate {
            file,
            report,
            screenshots,
            in_place,
        } => {
            let rt = Runtime::new()?;
            rt.block_on(commands::regenerate::run(
                commands::regenerate::RegenerateArgs {
                    file,
                    report,
                    screenshots,
                    in_place,
                },
            ))?;
        }
        Commands::CheckKey => {
            let rt = Runtime::new()?;
            rt.block_on(commands::check_key::run())?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { json } => commands::config::show(json)?,
            ConfigAction::Path => commands::config::path()?,
            ConfigAction::Edit { global } => commands::config::edit(global)?,
            ConfigAction::Init {
                global,
                force,
                name,
            } => commands::config::init(global, force, name.as_deref())?,
        },
    }

    Ok(())
}
