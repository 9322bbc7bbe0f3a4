//! Prompt My Papers CLI
//!
//! Main entry point for the papers command-line tool.
//! Turns essay parameters into a ready-to-paste prompt for a writing assistant.

mod commands;

use clap::{Parser, Subcommand};
use commands::{GenerateCommand, OptionsCommand};
use papers_core::{config::AppConfig, logging, AppResult};
use std::path::PathBuf;
use std::process::ExitCode;

/// Prompt My Papers - generate essay prompts for a writing assistant
#[derive(Parser, Debug)]
#[command(name = "papers")]
#[command(about = "Generate essay and research-paper prompts", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to workspace directory (default: current directory)
    #[arg(short, long, global = true, env = "PAPERS_WORKSPACE")]
    workspace: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, global = true, env = "PAPERS_CONFIG")]
    config: Option<PathBuf>,

    /// Directory for saved prompts (relative to the workspace)
    #[arg(long, global = true, env = "PAPERS_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a prompt from essay parameters
    Generate(GenerateCommand),

    /// List accepted parameter values
    Options(OptionsCommand),
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let config = AppConfig::load(cli.workspace, cli.config)?;

    // Apply CLI overrides
    let config = config.with_overrides(cli.output_dir, cli.log_level, cli.verbose, cli.no_color);

    // Initialize logging with final configuration
    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::info!("Prompt My Papers starting");
    tracing::debug!("Workspace: {:?}", config.workspace);
    tracing::debug!("Output directory: {:?}", config.resolved_output_dir());

    let command_name = match &cli.command {
        Commands::Generate(_) => "generate",
        Commands::Options(_) => "options",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    let result = match cli.command {
        Commands::Generate(cmd) => cmd.execute(&config),
        Commands::Options(cmd) => cmd.execute(),
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::debug!("Command failed: {}", e),
    }

    result
}
