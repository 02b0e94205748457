//! tpa - command-line front end for the Tupã lexer.
//!
//! This is the main entry point for the tpa CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers in [`commands`].

mod commands;
mod config;
mod error;
mod report;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::traits::{Command, CommandDescription};
use commands::{LexArgs, LexCommand, ReplArgs, ReplCommand, SymbolsArgs, SymbolsCommand};
use config::{Config, ScanMode};
use error::{Result, TpaError};

/// tpa - lexical analysis for the Tupã language
///
/// Scans Tupã sources into token reports, prints lexical diagnostics and
/// offers an interactive line scanner.
#[derive(Parser, Debug)]
#[command(name = "tpa")]
#[command(author = "Tupã Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexical analyzer for the Tupã language", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "TPA_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "TPA_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "TPA_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the tpa CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = LexCommand::description(), long_about = LexCommand::help())]
    Lex(LexCommandArgs),

    #[command(about = ReplCommand::description(), long_about = ReplCommand::help())]
    Repl,

    #[command(about = SymbolsCommand::description(), long_about = SymbolsCommand::help())]
    Symbols,
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommandArgs {
    /// Source files to scan
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Directory for token reports (default: next to each input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Scan each file whole or line by line
    #[arg(short, long, value_enum)]
    mode: Option<ScanMode>,

    /// Print reports to stdout instead of writing files
    #[arg(long)]
    stdout: bool,

    /// Number of parallel jobs
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    jobs: Option<u16>,
}

/// Main entry point for the tpa CLI.
///
/// Lexical errors exit with status 1, every other failure with status 2.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            e.exit_code()
        }
    }
}

/// Initialize logging, load configuration and execute the selected command.
fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;
    debug!(?config, "configuration loaded");

    execute_command(cli.command, config)
}

/// Log filter: `debug` with `--verbose`, otherwise `RUST_LOG` or `warn`.
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

/// Initialize the logging system.
///
/// Logs go to stderr so that reports printed to stdout stay clean.
///
/// # Arguments
/// * `verbose` - Whether to enable debug logging
/// * `no_color` - Whether to disable colored output
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = log_filter(verbose);

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| TpaError::Logging(e.to_string()))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Lex(args) => execute_lex(args, config),
        Commands::Repl => execute_repl(config),
        Commands::Symbols => execute_symbols(config),
    }
}

/// Execute the lex command.
fn execute_lex(args: LexCommandArgs, config: Config) -> Result<()> {
    debug!("running {}", LexCommand::name());
    let lex_args = LexArgs {
        files: args.files,
        output: args.output,
        mode: args.mode,
        stdout: args.stdout,
        jobs: args.jobs.map(usize::from),
    };
    let summary = LexCommand::new(lex_args, config).execute()?;
    debug!(
        errors = summary.errors,
        warnings = summary.warnings,
        failed = summary.failed,
        "lex finished"
    );
    summary.into_result()
}

/// Execute the repl command.
fn execute_repl(config: Config) -> Result<()> {
    debug!("running {}", ReplCommand::name());
    let summary = ReplCommand::new(ReplArgs, config).execute()?;
    debug!(
        lines = summary.lines,
        tokens = summary.tokens,
        errors = summary.errors,
        "session ended"
    );
    Ok(())
}

/// Execute the symbols command.
fn execute_symbols(config: Config) -> Result<()> {
    debug!("running {}", SymbolsCommand::name());
    let entries = SymbolsCommand::new(SymbolsArgs, config).execute()?;
    debug!(entries, "symbol tables listed");
    Ok(())
}
