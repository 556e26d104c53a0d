mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{check, dump, fmt, lint, new, CheckArgs, DumpArgs, FmtArgs, LintArgs, NewArgs};
use tracing_subscriber::EnvFilter;

/// Boxlevel CLI - tools for recursive box-pushing level files
#[derive(Parser, Debug)]
#[command(name = "boxlevel")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log at debug level (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a level from the default template
    New(NewArgs),

    /// Rewrite level files in canonical form
    Fmt(FmtArgs),

    /// Parse level files and report format errors
    Check(CheckArgs),

    /// Run advisory checks on level files
    Lint(LintArgs),

    /// Print a level as JSON
    Dump(DumpArgs),
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?.display().to_string();

    match cli.command {
        Command::New(args) => new(args, &cwd),
        Command::Fmt(args) => fmt(args, &cwd),
        Command::Check(args) => check(args, &cwd),
        Command::Lint(args) => lint(args, &cwd),
        Command::Dump(args) => dump(args, &cwd),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
