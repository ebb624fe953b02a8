//! git-fixcase CLI
//!
//! Reconciles file-name casing between the git index and the working tree.

mod cli;
mod commands;
mod error;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use error::{CliError, Result};

fn main() {
    match run() {
        Ok(()) => {}
        Err(CliError::Git(fixcase_git::Error::RepositoryNotFound { start })) => {
            // Nothing to do, but the operator should know why.
            eprintln!(
                "{}: no git repository found starting from {}",
                "notice".cyan().bold(),
                start.display()
            );
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    if !cli.has_action() {
        Cli::command().print_help()?;
        return Ok(());
    }

    let cwd = std::env::current_dir()?;

    if cli.all || cli.list {
        commands::run_report(&cwd, cli.all, cli.list)?;
    }

    if cli.fix_index {
        commands::run_fix_index(&cwd)?;
    } else if cli.fix_filesystem {
        commands::run_fix_filesystem(&cwd)?;
    }

    Ok(())
}
