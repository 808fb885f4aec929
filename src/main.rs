//! Password Generator - terminal password generator
//!
//! Runs the interactive form by default, or a headless subcommand when one
//! is given.

use anyhow::Result;
use clap::{Parser, Subcommand};
use passgen::cli::{ConfigArgs, GenerateArgs};
use passgen::{app, logging};
use std::path::PathBuf;

/// Password Generator - pick a length and character sets, get a password
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Write logs to this file (the UI never logs to the terminal)
    #[arg(long, value_name = "PATH", global = true)]
    log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate passwords without opening the UI
    Generate(GenerateArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        logging::init_file(path, cli.verbose)?;
    }

    let Some(command) = cli.command else {
        return app::run_generator_terminal();
    };

    if cli.log_file.is_none() {
        logging::init_stderr(cli.verbose)?;
    }

    let result = match command {
        Command::Generate(args) => args.execute(),
        Command::Config(args) => args.execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e.message);
        std::process::exit(e.exit_code.code());
    }

    Ok(())
}
