//! Command-line interface for the morpion widget.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal.
#[derive(Parser, Debug)]
#[command(name = "morpion")]
#[command(about = "Two-player tic-tac-toe widget", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Description text shown above the board (overrides the file).
    #[arg(short, long)]
    pub description: Option<String>,

    /// File tracing output is written to.
    #[arg(long, default_value = "morpion.log")]
    pub log_file: PathBuf,
}
