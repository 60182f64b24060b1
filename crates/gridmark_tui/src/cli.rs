//! Command-line interface for gridmark.

use clap::Parser;
use std::path::PathBuf;

/// Gridmark - two-player tic-tac-toe on an NxN grid
#[derive(Parser, Debug)]
#[command(name = "gridmark")]
#[command(about = "Mouse-driven NxN tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Grid side length (overrides the config file)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log file path (overrides the config file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
