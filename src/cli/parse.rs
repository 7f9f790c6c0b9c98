//! CLI parse: clap types for Remat. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Remat CLI - Rematerialize CRDT transaction logs into plain files
#[derive(Parser)]
#[command(name = "remat")]
#[command(about = "Rematerialize append-only CRDT transaction logs into a plain file tree")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export current dataset content to JSON files and asset copies
    Export {
        /// Dataset root directory (must contain info.json)
        dataset: PathBuf,

        /// Output directory for the exported tree
        #[arg(long, default_value = "export")]
        output: PathBuf,
    },
}
