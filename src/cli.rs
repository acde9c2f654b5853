use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// File-backed journey progress tracker.
/// Storage defaults to ~/.journey or a directory passed via --store.
#[derive(Parser)]
#[command(name = "journey", version, about = "Entrepreneurial journey progress tracker")]
pub struct Cli {
    /// Directory holding journey files.
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// User identifier the journey is keyed by.
    #[arg(long, global = true, default_value = "default")]
    pub user: String,

    /// Journey identifier.
    #[arg(long, global = true, default_value = "default")]
    pub journey: String,

    #[command(subcommand)]
    pub command: Commands,
}
