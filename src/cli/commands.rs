use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "medharvest",
    about = "Healthcare paper ingestion and classification agent",
    version
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format for logs
    #[arg(long, default_value = "text", global = true)]
    pub log_format: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch, classify, and store the latest papers
    Run {
        /// Maximum results fetched per search query
        #[arg(long, default_value = "5")]
        max_per_query: usize,

        /// Directory for classified/discarded paper records
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,

        /// Directory for the audit log
        #[arg(long, default_value = "logs")]
        log_dir: PathBuf,
    },

    /// Show information about medharvest
    Info,
}
