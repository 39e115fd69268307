use anyhow::Result;
use clap::Parser;
use medharvest::cli::commands::{Cli, Commands};
use medharvest::cli::handlers::handle_run_command;
use medharvest::cli::utils::{init_logging, print_info};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, &cli.log_format);

    // Execute command
    match cli.command {
        Commands::Run {
            max_per_query,
            data_dir,
            log_dir,
        } => handle_run_command(max_per_query, data_dir, log_dir).await,

        Commands::Info => {
            print_info();
            Ok(())
        }
    }
}
