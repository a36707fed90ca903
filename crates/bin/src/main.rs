//! Entry point for the datapath binary.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("datapath=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Commands::Get(args) => commands::get::run(args),
        Commands::Set(args) => commands::set::run(args),
        Commands::Remove(args) => commands::remove::run(args),
        Commands::Flatten(args) => commands::flatten::run(args),
        Commands::Validate(args) => commands::validate::run(args),
    }
}
