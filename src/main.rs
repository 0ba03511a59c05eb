use anyhow::Result;
use clap::Parser;
use log::{LevelFilter, debug};

use ecl2csv::cli::commands::{bulk_command, export_command, options_command};
use ecl2csv::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG still wins over the --verbose default
    let level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    debug!("Starting ecl2csv in {}", cli.root.display());

    match cli.command {
        Commands::Bulk(args) => bulk_command(args, &cli.root),
        Commands::Export(args) => export_command(args, &cli.root),
        Commands::Options(args) => options_command(args),
    }
}
