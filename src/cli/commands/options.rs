use anyhow::{Context, Result};
use clap::Args;
use colored::*;

use crate::options::OptionsRegistry;
use crate::submodules::Submodule;

#[derive(Args, Debug)]
pub struct OptionsCommands {
    /// Only show options accepted by this submodule
    #[arg(long)]
    pub submodule: Option<Submodule>,

    /// Print definitions as JSON
    #[arg(long)]
    pub json: bool,
}

/// List registered options with their defaults
pub fn options_command(args: OptionsCommands) -> Result<()> {
    let registry = OptionsRegistry::standard().context("Failed to build option registry")?;

    let definitions: Vec<_> = match args.submodule {
        Some(submodule) => submodule
            .parameters()
            .iter()
            .filter_map(|name| registry.get(name))
            .collect(),
        None => registry.list_all(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&definitions)?);
        return Ok(());
    }

    if definitions.is_empty() {
        println!("{}", "No options".dimmed());
        return Ok(());
    }

    for def in definitions {
        println!(
            "{:<22} {:<7} {:<10} {}",
            def.key.cyan(),
            def.ty.to_string(),
            def.default.to_string(),
            def.description.dimmed()
        );
    }
    Ok(())
}
