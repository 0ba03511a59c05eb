use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use std::path::{Path, PathBuf};

use crate::bulk::{BulkOutcome, bulk_export_with_configfile};
use crate::context::ExportContext;
use crate::extract::KeywordInventory;

#[derive(Args, Debug)]
pub struct BulkCommands {
    /// Path to the config file with an ecl2csv section
    #[arg(long = "config-path", alias = "config_path")]
    pub config_path: PathBuf,
}

/// Run the config-driven bulk export
pub fn bulk_command(args: BulkCommands, root: &Path) -> Result<()> {
    let source = KeywordInventory;
    let ctx = ExportContext::new(root, &source).context("Failed to set up export options")?;

    let outcome = bulk_export_with_configfile(&ctx, &args.config_path)
        .with_context(|| format!("Bulk export with {} failed", args.config_path.display()))?;

    match outcome {
        BulkOutcome::NotConfigured => {
            println!("{}", "Nothing exported: no ecl2csv section in config".yellow());
        }
        BulkOutcome::Exported { tables } => {
            for table in &tables {
                println!(
                    "  {} {} ({} rows)",
                    table.submodule.to_string().cyan(),
                    table.table_path.display(),
                    table.num_rows
                );
            }
            println!("{} {} tables", "Exported".green().bold(), tables.len());
        }
    }
    Ok(())
}
