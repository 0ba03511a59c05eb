use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use std::path::{Path, PathBuf};

use crate::context::ExportContext;
use crate::extract::KeywordInventory;
use crate::options::parse_overrides;
use crate::submodules::Submodule;

#[derive(Args, Debug)]
pub struct ExportCommands {
    /// Submodule to export (compdat, equil, faults, ...)
    pub submodule: Submodule,

    /// Simulation datafile
    pub datafile: PathBuf,

    /// Path to the config file used for metadata
    #[arg(long = "config-path", alias = "config_path")]
    pub config_path: PathBuf,

    /// Option override as key=value, repeatable
    #[arg(short, long, value_name = "KEY=VALUE")]
    pub option: Vec<String>,
}

/// Export one submodule for one datafile
pub fn export_command(args: ExportCommands, root: &Path) -> Result<()> {
    if !args.submodule.is_exportable() {
        anyhow::bail!("'{}' is not a single submodule, use the bulk command", args.submodule);
    }

    let overrides = parse_overrides(&args.option)?;
    let source = KeywordInventory;
    let ctx = ExportContext::new(root, &source).context("Failed to set up export options")?;
    let options = ctx.registry().defaults().with_overrides(&overrides);

    let table = args
        .submodule
        .export(&ctx, &args.datafile, &args.config_path, &options)
        .with_context(|| format!("Export of {} from {} failed", args.submodule, args.datafile.display()))?;

    println!(
        "{} {} ({} rows)",
        "Exported".green().bold(),
        table.table_path.display(),
        table.num_rows
    );
    println!("{} {}", "Metadata".dimmed(), table.meta_path.display());
    Ok(())
}
