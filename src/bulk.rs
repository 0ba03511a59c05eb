//! Bulk export: every requested submodule against one or more datafiles

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::config::ExportPlan;
use crate::context::ExportContext;
use crate::error::{Error, Result};
use crate::options::OptionValue;
use crate::share::ExportedTable;
use crate::submodules::{SUBMODULES, Submodule};

/// What a config-driven export did
#[derive(Debug, Clone, PartialEq)]
pub enum BulkOutcome {
    /// The config has no export section; nothing was written
    NotConfigured,
    Exported { tables: Vec<ExportedTable> },
}

impl BulkOutcome {
    pub fn tables(&self) -> &[ExportedTable] {
        match self {
            BulkOutcome::NotConfigured => &[],
            BulkOutcome::Exported { tables } => tables,
        }
    }
}

/// Export `datafile` through every submodule in `include`
///
/// `include` defaults to all submodules in canonical order. Overrides apply
/// to this call only. The first failing submodule stops the loop and its
/// error is returned; tables written before it stay on disk.
pub fn bulk_export(
    ctx: &ExportContext<'_>,
    datafile: &Path,
    config_path: &Path,
    include: Option<&[Submodule]>,
    overrides: Option<&BTreeMap<String, OptionValue>>,
) -> Result<Vec<ExportedTable>> {
    let mut options = ctx.registry().defaults();
    if let Some(overrides) = overrides {
        options = options.with_overrides(overrides);
        for mismatch in ctx.registry().check(&options) {
            warn!("Option {} may be rejected by the submodules using it", mismatch);
        }
    }

    let include = include.unwrap_or(&SUBMODULES[..]);
    let mut tables = Vec::with_capacity(include.len());
    for submodule in include {
        if !submodule.is_exportable() {
            debug!("Skipping {}, it is the bulk exporter itself", submodule);
            continue;
        }
        let table = submodule.export(ctx, datafile, config_path, &options)?;
        info!("Export of {} data", submodule);
        tables.push(table);
    }
    Ok(tables)
}

/// Add freshly exported tables, replacing entries whose files were
/// overwritten
fn record_tables(tables: &mut Vec<ExportedTable>, exported: Vec<ExportedTable>) {
    for table in exported {
        match tables.iter_mut().find(|t| t.table_path == table.table_path) {
            Some(earlier) => {
                warn!(
                    "{} replaces a table written earlier in this run",
                    table.table_path.display()
                );
                *earlier = table;
            }
            None => tables.push(table),
        }
    }
}

/// Export according to the `ecl2csv` section of the config file
///
/// A config without that section is not an error: a warning is logged and
/// [`BulkOutcome::NotConfigured`] returned. A failing datafile stops its own
/// submodules only; remaining datafiles are still exported and the failures
/// are reported together at the end. Datafiles that share an export name
/// write to the same files, and the outcome lists only the last of them.
pub fn bulk_export_with_configfile(ctx: &ExportContext<'_>, config_path: &Path) -> Result<BulkOutcome> {
    let plan = match ExportPlan::load(config_path, &ctx.model_dir()) {
        Ok(plan) => plan,
        Err(Error::NoExportSection { .. }) => {
            warn!("No eclipse export set up, you will not get anything exported");
            return Ok(BulkOutcome::NotConfigured);
        }
        Err(e) => return Err(e),
    };

    info!("Data files to use: {:?}", plan.datafiles);
    let mut tables = Vec::new();
    let mut failures: Vec<(PathBuf, Error)> = Vec::new();
    for datafile in &plan.datafiles {
        info!("Working with {}", datafile.display());
        match bulk_export(
            ctx,
            datafile,
            config_path,
            plan.include.as_deref(),
            plan.overrides.as_ref(),
        ) {
            Ok(exported) => record_tables(&mut tables, exported),
            Err(e) => {
                warn!("Export of {} stopped: {}", datafile.display(), e);
                failures.push((datafile.clone(), e));
            }
        }
    }

    if !failures.is_empty() {
        return Err(Error::DatafilesFailed { failures });
    }
    Ok(BulkOutcome::Exported { tables })
}
