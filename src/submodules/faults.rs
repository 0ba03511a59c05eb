//! Fault definitions

use std::path::Path;

use super::SubmoduleOptions;
use crate::context::ExportContext;
use crate::error::Result;
use crate::share::ExportedTable;

/// Faults take no options besides the datafile
pub const PARAMETERS: &[&str] = &[];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaultsOptions;

pub fn export_w_metadata(
    ctx: &ExportContext<'_>,
    datafile: &Path,
    config_path: &Path,
    options: &FaultsOptions,
) -> Result<ExportedTable> {
    ctx.export_table(datafile, config_path, SubmoduleOptions::Faults(*options))
}
