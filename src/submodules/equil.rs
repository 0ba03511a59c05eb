//! Equilibration tables (EQUIL, RSVD, ...)

use std::path::Path;

use super::SubmoduleOptions;
use crate::context::ExportContext;
use crate::error::Result;
use crate::options::OptionSet;
use crate::share::ExportedTable;

pub const PARAMETERS: &[&str] = &["keywords"];

#[derive(Debug, Clone, PartialEq)]
pub struct EquilOptions {
    pub keywords: Option<Vec<String>>,
}

impl EquilOptions {
    pub fn from_options(options: &OptionSet) -> Result<Self> {
        Ok(Self {
            keywords: options.value("keywords").as_opt_list("keywords")?,
        })
    }
}

pub fn export_w_metadata(
    ctx: &ExportContext<'_>,
    datafile: &Path,
    config_path: &Path,
    options: &EquilOptions,
) -> Result<ExportedTable> {
    ctx.export_table(datafile, config_path, SubmoduleOptions::Equil(options.clone()))
}
