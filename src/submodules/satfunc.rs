//! Saturation functions (relative permeability and capillary pressure)

use std::path::Path;

use super::SubmoduleOptions;
use crate::context::ExportContext;
use crate::error::Result;
use crate::options::OptionSet;
use crate::share::ExportedTable;

pub const PARAMETERS: &[&str] = &["keywords"];

#[derive(Debug, Clone, PartialEq)]
pub struct SatfuncOptions {
    pub keywords: Option<Vec<String>>,
}

impl SatfuncOptions {
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
    options: &SatfuncOptions,
) -> Result<ExportedTable> {
    ctx.export_table(datafile, config_path, SubmoduleOptions::Satfunc(options.clone()))
}
