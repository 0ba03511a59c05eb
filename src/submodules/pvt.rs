//! PVT tables

use std::path::Path;

use super::SubmoduleOptions;
use crate::context::ExportContext;
use crate::error::Result;
use crate::options::OptionSet;
use crate::share::ExportedTable;

pub const PARAMETERS: &[&str] = &["keywords"];

#[derive(Debug, Clone, PartialEq)]
pub struct PvtOptions {
    pub keywords: Option<Vec<String>>,
}

impl PvtOptions {
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
    options: &PvtOptions,
) -> Result<ExportedTable> {
    ctx.export_table(datafile, config_path, SubmoduleOptions::Pvt(options.clone()))
}
