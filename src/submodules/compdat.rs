//! Well completion data (COMPDAT and friends)

use std::path::Path;

use super::SubmoduleOptions;
use crate::context::ExportContext;
use crate::error::Result;
use crate::options::OptionSet;
use crate::share::ExportedTable;

pub const PARAMETERS: &[&str] = &["initvectors"];

#[derive(Debug, Clone, PartialEq)]
pub struct CompdatOptions {
    /// INIT vectors to attach to each connection
    pub initvectors: Option<Vec<String>>,
}

impl CompdatOptions {
    pub fn from_options(options: &OptionSet) -> Result<Self> {
        Ok(Self {
            initvectors: options.value("initvectors").as_opt_list("initvectors")?,
        })
    }
}

/// Export completion data for `datafile` with metadata
pub fn export_w_metadata(
    ctx: &ExportContext<'_>,
    datafile: &Path,
    config_path: &Path,
    options: &CompdatOptions,
) -> Result<ExportedTable> {
    ctx.export_table(datafile, config_path, SubmoduleOptions::Compdat(options.clone()))
}
