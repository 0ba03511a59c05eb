//! RFT/PLT measurement requests

use std::path::Path;

use super::SubmoduleOptions;
use crate::context::ExportContext;
use crate::error::Result;
use crate::options::OptionSet;
use crate::share::ExportedTable;

pub const PARAMETERS: &[&str] = &["wellname", "date"];

#[derive(Debug, Clone, PartialEq)]
pub struct RftOptions {
    /// Only this well, when given
    pub wellname: Option<String>,
    /// Only this date, when given
    pub date: Option<String>,
}

impl RftOptions {
    pub fn from_options(options: &OptionSet) -> Result<Self> {
        Ok(Self {
            wellname: options.value("wellname").as_opt_text("wellname")?,
            date: options.value("date").as_opt_text("date")?,
        })
    }
}

/// Export RFT data for `datafile` with metadata
pub fn export_w_metadata(
    ctx: &ExportContext<'_>,
    datafile: &Path,
    config_path: &Path,
    options: &RftOptions,
) -> Result<ExportedTable> {
    ctx.export_table(datafile, config_path, SubmoduleOptions::Rft(options.clone()))
}
