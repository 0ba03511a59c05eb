//! In-place volume reports per region

use std::path::Path;

use super::SubmoduleOptions;
use crate::context::ExportContext;
use crate::error::Result;
use crate::options::OptionSet;
use crate::share::ExportedTable;

pub const PARAMETERS: &[&str] = &["fipname"];

#[derive(Debug, Clone, PartialEq)]
pub struct FipreportsOptions {
    /// Region keyword the reports are split by, FIPNUM unless overridden
    pub fipname: String,
}

impl FipreportsOptions {
    pub fn from_options(options: &OptionSet) -> Result<Self> {
        Ok(Self {
            fipname: options.value("fipname").as_text("fipname")?,
        })
    }
}

pub fn export_w_metadata(
    ctx: &ExportContext<'_>,
    datafile: &Path,
    config_path: &Path,
    options: &FipreportsOptions,
) -> Result<ExportedTable> {
    ctx.export_table(datafile, config_path, SubmoduleOptions::Fipreports(options.clone()))
}
