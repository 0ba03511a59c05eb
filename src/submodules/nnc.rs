//! Non-neighbour connections

use std::path::Path;

use super::SubmoduleOptions;
use crate::context::ExportContext;
use crate::error::Result;
use crate::options::OptionSet;
use crate::share::ExportedTable;

pub const PARAMETERS: &[&str] = &["coords", "pillars"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NncOptions {
    pub coords: bool,
    pub pillars: bool,
}

impl NncOptions {
    pub fn from_options(options: &OptionSet) -> Result<Self> {
        Ok(Self {
            coords: options.value("coords").as_bool("coords")?,
            pillars: options.value("pillars").as_bool("pillars")?,
        })
    }
}

pub fn export_w_metadata(
    ctx: &ExportContext<'_>,
    datafile: &Path,
    config_path: &Path,
    options: &NncOptions,
) -> Result<ExportedTable> {
    ctx.export_table(datafile, config_path, SubmoduleOptions::Nnc(*options))
}
