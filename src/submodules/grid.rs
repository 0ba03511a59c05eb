//! Grid geometry and static properties

use std::path::Path;

use super::SubmoduleOptions;
use crate::context::ExportContext;
use crate::error::Result;
use crate::options::OptionSet;
use crate::share::ExportedTable;

pub const PARAMETERS: &[&str] = &["vectors", "rstdates", "stackdates", "dropconstants"];

#[derive(Debug, Clone, PartialEq)]
pub struct GridOptions {
    /// Vector name patterns, `*` for everything
    pub vectors: Vec<String>,
    pub rstdates: String,
    pub stackdates: bool,
    pub dropconstants: bool,
}

impl GridOptions {
    pub fn from_options(options: &OptionSet) -> Result<Self> {
        Ok(Self {
            vectors: options.value("vectors").as_list("vectors")?,
            rstdates: options.value("rstdates").as_text("rstdates")?,
            stackdates: options.value("stackdates").as_bool("stackdates")?,
            dropconstants: options.value("dropconstants").as_bool("dropconstants")?,
        })
    }
}

pub fn export_w_metadata(
    ctx: &ExportContext<'_>,
    datafile: &Path,
    config_path: &Path,
    options: &GridOptions,
) -> Result<ExportedTable> {
    ctx.export_table(datafile, config_path, SubmoduleOptions::Grid(options.clone()))
}
