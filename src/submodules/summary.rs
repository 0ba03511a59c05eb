//! Summary vectors

use std::path::Path;

use super::SubmoduleOptions;
use crate::context::ExportContext;
use crate::error::Result;
use crate::options::OptionSet;
use crate::share::ExportedTable;

pub const PARAMETERS: &[&str] = &[
    "time_index",
    "column_keys",
    "start_date",
    "end_date",
    "params",
    "paramfile",
    "include_restart",
];

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryOptions {
    pub time_index: String,
    /// Vector patterns such as `FOPT` or `W*`; None keeps every vector
    pub column_keys: Option<Vec<String>>,
    pub start_date: String,
    pub end_date: String,
    pub params: bool,
    pub paramfile: Option<String>,
    pub include_restart: bool,
}

impl SummaryOptions {
    pub fn from_options(options: &OptionSet) -> Result<Self> {
        Ok(Self {
            time_index: options.value("time_index").as_text("time_index")?,
            column_keys: options.value("column_keys").as_opt_list("column_keys")?,
            start_date: options.value("start_date").as_text("start_date")?,
            end_date: options.value("end_date").as_text("end_date")?,
            params: options.value("params").as_bool("params")?,
            paramfile: options.value("paramfile").as_opt_text("paramfile")?,
            include_restart: options.value("include_restart").as_bool("include_restart")?,
        })
    }
}

pub fn export_w_metadata(
    ctx: &ExportContext<'_>,
    datafile: &Path,
    config_path: &Path,
    options: &SummaryOptions,
) -> Result<ExportedTable> {
    ctx.export_table(datafile, config_path, SubmoduleOptions::Summary(options.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{OptionValue, OptionsRegistry};
    use std::collections::BTreeMap;

    #[test]
    fn test_defaults() {
        let registry = OptionsRegistry::standard().unwrap();
        let opts = SummaryOptions::from_options(&registry.defaults().filtered(PARAMETERS)).unwrap();

        assert_eq!(opts.time_index, "raw");
        assert_eq!(opts.column_keys, None);
        assert!(opts.start_date.is_empty());
        assert!(!opts.include_restart);
    }

    #[test]
    fn test_single_column_key_string() {
        let registry = OptionsRegistry::standard().unwrap();
        let mut overrides = BTreeMap::new();
        overrides.insert("column_keys".to_string(), OptionValue::from("FOPT"));
        overrides.insert("time_index".to_string(), OptionValue::from("monthly"));

        let set = registry.defaults().with_overrides(&overrides).filtered(PARAMETERS);
        let opts = SummaryOptions::from_options(&set).unwrap();

        assert_eq!(opts.column_keys, Some(vec!["FOPT".to_string()]));
        assert_eq!(opts.time_index, "monthly");
    }
}
