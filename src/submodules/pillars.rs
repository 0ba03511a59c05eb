//! Pillar statistics and fluid contact estimates

use std::path::Path;

use super::SubmoduleOptions;
use crate::context::ExportContext;
use crate::error::Result;
use crate::options::OptionSet;
use crate::share::ExportedTable;

pub const PARAMETERS: &[&str] = &[
    "region",
    "rstdates",
    "soilcutoff",
    "sgascutoff",
    "swatcutoff",
    "stackdates",
    "group",
];

#[derive(Debug, Clone, PartialEq)]
pub struct PillarsOptions {
    /// Region keyword to split statistics by; empty means no split
    pub region: String,
    pub rstdates: String,
    pub soilcutoff: f64,
    pub sgascutoff: f64,
    pub swatcutoff: f64,
    pub stackdates: bool,
    pub group: bool,
}

impl PillarsOptions {
    pub fn from_options(options: &OptionSet) -> Result<Self> {
        Ok(Self {
            region: options.value("region").as_text("region")?,
            rstdates: options.value("rstdates").as_text("rstdates")?,
            soilcutoff: options.value("soilcutoff").as_float("soilcutoff")?,
            sgascutoff: options.value("sgascutoff").as_float("sgascutoff")?,
            swatcutoff: options.value("swatcutoff").as_float("swatcutoff")?,
            stackdates: options.value("stackdates").as_bool("stackdates")?,
            group: options.value("group").as_bool("group")?,
        })
    }
}

/// Export pillar data for `datafile` with metadata
pub fn export_w_metadata(
    ctx: &ExportContext<'_>,
    datafile: &Path,
    config_path: &Path,
    options: &PillarsOptions,
) -> Result<ExportedTable> {
    ctx.export_table(datafile, config_path, SubmoduleOptions::Pillars(options.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{OptionValue, OptionsRegistry};
    use std::collections::BTreeMap;

    #[test]
    fn test_cutoffs_follow_overrides() {
        let registry = OptionsRegistry::standard().unwrap();
        let mut overrides = BTreeMap::new();
        overrides.insert("soilcutoff".to_string(), OptionValue::Float(0.2));
        overrides.insert("region".to_string(), OptionValue::from("EQLNUM"));

        let set = registry.defaults().with_overrides(&overrides).filtered(PARAMETERS);
        let opts = PillarsOptions::from_options(&set).unwrap();

        assert_eq!(opts.soilcutoff, 0.2);
        assert_eq!(opts.sgascutoff, 0.5);
        assert_eq!(opts.region, "EQLNUM");
        assert!(!opts.group);
    }
}
