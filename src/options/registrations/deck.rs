//! Options that select deck keywords and well sets

use crate::error::Result;
use crate::options::{OptionDefBuilder, OptionsRegistry};

/// Register deck and well related options
pub fn register(registry: &mut OptionsRegistry) -> Result<()> {
    registry.register(
        OptionDefBuilder::new("deck", "initvectors")
            .description("INIT vectors to merge into completion data")
            .optional_list()
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("deck", "keywords")
            .description("Restrict export to these deck keywords")
            .optional_list()
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("deck", "keyword")
            .description("VFP keyword to export")
            .text_type("VFPPROD")
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("deck", "vfpnumbers")
            .description("VFP table numbers, comma separated or ranges")
            .text_type("")
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("deck", "fipname")
            .description("Region keyword used for in-place volume reports")
            .text_type("FIPNUM")
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("deck", "zonemap")
            .description("Layer to zone mapping file")
            .text_type("tut")
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("deck", "use_wellconnstatus")
            .description("Take connection status from WELLCONNSTATUS")
            .bool_type(false)
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("deck", "excl_well_startswith")
            .description("Skip wells whose name starts with this prefix")
            .optional_text()
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("deck", "verbose")
            .description("Verbose output from the extraction backend")
            .bool_type(false)
            .build()?,
    )?;

    Ok(())
}
