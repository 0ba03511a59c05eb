//! Grid, pillar and connection options

use crate::error::Result;
use crate::options::{OptionDefBuilder, OptionsRegistry};

pub fn register(registry: &mut OptionsRegistry) -> Result<()> {
    registry.register(
        OptionDefBuilder::new("grid", "vectors")
            .description("Grid vectors to include, wildcards allowed")
            .list_type("*")
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("grid", "stackdates")
            .description("Stack restart dates into a DATE column")
            .bool_type(false)
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("grid", "dropconstants")
            .description("Drop columns with a single value")
            .bool_type(false)
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("grid", "arrow")
            .description("Write Arrow instead of CSV where supported")
            .bool_type(false)
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("grid", "coords")
            .description("Add cell centre coordinates")
            .bool_type(false)
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("grid", "pillars")
            .description("Add pillar indices to connections")
            .bool_type(false)
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("grid", "region")
            .description("Region parameter to split pillar statistics by")
            .text_type("")
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("grid", "rstdates")
            .description("Restart dates to extract: first, last, all or an ISO date")
            .text_type("")
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("grid", "soilcutoff")
            .description("Oil saturation cutoff for contact estimates")
            .float_type(0.5)
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("grid", "sgascutoff")
            .description("Gas saturation cutoff for contact estimates")
            .float_type(0.5)
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("grid", "swatcutoff")
            .description("Water saturation cutoff for contact estimates")
            .float_type(0.5)
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("grid", "group")
            .description("Group pillar statistics over all pillars")
            .bool_type(false)
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("grid", "boundaryfilter")
            .description("Only keep transmissibilities across region boundaries")
            .bool_type(false)
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("grid", "onlyk")
            .description("Only vertical connections")
            .bool_type(false)
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("grid", "onlyij")
            .description("Only horizontal connections")
            .bool_type(false)
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("grid", "nnc")
            .description("Include non-neighbour connections")
            .bool_type(false)
            .build()?,
    )?;

    Ok(())
}
