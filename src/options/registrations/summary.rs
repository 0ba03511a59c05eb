//! Summary, RFT and time selection options

use crate::error::Result;
use crate::options::{OptionDefBuilder, OptionsRegistry};

pub fn register(registry: &mut OptionsRegistry) -> Result<()> {
    registry.register(
        OptionDefBuilder::new("summary", "time_index")
            .description("Time resolution: raw, first, last, daily, monthly or yearly")
            .text_type("raw")
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("summary", "column_keys")
            .description("Summary vectors to include, wildcards allowed")
            .optional_list()
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("summary", "start_date")
            .description("Drop summary data before this date")
            .text_type("")
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("summary", "startdate")
            .description("Start date for cumulative tables")
            .optional_text()
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("summary", "end_date")
            .description("Drop summary data after this date")
            .text_type("")
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("summary", "params")
            .description("Merge realization parameters into the table")
            .bool_type(false)
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("summary", "paramfile")
            .description("Explicit parameters file")
            .optional_text()
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("summary", "include_restart")
            .description("Include data from the restart source case")
            .bool_type(false)
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("summary", "wellname")
            .description("Restrict RFT data to one well")
            .optional_text()
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("summary", "date")
            .description("Restrict RFT data to one date")
            .optional_text()
            .build()?,
    )?;

    Ok(())
}
