//! Registration of all standard export options

pub mod deck;
pub mod grid;
pub mod summary;

use super::OptionsRegistry;
use crate::error::Result;

/// Register all options from all groups
pub fn register_all(registry: &mut OptionsRegistry) -> Result<()> {
    deck::register(registry)?;
    grid::register(registry)?;
    summary::register(registry)?;
    Ok(())
}
