//! Export options
//!
//! The options system provides:
//! - A registry of every option the submodules understand, with defaults
//! - Per-call option sets, so overrides never outlive a dispatch
//! - Loose values that convert into each submodule's typed options

pub mod builder;
pub mod registrations;
pub mod registry;
pub mod set;
pub mod types;

pub use builder::OptionDefBuilder;
pub use registry::OptionsRegistry;
pub use set::{OptionSet, parse_overrides};
pub use types::{OptionDefinition, OptionType, OptionValue};
