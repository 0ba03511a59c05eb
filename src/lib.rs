//! Config-driven bulk export of reservoir simulation tables
//!
//! A config file names a simulation deck, the submodules to run and option
//! overrides. Each submodule turns the deck into a table through a
//! [`extract::FrameSource`] and writes it, with a YAML metadata sidecar, into
//! `share/results/tables/`.

pub mod bulk;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod extract;
pub mod options;
pub mod share;
pub mod submodules;

pub use bulk::{BulkOutcome, bulk_export, bulk_export_with_configfile};
pub use context::ExportContext;
pub use error::{Error, Result};
pub use submodules::{SUBMODULES, Submodule};
