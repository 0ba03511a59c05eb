pub mod bulk;
pub mod export;
pub mod options;

pub use bulk::{BulkCommands, bulk_command};
pub use export::{ExportCommands, export_command};
pub use options::{OptionsCommands, options_command};
