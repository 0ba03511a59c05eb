use super::commands::{BulkCommands, ExportCommands, OptionsCommands};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ecl2csv")]
#[command(version, about = "Export reservoir simulation tables with metadata")]
pub struct Cli {
    /// Be verbose
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding eclipse/model/ and share/
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export every configured submodule, driven by the config file
    Bulk(BulkCommands),
    /// Export a single submodule for one datafile
    Export(ExportCommands),
    /// List export options and their defaults
    Options(OptionsCommands),
}
