//! Error types for bulk export

use std::path::PathBuf;

use thiserror::Error;

use crate::submodules::Submodule;

/// Main error type for the ecl2csv crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("no 'ecl2csv' section in config file {path}")]
    NoExportSection { path: PathBuf },

    #[error("'ecl2csv.{key}' in {path} {reason}")]
    InvalidSection {
        path: PathBuf,
        key: String,
        reason: String,
    },

    #[error("unknown submodule '{name}'. Expected one of: {expected}")]
    UnknownSubmodule { name: String, expected: String },

    #[error("submodule '{submodule}' cannot be exported on its own")]
    NotExportable { submodule: Submodule },

    #[error("option '{option}' expected {expected}, got {got}")]
    OptionType {
        option: String,
        expected: String,
        got: String,
    },

    #[error("option '{option}' has no type")]
    IncompleteDefinition { option: String },

    #[error("option '{option}' is already registered")]
    DuplicateOption { option: String },

    #[error("invalid option override '{input}' (expected key=value)")]
    InvalidOverride { input: String },

    #[error("row {row} has {got} values but the table has {expected} columns")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("datafile {path} has no usable file name")]
    InvalidDatafile { path: PathBuf },

    #[error("export failed for {} datafile(s): {}", .failures.len(), summarize(.failures))]
    DatafilesFailed { failures: Vec<(PathBuf, Error)> },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML error in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap an I/O error with the operation that failed
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }
}

fn summarize(failures: &[(PathBuf, Error)]) -> String {
    failures
        .iter()
        .map(|(path, err)| format!("{}: {}", path.display(), err))
        .collect::<Vec<_>>()
        .join("; ")
}
