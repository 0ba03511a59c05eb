//! Writing exported tables and their metadata into the share folder

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;
use serde_yaml::Value;

use crate::error::{Error, Result};
use crate::extract::Table;
use crate::submodules::Submodule;

/// Table output folder, relative to the run root
pub const TABLES_DIR: &str = "share/results/tables";

/// Top-level config sections copied verbatim into every metadata file
const PASSTHROUGH_SECTIONS: [&str; 3] = ["masterdata", "access", "model"];

/// Result of one submodule export
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedTable {
    pub submodule: Submodule,
    pub name: String,
    pub table_path: PathBuf,
    pub meta_path: PathBuf,
    pub num_rows: usize,
}

/// What the metadata records about an export besides the table itself
pub struct ExportMeta<'a> {
    pub submodule: Submodule,
    pub datafile: &'a Path,
    pub config_path: &'a Path,
    pub config: &'a Value,
}

#[derive(Serialize)]
struct Metadata<'a> {
    data: DataBlock<'a>,
    file: FileBlock,
    source: SourceBlock,
    tracklog: Vec<TrackEvent>,
    #[serde(flatten)]
    passthrough: serde_yaml::Mapping,
}

#[derive(Serialize)]
struct DataBlock<'a> {
    name: &'a str,
    tagname: &'a str,
    content: &'a str,
    format: &'a str,
    layout: &'a str,
    table_index: &'a [String],
    spec: SpecBlock<'a>,
}

#[derive(Serialize)]
struct SpecBlock<'a> {
    columns: &'a [String],
    num_columns: usize,
    num_rows: usize,
}

#[derive(Serialize)]
struct FileBlock {
    relative_path: String,
}

#[derive(Serialize)]
struct SourceBlock {
    datafile: String,
    config: String,
}

#[derive(Serialize)]
struct TrackEvent {
    datetime: String,
    event: &'static str,
}

/// Name used for exported files: the datafile stem without a trailing
/// realization suffix, so `2_R001_REEK-0.DATA` becomes `2_R001_REEK`.
pub fn datafile_name(datafile: &Path) -> Result<String> {
    let stem = datafile
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| Error::InvalidDatafile {
            path: datafile.to_path_buf(),
        })?;

    let name = match stem.rsplit_once('-') {
        Some((base, suffix))
            if !base.is_empty() && !suffix.is_empty() && suffix.chars().all(|c| c.is_ascii_digit()) =>
        {
            base
        }
        _ => stem,
    };
    Ok(name.to_string())
}

/// Write `table` as CSV plus a YAML metadata sidecar under `root`
pub fn write_dframe_and_meta_to_file(root: &Path, table: &Table, meta: &ExportMeta<'_>) -> Result<ExportedTable> {
    let name = datafile_name(meta.datafile)?;
    let tag = meta.submodule.name();
    let file_name = format!("{}--{}.csv", name, tag).to_lowercase();

    let tables_dir = root.join(TABLES_DIR);
    fs::create_dir_all(&tables_dir)
        .map_err(|e| Error::io(format!("create {}", tables_dir.display()), e))?;

    let table_path = tables_dir.join(&file_name);
    let mut writer = csv::Writer::from_path(&table_path)?;
    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.write_record(row)?;
    }
    writer
        .flush()
        .map_err(|e| Error::io(format!("write {}", table_path.display()), e))?;

    let metadata = Metadata {
        data: DataBlock {
            name: &name,
            tagname: tag,
            content: meta.submodule.content(),
            format: "csv",
            layout: "table",
            table_index: table.index(),
            spec: SpecBlock {
                columns: table.columns(),
                num_columns: table.columns().len(),
                num_rows: table.num_rows(),
            },
        },
        file: FileBlock {
            relative_path: format!("{}/{}", TABLES_DIR, file_name),
        },
        source: SourceBlock {
            datafile: meta.datafile.display().to_string(),
            config: meta.config_path.display().to_string(),
        },
        tracklog: vec![TrackEvent {
            datetime: Utc::now().to_rfc3339(),
            event: "created",
        }],
        passthrough: passthrough(meta.config),
    };

    let meta_path = tables_dir.join(format!(".{}.yml", file_name));
    let yaml = serde_yaml::to_string(&metadata).map_err(|source| Error::Yaml {
        path: meta_path.clone(),
        source,
    })?;
    fs::write(&meta_path, yaml).map_err(|e| Error::io(format!("write {}", meta_path.display()), e))?;

    log::debug!("Wrote {} and {}", table_path.display(), meta_path.display());

    Ok(ExportedTable {
        submodule: meta.submodule,
        name,
        table_path,
        meta_path,
        num_rows: table.num_rows(),
    })
}

fn passthrough(config: &Value) -> serde_yaml::Mapping {
    let mut mapping = serde_yaml::Mapping::new();
    for key in PASSTHROUGH_SECTIONS {
        if let Some(section) = config.get(key) {
            mapping.insert(Value::String(key.to_string()), section.clone());
        }
    }
    mapping
}
