use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde_yaml::Value;

use crate::error::{Error, Result};
use crate::options::OptionValue;
use crate::submodules::{Submodule, parse_submodules};

/// Top-level config key holding the export setup
pub const EXPORT_SECTION: &str = "ecl2csv";

/// Extension of simulation decks, matched case-sensitively
pub const DATAFILE_EXTENSION: &str = "DATA";

/// Datafiles, submodule selection and overrides derived from a config file
#[derive(Debug, Clone, PartialEq)]
pub struct ExportPlan {
    pub datafiles: Vec<PathBuf>,
    pub include: Option<Vec<Submodule>>,
    pub overrides: Option<BTreeMap<String, OptionValue>>,
}

/// Read a YAML config document
pub fn load_document(config_path: &Path) -> Result<Value> {
    debug!("Loading config from: {:?}", config_path);
    let content = fs::read_to_string(config_path)
        .map_err(|e| Error::io(format!("read config file {}", config_path.display()), e))?;
    serde_yaml::from_str(&content).map_err(|source| Error::Yaml {
        path: config_path.to_path_buf(),
        source,
    })
}

impl ExportPlan {
    /// Load the config file at `config_path` and derive the plan
    pub fn load(config_path: &Path, model_dir: &Path) -> Result<Self> {
        let document = load_document(config_path)?;
        Self::from_document(&document, config_path, model_dir)
    }

    /// Derive the plan from a parsed config document
    ///
    /// A missing export section is an error. When the section has no
    /// readable `datafile` name, every datafile in `model_dir` is used with
    /// all submodules and default options. Otherwise a malformed `datatypes`
    /// or `options` entry is an error.
    pub fn from_document(document: &Value, config_path: &Path, model_dir: &Path) -> Result<Self> {
        let section = document
            .get(EXPORT_SECTION)
            .ok_or_else(|| Error::NoExportSection {
                path: config_path.to_path_buf(),
            })?;

        let Some(datafile) = section.get("datafile").and_then(Value::as_str) else {
            debug!("No datafile in '{}' section, searching {:?}", EXPORT_SECTION, model_dir);
            return Ok(Self {
                datafiles: glob_for_datafiles(model_dir)?,
                include: None,
                overrides: None,
            });
        };

        let path = model_dir.join(datafile);
        debug!("Path to use for search {:?}", path);
        let include = match section.get("datatypes") {
            None | Some(Value::Null) => None,
            Some(datatypes) => Some(parse_submodules(&datatype_names(datatypes, config_path)?)?),
        };
        debug!("User defined modules {:?}", include);
        let overrides = match section.get("options") {
            None | Some(Value::Null) => None,
            Some(options) => Some(option_overrides(options, config_path)?),
        };
        debug!("User defined options {:?}", overrides);

        Ok(Self {
            datafiles: vec![path],
            include,
            overrides,
        })
    }
}

fn invalid(config_path: &Path, key: impl Into<String>, reason: impl Into<String>) -> Error {
    Error::InvalidSection {
        path: config_path.to_path_buf(),
        key: key.into(),
        reason: reason.into(),
    }
}

/// Submodule names from `datatypes`, a single name or a list of names
fn datatype_names(value: &Value, config_path: &Path) -> Result<Vec<String>> {
    match value {
        Value::String(name) => Ok(vec![name.clone()]),
        Value::Sequence(items) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| invalid(config_path, "datatypes", "must only hold submodule names"))
            })
            .collect(),
        _ => Err(invalid(config_path, "datatypes", "must be a submodule name or a list of them")),
    }
}

/// Overrides from `options`, a mapping of option names to values
fn option_overrides(value: &Value, config_path: &Path) -> Result<BTreeMap<String, OptionValue>> {
    let Value::Mapping(mapping) = value else {
        return Err(invalid(config_path, "options", "must be a mapping of option names to values"));
    };

    let mut overrides = BTreeMap::new();
    for (key, value) in mapping {
        let Some(key) = key.as_str() else {
            return Err(invalid(config_path, "options", "must have string keys"));
        };
        let value = serde_yaml::from_value::<OptionValue>(value.clone()).map_err(|_| {
            invalid(
                config_path,
                format!("options.{}", key),
                "must be a boolean, number, string or list of strings",
            )
        })?;
        overrides.insert(key.to_string(), value);
    }
    Ok(overrides)
}

/// All `*.DATA` files directly inside `dir`, sorted by path
///
/// A missing directory has no datafiles.
pub fn glob_for_datafiles(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        debug!("No model directory at {:?}", dir);
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(dir).map_err(|e| Error::io(format!("list {}", dir.display()), e))?;
    let mut datafiles = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| Error::io(format!("list {}", dir.display()), e))?
            .path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == DATAFILE_EXTENSION) {
            datafiles.push(path);
        }
    }
    datafiles.sort();

    info!("Found {} datafiles in {:?}", datafiles.len(), dir);
    Ok(datafiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn plan(yaml: &str, model_dir: &Path) -> Result<ExportPlan> {
        let document: Value = serde_yaml::from_str(yaml).unwrap();
        ExportPlan::from_document(&document, Path::new("global_variables.yml"), model_dir)
    }

    #[test]
    fn test_full_section() {
        let model_dir = Path::new("eclipse/model");
        let plan = plan(
            "ecl2csv:\n  datafile: 2_R001_REEK-0.DATA\n  datatypes: [rft, summary]\n  options:\n    time_index: monthly\n",
            model_dir,
        )
        .unwrap();

        assert_eq!(plan.datafiles, vec![model_dir.join("2_R001_REEK-0.DATA")]);
        assert_eq!(plan.include, Some(vec![Submodule::Rft, Submodule::Summary]));
        let overrides = plan.overrides.unwrap();
        assert_eq!(overrides["time_index"], OptionValue::from("monthly"));
    }

    #[test]
    fn test_datafile_only() {
        let plan = plan("ecl2csv:\n  datafile: A.DATA\n", Path::new("m")).unwrap();
        assert_eq!(plan.datafiles, vec![PathBuf::from("m/A.DATA")]);
        assert_eq!(plan.include, None);
        assert_eq!(plan.overrides, None);
    }

    #[test]
    fn test_missing_section() {
        let result = plan("masterdata:\n  smda: {}\n", Path::new("m"));
        assert!(matches!(result, Err(Error::NoExportSection { .. })));
    }

    #[test]
    fn test_unknown_datatype_is_fatal() {
        let result = plan("ecl2csv:\n  datafile: A.DATA\n  datatypes: [rft, wells]\n", Path::new("m"));
        assert!(matches!(result, Err(Error::UnknownSubmodule { .. })));
    }

    #[test]
    fn test_single_datatype_and_null_options() {
        let plan = plan("ecl2csv:\n  datafile: A.DATA\n  datatypes: rft\n  options: ~\n", Path::new("m")).unwrap();
        assert_eq!(plan.datafiles, vec![PathBuf::from("m/A.DATA")]);
        assert_eq!(plan.include, Some(vec![Submodule::Rft]));
        assert_eq!(plan.overrides, None);
    }

    #[test]
    fn test_malformed_entries_next_to_datafile_are_errors() {
        for (yaml, key) in [
            ("ecl2csv:\n  datafile: A.DATA\n  datatypes: {rft: 1}\n", "datatypes"),
            ("ecl2csv:\n  datafile: A.DATA\n  datatypes: [rft, 3]\n", "datatypes"),
            ("ecl2csv:\n  datafile: A.DATA\n  options: [zonemap]\n", "options"),
            ("ecl2csv:\n  datafile: A.DATA\n  options:\n    zonemap: {a: 1}\n", "options.zonemap"),
        ] {
            match plan(yaml, Path::new("m")) {
                Err(Error::InvalidSection { key: found, .. }) => assert_eq!(found, key, "for config {:?}", yaml),
                other => panic!("expected InvalidSection for {:?}, got {:?}", yaml, other),
            }
        }
    }

    #[test]
    fn test_malformed_section_falls_back_to_glob() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("B.DATA"), "RUNSPEC\n").unwrap();
        fs::write(dir.path().join("A.DATA"), "RUNSPEC\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::write(dir.path().join("lower.data"), "").unwrap();

        for yaml in [
            "ecl2csv:\n  datatypes: [rft]\n",
            "ecl2csv:\n",
            "ecl2csv: just a string\n",
            "ecl2csv:\n  datafile: [not, a, string]\n",
        ] {
            let plan = plan(yaml, dir.path()).unwrap();
            assert_eq!(
                plan.datafiles,
                vec![dir.path().join("A.DATA"), dir.path().join("B.DATA")],
                "for config {:?}",
                yaml
            );
            assert_eq!(plan.include, None);
            assert_eq!(plan.overrides, None);
        }
    }

    #[test]
    fn test_glob_missing_dir_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(glob_for_datafiles(&dir.path().join("nope")).unwrap().is_empty());
    }
}
