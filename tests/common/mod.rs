//! Shared fixtures for export tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use ecl2csv::Submodule;
use ecl2csv::error::{Error, Result};
use ecl2csv::extract::{FrameSource, KeywordInventory, Table};
use ecl2csv::share::TABLES_DIR;
use ecl2csv::submodules::SubmoduleOptions;
use serde_yaml::Value;
use tempfile::TempDir;

pub const REEK: &str = "2_R001_REEK-0.DATA";

pub const DECK: &str = "\
RUNSPEC
DIMENS
 40 64 14 /

GRID
SPECGRID
 40 64 14 1 F /
COORD
 1000*0 /
ZCORN
 2000*0 /
PORO
 35840*0.2 /
FAULTS
 'F1' 1 1 1 64 1 14 'X' /
/
NNC
 1 1 1 2 2 2 0.5 /
/

PROPS
PVTO
 1 10 1.1 1.0 /
/
PVDG
 100 0.05 0.01 /
SWOF
 0.2 0 1 0 /
/

REGIONS
FIPNUM
 35840*1 /

SOLUTION
EQUIL
 1700 170 2000 0 1500 0 1 1 0 /
RPTSOL
 FIP=2 /

SUMMARY
FOPT
FOPR
WOPR
 'OP_1' /

SCHEDULE
WELSPECS
 'OP_1' 'OP' 30 37 1* 'OIL' /
/
COMPDAT
 'OP_1' 30 37 1 14 'OPEN' /
/
WRFTPLT
 'OP_1' YES /
/
END
";

pub const CONFIG: &str = "\
masterdata:
  smda:
    country:
      - identifier: Norway
access:
  asset:
    name: Reek
ecl2csv:
  datafile: 2_R001_REEK-0.DATA
";

/// A run directory with decks under eclipse/model and a config file
pub struct Run {
    pub dir: TempDir,
}

impl Run {
    pub fn new() -> Self {
        let run = Run {
            dir: TempDir::new().unwrap(),
        };
        fs::create_dir_all(run.model_dir()).unwrap();
        fs::create_dir_all(run.root().join("fmuconfig/output")).unwrap();
        run
    }

    /// Run with the Reek deck and `config` as the config file
    pub fn with_config(config: &str) -> Self {
        let run = Self::new();
        run.add_deck(REEK);
        run.write_config(config);
        run
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn model_dir(&self) -> PathBuf {
        self.root().join("eclipse/model")
    }

    pub fn datafile(&self, name: &str) -> PathBuf {
        self.model_dir().join(name)
    }

    pub fn config_path(&self) -> PathBuf {
        self.root().join("fmuconfig/output/global_variables.yml")
    }

    pub fn add_deck(&self, name: &str) -> PathBuf {
        let path = self.datafile(name);
        fs::write(&path, DECK).unwrap();
        path
    }

    pub fn write_config(&self, config: &str) {
        fs::write(self.config_path(), config).unwrap();
    }

    pub fn tables_dir(&self) -> PathBuf {
        self.root().join(TABLES_DIR)
    }

    /// Every file in the share tables folder, sorted
    pub fn share_files(&self) -> Vec<PathBuf> {
        let Ok(entries) = fs::read_dir(self.tables_dir()) else {
            return Vec::new();
        };
        let mut files: Vec<_> = entries.map(|e| e.unwrap().path()).collect();
        files.sort();
        files
    }

    /// Check the file count and the metadata of every produced table
    ///
    /// `tagname` is only checked when a single submodule was exported.
    pub fn assert_metadata_are_produced_and_are_correct(&self, tagname: Option<&str>, correct_len: usize) {
        let files = self.share_files();
        assert_eq!(
            files.len(),
            correct_len,
            "Nr of files should be {}, but is {}: {:?}",
            correct_len,
            files.len(),
            files
        );

        for path in &files {
            let file_name = path.file_name().unwrap().to_str().unwrap();
            if file_name.starts_with('.') {
                let meta: Value = serde_yaml::from_str(&fs::read_to_string(path).unwrap()).unwrap();
                assert_eq!(meta["data"]["name"].as_str(), Some("2_R001_REEK"));
                if let Some(tag) = tagname {
                    assert_eq!(meta["data"]["tagname"].as_str(), Some(tag));
                }
                assert!(meta["data"]["spec"]["columns"].as_sequence().is_some());
                assert_eq!(meta["access"]["asset"]["name"].as_str(), Some("Reek"));
            } else {
                let content = fs::read_to_string(path).unwrap();
                assert!(content.starts_with("KEYWORD,SECTION,LINE,FIRST_RECORD"));
            }
        }
    }
}

/// Keyword inventory that remembers the options of every call
#[derive(Default)]
pub struct RecordingSource {
    pub calls: RefCell<Vec<SubmoduleOptions>>,
}

impl FrameSource for RecordingSource {
    fn frame(&self, datafile: &Path, options: &SubmoduleOptions) -> Result<Table> {
        self.calls.borrow_mut().push(options.clone());
        KeywordInventory.frame(datafile, options)
    }
}

/// Keyword inventory that fails for one submodule, or for one datafile
pub struct FailingSource {
    pub submodule: Option<Submodule>,
    pub datafile_stem: Option<&'static str>,
}

impl FrameSource for FailingSource {
    fn frame(&self, datafile: &Path, options: &SubmoduleOptions) -> Result<Table> {
        let stem = datafile.file_stem().and_then(|s| s.to_str());
        if self.submodule == Some(options.submodule()) || (self.datafile_stem.is_some() && stem == self.datafile_stem) {
            return Err(Error::io(
                format!("extract {}", options.submodule()),
                std::io::Error::other("backend failure"),
            ));
        }
        KeywordInventory.frame(datafile, options)
    }
}
