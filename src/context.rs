//! Everything an export call needs besides its own arguments

use std::path::{Path, PathBuf};

use crate::config;
use crate::error::Result;
use crate::extract::FrameSource;
use crate::options::OptionsRegistry;
use crate::share::{self, ExportMeta, ExportedTable};
use crate::submodules::SubmoduleOptions;

/// Default model directory, relative to the run root
pub const MODEL_DIR: &str = "eclipse/model";

/// Run root, option registry and extraction backend for a set of exports
pub struct ExportContext<'a> {
    root: PathBuf,
    registry: OptionsRegistry,
    source: &'a dyn FrameSource,
}

impl<'a> ExportContext<'a> {
    /// Context with the standard option registry
    pub fn new(root: impl Into<PathBuf>, source: &'a dyn FrameSource) -> Result<Self> {
        Ok(Self::with_registry(root, OptionsRegistry::standard()?, source))
    }

    pub fn with_registry(root: impl Into<PathBuf>, registry: OptionsRegistry, source: &'a dyn FrameSource) -> Self {
        Self {
            root: root.into(),
            registry,
            source,
        }
    }

    /// Directory holding `eclipse/model/` and `share/`
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn registry(&self) -> &OptionsRegistry {
        &self.registry
    }

    pub fn model_dir(&self) -> PathBuf {
        self.root.join(MODEL_DIR)
    }

    /// Extract one submodule's table and write it with metadata
    pub fn export_table(
        &self,
        datafile: &Path,
        config_path: &Path,
        options: SubmoduleOptions,
    ) -> Result<ExportedTable> {
        let submodule = options.submodule();
        log::debug!("Exporting {} from {} with {:?}", submodule, datafile.display(), options);

        let table = self.source.frame(datafile, &options)?;
        let config = config::load_document(config_path)?;
        share::write_dframe_and_meta_to_file(
            &self.root,
            &table,
            &ExportMeta {
                submodule,
                datafile,
                config_path,
                config: &config,
            },
        )
    }
}
