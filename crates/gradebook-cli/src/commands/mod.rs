pub mod add;
pub mod init;
pub mod list;
pub mod shell;
pub mod show;
pub mod validate;

use std::path::PathBuf;

use anyhow::Result;

use gradebook_core::FileStore;

/// Where the roster file comes from, as given on the command line.
pub struct DataLocation {
    pub file: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

impl DataLocation {
    /// Resolve the roster file: `--file`, then config/env, then the default.
    pub fn store(&self) -> Result<FileStore> {
        if let Some(file) = &self.file {
            return Ok(FileStore::new(file));
        }
        let config = gradebook_core::load_config_from(self.config.as_deref())?;
        Ok(FileStore::new(config.data_file))
    }
}
