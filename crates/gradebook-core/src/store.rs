//! Filesystem-backed roster storage.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::codec::{parse_roster_str, serialize_roster, LoadReport};
use crate::model::Roster;
use crate::traits::RosterStore;

/// Stores the roster as a flat text file at a fixed path.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RosterStore for FileStore {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<LoadReport> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("{} not found, starting empty", self.path.display());
                return Ok(LoadReport::default());
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("failed to read roster file: {}", self.path.display())
                })
            }
        };

        let (roster, warnings) = parse_roster_str(&content);
        tracing::info!(
            students = roster.len(),
            warnings = warnings.len(),
            "loaded {}",
            self.path.display()
        );

        Ok(LoadReport {
            roster,
            warnings,
            source_found: true,
        })
    }

    fn save(&self, roster: &Roster) -> Result<()> {
        std::fs::write(&self.path, serialize_roster(roster))
            .with_context(|| format!("failed to write roster file: {}", self.path.display()))?;
        tracing::info!(students = roster.len(), "saved {}", self.path.display());
        Ok(())
    }
}
