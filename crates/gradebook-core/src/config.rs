//! gradebook configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the data file location.
pub const DATA_FILE_ENV: &str = "GRADEBOOK_DATA_FILE";

/// Top-level gradebook configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradebookConfig {
    /// Path of the roster file.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("database_siswa.txt")
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are not scanned again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + end];
        result.push_str(&rest[..start]);
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without an explicit path:
/// 1. `gradebook.toml` in the current directory
/// 2. `~/.config/gradebook/config.toml`
///
/// `GRADEBOOK_DATA_FILE` overrides `data_file` from any file.
pub fn load_config_from(path: Option<&Path>) -> Result<GradebookConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("gradebook.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("using config {}", path.display());
            config
        }
        None => GradebookConfig::default(),
    };

    if let Ok(file) = std::env::var(DATA_FILE_ENV) {
        if !file.trim().is_empty() {
            config.data_file = PathBuf::from(file);
        }
    }

    Ok(config)
}

/// Parse TOML config text, expanding `${VAR}` references in `data_file`.
pub fn parse_config_str(content: &str) -> Result<GradebookConfig> {
    let mut config: GradebookConfig = toml::from_str(content)?;
    let raw = config.data_file.to_string_lossy().into_owned();
    config.data_file = PathBuf::from(resolve_env_vars(&raw));
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("gradebook"))
}

/// Starter config written by `gradebook init`.
pub const SAMPLE_CONFIG: &str = r#"# gradebook configuration

# Roster file, one student per line: <nis>,<name>,<score1>;<score2>;...
data_file = "database_siswa.txt"
"#;
