use anyhow::{Context, Result};
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{
    CONFIG_FILE_NAME, DEFAULT_INDEX_PATH, DEFAULT_UNGROUPED_NAME, ENV_PREFIX, LOCAL_CONFIG_DIR,
};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Element index configuration
    #[serde(default)]
    pub index: IndexConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Element index settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// JSON element list produced by the parser
    pub path: PathBuf,
    /// Grouping name reported for elements outside any namespace/package
    pub ungrouped_name: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_INDEX_PATH),
            ungrouped_name: DEFAULT_UNGROUPED_NAME.to_string(),
        }
    }
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print rendered template parameters
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Load configuration from multiple sources
///
/// Defaults < global config < local `.apigen/config.toml` < `explicit`
/// file < `APIGEN_` environment variables.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let global_config = get_config_dir()?.join(CONFIG_FILE_NAME);
    let local_config = PathBuf::from(LOCAL_CONFIG_DIR).join(CONFIG_FILE_NAME);

    let mut files = vec![global_config, local_config];
    if let Some(path) = explicit {
        if !path.exists() {
            anyhow::bail!("Configuration file not found: {}", path.display());
        }
        files.push(path.to_path_buf());
    }

    build_figment(&files)
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .context("Failed to load configuration")
}

/// Layer the existing files in `files` over the defaults
fn build_figment(files: &[PathBuf]) -> Figment {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));
    for file in files {
        if file.exists() {
            figment = figment.merge(Toml::file(file));
        }
    }
    figment
}

/// Get the configuration directory
pub fn get_config_dir() -> Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "apigen") {
        Ok(proj_dirs.config_dir().to_path_buf())
    } else {
        // Fallback to home directory
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .context("Could not determine home directory")?;
        Ok(PathBuf::from(home).join(".config").join("apigen"))
    }
}

/// Save configuration to file
pub fn save_config(config: &Config, path: Option<PathBuf>) -> Result<()> {
    let path = if let Some(p) = path {
        p
    } else {
        get_config_dir()?.join(CONFIG_FILE_NAME)
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let toml_string = toml::to_string_pretty(config)?;
    std::fs::write(&path, toml_string)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    Ok(())
}

/// Create a default configuration file if it doesn't exist
///
/// Returns the path of the newly written file, if any.
pub fn init_config(dir: &Path) -> Result<Option<PathBuf>> {
    let config_file = dir.join(CONFIG_FILE_NAME);
    if config_file.exists() {
        return Ok(None);
    }

    save_config(&Config::default(), Some(config_file.clone()))?;
    Ok(Some(config_file))
}
