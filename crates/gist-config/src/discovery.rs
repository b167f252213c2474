//! Finding and layering `gist` config files.
//!
//! Layers, lowest precedence first:
//! 1. `<user config dir>/config.toml` (`$GIST_CONFIG_DIR` or the platform dir)
//! 2. `gist.toml` in the project directory
//! 3. command-line flags, applied by the binary

use std::path::{Path, PathBuf};

use crate::{ConfigError, GistConfig, Result};

/// Project-local file name.
const PROJECT_CONFIG_FILE: &str = "gist.toml";

/// File name inside the user config directory.
const USER_CONFIG_FILE: &str = "config.toml";

const APP_NAME: &str = "gist";

/// Overrides the user config directory when set and non-empty.
const CONFIG_DIR_ENV: &str = "GIST_CONFIG_DIR";

/// One candidate config file.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Where the layer was looked for.
    pub path: PathBuf,
    /// False when the file is absent or failed to parse.
    pub loaded: bool,
}

/// Merged config plus what went into it.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: GistConfig,
    /// Every candidate, lowest precedence first.
    pub sources: Vec<ConfigSource>,
    /// Warnings generated during loading (e.g., a malformed layer).
    pub warnings: Vec<String>,
}

impl LoadedConfig {
    /// Paths that contributed to the merged config.
    pub fn loaded_from(&self) -> Vec<&Path> {
        self.sources
            .iter()
            .filter(|s| s.loaded)
            .map(|s| s.path.as_path())
            .collect()
    }
}

/// Discover and merge the user and project layers.
pub fn load_config(project_dir: Option<&Path>) -> Result<LoadedConfig> {
    load_config_with_options(project_dir, None)
}

/// Load configuration with explicit control over the user config directory.
///
/// `config_dir` overrides both `GIST_CONFIG_DIR` and the platform default.
pub fn load_config_with_options(
    project_dir: Option<&Path>,
    config_dir: Option<&Path>,
) -> Result<LoadedConfig> {
    let mut config = GistConfig::new();
    let mut sources = Vec::new();
    let mut warnings = Vec::new();

    // 1. User config: explicit override, then env var, then platform default
    let user_config_path = match config_dir {
        Some(dir) => Some(dir.join(USER_CONFIG_FILE)),
        None => user_config_path(),
    };
    if let Some(path) = user_config_path {
        sources.push(load_layer(&mut config, &path, &mut warnings));
    }

    // 2. Project-local config
    let project_path = project_dir
        .map(|d| d.join(PROJECT_CONFIG_FILE))
        .unwrap_or_else(|| PathBuf::from(PROJECT_CONFIG_FILE));
    sources.push(load_layer(&mut config, &project_path, &mut warnings));

    Ok(LoadedConfig {
        config,
        sources,
        warnings,
    })
}

/// Parse a single file, skipping discovery.
pub fn load_config_file(path: &Path) -> Result<GistConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.display().to_string(),
        source: e,
    })?;
    GistConfig::from_toml(&contents)
}

/// Path of the user config file.
pub fn user_config_path() -> Option<PathBuf> {
    user_config_dir().map(|d| d.join(USER_CONFIG_FILE))
}

/// The user config directory for gist.
///
/// Checks `GIST_CONFIG_DIR` first, then falls back to the platform default
/// (`~/.config/gist` on Linux, `~/Library/Application Support/gist` on macOS).
pub fn user_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV)
        && !dir.is_empty()
    {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|d| d.join(APP_NAME))
}

/// Merge one layer into `config`.
///
/// A missing file is skipped silently; a malformed one is skipped with a
/// warning so a bad project file never blocks startup.
fn load_layer(config: &mut GistConfig, path: &Path, warnings: &mut Vec<String>) -> ConfigSource {
    if !path.is_file() {
        return ConfigSource {
            path: path.to_path_buf(),
            loaded: false,
        };
    }

    match load_config_file(path) {
        Ok(layer) => {
            config.merge(layer);
            ConfigSource {
                path: path.to_path_buf(),
                loaded: true,
            }
        }
        Err(e) => {
            warnings.push(format!("Skipped {}: {}", path.display(), e));
            ConfigSource {
                path: path.to_path_buf(),
                loaded: false,
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
