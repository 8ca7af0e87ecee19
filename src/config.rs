use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use directories::ProjectDirs;
use std::fs;
use std::io::Write;

use crate::types::AppConfig;

pub fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "docktop", "docktop")
        .context("Failed to determine project directories")
}

pub fn get_config_path() -> Result<PathBuf> {
    let proj_dirs = project_dirs()?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

/// The explicit path if given, else the platform config location.
pub fn resolve_config_path(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(p) => Ok(p.to_path_buf()),
        None => get_config_path(),
    }
}

/// Loads the configuration from `path`, layered under `DOCKTOP_*`
/// environment variables. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let settings = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(Environment::with_prefix("DOCKTOP").try_parsing(true))
        .build()?;

    settings.try_deserialize::<AppConfig>().context("Failed to parse configuration")
}

/// Writes the defaults to `path` unless a file is already there.
pub fn ensure_config_file(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    save_config(path, &AppConfig::default())
        .with_context(|| format!("could not write default config to {}", path.display()))
}

pub fn save_config(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
    }
    let toml_string = toml::to_string_pretty(config)?;

    let mut file = fs::File::create(path)?;
    file.write_all(toml_string.as_bytes())?;

    Ok(())
}
