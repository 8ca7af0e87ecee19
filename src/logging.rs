use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::project_dirs;

const LOG_ENV: &str = "DOCKTOP_LOG";

pub fn default_log_path() -> Option<PathBuf> {
    project_dirs()
        .ok()
        .map(|dirs| dirs.data_local_dir().join("docktop.log"))
}

/// Installs the global subscriber writing to `path`. Returns false when the
/// file can't be opened; the dashboard then runs without logs.
pub fn init(path: Option<&Path>) -> bool {
    let Some(path) = path.map(Path::to_path_buf).or_else(default_log_path) else {
        return false;
    };
    if let Some(dir) = path.parent() {
        if fs::create_dir_all(dir).is_err() {
            return false;
        }
    }
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(_) => return false,
    };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .is_ok()
}
