use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single process running inside a container, as reported by `ps`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessRecord {
    pub pid: String,
    pub command: String,
    pub uptime: String,
    pub status: String,
    pub cpu: String,
    pub ram: String,
}

/// One container of a snapshot. Only `id` is stable across refreshes; the
/// UI flags are carried forward by the reconciler, everything else is
/// replaced wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerRecord {
    pub id: String,
    pub name: String,
    pub image: String,
    pub command: String,
    pub uptime: String,
    pub status: String,
    pub cpu: String,
    pub ram: String,
    pub processes: Vec<ProcessRecord>,
    pub selected: bool,
    pub expanded: bool,
}

impl ContainerRecord {
    pub fn is_running(&self) -> bool {
        self.status.starts_with("Up")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Image,
    Id,
    Command,
    Uptime,
    Status,
    Cpu,
    Ram,
}

impl SortKey {
    pub const ALL: [SortKey; 8] = [
        SortKey::Name,
        SortKey::Image,
        SortKey::Id,
        SortKey::Command,
        SortKey::Uptime,
        SortKey::Status,
        SortKey::Cpu,
        SortKey::Ram,
    ];

    /// Maps the `1`..`8` hotkeys onto sort keys, in column order.
    pub fn from_digit(c: char) -> Option<SortKey> {
        let n = c.to_digit(10)? as usize;
        if (1..=8).contains(&n) {
            Some(Self::ALL[n - 1])
        } else {
            None
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Image => "Image",
            SortKey::Id => "Id",
            SortKey::Command => "Command",
            SortKey::Uptime => "Uptime",
            SortKey::Status => "Status",
            SortKey::Cpu => "%CPU",
            SortKey::Ram => "%RAM",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Forward,
    Reversed,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Forward => SortDirection::Reversed,
            SortDirection::Reversed => SortDirection::Forward,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortOrder {
    fn default() -> Self {
        Self {
            key: SortKey::Cpu,
            direction: SortDirection::Forward,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub refresh_interval_ms: u64,
    pub sort_key: SortKey,
    pub reverse_sort: bool,
    pub show_all_processes: bool,
    /// Name of the environment variable holding the daemon endpoint.
    pub host_env: String,
    /// Name of the environment variable holding the TLS cert directory.
    pub cert_path_env: String,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            refresh_interval_ms: 1000,
            sort_key: SortKey::Cpu,
            reverse_sort: false,
            show_all_processes: false,
            host_env: "DOCKER_HOST".to_string(),
            cert_path_env: "DOCKER_CERT_PATH".to_string(),
            log_file: None,
        }
    }
}

impl AppConfig {
    pub fn sort_order(&self) -> SortOrder {
        SortOrder {
            key: self.sort_key,
            direction: if self.reverse_sort {
                SortDirection::Reversed
            } else {
                SortDirection::Forward
            },
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Docker error: {0}")]
    Docker(#[from] bollard::errors::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Other error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
