use bollard::{Docker, API_DEFAULT_VERSION};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::types::{AppError, Result};

pub const DEFAULT_HOST: &str = "unix:///var/run/docker.sock";
const TIMEOUT_SECS: u64 = 120;

/// Where and how to reach the daemon, resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Unix(String),
    Tls { addr: String, cert_dir: PathBuf },
    Http(String),
}

impl Endpoint {
    /// `host` and `certs` are the raw values of the configured environment
    /// variables; an empty host falls back to the local socket.
    pub fn resolve(host: Option<&str>, certs: Option<&str>) -> Self {
        let host = host.map(str::trim).filter(|h| !h.is_empty()).unwrap_or(DEFAULT_HOST);
        if host.starts_with("unix") {
            return Endpoint::Unix(host.to_string());
        }
        match certs.map(str::trim).filter(|c| !c.is_empty()) {
            Some(dir) => Endpoint::Tls {
                addr: host.to_string(),
                cert_dir: PathBuf::from(dir),
            },
            None => Endpoint::Http(host.to_string()),
        }
    }

    pub fn from_env(host_var: &str, certs_var: &str) -> Self {
        let host = std::env::var(host_var).ok();
        let certs = std::env::var(certs_var).ok();
        Self::resolve(host.as_deref(), certs.as_deref())
    }
}

const TLS_FILES: [&str; 3] = ["key.pem", "cert.pem", "ca.pem"];

/// The key, cert and CA paths inside `cert_dir`. The CA bundle is required;
/// any missing file is named in the error.
fn tls_files(cert_dir: &Path) -> Result<[PathBuf; 3]> {
    let paths = TLS_FILES.map(|name| cert_dir.join(name));
    let missing: Vec<&str> = TLS_FILES
        .iter()
        .zip(&paths)
        .filter(|(_, p)| !p.is_file())
        .map(|(name, _)| *name)
        .collect();
    if !missing.is_empty() {
        return Err(AppError::Other(format!(
            "TLS files missing from {}: {}",
            cert_dir.display(),
            missing.join(", ")
        )));
    }
    Ok(paths)
}

#[derive(Clone)]
pub struct DockerClient {
    pub(crate) inner: Docker,
}

impl DockerClient {
    pub fn connect(endpoint: &Endpoint) -> Result<Self> {
        let inner = match endpoint {
            Endpoint::Unix(path) => Docker::connect_with_unix(path, TIMEOUT_SECS, API_DEFAULT_VERSION),
            Endpoint::Http(addr) => Docker::connect_with_http(addr, TIMEOUT_SECS, API_DEFAULT_VERSION),
            Endpoint::Tls { addr, cert_dir } => {
                let [key, cert, ca] = tls_files(cert_dir)?;
                Docker::connect_with_ssl(addr, &key, &cert, &ca, TIMEOUT_SECS, API_DEFAULT_VERSION)
            }
        }
        .map_err(AppError::Docker)?;
        info!(?endpoint, "docker client configured");
        Ok(Self { inner })
    }

    /// Fails fast when the daemon is unreachable.
    pub async fn ping(&self) -> Result<()> {
        self.inner.ping().await?;
        Ok(())
    }
}
