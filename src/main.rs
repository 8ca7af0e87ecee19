mod actions;
mod app;
mod config;
mod cursor;
mod docker;
mod events;
mod format;
mod logging;
mod ordering;
mod projection;
mod snapshot;
mod types;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::app::App;
use crate::docker::client::{DockerClient, Endpoint};
use crate::docker::runtime::ContainerRuntime;
use crate::events::handler::run_event_loop;
use crate::events::reader::spawn_input_reader;
use crate::snapshot::reconcile;
use crate::types::AppConfig;

const MIN_REFRESH_MS: u64 = 100;

#[derive(Parser, Debug)]
#[command(name = "docktop", version, about = "Live top-like view of Docker containers and their processes")]
struct Cli {
    /// Environment variable holding the docker host location
    #[arg(long, value_name = "ENV")]
    host: Option<String>,

    /// Environment variable holding the docker TLS certs directory
    #[arg(long, value_name = "ENV")]
    certs: Option<String>,

    /// Config file (defaults to the platform config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Refresh interval in milliseconds
    #[arg(long, value_name = "MS")]
    interval: Option<u64>,
}

impl Cli {
    fn apply(self, config: &mut AppConfig) {
        if let Some(host) = self.host {
            config.host_env = host;
        }
        if let Some(certs) = self.certs {
            config.cert_path_env = certs;
        }
        if let Some(path) = self.log_file {
            config.log_file = Some(path);
        }
        if let Some(ms) = self.interval {
            config.refresh_interval_ms = ms;
        }
    }
}

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }
    let backend = CrosstermBackend::new(stdout);
    match Terminal::new(backend) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
            Err(e.into())
        }
    }
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, Show)?;
    terminal.show_cursor()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = config::resolve_config_path(cli.config.as_deref())?;
    let mut config = config::load_config(&config_path)?;
    cli.apply(&mut config);
    logging::init(config.log_file.as_deref());
    if let Err(e) = config::ensure_config_file(&config_path) {
        warn!("{e:#}");
    }
    info!(?config, "starting docktop");

    let endpoint = Endpoint::from_env(&config.host_env, &config.cert_path_env);
    let client = DockerClient::connect(&endpoint).context("Failed to configure Docker client")?;
    client
        .ping()
        .await
        .context("Failed to reach the Docker daemon")?;
    let runtime: Arc<dyn ContainerRuntime> = Arc::new(client);

    let mut app = App::new(&config);
    let first = reconcile(runtime.as_ref(), &app.snapshot).await;
    app.replace_snapshot(first);

    let refresh = Duration::from_millis(config.refresh_interval_ms.max(MIN_REFRESH_MS));
    let mut terminal = setup_terminal().context("Failed to set up terminal")?;

    let res = match spawn_input_reader() {
        Ok(input) => run_event_loop(&mut terminal, &mut app, runtime, input, refresh).await,
        Err(e) => Err(e),
    };

    restore_terminal(&mut terminal).context("Failed to restore terminal")?;

    if let Err(e) = &res {
        error!("dashboard stopped: {}", e);
    }
    res.context("Dashboard stopped")?;
    info!("bye");
    Ok(())
}
