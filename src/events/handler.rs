use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval_at, Instant};
use tracing::{debug, info};

use crate::actions::ActionDispatcher;
use crate::app::App;
use crate::docker::runtime::ContainerRuntime;
use crate::events::key_bindings::{handle_key, KeyOutcome};
use crate::events::reader::InputChannels;
use crate::snapshot::reconcile;
use crate::types::{AppError, Result};
use crate::ui::draw;
use crate::ui::layout::list_viewport_height;

/// Runs until `q` or a terminal error. Each iteration draws once, then
/// handles exactly one event: a key, a refresh tick or a resize.
pub async fn run_event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runtime: Arc<dyn ContainerRuntime>,
    input: InputChannels,
    refresh: Duration,
) -> Result<()> {
    let InputChannels {
        mut keys,
        mut resizes,
    } = input;
    let dispatcher = ActionDispatcher::new(runtime.clone());
    let mut ticker = interval_at(Instant::now() + refresh, refresh);

    loop {
        terminal.draw(|f| {
            app.set_viewport_height(list_viewport_height(f.area()));
            draw(f, app);
        })?;

        tokio::select! {
            key = keys.recv() => {
                let Some(key) = key else {
                    return Err(AppError::Other("terminal input closed".into()));
                };
                match handle_key(key, app) {
                    KeyOutcome::Quit => {
                        info!("quit requested");
                        return Ok(());
                    }
                    KeyOutcome::Dispatch(action, ids) => dispatcher.dispatch(action, &ids),
                    KeyOutcome::Continue => {}
                }
            }
            _ = ticker.tick() => {
                let next = reconcile(runtime.as_ref(), &app.snapshot).await;
                app.replace_snapshot(next);
            }
            size = resizes.recv() => {
                let Some((w, h)) = size else {
                    return Err(AppError::Other("terminal input closed".into()));
                };
                debug!(w, h, "terminal resized");
            }
        }
    }
}
