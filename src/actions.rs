use std::sync::Arc;
use tracing::{debug, info};

use crate::cursor::CursorState;
use crate::docker::runtime::{ContainerRuntime, LifecycleAction};
use crate::projection::Row;

/// Containers an action or the expand toggle applies to: every selected
/// container in display order, or the container under the cursor when
/// nothing is selected. A process row under the cursor yields nothing.
pub fn resolve_operands(rows: &[Row<'_>], cursor: CursorState) -> Vec<String> {
    let selected: Vec<String> = rows
        .iter()
        .filter(|r| r.is_selected())
        .map(|r| r.container.id.clone())
        .collect();
    if !selected.is_empty() {
        return selected;
    }

    rows.get(cursor.active)
        .and_then(|r| r.container_id())
        .map(|id| vec![id.to_string()])
        .unwrap_or_default()
}

/// Launches lifecycle commands without waiting on them. Results are never
/// reported back; the next refresh shows whatever the runtime did.
#[derive(Clone)]
pub struct ActionDispatcher {
    runtime: Arc<dyn ContainerRuntime>,
}

impl ActionDispatcher {
    pub fn new(runtime: Arc<dyn ContainerRuntime>) -> Self {
        Self { runtime }
    }

    /// Spawns one task per container. Must be called within a tokio runtime.
    pub fn dispatch(&self, action: LifecycleAction, container_ids: &[String]) {
        for id in container_ids {
            info!(action = action.verb(), container = %id, "dispatching");
            let runtime = self.runtime.clone();
            let id = id.clone();
            tokio::spawn(async move {
                if let Err(e) = runtime.apply(action, &id).await {
                    debug!(action = action.verb(), container = %id, "action failed: {}", e);
                }
            });
        }
    }
}
