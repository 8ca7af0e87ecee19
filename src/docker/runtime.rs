use async_trait::async_trait;

use crate::types::Result;

/// A container as listed by the runtime, before reconciliation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContainerInfo {
    pub id: String,
    pub name: String,
    pub image: String,
    pub command: String,
    pub status: String,
    pub created: i64,
}

/// One `ps` line: `(pid, uptime, %cpu, %mem, command)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessRow {
    pub pid: String,
    pub uptime: String,
    pub cpu: String,
    pub mem: String,
    pub command: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleAction {
    Start,
    Stop,
    Kill,
    Pause,
    Unpause,
    Remove,
}

impl LifecycleAction {
    pub fn verb(self) -> &'static str {
        match self {
            LifecycleAction::Start => "start",
            LifecycleAction::Stop => "stop",
            LifecycleAction::Kill => "kill",
            LifecycleAction::Pause => "pause",
            LifecycleAction::Unpause => "unpause",
            LifecycleAction::Remove => "remove",
        }
    }
}

/// Query and command surface of the container runtime.
#[async_trait]
pub trait ContainerRuntime: Send + Sync {
    async fn list_containers(&self, include_stopped: bool) -> Result<Vec<ContainerInfo>>;

    async fn list_processes(&self, container_id: &str) -> Result<Vec<ProcessRow>>;

    async fn apply(&self, action: LifecycleAction, container_id: &str) -> Result<()>;
}
