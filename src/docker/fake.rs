//! In-memory runtime for tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::sync::Notify;

use crate::docker::runtime::{ContainerInfo, ContainerRuntime, LifecycleAction, ProcessRow};
use crate::types::{AppError, Result};

#[derive(Default)]
pub struct FakeRuntime {
    pub containers: Mutex<Vec<ContainerInfo>>,
    pub processes: Mutex<HashMap<String, Vec<ProcessRow>>>,
    pub fail_list: Mutex<bool>,
    pub fail_top: Mutex<bool>,
    pub applied: Mutex<Vec<(LifecycleAction, String)>>,
    pub applied_notify: Notify,
}

impl FakeRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container(self, id: &str, status: &str) -> Self {
        self.containers.lock().unwrap().push(ContainerInfo {
            id: id.to_string(),
            name: format!("/{}", id),
            image: "busybox".to_string(),
            command: "sh".to_string(),
            status: status.to_string(),
            created: 0,
        });
        self
    }

    pub fn with_processes(self, id: &str, rows: &[(&str, &str, &str)]) -> Self {
        let rows = rows
            .iter()
            .map(|(pid, cpu, mem)| ProcessRow {
                pid: pid.to_string(),
                uptime: "00:10".to_string(),
                cpu: cpu.to_string(),
                mem: mem.to_string(),
                command: "sh".to_string(),
            })
            .collect();
        self.processes.lock().unwrap().insert(id.to_string(), rows);
        self
    }

    pub fn remove(&self, id: &str) {
        self.containers.lock().unwrap().retain(|c| c.id != id);
    }

    pub fn set_fail_list(&self, fail: bool) {
        *self.fail_list.lock().unwrap() = fail;
    }

    pub fn applied(&self) -> Vec<(LifecycleAction, String)> {
        self.applied.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContainerRuntime for FakeRuntime {
    async fn list_containers(&self, include_stopped: bool) -> Result<Vec<ContainerInfo>> {
        if *self.fail_list.lock().unwrap() {
            return Err(AppError::Other("daemon unavailable".into()));
        }
        let all = self.containers.lock().unwrap().clone();
        Ok(all
            .into_iter()
            .filter(|c| include_stopped || c.status.starts_with("Up"))
            .collect())
    }

    async fn list_processes(&self, container_id: &str) -> Result<Vec<ProcessRow>> {
        if *self.fail_top.lock().unwrap() {
            return Err(AppError::Other("top failed".into()));
        }
        Ok(self
            .processes
            .lock()
            .unwrap()
            .get(container_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn apply(&self, action: LifecycleAction, container_id: &str) -> Result<()> {
        self.applied
            .lock()
            .unwrap()
            .push((action, container_id.to_string()));
        self.applied_notify.notify_one();
        if container_id == "broken" {
            return Err(AppError::Other("no such container".into()));
        }
        Ok(())
    }
}
