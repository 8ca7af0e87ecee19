use async_trait::async_trait;
use bollard::container::{
    KillContainerOptions, ListContainersOptions, RemoveContainerOptions, StartContainerOptions,
    StopContainerOptions, TopOptions,
};
use bollard::models::ContainerSummary;

use crate::docker::client::DockerClient;
use crate::docker::runtime::{ContainerInfo, ContainerRuntime, LifecycleAction, ProcessRow};
use crate::types::Result;

const PS_ARGS: &str = "-o pid,etime,%cpu,%mem,cmd";

fn to_info(c: ContainerSummary) -> ContainerInfo {
    ContainerInfo {
        id: c.id.unwrap_or_default(),
        name: c
            .names
            .as_ref()
            .and_then(|n| n.first())
            .map(|n| n.trim_start_matches('/').to_string())
            .unwrap_or_default(),
        image: c.image.unwrap_or_default(),
        command: c.command.unwrap_or_default(),
        status: c.status.unwrap_or_default(),
        created: c.created.unwrap_or(0),
    }
}

/// Turns the raw `top` table into process rows. Short lines are dropped;
/// anything past the fifth column belongs to the command.
pub fn parse_top(processes: Vec<Vec<String>>) -> Vec<ProcessRow> {
    processes
        .into_iter()
        .filter(|p| p.len() >= 5)
        .map(|mut p| {
            let command = p.split_off(4).join(" ");
            let mut cols = p.into_iter();
            ProcessRow {
                pid: cols.next().unwrap_or_default(),
                uptime: cols.next().unwrap_or_default(),
                cpu: cols.next().unwrap_or_default(),
                mem: cols.next().unwrap_or_default(),
                command,
            }
        })
        .collect()
}

#[async_trait]
impl ContainerRuntime for DockerClient {
    async fn list_containers(&self, include_stopped: bool) -> Result<Vec<ContainerInfo>> {
        let options = ListContainersOptions::<String> {
            all: include_stopped,
            ..Default::default()
        };

        let containers = self.inner.list_containers(Some(options)).await?;
        Ok(containers.into_iter().map(to_info).collect())
    }

    async fn list_processes(&self, container_id: &str) -> Result<Vec<ProcessRow>> {
        let top = self
            .inner
            .top_processes(container_id, Some(TopOptions { ps_args: PS_ARGS }))
            .await?;
        Ok(parse_top(top.processes.unwrap_or_default()))
    }

    async fn apply(&self, action: LifecycleAction, id: &str) -> Result<()> {
        match action {
            LifecycleAction::Start => {
                self.inner
                    .start_container(id, None::<StartContainerOptions<String>>)
                    .await?
            }
            LifecycleAction::Stop => {
                self.inner
                    .stop_container(id, None::<StopContainerOptions>)
                    .await?
            }
            LifecycleAction::Kill => {
                self.inner
                    .kill_container(id, None::<KillContainerOptions<String>>)
                    .await?
            }
            LifecycleAction::Pause => self.inner.pause_container(id).await?,
            LifecycleAction::Unpause => self.inner.unpause_container(id).await?,
            LifecycleAction::Remove => {
                self.inner
                    .remove_container(id, None::<RemoveContainerOptions>)
                    .await?
            }
        }
        Ok(())
    }
}
