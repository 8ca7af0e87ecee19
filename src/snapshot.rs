use chrono::{DateTime, Utc};
use futures::future::join_all;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::docker::runtime::{ContainerInfo, ContainerRuntime, ProcessRow};
use crate::format::{format_percent, parse_percent, uptime_since};
use crate::types::{ContainerRecord, ProcessRecord};

/// UI-only state that survives a refresh, keyed by container id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiFlags {
    pub selected: bool,
    pub expanded: bool,
}

/// One refresh cycle's containers and their processes.
///
/// `retained` holds the flags of the last good cycle while the container
/// query is failing.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub containers: Vec<ContainerRecord>,
    retained: HashMap<String, UiFlags>,
}

impl Snapshot {
    pub fn new(containers: Vec<ContainerRecord>) -> Self {
        Self {
            containers,
            retained: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ContainerRecord> {
        self.containers.iter().find(|c| c.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut ContainerRecord> {
        self.containers.iter_mut().find(|c| c.id == id)
    }

    pub fn selected_ids(&self) -> Vec<String> {
        self.containers
            .iter()
            .filter(|c| c.selected)
            .map(|c| c.id.clone())
            .collect()
    }

    /// Clears live selection and any selection held over from a failed
    /// cycle.
    pub fn clear_selection(&mut self) {
        for c in &mut self.containers {
            c.selected = false;
        }
        for flags in self.retained.values_mut() {
            flags.selected = false;
        }
    }

    /// Flags by id: live containers first, then anything retained from a
    /// failed cycle.
    fn flags(&self) -> HashMap<String, UiFlags> {
        let mut flags = self.retained.clone();
        for c in &self.containers {
            flags.insert(
                c.id.clone(),
                UiFlags {
                    selected: c.selected,
                    expanded: c.expanded,
                },
            );
        }
        flags
    }
}

fn to_process(row: ProcessRow) -> ProcessRecord {
    ProcessRecord {
        pid: row.pid,
        command: row.command,
        uptime: row.uptime,
        status: String::new(),
        cpu: row.cpu,
        ram: row.mem,
    }
}

/// Unparsable values contribute nothing. Starts from +0.0 so an empty
/// list formats as "0.0".
fn sum_usage<'a>(values: impl Iterator<Item = &'a str>) -> f64 {
    values.filter_map(parse_percent).fold(0.0, |acc, v| acc + v)
}

fn build_record(
    info: ContainerInfo,
    processes: Vec<ProcessRecord>,
    flags: UiFlags,
    now: DateTime<Utc>,
) -> ContainerRecord {
    let total_cpu = sum_usage(processes.iter().map(|p| p.cpu.as_str()));
    let total_ram = sum_usage(processes.iter().map(|p| p.ram.as_str()));

    ContainerRecord {
        uptime: uptime_since(info.created, now),
        id: info.id,
        name: info.name.trim_start_matches('/').to_string(),
        image: info.image,
        command: info.command,
        status: info.status,
        cpu: format_percent(total_cpu),
        ram: format_percent(total_ram),
        processes,
        selected: flags.selected,
        expanded: flags.expanded,
    }
}

/// Queries the runtime and builds the next snapshot, carrying `selected`
/// and `expanded` forward from `previous` by container id. Never fails: a
/// listing error yields an empty snapshot, a `top` error an empty process
/// list for that container.
pub async fn reconcile<R>(runtime: &R, previous: &Snapshot) -> Snapshot
where
    R: ContainerRuntime + ?Sized,
{
    let flags = previous.flags();

    let infos = match runtime.list_containers(true).await {
        Ok(infos) => infos,
        Err(e) => {
            warn!("listing containers failed, showing nothing this cycle: {}", e);
            return Snapshot {
                containers: Vec::new(),
                retained: flags,
            };
        }
    };

    let process_lists = join_all(infos.iter().map(|info| async move {
        if !info.status.starts_with("Up") {
            return Vec::new();
        }
        match runtime.list_processes(&info.id).await {
            Ok(rows) => rows.into_iter().map(to_process).collect(),
            Err(e) => {
                debug!(container = %info.id, "listing processes failed: {}", e);
                Vec::new()
            }
        }
    }))
    .await;

    let now = Utc::now();
    let containers = infos
        .into_iter()
        .zip(process_lists)
        .map(|(info, processes)| {
            let carried = flags.get(&info.id).copied().unwrap_or_default();
            build_record(info, processes, carried, now)
        })
        .collect();

    Snapshot::new(containers)
}
