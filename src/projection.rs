use crate::ordering::compare;
use crate::snapshot::Snapshot;
use crate::types::{ContainerRecord, ProcessRecord, SortOrder};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RowKind<'a> {
    Container,
    Process(&'a ProcessRecord),
}

/// One displayable line. Borrowed from the snapshot, rebuilt every frame.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    pub kind: RowKind<'a>,
    /// The container this row belongs to (its own container for process rows).
    pub container: &'a ContainerRecord,
}

impl<'a> Row<'a> {
    pub fn is_container(&self) -> bool {
        matches!(self.kind, RowKind::Container)
    }

    pub fn is_process(&self) -> bool {
        !self.is_container()
    }

    /// Selection highlight applies to container rows only.
    pub fn is_selected(&self) -> bool {
        self.is_container() && self.container.selected
    }

    pub fn is_running(&self) -> bool {
        self.is_container() && self.container.is_running()
    }

    /// The container addressed by this row, if it is a container row.
    pub fn container_id(&self) -> Option<&'a str> {
        match self.kind {
            RowKind::Container => Some(self.container.id.as_str()),
            RowKind::Process(_) => None,
        }
    }
}

/// Flattens the snapshot into rows: containers in `order`, each followed by
/// its processes when `show_all_processes` is set or the container is
/// expanded.
pub fn project(snapshot: &Snapshot, order: SortOrder, show_all_processes: bool) -> Vec<Row<'_>> {
    let mut containers: Vec<&ContainerRecord> = snapshot.containers.iter().collect();
    containers.sort_by(|a, b| compare(a, b, order));

    let mut rows = Vec::with_capacity(containers.len());
    for container in containers {
        rows.push(Row {
            kind: RowKind::Container,
            container,
        });
        if show_all_processes || container.expanded {
            rows.extend(container.processes.iter().map(|p| Row {
                kind: RowKind::Process(p),
                container,
            }));
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SortDirection, SortKey};

    fn process(pid: &str) -> ProcessRecord {
        ProcessRecord {
            pid: pid.into(),
            ..Default::default()
        }
    }

    fn snapshot() -> Snapshot {
        Snapshot::new(vec![
            ContainerRecord {
                id: "b2".into(),
                name: "beta".into(),
                status: "Exited (0) 1 hour ago".into(),
                ..Default::default()
            },
            ContainerRecord {
                id: "a1".into(),
                name: "alpha".into(),
                status: "Up 2 hours".into(),
                processes: vec![process("1"), process("2")],
                ..Default::default()
            },
            ContainerRecord {
                id: "c3".into(),
                name: "gamma".into(),
                status: "Up 1 minute".into(),
                processes: vec![process("9")],
                expanded: true,
                selected: true,
                ..Default::default()
            },
        ])
    }

    fn by_name() -> SortOrder {
        SortOrder {
            key: SortKey::Name,
            direction: SortDirection::Forward,
        }
    }

    fn labels(rows: &[Row<'_>]) -> Vec<String> {
        rows.iter()
            .map(|r| match r.kind {
                RowKind::Container => r.container.id.clone(),
                RowKind::Process(p) => format!("{}/{}", r.container.id, p.pid),
            })
            .collect()
    }

    #[test]
    fn expanded_containers_show_their_processes() {
        let snap = snapshot();
        let rows = project(&snap, by_name(), false);
        assert_eq!(labels(&rows), ["a1", "b2", "c3", "c3/9"]);
    }

    #[test]
    fn show_all_lists_every_process() {
        let snap = snapshot();
        let rows = project(&snap, by_name(), true);
        assert_eq!(labels(&rows), ["a1", "a1/1", "a1/2", "b2", "c3", "c3/9"]);
    }

    #[test]
    fn row_count_is_containers_plus_shown_processes() {
        let snap = snapshot();
        let hidden = project(&snap, by_name(), false).len();
        let shown = project(&snap, by_name(), true).len();
        assert_eq!(hidden, 3 + 1);
        assert_eq!(shown, 3 + 3);
        assert!(shown >= hidden);

        let empty = Snapshot::default();
        assert!(project(&empty, by_name(), true).is_empty());
    }

    #[test]
    fn row_flags() {
        let snap = snapshot();
        let rows = project(&snap, by_name(), false);

        assert!(rows[0].is_container() && rows[0].is_running() && !rows[0].is_selected());
        assert!(!rows[1].is_running());
        assert!(rows[2].is_selected());
        assert!(rows[3].is_process());
        assert!(!rows[3].is_selected() && !rows[3].is_running());
        assert_eq!(rows[3].container_id(), None);
        assert_eq!(rows[2].container_id(), Some("c3"));
    }

    #[test]
    fn projection_follows_sort_direction() {
        let snap = snapshot();
        let order = SortOrder {
            direction: SortDirection::Reversed,
            ..by_name()
        };
        let rows = project(&snap, order, false);
        assert_eq!(labels(&rows), ["c3", "c3/9", "b2", "a1"]);
    }
}
