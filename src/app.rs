use crate::actions::resolve_operands;
use crate::cursor::CursorState;
use crate::projection::{project, Row};
use crate::snapshot::Snapshot;
use crate::types::{AppConfig, ContainerRecord, SortKey, SortOrder};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    List,
    Help,
    Info,
    /// Defined for a future confirmation prompt; nothing transitions here.
    #[allow(dead_code)]
    Confirm,
}

/// Everything the event loop owns and mutates. Nothing else touches it.
pub struct App {
    pub snapshot: Snapshot,
    pub cursor: CursorState,
    pub mode: ViewMode,
    pub sort: SortOrder,
    pub show_all_processes: bool,
    /// Point-in-time copy shown on the info page; refreshes don't touch it.
    pub info: Option<ContainerRecord>,
    pub viewport_height: usize,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            snapshot: Snapshot::default(),
            cursor: CursorState::new(0, 0),
            mode: ViewMode::List,
            sort: config.sort_order(),
            show_all_processes: config.show_all_processes,
            info: None,
            viewport_height: 0,
        }
    }

    pub fn rows(&self) -> Vec<Row<'_>> {
        project(&self.snapshot, self.sort, self.show_all_processes)
    }

    pub fn row_count(&self) -> usize {
        self.rows().len()
    }

    pub fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.clamp(self.row_count(), self.viewport_height);
    }

    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height;
        self.clamp_cursor();
    }

    /// Swaps in a freshly reconciled snapshot. Mode and cursor index are kept;
    /// the cursor is only re-clamped, so it may now sit on another container.
    pub fn replace_snapshot(&mut self, snapshot: Snapshot) {
        self.snapshot = snapshot;
        self.clamp_cursor();
    }

    pub fn running_count(&self) -> usize {
        self.snapshot.containers.iter().filter(|c| c.is_running()).count()
    }

    fn container_at_cursor(&self) -> Option<String> {
        self.rows()
            .get(self.cursor.active)
            .and_then(|r| r.container_id())
            .map(str::to_string)
    }

    pub fn operands(&self) -> Vec<String> {
        resolve_operands(&self.rows(), self.cursor)
    }

    // --- Navigation ---

    pub fn next(&mut self) {
        self.cursor = self.cursor.move_down(self.row_count(), self.viewport_height);
    }

    pub fn previous(&mut self) {
        self.cursor = self.cursor.move_up(self.row_count(), self.viewport_height);
    }

    /// Marks (or unmarks) the container under the cursor and moves to the
    /// next row, as one step.
    pub fn toggle_select_and_advance(&mut self) {
        if let Some(id) = self.container_at_cursor() {
            if let Some(c) = self.snapshot.get_mut(&id) {
                c.selected = !c.selected;
            }
        }
        self.next();
    }

    pub fn clear_selection(&mut self) {
        self.snapshot.clear_selection();
    }

    pub fn toggle_expand(&mut self) {
        for id in self.operands() {
            if let Some(c) = self.snapshot.get_mut(&id) {
                c.expanded = !c.expanded;
            }
        }
        self.clamp_cursor();
    }

    pub fn toggle_show_all_processes(&mut self) {
        self.show_all_processes = !self.show_all_processes;
        self.clamp_cursor();
    }

    // --- Sorting ---

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort.key = key;
    }

    pub fn toggle_reverse(&mut self) {
        self.sort.direction = self.sort.direction.toggled();
    }

    // --- Pages ---

    pub fn open_help(&mut self) {
        self.mode = ViewMode::Help;
    }

    /// Opens the info page for the container under the cursor. Does nothing
    /// on a process row or an empty list.
    pub fn open_info(&mut self) {
        let record = self
            .container_at_cursor()
            .and_then(|id| self.snapshot.get(&id).cloned());
        if let Some(record) = record {
            self.info = Some(record);
            self.mode = ViewMode::Info;
        }
    }

    pub fn back_to_list(&mut self) {
        self.mode = ViewMode::List;
    }
}
