/// Active row and the first visible row of the list viewport.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CursorState {
    pub active: usize,
    pub scroll_offset: usize,
}

impl CursorState {
    pub fn new(active: usize, scroll_offset: usize) -> Self {
        Self {
            active,
            scroll_offset,
        }
    }

    /// Brings the cursor back inside `[0, row_count)` and the viewport back
    /// around the cursor. Idempotent.
    pub fn clamp(self, row_count: usize, viewport_height: usize) -> Self {
        let active = if row_count == 0 {
            0
        } else {
            self.active.min(row_count - 1)
        };

        let mut scroll_offset = self.scroll_offset;
        if active >= scroll_offset + viewport_height {
            scroll_offset = active + 1 - viewport_height;
        }
        if active < scroll_offset {
            scroll_offset = active;
        }

        Self {
            active,
            scroll_offset,
        }
    }

    pub fn move_up(self, row_count: usize, viewport_height: usize) -> Self {
        Self {
            active: self.active.saturating_sub(1),
            ..self
        }
        .clamp(row_count, viewport_height)
    }

    pub fn move_down(self, row_count: usize, viewport_height: usize) -> Self {
        Self {
            active: self.active.saturating_add(1),
            ..self
        }
        .clamp(row_count, viewport_height)
    }

    /// Range of row indices currently on screen.
    pub fn visible(&self, row_count: usize, viewport_height: usize) -> std::ops::Range<usize> {
        let start = self.scroll_offset.min(row_count);
        let end = (self.scroll_offset + viewport_height).min(row_count);
        start..end
    }
}
