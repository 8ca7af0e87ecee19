use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Status line plus column titles above the rows.
pub const HEADER_ROWS: u16 = 2;
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 5;

pub fn is_too_small(area: Rect) -> bool {
    area.width < MIN_WIDTH || area.height < MIN_HEIGHT
}

pub fn list_viewport_height(area: Rect) -> usize {
    area.height.saturating_sub(HEADER_ROWS) as usize
}

/// Splits the screen into (status line, column titles, rows).
pub fn get_list_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Eight equal columns, one per sort key.
pub fn column_widths() -> [Constraint; 8] {
    [Constraint::Ratio(1, 8); 8]
}
