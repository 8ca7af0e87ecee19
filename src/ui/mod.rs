pub mod container_details;
pub mod container_list;
pub mod help;
pub mod layout;

use ratatui::{
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, ViewMode};
use crate::ui::container_details::render_container_details;
use crate::ui::container_list::render_container_list;
use crate::ui::help::render_help;
use crate::ui::layout::is_too_small;

pub fn draw(f: &mut Frame<'_>, app: &App) {
    let area = f.area();
    if is_too_small(area) {
        let msg = Paragraph::new("terminal too small").style(Style::default().fg(Color::Red));
        f.render_widget(msg, area);
        return;
    }

    match app.mode {
        ViewMode::List => render_container_list(f, area, app),
        ViewMode::Help => render_help(f, area),
        ViewMode::Info => {
            if let Some(info) = &app.info {
                render_container_details(f, area, info);
            }
        }
        ViewMode::Confirm => {}
    }
}
