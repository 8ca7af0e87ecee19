use ratatui::{layout::Rect, Frame};

use crate::types::ContainerRecord;
use crate::ui::help::render_page;

pub fn info_fields(c: &ContainerRecord) -> [(&'static str, &str); 8] {
    [
        ("Name", c.name.as_str()),
        ("Image", c.image.as_str()),
        ("Id", c.id.as_str()),
        ("Command", c.command.as_str()),
        ("Uptime", c.uptime.as_str()),
        ("Status", c.status.as_str()),
        ("%CPU", c.cpu.as_str()),
        ("%RAM", c.ram.as_str()),
    ]
}

pub fn render_container_details(f: &mut Frame<'_>, area: Rect, container: &ContainerRecord) {
    render_page(
        f,
        area,
        "Information about container:",
        &info_fields(container),
        "Press 'i' to return.",
    );
}
