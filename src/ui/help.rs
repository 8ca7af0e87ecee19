use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub const KEYBINDINGS: &[(&str, &str)] = &[
    ("<arrow up>", "scroll up"),
    ("<arrow down>", "scroll down"),
    ("<space>", "select/unselect container"),
    ("u", "unselect all containers"),
    ("q", "quit"),
    ("h", "prints this help"),
    ("a", "show/hide processes on selected containers"),
    ("A", "show/hide processes on all containers"),
    ("k", "kill selected containers"),
    ("s", "start selected containers"),
    ("S", "stop selected containers"),
    ("r", "remove selected containers"),
    ("i", "view information about current container"),
    ("p", "pause selected containers"),
    ("P", "unpause selected containers"),
    ("1", "sort by name"),
    ("2", "sort by image"),
    ("3", "sort by id"),
    ("4", "sort by command"),
    ("5", "sort by uptime"),
    ("6", "sort by status"),
    ("7", "sort by %CPU"),
    ("8", "sort by %RAM"),
    ("I", "revert current sort"),
];

/// A titled list of `label: value` pairs with a footer, shared by the help
/// and info pages.
pub fn render_page(
    f: &mut Frame<'_>,
    area: Rect,
    header: &str,
    body: &[(&str, &str)],
    footer: &str,
) {
    let mut lines = Vec::with_capacity(body.len() + 4);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        header.to_string(),
        Style::default().fg(Color::Black).bg(Color::Yellow),
    )));
    lines.push(Line::from(""));
    for (label, value) in body {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {: <20}", format!("{}:", label)),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::raw(value.to_string()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        footer.to_string(),
        Style::default().fg(Color::Cyan),
    )));

    f.render_widget(Paragraph::new(lines), area);
}

pub fn render_help(f: &mut Frame<'_>, area: Rect) {
    render_page(
        f,
        area,
        "Help of \"docktop\" command:",
        KEYBINDINGS,
        "Press 'h' to return.",
    );
}
