use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};
use sysinfo::System;

use crate::app::App;
use crate::format::human_duration;
use crate::projection::{Row as ListRow, RowKind};
use crate::types::{SortDirection, SortKey, SortOrder};
use crate::ui::layout::{column_widths, get_list_layout};

pub fn render_container_list(f: &mut Frame<'_>, area: Rect, app: &App) {
    let (status_area, titles_area, rows_area) = get_list_layout(area);

    render_status_line(f, status_area, app);
    render_column_titles(f, titles_area, app.sort);

    let rows = app.rows();
    let visible = app.cursor.visible(rows.len(), rows_area.height as usize);
    let start = visible.start;
    let table_rows = rows[visible].iter().enumerate().map(|(i, row)| {
        let style = row_style(row, start + i == app.cursor.active);
        Row::new(row_cells(row)).style(style)
    });

    let table = Table::new(table_rows, column_widths()).column_spacing(1);
    f.render_widget(table, rows_area);
}

fn render_status_line(f: &mut Frame<'_>, area: Rect, app: &App) {
    let load = System::load_average();
    let arrow = match app.sort.direction {
        SortDirection::Forward => "▼",
        SortDirection::Reversed => "▲",
    };

    let line = Line::from(vec![
        Span::styled("up ", Style::default().dim()),
        Span::raw(human_duration(System::uptime() as i64)),
        Span::styled("  load ", Style::default().dim()),
        Span::raw(format!("{:.2} {:.2} {:.2}", load.one, load.five, load.fifteen)),
        Span::styled("  containers ", Style::default().dim()),
        Span::styled(app.snapshot.len().to_string(), Style::default().fg(Color::Cyan).bold()),
        Span::styled("  running ", Style::default().dim()),
        Span::styled(app.running_count().to_string(), Style::default().fg(Color::Green).bold()),
        Span::styled("  selected ", Style::default().dim()),
        Span::styled(
            app.snapshot.selected_ids().len().to_string(),
            Style::default().fg(Color::Yellow).bold(),
        ),
        Span::styled("  sort ", Style::default().dim()),
        Span::raw(format!("{} {}", app.sort.key.title(), arrow)),
        Span::styled("  h: help", Style::default().dim().italic()),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_column_titles(f: &mut Frame<'_>, area: Rect, sort: SortOrder) {
    let cells = SortKey::ALL.iter().map(|&key| {
        if key == sort.key {
            let arrow = match sort.direction {
                SortDirection::Forward => " ▼",
                SortDirection::Reversed => " ▲",
            };
            Cell::from(format!("{}{}", key.title(), arrow))
                .style(Style::default().fg(Color::Black).bg(Color::Magenta).bold())
        } else {
            Cell::from(key.title())
        }
    });

    let titles = Table::new([Row::new(cells)], column_widths())
        .column_spacing(1)
        .style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_widget(titles, area);
}

fn row_cells<'a>(row: &ListRow<'a>) -> Vec<Cell<'a>> {
    match row.kind {
        RowKind::Container => {
            let c = row.container;
            vec![
                Cell::from(c.name.as_str()),
                Cell::from(c.image.as_str()),
                Cell::from(c.id.as_str()),
                Cell::from(c.command.as_str()),
                Cell::from(c.uptime.as_str()),
                Cell::from(c.status.as_str()),
                Cell::from(c.cpu.as_str()),
                Cell::from(c.ram.as_str()),
            ]
        }
        RowKind::Process(p) => vec![
            Cell::from(""),
            Cell::from(""),
            Cell::from(format!("|- {}", p.pid)),
            Cell::from(p.command.as_str()),
            Cell::from(p.uptime.as_str()),
            Cell::from(p.status.as_str()),
            Cell::from(p.cpu.as_str()),
            Cell::from(p.ram.as_str()),
        ],
    }
}

fn row_style(row: &ListRow<'_>, is_active: bool) -> Style {
    if is_active {
        Style::default().add_modifier(Modifier::REVERSED)
    } else if row.is_selected() {
        Style::default().fg(Color::Black).bg(Color::Yellow)
    } else if row.is_running() {
        Style::default().fg(Color::Green)
    } else if row.is_process() {
        Style::default()
    } else {
        Style::default().fg(Color::Cyan)
    }
}
