use super::app::{App, Row};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(0),    // Page content
            Constraint::Length(1), // Footer (keybindings)
        ])
        .split(f.area());

    draw_title_bar(f, app, chunks[0]);
    if app.expanded {
        draw_page(f, app, chunks[1]);
    } else {
        draw_hidden_hint(f, chunks[1]);
    }
    draw_footer(f, app, chunks[2]);

    if app.show_help {
        draw_help_popup(f);
    }
}

fn draw_title_bar(f: &mut Frame, app: &App, area: Rect) {
    let state = if app.expanded { "Hide: Tab" } else { "Docs: Tab" };
    let title = Line::from(vec![
        Span::styled(
            " Documentation Explorer ",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("[{}]", state), Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(title), area);
}

fn draw_hidden_hint(f: &mut Frame, area: Rect) {
    let hint = Paragraph::new("Docs hidden. Press Tab to open.")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(hint, area);
}

fn draw_page(f: &mut Frame, app: &mut App, area: Rect) {
    let items: Vec<ListItem> = app.rows.iter().map(row_item).collect();

    let list = List::new(items)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    f.render_stateful_widget(list, area, &mut app.list_state);
}

fn row_item(row: &Row) -> ListItem<'_> {
    match row {
        Row::Header(text) => ListItem::new(Line::from(Span::styled(
            text.clone(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ))),
        Row::Back(text) => ListItem::new(Line::from(Span::styled(
            format!("← {} (Backspace)", text),
            Style::default().fg(Color::Yellow),
        ))),
        Row::Link { label, .. } => ListItem::new(Line::from(Span::styled(
            format!("  {}", label),
            Style::default().fg(Color::Cyan),
        ))),
        Row::Text(text) => ListItem::new(Line::from(Span::styled(
            format!("  {}", text),
            Style::default().fg(Color::DarkGray),
        ))),
        Row::Blank => ListItem::new(""),
    }
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let hints = if app.expanded {
        "j/k: move | Enter: open | t: field type | Backspace: back | m: main | Tab: hide | ?: help | q: quit"
    } else {
        "Tab: show docs | ?: help | q: quit"
    };
    let footer = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
    f.render_widget(footer, area);
}

fn draw_help_popup(f: &mut Frame) {
    let area = centered_rect(50, 60, f.area());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from("Navigation"),
        Line::from("  ↑/↓, j/k     move between links"),
        Line::from("  Enter        follow link (type or field call)"),
        Line::from("  t            open the selected field's type"),
        Line::from("  Backspace/h  go back one page"),
        Line::from("  m            back to the main page"),
        Line::from(""),
        Line::from("Display"),
        Line::from("  Tab/d        show or hide the explorer"),
        Line::from("  ?            toggle this help"),
        Line::from("  q/Esc        quit"),
    ];

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .style(Style::default().fg(Color::White)),
    );
    f.render_widget(help, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
