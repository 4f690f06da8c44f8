use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

pub(super) fn draw_setup(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let area = centered_rect(80, 80, size);
    let block = Block::default().title("in-between").borders(Borders::ALL);
    f.render_widget(Clear, area);
    f.render_widget(block.clone(), area);
    let inner_all = inner(area);

    // Logo (render left-aligned rows to preserve spacing)
    let logo = r#"
 ___        ____       _
|_ _|_ __  | __ )  ___| |___      _____  ___ _ __
 | || '_ \ |  _ \ / _ \ __\ \ /\ / / _ \/ _ \ '_ \
 | || | | || |_) |  __/ |_ \ V  V /  __/  __/ | | |
|___|_| |_||____/ \___|\__| \_/\_/ \___|\___|_| |_|
                  ♥  ♠  ♦  ♣
                                                   "#;

    let logo_lines: Vec<Line> = logo
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Cyan))))
        .collect();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(logo_lines.len() as u16 + 1), Constraint::Min(3)])
        .split(inner_all);

    let logo_para =
        Paragraph::new(logo_lines).wrap(Wrap { trim: false }).alignment(Alignment::Center);
    f.render_widget(logo_para, rows[0]);

    let config_items = app.menu_items_display();
    let hints = if app.editing_name() {
        [String::from("Type a name  [Backspace] Delete  [↑/↓] Move  [Enter] Start  [Esc] Quit")]
    } else {
        [String::from("[Enter] Start  [Q] Quit  [↑/↓] Move  [+/-] Adjust")]
    };
    let mut cfg_lines: Vec<Line> = Vec::new();
    cfg_lines.push(Line::from(Span::styled(
        "New session:",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for (i, it) in config_items.iter().enumerate() {
        let style = if i == app.menu_index {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let text = if i == app.menu_index && app.editing_name() {
            format!("{it}_")
        } else {
            it.clone()
        };
        cfg_lines.push(Line::from(Span::styled(text, style)));
    }
    cfg_lines.push(Line::from(""));
    cfg_lines.push(Line::from(format!(
        "Each player pays ${} per round. Starting pot: ${}",
        app.cfg_ante,
        app.cfg_starting_pot()
    )));
    if let Some(err) = app.action_error() {
        cfg_lines.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }
    cfg_lines.push(Line::from(""));
    for hint in hints {
        cfg_lines
            .push(Line::from(Span::styled(hint, Style::default().add_modifier(Modifier::DIM))));
    }
    let cfg_para = Paragraph::new(cfg_lines).wrap(Wrap { trim: true }).alignment(Alignment::Center);
    f.render_widget(cfg_para, rows[1]);
}
