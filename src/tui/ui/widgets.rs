use crate::cards::Rank;
use crate::deck::UsedRanks;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

/// Pot, round and seen-card counts across the top of every in-game screen.
pub(super) fn draw_header(f: &mut Frame, area: Rect, app: &AppState) {
    let s = &app.session;
    let current = s
        .current_player()
        .and_then(|i| s.players().get(i))
        .map(|n| n.as_str())
        .unwrap_or("--");
    let lines = vec![
        Line::from(vec![
            Span::raw("Pot: "),
            Span::styled(format!("${}", s.pot()), Style::default().fg(Color::Yellow).bold()),
            Span::raw(format!("   Round {}   Ante ${}", s.round(), s.ante())),
        ]),
        Line::from(format!(
            "Player: {current}   Seen {} / 52   Left {}",
            s.used().len(),
            s.used().remaining()
        )),
    ];
    let header = Paragraph::new(lines)
        .block(Block::default().title("in-between").borders(Borders::ALL));
    f.render_widget(header, area);
}

/// Two-line status bar: contextual info on the left, global keys on the right.
pub(super) fn draw_status(f: &mut Frame, area: Rect, app: &AppState, mut left: Vec<Line>) {
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), area);
    let status_inner = inner(area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(status_inner);
    if let Some(err) = app.action_error() {
        left.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }
    let right = vec![Line::from(""), Line::from("? help • H history • X setup")];
    let left_para = Paragraph::new(left).wrap(Wrap { trim: true });
    let right_para = Paragraph::new(right).wrap(Wrap { trim: true }).alignment(Alignment::Right);
    f.render_widget(left_para, cols[0]);
    f.render_widget(right_para, cols[1]);
}

/// One cell per rank with the copies still unseen; exhausted ranks are dimmed.
pub(super) fn draw_rank_grid(
    f: &mut Frame,
    area: Rect,
    title: &str,
    used: &UsedRanks,
    marked: &[Rank],
    active: bool,
) {
    let mut block = Block::default().title(title.to_string()).borders(Borders::ALL);
    if active {
        block = block.border_style(Style::default().fg(Color::Yellow));
    }
    let grid_inner = inner(area);
    f.render_widget(block, area);
    let cell_width = grid_inner.width / Rank::ALL.len() as u16;
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(Rank::ALL.iter().map(|_| Constraint::Length(cell_width)).collect::<Vec<_>>())
        .split(grid_inner);
    for (i, &rank) in Rank::ALL.iter().enumerate() {
        let left = used.copies_left(rank);
        let mut style = if left == 0 {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        } else {
            Style::default()
        };
        if marked.contains(&rank) {
            style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
        }
        let lines = vec![
            Line::from(Span::styled(rank.label(), style.add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(format!("[{}]", rank.key()), style)),
            Line::from(Span::styled(format!("×{left}"), style)),
        ];
        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), cells[i]);
    }
}

pub(super) fn render_card_widget(
    f: &mut Frame,
    area: Rect,
    rank: Option<Rank>,
    title: &str,
    border: Option<Color>,
) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .title_alignment(Alignment::Center);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let inner = inner(area);
    f.render_widget(block, area);
    let content = match rank {
        Some(r) => Line::from(Span::styled(r.label(), Style::default().bold())),
        None => Line::from("[  ]"),
    };
    let para = Paragraph::new(content).alignment(Alignment::Center);
    f.render_widget(para, inner);
}

pub(super) fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Entering cards:", bold)),
        Line::from("- A 2-9 0 J Q K: rank of the card just dealt or drawn (0 = 10)"),
        Line::from("- U: take back the last dealt card"),
        Line::from(""),
        Line::from(Span::styled("Betting:", bold)),
        Line::from("- + / -: adjust bet"),
        Line::from("- 1-7: quick bet $2, $5, $10, 1/4, 1/2, 3/4 pot, whole pot"),
        Line::from("- S: use suggested bet"),
        Line::from("- B: place bet, then enter the drawn card"),
        Line::from("- P: pass (adds 1 to the pot)"),
        Line::from("- N / Enter: next player after a result"),
        Line::from(""),
        Line::from(Span::styled("Rounds:", bold)),
        Line::from("- Enter: collect antes and deal the next round"),
        Line::from("- R: restart the session (clears seen cards)"),
        Line::from("- X: back to setup"),
        Line::from("- H: history"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

pub(super) fn draw_history(f: &mut Frame, app: &AppState) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("History").borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::new();
    let entries =
        app.session.history_recent_offset(AppState::HISTORY_PAGE_SIZE, app.history_offset());
    if entries.is_empty() {
        lines.push(Line::from("No history yet."));
    } else {
        for entry in entries {
            let who = entry
                .player
                .and_then(|i| app.session.players().get(i))
                .map(|n| n.as_str())
                .unwrap_or("Table");
            lines.push(Line::from(format!("R{} {who}: {}", entry.round, entry.event)));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down scroll • Close: H or Esc",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}
