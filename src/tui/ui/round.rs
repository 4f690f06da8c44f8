use crate::session::Phase;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};
use super::widgets::{draw_header, draw_rank_grid, draw_status, render_card_widget};

pub(super) fn draw_dealing(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // header
            Constraint::Min(5),    // dealt hands
            Constraint::Length(5), // rank grid
            Constraint::Length(4), // status
        ])
        .split(f.area());
    draw_header(f, chunks[0], app);

    let s = &app.session;
    let (dealing_to, first) = match s.phase() {
        Phase::Dealing { player, first } => (player, first),
        _ => (0, None),
    };

    let hands_area = chunks[1];
    f.render_widget(Block::default().title("Dealing").borders(Borders::ALL), hands_area);
    let hands_inner = inner(hands_area);
    let n = s.num_players();
    let col_width = hands_inner.width / n.max(1) as u16;
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..n).map(|_| Constraint::Length(col_width)).collect::<Vec<_>>())
        .split(hands_inner);
    for (i, name) in s.players().iter().enumerate() {
        let (a, b) = match s.dealt_hand(i) {
            Some((a, b)) => (Some(a), Some(b)),
            None if i == dealing_to => (first, None),
            None => (None, None),
        };
        let color = if i == dealing_to { Some(Color::Yellow) } else { None };
        render_hand(f, cols[i], name, a, b, color);
    }

    draw_rank_grid(f, chunks[2], "Enter dealt card", s.used(), &[], true);

    let name = s.players().get(dealing_to).map(|n| n.as_str()).unwrap_or("--");
    let which = if first.is_some() { "second" } else { "first" };
    let left = vec![
        Line::from(format!("Deal the {which} card to {name}.")),
        Line::from("Type its rank • U undo"),
    ];
    draw_status(f, chunks[3], app, left);
}

fn render_hand(
    f: &mut Frame,
    area: Rect,
    name: &str,
    a: Option<crate::cards::Rank>,
    b: Option<crate::cards::Rank>,
    border: Option<Color>,
) {
    let mut block = Block::default().title(name.to_string()).borders(Borders::ALL);
    if let Some(c) = border {
        block = block.border_style(Style::default().fg(c));
    }
    f.render_widget(block, area);
    let area = inner(area);
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    render_card_widget(f, halves[0], a, "", None);
    render_card_widget(f, halves[1], b, "", None);
}

pub(super) fn draw_new_round(f: &mut Frame, app: &AppState) {
    let s = &app.session;
    let area = centered_rect(60, 50, f.area());
    let block = Block::default().title(format!("Round {} complete", s.round())).borders(Borders::ALL);
    let next_pot = s.pot().saturating_add(s.config().round_ante());
    let mut lines = vec![
        Line::from(Span::styled(
            format!("Pot: ${}", s.pot()),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "{} players × ${} ante → pot becomes ${next_pot}",
            s.num_players(),
            s.ante()
        )),
        Line::from(format!(
            "{} cards seen, {} left in the deck.",
            s.used().len(),
            s.used().remaining()
        )),
    ];
    if s.used().remaining() < s.num_players() * 2 {
        lines.push(Line::from(Span::styled(
            "Not enough cards left to deal everyone. Press R to restart.",
            Style::default().fg(Color::Red),
        )));
    }
    if let Some(err) = app.action_error() {
        lines.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter] Next round  [R] Restart session  [X] Setup",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true }).alignment(Alignment::Center);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}
