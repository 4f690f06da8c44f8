use crate::rules::{Action, Decision, Outcome};
use crate::session::{BetPreset, TurnStage, TurnState};
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::inner;
use super::widgets::{draw_header, draw_rank_grid, draw_status, render_card_widget};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // header
            Constraint::Length(5), // cards
            Constraint::Min(6),    // decision / result
            Constraint::Length(5), // rank grid
            Constraint::Length(4), // status
        ])
        .split(f.area());
    draw_header(f, chunks[0], app);

    let Some(turn) = app.session.turn().copied() else {
        return;
    };

    // Hole cards with the drawn card between them
    let card_area = chunks[1];
    let third = card_area.width / 3;
    let card_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(third), Constraint::Length(third), Constraint::Length(third)])
        .split(card_area);
    let drawn_color = turn.outcome.map(outcome_color);
    render_card_widget(f, card_chunks[0], Some(turn.hole.0), "Card 1", Some(Color::Cyan));
    render_card_widget(f, card_chunks[1], turn.drawn, "Drawn", drawn_color);
    render_card_widget(f, card_chunks[2], Some(turn.hole.1), "Card 2", Some(Color::Cyan));

    match turn.stage {
        TurnStage::Result => draw_result(f, chunks[2], app, &turn),
        _ => match app.session.decision() {
            Some(d) => draw_decision(f, chunks[2], &d, &turn, app.session.pot()),
            None => draw_bet_placed(f, chunks[2], &turn),
        },
    }

    let drawing = turn.stage == TurnStage::Drawing;
    let title = if drawing { "Enter drawn card" } else { "Deck" };
    draw_rank_grid(f, chunks[3], title, app.session.used(), &[turn.hole.0, turn.hole.1], drawing);

    let name = app.session.players().get(turn.player).map(|n| n.as_str()).unwrap_or("--");
    let left = match turn.stage {
        TurnStage::Betting if turn.is_mandatory_pass() => vec![
            Line::from(format!("{name} must pass.")),
            Line::from("P pass"),
        ],
        TurnStage::Betting => vec![
            Line::from(format!("{name} to act.")),
            Line::from("+/- bet • 1-7 quick bet • S suggested • B bet • P pass"),
        ],
        TurnStage::Drawing => vec![
            Line::from(format!("{name} bet ${}. Draw a card.", turn.bet)),
            Line::from("Type its rank"),
        ],
        _ => vec![Line::from(format!("{name}'s turn is over.")), Line::from("N next player")],
    };
    draw_status(f, chunks[4], app, left);
}

fn draw_decision(f: &mut Frame, area: Rect, d: &Decision, turn: &TurnState, pot: u64) {
    let action_style = match d.action {
        Action::Bet => Style::default().fg(Color::Green),
        Action::MustPass => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::Yellow),
    }
    .add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(vec![
            Span::raw("Recommendation: "),
            Span::styled(d.action.label(), action_style),
        ]),
        Line::from(d.reasoning.clone()),
    ];
    if d.action != Action::MustPass {
        lines.push(Line::from(format!(
            "Odds: {:.1}%   Suggested bet: ${}",
            d.probability * 100.0,
            d.suggested_bet
        )));
        lines.push(Line::from(Span::styled(
            format!("Your bet: ${}", turn.bet),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        let quick: Vec<String> = BetPreset::available(pot)
            .map(|p| {
                let key = BetPreset::ALL.iter().position(|&a| a == p).map_or(0, |i| i + 1);
                format!("[{key}] {}", p.label())
            })
            .collect();
        if !quick.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("Quick bets: {}", quick.join("  ")),
                Style::default().add_modifier(Modifier::DIM),
            )));
        }
    }
    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Decision").borders(Borders::ALL));
    f.render_widget(para, area);
}

fn draw_bet_placed(f: &mut Frame, area: Rect, turn: &TurnState) {
    let lines = vec![
        Line::from(format!("Bet placed: ${}", turn.bet)),
        Line::from("Between wins, outside loses, a match posts double."),
    ];
    let para = Paragraph::new(lines).block(Block::default().title("Drawing").borders(Borders::ALL));
    f.render_widget(para, area);
}

fn draw_result(f: &mut Frame, area: Rect, app: &AppState, turn: &TurnState) {
    let Some(outcome) = turn.outcome else {
        return;
    };
    let detail = match outcome {
        Outcome::Win => format!("Won ${} from the pot", turn.bet),
        Outcome::Post => format!("Paid ${} to the pot (post)", turn.bet.saturating_mul(2)),
        Outcome::Loss => format!("Lost ${} to the pot", turn.bet),
        _ => String::from("Passed"),
    };
    let block = Block::default()
        .title("Result")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(outcome_color(outcome)));
    let lines = vec![
        Line::from(Span::styled(
            outcome.label(),
            Style::default().fg(outcome_color(outcome)).add_modifier(Modifier::BOLD),
        )),
        Line::from(detail),
        Line::from(format!("Pot now: ${}", app.session.pot())),
    ];
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner(area));
}

fn outcome_color(outcome: Outcome) -> Color {
    match outcome {
        Outcome::Win => Color::Green,
        Outcome::Post => Color::Yellow,
        _ => Color::Red,
    }
}
