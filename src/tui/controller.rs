use crate::cards::Rank;
use crate::session::{BetPreset, Phase, TurnStage};
use crate::tui::app::{AppState, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key.code) {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
    Ok(())
}

/// Map a key press to an input action. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    if app.help_open() {
        if matches!(code, KeyCode::Esc | KeyCode::Char('?')) {
            let _ = app.handle_input(InputAction::ToggleHelp);
        }
        return false;
    }
    if app.history_open() {
        match code {
            KeyCode::Up => {
                let _ = app.handle_input(InputAction::HistoryUp);
            }
            KeyCode::Down => {
                let _ = app.handle_input(InputAction::HistoryDown);
            }
            KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H') => {
                let _ = app.handle_input(InputAction::ToggleHistory);
            }
            _ => {}
        }
        return false;
    }

    // Rank keys take priority while a card is expected, so Q/K/J/A enter ranks.
    if app.awaiting_rank() {
        if let KeyCode::Char(c) = code {
            if let Ok(rank) = Rank::try_from(c) {
                let _ = app.handle_input(InputAction::EnterRank(rank));
                return false;
            }
        }
    }

    match app.scene {
        Scene::Setup if app.editing_name() => {
            match code {
                KeyCode::Char(c) => {
                    let _ = app.handle_input(InputAction::MenuChar(c));
                }
                KeyCode::Backspace => {
                    let _ = app.handle_input(InputAction::MenuBackspace);
                }
                KeyCode::Up => {
                    let _ = app.handle_input(InputAction::MenuPrev);
                }
                KeyCode::Down => {
                    let _ = app.handle_input(InputAction::MenuNext);
                }
                KeyCode::Enter => {
                    let _ = app.handle_input(InputAction::MenuApply);
                }
                KeyCode::Esc => return true,
                _ => {}
            }
        }
        Scene::Setup => match code {
            KeyCode::Up => {
                let _ = app.handle_input(InputAction::MenuPrev);
            }
            KeyCode::Down => {
                let _ = app.handle_input(InputAction::MenuNext);
            }
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
                let _ = app.handle_input(InputAction::MenuInc);
            }
            KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Left => {
                let _ = app.handle_input(InputAction::MenuDec);
            }
            KeyCode::Enter => {
                let _ = app.handle_input(InputAction::MenuApply);
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
            _ => {}
        },
        _ => match code {
            KeyCode::Char('?') => {
                let _ = app.handle_input(InputAction::ToggleHelp);
            }
            KeyCode::Char('h') | KeyCode::Char('H') => {
                let _ = app.handle_input(InputAction::ToggleHistory);
            }
            KeyCode::Char('x') | KeyCode::Char('X') => {
                let _ = app.handle_input(InputAction::ExitToSetup);
            }
            KeyCode::Char('u') | KeyCode::Char('U') => {
                let _ = app.handle_input(InputAction::UndoDeal);
            }
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
                let _ = app.handle_input(InputAction::BetInc);
            }
            KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Left => {
                let _ = app.handle_input(InputAction::BetDec);
            }
            KeyCode::Char(c @ '1'..='7') => {
                let idx = (c as usize) - ('1' as usize);
                let _ = app.handle_input(InputAction::BetPreset(BetPreset::ALL[idx]));
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                let _ = app.handle_input(InputAction::BetSuggested);
            }
            KeyCode::Char('b') | KeyCode::Char('B') => {
                let _ = app.handle_input(InputAction::Bet);
            }
            KeyCode::Char('p') | KeyCode::Char('P') => {
                let _ = app.handle_input(InputAction::Pass);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char(' ') => {
                let _ = app.handle_input(InputAction::NextTurn);
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                if app.scene == Scene::NewRound {
                    let _ = app.handle_input(InputAction::RestartSession);
                }
            }
            KeyCode::Enter => {
                let _ = app.handle_input(enter_action(app));
            }
            _ => {}
        },
    }
    false
}

fn enter_action(app: &AppState) -> InputAction {
    match app.session.phase() {
        Phase::RoundOver => InputAction::ConfirmNewRound,
        Phase::Turn(t) if t.stage == TurnStage::Betting => InputAction::Bet,
        _ => InputAction::NextTurn,
    }
}
