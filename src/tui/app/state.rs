use crate::cards::Rank;
use crate::session::{BetPreset, Phase, Session, SessionConfig, SessionError, TurnStage};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Setup,
    Dealing,
    Table,
    NewRound,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    /// Typed character for the selected seat name.
    MenuChar(char),
    MenuBackspace,
    ToggleHelp,
    ToggleHistory,
    HistoryUp,
    HistoryDown,
    /// A rank read off a physical card: dealt or drawn depending on phase.
    EnterRank(Rank),
    UndoDeal,
    BetInc,
    BetDec,
    BetSuggested,
    BetPreset(BetPreset),
    Bet,
    Pass,
    NextTurn,
    ConfirmNewRound,
    RestartSession,
    ExitToSetup,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub session: Session,
    // Setup values being edited
    pub menu_index: usize,
    pub cfg_num_players: usize,
    pub cfg_ante: u64,
    /// Names supplied up front; missing ones get defaults.
    pub cfg_names: Vec<String>,
    help_open: bool,
    history_open: bool,
    history_offset: usize,
    action_error: Option<String>,
    action_error_at: Option<Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_config(SessionConfig::default())
    }
}

impl AppState {
    pub const HISTORY_PAGE_SIZE: usize = 20;
    const ACTION_ERROR_TTL: Duration = Duration::from_secs(3);

    /// Start on the setup screen with values seeded from `config`.
    ///
    /// An invalid config falls back to the defaults; the setup menu keeps
    /// the requested names so they can still be used once the count is fixed.
    pub fn with_config(config: SessionConfig) -> Self {
        let requested = config.clone();
        let session = Session::new(config).unwrap_or_default();
        let cfg_num_players = requested
            .players
            .len()
            .clamp(SessionConfig::MIN_PLAYERS, SessionConfig::MAX_PLAYERS);
        Self {
            scene: Scene::Setup,
            session,
            menu_index: 0,
            cfg_num_players,
            cfg_ante: requested.ante.max(1),
            cfg_names: requested.players,
            help_open: false,
            history_open: false,
            history_offset: 0,
            action_error: None,
            action_error_at: None,
        }
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    pub(crate) fn set_action_error(&mut self, msg: String) {
        self.action_error = Some(msg);
        self.action_error_at = Some(Instant::now());
    }

    pub(crate) fn clear_action_error(&mut self) {
        self.action_error = None;
        self.action_error_at = None;
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn history_open(&self) -> bool {
        self.history_open
    }

    pub fn history_offset(&self) -> usize {
        self.history_offset
    }

    pub(crate) fn close_overlays(&mut self) {
        self.help_open = false;
        self.history_open = false;
    }

    /// True while the session is waiting for a rank to be typed in.
    pub fn awaiting_rank(&self) -> bool {
        match self.session.phase() {
            Phase::Dealing { .. } => self.scene == Scene::Dealing,
            Phase::Turn(t) => self.scene == Scene::Table && t.stage == TurnStage::Drawing,
            _ => false,
        }
    }

    fn sync_scene(&mut self) {
        if self.scene == Scene::Setup {
            return;
        }
        self.scene = match self.session.phase() {
            Phase::Dealing { .. } => Scene::Dealing,
            Phase::Turn(_) => Scene::Table,
            Phase::RoundOver => Scene::NewRound,
        };
    }

    /// Run a session operation, surfacing its error in the status line.
    fn with_session<T>(&mut self, op: impl FnOnce(&mut Session) -> Result<T, SessionError>) -> bool {
        if self.scene == Scene::Setup {
            return false;
        }
        let res = op(&mut self.session);
        let changed = match res {
            Ok(_) => {
                self.clear_action_error();
                true
            }
            Err(err) => {
                log::debug!("rejected input: {err}");
                self.set_action_error(err.to_string());
                false
            }
        };
        self.sync_scene();
        changed
    }

    fn enter_rank(&mut self, rank: Rank) -> bool {
        match self.scene {
            Scene::Dealing => self.with_session(|s| s.deal(rank)),
            Scene::Table => self.with_session(|s| s.draw(rank)),
            _ => false,
        }
    }

    /// Returns true when the action changed the session.
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleHelp => {
                if self.scene != Scene::Setup {
                    self.history_open = false;
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::ToggleHistory => {
                if self.scene != Scene::Setup {
                    self.help_open = false;
                    if !self.history_open {
                        self.history_offset = 0;
                    }
                    self.history_open = !self.history_open;
                }
                false
            }
            InputAction::HistoryUp => {
                if self.history_open {
                    let max_offset =
                        self.session.history_len().saturating_sub(Self::HISTORY_PAGE_SIZE);
                    self.history_offset = (self.history_offset + 1).min(max_offset);
                }
                false
            }
            InputAction::HistoryDown => {
                if self.history_open && self.history_offset > 0 {
                    self.history_offset -= 1;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Setup {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Setup {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Setup {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Setup {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => self.scene == Scene::Setup && self.apply_menu(),
            InputAction::MenuChar(c) => {
                if self.scene == Scene::Setup {
                    self.menu_type_char(c);
                }
                false
            }
            InputAction::MenuBackspace => {
                if self.scene == Scene::Setup {
                    self.menu_backspace();
                }
                false
            }
            InputAction::EnterRank(rank) => self.enter_rank(rank),
            InputAction::UndoDeal => self.with_session(|s| s.undo_deal()),
            InputAction::BetInc => self.with_session(|s| s.adjust_bet(1)),
            InputAction::BetDec => self.with_session(|s| s.adjust_bet(-1)),
            InputAction::BetSuggested => self.with_session(|s| s.use_suggested_bet()),
            InputAction::BetPreset(preset) => self.with_session(|s| s.set_bet_preset(preset)),
            InputAction::Bet => self.with_session(|s| s.bet()),
            InputAction::Pass => self.with_session(|s| s.pass()),
            InputAction::NextTurn => self.with_session(|s| s.next_turn()),
            InputAction::ConfirmNewRound => self.with_session(|s| s.start_new_round()),
            InputAction::RestartSession => {
                if self.scene == Scene::Setup {
                    return false;
                }
                self.session.restart();
                self.history_offset = 0;
                self.clear_action_error();
                self.sync_scene();
                true
            }
            InputAction::ExitToSetup => {
                if self.scene != Scene::Setup {
                    self.open_menu();
                }
                false
            }
        }
    }

    /// Periodic housekeeping between key presses.
    pub fn on_tick(&mut self) {
        if let Some(at) = self.action_error_at {
            if at.elapsed() >= Self::ACTION_ERROR_TTL {
                self.clear_action_error();
            }
        }
    }
}
