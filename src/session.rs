//! Session state for one table: players, pot, seen cards and turn order.
//!
//! `Session` owns everything that persists between turns and calls into
//! [`crate::rules`] for every decision and pot change. Rounds go
//! dealing → one turn per player → round over → dealing again. The
//! record of seen ranks carries across rounds and is only cleared by
//! [`Session::restart`].

use crate::cards::Rank;
use crate::deck::{DeckError, UsedRanks};
use crate::rules::{
    calc_pot_delta, determine_outcome, get_decision, is_mandatory_pass, Decision, Outcome,
};
use std::fmt;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("need at least {min} players, got {got}")]
    TooFewPlayers { min: usize, got: usize },
    #[error("at most {max} players allowed, got {got}")]
    TooManyPlayers { max: usize, got: usize },
    #[error("ante must be at least 1")]
    ZeroAnte,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error("not allowed while {actual}; expected {expected}")]
    WrongPhase { expected: &'static str, actual: &'static str },
    #[error("same or consecutive ranks must pass")]
    MandatoryPass,
    #[error("the pot is empty")]
    EmptyPot,
    #[error("bet must be between 1 and the pot ({pot}), got {bet}")]
    InvalidBet { bet: u64, pot: u64 },
    #[error("pot of {pot} cannot absorb a change of {delta}")]
    PotUnderflow { pot: u64, delta: i64 },
    #[error("no hole cards dealt for player {0}")]
    MissingHand(usize),
    #[error("nothing to undo")]
    NothingToUndo,
}

/// Table setup: player names and the per-round ante.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub players: Vec<String>,
    pub ante: u64,
}

impl SessionConfig {
    pub const MIN_PLAYERS: usize = 2;
    pub const MAX_PLAYERS: usize = 10;
    pub const MAX_NAME_LEN: usize = 20;

    pub fn new(players: Vec<String>, ante: u64) -> Self {
        Self { players, ante }
    }

    /// `n` players named "Player 1".."Player n".
    pub fn with_player_count(n: usize, ante: u64) -> Self {
        Self { players: (1..=n).map(default_name).collect(), ante }
    }

    /// Normalize names and check table limits.
    ///
    /// Blank names become "Player N"; long names are cut to
    /// [`Self::MAX_NAME_LEN`] characters.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        let got = self.players.len();
        if got < Self::MIN_PLAYERS {
            return Err(ConfigError::TooFewPlayers { min: Self::MIN_PLAYERS, got });
        }
        if got > Self::MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers { max: Self::MAX_PLAYERS, got });
        }
        if self.ante == 0 {
            return Err(ConfigError::ZeroAnte);
        }
        for (i, name) in self.players.iter_mut().enumerate() {
            let trimmed = name.trim();
            *name = if trimmed.is_empty() {
                default_name(i + 1)
            } else {
                trimmed.chars().take(Self::MAX_NAME_LEN).collect()
            };
        }
        Ok(self)
    }

    /// Pot collected from one ante per player.
    pub fn round_ante(&self) -> u64 {
        self.ante.saturating_mul(self.players.len() as u64)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::with_player_count(Self::MIN_PLAYERS, 1)
    }
}

fn default_name(i: usize) -> String {
    format!("Player {i}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TurnStage {
    Betting,
    Drawing,
    Result,
}

/// Per-turn state; rebuilt at the start of every turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct TurnState {
    pub player: usize,
    /// Hole ranks in the order they were dealt.
    pub hole: (Rank, Rank),
    pub bet: u64,
    pub stage: TurnStage,
    pub drawn: Option<Rank>,
    pub outcome: Option<Outcome>,
}

impl TurnState {
    pub fn is_mandatory_pass(&self) -> bool {
        is_mandatory_pass(self.hole.0, self.hole.1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Phase {
    /// Entering two hole cards per player; `first` holds a half-dealt hand.
    Dealing { player: usize, first: Option<Rank> },
    Turn(TurnState),
    /// Every player has taken a turn this round.
    RoundOver,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Dealing { .. } => "dealing",
            Phase::Turn(t) => match t.stage {
                TurnStage::Betting => "betting",
                TurnStage::Drawing => "drawing",
                TurnStage::Result => "showing a result",
            },
            Phase::RoundOver => "the round is over",
        }
    }
}

/// Quick bets offered next to the recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetPreset {
    Two,
    Five,
    Ten,
    QuarterPot,
    HalfPot,
    ThreeQuarterPot,
    Pot,
}

impl BetPreset {
    pub const ALL: [BetPreset; 7] = [
        BetPreset::Two,
        BetPreset::Five,
        BetPreset::Ten,
        BetPreset::QuarterPot,
        BetPreset::HalfPot,
        BetPreset::ThreeQuarterPot,
        BetPreset::Pot,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BetPreset::Two => "2",
            BetPreset::Five => "5",
            BetPreset::Ten => "10",
            BetPreset::QuarterPot => "1/4",
            BetPreset::HalfPot => "1/2",
            BetPreset::ThreeQuarterPot => "3/4",
            BetPreset::Pot => "Pot",
        }
    }

    /// Bet for a pot of `pot`. Pot fractions round down but never below 1.
    pub fn amount(self, pot: u64) -> u64 {
        let quarters = |n: u64| {
            let v = u128::from(pot) * u128::from(n) / 4;
            u64::try_from(v).unwrap_or(pot).max(1)
        };
        match self {
            BetPreset::Two => 2,
            BetPreset::Five => 5,
            BetPreset::Ten => 10,
            BetPreset::QuarterPot => quarters(1),
            BetPreset::HalfPot => quarters(2),
            BetPreset::ThreeQuarterPot => quarters(3),
            BetPreset::Pot => pot,
        }
    }

    /// Presets whose amount fits in the pot.
    pub fn available(pot: u64) -> impl Iterator<Item = BetPreset> {
        Self::ALL.into_iter().filter(move |p| pot > 0 && p.amount(pot) <= pot)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum HistoryEvent {
    Ante { amount: u64 },
    Dealt { rank: Rank },
    Undone { rank: Rank },
    Bet { amount: u64 },
    Pass { mandatory: bool },
    Draw { rank: Rank, outcome: Outcome, delta: i64 },
}

impl fmt::Display for HistoryEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            HistoryEvent::Ante { amount } => write!(f, "Ante +{amount}"),
            HistoryEvent::Dealt { rank } => write!(f, "Dealt {rank}"),
            HistoryEvent::Undone { rank } => write!(f, "Took back {rank}"),
            HistoryEvent::Bet { amount } => write!(f, "Bet {amount}"),
            HistoryEvent::Pass { mandatory: true } => write!(f, "Must pass +1"),
            HistoryEvent::Pass { mandatory: false } => write!(f, "Pass +1"),
            HistoryEvent::Draw { rank, outcome, delta } => {
                write!(f, "Drew {rank}: {outcome} ({delta:+})")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct HistoryEntry {
    pub round: u32,
    /// `None` for table-wide events such as the ante.
    pub player: Option<usize>,
    pub event: HistoryEvent,
}

#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Session {
    config: SessionConfig,
    pot: u64,
    used: UsedRanks,
    hands: Vec<Option<(Rank, Rank)>>,
    phase: Phase,
    round: u32,
    turn_in_round: usize,
    history: Vec<HistoryEntry>,
}

impl Default for Session {
    fn default() -> Self {
        Self::fresh(SessionConfig::default())
    }
}

impl Session {
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        let config = config.validate()?;
        Ok(Self::fresh(config))
    }

    fn fresh(config: SessionConfig) -> Self {
        let pot = config.round_ante();
        log::info!("new session: {} players, ante {}, pot {pot}", config.players.len(), config.ante);
        let mut s = Self {
            hands: vec![None; config.players.len()],
            config,
            pot,
            used: UsedRanks::new(),
            phase: Phase::Dealing { player: 0, first: None },
            round: 1,
            turn_in_round: 0,
            history: Vec::new(),
        };
        s.record_history(None, HistoryEvent::Ante { amount: pot });
        s
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn players(&self) -> &[String] {
        &self.config.players
    }

    pub fn num_players(&self) -> usize {
        self.config.players.len()
    }

    pub fn ante(&self) -> u64 {
        self.config.ante
    }

    pub fn pot(&self) -> u64 {
        self.pot
    }

    pub fn used(&self) -> &UsedRanks {
        &self.used
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// 1-based round number.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn turn(&self) -> Option<&TurnState> {
        match &self.phase {
            Phase::Turn(t) => Some(t),
            _ => None,
        }
    }

    /// Player being dealt to or taking their turn.
    pub fn current_player(&self) -> Option<usize> {
        match self.phase {
            Phase::Dealing { player, .. } => Some(player),
            Phase::Turn(t) => Some(t.player),
            Phase::RoundOver => None,
        }
    }

    pub fn dealt_hand(&self, player: usize) -> Option<(Rank, Rank)> {
        self.hands.get(player).copied().flatten()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn history_recent(&self, n: usize) -> Vec<HistoryEntry> {
        if n == 0 {
            return Vec::new();
        }
        let len = self.history.len();
        let start = len.saturating_sub(n);
        self.history[start..].to_vec()
    }

    pub fn history_recent_offset(&self, n: usize, offset: usize) -> Vec<HistoryEntry> {
        if n == 0 || self.history.is_empty() {
            return Vec::new();
        }
        let len = self.history.len();
        let offset = offset.min(len.saturating_sub(n));
        let end = len - offset;
        let start = end.saturating_sub(n);
        self.history[start..end].to_vec()
    }

    /// Recommendation for the current turn while the player is betting.
    pub fn decision(&self) -> Option<Decision> {
        match self.phase {
            Phase::Turn(t) if t.stage == TurnStage::Betting => {
                Some(get_decision(t.hole.0, t.hole.1, &self.used, self.pot))
            }
            _ => None,
        }
    }

    // --- Dealing ---

    /// Enter the next hole card for the player being dealt to.
    pub fn deal(&mut self, rank: Rank) -> Result<(), SessionError> {
        let (player, first) = match self.phase {
            Phase::Dealing { player, first } => (player, first),
            other => return Err(Self::wrong_phase("dealing", other)),
        };
        self.used.record(rank)?;
        log::debug!("dealt {rank} to {}", self.config.players[player]);
        self.record_history(Some(player), HistoryEvent::Dealt { rank });
        match first {
            None => self.phase = Phase::Dealing { player, first: Some(rank) },
            Some(a) => {
                self.hands[player] = Some((a, rank));
                if player + 1 >= self.num_players() {
                    self.turn_in_round = 0;
                    self.start_turn(0)?;
                } else {
                    self.phase = Phase::Dealing { player: player + 1, first: None };
                }
            }
        }
        Ok(())
    }

    /// Take back the last card dealt this round.
    pub fn undo_deal(&mut self) -> Result<Rank, SessionError> {
        let (player, first) = match self.phase {
            Phase::Dealing { player, first } => (player, first),
            other => return Err(Self::wrong_phase("dealing", other)),
        };
        let (slot, keep) = match first {
            Some(_) => (player, None),
            None if player > 0 => {
                let prev = player - 1;
                let (a, _) = self.hands[prev].take().ok_or(SessionError::MissingHand(prev))?;
                (prev, Some(a))
            }
            None => return Err(SessionError::NothingToUndo),
        };
        let rank = self.used.undo().ok_or(SessionError::NothingToUndo)?;
        self.phase = Phase::Dealing { player: slot, first: keep };
        log::debug!("took back {rank} from {}", self.config.players[slot]);
        self.record_history(Some(slot), HistoryEvent::Undone { rank });
        Ok(rank)
    }

    // --- Betting ---

    /// Set the pending bet, clamped to `1..=pot` (0 when the pot is empty).
    pub fn set_bet(&mut self, amount: u64) -> Result<u64, SessionError> {
        let pot = self.pot;
        let t = self.betting_turn_mut()?;
        t.bet = if pot == 0 { 0 } else { amount.clamp(1, pot) };
        Ok(t.bet)
    }

    pub fn adjust_bet(&mut self, delta: i64) -> Result<u64, SessionError> {
        let current = self.betting_turn_mut()?.bet;
        let next = current.saturating_add_signed(delta);
        self.set_bet(next)
    }

    /// Replace the pending bet with the engine's suggestion, if it has one.
    pub fn use_suggested_bet(&mut self) -> Result<u64, SessionError> {
        let suggested = self.decision().map(|d| d.suggested_bet).unwrap_or(0);
        if suggested == 0 {
            return Ok(self.betting_turn_mut()?.bet);
        }
        self.set_bet(suggested)
    }

    /// Set the pending bet to a quick-bet preset.
    pub fn set_bet_preset(&mut self, preset: BetPreset) -> Result<u64, SessionError> {
        let pot = self.pot;
        let amount = preset.amount(pot);
        let t = self.betting_turn_mut()?;
        if pot == 0 || amount > pot {
            return Err(SessionError::InvalidBet { bet: amount, pot });
        }
        t.bet = amount;
        Ok(amount)
    }

    /// Place the pending bet and move on to drawing.
    pub fn bet(&mut self) -> Result<u64, SessionError> {
        let pot = self.pot;
        let exhausted = self.used.is_exhausted();
        let t = self.betting_turn_mut()?;
        if t.is_mandatory_pass() {
            return Err(SessionError::MandatoryPass);
        }
        if pot == 0 {
            return Err(SessionError::EmptyPot);
        }
        // Nothing left to draw; only a pass can end the turn.
        if exhausted {
            return Err(DeckError::Exhausted.into());
        }
        if t.bet == 0 || t.bet > pot {
            return Err(SessionError::InvalidBet { bet: t.bet, pot });
        }
        t.stage = TurnStage::Drawing;
        let (player, amount) = (t.player, t.bet);
        log::info!("{} bets {amount} into a pot of {pot}", self.config.players[player]);
        self.record_history(Some(player), HistoryEvent::Bet { amount });
        Ok(amount)
    }

    /// Decline the turn. Covers both voluntary and mandatory passes.
    pub fn pass(&mut self) -> Result<(), SessionError> {
        let t = *self.betting_turn_mut()?;
        self.apply_delta(calc_pot_delta(Outcome::Pass, t.bet))?;
        let mandatory = t.is_mandatory_pass();
        log::info!("{} passes (mandatory: {mandatory}), pot {}", self.config.players[t.player], self.pot);
        self.record_history(Some(t.player), HistoryEvent::Pass { mandatory });
        self.advance()
    }

    // --- Drawing ---

    /// Enter the drawn card, settle the bet and show the result.
    pub fn draw(&mut self, rank: Rank) -> Result<Outcome, SessionError> {
        let mut t = match self.phase {
            Phase::Turn(t) if t.stage == TurnStage::Drawing => t,
            other => return Err(Self::wrong_phase("drawing", other)),
        };
        self.used.record(rank)?;
        let outcome = determine_outcome(rank, t.hole.0, t.hole.1);
        let delta = calc_pot_delta(outcome, t.bet);
        if let Err(e) = self.apply_delta(delta) {
            self.used.undo();
            return Err(e);
        }
        t.drawn = Some(rank);
        t.outcome = Some(outcome);
        t.stage = TurnStage::Result;
        self.phase = Phase::Turn(t);
        log::info!(
            "{} drew {rank} against {}-{}: {outcome}, pot {delta:+} to {}",
            self.config.players[t.player],
            t.hole.0,
            t.hole.1,
            self.pot
        );
        self.record_history(Some(t.player), HistoryEvent::Draw { rank, outcome, delta });
        Ok(outcome)
    }

    /// Leave the result screen for the next player's turn.
    pub fn next_turn(&mut self) -> Result<(), SessionError> {
        match self.phase {
            Phase::Turn(t) if t.stage == TurnStage::Result => self.advance(),
            other => Err(Self::wrong_phase("showing a result", other)),
        }
    }

    // --- Rounds ---

    /// Collect the round ante and start dealing again. Seen cards are kept.
    pub fn start_new_round(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::RoundOver {
            return Err(Self::wrong_phase("the round is over", self.phase));
        }
        let amount = self.config.round_ante();
        self.pot = self.pot.saturating_add(amount);
        self.round += 1;
        self.turn_in_round = 0;
        self.hands.iter_mut().for_each(|h| *h = None);
        self.phase = Phase::Dealing { player: 0, first: None };
        let needed = self.num_players() * 2;
        if self.used.remaining() < needed {
            log::warn!("only {} cards left, {needed} needed to deal", self.used.remaining());
        }
        log::info!("round {} starts, pot {}", self.round, self.pot);
        self.record_history(None, HistoryEvent::Ante { amount });
        Ok(())
    }

    /// Start a brand-new session with the same players and ante.
    pub fn restart(&mut self) {
        *self = Self::fresh(self.config.clone());
    }

    fn start_turn(&mut self, player: usize) -> Result<(), SessionError> {
        let hole = self.dealt_hand(player).ok_or(SessionError::MissingHand(player))?;
        self.phase = Phase::Turn(TurnState {
            player,
            hole,
            bet: self.pot.min(1),
            stage: TurnStage::Betting,
            drawn: None,
            outcome: None,
        });
        Ok(())
    }

    fn advance(&mut self) -> Result<(), SessionError> {
        let player = self.current_player().unwrap_or(0);
        self.turn_in_round += 1;
        if self.turn_in_round >= self.num_players() {
            self.turn_in_round = 0;
            self.phase = Phase::RoundOver;
            log::info!("round {} over, pot {}", self.round, self.pot);
            return Ok(());
        }
        self.start_turn((player + 1) % self.num_players())
    }

    fn betting_turn_mut(&mut self) -> Result<&mut TurnState, SessionError> {
        let actual = self.phase;
        match &mut self.phase {
            Phase::Turn(t) if t.stage == TurnStage::Betting => Ok(t),
            _ => Err(Self::wrong_phase("betting", actual)),
        }
    }

    fn apply_delta(&mut self, delta: i64) -> Result<(), SessionError> {
        let next = if delta >= 0 {
            self.pot.checked_add(delta.unsigned_abs())
        } else {
            self.pot.checked_sub(delta.unsigned_abs())
        };
        self.pot = next.ok_or(SessionError::PotUnderflow { pot: self.pot, delta })?;
        Ok(())
    }

    fn wrong_phase(expected: &'static str, actual: Phase) -> SessionError {
        SessionError::WrongPhase { expected, actual: actual.name() }
    }

    fn record_history(&mut self, player: Option<usize>, event: HistoryEvent) {
        self.history.push(HistoryEntry { round: self.round, player, event });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mk_session(n: usize) -> Session {
        Session::new(SessionConfig::with_player_count(n, 1)).unwrap()
    }

    #[test]
    fn config_fills_blank_names_and_truncates() {
        let cfg = SessionConfig::new(
            vec!["  ".into(), "An extremely long player name".into()],
            2,
        )
        .validate()
        .unwrap();
        assert_eq!(cfg.players[0], "Player 1");
        assert_eq!(cfg.players[1].chars().count(), SessionConfig::MAX_NAME_LEN);
    }

    #[test]
    fn config_limits() {
        assert!(matches!(
            SessionConfig::with_player_count(1, 1).validate(),
            Err(ConfigError::TooFewPlayers { got: 1, .. })
        ));
        assert!(matches!(
            SessionConfig::with_player_count(11, 1).validate(),
            Err(ConfigError::TooManyPlayers { got: 11, .. })
        ));
        assert_eq!(SessionConfig::with_player_count(3, 0).validate(), Err(ConfigError::ZeroAnte));
    }

    #[test]
    fn undo_walks_back_across_players() {
        let mut s = mk_session(2);
        s.deal(Rank::Two).unwrap();
        s.deal(Rank::Nine).unwrap();
        assert_eq!(s.phase(), Phase::Dealing { player: 1, first: None });
        assert_eq!(s.undo_deal().unwrap(), Rank::Nine);
        assert_eq!(s.phase(), Phase::Dealing { player: 0, first: Some(Rank::Two) });
        assert_eq!(s.dealt_hand(0), None);
        assert_eq!(s.undo_deal().unwrap(), Rank::Two);
        assert_eq!(s.undo_deal(), Err(SessionError::NothingToUndo));
        assert!(s.used().is_empty());
    }

    #[test]
    fn wrong_phase_is_reported() {
        let mut s = mk_session(2);
        let err = s.draw(Rank::Five).unwrap_err();
        assert_eq!(err, SessionError::WrongPhase { expected: "drawing", actual: "dealing" });
        assert!(s.used().is_empty());
    }

    #[test]
    fn history_offset_pages_from_the_end() {
        let mut s = mk_session(2);
        for r in [Rank::Two, Rank::Three, Rank::Four, Rank::Five] {
            s.deal(r).unwrap();
        }
        // ante + four deals
        assert_eq!(s.history_len(), 5);
        let last_two = s.history_recent_offset(2, 0);
        assert_eq!(last_two[1].event, HistoryEvent::Dealt { rank: Rank::Five });
        let older = s.history_recent_offset(2, 10);
        assert_eq!(older[0].event, HistoryEvent::Ante { amount: 2 });
    }

    #[test]
    fn pot_fraction_presets_round_down_to_at_least_one() {
        assert_eq!(BetPreset::QuarterPot.amount(3), 1);
        assert_eq!(BetPreset::HalfPot.amount(3), 1);
        assert_eq!(BetPreset::ThreeQuarterPot.amount(3), 2);
        assert_eq!(BetPreset::ThreeQuarterPot.amount(10), 7);
        assert_eq!(BetPreset::HalfPot.amount(1), 1);
        assert_eq!(BetPreset::Pot.amount(9), 9);
        assert_eq!(BetPreset::Ten.amount(3), 10);
    }

    #[test]
    fn available_presets_fit_the_pot() {
        let small: Vec<_> = BetPreset::available(4).collect();
        assert_eq!(
            small,
            vec![
                BetPreset::Two,
                BetPreset::QuarterPot,
                BetPreset::HalfPot,
                BetPreset::ThreeQuarterPot,
                BetPreset::Pot
            ]
        );
        assert_eq!(BetPreset::available(0).count(), 0);
        assert_eq!(BetPreset::available(40).count(), 7);
    }

    #[test]
    fn preset_bets_respect_the_pot() {
        let mut s = mk_session(3);
        for r in [Rank::Two, Rank::King, Rank::Ace, Rank::Queen, Rank::Three, Rank::Jack] {
            s.deal(r).unwrap();
        }
        assert_eq!(s.pot(), 3);
        assert_eq!(s.set_bet_preset(BetPreset::Two), Ok(2));
        assert_eq!(s.set_bet_preset(BetPreset::ThreeQuarterPot), Ok(2));
        assert_eq!(s.set_bet_preset(BetPreset::Pot), Ok(3));
        assert_eq!(
            s.set_bet_preset(BetPreset::Five),
            Err(SessionError::InvalidBet { bet: 5, pot: 3 })
        );
        assert_eq!(s.turn().map(|t| t.bet), Some(3));
    }

    #[test]
    fn betting_actions_report_the_current_stage() {
        let mut s = mk_session(2);
        for r in [Rank::Two, Rank::King, Rank::Four, Rank::Nine] {
            s.deal(r).unwrap();
        }
        assert_eq!(s.set_bet(1), Ok(1));
        s.bet().unwrap();
        let err = SessionError::WrongPhase { expected: "betting", actual: "drawing" };
        assert_eq!(s.set_bet(2), Err(err.clone()));
        assert_eq!(s.pass(), Err(err));
        assert_eq!(s.turn().map(|t| t.bet), Some(1));
    }
}
