//! In Between rules and odds.
//!
//! Every function here is pure: it reads its arguments and returns a fresh
//! value. The caller owns the pot, the used-rank record and turn order.
//!
//! ```
//! use in_between::cards::Rank;
//! use in_between::deck::UsedRanks;
//! use in_between::rules::{get_decision, Action};
//!
//! let d = get_decision(Rank::Two, Rank::Queen, &UsedRanks::new(), 100);
//! assert_eq!(d.action, Action::Bet);
//! assert_eq!(d.suggested_bet, 69);
//! ```

use crate::cards::Rank;
use crate::deck::UsedRanks;
use std::fmt;

/// Bet only when the odds are at least even.
pub const BET_THRESHOLD: f64 = 0.5;
/// Paid into the pot when a player passes.
pub const PASS_PENALTY: i64 = 1;

const MUST_PASS_REASON: &str = "Cards are the same rank or consecutive — mandatory pass.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Action {
    /// Pair or consecutive ranks; nothing can land between them.
    MustPass,
    Bet,
    Pass,
}

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Action::MustPass => "MUST PASS",
            Action::Bet => "BET",
            Action::Pass => "PASS",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Outcome {
    Win,
    Loss,
    /// Drawn card matched one of the hole ranks.
    Post,
    /// Player declined to play the turn.
    Pass,
}

impl Outcome {
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Win => "WIN",
            Outcome::Loss => "LOSS",
            Outcome::Post => "POST",
            Outcome::Pass => "PASS",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Recommendation for the current turn.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct Decision {
    pub action: Action,
    /// Chance the next card lands strictly between the hole ranks.
    pub probability: f64,
    /// Never more than the pot; zero unless `action` is `Bet`.
    pub suggested_bet: u64,
    pub reasoning: String,
    /// Unseen cards strictly between the hole ranks.
    pub in_between: usize,
    /// Unseen cards left in the deck.
    pub remaining: usize,
}

/// Canonical label for a rank (`A`, `2`..`10`, `J`, `Q`, `K`).
pub fn rank_label(rank: Rank) -> &'static str {
    rank.label()
}

/// True when the pair is equal or consecutive, leaving no rank in between.
pub fn is_mandatory_pass(r1: Rank, r2: Rank) -> bool {
    r1.value().abs_diff(r2.value()) <= 1
}

/// Order a pair as `(low, high)`.
pub fn low_high(r1: Rank, r2: Rank) -> (Rank, Rank) {
    if r1 <= r2 {
        (r1, r2)
    } else {
        (r2, r1)
    }
}

pub fn rank_used_count(rank: Rank, used: &UsedRanks) -> usize {
    used.count(rank)
}

/// Unseen cards whose rank lies strictly between `r1` and `r2`.
pub fn in_between_count(r1: Rank, r2: Rank, used: &UsedRanks) -> usize {
    let (low, high) = low_high(r1, r2);
    Rank::ALL
        .iter()
        .filter(|&&r| r > low && r < high)
        .map(|&r| used.copies_left(r))
        .sum()
}

/// Probability that a uniformly drawn unseen card lands strictly between
/// `r1` and `r2`. Zero once the deck is exhausted.
pub fn calc_probability(r1: Rank, r2: Rank, used: &UsedRanks) -> f64 {
    let total = used.remaining();
    if total == 0 {
        return 0.0;
    }
    let p = in_between_count(r1, r2, used) as f64 / total as f64;
    debug_assert!((0.0..=1.0).contains(&p));
    p
}

/// Recommend an action and bet for hole ranks `r1`/`r2`.
///
/// The suggested bet is `pot * probability` rounded half away from zero and
/// capped at the pot.
pub fn get_decision(r1: Rank, r2: Rank, used: &UsedRanks, pot: u64) -> Decision {
    let remaining = used.remaining();
    if is_mandatory_pass(r1, r2) {
        return Decision {
            action: Action::MustPass,
            probability: 0.0,
            suggested_bet: 0,
            reasoning: MUST_PASS_REASON.to_string(),
            in_between: 0,
            remaining,
        };
    }

    let (low, high) = low_high(r1, r2);
    let in_between = in_between_count(low, high, used);
    let probability = calc_probability(low, high, used);
    let action = if probability >= BET_THRESHOLD { Action::Bet } else { Action::Pass };
    let suggested_bet = match action {
        Action::Bet => ((pot as f64 * probability).round() as u64).min(pot),
        _ => 0,
    };
    let reasoning = format!(
        "{in_between} of {remaining} remaining cards fall between {} and {}",
        rank_label(low),
        rank_label(high)
    );
    Decision { action, probability, suggested_bet, reasoning, in_between, remaining }
}

/// Resolve a drawn card against the hole ranks. Never returns `Outcome::Pass`.
pub fn determine_outcome(drawn: Rank, r1: Rank, r2: Rank) -> Outcome {
    let (low, high) = low_high(r1, r2);
    if drawn > low && drawn < high {
        Outcome::Win
    } else if drawn == low || drawn == high {
        Outcome::Post
    } else {
        Outcome::Loss
    }
}

/// Signed change to the pot for an outcome. Positive values flow into the pot.
pub fn calc_pot_delta(outcome: Outcome, bet: u64) -> i64 {
    let bet = i64::try_from(bet).unwrap_or(i64::MAX);
    match outcome {
        Outcome::Win => -bet,
        Outcome::Loss => bet,
        Outcome::Post => bet.saturating_mul(2),
        Outcome::Pass => PASS_PENALTY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn used(ranks: &[Rank]) -> UsedRanks {
        UsedRanks::try_from(ranks).unwrap()
    }

    #[test]
    fn mandatory_pass_on_pairs_and_neighbours() {
        assert!(is_mandatory_pass(Rank::Five, Rank::Five));
        assert!(is_mandatory_pass(Rank::Six, Rank::Seven));
        assert!(is_mandatory_pass(Rank::King, Rank::Queen));
        assert!(is_mandatory_pass(Rank::Ace, Rank::Two));
        assert!(!is_mandatory_pass(Rank::Ace, Rank::Three));
        assert!(!is_mandatory_pass(Rank::Ace, Rank::King));
    }

    #[test]
    fn seen_cards_lower_the_in_between_count() {
        let seen = used(&[Rank::Five, Rank::Five, Rank::Seven, Rank::Three, Rank::Nine]);
        assert_eq!(in_between_count(Rank::Three, Rank::Nine, &seen), 17);
        let p = calc_probability(Rank::Nine, Rank::Three, &seen);
        assert!((p - 17.0 / 47.0).abs() < 1e-12);
    }

    #[test]
    fn exhausted_deck_gives_zero() {
        let mut seen = UsedRanks::new();
        for r in Rank::ALL {
            for _ in 0..4 {
                seen.record(r).unwrap();
            }
        }
        assert_eq!(calc_probability(Rank::Ace, Rank::King, &seen), 0.0);
        let d = get_decision(Rank::Ace, Rank::King, &seen, 50);
        assert_eq!(d.action, Action::Pass);
        assert_eq!(d.suggested_bet, 0);
    }

    #[test]
    fn suggested_bet_rounds_half_up_and_caps_at_pot() {
        // 44 of 52 between A and K; 1 * 0.846 rounds to 1
        let d = get_decision(Rank::Ace, Rank::King, &UsedRanks::new(), 1);
        assert_eq!(d.suggested_bet, 1);
        // 20 of 40 left between A and 10: exactly even odds, 5 * 0.5 = 2.5 -> 3
        let mut seen = Vec::new();
        for r in [Rank::Two, Rank::Three, Rank::Four] {
            seen.extend([r; 4]);
        }
        let d = get_decision(Rank::Ace, Rank::Ten, &used(&seen), 5);
        assert_eq!(d.in_between, 20);
        assert_eq!(d.remaining, 40);
        assert_eq!(d.probability, 0.5);
        assert_eq!(d.action, Action::Bet);
        assert_eq!(d.suggested_bet, 3);
    }

    #[test]
    fn zero_pot_bets_nothing() {
        let d = get_decision(Rank::Two, Rank::Queen, &UsedRanks::new(), 0);
        assert_eq!(d.action, Action::Bet);
        assert_eq!(d.suggested_bet, 0);
    }

    #[test]
    fn reasoning_uses_normalized_labels() {
        let d = get_decision(Rank::Queen, Rank::Ace, &UsedRanks::new(), 10);
        assert_eq!(d.reasoning, "40 of 52 remaining cards fall between A and Q");
    }

    #[test]
    fn pass_penalty_ignores_bet() {
        assert_eq!(calc_pot_delta(Outcome::Pass, 0), 1);
        assert_eq!(calc_pot_delta(Outcome::Pass, 500), 1);
    }
}
