//! in-between: odds tracker for In Between (Acey-Deucey) played with a physical deck.
//!
//! Players deal real cards and type in the ranks they see. The library keeps
//! the pot, the turn order and every rank revealed this session, and
//! recommends a bet from the exact odds of the remaining deck.
//!
//! ## Quick start: ask for a recommendation
//! ```
//! use in_between::cards::Rank;
//! use in_between::deck::UsedRanks;
//! use in_between::rules::{get_decision, Action};
//!
//! let mut used = UsedRanks::new();
//! for r in [Rank::Three, Rank::Nine] {
//!     used.record(r).unwrap();
//! }
//! let d = get_decision(Rank::Three, Rank::Nine, &used, 20);
//! assert_eq!(d.action, Action::Pass);
//! assert_eq!(d.reasoning, "20 of 50 remaining cards fall between 3 and 9");
//! ```
//!
//! ## TUI
//! Run the interactive tracker with:
//! ```sh
//! cargo run --bin in-between -- --players Ann,Bo,Cy --ante 2
//! ```

pub mod cards;
pub mod deck;
pub mod rules;
pub mod session;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
