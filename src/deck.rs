use crate::cards::Rank;

/// Cards in one standard deck.
pub const DECK_SIZE: usize = 52;
/// Copies of each rank in one deck (suits ignored).
pub const COPIES_PER_RANK: usize = 4;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("all {COPIES_PER_RANK} copies of {0} have already been seen")]
    RankExhausted(Rank),
    #[error("all {DECK_SIZE} cards have been seen")]
    Exhausted,
}

/// Every rank revealed so far in the session, in the order it was seen.
///
/// The deck is never reshuffled between rounds, so the record only grows
/// until a new session starts. No rank can be recorded more than
/// [`COPIES_PER_RANK`] times.
///
/// ```
/// use in_between::cards::Rank;
/// use in_between::deck::UsedRanks;
///
/// let mut used = UsedRanks::new();
/// used.record(Rank::Seven).unwrap();
/// assert_eq!(used.count(Rank::Seven), 1);
/// assert_eq!(used.remaining(), 51);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedRanks {
    ranks: Vec<Rank>,
    counts: [u8; 13],
}

impl UsedRanks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    pub fn as_slice(&self) -> &[Rank] {
        &self.ranks
    }

    /// Number of times `rank` has been seen, in `0..=4`.
    pub fn count(&self, rank: Rank) -> usize {
        usize::from(self.counts[Self::slot(rank)])
    }

    /// Unseen copies of `rank` still in the deck.
    pub fn copies_left(&self, rank: Rank) -> usize {
        COPIES_PER_RANK - self.count(rank)
    }

    pub fn is_rank_exhausted(&self, rank: Rank) -> bool {
        self.copies_left(rank) == 0
    }

    /// Cards not yet revealed this session.
    pub fn remaining(&self) -> usize {
        DECK_SIZE - self.ranks.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Record a newly revealed card.
    pub fn record(&mut self, rank: Rank) -> Result<(), DeckError> {
        if self.is_exhausted() {
            return Err(DeckError::Exhausted);
        }
        if self.is_rank_exhausted(rank) {
            return Err(DeckError::RankExhausted(rank));
        }
        self.counts[Self::slot(rank)] += 1;
        self.ranks.push(rank);
        Ok(())
    }

    /// Take back the most recently recorded card.
    pub fn undo(&mut self) -> Option<Rank> {
        let rank = self.ranks.pop()?;
        self.counts[Self::slot(rank)] -= 1;
        Some(rank)
    }

    const fn slot(rank: Rank) -> usize {
        rank.value() as usize - 1
    }
}

impl TryFrom<Vec<Rank>> for UsedRanks {
    type Error = DeckError;

    fn try_from(ranks: Vec<Rank>) -> Result<Self, Self::Error> {
        let mut used = UsedRanks::new();
        for r in ranks {
            used.record(r)?;
        }
        Ok(used)
    }
}

impl TryFrom<&[Rank]> for UsedRanks {
    type Error = DeckError;

    fn try_from(ranks: &[Rank]) -> Result<Self, Self::Error> {
        Self::try_from(ranks.to_vec())
    }
}
