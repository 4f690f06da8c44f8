use std::fmt;
use std::str::FromStr;

/// Card ranks from Ace (low, 1) to King (13). Suits play no part in In Between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Canonical display label: `A`, `2`..`10`, `J`, `Q`, `K`.
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    /// Single key used to enter the rank in the TUI (`0` stands for Ten).
    pub const fn key(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => '0',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    Invalid(String),
    #[error("rank value out of range 1..=13: {0}")]
    OutOfRange(u8),
}

impl TryFrom<u8> for Rank {
    type Error = RankParseError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            1..=13 => Ok(Rank::ALL[usize::from(v) - 1]),
            _ => Err(RankParseError::OutOfRange(v)),
        }
    }
}

impl FromStr for Rank {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let r = match upper.as_str() {
            "A" | "1" => Rank::Ace,
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            _ => return Err(RankParseError::Invalid(s.to_string())),
        };
        Ok(r)
    }
}

impl TryFrom<char> for Rank {
    type Error = RankParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Rank::Ace),
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            '0' | 'T' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            _ => Err(RankParseError::Invalid(c.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_face_values() {
        assert_eq!(Rank::Ace.label(), "A");
        assert_eq!(Rank::Ten.label(), "10");
        assert_eq!(Rank::Jack.label(), "J");
        assert_eq!(Rank::Queen.label(), "Q");
        assert_eq!(Rank::King.to_string(), "K");
        assert_eq!(Rank::Seven.to_string(), "7");
    }

    #[test]
    fn all_is_ascending_by_value() {
        for (i, r) in Rank::ALL.iter().enumerate() {
            assert_eq!(usize::from(r.value()), i + 1);
        }
    }

    #[test]
    fn from_u8_bounds() {
        assert_eq!(Rank::try_from(1u8).unwrap(), Rank::Ace);
        assert_eq!(Rank::try_from(13u8).unwrap(), Rank::King);
        assert_eq!(Rank::try_from(0u8), Err(RankParseError::OutOfRange(0)));
        assert_eq!(Rank::try_from(14u8), Err(RankParseError::OutOfRange(14)));
    }

    #[test]
    fn from_str_and_char() {
        assert_eq!(Rank::from_str("10").unwrap(), Rank::Ten);
        assert_eq!(Rank::from_str(" t ").unwrap(), Rank::Ten);
        assert_eq!(Rank::from_str("1").unwrap(), Rank::Ace);
        assert!(Rank::from_str("14").is_err());
        assert_eq!(Rank::try_from('q').unwrap(), Rank::Queen);
        assert_eq!(Rank::try_from('0').unwrap(), Rank::Ten);
        assert!(Rank::try_from('x').is_err());
    }

    #[test]
    fn key_round_trips_through_char_parse() {
        for r in Rank::ALL {
            assert_eq!(Rank::try_from(r.key()).unwrap(), r);
        }
    }
}
