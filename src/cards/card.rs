use super::error::CardError;
use super::rank::Rank;
use super::suit::Suit;

/// A playing card: one rank, one suit. Immutable once constructed.
///
/// Construction from symbols is fallible; a Card in hand is always
/// in-domain. Duplicate cards across a hand are not this type's concern.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// symbol-pair construction, e.g. ('A', 'S')
impl TryFrom<(char, char)> for Card {
    type Error = CardError;
    fn try_from((rank, suit): (char, char)) -> Result<Self, Self::Error> {
        Ok(Self {
            rank: Rank::try_from(rank)?,
            suit: Suit::try_from(suit)?,
        })
    }
}

/// two-symbol string construction, e.g. "AS"
impl TryFrom<&str> for Card {
    type Error = CardError;
    fn try_from(symbols: &str) -> Result<Self, Self::Error> {
        let mut chars = symbols.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(rank), Some(suit), None) => Self::try_from((rank, suit)),
            _ => Err(CardError::MalformedHand(symbols.to_string())),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// cards serialize in their two-symbol form, same as Display
impl serde::Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_str() {
        let card = Card::try_from("AS").unwrap();
        assert_eq!(card.rank(), Rank::Ace);
        assert_eq!(card.suit(), Suit::Spade);
        assert_eq!(card.to_string(), "AS");
    }

    #[test]
    fn invalid_rank_builds_no_card() {
        assert_eq!(Card::try_from("1S"), Err(CardError::InvalidRank('1')));
    }

    #[test]
    fn invalid_suit_builds_no_card() {
        assert_eq!(Card::try_from("AX"), Err(CardError::InvalidSuit('X')));
    }

    #[test]
    fn serializes_as_symbols() {
        let card = Card::try_from("AS").unwrap();
        assert_eq!(serde_json::to_string(&card).unwrap(), "\"AS\"");
    }

    #[test]
    fn equality_is_fieldwise() {
        assert_eq!(Card::try_from("TD").unwrap(), Card::try_from("TD").unwrap());
        assert_ne!(Card::try_from("TD").unwrap(), Card::try_from("TC").unwrap());
        assert_ne!(Card::try_from("TD").unwrap(), Card::try_from("9D").unwrap());
    }
}
