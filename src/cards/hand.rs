use super::card::Card;
use super::error::CardError;
use super::rank::Rank;
use super::suit::Suit;
use rand::Rng;

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// An identified, fixed-size hand of five cards.
///
/// The five-card size lives in the type, so undersized or oversized
/// hands are unrepresentable. Cards keep their deal order; classification
/// only ever reads the sorted views below, which makes it independent of
/// the order cards arrived in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    id: usize,
    cards: [Card; HAND_SIZE],
}

impl Hand {
    pub fn new(id: usize, cards: [Card; HAND_SIZE]) -> Self {
        Self { id, cards }
    }

    pub fn id(&self) -> usize {
        self.id
    }
    pub fn cards(&self) -> [Card; HAND_SIZE] {
        self.cards
    }

    /// deal five uniformly random cards, sampled with replacement.
    /// duplicates are possible and accepted, as in a multi-deck deal.
    pub fn random(id: usize) -> Self {
        let mut rng = rand::rng();
        let cards = std::array::from_fn(|_| {
            let rank = Rank::all()[rng.random_range(0..13)];
            let suit = Suit::all()[rng.random_range(0..4)];
            Card::from((rank, suit))
        });
        Self { id, cards }
    }

    /// parse a 10-symbol card string like "3s4h5d6c7s" or "9H3CTSQSAS".
    /// case-insensitive; symbols alternate rank, suit.
    pub fn parse(id: usize, input: &str) -> Result<Self, CardError> {
        let symbols = input
            .trim()
            .chars()
            .map(|c| c.to_ascii_uppercase())
            .collect::<Vec<char>>();
        if symbols.len() != HAND_SIZE * 2 {
            return Err(CardError::MalformedHand(input.to_string()));
        }
        let cards = symbols
            .chunks(2)
            .map(|pair| Card::try_from((pair[0], pair[1])))
            .collect::<Result<Vec<Card>, CardError>>()?;
        match <[Card; HAND_SIZE]>::try_from(cards) {
            Ok(cards) => Ok(Self { id, cards }),
            Err(_) => Err(CardError::MalformedHand(input.to_string())),
        }
    }

    /// the five ranks, ascending. one of the two sorted views
    /// classification runs on.
    pub fn ranks(&self) -> [Rank; HAND_SIZE] {
        let mut ranks = self.cards.map(|c| c.rank());
        ranks.sort();
        ranks
    }

    /// the five suits, ascending by symbol. the other sorted view.
    pub fn suits(&self) -> [Suit; HAND_SIZE] {
        let mut suits = self.cards.map(|c| c.suit());
        suits.sort();
        suits
    }

    /// every card's rank is in the 2..=14 domain. holds by construction
    /// for enum-backed cards; kept for callers that want the explicit
    /// contract check before classifying.
    pub fn has_valid_ranks(&self) -> bool {
        self.cards
            .iter()
            .all(|c| (2..=14).contains(&c.rank().value()))
    }

    /// every card's suit is one of the four. holds by construction.
    pub fn has_valid_suits(&self) -> bool {
        self.cards.iter().all(|c| Suit::all().contains(&c.suit()))
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.cards {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrips_display() {
        let hand = Hand::parse(1, "3S4H5D6C7S").unwrap();
        assert_eq!(hand.to_string(), "3S4H5D6C7S");
        assert_eq!(hand.id(), 1);
    }

    #[test]
    fn parse_normalizes_case() {
        let lower = Hand::parse(1, "3s4h5d6c7s").unwrap();
        let upper = Hand::parse(1, "3S4H5D6C7S").unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!(
            Hand::parse(1, "3s4h5d6c"),
            Err(CardError::MalformedHand("3s4h5d6c".to_string()))
        );
    }

    #[test]
    fn parse_rejects_bad_symbols() {
        assert_eq!(
            Hand::parse(1, "1s4h5d6c7s"),
            Err(CardError::InvalidRank('1'))
        );
        assert_eq!(
            Hand::parse(1, "3x4h5d6c7s"),
            Err(CardError::InvalidSuit('X'))
        );
    }

    #[test]
    fn sorted_views() {
        let hand = Hand::parse(1, "9H3CTSQSAS").unwrap();
        assert_eq!(
            hand.ranks(),
            [Rank::Three, Rank::Nine, Rank::Ten, Rank::Queen, Rank::Ace]
        );
        assert_eq!(
            hand.suits(),
            [
                Suit::Club,
                Suit::Heart,
                Suit::Spade,
                Suit::Spade,
                Suit::Spade
            ]
        );
    }

    #[test]
    fn views_ignore_deal_order() {
        let a = Hand::parse(1, "AS2H3D4C5S").unwrap();
        let b = Hand::parse(2, "5S4C3D2HAS").unwrap();
        assert_eq!(a.ranks(), b.ranks());
        assert_eq!(a.suits(), b.suits());
    }

    #[test]
    fn random_hands_are_valid() {
        for id in 0..100 {
            let hand = Hand::random(id);
            assert!(hand.has_valid_ranks());
            assert!(hand.has_valid_suits());
        }
    }
}
