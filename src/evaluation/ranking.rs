use crate::cards::rank::Rank;

/// The ten hand categories, declared strongest-first.
///
/// Only the category ranks a hand. Kickers never break ties here: two
/// hands in the same category compare equal, and the showdown leaves
/// their relative order unspecified.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub enum Ranking {
    RoyalFlush,
    StraightFlush,
    FourOfAKind,
    FullHouse,
    Flush,
    Straight,
    ThreeOfAKind,
    TwoPair,
    OnePair,
    HighCard(Rank),
}

impl Ranking {
    /// strength order: 1 is Royal Flush, 10 is High Card
    pub fn order(&self) -> u8 {
        match self {
            Ranking::RoyalFlush => 1,
            Ranking::StraightFlush => 2,
            Ranking::FourOfAKind => 3,
            Ranking::FullHouse => 4,
            Ranking::Flush => 5,
            Ranking::Straight => 6,
            Ranking::ThreeOfAKind => 7,
            Ranking::TwoPair => 8,
            Ranking::OnePair => 9,
            Ranking::HighCard(_) => 10,
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::RoyalFlush => write!(f, "Royal Flush"),
            Ranking::StraightFlush => write!(f, "Straight Flush"),
            Ranking::FourOfAKind => write!(f, "Four of a Kind"),
            Ranking::FullHouse => write!(f, "Full House"),
            Ranking::Flush => write!(f, "Flush"),
            Ranking::Straight => write!(f, "Straight"),
            Ranking::ThreeOfAKind => write!(f, "Three of a Kind"),
            Ranking::TwoPair => write!(f, "Two Pair"),
            Ranking::OnePair => write!(f, "One Pair"),
            Ranking::HighCard(rank) => write!(f, "High Card - {{{}}}", rank),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_span_one_through_ten() {
        let rankings = [
            Ranking::RoyalFlush,
            Ranking::StraightFlush,
            Ranking::FourOfAKind,
            Ranking::FullHouse,
            Ranking::Flush,
            Ranking::Straight,
            Ranking::ThreeOfAKind,
            Ranking::TwoPair,
            Ranking::OnePair,
            Ranking::HighCard(Rank::Ace),
        ];
        for (i, ranking) in rankings.iter().enumerate() {
            assert_eq!(ranking.order(), i as u8 + 1);
        }
    }

    #[test]
    fn declaration_order_is_strength_order() {
        assert!(Ranking::RoyalFlush < Ranking::StraightFlush);
        assert!(Ranking::OnePair < Ranking::HighCard(Rank::Two));
    }

    #[test]
    fn high_card_label_names_the_rank() {
        assert_eq!(
            Ranking::HighCard(Rank::Ace).to_string(),
            "High Card - {A}"
        );
    }
}
