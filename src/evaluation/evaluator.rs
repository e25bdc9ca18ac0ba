use super::ranking::Ranking;
use crate::cards::hand::Hand;
use crate::cards::hand::HAND_SIZE;
use crate::cards::rank::Rank;

/// the one straight where the Ace plays low
const WHEEL: [u8; HAND_SIZE] = [2, 3, 4, 5, 14];

/// Classifies a hand into its best category.
///
/// Built once per hand from the sorted views: the ascending ranks, a
/// rank frequency table, and the flush flag. Every predicate reads these
/// precomputed fields rather than the raw cards. The k-of-a-kind family
/// all falls out of the frequency table: with five cards, a count of 4
/// is quads, 3+2 is a boat, two 2s are two pair, and so on.
pub struct Evaluator {
    ranks: [Rank; HAND_SIZE],
    counts: [u8; 13],
    flush: bool,
}

impl From<&Hand> for Evaluator {
    fn from(hand: &Hand) -> Self {
        let ranks = hand.ranks();
        let suits = hand.suits();
        let mut counts = [0u8; 13];
        for rank in ranks {
            counts[rank.value() as usize - 2] += 1;
        }
        let flush = suits.iter().all(|s| *s == suits[0]);
        Self {
            ranks,
            counts,
            flush,
        }
    }
}

impl Evaluator {
    /// the unique best-matching category. the cascade runs strongest
    /// first and the first hit wins; High Card is the total catch-all.
    pub fn ranking(&self) -> Ranking {
        None.or_else(|| self.find_royal_flush())
            .or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .unwrap_or_else(|| Ranking::HighCard(self.high()))
    }

    ///

    fn find_royal_flush(&self) -> Option<Ranking> {
        (self.flush && self.values() == [10, 11, 12, 13, 14]).then_some(Ranking::RoyalFlush)
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        (self.flush && self.is_straight()).then_some(Ranking::StraightFlush)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        // >= because duplicates are accepted input: a rank can appear
        // five times, and four of them still sit in one window
        (self.counts.iter().any(|&count| count >= 4)).then_some(Ranking::FourOfAKind)
    }
    fn find_3_oak_2_oak(&self) -> Option<Ranking> {
        (self.kinds(3) == 1 && self.kinds(2) == 1).then_some(Ranking::FullHouse)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.flush.then_some(Ranking::Flush)
    }
    fn find_straight(&self) -> Option<Ranking> {
        self.is_straight().then_some(Ranking::Straight)
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        (self.kinds(3) == 1).then_some(Ranking::ThreeOfAKind)
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        (self.kinds(2) == 2).then_some(Ranking::TwoPair)
    }
    fn find_2_oak(&self) -> Option<Ranking> {
        (self.kinds(2) == 1).then_some(Ranking::OnePair)
    }

    ///

    fn values(&self) -> [u8; HAND_SIZE] {
        self.ranks.map(|r| r.value())
    }
    fn high(&self) -> Rank {
        self.ranks[HAND_SIZE - 1]
    }
    /// how many distinct ranks appear exactly n times
    fn kinds(&self, n: u8) -> usize {
        self.counts.iter().filter(|&&count| count == n).count()
    }
    fn is_straight(&self) -> bool {
        let values = self.values();
        values == WHEEL || values.windows(2).all(|w| w[0] + 1 == w[1])
    }
}
