use super::evaluator::Evaluator;
use super::ranking::Ranking;
use crate::cards::card::Card;
use crate::cards::hand::Hand;
use crate::cards::hand::HAND_SIZE;
use serde::Serialize;
use std::cmp::Ordering;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// The ranked outcome for one hand. Read-only output of the showdown:
/// the caller's hand id, the original cards, the category label, and the
/// strength order (1 strongest, 10 weakest).
#[derive(Debug, Clone, Serialize)]
pub struct HandResult {
    pub id: usize,
    pub cards: [Card; HAND_SIZE],
    pub label: String,
    pub order: u8,
}

/// heap entry keyed on strength order alone. hands sharing a category
/// compare equal, so their pop order is unspecified.
struct Entry {
    hand: Hand,
    ranking: Ranking,
}

impl Entry {
    fn order(&self) -> u8 {
        self.ranking.order()
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.order() == other.order()
    }
}
impl Eq for Entry {}
impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.order().cmp(&other.order())
    }
}

/// Orders any collection of hands best-to-worst.
pub struct Showdown;

impl Showdown {
    /// classify every hand, then drain a min-heap keyed on strength
    /// order. winner at index 0; output length equals input length, and
    /// empty in is empty out. ties within one category are not broken
    /// further (no kicker comparison).
    pub fn rank(hands: Vec<Hand>) -> Vec<HandResult> {
        let mut heap = hands
            .into_iter()
            .map(|hand| Entry {
                ranking: Evaluator::from(&hand).ranking(),
                hand,
            })
            .map(Reverse)
            .collect::<BinaryHeap<Reverse<Entry>>>();
        let mut results = Vec::with_capacity(heap.len());
        while let Some(Reverse(entry)) = heap.pop() {
            results.push(HandResult {
                id: entry.hand.id(),
                cards: entry.hand.cards(),
                label: entry.ranking.to_string(),
                order: entry.order(),
            });
        }
        results
    }
}
