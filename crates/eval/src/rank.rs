// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand ranking.
use ahash::AHashMap;

use pokerlens_cards::{Card, Rank};

use crate::hand::{HandCategory, HandResult};

/// The wheel straight values, the Ace plays low.
const WHEEL: [u8; 5] = [2, 3, 4, 5, 14];

/// Cards values grouped by multiplicity.
#[derive(Debug)]
pub(crate) struct Groups {
    /// Multiplicities sorted in descending order.
    pub counts: Vec<usize>,
    /// Distinct values sorted by descending multiplicity and then by
    /// descending value.
    pub values: Vec<u8>,
}

impl Groups {
    pub fn new(cards: &[Card]) -> Self {
        let mut by_value = AHashMap::<u8, usize>::with_capacity(cards.len());
        for card in cards {
            *by_value.entry(card.value()).or_default() += 1;
        }

        let mut groups = by_value.into_iter().collect::<Vec<_>>();
        groups.sort_by(|(lv, lc), (rv, rc)| rc.cmp(lc).then_with(|| rv.cmp(lv)));

        Self {
            counts: groups.iter().map(|(_, c)| *c).collect(),
            values: groups.iter().map(|(v, _)| *v).collect(),
        }
    }

    /// The largest multiplicity.
    pub fn max_count(&self) -> usize {
        self.counts.first().copied().unwrap_or(0)
    }

    /// The second largest multiplicity.
    pub fn second_count(&self) -> usize {
        self.counts.get(1).copied().unwrap_or(0)
    }

    /// Classifies the rank multiplicities into pairs, trips, etc. without
    /// considering straights and flushes.
    pub fn category(&self) -> HandCategory {
        match (self.max_count(), self.second_count()) {
            (4.., _) => HandCategory::FourOfAKind,
            (3, 2..) => HandCategory::FullHouse,
            (3, _) => HandCategory::ThreeOfAKind,
            (2, 2) => HandCategory::TwoPair,
            (2, _) => HandCategory::Pair,
            _ => HandCategory::HighCard,
        }
    }
}

/// Ranks a five cards hand.
///
/// Panics if `cards` doesn't contain exactly 5 cards.
///
/// ```
/// # use pokerlens_eval::{rank_five, Card, HandCategory};
/// let cards = ["10S", "JS", "QS", "KS", "AS"]
///     .iter()
///     .map(|c| c.parse::<Card>().unwrap())
///     .collect::<Vec<_>>();
/// let res = rank_five(&cards);
/// assert_eq!(res.category, Some(HandCategory::RoyalFlush));
/// assert_eq!(res.rank(), 10);
/// ```
pub fn rank_five(cards: &[Card]) -> HandResult {
    assert_eq!(cards.len(), 5, "rank_five expects 5 cards");

    let mut values = cards.iter().map(Card::value).collect::<Vec<_>>();
    values.sort_unstable();

    let is_flush = cards.iter().all(|c| c.suit() == cards[0].suit());
    let straight_high = if values == WHEEL {
        Some(Rank::Five.value())
    } else if values.windows(2).all(|w| w[1] == w[0] + 1) {
        Some(values[4])
    } else {
        None
    };

    let groups = Groups::new(cards);
    let descending = values.iter().rev().copied().collect::<Vec<_>>();

    let (category, kickers) = match (is_flush, straight_high) {
        (true, Some(high)) if values[0] == Rank::Ten.value() => {
            (HandCategory::RoyalFlush, vec![high])
        }
        (true, Some(high)) => (HandCategory::StraightFlush, vec![high]),
        _ if groups.max_count() == 4 => (HandCategory::FourOfAKind, groups.values),
        _ if groups.category() == HandCategory::FullHouse => {
            (HandCategory::FullHouse, groups.values)
        }
        (true, None) => (HandCategory::Flush, descending),
        (false, Some(high)) => (HandCategory::Straight, vec![high]),
        _ => match groups.category() {
            HandCategory::HighCard => (HandCategory::HighCard, descending),
            category => (category, groups.values),
        },
    };

    let mut res = HandResult::new(category, kickers);
    res.cards = cards.to_vec();
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn rank(s: &str) -> HandResult {
        rank_five(&cards(s))
    }

    #[test]
    fn royal_flush() {
        let res = rank("10♠ J♠ Q♠ K♠ A♠");
        assert_eq!(res.category, Some(HandCategory::RoyalFlush));
        assert_eq!(res.rank(), 10);
        assert_eq!(res.kickers, vec![14]);
        assert_eq!(res.name, "Royal Flush");
    }

    #[test]
    fn straight_flush() {
        let res = rank("5H 6H 7H 8H 9H");
        assert_eq!(res.category, Some(HandCategory::StraightFlush));
        assert_eq!(res.kickers, vec![9]);

        let wheel = rank("AD 2D 3D 4D 5D");
        assert_eq!(wheel.category, Some(HandCategory::StraightFlush));
        assert_eq!(wheel.kickers, vec![5]);
        assert_eq!(wheel.name, "Straight Flush, 5 high");
    }

    #[test]
    fn four_of_a_kind() {
        let res = rank("KS 2H KH KD KC");
        assert_eq!(res.category, Some(HandCategory::FourOfAKind));
        assert_eq!(res.rank(), 8);
        assert_eq!(res.kickers, vec![13, 2]);
    }

    #[test]
    fn full_house() {
        let res = rank("7S KH 7H KD 7C");
        assert_eq!(res.category, Some(HandCategory::FullHouse));
        assert_eq!(res.kickers, vec![7, 13]);
        assert_eq!(res.name, "Full House, 7s over Kings");
    }

    #[test]
    fn flush() {
        let res = rank("2C 9C KC 4C 7C");
        assert_eq!(res.category, Some(HandCategory::Flush));
        assert_eq!(res.kickers, vec![13, 9, 7, 4, 2]);
        assert_eq!(res.name, "Flush, King high");
    }

    #[test]
    fn straight() {
        let res = rank("9S 10H JD QC KS");
        assert_eq!(res.category, Some(HandCategory::Straight));
        assert_eq!(res.kickers, vec![13]);

        let wheel = rank("A♠ 2♥ 3♦ 4♣ 5♠");
        assert_eq!(wheel.category, Some(HandCategory::Straight));
        assert_eq!(wheel.rank(), 5);
        assert_eq!(wheel.kickers, vec![5]);

        // No wrap around straights.
        let res = rank("QS KH AD 2C 3S");
        assert_eq!(res.category, Some(HandCategory::HighCard));
    }

    #[test]
    fn three_of_a_kind() {
        let res = rank("7♥ 7♦ 7♠ 2♣ 9♦");
        assert_eq!(res.category, Some(HandCategory::ThreeOfAKind));
        assert_eq!(res.rank(), 4);
        assert_eq!(res.kickers, vec![7, 9, 2]);
        assert_eq!(res.name, "Three of a Kind, 7s");
    }

    #[test]
    fn two_pair() {
        let res = rank("7S KH 7H KD 2C");
        assert_eq!(res.category, Some(HandCategory::TwoPair));
        assert_eq!(res.kickers, vec![13, 7, 2]);
    }

    #[test]
    fn pair() {
        let res = rank("KS KH 2D 9C 7S");
        assert_eq!(res.category, Some(HandCategory::Pair));
        assert_eq!(res.kickers, vec![13, 9, 7, 2]);
        assert_eq!(res.name, "Pair of Kings");
    }

    #[test]
    fn high_card() {
        let res = rank("AS 9H 2D 4C 7S");
        assert_eq!(res.category, Some(HandCategory::HighCard));
        assert_eq!(res.rank(), 1);
        assert_eq!(res.kickers, vec![14, 9, 7, 4, 2]);
        assert_eq!(res.cards.len(), 5);
    }

    #[test]
    #[should_panic]
    fn wrong_number_of_cards() {
        rank_five(&cards("AS 9H 2D 4C"));
    }

    // Ranks all 2.6M five cards hands, slow in debug mode.
    #[test]
    #[ignore]
    fn all_five_cards_hands() {
        use crate::combinations;
        use pokerlens_cards::Deck;

        let deck = Deck::default().into_iter().collect::<Vec<_>>();
        let mut counts = [0usize; 11];
        for hand in combinations(&deck, 5) {
            counts[rank_five(&hand).rank() as usize] += 1;
        }

        assert_eq!(
            counts,
            [0, 1_302_540, 1_098_240, 123_552, 54_912, 10_200, 5_108, 3_744, 624, 36, 4]
        );
    }
}
