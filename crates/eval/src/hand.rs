// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand evaluation results.
use serde::Serialize;
use std::{cmp::Ordering, fmt};

use pokerlens_cards::{Card, Rank};

/// The hand category, ordered by strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum HandCategory {
    /// High card.
    HighCard = 1,
    /// One pair.
    Pair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// A straight of the same suit.
    StraightFlush,
    /// A Ten to Ace straight flush.
    RoyalFlush,
}

impl HandCategory {
    /// Returns all the categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            Pair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    /// The category rank, 1 for a high card up to 10 for a royal flush.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// The category label.
    pub fn label(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }

    /// Builds the hand name for this category given the kickers, for example
    /// "Pair of Kings" or "Full House, 7s over Kings".
    pub(crate) fn name(self, kickers: &[u8]) -> String {
        let name = |idx: usize| kicker_rank(kickers, idx).map(Rank::name).unwrap_or("?");
        let plural = |idx: usize| kicker_rank(kickers, idx).map(Rank::plural).unwrap_or("?");
        let label = self.label();

        match self {
            HandCategory::RoyalFlush => label.to_string(),
            HandCategory::StraightFlush | HandCategory::Straight | HandCategory::Flush => {
                format!("{label}, {} high", name(0))
            }
            HandCategory::FourOfAKind | HandCategory::ThreeOfAKind => {
                format!("{label}, {}", plural(0))
            }
            HandCategory::FullHouse => format!("{label}, {} over {}", plural(0), plural(1)),
            HandCategory::TwoPair => format!("{label}, {} and {}", plural(0), plural(1)),
            HandCategory::Pair => format!("Pair of {}", plural(0)),
            HandCategory::HighCard => format!("{label}, {}", name(0)),
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn kicker_rank(kickers: &[u8], idx: usize) -> Option<Rank> {
    kickers.get(idx).copied().and_then(Rank::from_value)
}

/// The kind of an incomplete draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DrawKind {
    /// Four cards of the same suit.
    FlushDraw,
    /// Four consecutive ranks open on both ends.
    StraightDraw,
    /// A straight draw with a single playable rank.
    Gutshot,
}

/// An incomplete draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawInfo {
    /// The draw kind.
    pub kind: DrawKind,
    /// A human readable description of the draw.
    pub description: String,
    /// Number of cards needed to complete the draw.
    pub cards_needed: u8,
}

/// The result of a hand evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandResult {
    /// The hand category, `None` when there are no cards to evaluate.
    pub category: Option<HandCategory>,
    /// The hand name, e.g. "Pair of Kings".
    pub name: String,
    /// Tie breaking values, most significant first.
    pub kickers: Vec<u8>,
    /// The five cards making the hand, empty for partial hands.
    pub cards: Vec<Card>,
    /// Draws detected on partial hands.
    pub draws: Vec<DrawInfo>,
    /// True if there is at least one draw.
    pub is_drawing: bool,
}

impl HandResult {
    /// The result for an empty set of cards.
    pub fn no_cards() -> Self {
        Self {
            category: None,
            name: "No cards".to_string(),
            kickers: Vec::new(),
            cards: Vec::new(),
            draws: Vec::new(),
            is_drawing: false,
        }
    }

    pub(crate) fn new(category: HandCategory, kickers: Vec<u8>) -> Self {
        Self {
            category: Some(category),
            name: category.name(&kickers),
            kickers,
            cards: Vec::new(),
            draws: Vec::new(),
            is_drawing: false,
        }
    }

    /// The hand rank, 0 for no cards, 1 for a high card up to 10 for a royal flush.
    pub fn rank(&self) -> u8 {
        self.category.map(HandCategory::value).unwrap_or(0)
    }

    /// Compares the strength of two hands.
    ///
    /// The higher rank wins, on equal ranks the kickers are compared in order
    /// and the first difference decides. Hands with equal compared kickers are
    /// a tie.
    pub fn compare(&self, other: &HandResult) -> Ordering {
        self.rank().cmp(&other.rank()).then_with(|| {
            self.kickers
                .iter()
                .zip(&other.kickers)
                .map(|(l, r)| l.cmp(r))
                .find(|o| o.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }

    /// Checks if this hand improves on `current`.
    ///
    /// A hand improves on another if its rank is higher or, for equal ranks
    /// above a high card, if its first kicker that differs is higher.
    pub fn is_improvement_over(&self, current: &HandResult) -> bool {
        match self.rank().cmp(&current.rank()) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal if self.rank() > 1 => self
                .kickers
                .iter()
                .zip(&current.kickers)
                .find(|(new, cur)| new != cur)
                .is_some_and(|(new, cur)| new > cur),
            Ordering::Equal => false,
        }
    }
}

impl fmt::Display for HandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
