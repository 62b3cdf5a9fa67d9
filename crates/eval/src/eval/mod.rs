// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator ranks every 5 cards subset of a 5, 6, or 7 cards hand and
//! keeps the best one. Hands with fewer than 5 cards get a partial analysis
//! from the ranks multiplicities together with the flush and straight draws
//! that are one card away.
//!
//! The best subset is selected according to [SubsetSelection], by default the
//! evaluator keeps the first subset with the highest rank without looking at
//! kickers, use [SubsetSelection::BestKicker] to compare kickers too.
use log::trace;
use serde::Serialize;

use pokerlens_cards::Card;

use crate::{
    combinations,
    hand::{HandCategory, HandResult},
    rank::{Groups, rank_five},
};

mod draws;
pub use draws::detect_draws;

/// How to select the best 5 cards subset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum SubsetSelection {
    /// Keep the first subset with the highest rank, ignoring kickers.
    #[default]
    FirstMatch,
    /// Keep the subset with the highest rank and the best kickers.
    BestKicker,
}

/// Evaluator configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EvalConfig {
    /// Best subset selection.
    pub selection: SubsetSelection,
}

/// A hand evaluator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    config: EvalConfig,
}

impl Evaluator {
    /// Creates an evaluator with the given configuration.
    pub fn new(config: EvalConfig) -> Self {
        Self { config }
    }

    /// The evaluator configuration.
    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Evaluates a hand.
    ///
    /// With 5 or more cards returns the best ranked 5 cards hand, with 1 to 4
    /// cards returns a partial hand with draws, and with no cards returns a
    /// result with rank 0.
    pub fn evaluate(&self, cards: &[Card]) -> HandResult {
        let res = match cards.len() {
            0 => HandResult::no_cards(),
            1..=4 => partial_hand(cards),
            _ => self.best_five(cards),
        };

        trace!("Evaluated {} cards: {} rank {}", cards.len(), res, res.rank());
        res
    }

    fn best_five(&self, cards: &[Card]) -> HandResult {
        let mut best: Option<HandResult> = None;

        for subset in combinations(cards, 5) {
            let res = rank_five(&subset);
            let is_better = match &best {
                None => true,
                Some(best) => match self.config.selection {
                    SubsetSelection::FirstMatch => res.rank() > best.rank(),
                    SubsetSelection::BestKicker => res.compare(best).is_gt(),
                },
            };

            if is_better {
                trace!("Best subset {:?} {}", subset, res);
                best = Some(res);
            }
        }

        best.unwrap_or_else(HandResult::no_cards)
    }
}

/// Evaluates a hand with the default evaluator.
///
/// ```
/// # use pokerlens_eval::{evaluate_hand, Card};
/// let cards = ["7H", "7D", "7S", "2C", "9D"]
///     .iter()
///     .map(|c| c.parse::<Card>().unwrap())
///     .collect::<Vec<_>>();
/// let res = evaluate_hand(&cards);
/// assert_eq!(res.rank(), 4);
/// assert_eq!(res.name, "Three of a Kind, 7s");
/// ```
pub fn evaluate_hand(cards: &[Card]) -> HandResult {
    Evaluator::default().evaluate(cards)
}

fn partial_hand(cards: &[Card]) -> HandResult {
    let groups = Groups::new(cards);
    let category = groups.category();

    // Straights and flushes need 5 cards.
    debug_assert!(category <= HandCategory::FourOfAKind);

    let mut res = HandResult::new(category, groups.values);
    res.draws = detect_draws(cards);
    res.is_drawing = !res.draws.is_empty();
    res
}
