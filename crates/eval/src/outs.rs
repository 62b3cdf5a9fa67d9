// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Outs counting and improvement probability.
//!
//! Outs are found by adding each unseen card to the hand and checking if the
//! new hand improves on the current one. The improvement probability uses the
//! simplified rule of 4 on the flop and rule of 2 on the turn instead of an
//! exact computation.
use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;

use pokerlens_cards::{Card, Deck};

use crate::{eval::Evaluator, hand::HandCategory};

/// Outs calculation status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OutsStatus {
    /// The outs have been computed.
    Ready,
    /// There are not enough cards to compute the outs.
    NeedMoreCards,
}

/// The unseen cards that improve a hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutsInfo {
    /// Whether the outs have been computed.
    pub status: OutsStatus,
    /// The number of improving cards.
    pub outs: usize,
    /// The improving cards in deck order.
    pub out_cards: Vec<Card>,
    /// The improving cards grouped by the category of the improved hand.
    pub by_category: BTreeMap<HandCategory, Vec<Card>>,
    /// A human readable description.
    pub description: String,
}

impl OutsInfo {
    fn need_more_cards() -> Self {
        Self {
            status: OutsStatus::NeedMoreCards,
            outs: 0,
            out_cards: Vec::new(),
            by_category: BTreeMap::new(),
            description: "Need hole cards and community cards".to_string(),
        }
    }
}

/// An estimate of the probability to improve a hand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WinProbability {
    /// Probability percentage, 0 to 100.
    pub probability: f64,
    /// The number of outs used for the estimate.
    pub outs: usize,
    /// A human readable description.
    pub description: String,
}

impl Evaluator {
    /// Computes the unseen cards that improve the hand made by 2 hole cards
    /// and at least 1 community card.
    pub fn calculate_outs(&self, hole: &[Card], community: &[Card]) -> OutsInfo {
        if hole.len() != 2 || community.is_empty() {
            debug!(
                "Outs need 2 hole cards and community cards, got {} and {}",
                hole.len(),
                community.len()
            );
            return OutsInfo::need_more_cards();
        }

        let mut cards = Vec::with_capacity(hole.len() + community.len() + 1);
        cards.extend_from_slice(hole);
        cards.extend_from_slice(community);

        let current = self.evaluate(&cards);

        let mut out_cards = Vec::new();
        let mut by_category = BTreeMap::<HandCategory, Vec<Card>>::new();

        for candidate in Deck::without(&cards) {
            cards.push(candidate);
            let hand = self.evaluate(&cards);
            cards.pop();

            if hand.is_improvement_over(&current) {
                out_cards.push(candidate);
                if let Some(category) = hand.category {
                    by_category.entry(category).or_default().push(candidate);
                }
            }
        }

        let outs = out_cards.len();
        debug!("Found {outs} outs for {current}");

        let description = if outs == 0 {
            "No improving cards".to_string()
        } else {
            format!("{outs} cards improve {current}")
        };

        OutsInfo {
            status: OutsStatus::Ready,
            outs,
            out_cards,
            by_category,
            description,
        }
    }

    /// Estimates the probability to improve the hand after the flop or the turn.
    ///
    /// After the flop the estimate is `4 * outs - (outs - 8)` percent, after
    /// the turn it is `2 * outs / unseen` where `unseen` is the number of cards
    /// not in the hand, both capped at 100%.
    pub fn calculate_win_probability(&self, hole: &[Card], community: &[Card]) -> WinProbability {
        if !matches!(community.len(), 3 | 4) {
            return WinProbability {
                probability: 0.0,
                outs: 0,
                description: "Probability is estimated after the flop or the turn".to_string(),
            };
        }

        let info = self.calculate_outs(hole, community);
        if info.status == OutsStatus::NeedMoreCards {
            return WinProbability {
                probability: 0.0,
                outs: 0,
                description: info.description,
            };
        }

        let outs = info.outs as f64;
        let (probability, description) = if community.len() == 3 {
            let probability = (outs * 4.0 - (outs - 8.0)).min(100.0);
            let description = format!(
                "About {probability:.0}% to improve by the river with {} outs",
                info.outs
            );
            (probability, description)
        } else {
            let unseen = Deck::SIZE - hole.len() - community.len();
            let probability = (outs * 2.0 / unseen as f64 * 100.0).min(100.0);
            let description = format!(
                "About {probability:.0}% to improve on the river with {} outs",
                info.outs
            );
            (probability, description)
        };

        debug!("{description}");

        WinProbability {
            probability,
            outs: info.outs,
            description,
        }
    }
}

/// Computes the outs with the default evaluator.
pub fn calculate_outs(hole: &[Card], community: &[Card]) -> OutsInfo {
    Evaluator::default().calculate_outs(hole, community)
}

/// Estimates the probability to improve with the default evaluator.
pub fn calculate_win_probability(hole: &[Card], community: &[Card]) -> WinProbability {
    Evaluator::default().calculate_win_probability(hole, community)
}
