// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Full hand analysis.
use serde::Serialize;

use pokerlens_cards::Card;

use crate::{
    eval::Evaluator,
    hand::HandResult,
    outs::{OutsInfo, WinProbability},
    threats::{ThreatsInfo, analyze_threats},
};

/// The analysis of the hole and community cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// The best hand made by all the cards.
    pub hand: HandResult,
    /// The cards that improve the hand.
    pub outs: OutsInfo,
    /// The estimated probability to improve.
    pub probability: WinProbability,
    /// The board threats.
    pub threats: ThreatsInfo,
}

impl Evaluator {
    /// Evaluates the hand, the outs, the improvement probability and the board
    /// threats for a set of hole and community cards.
    ///
    /// The cards must be unique.
    pub fn analyze(&self, hole: &[Card], community: &[Card]) -> Analysis {
        let cards = hole.iter().chain(community).copied().collect::<Vec<_>>();

        Analysis {
            hand: self.evaluate(&cards),
            outs: self.calculate_outs(hole, community),
            probability: self.calculate_win_probability(hole, community),
            threats: analyze_threats(community),
        }
    }
}

/// Analyzes the hand with the default evaluator.
pub fn analyze(hole: &[Card], community: &[Card]) -> Analysis {
    Evaluator::default().analyze(hole, community)
}
