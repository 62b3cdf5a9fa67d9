// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Board threats visible to every player.
use serde::Serialize;

use pokerlens_cards::{Card, Suit};

/// The threats that the community cards show to any player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreatsInfo {
    /// The threats labels.
    pub threats: Vec<String>,
    /// A human readable description.
    pub description: String,
}

/// Finds the flush, straight, and paired board threats on the community cards.
///
/// Needs at least 3 community cards. Note that a board without a pair always
/// reports a possible two pair or trips.
///
/// ```
/// # use pokerlens_eval::{analyze_threats, Card};
/// let board = ["2S", "3S", "4S", "9H", "9D"]
///     .iter()
///     .map(|c| c.parse::<Card>().unwrap())
///     .collect::<Vec<_>>();
/// let info = analyze_threats(&board);
/// assert_eq!(info.threats.len(), 3);
/// ```
pub fn analyze_threats(community: &[Card]) -> ThreatsInfo {
    if community.len() < 3 {
        return ThreatsInfo {
            threats: Vec::new(),
            description: "Need at least 3 community cards".to_string(),
        };
    }

    let mut threats = Vec::new();

    let flush_suit = Suit::suits()
        .map(|suit| (suit, community.iter().filter(|c| c.suit() == suit).count()))
        .find(|(_, count)| *count >= 3);
    if let Some((suit, count)) = flush_suit {
        threats.push(format!("Possible flush ({count} {suit} on board)"));
    }

    let mut values = community.iter().map(Card::value).collect::<Vec<_>>();
    values.sort_unstable();

    let has_pair = values.windows(2).any(|w| w[0] == w[1]);

    values.dedup();
    let is_connected = values.windows(3).any(|w| w[2] - w[0] == 2);
    let is_wheel = [2, 3, 14].iter().all(|v| values.contains(v));
    if is_connected || is_wheel {
        threats.push("Possible straight".to_string());
    }

    if has_pair {
        threats.push("Possible full house or quads".to_string());
    } else {
        threats.push("Possible two pair or trips".to_string());
    }

    let description = format!("{} potential threats on the board", threats.len());
    ThreatsInfo {
        threats,
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn not_enough_cards() {
        let info = analyze_threats(&cards("2S 3S"));
        assert!(info.threats.is_empty());
        assert_eq!(info.description, "Need at least 3 community cards");
    }

    #[test]
    fn flush_and_paired_board() {
        let info = analyze_threats(&cards("2♠ 3♠ 4♠ 9♥ 9♦"));
        assert_eq!(
            info.threats,
            vec![
                "Possible flush (3 ♠ on board)",
                "Possible straight",
                "Possible full house or quads",
            ]
        );
        assert!(!info.threats.iter().any(|t| t.contains("two pair")));
        assert_eq!(info.description, "3 potential threats on the board");
    }

    #[test]
    fn unpaired_board_always_reports_two_pair() {
        let info = analyze_threats(&cards("2C 7D KH"));
        assert_eq!(info.threats, vec!["Possible two pair or trips"]);
    }

    #[test]
    fn straight_threats() {
        let info = analyze_threats(&cards("5C 6D 7H"));
        assert!(info.threats.contains(&"Possible straight".to_string()));

        let info = analyze_threats(&cards("AC 2D 3H"));
        assert!(info.threats.contains(&"Possible straight".to_string()));

        // Duplicated ranks don't break the sequence.
        let info = analyze_threats(&cards("5C 5D 6H 7S"));
        assert!(info.threats.contains(&"Possible straight".to_string()));

        let info = analyze_threats(&cards("5C 6D 8H"));
        assert!(!info.threats.contains(&"Possible straight".to_string()));
    }

    #[test]
    fn four_suited_board() {
        let info = analyze_threats(&cards("2H 7H 9H KH"));
        assert_eq!(info.threats[0], "Possible flush (4 ♥ on board)");
    }
}
