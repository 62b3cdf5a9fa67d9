// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Flush and straight draws detection.
use pokerlens_cards::{Card, Rank, Suit};

use crate::{
    combinations,
    hand::{DrawInfo, DrawKind},
};

/// Detects one card away flush and straight draws.
///
/// Returns at most one flush draw followed by at most one straight draw,
/// the first found for each kind.
///
/// ```
/// # use pokerlens_eval::{detect_draws, Card, DrawKind};
/// let cards = ["AS", "KS", "QS", "JS", "2H"]
///     .iter()
///     .map(|c| c.parse::<Card>().unwrap())
///     .collect::<Vec<_>>();
/// let draws = detect_draws(&cards);
/// assert_eq!(draws[0].kind, DrawKind::FlushDraw);
/// assert!(draws[0].description.contains("4 ♠"));
/// ```
pub fn detect_draws(cards: &[Card]) -> Vec<DrawInfo> {
    flush_draw(cards)
        .into_iter()
        .chain(straight_draw(cards))
        .collect()
}

fn flush_draw(cards: &[Card]) -> Option<DrawInfo> {
    Suit::suits()
        .find(|&suit| cards.iter().filter(|c| c.suit() == suit).count() == 4)
        .map(|suit| DrawInfo {
            kind: DrawKind::FlushDraw,
            description: format!("Flush draw (4 {suit}), need 1 more"),
            cards_needed: 1,
        })
}

fn straight_draw(cards: &[Card]) -> Option<DrawInfo> {
    let mut values = cards.iter().map(Card::value).collect::<Vec<_>>();
    values.sort_unstable();
    values.dedup();

    // Four consecutive values, a Deuce or an Ace on either end leaves only
    // one side open.
    if let Some(w) = values.windows(4).find(|w| w[3] - w[0] == 3) {
        let (low, high) = (w[0], w[3]);
        let range = format!("{}-{}", symbol(low), symbol(high));
        let draw = if low > Rank::Deuce.value() && high < Rank::Ace.value() {
            DrawInfo {
                kind: DrawKind::StraightDraw,
                description: format!("Open-ended straight draw ({range})"),
                cards_needed: 1,
            }
        } else {
            DrawInfo {
                kind: DrawKind::Gutshot,
                description: format!("One-sided straight draw ({range})"),
                cards_needed: 1,
            }
        };

        return Some(draw);
    }

    // Three values spanning four ranks miss exactly one inside value.
    combinations(&values, 3)
        .find(|t| t[2] - t[0] == 3)
        .map(|t| {
            let missing = if t[1] == t[0] + 1 { t[0] + 2 } else { t[0] + 1 };
            let rank = Rank::from_value(missing).map(Rank::name).unwrap_or("?");
            let article = if missing == 8 { "an" } else { "a" };
            DrawInfo {
                kind: DrawKind::Gutshot,
                description: format!("Gutshot straight draw, need {article} {rank}"),
                cards_needed: 1,
            }
        })
}

fn symbol(value: u8) -> &'static str {
    Rank::from_value(value).map(Rank::symbol).unwrap_or("?")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn flush_draw_on_five_cards() {
        let draws = detect_draws(&cards("A♠ K♠ Q♠ J♠ 2♥"));
        assert_eq!(draws.len(), 2);
        assert_eq!(draws[0].kind, DrawKind::FlushDraw);
        assert!(draws[0].description.contains("4 ♠"));
        assert_eq!(draws[0].cards_needed, 1);

        // J-Q-K-A can only be completed by a Ten.
        assert_eq!(draws[1].kind, DrawKind::Gutshot);
        assert_eq!(draws[1].description, "One-sided straight draw (J-A)");
    }

    #[test]
    fn flush_draw_needs_exactly_four() {
        assert!(detect_draws(&cards("2H 7H 9H")).is_empty());

        let draws = detect_draws(&cards("2H 7H 9H KH"));
        assert_eq!(draws.len(), 1);
        assert_eq!(draws[0].description, "Flush draw (4 ♥), need 1 more");

        let draws = detect_draws(&cards("2H 7H 9H KH AH"));
        assert!(draws.iter().all(|d| d.kind != DrawKind::FlushDraw));
    }

    #[test]
    fn open_ended_straight_draw() {
        let draws = detect_draws(&cards("9C 10D JH QS"));
        assert_eq!(draws.len(), 1);
        assert_eq!(draws[0].kind, DrawKind::StraightDraw);
        assert_eq!(draws[0].description, "Open-ended straight draw (9-Q)");
    }

    #[test]
    fn one_sided_straight_draw() {
        let draws = detect_draws(&cards("2C 3D 4H 5S"));
        assert_eq!(draws.len(), 1);
        assert_eq!(draws[0].kind, DrawKind::Gutshot);
        assert_eq!(draws[0].description, "One-sided straight draw (2-5)");
    }

    #[test]
    fn gutshot_straight_draw() {
        let draws = detect_draws(&cards("5C 6D 8H"));
        assert_eq!(draws.len(), 1);
        assert_eq!(draws[0].kind, DrawKind::Gutshot);
        assert_eq!(draws[0].description, "Gutshot straight draw, need a 7");

        let draws = detect_draws(&cards("5C 7D 8H"));
        assert_eq!(draws[0].description, "Gutshot straight draw, need a 6");

        let draws = detect_draws(&cards("7C 9D 10H"));
        assert_eq!(draws[0].description, "Gutshot straight draw, need an 8");

        // First triple in ascending order wins.
        let draws = detect_draws(&cards("2C 3D 5H 9S JH QD"));
        assert_eq!(draws.len(), 1);
        assert_eq!(draws[0].description, "Gutshot straight draw, need a 4");
    }

    #[test]
    fn no_draws() {
        assert!(detect_draws(&[]).is_empty());
        assert!(detect_draws(&cards("2C 7D KH")).is_empty());
        assert!(detect_draws(&cards("2C 2D 2H 2S")).is_empty());
    }

    #[test]
    fn combined_draws() {
        let draws = detect_draws(&cards("9H 10H JH QH"));
        assert_eq!(draws.len(), 2);
        assert_eq!(draws[0].kind, DrawKind::FlushDraw);
        assert_eq!(draws[1].kind, DrawKind::StraightDraw);
    }
}
