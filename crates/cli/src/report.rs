// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Text report of a hand analysis.
use pokerlens_cards::Card;
use pokerlens_eval::{Analysis, OutsStatus};

/// Prints the analysis to stdout.
pub fn print(hole: &[Card], board: &[Card], analysis: &Analysis) {
    println!("{:<11}{}", "Hole:", join(hole));
    println!("{:<11}{}", "Board:", join(board));

    let hand = &analysis.hand;
    println!("{:<11}{} (rank {})", "Hand:", hand.name, hand.rank());
    if !hand.cards.is_empty() {
        println!("{:<11}{}", "Best five:", join(&hand.cards));
    }

    for draw in &hand.draws {
        println!("{:<11}{}", "Draw:", draw.description);
    }

    println!("{:<11}{}", "Outs:", analysis.outs.description);
    if analysis.outs.status == OutsStatus::Ready {
        for (category, cards) in analysis.outs.by_category.iter().rev() {
            println!("{:<11}{category}: {}", "", join(cards));
        }
    }

    println!("{:<11}{}", "Odds:", analysis.probability.description);

    if analysis.threats.threats.is_empty() {
        println!("{:<11}{}", "Threats:", analysis.threats.description);
    }

    for threat in &analysis.threats.threats {
        println!("{:<11}{threat}", "Threat:");
    }
}

fn join(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "-".to_string();
    }

    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_cards() {
        let cards = ["AS", "10H"]
            .iter()
            .map(|c| c.parse::<Card>().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(join(&cards), "A♠ 10♥");
        assert_eq!(join(&[]), "-");
    }
}
