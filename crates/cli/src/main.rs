// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pokerlens command line hand analyzer.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{debug, error};

use pokerlens_cards::{Card, Deck};
use pokerlens_eval::{EvalConfig, Evaluator, SubsetSelection};

mod report;

#[derive(Debug, Parser)]
struct Cli {
    /// The hole cards, e.g. "AS KS" or "A♠,K♠".
    #[clap(long, short = 'H', default_value = "")]
    hole: String,
    /// The community cards, e.g. "QS JS 2H".
    #[clap(long, short, default_value = "")]
    board: String,
    /// Deal random hole cards and this number of community cards.
    #[clap(
        long,
        short,
        conflicts_with_all = ["hole", "board"],
        value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    random: Option<u8>,
    /// Compare kickers when selecting the best 5 cards.
    #[clap(long)]
    best_kicker: bool,
    /// Print the analysis as JSON.
    #[clap(long)]
    json: bool,
    /// Enable debug logs.
    #[clap(long, short)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    if let Err(e) = run(cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let (hole, board) = match cli.random {
        Some(board_size) => deal_random(board_size as usize)?,
        None => (
            parse_cards(&cli.hole).context("Invalid hole cards")?,
            parse_cards(&cli.board).context("Invalid board cards")?,
        ),
    };

    check_cards(&hole, &board)?;

    let selection = if cli.best_kicker {
        SubsetSelection::BestKicker
    } else {
        SubsetSelection::FirstMatch
    };

    let evaluator = Evaluator::new(EvalConfig { selection });
    debug!("Analyzing {hole:?} {board:?} with {:?}", evaluator.config());

    let analysis = evaluator.analyze(&hole, &board);

    if cli.json {
        let json = serde_json::to_string_pretty(&analysis).context("Cannot serialize analysis")?;
        println!("{json}");
    } else {
        report::print(&hole, &board, &analysis);
    }

    Ok(())
}

/// Parses whitespace or comma separated cards.
fn parse_cards(s: &str) -> Result<Vec<Card>> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(|t| t.parse::<Card>().with_context(|| format!("Cannot parse '{t}'")))
        .collect()
}

/// Checks the cards counts and that every card is used once.
fn check_cards(hole: &[Card], board: &[Card]) -> Result<()> {
    if hole.len() > 2 {
        bail!("Expected at most 2 hole cards, got {}", hole.len());
    }

    if board.len() > 5 {
        bail!("Expected at most 5 board cards, got {}", board.len());
    }

    let cards = hole.iter().chain(board).collect::<Vec<_>>();
    for (idx, card) in cards.iter().enumerate() {
        if cards[..idx].contains(card) {
            bail!("Card {card} is used more than once");
        }
    }

    Ok(())
}

fn deal_random(board_size: usize) -> Result<(Vec<Card>, Vec<Card>)> {
    let mut deck = Deck::new_and_shuffled(&mut rand::rng());
    let mut deal = |n: usize| {
        (0..n)
            .map(|_| deck.deal().context("The deck is empty"))
            .collect::<Result<Vec<_>>>()
    };

    let hole = deal(2)?;
    let board = deal(board_size)?;
    Ok((hole, board))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokerlens_cards::{Rank, Suit};

    #[test]
    fn parse_cards_list() {
        let cards = parse_cards("AS, 10♥  kd").unwrap();
        assert_eq!(
            cards,
            vec![
                Card::new(Rank::Ace, Suit::Spades),
                Card::new(Rank::Ten, Suit::Hearts),
                Card::new(Rank::King, Suit::Diamonds),
            ]
        );

        assert!(parse_cards("").unwrap().is_empty());
        assert!(parse_cards("AS ZZ").is_err());
    }

    #[test]
    fn duplicated_cards() {
        let hole = parse_cards("AS KS").unwrap();
        let board = parse_cards("QS AS 2H").unwrap();
        assert!(check_cards(&hole, &board).is_err());

        let board = parse_cards("QS JS 2H").unwrap();
        assert!(check_cards(&hole, &board).is_ok());
    }

    #[test]
    fn too_many_cards() {
        let hole = parse_cards("AS KS QS").unwrap();
        assert!(check_cards(&hole, &[]).is_err());

        let board = parse_cards("2H 3H 4H 5H 6H 7H").unwrap();
        assert!(check_cards(&[], &board).is_err());
    }

    #[test]
    fn random_deal() {
        let (hole, board) = deal_random(4).unwrap();
        assert_eq!(hole.len(), 2);
        assert_eq!(board.len(), 4);
        assert!(check_cards(&hole, &board).is_ok());
    }

    #[test]
    fn cli_args() {
        let cli = Cli::try_parse_from(["pokerlens", "-H", "AS KS", "-b", "QS JS 2H", "--json"])
            .unwrap();
        assert_eq!(cli.hole, "AS KS");
        assert!(cli.json);
        assert!(!cli.best_kicker);

        assert!(Cli::try_parse_from(["pokerlens", "--random", "6"]).is_err());
        assert!(Cli::try_parse_from(["pokerlens", "--random", "3", "-H", "AS KS"]).is_err());
    }
}
