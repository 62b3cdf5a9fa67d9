// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pokerlens Texas Hold'em hand evaluator.
//!
//! Evaluates hands of up to 7 cards by ranking every 5 cards subset, analyzes
//! hands with fewer than 5 cards for flush and straight draws, counts the
//! outs that improve a hand, estimates the probability to improve, and lists
//! the threats visible on the board.
//!
//! To evaluate a hand and count its outs:
//!
//! ```
//! # use pokerlens_eval::*;
//! let parse = |s: &str| {
//!     s.split_whitespace()
//!         .map(|c| c.parse::<Card>().unwrap())
//!         .collect::<Vec<_>>()
//! };
//!
//! let hole = parse("7H 7D");
//! let board = parse("7S 2C 9D");
//!
//! let hand = evaluate_hand(&[hole.as_slice(), board.as_slice()].concat());
//! assert_eq!(hand.category, Some(HandCategory::ThreeOfAKind));
//!
//! let outs = calculate_outs(&hole, &board);
//! assert_eq!(outs.outs, outs.out_cards.len());
//! ```
//!
//! All the functions are pure and keep no state between calls, an [Evaluator]
//! can be shared between threads.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod analysis;
mod combinations;
pub mod eval;
mod hand;
mod outs;
mod rank;
mod threats;

pub use analysis::{Analysis, analyze};
pub use combinations::{Combinations, binomial, combinations};
pub use eval::{EvalConfig, Evaluator, SubsetSelection, detect_draws, evaluate_hand};
pub use hand::{DrawInfo, DrawKind, HandCategory, HandResult};
pub use outs::{OutsInfo, OutsStatus, WinProbability, calculate_outs, calculate_win_probability};
pub use rank::rank_five;
pub use threats::{ThreatsInfo, analyze_threats};

// Reexport cards types.
pub use pokerlens_cards::{Card, Color, Deck, Rank, Suit};
