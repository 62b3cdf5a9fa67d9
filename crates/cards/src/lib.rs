// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pokerlens cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use pokerlens_cards::{Card, Color, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(ah.value(), 14);
//! assert_eq!(ah.color(), Color::Red);
//!
//! let ts: Card = "10♠".parse().unwrap();
//! assert_eq!(ts, Card::new(Rank::Ten, Suit::Spades));
//! ```
//!
//! and a [Deck] type for shuffling, dealing and listing the cards that are
//! not yet in play:
//!
//! ```
//! # use pokerlens_cards::{Card, Deck, Rank, Suit};
//! let hole = [
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::King, Suit::Spades),
//! ];
//! let unseen = Deck::without(&hole);
//! assert_eq!(unseen.count(), 50);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
mod deck;

pub use cards::{Card, CardError, Color, Rank, Suit};
pub use deck::Deck;
