// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Errors returned when parsing cards from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The rank symbol is not one of `2..10, J, Q, K, A`.
    #[error("invalid rank '{0}'")]
    InvalidRank(String),
    /// The suit symbol is not one of `♠ ♥ ♦ ♣` or `S H D C`.
    #[error("invalid suit '{0}'")]
    InvalidSuit(String),
    /// The text is too short to contain a rank and a suit.
    #[error("invalid card '{0}'")]
    InvalidCard(String),
}

/// A Poker card.
///
/// Cards are identified by the (rank, suit) pair, two cards with the same rank
/// and suit are the same card.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a rank and a suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Create a card from a rank symbol (`"2"`..`"10"`, `"J"`, `"Q"`, `"K"`, `"A"`)
    /// and a suit symbol (`"♠"`, `"♥"`, `"♦"`, `"♣"` or their letters).
    ///
    /// ```
    /// # use pokerlens_cards::{Card, Rank, Suit};
    /// let card = Card::from_symbols("10", "♠").unwrap();
    /// assert_eq!(card, Card::new(Rank::Ten, Suit::Spades));
    /// assert_eq!(card.value(), 10);
    /// ```
    pub fn from_symbols(rank: &str, suit: &str) -> Result<Card, CardError> {
        let rank = Rank::from_symbol(rank).ok_or_else(|| CardError::InvalidRank(rank.into()))?;
        let suit = Suit::from_symbol(suit).ok_or_else(|| CardError::InvalidSuit(suit.into()))?;
        Ok(Card::new(rank, suit))
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// The numeric rank value, 2 to 14 with the Ace high.
    #[inline]
    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    /// The display color of this card.
    pub fn color(&self) -> Color {
        self.suit.color()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses compact card text such as `AS`, `10♠`, `Th` or `qd`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (idx, _) = s
            .char_indices()
            .last()
            .filter(|(idx, _)| *idx > 0)
            .ok_or_else(|| CardError::InvalidCard(s.to_string()))?;

        // A bare rank such as `10` is missing the suit.
        if Suit::from_symbol(&s[idx..]).is_none() && Rank::from_symbol(s).is_some() {
            return Err(CardError::InvalidCard(s.to_string()));
        }

        Card::from_symbols(&s[..idx], &s[idx..])
    }
}

/// Card rank.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks from Deuce to Ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The numeric value of this rank, 2 for a Deuce up to 14 for an Ace.
    #[inline]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the rank for a numeric value in 2..=14.
    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::ranks().find(|r| r.value() == value)
    }

    /// Parses a rank symbol, accepts `10` and `T` for a Ten.
    pub fn from_symbol(s: &str) -> Option<Rank> {
        let rank = match s.trim().to_ascii_uppercase().as_str() {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return None,
        };

        Some(rank)
    }

    /// The rank symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Rank::Deuce => "2",
            Rank::Trey => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    /// The rank name used in hand descriptions, e.g. "King" or "7".
    pub fn name(self) -> &'static str {
        match self {
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
            _ => self.symbol(),
        }
    }

    /// The plural rank name, e.g. "Kings" or "7s".
    pub fn plural(self) -> &'static str {
        match self {
            Rank::Deuce => "2s",
            Rank::Trey => "3s",
            Rank::Four => "4s",
            Rank::Five => "5s",
            Rank::Six => "6s",
            Rank::Seven => "7s",
            Rank::Eight => "8s",
            Rank::Nine => "9s",
            Rank::Ten => "10s",
            Rank::Jack => "Jacks",
            Rank::Queen => "Queens",
            Rank::King => "Kings",
            Rank::Ace => "Aces",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Card suit.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Suit {
    /// Spades suit.
    Spades,
    /// Hearts suit.
    Hearts,
    /// Diamonds suit.
    Diamonds,
    /// Clubs suit.
    Clubs,
}

impl Suit {
    /// Returns all suits in enumeration order: spades, hearts, diamonds, clubs.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs].into_iter()
    }

    /// Parses a suit glyph or letter (case insensitive).
    pub fn from_symbol(s: &str) -> Option<Suit> {
        let suit = match s.trim() {
            "♠" | "S" | "s" => Suit::Spades,
            "♥" | "H" | "h" => Suit::Hearts,
            "♦" | "D" | "d" => Suit::Diamonds,
            "♣" | "C" | "c" => Suit::Clubs,
            _ => return None,
        };

        Some(suit)
    }

    /// The suit glyph.
    pub fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }

    /// The suit letter.
    pub fn letter(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }

    /// The display color of this suit.
    pub fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Spades | Suit::Clubs => Color::Black,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card display color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Hearts and diamonds.
    Red,
    /// Spades and clubs.
    Black,
}
