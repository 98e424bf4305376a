// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards parsing from text like `AS`, `10h` or `Q♦`.
use std::str::FromStr;

use crate::{Card, Rank, Suit};

/// Error returned when parsing a card.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCardError {
    /// Empty input.
    #[error("empty card")]
    Empty,
    /// Unknown rank.
    #[error("invalid rank in card '{0}'")]
    InvalidRank(String),
    /// Unknown suit.
    #[error("invalid suit in card '{0}'")]
    InvalidSuit(String),
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s.to_ascii_uppercase().as_str() {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(ParseCardError::InvalidRank(s.to_string())),
        };

        Ok(rank)
    }
}

impl TryFrom<char> for Suit {
    type Error = ParseCardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'C' | 'c' | '♣' => Ok(Suit::Clubs),
            'D' | 'd' | '♦' => Ok(Suit::Diamonds),
            'H' | 'h' | '♥' => Ok(Suit::Hearts),
            'S' | 's' | '♠' => Ok(Suit::Spades),
            _ => Err(ParseCardError::InvalidSuit(c.to_string())),
        }
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit = chars.next_back().ok_or(ParseCardError::Empty)?;
        let suit = Suit::try_from(suit).map_err(|_| ParseCardError::InvalidSuit(s.to_string()))?;
        let rank = chars
            .as_str()
            .parse::<Rank>()
            .map_err(|_| ParseCardError::InvalidRank(s.to_string()))?;

        Ok(Card::new(rank, suit))
    }
}

/// Parses a list of cards separated by spaces or commas.
///
/// ```
/// # use holdem_cards::*;
/// let cards = parse_cards("AS, KS 10s").unwrap();
/// assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Spades));
/// ```
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}
