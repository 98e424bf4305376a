// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem Poker hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. A 5 cards hand is classified
//! into a [HandRank] and a tiebreak sequence, for 6 and 7 cards hands all the
//! 5 cards subsets are classified and the best one is the hand value.
//!
//! To use the evaluator create a hand and use [HandValue] to evaluate the hand
//! and get its rank:
//!
//! ```
//! # use holdem_eval::*;
//! // 2C, 3C, .., JC
//! let cards = Deck::default().into_iter().take(10).collect::<Vec<_>>();
//! let v1 = HandValue::eval(&cards[0..5]).unwrap();
//! let v2 = HandValue::eval(&cards[5..]).unwrap();
//! assert_eq!(v1.rank(), HandRank::StraightFlush);
//! assert!(v2.is_better_than(&v1));
//! assert!(v2 > v1);
//! ```
//!
//! Hands with less than 5 cards are rejected:
//!
//! ```
//! # use holdem_eval::*;
//! let cards = parse_cards("AS AH AD AC").unwrap();
//! assert!(matches!(
//!     HandValue::eval(&cards),
//!     Err(EvalError::InvalidInput { found: 4, .. })
//! ));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{EvalError, HandRank, HandValue, Tiebreak, TiebreakLenError};

pub mod showdown;
pub mod subset;

// Reexport cards types.
pub use holdem_cards::{Card, Deck, ParseCardError, Rank, Suit, parse_cards};
