// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown between players hands.
//!
//! ```
//! # use holdem_eval::{*, showdown::*};
//! let board = parse_cards("KS QS JS 7D 2C").unwrap();
//! let alice = [Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::Ten, Suit::Spades)];
//! let bob = [Card::new(Rank::King, Suit::Hearts), Card::new(Rank::King, Suit::Diamonds)];
//!
//! let values = eval_players(&board, &[alice, bob]).unwrap();
//! assert_eq!(values[0].rank(), HandRank::StraightFlush);
//! assert_eq!(winners(&values), vec![0]);
//! ```
use crate::{Card, EvalError, HandValue};

/// Evaluates each player hole cards with the board cards.
pub fn eval_players(
    board: &[Card],
    hole_cards: &[[Card; 2]],
) -> Result<Vec<HandValue>, EvalError> {
    hole_cards
        .iter()
        .map(|hole| {
            let mut cards = Vec::with_capacity(hole.len() + board.len());
            cards.extend_from_slice(hole);
            cards.extend_from_slice(board);
            HandValue::eval(&cards)
        })
        .collect()
}

/// Returns the indices of the hands with the best value, more than one if
/// there is a tie and none if there are no hands.
pub fn winners(values: &[HandValue]) -> Vec<usize> {
    let Some(best) = values.iter().max() else {
        return Vec::new();
    };

    values
        .iter()
        .enumerate()
        .filter(|(_, v)| !best.is_better_than(v))
        .map(|(idx, _)| idx)
        .collect()
}
