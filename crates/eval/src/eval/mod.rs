// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! It provides a [HandValue::eval5] method that classifies exactly five cards,
//! a [HandValue::eval] method that finds the best five cards value out of 5, 6,
//! or 7 cards, and [HandValue::eval_with_best_hand] that also returns the five
//! best cards, useful for UIs to shows a winning hand.
//!
//! Hand values are totally ordered, first by [HandRank] then by the [Tiebreak]
//! ranks, so that two players hands can be compared with
//! [HandValue::is_better_than] or with the comparison operators.

mod best;
mod five;

mod value;
pub use value::{HandRank, HandValue, Tiebreak, TiebreakLenError};

/// Evaluation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// The number of cards doesn't match what the evaluation expects.
    #[error("invalid input: expected {expected} cards, got {found}")]
    InvalidInput {
        /// The expected number of cards.
        expected: &'static str,
        /// The number of cards received.
        found: usize,
    },
}
