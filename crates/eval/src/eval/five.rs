// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand classifier.
use holdem_cards::{Card, Rank};

use super::{EvalError, HandRank, HandValue};

/// Strengths of the ace to five straight.
const WHEEL: [u8; 5] = [14, 5, 4, 3, 2];

/// The ace counts as one in a wheel tiebreak.
const WHEEL_HIGH: u8 = 5;

impl HandValue {
    /// Classifies a 5 cards hand.
    ///
    /// Returns an error if the hand doesn't have exactly 5 cards.
    pub fn eval5(cards: &[Card]) -> Result<Self, EvalError> {
        let cards = <&[Card; 5]>::try_from(cards).map_err(|_| EvalError::InvalidInput {
            expected: "exactly 5",
            found: cards.len(),
        })?;

        Ok(Self::classify(cards))
    }

    pub(crate) fn classify(cards: &[Card; 5]) -> Self {
        // Strengths sorted high to low.
        let mut ranks = (*cards).map(|c| c.rank().strength());
        ranks.sort_unstable_by(|a, b| b.cmp(a));

        let is_flush = cards.iter().all(|c| c.suit() == cards[0].suit());
        let straight_high = straight_high(&ranks);

        if let (true, Some(high)) = (is_flush, straight_high) {
            return Self::new(HandRank::StraightFlush, &[high]);
        }

        let (groups, num_groups) = rank_groups(&ranks);
        let groups = &groups[..num_groups];

        // Ranks of the groups, the tiebreak for all the paired hands.
        let mut grouped = [0u8; 5];
        for (r, (_, rank)) in grouped.iter_mut().zip(groups) {
            *r = *rank;
        }
        let grouped = &grouped[..num_groups];

        let largest = groups[0].0;
        let second = groups.get(1).map(|g| g.0).unwrap_or(0);

        match (largest, second, is_flush, straight_high) {
            // A five of a kind is only possible with duplicated cards.
            (5, ..) => Self::new(HandRank::FourOfAKind, &[grouped[0], grouped[0]]),
            (4, ..) => Self::new(HandRank::FourOfAKind, grouped),
            (3, 2, ..) => Self::new(HandRank::FullHouse, grouped),
            (_, _, true, _) => Self::new(HandRank::Flush, &ranks),
            (_, _, _, Some(high)) => Self::new(HandRank::Straight, &[high]),
            (3, ..) => Self::new(HandRank::ThreeOfAKind, grouped),
            (2, 2, ..) => Self::new(HandRank::TwoPair, grouped),
            (2, ..) => Self::new(HandRank::OnePair, grouped),
            _ => Self::new(HandRank::HighCard, &ranks),
        }
    }
}

/// Returns the straight high card strength for strengths sorted high to low.
fn straight_high(ranks: &[u8; 5]) -> Option<u8> {
    if ranks.windows(2).all(|w| w[0] == w[1] + 1) {
        Some(ranks[0])
    } else if *ranks == WHEEL {
        Some(WHEEL_HIGH)
    } else {
        None
    }
}

/// Groups strengths by count.
///
/// Returns the (count, strength) groups ordered by count and then by strength,
/// both high to low, and the number of groups.
fn rank_groups(ranks: &[u8; 5]) -> ([(u8, u8); 5], usize) {
    let mut counts = [0u8; Rank::Ace as usize + 3];
    for &r in ranks {
        counts[r as usize] += 1;
    }

    let mut groups = [(0u8, 0u8); 5];
    let mut num_groups = 0;
    for strength in (Rank::Deuce.strength()..=Rank::Ace.strength()).rev() {
        let count = counts[strength as usize];
        if count > 0 {
            groups[num_groups] = (count, strength);
            num_groups += 1;
        }
    }

    // Stable sort keeps strengths high to low within the same count.
    groups[..num_groups].sort_by(|a, b| b.0.cmp(&a.0));
    (groups, num_groups)
}
