// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand values and their ordering.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, hash};

/// The hand category, from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl HandRank {
    /// Returns all ranks from weakest to strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{name}")
    }
}

/// The rank strengths that break ties between hands with the same [HandRank].
///
/// Strengths are stored inline, the first strength is the most significant and
/// two tiebreaks compare lexicographically.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Tiebreak {
    ranks: [u8; 5],
    len: u8,
}

impl Tiebreak {
    /// The maximum number of strengths in a tiebreak.
    pub const MAX_LEN: usize = 5;

    pub(crate) fn new(ranks: &[u8]) -> Self {
        let len = ranks.len().min(Self::MAX_LEN);
        let mut tiebreak = Self {
            ranks: [0; Self::MAX_LEN],
            len: len as u8,
        };

        tiebreak.ranks[..len].copy_from_slice(&ranks[..len]);
        tiebreak
    }

    /// The tiebreak strengths, most significant first.
    pub fn as_slice(&self) -> &[u8] {
        &self.ranks[..self.len as usize]
    }
}

/// Error returned when a tiebreak has too many strengths.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("tiebreak has {0} strengths, expected at most {max}", max = Tiebreak::MAX_LEN)]
pub struct TiebreakLenError(pub usize);

impl TryFrom<Vec<u8>> for Tiebreak {
    type Error = TiebreakLenError;

    fn try_from(ranks: Vec<u8>) -> Result<Self, Self::Error> {
        if ranks.len() > Self::MAX_LEN {
            return Err(TiebreakLenError(ranks.len()));
        }

        Ok(Self::new(&ranks))
    }
}

impl From<Tiebreak> for Vec<u8> {
    fn from(tiebreak: Tiebreak) -> Self {
        tiebreak.as_slice().to_vec()
    }
}

impl PartialEq for Tiebreak {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for Tiebreak {}

impl hash::Hash for Tiebreak {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl PartialOrd for Tiebreak {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tiebreak {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

/// A hand value.
///
/// Values compare by rank first and then by tiebreak, equal values are a tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandValue {
    rank: HandRank,
    tiebreak: Tiebreak,
}

impl HandValue {
    pub(crate) fn new(rank: HandRank, tiebreak: &[u8]) -> Self {
        Self {
            rank,
            tiebreak: Tiebreak::new(tiebreak),
        }
    }

    /// The hand rank.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The hand tiebreak.
    pub fn tiebreak(&self) -> &Tiebreak {
        &self.tiebreak
    }

    /// Checks if this hand beats the other hand, false for a tie.
    pub fn is_better_than(&self, other: &HandValue) -> bool {
        self.cmp(other) == Ordering::Greater
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.rank, self.tiebreak.as_slice())
    }
}
