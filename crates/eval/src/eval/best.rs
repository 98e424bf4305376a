// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best 5 cards hand selection.
use holdem_cards::Card;
use log::{debug, trace};

use super::{EvalError, HandValue};
use crate::subset::for_each_ksubset;

impl HandValue {
    /// The number of cards in a hand.
    pub const HAND_SIZE: usize = 5;

    /// The maximum number of cards a hand can be selected from.
    pub const MAX_CARDS: usize = 7;

    /// Evaluates a 5, 6, or 7 cards hand.
    ///
    /// Returns an error if there are less than 5 or more than 7 cards.
    pub fn eval(cards: &[Card]) -> Result<Self, EvalError> {
        Self::eval_with_best_hand(cards).map(|(value, _)| value)
    }

    /// Evaluates a 5, 6, or 7 cards hand and returns the 5 cards that make the
    /// best hand.
    ///
    /// Returns an error if there are less than 5 or more than 7 cards.
    pub fn eval_with_best_hand(cards: &[Card]) -> Result<(Self, [Card; 5]), EvalError> {
        let invalid_input = || EvalError::InvalidInput {
            expected: "5 to 7",
            found: cards.len(),
        };

        if !(Self::HAND_SIZE..=Self::MAX_CARDS).contains(&cards.len()) {
            return Err(invalid_input());
        }

        // Starts from the first subset value, a placeholder value could beat a
        // real hand.
        let mut best: Option<(HandValue, [Card; 5])> = None;
        for_each_ksubset(cards.len(), Self::HAND_SIZE, |idx| {
            let hand = [
                cards[idx[0]],
                cards[idx[1]],
                cards[idx[2]],
                cards[idx[3]],
                cards[idx[4]],
            ];

            let value = Self::classify(&hand);
            trace!("{hand:?} {value}");

            if best.is_none_or(|(b, _)| value.is_better_than(&b)) {
                best = Some((value, hand));
            }
        });

        let (value, hand) = best.ok_or_else(invalid_input)?;
        debug!("Best hand {hand:?} {value}");
        Ok((value, hand))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HandRank;
    use holdem_cards::{Deck, parse_cards};
    use rand::prelude::*;

    fn eval(cards: &str) -> HandValue {
        HandValue::eval(&parse_cards(cards).unwrap()).unwrap()
    }

    #[test]
    fn best_of_seven() {
        let cards = parse_cards("AS KS QS JS TS 2H 3D").unwrap();
        let (value, hand) = HandValue::eval_with_best_hand(&cards).unwrap();
        assert_eq!(value.rank(), HandRank::StraightFlush);
        assert_eq!(value.tiebreak().as_slice(), &[14]);
        assert_eq!(hand.to_vec(), cards[..5].to_vec());
    }

    #[test]
    fn best_of_seven_picks_highest() {
        // Both a ten high straight and a flush, the flush wins.
        let v = eval("2H 9H 5H 6H 7D 8S TH");
        assert_eq!(v.rank(), HandRank::Flush);
        assert_eq!(v.tiebreak().as_slice(), &[10, 9, 6, 5, 2]);
    }

    #[test]
    fn best_of_seven_kickers() {
        // Two pairs on seven cards keep the best kicker.
        let v = eval("KS KH 7D 7C 2S 2H AD");
        assert_eq!(v.rank(), HandRank::TwoPair);
        assert_eq!(v.tiebreak().as_slice(), &[13, 7, 14]);

        // Two trips make a full house with the lower trips as the pair.
        let v = eval("9S 9H 9D 4C 4S 4H 2D");
        assert_eq!(v.rank(), HandRank::FullHouse);
        assert_eq!(v.tiebreak().as_slice(), &[9, 4]);

        // Wheel with a six makes a six high straight.
        let v = eval("AS 2H 3D 4C 5S 6H KD");
        assert_eq!(v.rank(), HandRank::Straight);
        assert_eq!(v.tiebreak().as_slice(), &[6]);
    }

    #[test]
    fn six_cards() {
        let v = eval("QC QD QH QS 3D 8H");
        assert_eq!(v.rank(), HandRank::FourOfAKind);
        assert_eq!(v.tiebreak().as_slice(), &[12, 8]);
    }

    #[test]
    fn five_cards_match_classifier() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..1_000 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let cards = (0..5).filter_map(|_| deck.deal()).collect::<Vec<_>>();
            assert_eq!(
                HandValue::eval(&cards).unwrap(),
                HandValue::eval5(&cards).unwrap()
            );
        }
    }

    #[test]
    fn seven_cards_is_max_of_subsets() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let mut cards = (0..7).filter_map(|_| deck.deal()).collect::<Vec<_>>();

            let mut expected = None;
            for_each_ksubset(cards.len(), 5, |idx| {
                let hand = idx.iter().map(|&i| cards[i]).collect::<Vec<_>>();
                let value = HandValue::eval5(&hand).unwrap();
                expected = expected.max(Some(value));
            });

            let (value, hand) = HandValue::eval_with_best_hand(&cards).unwrap();
            assert_eq!(Some(value), expected);
            assert_eq!(HandValue::eval5(&hand).unwrap(), value);

            // Cards order doesn't change the value.
            cards.shuffle(&mut rng);
            assert_eq!(HandValue::eval(&cards).unwrap(), value);
        }
    }

    #[test]
    fn totality() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1_000 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let c1 = (0..5).filter_map(|_| deck.deal()).collect::<Vec<_>>();
            let c2 = (0..5).filter_map(|_| deck.deal()).collect::<Vec<_>>();
            let (v1, v2) = (eval5(&c1), eval5(&c2));

            let outcomes = [v1.is_better_than(&v2), v2.is_better_than(&v1), v1 == v2];
            assert_eq!(outcomes.iter().filter(|&&o| o).count(), 1);

            if v1.rank() != v2.rank() {
                assert_eq!(v1.is_better_than(&v2), v1.rank() > v2.rank());
            }
        }
    }

    fn eval5(cards: &[Card]) -> HandValue {
        HandValue::eval5(cards).unwrap()
    }

    #[test]
    fn invalid_input() {
        let cards = parse_cards("AS KS QS JS").unwrap();
        assert_eq!(
            HandValue::eval(&cards),
            Err(EvalError::InvalidInput {
                expected: "5 to 7",
                found: 4
            })
        );

        assert!(HandValue::eval(&[]).is_err());

        let cards = Deck::default().into_iter().take(8).collect::<Vec<_>>();
        assert!(HandValue::eval_with_best_hand(&cards).is_err());
    }

    #[test]
    fn parallel_eval() {
        let mut rng = StdRng::seed_from_u64(3);
        let hands = (0..8)
            .map(|_| {
                let mut deck = Deck::new_and_shuffled(&mut rng);
                (0..7).filter_map(|_| deck.deal()).collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        let serial = hands
            .iter()
            .map(|h| HandValue::eval(h).unwrap())
            .collect::<Vec<_>>();

        let parallel = std::thread::scope(|s| {
            hands
                .iter()
                .map(|h| s.spawn(move || HandValue::eval(h)))
                .collect::<Vec<_>>()
                .into_iter()
                .map(|t| t.join().unwrap().unwrap())
                .collect::<Vec<_>>()
        });

        assert_eq!(serial, parallel);
    }
}
