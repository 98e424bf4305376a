// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all7
// ...
// High Card:       23294460
// One  Pair:       58627800
// Two Pairs:       31433400
// Three of a Kind: 6461620
// Straight:        6180020
// Flush:           4047644
// Full House:      3473184
// Four of a Kind:  224848
// Straight Flush:  41584
// ```

use std::time::Instant;

use holdem_eval::{subset::for_each_ksubset, *};

#[rustfmt::skip]
fn main() -> Result<(), EvalError> {
    let cards = Deck::default().into_iter().collect::<Vec<_>>();

    // Evaluate all 133M hands.
    let now = Instant::now();
    let mut counts = [0usize; 9];
    let mut hand = Vec::with_capacity(7);
    let mut res = Ok(());

    for_each_ksubset(cards.len(), 7, |idx| {
        hand.clear();
        hand.extend(idx.iter().map(|&i| cards[i]));

        match HandValue::eval(&hand) {
            Ok(value) => counts[value.rank() as usize] += 1,
            Err(e) => res = Err(e),
        }
    });

    res?;

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    println!("High Card:       {}", counts[HandRank::HighCard as usize]);
    println!("One  Pair:       {}", counts[HandRank::OnePair as usize]);
    println!("Two Pairs:       {}", counts[HandRank::TwoPair as usize]);
    println!("Three of a Kind: {}", counts[HandRank::ThreeOfAKind as usize]);
    println!("Straight:        {}", counts[HandRank::Straight as usize]);
    println!("Flush:           {}", counts[HandRank::Flush as usize]);
    println!("Full House:      {}", counts[HandRank::FullHouse as usize]);
    println!("Four of a Kind:  {}", counts[HandRank::FourOfAKind as usize]);
    println!("Straight Flush:  {}", counts[HandRank::StraightFlush as usize]);

    Ok(())
}
