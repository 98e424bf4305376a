// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem CLI, plays a hand or evaluates cards.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::error;

use holdem_eval::{Card, HandValue};

pub mod table;

#[derive(Debug, Parser)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plays a hand from the deal to the showdown.
    Play {
        /// The players nicknames.
        #[clap(
            long = "player",
            short,
            default_values_t = [String::from("Alice"), String::from("Bob")]
        )]
        players: Vec<String>,
        /// The players starting chips.
        #[clap(long, short, default_value_t = 1_000)]
        chips: u32,
        /// Seed for the deck shuffle.
        #[clap(long, short)]
        seed: Option<u64>,
    },
    /// Evaluates the best hand out of 5 to 7 cards like `AS KD 10h 9c 2s`.
    Eval {
        /// The cards to evaluate.
        #[clap(required = true)]
        cards: Vec<Card>,
    },
}

fn eval(cards: &[Card]) -> Result<()> {
    let (value, best) = HandValue::eval_with_best_hand(cards)?;

    println!("Cards:     {}", table::format_cards(cards));
    println!("Hand:      {}", value.rank());
    println!("Tiebreak:  {:?}", value.tiebreak().as_slice());
    println!("Best hand: {}", table::format_cards(&best));

    Ok(())
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let res = match cli.command {
        Command::Play {
            players,
            chips,
            seed,
        } => table::run(table::Config {
            players,
            chips,
            seed,
        }),
        Command::Eval { cards } => eval(&cards),
    };

    if let Err(e) = res {
        error!("{e}");
        std::process::exit(1);
    }
}
