// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A table that plays a single hand from the deal to the showdown.
use anyhow::{Result, anyhow, bail};
use log::{debug, info};
use rand::prelude::*;

use holdem_eval::{Card, Deck, HandValue, showdown};

/// Table config.
#[derive(Debug)]
pub struct Config {
    /// The players nicknames.
    pub players: Vec<String>,
    /// The players starting chips.
    pub chips: u32,
    /// The deck shuffle seed, a random seed if none.
    pub seed: Option<u64>,
}

impl Config {
    /// Minimum number of players at the table.
    pub const MIN_PLAYERS: usize = 2;
    /// Maximum number of players at the table.
    pub const MAX_PLAYERS: usize = 10;
}

/// A table player.
#[derive(Debug)]
pub struct Player {
    /// The player identifier.
    pub id: String,
    /// This player nickname.
    pub nickname: String,
    /// This player chips.
    pub chips: u32,
    /// This player private cards.
    pub hole_cards: Option<[Card; 2]>,
}

/// A player hand at showdown.
#[derive(Debug)]
pub struct PlayerHand {
    /// The player index at the table.
    pub player: usize,
    /// The hand value.
    pub value: HandValue,
    /// The five cards that make the hand value.
    pub cards: [Card; 5],
}

/// The showdown result.
#[derive(Debug)]
pub struct Showdown {
    /// The players hands in seat order.
    pub hands: Vec<PlayerHand>,
    /// The winners indices, more than one for a tie.
    pub winners: Vec<usize>,
}

/// The table state.
#[derive(Debug)]
pub struct Table {
    players: Vec<Player>,
    deck: Deck,
    board: Vec<Card>,
}

impl Table {
    /// Creates a table with a shuffled deck.
    pub fn new(config: &Config) -> Result<Self> {
        match config.seed {
            Some(seed) => Self::with_rng(config, &mut StdRng::seed_from_u64(seed)),
            None => Self::with_rng(config, &mut rand::rng()),
        }
    }

    /// Creates a table with user initialized randomness.
    pub fn with_rng<R: Rng>(config: &Config, rng: &mut R) -> Result<Self> {
        let num_players = config.players.len();
        if !(Config::MIN_PLAYERS..=Config::MAX_PLAYERS).contains(&num_players) {
            bail!(
                "Invalid number of players {num_players}, expected {} to {}",
                Config::MIN_PLAYERS,
                Config::MAX_PLAYERS
            );
        }

        for (idx, nickname) in config.players.iter().enumerate() {
            if config.players[..idx].contains(nickname) {
                bail!("Player {nickname} has already joined");
            }
        }

        let players = config
            .players
            .iter()
            .enumerate()
            .map(|(idx, nickname)| Player {
                id: format!("player{}", idx + 1),
                nickname: nickname.clone(),
                chips: config.chips,
                hole_cards: None,
            })
            .collect();

        Ok(Self {
            players,
            deck: Deck::new_and_shuffled(rng),
            board: Vec::with_capacity(5),
        })
    }

    /// The table players.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The board cards.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// Deals two cards to each player.
    pub fn deal_hole_cards(&mut self) -> Result<()> {
        for idx in 0..self.players.len() {
            let cards = [self.deal()?, self.deal()?];
            debug!("Dealt {} to {}", format_cards(&cards), self.players[idx].id);
            self.players[idx].hole_cards = Some(cards);
        }

        Ok(())
    }

    /// Deals the three flop cards.
    pub fn deal_flop(&mut self) -> Result<()> {
        self.deal_board(3)
    }

    /// Deals the turn card.
    pub fn deal_turn(&mut self) -> Result<()> {
        self.deal_board(1)
    }

    /// Deals the river card.
    pub fn deal_river(&mut self) -> Result<()> {
        self.deal_board(1)
    }

    /// Evaluates all the players hands and finds the winners.
    pub fn showdown(&self) -> Result<Showdown> {
        let mut hands = Vec::with_capacity(self.players.len());
        for (player, p) in self.players.iter().enumerate() {
            let Some(hole_cards) = p.hole_cards else {
                bail!("Player {} has no cards", p.nickname);
            };

            let mut cards = hole_cards.to_vec();
            cards.extend_from_slice(&self.board);
            let (value, cards) = HandValue::eval_with_best_hand(&cards)?;
            hands.push(PlayerHand {
                player,
                value,
                cards,
            });
        }

        let values = hands.iter().map(|h| h.value).collect::<Vec<_>>();
        let winners = showdown::winners(&values)
            .into_iter()
            .map(|idx| hands[idx].player)
            .collect();

        Ok(Showdown { hands, winners })
    }

    fn deal_board(&mut self, count: usize) -> Result<()> {
        for _ in 0..count {
            let card = self.deal()?;
            self.board.push(card);
        }

        Ok(())
    }

    fn deal(&mut self) -> Result<Card> {
        self.deck
            .deal()
            .ok_or_else(|| anyhow!("Cannot deal from an empty deck"))
    }
}

/// Formats cards with their suit symbols separated by a space.
pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| format!("{c:#}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Plays a hand and prints what happens at the table.
pub fn run(config: Config) -> Result<()> {
    let mut table = Table::new(&config)?;
    info!("Starting hand with {} players", table.players().len());

    println!("--- New hand ---");
    for p in table.players() {
        println!("{} ({}): {} chips", p.nickname, p.id, p.chips);
    }

    println!("--- Hole cards ---");
    table.deal_hole_cards()?;
    for p in table.players() {
        if let Some(cards) = p.hole_cards {
            println!("{}: {}", p.nickname, format_cards(&cards));
        }
    }

    table.deal_flop()?;
    println!("--- Flop ---\n{}", format_cards(table.board()));

    table.deal_turn()?;
    println!("--- Turn ---\n{}", format_cards(table.board()));

    table.deal_river()?;
    println!("--- River ---\n{}", format_cards(table.board()));

    println!("--- Showdown ---");
    let showdown = table.showdown()?;
    for hand in &showdown.hands {
        println!(
            "{}: {} with {}",
            table.players()[hand.player].nickname,
            hand.value,
            format_cards(&hand.cards)
        );
    }

    let names = showdown
        .winners
        .iter()
        .map(|&idx| table.players()[idx].nickname.as_str())
        .collect::<Vec<_>>();

    match showdown.winners.as_slice() {
        [winner] => {
            let hand = &showdown.hands[*winner];
            println!("{} wins with {}", names[0], hand.value.rank());
        }
        [winner, ..] => {
            let hand = &showdown.hands[*winner];
            println!("Tie between {} with {}", names.join(", "), hand.value.rank());
        }
        [] => bail!("No winner at showdown"),
    }

    info!("Hand completed winners: {}", names.join(", "));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(players: &[&str], seed: u64) -> Config {
        Config {
            players: players.iter().map(|p| p.to_string()).collect(),
            chips: 1_000,
            seed: Some(seed),
        }
    }

    fn deal_all(table: &mut Table) {
        table.deal_hole_cards().unwrap();
        table.deal_flop().unwrap();
        assert_eq!(table.board().len(), 3);
        table.deal_turn().unwrap();
        assert_eq!(table.board().len(), 4);
        table.deal_river().unwrap();
        assert_eq!(table.board().len(), 5);
    }

    #[test]
    fn deal_hand() {
        let mut table = Table::new(&config(&["Alice", "Bob", "Carol"], 1)).unwrap();
        deal_all(&mut table);

        assert_eq!(table.deck.count(), Deck::SIZE - 3 * 2 - 5);
        assert_eq!(table.players()[0].id, "player1");
        assert_eq!(table.players()[2].chips, 1_000);

        // All cards are different.
        let mut cards = table.board().to_vec();
        for p in table.players() {
            cards.extend_from_slice(&p.hole_cards.unwrap());
        }
        cards.sort_by_key(|c| (c.rank(), c.suit()));
        cards.dedup();
        assert_eq!(cards.len(), 11);
    }

    #[test]
    fn seeded_deal() {
        let mut t1 = Table::new(&config(&["Alice", "Bob"], 42)).unwrap();
        let mut t2 = Table::new(&config(&["Alice", "Bob"], 42)).unwrap();
        deal_all(&mut t1);
        deal_all(&mut t2);

        assert_eq!(t1.board(), t2.board());
        assert_eq!(t1.players()[1].hole_cards, t2.players()[1].hole_cards);
    }

    #[test]
    fn showdown_winners() {
        for seed in 0..50 {
            let mut table = Table::new(&config(&["Alice", "Bob", "Carol", "Dave"], seed)).unwrap();
            deal_all(&mut table);

            let showdown = table.showdown().unwrap();
            assert_eq!(showdown.hands.len(), 4);
            assert!(!showdown.winners.is_empty());

            let best = showdown.hands.iter().map(|h| h.value).max().unwrap();
            for hand in &showdown.hands {
                let is_winner = showdown.winners.contains(&hand.player);
                assert_eq!(is_winner, hand.value == best);
                assert_eq!(HandValue::eval5(&hand.cards).unwrap(), hand.value);
            }
        }
    }

    #[test]
    fn showdown_needs_cards() {
        let mut table = Table::new(&config(&["Alice", "Bob"], 3)).unwrap();
        assert!(table.showdown().is_err());

        // Hole cards and no board.
        table.deal_hole_cards().unwrap();
        assert!(table.showdown().is_err());

        table.deal_flop().unwrap();
        assert!(table.showdown().is_ok());
    }

    #[test]
    fn invalid_players() {
        assert!(Table::new(&config(&["Alice"], 1)).is_err());
        assert!(Table::new(&config(&["Alice", "Alice"], 1)).is_err());

        let players = (0..11).map(|i| format!("p{i}")).collect::<Vec<_>>();
        let players = players.iter().map(String::as_str).collect::<Vec<_>>();
        assert!(Table::new(&config(&players, 1)).is_err());
    }

    #[test]
    fn empty_deck() {
        let mut table = Table::new(&config(&["Alice", "Bob"], 5)).unwrap();
        while table.deck.deal().is_some() {}
        assert!(table.deal_flop().is_err());
        assert!(table.deal_hole_cards().is_err());
    }

    #[test]
    fn cards_format() {
        let cards = holdem_eval::parse_cards("AS 10h 2c").unwrap();
        assert_eq!(format_cards(&cards), "A♠ T♥ 2♣");
        assert_eq!(format_cards(&[]), "");
    }
}
