// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate define types to create cards, including the jokers used by wildcard
//! tables:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let joker = Card::joker(Suit::Spades);
//! assert!(joker.is_joker());
//! assert_eq!("AH".parse::<Card>().unwrap(), ah);
//! ```
//!
//! and a [Deck] type for enumerating and sampling hands, for example to count all
//! the 5 cards hands:
//!
//! ```no_run
//! # use showdown_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
//!
//! to sample 10 random 7-cards hands from a deck with two jokers:
//!
//! ```
//! # use showdown_cards::Deck;
//! let mut counter = 0;
//! Deck::with_jokers(2).sample(&mut rand::rng(), 10, 7, |hand| {
//!     assert_eq!(hand.len(), 7);
//!     counter += 1;
//! });
//! assert_eq!(counter, 10);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
pub use card::{Card, ParseCardError, Rank, Suit};

mod deck;
pub use deck::Deck;
