// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand classifier.
//!
//! Classifies the best five cards out of a player two hole cards and up to five
//! community cards into one of eleven categories, from high card to five of a
//! kind. On joker tables up to two jokers play as wildcards, each joker keeps its
//! identity and the rank it stands in for is recorded in the [EvaluatedCard]
//! returned with the [Hand]:
//!
//! ```
//! # use showdown_eval::*;
//! let board = ["KS", "KD", "9C", "4H", "2S"].map(|c| c.parse::<Card>().unwrap());
//! let hole = [Card::joker(Suit::Spades), "QD".parse().unwrap()];
//!
//! let hand = classify(&hole, &board).unwrap();
//! assert_eq!(hand.category(), HandCategory::ThreeOfAKind);
//! assert_eq!(hand.cards()[2].effective_rank(), Some(Rank::King));
//! assert_eq!(hole[0].rank(), Rank::Joker);
//! ```
//!
//! Hands compare with [Hand::cmp_strength], by category first and then card by
//! card, each category [Rule] can also be used on its own with a [Pool].
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod classify;
pub use classify::{Classifier, TableVariant, classify};

mod error;
pub use error::EvalError;

mod hand;
pub use hand::{EvaluatedCard, Hand, HandCategory};

mod pool;
pub use pool::Pool;

pub mod rules;
pub use rules::Rule;

pub mod wildcard;

// Reexport cards types.
pub use showdown_cards::{Card, Deck, Rank, Suit};
