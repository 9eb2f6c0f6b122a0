// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker round settlement.
//!
//! Splits a round bets into a main pot and side pots, ranks the hands of the
//! players still in the hand and pays each pot to its winners:
//!
//! ```
//! # use showdown_core::*;
//! let board = ["7S", "7D", "2C", "5H", "9S"].map(|c| c.parse::<Card>().unwrap());
//!
//! let mut round = Round::new(board.to_vec());
//! round.add_player("p1", ["7C".parse()?, "3D".parse()?], Chips::new(100))?;
//! round.add_player("p2", ["KS".parse()?, "KD".parse()?], Chips::new(300))?;
//!
//! let settlement = Engine::default().settle(&round)?;
//! assert_eq!(settlement.pots.len(), 2);
//! assert_eq!(settlement.pots[0].winners, [PlayerId::from("p1")]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

mod config;
pub use config::{OddChips, SettleConfig};

mod engine;
pub use engine::{Engine, HandPayoff, PlayerHand, Round, Seat, Settlement};

mod error;
pub use error::SettleError;

mod ledger;
pub use ledger::BetLedger;

mod poker;
pub use poker::{Chips, PlayerId};

mod pots;
pub use pots::{Payout, PotKind, SidePot, build_pots};

mod showdown;
pub use showdown::resolve;

// Reexport eval types.
pub use showdown_eval::{Card, EvaluatedCard, Hand, HandCategory, Rank, Suit, TableVariant};
