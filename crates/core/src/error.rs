// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Settlement errors.
use thiserror::Error;

use showdown_cards::Card;
use showdown_eval::EvalError;

use crate::{Chips, PlayerId};

/// A round that cannot be settled, the caller must not pay out any chips.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettleError {
    /// A player cards cannot be classified.
    #[error("player {player_id}: {source}")]
    Eval {
        /// The player with the malformed cards.
        player_id: PlayerId,
        /// The classifier error.
        source: EvalError,
    },
    /// A pot is contested by a player without a ranked hand.
    #[error("player {0} contests a pot without a hand")]
    MissingHand(PlayerId),
    /// A pot has chips but nobody to win them.
    #[error("pot of {0} chips without contestants")]
    NoContestants(Chips),
    /// The pots don't add up to the chips in the ledger.
    #[error("pots total {pots} doesn't match ledger total {ledger}")]
    Conservation {
        /// The sum of the pots.
        pots: Chips,
        /// The sum of the ledger bets.
        ledger: Chips,
    },
    /// The ledger doesn't add up to the declared pot.
    #[error("ledger total {ledger} doesn't match declared total {declared}")]
    LedgerTotal {
        /// The sum of the ledger bets.
        ledger: Chips,
        /// The declared total.
        declared: Chips,
    },
    /// The same player has been seated twice.
    #[error("duplicate player {0}")]
    DuplicatePlayer(PlayerId),
    /// A bet or a pot exceeds the chips that can be counted.
    #[error("chips total overflows")]
    Overflow,
    /// The same card is held by two players or by a player and the board.
    #[error("card {0} dealt twice")]
    DuplicateCard(Card),
}
