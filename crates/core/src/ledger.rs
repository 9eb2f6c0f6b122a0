// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Round bets ledger.
use serde::{Deserialize, Serialize};

use crate::{Chips, PlayerId, SettleError};

/// The chips each player has put in the pot this round.
///
/// Bets are kept in seat order, the first seat after the button first, folded
/// players stay in the ledger as their chips belong to the pot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetLedger {
    bets: Vec<(PlayerId, Chips)>,
}

impl BetLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ledger from bets in seat order.
    pub fn from_bets<P, I>(bets: I) -> Result<Self, SettleError>
    where
        P: Into<PlayerId>,
        I: IntoIterator<Item = (P, Chips)>,
    {
        let mut ledger = BetLedger::new();
        for (player_id, chips) in bets {
            ledger.add(player_id, chips)?;
        }
        Ok(ledger)
    }

    /// Adds chips to a player bet, a new player is seated after the others.
    pub fn add(
        &mut self,
        player_id: impl Into<PlayerId>,
        chips: Chips,
    ) -> Result<(), SettleError> {
        let player_id = player_id.into();
        match self.bets.iter_mut().find(|(id, _)| *id == player_id) {
            Some((_, bet)) => {
                *bet = bet.checked_add(chips).ok_or(SettleError::Overflow)?;
            }
            None => self.bets.push((player_id, chips)),
        }

        Ok(())
    }

    /// Checks if the player has a bet in the ledger.
    pub fn contains(&self, player_id: &PlayerId) -> bool {
        self.bets.iter().any(|(id, _)| id == player_id)
    }

    /// The player bet.
    pub fn get(&self, player_id: &PlayerId) -> Option<Chips> {
        self.bets
            .iter()
            .find(|(id, _)| id == player_id)
            .map(|(_, bet)| *bet)
    }

    /// Iterates the bets in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (&PlayerId, Chips)> {
        self.bets.iter().map(|(id, bet)| (id, *bet))
    }

    /// The number of players in the ledger.
    pub fn len(&self) -> usize {
        self.bets.len()
    }

    /// Checks if the ledger has no players.
    pub fn is_empty(&self) -> bool {
        self.bets.is_empty()
    }

    /// The sum of all bets.
    pub fn total(&self) -> Result<Chips, SettleError> {
        self.bets
            .iter()
            .try_fold(Chips::ZERO, |total, (_, bet)| total.checked_add(*bet))
            .ok_or(SettleError::Overflow)
    }

    /// Checks the ledger sum against the pot declared by the caller.
    pub fn verify_total(&self, declared: Chips) -> Result<(), SettleError> {
        let ledger = self.total()?;
        if ledger != declared {
            return Err(SettleError::LedgerTotal { ledger, declared });
        }

        Ok(())
    }
}
