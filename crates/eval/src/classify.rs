// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand classifier.
use log::trace;
use serde::{Deserialize, Serialize};

use showdown_cards::Card;

use crate::{
    EvalError, Hand, Pool,
    rules::{HighCard, RULES},
};

/// The table variant sets how jokers are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableVariant {
    /// A 52 cards deck, a joker is an error.
    #[default]
    Standard,
    /// Up to two jokers play as wildcards.
    Jokers,
}

/// Classifies a player best five cards.
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    variant: TableVariant,
}

impl Classifier {
    /// Creates a classifier for the given table variant.
    pub fn new(variant: TableVariant) -> Self {
        Self { variant }
    }

    /// The table variant.
    pub fn variant(&self) -> TableVariant {
        self.variant
    }

    /// Returns the best hand for the given hole and community cards.
    pub fn classify(
        &self,
        hole_cards: &[Card],
        community_cards: &[Card],
    ) -> Result<Hand, EvalError> {
        let pool = Pool::new(hole_cards, community_cards)?;

        if let (TableVariant::Standard, Some(&joker)) = (self.variant, pool.jokers().first()) {
            return Err(EvalError::JokersNotAllowed(joker));
        }

        Ok(Self::best_hand(&pool))
    }

    /// Tries the rules from the strongest category, high card always matches.
    pub fn best_hand(pool: &Pool) -> Hand {
        let hand = RULES
            .iter()
            .find_map(|rule| rule.evaluate(pool))
            .unwrap_or_else(|| HighCard::best(pool));

        trace!("{hand} score 0x{:06x}", hand.score());
        hand
    }
}

/// Returns the best hand for the given hole and community cards, jokers are wild.
pub fn classify(hole_cards: &[Card], community_cards: &[Card]) -> Result<Hand, EvalError> {
    Classifier::new(TableVariant::Jokers).classify(hole_cards, community_cards)
}
