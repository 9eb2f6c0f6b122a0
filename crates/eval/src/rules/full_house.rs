// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Full house rule.
use showdown_cards::Rank;

use super::{Rule, group};
use crate::{Hand, HandCategory, Pool};

/// Three of a kind and a pair of different ranks.
#[derive(Debug, Clone, Copy)]
pub struct FullHouse;

impl Rule for FullHouse {
    fn category(&self) -> HandCategory {
        HandCategory::FullHouse
    }

    fn evaluate(&self, pool: &Pool) -> Option<Hand> {
        // The highest trips that leaves enough cards for a pair wins.
        Rank::ranks().rev().find_map(|high| {
            let (mut cards, jokers) = group(pool, high, 3, pool.jokers())?;
            let (pair, _) = Rank::ranks()
                .rev()
                .filter(|r| *r != high)
                .find_map(|low| group(pool, low, 2, jokers))?;

            cards.extend(pair);
            Some(Hand::new(self.category(), cards))
        })
    }
}
