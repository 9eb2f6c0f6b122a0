// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! High card rule.
use super::Rule;
use crate::{EvaluatedCard, Hand, HandCategory, Pool, wildcard};

/// The five highest cards, matches any pool.
#[derive(Debug, Clone, Copy)]
pub struct HighCard;

impl HighCard {
    /// The five highest cards of the pool.
    pub fn best(pool: &Pool) -> Hand {
        let naturals = Hand::SIZE.saturating_sub(pool.jokers().len());
        let mut cards = pool
            .naturals()
            .iter()
            .take(naturals)
            .copied()
            .map(EvaluatedCard::natural)
            .collect::<Vec<_>>();

        for &joker in pool.jokers().iter().take(Hand::SIZE - cards.len()) {
            let completion = wildcard::complete_kicker(&cards, pool.naturals());
            cards.push(completion.apply(joker));
        }

        cards.sort_by(|a, b| b.rank().cmp(&a.rank()));
        Hand::new(HandCategory::HighCard, cards)
    }
}

impl Rule for HighCard {
    fn category(&self) -> HandCategory {
        HandCategory::HighCard
    }

    fn evaluate(&self, pool: &Pool) -> Option<Hand> {
        Some(Self::best(pool))
    }
}
