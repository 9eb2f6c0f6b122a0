// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! N of a kind rules.
use super::{Rule, best_group, fill_kickers};
use crate::{Hand, HandCategory, Pool};

/// Five cards of the same rank, needs at least one joker.
#[derive(Debug, Clone, Copy)]
pub struct FiveOfAKind;

impl Rule for FiveOfAKind {
    fn category(&self) -> HandCategory {
        HandCategory::FiveOfAKind
    }

    fn evaluate(&self, pool: &Pool) -> Option<Hand> {
        if pool.jokers().is_empty() {
            return None;
        }

        let (cards, _) = best_group(pool, 5, pool.jokers(), &[])?;
        Some(Hand::new(self.category(), cards))
    }
}

/// Four cards of the same rank and the best kicker.
#[derive(Debug, Clone, Copy)]
pub struct FourOfAKind;

impl Rule for FourOfAKind {
    fn category(&self) -> HandCategory {
        HandCategory::FourOfAKind
    }

    fn evaluate(&self, pool: &Pool) -> Option<Hand> {
        let (quads, jokers) = best_group(pool, 4, pool.jokers(), &[])?;
        let cards = fill_kickers(pool, quads, jokers)?;
        Some(Hand::new(self.category(), cards))
    }
}

/// Three cards of the same rank and two kickers.
#[derive(Debug, Clone, Copy)]
pub struct ThreeOfAKind;

impl Rule for ThreeOfAKind {
    fn category(&self) -> HandCategory {
        HandCategory::ThreeOfAKind
    }

    fn evaluate(&self, pool: &Pool) -> Option<Hand> {
        let (trips, jokers) = best_group(pool, 3, pool.jokers(), &[])?;
        let cards = fill_kickers(pool, trips, jokers)?;
        Some(Hand::new(self.category(), cards))
    }
}

/// The two highest pairs and a kicker.
#[derive(Debug, Clone, Copy)]
pub struct TwoPairs;

impl Rule for TwoPairs {
    fn category(&self) -> HandCategory {
        HandCategory::TwoPairs
    }

    fn evaluate(&self, pool: &Pool) -> Option<Hand> {
        let (mut cards, jokers) = best_group(pool, 2, pool.jokers(), &[])?;
        let (low, jokers) = best_group(pool, 2, jokers, &[cards[0].rank()])?;
        cards.extend(low);

        let cards = fill_kickers(pool, cards, jokers)?;
        Some(Hand::new(self.category(), cards))
    }
}

/// The highest pair and three kickers.
#[derive(Debug, Clone, Copy)]
pub struct OnePair;

impl Rule for OnePair {
    fn category(&self) -> HandCategory {
        HandCategory::OnePair
    }

    fn evaluate(&self, pool: &Pool) -> Option<Hand> {
        let (pair, jokers) = best_group(pool, 2, pool.jokers(), &[])?;
        let cards = fill_kickers(pool, pair, jokers)?;
        Some(Hand::new(self.category(), cards))
    }
}
