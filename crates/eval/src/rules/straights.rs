// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Straight rules.
use showdown_cards::{Card, Rank, Suit};

use super::Rule;
use crate::{EvaluatedCard, Hand, HandCategory, Pool, wildcard};

/// The five ranks of a straight from the top down, the ace plays low after the deuce.
fn window(top: Rank) -> [Rank; 5] {
    let mut ranks = [top; 5];
    for i in 1..ranks.len() {
        ranks[i] = ranks[i - 1].lower().unwrap_or(Rank::Ace);
    }
    ranks
}

/// The straights top ranks from the given rank down to the five.
fn tops(highest: Rank) -> impl Iterator<Item = Rank> {
    Rank::ranks()
        .rev()
        .skip_while(move |r| *r > highest)
        .take_while(|r| *r >= Rank::Five)
}

/// Builds the straight with the given top using the cards returned by `available`,
/// jokers fill the missing rungs as cards of the given suit.
fn run<F>(pool: &Pool, top: Rank, suit: Suit, available: F) -> Option<Vec<EvaluatedCard>>
where
    F: Fn(Rank) -> Option<Card>,
{
    let window = window(top);
    let missing = window.iter().filter(|r| available(**r).is_none()).count();
    if missing > pool.jokers().len() {
        return None;
    }

    let mut jokers = pool.jokers().iter();
    window
        .iter()
        .map(|&rank| match available(rank) {
            Some(card) => Some(EvaluatedCard::natural(card)),
            None => jokers
                .next()
                .map(|&joker| wildcard::Completion::new(rank, suit).apply(joker)),
        })
        .collect()
}

/// The highest straight flush with a top card not higher than `highest`.
fn straight_flush(pool: &Pool, highest: Rank) -> Option<Vec<EvaluatedCard>> {
    tops(highest).find_map(|top| {
        Suit::suits().rev().find_map(|suit| {
            run(pool, top, suit, |rank| {
                pool.suit(suit).iter().find(|c| c.rank() == rank).copied()
            })
        })
    })
}

/// An ace high straight flush.
#[derive(Debug, Clone, Copy)]
pub struct RoyalFlush;

impl Rule for RoyalFlush {
    fn category(&self) -> HandCategory {
        HandCategory::RoyalFlush
    }

    fn evaluate(&self, pool: &Pool) -> Option<Hand> {
        straight_flush(pool, Rank::Ace)
            .filter(|cards| cards[0].rank() == Rank::Ace)
            .map(|cards| Hand::new(self.category(), cards))
    }
}

/// Five consecutive cards of the same suit, king high or lower.
#[derive(Debug, Clone, Copy)]
pub struct StraightFlush;

impl Rule for StraightFlush {
    fn category(&self) -> HandCategory {
        HandCategory::StraightFlush
    }

    fn evaluate(&self, pool: &Pool) -> Option<Hand> {
        straight_flush(pool, Rank::King).map(|cards| Hand::new(self.category(), cards))
    }
}

/// Five cards of consecutive rank.
#[derive(Debug, Clone, Copy)]
pub struct Straight;

impl Rule for Straight {
    fn category(&self) -> HandCategory {
        HandCategory::Straight
    }

    fn evaluate(&self, pool: &Pool) -> Option<Hand> {
        let suit = wildcard::dominant_suit(pool.naturals());
        tops(Rank::Ace)
            .find_map(|top| run(pool, top, suit, |rank| pool.rank(rank).first().copied()))
            .map(|cards| Hand::new(self.category(), cards))
    }
}
