// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! The pooled hole and community cards a hand is built from.
use ahash::AHashSet;

use showdown_cards::{Card, Rank, Suit};

use crate::EvalError;

/// A player hole cards and the community cards grouped once for all the rules.
///
/// Natural cards are sorted by rank and suit from the highest, the rank and suit
/// groups are views over the same order so the rules never need to sort or remove
/// cards from a shared list.
#[derive(Debug, Clone)]
pub struct Pool {
    naturals: Vec<Card>,
    jokers: Vec<Card>,
    by_rank: [Vec<Card>; Rank::COUNT],
    by_suit: [Vec<Card>; Suit::COUNT],
}

impl Pool {
    /// The number of hole cards.
    pub const HOLE_CARDS: usize = 2;

    /// The maximum number of community cards.
    pub const MAX_COMMUNITY_CARDS: usize = 5;

    /// The maximum number of jokers.
    pub const MAX_JOKERS: usize = 2;

    /// Pools the hole and community cards.
    pub fn new(hole_cards: &[Card], community_cards: &[Card]) -> Result<Self, EvalError> {
        if hole_cards.len() != Self::HOLE_CARDS {
            return Err(EvalError::HoleCards(hole_cards.len()));
        }

        if community_cards.len() > Self::MAX_COMMUNITY_CARDS {
            return Err(EvalError::CommunityCards(community_cards.len()));
        }

        let count = hole_cards.len() + community_cards.len();
        if count < crate::Hand::SIZE {
            return Err(EvalError::NotEnoughCards(count));
        }

        let mut seen = AHashSet::with_capacity(count);
        for &card in hole_cards.iter().chain(community_cards) {
            if !seen.insert(card) {
                return Err(EvalError::DuplicateCard(card));
            }
        }

        let (jokers, mut naturals): (Vec<Card>, Vec<Card>) = hole_cards
            .iter()
            .chain(community_cards)
            .partition(|c| c.is_joker());

        if jokers.len() > Self::MAX_JOKERS {
            return Err(EvalError::TooManyJokers(jokers.len()));
        }

        naturals.sort_by(|a, b| (b.rank(), b.suit()).cmp(&(a.rank(), a.suit())));

        let mut by_rank: [Vec<Card>; Rank::COUNT] = Default::default();
        let mut by_suit: [Vec<Card>; Suit::COUNT] = Default::default();
        for &card in &naturals {
            by_rank[card.rank() as usize].push(card);
            by_suit[card.suit() as usize].push(card);
        }

        Ok(Self {
            naturals,
            jokers,
            by_rank,
            by_suit,
        })
    }

    /// The natural cards from the highest.
    pub fn naturals(&self) -> &[Card] {
        &self.naturals
    }

    /// The jokers in the pool.
    pub fn jokers(&self) -> &[Card] {
        &self.jokers
    }

    /// The natural cards with the given rank.
    pub fn rank(&self, rank: Rank) -> &[Card] {
        self.by_rank
            .get(rank as usize)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The natural cards with the given suit from the highest.
    pub fn suit(&self, suit: Suit) -> &[Card] {
        &self.by_suit[suit as usize]
    }

    /// The number of cards in the pool.
    pub fn len(&self) -> usize {
        self.naturals.len() + self.jokers.len()
    }

    /// Checks if the pool is empty, never true for a valid pool.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
