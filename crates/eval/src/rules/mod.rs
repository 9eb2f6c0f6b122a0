// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand rules, one for each category.
//!
//! A rule looks for the best five cards that form exactly its category, it
//! returns nothing when the pool cannot form it. Kickers never pair the cards
//! matched by the rule, and the straight flush rule leaves the ace high window
//! to the royal flush rule, so for a given pool a weaker rule can fail where a
//! stronger one matched. The classifier tries the rules in [RULES] order.
use showdown_cards::{Card, Rank};

use crate::{EvaluatedCard, Hand, HandCategory, Pool, wildcard};

mod flush;
mod full_house;
mod high_card;
mod kinds;
mod straights;

pub use flush::Flush;
pub use full_house::FullHouse;
pub use high_card::HighCard;
pub use kinds::{FiveOfAKind, FourOfAKind, OnePair, ThreeOfAKind, TwoPairs};
pub use straights::{RoyalFlush, Straight, StraightFlush};

/// A rule that matches one hand category.
pub trait Rule {
    /// The category this rule matches.
    fn category(&self) -> HandCategory;

    /// Returns the best hand of this rule category, if any.
    fn evaluate(&self, pool: &Pool) -> Option<Hand>;
}

/// The rules from the strongest to the weakest category.
pub const RULES: [&dyn Rule; HandCategory::COUNT] = [
    &FiveOfAKind,
    &RoyalFlush,
    &StraightFlush,
    &FourOfAKind,
    &FullHouse,
    &Flush,
    &Straight,
    &ThreeOfAKind,
    &TwoPairs,
    &OnePair,
    &HighCard,
];

/// Takes `size` cards of the given rank, topping up with jokers.
///
/// Returns the group and the jokers that are left, or none if there are not
/// enough jokers.
fn group<'a>(
    pool: &Pool,
    rank: Rank,
    size: usize,
    jokers: &'a [Card],
) -> Option<(Vec<EvaluatedCard>, &'a [Card])> {
    let naturals = pool.rank(rank);
    let taken = naturals.len().min(size);
    let needed = size - taken;
    if needed > jokers.len() {
        return None;
    }

    let mut cards = naturals[..taken]
        .iter()
        .copied()
        .map(EvaluatedCard::natural)
        .collect::<Vec<_>>();

    let (used, left) = jokers.split_at(needed);
    for &joker in used {
        let completion = wildcard::complete_group(rank, &cards, pool.naturals());
        cards.push(completion.apply(joker));
    }

    Some((cards, left))
}

/// Finds the highest ranked group of `size` cards, skipping the excluded ranks.
fn best_group<'a>(
    pool: &Pool,
    size: usize,
    jokers: &'a [Card],
    exclude: &[Rank],
) -> Option<(Vec<EvaluatedCard>, &'a [Card])> {
    Rank::ranks()
        .rev()
        .filter(|r| !exclude.contains(r))
        .find_map(|r| group(pool, r, size, jokers))
}

/// Fills the hand up to five cards with kickers of ranks not already in the hand.
///
/// Left over jokers play as the highest free rank so they come first, natural
/// kickers follow from the highest. Returns none if there are not enough cards of
/// distinct ranks.
fn fill_kickers(
    pool: &Pool,
    mut cards: Vec<EvaluatedCard>,
    jokers: &[Card],
) -> Option<Vec<EvaluatedCard>> {
    let mut jokers = jokers.iter();

    while cards.len() < Hand::SIZE {
        let kicker = match jokers.next() {
            Some(&joker) => wildcard::complete_kicker(&cards, pool.naturals()).apply(joker),
            None => pool
                .naturals()
                .iter()
                .find(|n| cards.iter().all(|c| c.rank() != n.rank()))
                .copied()
                .map(EvaluatedCard::natural)?,
        };

        cards.push(kicker);
    }

    Some(cards)
}
