// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Wildcard resolution.
//!
//! A joker is resolved by picking the rank and suit that make the best hand for
//! the category being built. The resolution never touches the joker itself, it
//! returns a [Completion] that is recorded in an [EvaluatedCard] so that a joker
//! is still a joker after a hand has been ranked and compared.
//!
//! All the functions are pure, they read their inputs and return a completion,
//! calling them twice with the same inputs gives the same completion.
use showdown_cards::{Card, Rank, Suit};

use crate::EvaluatedCard;

/// The rank and suit a joker stands in for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Completion {
    /// The completion rank.
    pub rank: Rank,
    /// The completion suit.
    pub suit: Suit,
}

impl Completion {
    /// Creates a completion.
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Wraps a joker into a card that plays as this completion.
    pub fn apply(self, joker: Card) -> EvaluatedCard {
        EvaluatedCard::wild(joker, self.rank, self.suit)
    }
}

/// Finds the best completion for a joker added to a partial combination.
///
/// The completion depends on the shape of the partial combination:
/// - all cards of the same rank: the joker joins the group,
/// - all cards of the same suit: the joker is the highest missing card of the suit,
/// - anything else: the joker is the highest rank not in the combination.
///
/// The remaining pool is used to pick a plausible suit.
pub fn best_completion(partial: &[EvaluatedCard], pool: &[Card]) -> Completion {
    match partial.split_first() {
        Some((first, rest)) if rest.iter().all(|c| c.rank() == first.rank()) => {
            complete_group(first.rank(), partial, pool)
        }
        Some((first, rest)) if rest.iter().all(|c| c.suit() == first.suit()) => {
            complete_suit(first.suit(), partial)
        }
        _ => complete_kicker(partial, pool),
    }
}

/// Completes a group of cards of the given rank, the suit is one not yet in the
/// group preferring the suit with more cards in the pool.
pub fn complete_group(rank: Rank, group: &[EvaluatedCard], pool: &[Card]) -> Completion {
    let suit = suits_by_count(pool)
        .into_iter()
        .find(|s| group.iter().all(|c| c.suit() != *s))
        .unwrap_or_else(|| dominant_suit(pool));

    Completion::new(rank, suit)
}

/// Completes cards of the given suit with the highest rank not yet in the suit.
pub fn complete_suit(suit: Suit, suited: &[EvaluatedCard]) -> Completion {
    Completion::new(highest_missing(suited), suit)
}

/// Completes a hand with a kicker that doesn't pair any card already in the hand.
pub fn complete_kicker(hand: &[EvaluatedCard], pool: &[Card]) -> Completion {
    Completion::new(highest_missing(hand), dominant_suit(pool))
}

/// The suit with more natural cards in the pool, ties go to the higher suit.
pub fn dominant_suit(pool: &[Card]) -> Suit {
    suits_by_count(pool)[0]
}

/// Suits sorted by the number of natural cards in the pool.
fn suits_by_count(pool: &[Card]) -> [Suit; Suit::COUNT] {
    let count = |suit: Suit| {
        pool.iter()
            .filter(|c| !c.is_joker() && c.suit() == suit)
            .count()
    };

    let mut suits = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];
    // Stable sort keeps higher suits first on ties.
    suits.sort_by_key(|s| std::cmp::Reverse(count(*s)));
    suits
}

fn highest_missing(cards: &[EvaluatedCard]) -> Rank {
    Rank::ranks()
        .rev()
        .find(|r| cards.iter().all(|c| c.rank() != *r))
        .unwrap_or(Rank::Deuce)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(cards: &str) -> Vec<Card> {
        cards.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn evaluated(s: &str) -> Vec<EvaluatedCard> {
        cards(s).into_iter().map(EvaluatedCard::natural).collect()
    }

    #[test]
    fn completes_group() {
        let pool = cards("KS KD 9C 4H 2S QD");
        let group = evaluated("KS KD");

        let c = best_completion(&group, &pool);
        assert_eq!(c.rank, Rank::King);
        // Hearts and clubs are tied, hearts is the higher suit.
        assert_eq!(c.suit, Suit::Hearts);

        // A second joker takes the last free suit.
        let mut group = group;
        group.push(c.apply(Card::joker(Suit::Spades)));
        let c = best_completion(&group, &pool);
        assert_eq!(c, Completion::new(Rank::King, Suit::Clubs));
    }

    #[test]
    fn completes_suit() {
        let pool = cards("AH QH 9H 7H 2C");
        let suited = evaluated("AH QH 9H 7H");

        let c = best_completion(&suited, &pool);
        assert_eq!(c, Completion::new(Rank::King, Suit::Hearts));
    }

    #[test]
    fn completes_kicker() {
        let pool = cards("AH KS 9H 7H 2C");
        let hand = evaluated("AH KS 9H");

        let c = best_completion(&hand, &pool);
        assert_eq!(c, Completion::new(Rank::Queen, Suit::Hearts));

        let c = best_completion(&[], &pool);
        assert_eq!(c, Completion::new(Rank::Ace, Suit::Hearts));
    }

    #[test]
    fn completion_is_pure() {
        let pool = cards("KS KD 9C 4H 2S *H");
        let group = evaluated("KS KD");
        let (pool_before, group_before) = (pool.clone(), group.clone());

        let c1 = best_completion(&group, &pool);
        let c2 = best_completion(&group, &pool);
        assert_eq!(c1, c2);
        assert_eq!(pool, pool_before);
        assert_eq!(group, group_before);

        let joker = Card::joker(Suit::Hearts);
        let wild = c1.apply(joker);
        assert_eq!(wild.rank(), Rank::King);
        assert_eq!(wild.card(), joker);
        assert_eq!(joker.rank(), Rank::Joker);
    }

    #[test]
    fn dominant_suit_ignores_jokers() {
        assert_eq!(dominant_suit(&cards("2C 3C *S *H 4D")), Suit::Clubs);
        assert_eq!(dominant_suit(&cards("2C 3D")), Suit::Diamonds);
        assert_eq!(dominant_suit(&[]), Suit::Spades);
    }
}
