// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Flush rule.
use showdown_cards::Suit;

use super::Rule;
use crate::{EvaluatedCard, Hand, HandCategory, Pool, wildcard};

/// Five cards of the same suit.
#[derive(Debug, Clone, Copy)]
pub struct Flush;

impl Flush {
    /// The best five cards of the given suit, jokers are the highest missing cards.
    fn suited(pool: &Pool, suit: Suit) -> Option<Vec<EvaluatedCard>> {
        let mut cards = pool
            .suit(suit)
            .iter()
            .copied()
            .map(EvaluatedCard::natural)
            .collect::<Vec<_>>();

        if cards.len() + pool.jokers().len() < Hand::SIZE {
            return None;
        }

        for &joker in pool.jokers() {
            let completion = wildcard::best_completion(&cards, pool.naturals());
            cards.push(completion.apply(joker));
        }

        cards.sort_by(|a, b| b.rank().cmp(&a.rank()));
        cards.truncate(Hand::SIZE);
        Some(cards)
    }
}

impl Rule for Flush {
    fn category(&self) -> HandCategory {
        HandCategory::Flush
    }

    fn evaluate(&self, pool: &Pool) -> Option<Hand> {
        Suit::suits()
            .filter_map(|suit| Self::suited(pool, suit))
            .max_by_key(|cards| cards.iter().map(|c| c.rank()).collect::<Vec<_>>())
            .map(|cards| Hand::new(self.category(), cards))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::tests::{played, pool};

    #[test]
    fn flush() {
        let hand = Flush.evaluate(&pool("AH 3H 7H 9H 2C QH 5H")).unwrap();
        assert_eq!(played(&hand), "AH QH 9H 7H 5H");

        assert!(Flush.evaluate(&pool("AH 3H 7H 9H 2C QS 5S")).is_none());
    }

    #[test]
    fn flush_with_jokers() {
        // The joker is the highest heart missing.
        let hand = Flush.evaluate(&pool("*S 3H AH 9H 2C QH 5S")).unwrap();
        assert_eq!(played(&hand), "AH KH* QH 9H 3H");

        // A joker that would rank below the five natural cards is not played.
        let hand = Flush.evaluate(&pool("*S 9H AH KH QH JH TH")).unwrap();
        assert_eq!(played(&hand), "AH KH QH JH TH");

        // Two jokers join the suit with three cards.
        let hand = Flush.evaluate(&pool("*S *H 8D 6D 2D 9C 3S")).unwrap();
        assert_eq!(played(&hand), "AD* KD* 8D 6D 2D");
        assert!(hand.cards().iter().all(|c| c.suit() == Suit::Diamonds));
    }
}
