// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards deck used to enumerate and sample hands.
use rand::prelude::*;

use crate::{Card, Rank, Suit};

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of natural cards in the deck.
    pub const SIZE: usize = 52;

    /// The maximum number of jokers in a deck.
    pub const MAX_JOKERS: usize = 2;

    /// Creates a deck with the 52 natural cards and the given number of jokers.
    ///
    /// Panics if jokers > 2.
    pub fn with_jokers(jokers: usize) -> Self {
        assert!(jokers <= Self::MAX_JOKERS, "jokers <= {}", Self::MAX_JOKERS);

        let mut deck = Self::default();
        deck.cards.extend(
            [Suit::Spades, Suit::Hearts]
                .into_iter()
                .take(jokers)
                .map(Card::joker),
        );
        deck
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Calls the `f` closure for each k-cards hand in lexicographic order.
    ///
    /// Panics if k is not 1 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((1..=7).contains(&k), "1 <= k <= 7");

        let n = self.cards.len();
        if k > n {
            return;
        }

        let mut idx = (0..k).collect::<Vec<_>>();
        let mut hand = self.cards[..k].to_vec();

        loop {
            f(&hand);

            // The rightmost position that can still move right.
            let Some(pos) = (0..k).rev().find(|&i| idx[i] < n - k + i) else {
                break;
            };

            idx[pos] += 1;
            for i in pos + 1..k {
                idx[i] = idx[i - 1] + 1;
            }

            for i in pos..k {
                hand[i] = self.cards[idx[i]];
            }
        }
    }

    /// Calls the `f` closure with `n` random k-cards hands.
    ///
    /// Panics if k is not 1 <= k <= 7.
    pub fn sample<R, F>(&self, rng: &mut R, n: usize, k: usize, mut f: F)
    where
        R: Rng,
        F: FnMut(&[Card]),
    {
        assert!((1..=7).contains(&k), "1 <= k <= 7");

        if k > self.cards.len() {
            return;
        }

        let mut cards = self.cards.clone();
        for _ in 0..n {
            cards.shuffle(rng);
            f(&cards[..k]);
        }
    }
}

impl Default for Deck {
    /// A deck with the 52 natural cards.
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn deck_cards() {
        let cards = Deck::default().into_iter().collect::<HashSet<_>>();
        assert_eq!(cards.len(), Deck::SIZE);
        assert!(cards.iter().all(|c| !c.is_joker()));

        let deck = Deck::with_jokers(2);
        assert_eq!(deck.count(), Deck::SIZE + 2);

        let jokers = deck.into_iter().filter(|c| c.is_joker()).count();
        assert_eq!(jokers, 2);
    }

    #[test]
    #[should_panic]
    fn deck_too_many_jokers() {
        Deck::with_jokers(3);
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();

        let mut hands = HashSet::default();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);
    }

    #[test]
    fn deck_for_each_5cards() {
        let mut count = 0;
        Deck::default().for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        });
        assert_eq!(count, 2_598_960);
    }

    #[test]
    fn deck_sample() {
        let mut rng = StdRng::seed_from_u64(7);
        let deck = Deck::with_jokers(1);

        let mut count = 0;
        deck.sample(&mut rng, 100, 7, |cards| {
            let unique = cards.iter().collect::<HashSet<_>>();
            assert_eq!(unique.len(), 7);
            count += 1;
        });
        assert_eq!(count, 100);
    }
}
