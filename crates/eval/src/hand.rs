// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Ranked hand types.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use showdown_cards::{Card, Rank, Suit};

/// Hand category, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No combination, five highest cards.
    HighCard = 0,
    /// Two cards of the same rank.
    OnePair,
    /// Two pairs of different ranks.
    TwoPairs,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five cards of consecutive rank.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight with all cards of the same suit.
    StraightFlush,
    /// An ace high straight flush.
    RoyalFlush,
    /// Five cards of the same rank, only possible with jokers.
    FiveOfAKind,
}

impl HandCategory {
    /// The number of categories.
    pub const COUNT: usize = 11;

    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            OnePair,
            TwoPairs,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
            FiveOfAKind,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPairs => "Two Pairs",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
            HandCategory::FiveOfAKind => "Five of a Kind",
        };

        f.pad(name)
    }
}

/// A card inside a ranked hand.
///
/// Natural cards play as themselves, a joker records the rank and suit it stands in
/// for without changing the joker card itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EvaluatedCard {
    card: Card,
    effective_rank: Option<Rank>,
    effective_suit: Option<Suit>,
}

impl EvaluatedCard {
    /// A natural card playing as itself.
    pub fn natural(card: Card) -> Self {
        debug_assert!(!card.is_joker(), "{card} is a joker");
        Self {
            card,
            effective_rank: None,
            effective_suit: None,
        }
    }

    /// A joker standing in for the given rank and suit.
    pub fn wild(joker: Card, rank: Rank, suit: Suit) -> Self {
        debug_assert!(joker.is_joker(), "{joker} is not a joker");
        debug_assert!(rank.is_natural());
        Self {
            card: joker,
            effective_rank: Some(rank),
            effective_suit: Some(suit),
        }
    }

    /// The card as dealt.
    pub fn card(&self) -> Card {
        self.card
    }

    /// The rank a joker stands in for, none for natural cards.
    pub fn effective_rank(&self) -> Option<Rank> {
        self.effective_rank
    }

    /// The suit a joker stands in for, none for natural cards.
    pub fn effective_suit(&self) -> Option<Suit> {
        self.effective_suit
    }

    /// The rank this card plays as.
    pub fn rank(&self) -> Rank {
        self.effective_rank.unwrap_or(self.card.rank())
    }

    /// The suit this card plays as.
    pub fn suit(&self) -> Suit {
        self.effective_suit.unwrap_or(self.card.suit())
    }

    /// Checks if this card is a joker.
    pub fn is_wild(&self) -> bool {
        self.card.is_joker()
    }
}

impl From<Card> for EvaluatedCard {
    fn from(card: Card) -> Self {
        EvaluatedCard::natural(card)
    }
}

impl fmt::Display for EvaluatedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_wild() {
            write!(f, "{}{}*", self.rank(), self.suit())
        } else {
            write!(f, "{}", self.card)
        }
    }
}

/// A ranked five cards hand.
///
/// Hands compare by category first and then by the rank of each card in order,
/// the cards are sorted from the most to the least significant for the category
/// (for a full house the three of a kind comes before the pair, for a wheel
/// straight the ace comes last).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    category: HandCategory,
    score: u32,
    cards: [EvaluatedCard; 5],
}

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates a hand from the given cards ordered from best to worst.
    ///
    /// Panics if there are not exactly five cards.
    pub fn new(category: HandCategory, cards: Vec<EvaluatedCard>) -> Self {
        let cards: [EvaluatedCard; Self::SIZE] = cards
            .try_into()
            .unwrap_or_else(|c: Vec<_>| panic!("{category} with {} cards", c.len()));

        let score = cards
            .iter()
            .fold(category as u32, |acc, c| (acc << 4) | c.rank() as u32);

        Self {
            category,
            score,
            cards,
        }
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The hand score, the category in the top bits followed by 4 bits per card
    /// rank, only meaningful to compare hands of the same category.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The hand cards from best to worst.
    pub fn cards(&self) -> &[EvaluatedCard; Self::SIZE] {
        &self.cards
    }

    /// The ranks the cards play as.
    pub fn ranks(&self) -> [Rank; Self::SIZE] {
        self.cards.map(|c| c.rank())
    }

    /// Compares two hands strength, category first and then rank by rank.
    ///
    /// Suits never break ties so this is not consistent with [PartialEq].
    pub fn cmp_strength(&self, other: &Hand) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.ranks().cmp(&other.ranks()))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.category)?;
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "]")
    }
}
