// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use thiserror::Error;

use showdown_cards::Card;

/// Error returned when the cards given to the classifier are malformed, these are
/// caller bugs and a round that hits them must not be settled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A player must hold exactly two hole cards.
    #[error("expected 2 hole cards, got {0}")]
    HoleCards(usize),
    /// The board holds at most five cards.
    #[error("expected at most 5 community cards, got {0}")]
    CommunityCards(usize),
    /// Hole and community cards must add up to at least five cards.
    #[error("expected at least 5 cards, got {0}")]
    NotEnoughCards(usize),
    /// The same card has been dealt twice.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// At most two jokers can be in play.
    #[error("expected at most 2 jokers, got {0}")]
    TooManyJokers(usize),
    /// A joker has been dealt on a table without wildcards.
    #[error("joker {0} on a standard table")]
    JokersNotAllowed(Card),
}
