// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Round settlement.
use ahash::{AHashMap, AHashSet};
use log::{debug, error};
use serde::{Deserialize, Serialize};

use showdown_cards::Card;
use showdown_eval::{Classifier, EvaluatedCard, Hand};

use crate::{
    BetLedger, Chips, PlayerId, SettleConfig, SettleError, SidePot, build_pots, resolve,
};

/// A player still in the hand at showdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    /// The player id.
    pub player_id: PlayerId,
    /// The player hole cards.
    pub hole_cards: [Card; 2],
}

/// The state of a round at showdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// The community cards.
    pub board: Vec<Card>,
    /// The players that have not folded.
    pub players: Vec<Seat>,
    /// All the round bets, folded players included.
    pub ledger: BetLedger,
}

impl Round {
    /// Creates a round with the given community cards.
    pub fn new(board: Vec<Card>) -> Self {
        Self {
            board,
            ..Default::default()
        }
    }

    /// Adds an active player and its bet.
    ///
    /// Fails if the player is already in the round.
    pub fn add_player(
        &mut self,
        player_id: impl Into<PlayerId>,
        hole_cards: [Card; 2],
        bet: Chips,
    ) -> Result<(), SettleError> {
        let player_id = self.check_new(player_id.into())?;
        self.ledger.add(player_id.clone(), bet)?;
        self.players.push(Seat {
            player_id,
            hole_cards,
        });

        Ok(())
    }

    /// Adds the bet of a player that has folded.
    ///
    /// Fails if the player is already in the round.
    pub fn add_folded(
        &mut self,
        player_id: impl Into<PlayerId>,
        bet: Chips,
    ) -> Result<(), SettleError> {
        let player_id = self.check_new(player_id.into())?;
        self.ledger.add(player_id, bet)
    }

    fn check_new(&self, player_id: PlayerId) -> Result<PlayerId, SettleError> {
        let seated = self.players.iter().any(|s| s.player_id == player_id);
        if seated || self.ledger.contains(&player_id) {
            return Err(SettleError::DuplicatePlayer(player_id));
        }

        Ok(player_id)
    }
}

/// A player ranked hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerHand {
    /// The player id.
    pub player_id: PlayerId,
    /// The player best hand.
    pub hand: Hand,
}

/// The chips a player won in a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandPayoff {
    /// The player id.
    pub player_id: PlayerId,
    /// The chips won across all pots.
    pub chips: Chips,
    /// The winning cards, empty if the player won without showdown.
    pub cards: Vec<EvaluatedCard>,
}

/// The result of a settled round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// The hands of the players at showdown in seat order.
    pub hands: Vec<PlayerHand>,
    /// The main pot followed by the side pots.
    pub pots: Vec<SidePot>,
}

impl Settlement {
    /// The hand of the given player.
    pub fn hand(&self, player_id: &PlayerId) -> Option<&Hand> {
        self.hands
            .iter()
            .find(|h| h.player_id == *player_id)
            .map(|h| &h.hand)
    }

    /// The chips won by each player across all pots, in the order they are paid.
    pub fn payoffs(&self) -> Vec<HandPayoff> {
        let mut payoffs = Vec::<HandPayoff>::new();
        let mut index = AHashMap::new();

        for payout in self.pots.iter().flat_map(|p| &p.payouts) {
            let idx = *index.entry(&payout.player_id).or_insert_with(|| {
                payoffs.push(HandPayoff {
                    player_id: payout.player_id.clone(),
                    chips: Chips::ZERO,
                    cards: self
                        .hand(&payout.player_id)
                        .map(|h| h.cards().to_vec())
                        .unwrap_or_default(),
                });
                payoffs.len() - 1
            });

            payoffs[idx].chips += payout.chips;
        }

        payoffs
    }
}

/// Settles rounds at showdown.
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine {
    config: SettleConfig,
}

impl Engine {
    /// Creates an engine with the given configuration.
    pub fn new(config: SettleConfig) -> Self {
        Self { config }
    }

    /// The engine configuration.
    pub fn config(&self) -> &SettleConfig {
        &self.config
    }

    /// Ranks the players hands, builds the pots and pays the winners.
    ///
    /// Hands are ranked only when two or more players are still in the hand,
    /// a single player wins all the pots without showdown.
    pub fn settle(&self, round: &Round) -> Result<Settlement, SettleError> {
        self.try_settle(round)
            .inspect_err(|e| error!("Settle round failed: {e}"))
    }

    fn try_settle(&self, round: &Round) -> Result<Settlement, SettleError> {
        Self::check_seats(round)?;

        let mut hands = Vec::with_capacity(round.players.len());
        if round.players.len() > 1 {
            let classifier = Classifier::new(self.config.variant);
            for seat in &round.players {
                let hand = classifier
                    .classify(&seat.hole_cards, &round.board)
                    .map_err(|source| SettleError::Eval {
                        player_id: seat.player_id.clone(),
                        source,
                    })?;

                debug!("Player {} {hand}", seat.player_id);
                hands.push(PlayerHand {
                    player_id: seat.player_id.clone(),
                    hand,
                });
            }
        }

        let active = round
            .players
            .iter()
            .map(|s| s.player_id.clone())
            .collect::<Vec<_>>();
        let pots = build_pots(&round.ledger, &active)?;

        let ranked = hands
            .iter()
            .map(|h| (h.player_id.clone(), h.hand.clone()))
            .collect::<AHashMap<_, _>>();
        let pots = resolve(pots, &ranked, self.config.odd_chips)?;

        Ok(Settlement { hands, pots })
    }

    /// Checks that players and cards are not repeated.
    fn check_seats(round: &Round) -> Result<(), SettleError> {
        let mut players = AHashSet::with_capacity(round.players.len());
        for seat in &round.players {
            if !players.insert(&seat.player_id) {
                return Err(SettleError::DuplicatePlayer(seat.player_id.clone()));
            }
        }

        let mut dealt = AHashSet::new();
        let hole_cards = round.players.iter().flat_map(|s| s.hole_cards);
        for card in round.board.iter().copied().chain(hole_cards) {
            if !dealt.insert(card) {
                return Err(SettleError::DuplicateCard(card));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{OddChips, PotKind};
    use showdown_cards::Rank;
    use showdown_eval::{EvalError, HandCategory, TableVariant};

    fn cards(cards: &str) -> Vec<Card> {
        cards.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn hole(cards: &str) -> [Card; 2] {
        let cards = self::cards(cards);
        [cards[0], cards[1]]
    }

    fn payoffs(settlement: &Settlement) -> Vec<(String, u32)> {
        settlement
            .payoffs()
            .into_iter()
            .map(|p| (p.player_id.to_string(), p.chips.amount()))
            .collect()
    }

    #[test]
    fn settle_heads_up() {
        let mut round = Round::new(cards("7S 7D 2C 5H 9S"));
        round.add_player("p1", hole("7C 3D"), Chips::new(100)).unwrap();
        round.add_player("p2", hole("KS KD"), Chips::new(100)).unwrap();

        let settlement = Engine::default().settle(&round).unwrap();

        let p1 = settlement.hand(&"p1".into()).unwrap();
        assert_eq!(p1.category(), HandCategory::ThreeOfAKind);
        assert_eq!(
            p1.ranks(),
            [
                Rank::Seven,
                Rank::Seven,
                Rank::Seven,
                Rank::Nine,
                Rank::Five,
            ]
        );

        let p2 = settlement.hand(&"p2".into()).unwrap();
        assert_eq!(p2.category(), HandCategory::TwoPairs);

        assert_eq!(settlement.pots.len(), 1);
        assert_eq!(settlement.pots[0].kind, PotKind::Main);
        assert_eq!(payoffs(&settlement), [("p1".to_string(), 200)]);

        let payoff = &settlement.payoffs()[0];
        assert_eq!(payoff.cards, p1.cards().to_vec());
    }

    #[test]
    fn settle_all_ins() {
        let mut round = Round::new(cards("7S 7D 2C 5H 9S"));
        round.add_player("p1", hole("7C 3D"), Chips::new(100)).unwrap();
        round.add_player("p2", hole("KS KD"), Chips::new(300)).unwrap();
        round.add_player("p3", hole("AH 4C"), Chips::new(500)).unwrap();

        let settlement = Engine::default().settle(&round).unwrap();
        let pots = settlement
            .pots
            .iter()
            .map(|p| (p.kind, p.total.amount(), p.winners.len()))
            .collect::<Vec<_>>();
        assert_eq!(
            pots,
            [
                (PotKind::Main, 300, 1),
                (PotKind::Side, 400, 1),
                (PotKind::Side, 200, 1)
            ]
        );

        assert_eq!(
            payoffs(&settlement),
            [
                ("p1".to_string(), 300),
                ("p2".to_string(), 400),
                ("p3".to_string(), 200)
            ]
        );
    }

    #[test]
    fn settle_without_showdown() {
        let mut round = Round::new(cards("7S 7D 2C"));
        round.add_folded("p1", Chips::new(20)).unwrap();
        round.add_player("p2", hole("KS KD"), Chips::new(40)).unwrap();
        round.add_folded("p3", Chips::new(40)).unwrap();

        // The board is not complete but a single player doesn't need a hand.
        let settlement = Engine::default().settle(&round).unwrap();
        assert!(settlement.hands.is_empty());
        assert_eq!(payoffs(&settlement), [("p2".to_string(), 100)]);
        assert!(settlement.payoffs()[0].cards.is_empty());
    }

    #[test]
    fn settle_split_with_folds() {
        let mut round = Round::new(cards("AS KD QC JH TS"));
        round.add_player("p1", hole("2C 3D"), Chips::new(50)).unwrap();
        round.add_folded("p2", Chips::new(1)).unwrap();
        round.add_player("p3", hole("6H 7H"), Chips::new(50)).unwrap();

        let settlement = Engine::default().settle(&round).unwrap();
        assert_eq!(settlement.pots[0].total, Chips::new(101));
        assert_eq!(settlement.pots[0].odd_chips, Chips::new(1));
        assert_eq!(
            payoffs(&settlement),
            [("p1".to_string(), 50), ("p3".to_string(), 50)]
        );

        let engine = Engine::new(SettleConfig {
            odd_chips: OddChips::SeatOrder,
            ..Default::default()
        });
        let settlement = engine.settle(&round).unwrap();
        assert_eq!(settlement.pots[0].odd_chips, Chips::ZERO);
        assert_eq!(
            payoffs(&settlement),
            [("p1".to_string(), 51), ("p3".to_string(), 50)]
        );
    }

    #[test]
    fn settle_jokers_table() {
        let mut round = Round::new(cards("KS KD 9C 4H 2S"));
        round.add_player("p1", hole("*S QD"), Chips::new(100)).unwrap();
        round.add_player("p2", hole("KH 3C"), Chips::new(100)).unwrap();

        // Jokers are rejected on a standard table.
        let err = Engine::default().settle(&round).unwrap_err();
        assert_eq!(
            err,
            SettleError::Eval {
                player_id: "p1".into(),
                source: EvalError::JokersNotAllowed(round.players[0].hole_cards[0]),
            }
        );

        let engine = Engine::new(SettleConfig {
            variant: TableVariant::Jokers,
            ..Default::default()
        });
        let settlement = engine.settle(&round).unwrap();
        assert_eq!(payoffs(&settlement), [("p1".to_string(), 200)]);
        assert_eq!(round.players[0].hole_cards[0].rank(), Rank::Joker);
    }

    #[test]
    fn settle_rejects_malformed_rounds() {
        let mut round = Round::new(cards("7S 7D 2C 5H 9S"));
        round.add_player("p1", hole("7C 3D"), Chips::new(100)).unwrap();
        round.add_player("p2", hole("7C KD"), Chips::new(100)).unwrap();
        assert_eq!(
            Engine::default().settle(&round),
            Err(SettleError::DuplicateCard("7C".parse().unwrap()))
        );

        // Seats pushed without the builder.
        let mut round = Round::new(cards("7S 7D 2C 5H 9S"));
        round.add_player("p1", hole("7C 3D"), Chips::new(100)).unwrap();
        round.players.push(Seat {
            player_id: "p1".into(),
            hole_cards: hole("KS KD"),
        });
        assert_eq!(
            Engine::default().settle(&round),
            Err(SettleError::DuplicatePlayer("p1".into()))
        );

        // Everybody folded.
        let mut round = Round::new(cards("7S 7D 2C 5H 9S"));
        round.add_folded("p1", Chips::new(100)).unwrap();
        assert_eq!(
            Engine::default().settle(&round),
            Err(SettleError::NoContestants(Chips::new(100)))
        );
    }

    #[test]
    fn round_rejects_seated_players() {
        let mut round = Round::new(cards("7S 7D 2C 5H 9S"));
        round.add_player("p1", hole("7C 3D"), Chips::new(100)).unwrap();
        round.add_folded("p2", Chips::new(20)).unwrap();

        assert_eq!(
            round.add_player("p1", hole("KS KD"), Chips::new(100)),
            Err(SettleError::DuplicatePlayer("p1".into()))
        );
        assert_eq!(
            round.add_folded("p1", Chips::new(50)),
            Err(SettleError::DuplicatePlayer("p1".into()))
        );
        assert_eq!(
            round.add_player("p2", hole("KS KD"), Chips::new(100)),
            Err(SettleError::DuplicatePlayer("p2".into()))
        );
        assert_eq!(round.add_folded("p3", Chips::new(u32::MAX)), Ok(()));

        // Rejected players leave the round unchanged.
        assert_eq!(round.players.len(), 1);
        assert_eq!(round.ledger.get(&"p1".into()), Some(Chips::new(100)));
        assert_eq!(round.ledger.get(&"p2".into()), Some(Chips::new(20)));
        assert_eq!(Engine::default().settle(&round), Err(SettleError::Overflow));
    }
}
