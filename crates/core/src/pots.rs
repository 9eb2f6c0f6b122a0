// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Main and side pots.
use log::{debug, error};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{BetLedger, Chips, PlayerId, SettleError};

/// The pot kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PotKind {
    /// The first pot, contested by all the players with a bet.
    Main,
    /// A pot for the chips above a player all in.
    Side,
}

impl fmt::Display for PotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PotKind::Main => f.pad("Main"),
            PotKind::Side => f.pad("Side"),
        }
    }
}

/// Chips paid to a pot winner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    /// The winner.
    pub player_id: PlayerId,
    /// The chips won.
    pub chips: Chips,
}

/// A pot layer and, once resolved, its winners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidePot {
    /// Main or side pot.
    pub kind: PotKind,
    /// The chips in the pot.
    pub total: Chips,
    /// The players that can win this pot in seat order.
    pub contestants: Vec<PlayerId>,
    /// The players that won this pot in seat order.
    pub winners: Vec<PlayerId>,
    /// The pot share of each winner.
    pub amount_per_winner: Chips,
    /// The chips left over from an uneven split that have not been paid.
    pub odd_chips: Chips,
    /// The chips paid to each winner.
    pub payouts: Vec<Payout>,
}

impl SidePot {
    fn new(kind: PotKind, total: Chips, contestants: Vec<PlayerId>) -> Self {
        Self {
            kind,
            total,
            contestants,
            winners: Vec::default(),
            amount_per_winner: Chips::ZERO,
            odd_chips: Chips::ZERO,
            payouts: Vec::default(),
        }
    }

    /// Checks if the pot has been resolved.
    pub fn is_resolved(&self) -> bool {
        !self.winners.is_empty()
    }
}

/// Splits the ledger bets into a main pot and side pots.
///
/// Each layer is as high as the smallest bet left by the active players and
/// takes up to that amount from every bet, folded players chips join the layer
/// without contesting it. When a single active player has chips left all the
/// remaining chips go to a pot contested only by that player.
pub fn build_pots(ledger: &BetLedger, active: &[PlayerId]) -> Result<Vec<SidePot>, SettleError> {
    // Layers and pots never exceed the ledger total.
    let ledger_total = ledger.total().inspect_err(|_| error!("Ledger total overflows"))?;

    let mut bets = ledger
        .iter()
        .map(|(id, bet)| (id, bet, active.contains(id)))
        .collect::<Vec<_>>();

    let mut pots = Vec::<SidePot>::new();
    loop {
        let live = bets
            .iter()
            .filter(|(_, bet, is_active)| *is_active && !bet.is_zero())
            .collect::<Vec<_>>();

        let Some(level) = live.iter().map(|(_, bet, _)| *bet).min() else {
            break;
        };

        let kind = if pots.is_empty() {
            PotKind::Main
        } else {
            PotKind::Side
        };

        let contestants = live.iter().map(|(id, _, _)| (*id).clone()).collect::<Vec<_>>();

        if live.len() == 1 {
            let total = bets.iter().map(|(_, bet, _)| *bet).sum::<Chips>();
            debug!("{kind} pot {total} uncontested by {}", contestants[0]);

            pots.push(SidePot::new(kind, total, contestants));
            bets.iter_mut().for_each(|(_, bet, _)| *bet = Chips::ZERO);
            break;
        }

        let mut total = Chips::ZERO;
        for (_, bet, _) in bets.iter_mut() {
            let chips = (*bet).min(level);
            *bet -= chips;
            total += chips;
        }

        debug!(
            "{kind} pot {total} level {level} contested by {}",
            contestants.len()
        );
        pots.push(SidePot::new(kind, total, contestants));
    }

    // Folded players chips above the last active bet.
    let dead = bets.iter().map(|(_, bet, _)| *bet).sum::<Chips>();
    if !dead.is_zero() {
        match pots.last_mut() {
            Some(pot) => pot.total += dead,
            None => {
                error!("No active player for {dead} chips");
                return Err(SettleError::NoContestants(dead));
            }
        }
    }

    let pots_total = pots.iter().map(|p| p.total).sum::<Chips>();
    if pots_total != ledger_total {
        error!("Pots total {pots_total} ledger total {ledger_total}");
        return Err(SettleError::Conservation {
            pots: pots_total,
            ledger: ledger_total,
        });
    }

    Ok(pots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn bets(bets: &[(&str, u32)]) -> BetLedger {
        BetLedger::from_bets(bets.iter().map(|(id, bet)| (*id, Chips::new(*bet)))).unwrap()
    }

    fn ids(ids: &[&str]) -> Vec<PlayerId> {
        ids.iter().map(|id| PlayerId::from(*id)).collect()
    }

    fn layers(pots: &[SidePot]) -> Vec<(PotKind, u32, Vec<PlayerId>)> {
        pots.iter()
            .map(|p| (p.kind, p.total.amount(), p.contestants.clone()))
            .collect()
    }

    #[test]
    fn all_in_layers() {
        let ledger = bets(&[("p1", 100), ("p2", 300), ("p3", 500)]);
        let pots = build_pots(&ledger, &ids(&["p1", "p2", "p3"])).unwrap();

        assert_eq!(
            layers(&pots),
            [
                (PotKind::Main, 300, ids(&["p1", "p2", "p3"])),
                (PotKind::Side, 400, ids(&["p2", "p3"])),
                (PotKind::Side, 200, ids(&["p3"])),
            ]
        );
        assert!(pots.iter().all(|p| !p.is_resolved()));
    }

    #[test]
    fn equal_bets_single_pot() {
        let ledger = bets(&[("p1", 200), ("p2", 200), ("p3", 200)]);
        let pots = build_pots(&ledger, &ids(&["p1", "p2", "p3"])).unwrap();
        assert_eq!(
            layers(&pots),
            [(PotKind::Main, 600, ids(&["p1", "p2", "p3"]))]
        );
    }

    #[test]
    fn folded_chips_join_layers() {
        // p2 folded after calling 200.
        let ledger = bets(&[("p1", 100), ("p2", 200), ("p3", 300), ("p4", 300)]);
        let pots = build_pots(&ledger, &ids(&["p1", "p3", "p4"])).unwrap();

        assert_eq!(
            layers(&pots),
            [
                (PotKind::Main, 400, ids(&["p1", "p3", "p4"])),
                (PotKind::Side, 500, ids(&["p3", "p4"])),
            ]
        );
    }

    #[test]
    fn folded_chips_above_active_bets() {
        // p3 raised and folded to the p1 and p2 all ins.
        let ledger = bets(&[("p1", 100), ("p2", 100), ("p3", 300)]);
        let pots = build_pots(&ledger, &ids(&["p1", "p2"])).unwrap();
        assert_eq!(layers(&pots), [(PotKind::Main, 500, ids(&["p1", "p2"]))]);
    }

    #[test]
    fn single_active_player() {
        // Everybody folded to p3.
        let ledger = bets(&[("p1", 10), ("p2", 20), ("p3", 40)]);
        let pots = build_pots(&ledger, &ids(&["p3"])).unwrap();
        assert_eq!(layers(&pots), [(PotKind::Main, 70, ids(&["p3"]))]);

        // p3 folded, p2 is the only one left with chips after the main pot.
        let ledger = bets(&[("p1", 100), ("p2", 300), ("p3", 500)]);
        let pots = build_pots(&ledger, &ids(&["p1", "p2"])).unwrap();
        assert_eq!(
            layers(&pots),
            [
                (PotKind::Main, 300, ids(&["p1", "p2"])),
                (PotKind::Side, 600, ids(&["p2"])),
            ]
        );
    }

    #[test]
    fn no_active_player() {
        let ledger = bets(&[("p1", 10), ("p2", 20)]);
        assert_eq!(
            build_pots(&ledger, &[]),
            Err(SettleError::NoContestants(Chips::new(30)))
        );

        // Nothing to settle.
        let ledger = bets(&[("p1", 0)]);
        assert_eq!(build_pots(&ledger, &ids(&["p1"])), Ok(vec![]));
    }

    #[test]
    fn pots_conserve_chips() {
        let mut rng = StdRng::seed_from_u64(7);
        let players = ids(&["p1", "p2", "p3", "p4", "p5", "p6"]);

        for _ in 0..1_000 {
            let bets = players
                .iter()
                .map(|id| (id.clone(), Chips::new(rng.random_range(0..5) * 50)));
            let ledger = BetLedger::from_bets(bets).unwrap();

            let active = players
                .iter()
                .filter(|_| rng.random_bool(0.7))
                .cloned()
                .collect::<Vec<_>>();

            let has_live = ledger
                .iter()
                .any(|(id, bet)| active.contains(id) && !bet.is_zero());

            match build_pots(&ledger, &active) {
                Ok(pots) => {
                    let total = pots.iter().map(|p| p.total).sum::<Chips>();
                    assert_eq!(Ok(total), ledger.total());
                    assert!(pots.iter().all(|p| !p.contestants.is_empty()));
                    assert!(
                        pots.iter()
                            .flat_map(|p| &p.contestants)
                            .all(|id| active.contains(id))
                    );

                    // Later pots are contested by fewer players.
                    for w in pots.windows(2) {
                        assert!(w[1].contestants.iter().all(|id| w[0].contestants.contains(id)));
                        assert_eq!(w[1].kind, PotKind::Side);
                    }
                }
                Err(e) => {
                    assert!(!has_live);
                    assert_eq!(e, SettleError::NoContestants(ledger.total().unwrap()));
                }
            }
        }
    }

    #[test]
    fn pots_reject_overflowing_ledger() {
        let ledger = bets(&[("p1", u32::MAX), ("p2", 1)]);
        let active = ids(&["p1", "p2"]);
        assert_eq!(build_pots(&ledger, &active), Err(SettleError::Overflow));

        let ledger = bets(&[("p1", u32::MAX - 1), ("p2", 1)]);
        let pots = build_pots(&ledger, &active).unwrap();
        assert_eq!(
            layers(&pots),
            [
                (PotKind::Main, 2, ids(&["p1", "p2"])),
                (PotKind::Side, u32::MAX - 2, ids(&["p1"])),
            ]
        );
    }
}
