// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pots winners resolution.
use ahash::AHashMap;
use log::{error, info, warn};

use showdown_eval::Hand;

use crate::{Chips, OddChips, Payout, PlayerId, SettleError, SidePot};

/// Finds the winners of each pot and splits the pot chips between them.
///
/// A pot with a single contestant is paid without looking at the hands, all the
/// other contestants must have a hand in `hands`.
pub fn resolve(
    mut pots: Vec<SidePot>,
    hands: &AHashMap<PlayerId, Hand>,
    odd_chips: OddChips,
) -> Result<Vec<SidePot>, SettleError> {
    for pot in pots.iter_mut() {
        let winners = match pot.contestants.as_slice() {
            [] => {
                error!("{} pot of {} has no contestants", pot.kind, pot.total);
                return Err(SettleError::NoContestants(pot.total));
            }
            [player_id] => vec![player_id.clone()],
            contestants => best_hands(contestants, hands)?,
        };

        split(pot, winners, odd_chips);

        let winners = pot
            .winners
            .iter()
            .map(|id| id.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        info!("{} pot {} won by {winners}", pot.kind, pot.total);
    }

    Ok(pots)
}

/// The contestants with the strongest hand, in seat order.
///
/// Hands are compared by category and then card by card on the effective rank,
/// so a joker counts as the card it stands in for.
fn best_hands(
    contestants: &[PlayerId],
    hands: &AHashMap<PlayerId, Hand>,
) -> Result<Vec<PlayerId>, SettleError> {
    let mut ranked = contestants
        .iter()
        .map(|id| match hands.get(id) {
            Some(hand) => Ok((id, hand)),
            None => {
                error!("No hand for contestant {id}");
                Err(SettleError::MissingHand(id.clone()))
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(best) = ranked.iter().map(|(_, hand)| hand.category()).max() {
        ranked.retain(|(_, hand)| hand.category() == best);
    }

    for idx in 0..Hand::SIZE {
        if ranked.len() == 1 {
            break;
        }

        if let Some(top) = ranked.iter().map(|(_, hand)| hand.cards()[idx].rank()).max() {
            ranked.retain(|(_, hand)| hand.cards()[idx].rank() == top);
        }
    }

    Ok(ranked.into_iter().map(|(id, _)| id.clone()).collect())
}

fn split(pot: &mut SidePot, winners: Vec<PlayerId>, odd_chips: OddChips) {
    let count = winners.len() as u32;
    let share = pot.total / count;
    let remainder = pot.total % count;

    pot.payouts = winners
        .iter()
        .enumerate()
        .map(|(idx, player_id)| {
            let odd = odd_chips == OddChips::SeatOrder && (idx as u32) < remainder.amount();
            Payout {
                player_id: player_id.clone(),
                chips: if odd { share + Chips::new(1) } else { share },
            }
        })
        .collect();

    pot.odd_chips = match odd_chips {
        OddChips::Drop => remainder,
        OddChips::SeatOrder => Chips::ZERO,
    };

    if !pot.odd_chips.is_zero() {
        warn!(
            "{} pot of {} split {count} ways leaves {} odd chips",
            pot.kind, pot.total, pot.odd_chips
        );
    }

    pot.amount_per_winner = share;
    pot.winners = winners;
}
