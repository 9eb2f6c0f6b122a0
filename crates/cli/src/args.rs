// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Command line values.
use anyhow::{Error, Result, anyhow, bail};
use std::str::FromStr;

use showdown_core::{Card, Chips, OddChips, PlayerId};

/// A player at showdown given as `id:card,card:bet`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerArg {
    pub player_id: PlayerId,
    pub hole_cards: [Card; 2],
    pub bet: Chips,
}

impl FromStr for PlayerArg {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let [id, cards, bet] = fields::<3>(s)?;

        let cards = cards
            .split(',')
            .map(|c| c.trim().parse::<Card>())
            .collect::<Result<Vec<_>, _>>()?;
        let hole_cards: [Card; 2] = cards
            .try_into()
            .map_err(|cards: Vec<Card>| anyhow!("expected 2 hole cards, got {}", cards.len()))?;

        Ok(Self {
            player_id: PlayerId::from(id),
            hole_cards,
            bet: parse_chips(bet)?,
        })
    }
}

/// A folded player given as `id:bet`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldedArg {
    pub player_id: PlayerId,
    pub bet: Chips,
}

impl FromStr for FoldedArg {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let [id, bet] = fields::<2>(s)?;
        Ok(Self {
            player_id: PlayerId::from(id),
            bet: parse_chips(bet)?,
        })
    }
}

/// The odd chips policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OddChipsArg {
    /// Leave the odd chips in the pot.
    #[default]
    Drop,
    /// Pay the odd chips in seat order.
    SeatOrder,
}

impl From<OddChipsArg> for OddChips {
    fn from(arg: OddChipsArg) -> Self {
        match arg {
            OddChipsArg::Drop => OddChips::Drop,
            OddChipsArg::SeatOrder => OddChips::SeatOrder,
        }
    }
}

fn fields<const N: usize>(s: &str) -> Result<[&str; N]> {
    let fields = s.split(':').map(str::trim).collect::<Vec<_>>();
    match fields.try_into() {
        Ok(fields) => Ok(fields),
        Err(fields) => bail!("expected {N} fields separated by ':', got {}", fields.len()),
    }
}

fn parse_chips(s: &str) -> Result<Chips> {
    let amount = s
        .parse::<u32>()
        .map_err(|e| anyhow!("invalid bet {s:?}: {e}"))?;
    Ok(Chips::new(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_player() {
        let player = "p1:7C,3D:100".parse::<PlayerArg>().unwrap();
        assert_eq!(player.player_id, PlayerId::from("p1"));
        assert_eq!(player.hole_cards, ["7C".parse().unwrap(), "3D".parse().unwrap()]);
        assert_eq!(player.bet, Chips::new(100));

        let player = "p2: *s, kd : 5".parse::<PlayerArg>().unwrap();
        assert!(player.hole_cards[0].is_joker());

        assert!("p1:7C:100".parse::<PlayerArg>().is_err());
        assert!("p1:7C,3D,4D:100".parse::<PlayerArg>().is_err());
        assert!("p1:7C,3X:100".parse::<PlayerArg>().is_err());
        assert!("p1:7C,3D".parse::<PlayerArg>().is_err());
        assert!("p1:7C,3D:-5".parse::<PlayerArg>().is_err());
    }

    #[test]
    fn parse_folded() {
        let folded = "p3:20".parse::<FoldedArg>().unwrap();
        assert_eq!(folded.player_id, PlayerId::from("p3"));
        assert_eq!(folded.bet, Chips::new(20));

        assert!("p3".parse::<FoldedArg>().is_err());
        assert!("p3:twenty".parse::<FoldedArg>().is_err());
    }
}
