// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown command line, settles a round and prints hands and pots.
#![warn(clippy::all, rust_2018_idioms)]
use anyhow::{Result, bail};
use clap::Parser;
use log::error;

use showdown_core::{Card, Chips, Engine, Round, SettleConfig, Settlement, TableVariant};

mod args;
use args::{FoldedArg, OddChipsArg, PlayerArg};

#[derive(Debug, Parser)]
struct Cli {
    /// The community cards, e.g. 7S,7D,2C,5H,9S.
    #[clap(long, short, value_delimiter = ',')]
    board: Vec<Card>,
    /// A player at showdown as id:card,card:bet, in seat order.
    #[clap(long, short)]
    player: Vec<PlayerArg>,
    /// A folded player bet as id:bet.
    #[clap(long, short)]
    folded: Vec<FoldedArg>,
    /// Jokers play as wildcards.
    #[clap(long, short)]
    jokers: bool,
    /// The split pots odd chips policy.
    #[clap(long, value_enum, default_value_t = OddChipsArg::Drop)]
    odd_chips: OddChipsArg,
    /// Checks the bets add up to this pot.
    #[clap(long)]
    pot: Option<u32>,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    if let Err(e) = run(Cli::parse()) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.player.is_empty() {
        bail!("at least one player is required");
    }

    let mut round = Round::new(cli.board);
    for player in cli.player {
        round.add_player(player.player_id, player.hole_cards, player.bet)?;
    }

    for folded in cli.folded {
        round.add_folded(folded.player_id, folded.bet)?;
    }

    if let Some(pot) = cli.pot {
        round.ledger.verify_total(Chips::new(pot))?;
    }

    let config = SettleConfig {
        variant: if cli.jokers {
            TableVariant::Jokers
        } else {
            TableVariant::Standard
        },
        odd_chips: cli.odd_chips.into(),
    };

    let settlement = Engine::new(config).settle(&round)?;
    print_settlement(&settlement);

    Ok(())
}

fn print_settlement(settlement: &Settlement) {
    for h in &settlement.hands {
        println!("{:<8} {}", h.player_id, h.hand);
    }

    if !settlement.hands.is_empty() {
        println!();
    }

    for pot in &settlement.pots {
        let contestants = pot
            .contestants
            .iter()
            .map(|id| id.as_str())
            .collect::<Vec<_>>()
            .join(",");
        println!("{} pot {:>10}  contested by {contestants}", pot.kind, pot.total);

        for payout in &pot.payouts {
            println!("    {:<8} {:>10}", payout.player_id, payout.chips);
        }

        if !pot.odd_chips.is_zero() {
            println!("    {:<8} {:>10}", "odd", pot.odd_chips);
        }
    }

    println!();
    for payoff in settlement.payoffs() {
        println!("{:<8} won {:>10}", payoff.player_id, payoff.chips);
    }
}
