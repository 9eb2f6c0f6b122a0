// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example classify_all
// ...
// Total hands      2598960
// Elapsed:         0.412s
// Hands/sec:       6308155
//
// High Card:       1302540
// One Pair:        1098240
// ...
// ```
//
// Pass `--jokers` to classify all the 5 cards hands of a deck with two jokers.

use std::time::Instant;

use showdown_eval::*;

fn main() {
    let jokers = std::env::args().any(|arg| arg == "--jokers");
    let deck = if jokers {
        Deck::with_jokers(Deck::MAX_JOKERS)
    } else {
        Deck::default()
    };

    let classifier = Classifier::new(TableVariant::Jokers);
    let mut counts = [0usize; HandCategory::COUNT];

    let now = Instant::now();
    deck.for_each(5, |cards| match classifier.classify(&cards[..2], &cards[2..]) {
        Ok(hand) => counts[hand.category() as usize] += 1,
        Err(e) => eprintln!("Classify error: {e}"),
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for category in HandCategory::categories() {
        let label = format!("{category}:");
        println!("{label:<17}{}", counts[category as usize]);
    }
}
