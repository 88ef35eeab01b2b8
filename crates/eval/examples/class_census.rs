// Copyright (C) 2025 Showdown Developers
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example class_census
// Total hands      2598960
// Classes          7462
// ...
// ```
use std::time::Instant;

use showdown_eval::{Deck, Evaluator, HandKind};

fn main() {
    // Evaluate all 2.6M 5-card hands.
    let now = Instant::now();
    let eval = Evaluator::default();

    let mut counts = [0usize; 10];
    let mut seen = vec![false; eval.tables().classes().len()];
    Deck::default().for_each(5, |hand| {
        let class = eval.eval(hand);
        counts[class.kind() as usize] += 1;
        seen[class.code() as usize] = true;
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Classes          {}", seen.iter().filter(|&&s| s).count());
    println!("Elapsed:         {elapsed:.3}s");
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    println!("High Card:       {}", counts[HandKind::HighCard as usize]);
    println!("Pair:            {}", counts[HandKind::Pair as usize]);
    println!("Two Pair:        {}", counts[HandKind::TwoPair as usize]);
    println!("Three of a Kind: {}", counts[HandKind::ThreeOfAKind as usize]);
    println!("Straight:        {}", counts[HandKind::Straight as usize]);
    println!("Flush:           {}", counts[HandKind::Flush as usize]);
    println!("Full House:      {}", counts[HandKind::FullHouse as usize]);
    println!("Four of a Kind:  {}", counts[HandKind::FourOfAKind as usize]);
    println!("Straight Flush:  {}", counts[HandKind::StraightFlush as usize]);
}
