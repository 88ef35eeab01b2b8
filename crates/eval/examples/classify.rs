// Copyright (C) 2025 Showdown Developers
// SPDX-License-Identifier: Apache-2.0
//
// Classify hands given in two-character notation:
//
// ```bash
// $ cargo r --example classify -- "Ac Kc Qc Jc Tc" "Ac Ad Ah As Kc 2d 2h"
// Ac Kc Qc Jc Tc -> AKQJT (Straight Flush) [7462]
// Ac Ad Ah As Kc 2d 2h -> AAAAK (Four of a Kind) [7452]
// ```
use clap::Parser;

use showdown_eval::{Evaluator, parse_hand};

#[derive(Debug, Parser)]
struct Cli {
    /// Hands in two-character notation, e.g. "Ac Kc Qc Jc Tc".
    #[clap(required = true)]
    hands: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let eval = Evaluator::default();

    for hand in &cli.hands {
        let cards = parse_hand(hand)?;
        let class = eval.eval(&cards);
        println!("{hand} -> {class} [{}]", class.code());
    }

    Ok(())
}
