// Copyright (C) 2025 Showdown Developers
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand classifier.
//!
//! Classifies 5, 6, 7, and N cards Poker hands into one of the 7462
//! hand-strength equivalence classes using the [Cactus Kev's][kevlink]
//! prime-weight perfect hash and a suit automaton for flush detection,
//! both held by a [LookupTables] set shared by [Evaluator] instances.
//!
//! To classify a hand create an evaluator and call [Evaluator::eval]:
//!
//! ```
//! # use showdown_eval::*;
//! let eval = Evaluator::default();
//! let royal = eval.eval(&parse_hand("Ac Kc Qc Jc Tc").unwrap());
//! let quads = eval.eval(&parse_hand("Ac Ad Ah As Kc").unwrap());
//! assert_eq!(royal.kind(), HandKind::StraightFlush);
//! assert!(royal > quads);
//! ```
//!
//! The [infer] module provides the inverse machinery used to prove the
//! classification correct: it realizes a class as a canonical hand and
//! computes the set of cards that can be appended to a hand without
//! changing its class.
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod class;
pub mod eval;
pub mod infer;
pub mod tables;

pub use class::{EqClass, HandKind};
pub use eval::Evaluator;
pub use tables::LookupTables;

// Reexport cards types.
pub use showdown_cards::{Card, Deck, Rank, Suit, format_hand, parse_hand};
