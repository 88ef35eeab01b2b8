// Copyright (C) 2025 Showdown Developers
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The 5-card evaluator multiplies the prime weights of its cards into
//! the perfect-hash product, walks the suit automaton to detect a flush,
//! and picks the matching branch of the hash to class map. The 6 and 7
//! card evaluators maximize the 5-card evaluator over fixed subset index
//! tables, [Evaluator::eval_n] does the same over every 5-card subset of
//! an arbitrary hand.
//!
//! The evaluation path is defensive: malformed input and table misses
//! degrade to the null class, nothing here returns an error. Duplicate
//! cards within one hand are a caller precondition violation with an
//! undefined, but non-panicking, result.
use showdown_cards::Card;
use std::sync::Arc;

use crate::class::EqClass;
use crate::tables::{FLUSH_MIXED, LookupTables};

/// The 5-card subsets of a 6-card hand.
const SUBSETS_6: [[usize; 5]; 6] = [
    [0, 1, 2, 3, 4],
    [0, 1, 2, 3, 5],
    [0, 1, 2, 4, 5],
    [0, 1, 3, 4, 5],
    [0, 2, 3, 4, 5],
    [1, 2, 3, 4, 5],
];

/// The 5-card subsets of a 7-card hand.
const SUBSETS_7: [[usize; 5]; 21] = [
    [0, 1, 2, 3, 4],
    [0, 1, 2, 3, 5],
    [0, 1, 2, 4, 5],
    [0, 1, 3, 4, 5],
    [0, 2, 3, 4, 5],
    [1, 2, 3, 4, 5],
    [0, 1, 2, 3, 6],
    [0, 1, 2, 4, 6],
    [0, 1, 2, 5, 6],
    [0, 1, 3, 4, 6],
    [0, 1, 3, 5, 6],
    [0, 1, 4, 5, 6],
    [0, 2, 3, 4, 6],
    [0, 2, 3, 5, 6],
    [0, 2, 4, 5, 6],
    [0, 3, 4, 5, 6],
    [1, 2, 3, 4, 6],
    [1, 2, 3, 5, 6],
    [1, 2, 4, 5, 6],
    [1, 3, 4, 5, 6],
    [2, 3, 4, 5, 6],
];

/// A Poker hand evaluator bound to a lookup table set.
///
/// Evaluators are cheap to clone and safe to share: they hold an [Arc]
/// to immutable tables and every method is a pure read.
#[derive(Clone)]
pub struct Evaluator {
    tables: Arc<LookupTables>,
}

impl Evaluator {
    /// Creates an evaluator over the given tables.
    pub fn new(tables: Arc<LookupTables>) -> Evaluator {
        Evaluator { tables }
    }

    /// The tables this evaluator runs on.
    pub fn tables(&self) -> &LookupTables {
        &self.tables
    }

    /// Evaluates a hand of any size.
    ///
    /// Hands of fewer than 5 cards map to the null class, 5 cards go
    /// through [Evaluator::eval5], 6 and 7 cards through the unrolled
    /// maximizers, anything larger through [Evaluator::eval_n].
    pub fn eval(&self, cards: &[Card]) -> &EqClass {
        match cards.len() {
            0..=4 => self.tables.null_class(),
            5 => self.eval5(cards[0], cards[1], cards[2], cards[3], cards[4]),
            6 => self.eval6(cards),
            7 => self.eval7(cards),
            _ => self.eval_n(cards),
        }
    }

    /// Evaluates a 5-card hand.
    ///
    /// The cards must be distinct, the result for a hand with duplicates
    /// is undefined.
    pub fn eval5(&self, c1: Card, c2: Card, c3: Card, c4: Card, c5: Card) -> &EqClass {
        self.class5(c1, c2, c3, c4, c5)
            .unwrap_or_else(|| self.tables.null_class())
    }

    /// Evaluates a 6-card hand over its C(6,5) subsets.
    ///
    /// Agrees with [Evaluator::eval_n] on every input.
    pub fn eval6(&self, cards: &[Card]) -> &EqClass {
        debug_assert_eq!(cards.len(), 6);
        SUBSETS_6
            .iter()
            .map(|ix| self.eval5(cards[ix[0]], cards[ix[1]], cards[ix[2]], cards[ix[3]], cards[ix[4]]))
            .max()
            .unwrap_or_else(|| self.tables.null_class())
    }

    /// Evaluates a 7-card hand over its C(7,5) subsets.
    ///
    /// Agrees with [Evaluator::eval_n] on every input.
    pub fn eval7(&self, cards: &[Card]) -> &EqClass {
        debug_assert_eq!(cards.len(), 7);
        SUBSETS_7
            .iter()
            .map(|ix| self.eval5(cards[ix[0]], cards[ix[1]], cards[ix[2]], cards[ix[3]], cards[ix[4]]))
            .max()
            .unwrap_or_else(|| self.tables.null_class())
    }

    /// Evaluates every 5-card subset and returns the strongest class.
    ///
    /// Which subset achieves the maximum is not observable. Hands of
    /// fewer than 5 cards map to the null class.
    pub fn eval_n(&self, cards: &[Card]) -> &EqClass {
        let n = cards.len();
        let mut best = self.tables.null_class();

        for i1 in 0..n {
            for i2 in (i1 + 1)..n {
                for i3 in (i2 + 1)..n {
                    for i4 in (i3 + 1)..n {
                        for i5 in (i4 + 1)..n {
                            let q = self.eval5(cards[i1], cards[i2], cards[i3], cards[i4], cards[i5]);
                            if q > best {
                                best = q;
                            }
                        }
                    }
                }
            }
        }

        best
    }

    /// The class for 5 cards, `None` on a table miss.
    ///
    /// The miss is collapsed to the null class at the public boundary.
    fn class5(&self, c1: Card, c2: Card, c3: Card, c4: Card, c5: Card) -> Option<&EqClass> {
        let t = &self.tables;
        let cards = [c1, c2, c3, c4, c5];

        let mut index = 1u32;
        let mut state = 0usize;
        for card in cards {
            index *= t.primes[card.code() as usize];
            state = t.flush[state][card.code() as usize] as usize;
        }

        let entry = t.entry(index)?;
        let code = if state != FLUSH_MIXED as usize {
            entry.flush
        } else {
            entry.nonflush
        };

        (code != 0).then(|| t.class(code))
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(LookupTables::shared())
    }
}
