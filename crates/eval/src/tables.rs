// Copyright (C) 2025 Showdown Developers
// SPDX-License-Identifier: Apache-2.0

//! Evaluator lookup tables.
//!
//! A [LookupTables] value holds the immutable table set the evaluator
//! runs on: the per-card prime weights, the suit automaton for flush
//! detection, the dense class table, and the hash to class dual map.
//! Tables are built once and shared read-only, either through
//! [LookupTables::shared] or injected into an [Evaluator](crate::Evaluator)
//! by hand.
use ahash::AHashMap;
use log::debug;
use showdown_cards::{Deck, Rank};
use std::{
    sync::{Arc, OnceLock},
    time::Instant,
};

use crate::class::{EqClass, HandKind};

/// Prime weight for each rank, deuce through ace.
const RANK_PRIMES: [u32; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

/// The number of non-null 5-card equivalence classes.
pub const CLASS_COUNT: usize = 7462;

/// Suit automaton state for a mixed-suit hand.
///
/// State 0 is the start state, states 1 to 4 mean all cards seen so far
/// share the suit `state - 1`, state 5 is the absorbing mixed-suit state.
/// A 5-card walk from the start ends below this state iff the hand is a
/// flush.
pub(crate) const FLUSH_MIXED: u8 = 5;

/// The two class codes reachable from one hash product.
///
/// A hash fingerprints a rank multiset, so it can name a flush-branch
/// class, a nonflush-branch class, or both: `AKQJT` is the royal flush
/// when suited and the ace-high straight otherwise. A missing branch is
/// 0, the null class code.
#[derive(Debug, Default, Clone, Copy)]
pub struct HashEntry {
    /// Class code when the five cards share a suit.
    pub flush: u16,
    /// Class code for mixed suits.
    pub nonflush: u16,
}

/// The immutable table set consumed by the evaluator.
pub struct LookupTables {
    /// Per-card prime weight, equal across cards sharing a rank.
    pub(crate) primes: [u32; 52],
    /// Suit automaton, state x card code -> next state.
    pub(crate) flush: [[u8; 52]; 6],
    /// Dense class table, index == code, null sentinel at 0.
    pub(crate) classes: Vec<EqClass>,
    /// Hash product -> class codes dual map.
    pub(crate) lookup: AHashMap<u32, HashEntry>,
}

impl LookupTables {
    /// Builds the standard table set.
    pub fn build() -> LookupTables {
        let now = Instant::now();

        let mut primes = [0u32; 52];
        for (code, prime) in primes.iter_mut().enumerate() {
            *prime = RANK_PRIMES[code % 13];
        }

        let mut flush = [[0u8; 52]; 6];
        for code in 0..Deck::SIZE {
            let locked = (code / 13) as u8 + 1;
            flush[0][code] = locked;
            for state in 1..=4u8 {
                flush[state as usize][code] = if state == locked { state } else { FLUSH_MIXED };
            }
            flush[FLUSH_MIXED as usize][code] = FLUSH_MIXED;
        }

        let mut classes = Vec::with_capacity(CLASS_COUNT + 1);
        classes.push(EqClass::NULL);

        let ranks = Rank::ranks().collect::<Vec<_>>();
        for (kind, pattern) in class_patterns() {
            let code = classes.len() as u16;
            let hash = pattern.iter().map(|&r| RANK_PRIMES[r as usize]).product();
            let ranks = [
                ranks[pattern[0] as usize],
                ranks[pattern[1] as usize],
                ranks[pattern[2] as usize],
                ranks[pattern[3] as usize],
                ranks[pattern[4] as usize],
            ];
            classes.push(EqClass::new(code, kind, ranks, hash));
        }
        debug_assert_eq!(classes.len(), CLASS_COUNT + 1);

        let mut lookup: AHashMap<u32, HashEntry> = AHashMap::with_capacity(CLASS_COUNT);
        for class in classes.iter().skip(1) {
            let entry = lookup.entry(class.hash()).or_default();
            match class.kind() {
                HandKind::Flush | HandKind::StraightFlush => entry.flush = class.code(),
                _ => entry.nonflush = class.code(),
            }
        }

        debug!(
            "Built {} equivalence classes, {} hash entries in {:.3?}",
            classes.len() - 1,
            lookup.len(),
            now.elapsed()
        );

        LookupTables {
            primes,
            flush,
            classes,
            lookup,
        }
    }

    /// The process-wide standard tables, built on first use.
    pub fn shared() -> Arc<LookupTables> {
        static TABLES: OnceLock<Arc<LookupTables>> = OnceLock::new();
        TABLES.get_or_init(|| Arc::new(LookupTables::build())).clone()
    }

    /// The dense class table, null sentinel first.
    pub fn classes(&self) -> &[EqClass] {
        &self.classes
    }

    /// The class for a code.
    ///
    /// Panics if the code is out of table range.
    pub fn class(&self, code: u16) -> &EqClass {
        &self.classes[code as usize]
    }

    /// The null class sentinel.
    pub fn null_class(&self) -> &EqClass {
        &self.classes[0]
    }

    /// The class codes for a hash product, `None` on a lookup miss.
    pub fn entry(&self, hash: u32) -> Option<HashEntry> {
        self.lookup.get(&hash).copied()
    }
}

/// All 7462 rank patterns in ascending strength order.
///
/// Categories run from high card up to straight flush; within a category
/// patterns sort by their significance tuple, most significant rank
/// first, so the table index order is the class strength order.
fn class_patterns() -> Vec<(HandKind, [u8; 5])> {
    let mut patterns = Vec::with_capacity(CLASS_COUNT);
    unpaired_patterns(HandKind::HighCard, &mut patterns);
    pair_patterns(&mut patterns);
    two_pair_patterns(&mut patterns);
    trips_patterns(&mut patterns);
    straight_patterns(HandKind::Straight, &mut patterns);
    unpaired_patterns(HandKind::Flush, &mut patterns);
    full_house_patterns(&mut patterns);
    quads_patterns(&mut patterns);
    straight_patterns(HandKind::StraightFlush, &mut patterns);
    patterns
}

/// Whether five distinct descending ranks form a 5-run, ace low included.
fn is_run(r: [u8; 5]) -> bool {
    r[0] - r[4] == 4 || r == [12, 3, 2, 1, 0]
}

fn unpaired_patterns(kind: HandKind, patterns: &mut Vec<(HandKind, [u8; 5])>) {
    for a in 4..13 {
        for b in 3..a {
            for c in 2..b {
                for d in 1..c {
                    for e in 0..d {
                        if !is_run([a, b, c, d, e]) {
                            patterns.push((kind, [a, b, c, d, e]));
                        }
                    }
                }
            }
        }
    }
}

fn pair_patterns(patterns: &mut Vec<(HandKind, [u8; 5])>) {
    for p in 0..13 {
        for k1 in 2..13 {
            for k2 in 1..k1 {
                for k3 in 0..k2 {
                    if p != k1 && p != k2 && p != k3 {
                        patterns.push((HandKind::Pair, [p, p, k1, k2, k3]));
                    }
                }
            }
        }
    }
}

fn two_pair_patterns(patterns: &mut Vec<(HandKind, [u8; 5])>) {
    for hi in 1..13 {
        for lo in 0..hi {
            for k in 0..13 {
                if k != hi && k != lo {
                    patterns.push((HandKind::TwoPair, [hi, hi, lo, lo, k]));
                }
            }
        }
    }
}

fn trips_patterns(patterns: &mut Vec<(HandKind, [u8; 5])>) {
    for t in 0..13 {
        for k1 in 1..13 {
            for k2 in 0..k1 {
                if t != k1 && t != k2 {
                    patterns.push((HandKind::ThreeOfAKind, [t, t, t, k1, k2]));
                }
            }
        }
    }
}

fn straight_patterns(kind: HandKind, patterns: &mut Vec<(HandKind, [u8; 5])>) {
    // The wheel ranks 5432A, below every other straight.
    patterns.push((kind, [3, 2, 1, 0, 12]));
    for top in 4..13 {
        patterns.push((kind, [top, top - 1, top - 2, top - 3, top - 4]));
    }
}

fn full_house_patterns(patterns: &mut Vec<(HandKind, [u8; 5])>) {
    for t in 0..13 {
        for p in 0..13 {
            if p != t {
                patterns.push((HandKind::FullHouse, [t, t, t, p, p]));
            }
        }
    }
}

fn quads_patterns(patterns: &mut Vec<(HandKind, [u8; 5])>) {
    for q in 0..13 {
        for k in 0..13 {
            if k != q {
                patterns.push((HandKind::FourOfAKind, [q, q, q, q, k]));
            }
        }
    }
}
