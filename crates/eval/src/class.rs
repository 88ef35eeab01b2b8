// Copyright (C) 2025 Showdown Developers
// SPDX-License-Identifier: Apache-2.0

//! Hand-strength equivalence classes.
use serde::{Deserialize, Serialize};
use showdown_cards::Rank;
use std::{cmp::Ordering, fmt};

/// The kind of a Poker hand.
///
/// A royal flush is the top [HandKind::StraightFlush], not a kind of its
/// own. Kinds order by strength, with [HandKind::Null] below everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandKind {
    /// Not a poker hand.
    Null = 0,
    /// Five unpaired cards.
    HighCard,
    /// One pair.
    Pair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Five cards in rank sequence.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three of a kind plus a pair.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// A straight in one suit.
    StraightFlush,
}

impl fmt::Display for HandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            HandKind::Null => "Null",
            HandKind::HighCard => "High Card",
            HandKind::Pair => "Pair",
            HandKind::TwoPair => "Two Pair",
            HandKind::ThreeOfAKind => "Three of a Kind",
            HandKind::Straight => "Straight",
            HandKind::Flush => "Flush",
            HandKind::FullHouse => "Full House",
            HandKind::FourOfAKind => "Four of a Kind",
            HandKind::StraightFlush => "Straight Flush",
        };

        write!(f, "{kind}")
    }
}

/// A hand-strength equivalence class.
///
/// All 5-card hands in one class are strategically interchangeable: they
/// beat, and lose to, exactly the same hands. There are 7462 non-null
/// classes plus the null sentinel at code 0, densely numbered so that the
/// class table index equals the code and a higher code is a stronger hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EqClass {
    code: u16,
    kind: HandKind,
    ranks: [Rank; 5],
    hash: u32,
}

impl EqClass {
    /// The null class, weaker than every real class.
    pub(crate) const NULL: EqClass = EqClass {
        code: 0,
        kind: HandKind::Null,
        ranks: [Rank::Deuce; 5],
        hash: 0,
    };

    pub(crate) fn new(code: u16, kind: HandKind, ranks: [Rank; 5], hash: u32) -> EqClass {
        EqClass {
            code,
            kind,
            ranks,
            hash,
        }
    }

    /// The dense class code, 0 for the null class.
    pub fn code(&self) -> u16 {
        self.code
    }

    /// The hand kind of this class.
    pub fn kind(&self) -> HandKind {
        self.kind
    }

    /// Canonical ranks, most significant first.
    ///
    /// The significance order is the comparison order within the kind, so
    /// the ace-low straight reads `5432A`.
    pub fn ranks(&self) -> &[Rank; 5] {
        &self.ranks
    }

    /// The canonical rank string, e.g. `"AKQJT"`, `"-----"` for null.
    pub fn cards(&self) -> String {
        if self.is_null() {
            "-----".to_string()
        } else {
            self.ranks.iter().map(ToString::to_string).collect()
        }
    }

    /// The prime-weight product of the canonical ranks.
    ///
    /// The hash depends only on the rank multiset, not on order or suits,
    /// so a flush class shares its hash with the unpaired class of the
    /// same ranks.
    pub fn hash(&self) -> u32 {
        self.hash
    }

    /// Whether this is the null class.
    pub fn is_null(&self) -> bool {
        self.code == 0
    }
}

impl PartialOrd for EqClass {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EqClass {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code.cmp(&other.code)
    }
}

impl fmt::Display for EqClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.cards(), self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_ordering() {
        use HandKind::*;
        let kinds = [
            Null,
            HighCard,
            Pair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ];

        for pair in kinds.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn class_ordering_by_code() {
        let weak = EqClass::new(1, HandKind::HighCard, [Rank::Seven; 5], 1);
        let strong = EqClass::new(2, HandKind::HighCard, [Rank::Eight; 5], 2);

        assert!(EqClass::NULL < weak);
        assert!(weak < strong);
        assert_eq!(weak.cmp(&weak), Ordering::Equal);
    }

    #[test]
    fn null_class() {
        assert!(EqClass::NULL.is_null());
        assert_eq!(EqClass::NULL.code(), 0);
        assert_eq!(EqClass::NULL.kind(), HandKind::Null);
        assert_eq!(EqClass::NULL.cards(), "-----");
        assert_eq!(EqClass::NULL.to_string(), "----- (Null)");
    }
}
