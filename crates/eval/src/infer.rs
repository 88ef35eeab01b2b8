// Copyright (C) 2025 Showdown Developers
// SPDX-License-Identifier: Apache-2.0

//! Canonical hands and irrelevant-card inference.
//!
//! This module inverts the evaluator: [class_to_cards] realizes an
//! equivalence class as a concrete representative hand, and
//! [irrelevant_cards] computes every card that can be appended to a hand
//! without changing its class. Chaining the two closes the round-trip
//! loop the validation suite runs over all 7462 classes: class to hand,
//! hand plus irrelevant card, back through the evaluator to the same
//! class.
//!
//! Unlike the evaluation path these routines exist to prove correctness,
//! so malformed arguments are hard errors rather than sentinels.
use anyhow::{Result, bail};
use showdown_cards::{Card, Deck, Rank, Suit};

use crate::class::{EqClass, HandKind};

/// Realizes a class as its canonical 5-card hand.
///
/// Flush and straight flush classes take all clubs; for every other kind
/// the suits cycle clubs, diamonds, hearts, spades so that no accidental
/// flush or suited straight is created. The null class is an error.
pub fn class_to_cards(class: &EqClass) -> Result<[Card; 5]> {
    if class.is_null() {
        bail!("cannot realize the null class");
    }

    let suits: &[Suit] = match class.kind() {
        HandKind::Flush | HandKind::StraightFlush => &[Suit::Clubs],
        _ => &[Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades],
    };

    let mut cards = [Card::new(Rank::Deuce, Suit::Clubs); 5];
    for (i, &rank) in class.ranks().iter().enumerate() {
        cards[i] = Card::new(rank, suits[i % suits.len()]);
    }

    Ok(cards)
}

/// The canonical 5-card hand plus its smallest irrelevant card.
///
/// Used for 6-card round-trip checks. Errors when the class has no
/// irrelevant card at all, as happens for the weakest classes of a kind
/// where any remaining card would change the hand.
pub fn class_hand6(class: &EqClass) -> Result<[Card; 6]> {
    let hand = class_to_cards(class)?;
    let candidates = irrelevant_cards(&hand, class)?;
    let Some(&extra) = candidates.first() else {
        bail!("no irrelevant card exists for class {class}");
    };

    let mut cards = [extra; 6];
    cards[..5].copy_from_slice(&hand);
    Ok(cards)
}

/// Every card that leaves the class of `hand` unchanged when appended.
///
/// The hand must have 5, 6, or 7 cards evaluating to `class`; the cards
/// are returned in ascending code order. Per kind the exclusions are:
///
/// - StraightFlush: the suited card extending the run upward by a rank,
///   unless the hand is a royal flush.
/// - FourOfAKind: any card ranking above the kicker.
/// - FullHouse: any card matching the triple rank, which would make
///   quads, and the pair rank when the pair outranks the triple, which
///   would promote the pair to a stronger triple.
/// - Flush: suited cards above the lowest flush card or completing a run
///   among the flush cards.
/// - Straight: the rank extending the run upward, none for the ace-high
///   straight; for the wheel the run tops out at the five so the six is
///   excluded.
/// - ThreeOfAKind, TwoPair, Pair, HighCard: held ranks, ranks improving
///   a kicker, and straight completers, see the per-kind match below.
pub fn irrelevant_cards(hand: &[Card], class: &EqClass) -> Result<Vec<Card>> {
    if !matches!(hand.len(), 5..=7) {
        bail!("hand must have 5, 6, or 7 cards, got {}", hand.len());
    }

    let mut cards = (0..Deck::SIZE as u8)
        .filter_map(Card::from_code)
        .filter(|c| !hand.contains(c))
        .collect::<Vec<_>>();

    match class.kind() {
        HandKind::Null => bail!("cannot infer irrelevant cards for the null class"),
        HandKind::StraightFlush => {
            let top = class.ranks()[0];
            if top != Rank::Ace {
                let suit = flush_suit(hand);
                cards.retain(|c| c.rank() as u8 != top as u8 + 1 || c.suit() != suit);
            }
        }
        HandKind::FourOfAKind => {
            let kicker = class.ranks()[4];
            cards.retain(|c| c.rank() <= kicker);
        }
        HandKind::FullHouse => {
            let (triple, pair) = (class.ranks()[0], class.ranks()[3]);
            // A third pair card makes quads impossible but, when the pair
            // outranks the triple, promotes it to a stronger triple.
            cards.retain(|c| c.rank() != triple && (pair < triple || c.rank() != pair));
        }
        HandKind::Flush => {
            let suit = flush_suit(hand);
            let flush_ranks = hand
                .iter()
                .filter(|c| c.suit() == suit)
                .map(|c| c.rank())
                .collect::<Vec<_>>();
            let Some(&lowest) = flush_ranks.iter().min() else {
                bail!("hand has no cards in its flush suit");
            };

            cards.retain(|c| {
                c.suit() != suit || (c.rank() < lowest && !straight_with(&flush_ranks, c.rank()))
            });
        }
        HandKind::Straight => {
            let top = class.ranks()[0];
            if top != Rank::Ace {
                cards.retain(|c| c.rank() as u8 != top as u8 + 1);
            }
        }
        HandKind::ThreeOfAKind => {
            let triple = class.ranks()[0];
            let held = hand.iter().map(|c| c.rank()).collect::<Vec<_>>();
            let Some(&min_kicker) = held.iter().filter(|&&r| r != triple).min() else {
                bail!("three of a kind hand has no kickers");
            };

            cards.retain(|c| {
                !held.contains(&c.rank())
                    && c.rank() <= min_kicker
                    && !straight_with(&held, c.rank())
            });
        }
        HandKind::TwoPair => {
            let (high_pair, second_pair) = (class.ranks()[0], class.ranks()[2]);
            let held = hand.iter().map(|c| c.rank()).collect::<Vec<_>>();

            let mut counts = [0u8; 13];
            for &rank in &held {
                counts[rank as usize] += 1;
            }

            // A rank can be both a kicker and a pair here, as in AAKK22.
            let kickers = held
                .iter()
                .copied()
                .filter(|&r| r != high_pair && r != second_pair)
                .collect::<Vec<_>>();
            let Some(&min_kicker) = kickers.iter().min() else {
                bail!("two pair hand has no kickers");
            };

            cards.retain(|c| {
                let rank = c.rank();
                let paired = rank == high_pair || rank == second_pair || counts[rank as usize] >= 2;
                let outkicks = kickers.contains(&rank) && rank > second_pair;

                !paired && !outkicks && rank <= min_kicker && !straight_with(&held, rank)
            });
        }
        HandKind::Pair | HandKind::HighCard => {
            let lowest = class.ranks()[4];
            let held = hand.iter().map(|c| c.rank()).collect::<Vec<_>>();

            cards.retain(|c| {
                !held.contains(&c.rank())
                    && c.rank() <= lowest
                    && !straight_with(&held, c.rank())
            });
        }
    }

    Ok(cards)
}

/// The most common suit in the hand.
fn flush_suit(hand: &[Card]) -> Suit {
    Suit::suits()
        .max_by_key(|&s| hand.iter().filter(|c| c.suit() == s).count())
        .unwrap_or(Suit::Clubs)
}

/// Whether `held` plus `extra` contains 5 ranks in a row, ace low included.
fn straight_with(held: &[Rank], extra: Rank) -> bool {
    let mut ranks = held
        .iter()
        .chain(Some(&extra))
        .map(|&r| r as i8)
        .collect::<Vec<_>>();
    ranks.sort_unstable();
    ranks.dedup();

    // The ace also sits below the deuce for the wheel.
    if ranks.last() == Some(&(Rank::Ace as i8)) {
        ranks.insert(0, -1);
    }

    longest_run(&ranks) >= 5
}

/// The longest run of consecutive values in an ascending array.
fn longest_run(ranks: &[i8]) -> usize {
    let mut longest = 1;
    let mut run = 1;
    for pair in ranks.windows(2) {
        run = if pair[0] + 1 == pair[1] { run + 1 } else { 1 };
        longest = longest.max(run);
    }
    longest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::Evaluator;
    use showdown_cards::{format_hand, parse_hand};

    fn class_of(eval: &Evaluator, hand: &str) -> EqClass {
        eval.eval(&parse_hand(hand).unwrap()).clone()
    }

    fn irrelevant_str(eval: &Evaluator, hand: &str) -> Vec<String> {
        let hand = parse_hand(hand).unwrap();
        let class = eval.eval(&hand).clone();
        irrelevant_cards(&hand, &class)
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn canonical_hand_suits() {
        let eval = Evaluator::default();

        // Non-flush kinds cycle the suits.
        let class = class_of(&eval, "Tc 9d 8h 7s 6c");
        let hand = class_to_cards(&class).unwrap();
        assert_eq!(format_hand(&hand), "Tc 9d 8h 7s 6c");

        // Flush kinds stay in clubs.
        let class = class_of(&eval, "Ah Kh Qh 9h 7h");
        let hand = class_to_cards(&class).unwrap();
        assert_eq!(format_hand(&hand), "Ac Kc Qc 9c 7c");

        let err = class_to_cards(eval.tables().null_class());
        assert!(err.is_err());
    }

    #[test]
    fn canonical_hand_round_trip() {
        let eval = Evaluator::default();

        for code in [1u16, 1278, 4138, 4996, 5854, 5864, 7141, 7297, 7453, 7462] {
            let class = eval.tables().class(code);
            let hand = class_to_cards(class).unwrap();
            assert_eq!(
                eval.eval5(hand[0], hand[1], hand[2], hand[3], hand[4]),
                class
            );
        }
    }

    #[test]
    fn canonical_hand6_anchors() {
        let eval = Evaluator::default();
        let anchors = [
            (7454, [4, 3, 2, 1, 0, 6]),      // 6-high straight flush
            (7441, [12, 25, 38, 51, 0, 13]), // quad aces over deuce
            (7285, [12, 25, 38, 39, 0, 1]),  // aces full of deuces
            (5864, [5, 3, 2, 1, 0, 13]),     // seven-high flush
            (5858, [7, 19, 31, 43, 3, 0]),   // nine-high straight
            (4998, [0, 13, 26, 42, 2, 1]),   // trip deuces, five four
            (4139, [1, 14, 26, 39, 3, 2]),   // treys and deuces, five
            (1284, [0, 13, 31, 42, 2, 1]),   // pair of deuces, seven five four
            (13, [6, 18, 29, 41, 1, 0]),     // 87543 high
        ];

        for (code, codes) in anchors {
            let class = eval.tables().class(code);
            let hand = class_hand6(class).unwrap();
            assert_eq!(
                hand.iter().map(|c| c.code()).collect::<Vec<_>>(),
                codes,
                "class {class}"
            );
        }
    }

    #[test]
    fn class_hand6_can_fail() {
        let eval = Evaluator::default();

        // The weakest high card hand leaves no irrelevant card: anything
        // below the seven is held, anything above changes the hand.
        let class = eval.tables().class(1);
        assert_eq!(class.cards(), "75432");

        let hand = class_to_cards(class).unwrap();
        assert!(irrelevant_cards(&hand, class).unwrap().is_empty());
        assert!(class_hand6(class).is_err());
    }

    #[test]
    fn straight_flush_excludes_upward_extension() {
        let eval = Evaluator::default();

        let cards = irrelevant_str(&eval, "9c 8c 7c 6c 5c");
        assert!(!cards.contains(&"Tc".to_string()));
        assert!(cards.contains(&"4c".to_string()));
        assert!(cards.contains(&"Th".to_string()));

        // The wheel extends upward with the six.
        let cards = irrelevant_str(&eval, "5c 4c 3c 2c Ac");
        assert!(!cards.contains(&"6c".to_string()));
        assert!(cards.contains(&"6d".to_string()));

        // A royal flush has no upward extension, everything left fits.
        let cards = irrelevant_str(&eval, "Ac Kc Qc Jc Tc");
        assert_eq!(cards.len(), 47);
    }

    #[test]
    fn four_of_a_kind_excludes_higher_kickers() {
        let eval = Evaluator::default();

        let cards = irrelevant_str(&eval, "2c 2d 2h 2s 4c");
        assert!(cards.contains(&"3c".to_string()));
        assert!(!cards.contains(&"5c".to_string()));
        assert!(!cards.contains(&"Ad".to_string()));

        // Quad aces over king exclude nothing but the held cards.
        let cards = irrelevant_str(&eval, "Ac Ad Ah As Kc");
        assert_eq!(cards.len(), 47);
    }

    #[test]
    fn full_house_excludes_quad_completion() {
        let eval = Evaluator::default();

        let cards = irrelevant_str(&eval, "Ac Ad Ah Ks Kc");
        assert!(!cards.contains(&"As".to_string()));
        // A third king only reorders the full house, kings full loses.
        assert!(cards.contains(&"Kd".to_string()));
        assert!(cards.contains(&"2c".to_string()));
    }

    #[test]
    fn full_house_excludes_pair_promotion() {
        let eval = Evaluator::default();

        // When the pair outranks the triple a third pair card promotes
        // it: deuces full of treys plus a trey is treys full of deuces.
        let hand = parse_hand("2c 2d 2h 3s 3c").unwrap();
        let class = eval.eval(&hand).clone();
        assert_eq!(class.cards(), "22233");

        let cards = irrelevant_cards(&hand, &class).unwrap();
        for &extra in &cards {
            let mut hand6 = hand.clone();
            hand6.push(extra);
            assert_eq!(eval.eval6(&hand6), &class, "extra {extra}");
        }

        let cards = cards.iter().map(ToString::to_string).collect::<Vec<_>>();
        assert!(!cards.contains(&"3d".to_string()));
        assert!(!cards.contains(&"2s".to_string()));
        assert!(cards.contains(&"4c".to_string()));
        assert!(cards.contains(&"Ad".to_string()));
    }

    #[test]
    fn flush_exclusions() {
        let eval = Evaluator::default();

        let cards = irrelevant_str(&eval, "Kc 9c 8c 7c 6c");
        // Suited cards above the lowest flush card improve the flush.
        assert!(!cards.contains(&"Ac".to_string()));
        assert!(!cards.contains(&"Tc".to_string()));
        // The suited five makes a 9-high straight flush.
        assert!(!cards.contains(&"5c".to_string()));
        // Offsuit cards never touch the flush.
        assert!(cards.contains(&"5d".to_string()));
        assert!(cards.contains(&"Ad".to_string()));
        // Suited below the lowest and off the run is fine.
        assert!(cards.contains(&"3c".to_string()));
    }

    #[test]
    fn straight_excludes_upward_extension() {
        let eval = Evaluator::default();

        let cards = irrelevant_str(&eval, "Tc 9d 8h 7s 6c");
        assert!(!cards.contains(&"Jc".to_string()));
        assert!(!cards.contains(&"Js".to_string()));
        // Extending downward keeps the ten-high straight on top.
        assert!(cards.contains(&"5c".to_string()));

        let cards = irrelevant_str(&eval, "5c 4d 3h 2s Ac");
        assert!(!cards.contains(&"6c".to_string()));
        assert!(cards.contains(&"Ad".to_string()));

        // Nothing extends the ace-high straight.
        let cards = irrelevant_str(&eval, "Ac Kd Qh Js Tc");
        assert_eq!(cards.len(), 47);
    }

    #[test]
    fn three_of_a_kind_exclusions() {
        let eval = Evaluator::default();

        let cards = irrelevant_str(&eval, "Ac Ad Ah Ks Qc");
        // Held ranks pair up or make quads.
        assert!(!cards.contains(&"As".to_string()));
        assert!(!cards.contains(&"Kc".to_string()));
        assert!(!cards.contains(&"Qd".to_string()));
        // The jack stays below both kickers and no straight threatens.
        assert!(cards.contains(&"Jc".to_string()));
        assert!(cards.contains(&"2c".to_string()));

        // For trip deuces with five-four kickers only the trey fits.
        let cards = irrelevant_str(&eval, "2c 2d 2h 5s 4c");
        assert_eq!(cards, vec!["3c", "3d", "3h", "3s"]);
    }

    #[test]
    fn two_pair_exclusions() {
        let eval = Evaluator::default();

        let cards = irrelevant_str(&eval, "Ac Ad Qh Qs Kc");
        // Pairing the king outkicks the queens.
        assert!(!cards.contains(&"Kd".to_string()));
        assert!(!cards.contains(&"As".to_string()));
        assert!(!cards.contains(&"Qc".to_string()));
        assert!(cards.contains(&"Jc".to_string()));

        // A low kicker may pair up without changing the class.
        let cards = irrelevant_str(&eval, "Ac Ad Kh Ks 9c");
        assert!(cards.contains(&"9d".to_string()));
        assert!(!cards.contains(&"Qc".to_string()));
        assert!(cards.contains(&"2c".to_string()));
    }

    #[test]
    fn pair_and_high_card_exclusions() {
        let eval = Evaluator::default();

        let cards = irrelevant_str(&eval, "Ac Ad Kh Qs 9c");
        assert!(!cards.contains(&"As".to_string()));
        assert!(!cards.contains(&"Kc".to_string()));
        assert!(!cards.contains(&"Tc".to_string()));
        assert!(cards.contains(&"8c".to_string()));
        // The jack completes no straight but outranks the nine.
        assert!(!cards.contains(&"Jc".to_string()));

        let cards = irrelevant_str(&eval, "Ac Kd Qh 9s 7c");
        assert!(cards.contains(&"5c".to_string()));
        assert!(!cards.contains(&"8c".to_string()));
    }

    #[test]
    fn straight_completion_is_detected() {
        let eval = Evaluator::default();

        let hand = parse_hand("Ac Kd Qh 6s 5c").unwrap();
        let class = eval.eval(&hand).clone();
        let cards = irrelevant_cards(&hand, &class).unwrap();
        let cards = cards.iter().map(ToString::to_string).collect::<Vec<_>>();

        // 4, 3 and 2 stay below the five without closing a 5-run.
        assert!(cards.contains(&"4c".to_string()));
        assert!(cards.contains(&"3c".to_string()));
        assert!(cards.contains(&"2c".to_string()));

        // But appending to a 4-straight is excluded.
        let hand = parse_hand("Ac Kd 5h 4s 3c").unwrap();
        let class = eval.eval(&hand).clone();
        let cards = irrelevant_cards(&hand, &class).unwrap();
        assert!(!cards.iter().any(|c| c.rank() == Rank::Deuce));
    }

    #[test]
    fn rejects_invalid_arguments() {
        let eval = Evaluator::default();
        let hand = parse_hand("Ac Kd Qh 9s 7c").unwrap();
        let class = eval.eval(&hand).clone();

        assert!(irrelevant_cards(&hand[..4], &class).is_err());
        let long = parse_hand("Ac Kd Qh 9s 7c 2c 2d 2h").unwrap();
        assert!(irrelevant_cards(&long, &class).is_err());
        assert!(irrelevant_cards(&hand, eval.tables().null_class()).is_err());
    }

    #[test]
    fn helpers() {
        use Rank::*;

        assert!(straight_with(&[Six, Five, Four, Trey], Deuce));
        assert!(straight_with(&[Five, Four, Trey, Deuce], Ace));
        assert!(straight_with(&[Ace, King, Queen, Jack], Ten));
        assert!(!straight_with(&[Ace, King, Queen, Jack], Nine));
        assert!(!straight_with(&[Six, Five, Four, Trey], Nine));

        let hand = parse_hand("Ac Kc Qc 9c 7c 2d 2h").unwrap();
        assert_eq!(flush_suit(&hand), Suit::Clubs);
        let hand = parse_hand("Ac Kd Qd 9d 7d 2d 2h").unwrap();
        assert_eq!(flush_suit(&hand), Suit::Diamonds);
    }
}
