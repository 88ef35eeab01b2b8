// Copyright (C) 2025 Showdown Developers
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker card types.
//!
//! This crate defines the [Card], [Rank] and [Suit] types and the two
//! character notation codec used everywhere else in the workspace:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(ah.to_string(), "Ah");
//! assert_eq!("Ah".parse::<Card>().unwrap(), ah);
//! ```
//!
//! and a [Deck] type for shuffling and iterating card combinations. For
//! example to iterate through all 5 cards hands:
//!
//! ```
//! # use showdown_cards::{Card, Deck, Rank, Suit};
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, Deck, Rank, Suit, format_hand, parse_hand};
