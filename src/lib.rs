//! A single-seat blackjack table engine with optional `no_std` support.
//!
//! The crate provides a [`Table`] type that runs the round flow for one
//! player against the dealer: betting, the initial deal, player actions
//! (hit, stand, double, split), dealer play and settlement. The engine never
//! performs I/O; a caller drives it and renders the state it exposes.
//!
//! # Example
//!
//! ```
//! use bjtable::{Card, RoundState, Shoe, Signal, Suit, Table, TableOptions};
//!
//! let shoe = Shoe::from_cards(vec![
//!     Card::new(Suit::Hearts, 1),  // player
//!     Card::new(Suit::Clubs, 10),  // dealer
//!     Card::new(Suit::Spades, 3),  // player
//!     Card::new(Suit::Hearts, 7),  // dealer
//! ]);
//! let mut table = Table::with_shoe(TableOptions::default(), shoe);
//!
//! table.place_bet(100).unwrap();
//! assert_eq!(table.initial_deal().unwrap(), Signal::Continue);
//! table.play_token("stand").unwrap();
//! assert_eq!(table.state(), RoundState::DealerTurn);
//! assert_eq!(table.dealer_turn().unwrap(), Signal::Compare);
//!
//! let result = table.settle().unwrap();
//! assert_eq!(result.balance, 400);
//! table.reset_table().unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod action;
pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod shoe;
pub mod wager;

// Re-export main types
pub use action::Action;
pub use card::{Card, DECK_SIZE, DEFAULT_DECKS, Suit};
pub use error::{
    ActionError, BetError, DealError, DealerError, ReshuffleError, ResetError, SettleError,
    ShoeError,
};
pub use game::{RoundState, Signal, Table};
pub use hand::{Hand, HandStatus};
pub use options::TableOptions;
pub use result::{HandResult, Outcome, RoundResult};
pub use shoe::Shoe;
pub use wager::Wager;
