//! Table engine and round state management.

use alloc::vec::Vec;
use log::{debug, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::{ReshuffleError, ResetError, ShoeError};
use crate::hand::Hand;
use crate::options::TableOptions;
use crate::shoe::Shoe;
use crate::wager::Wager;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::{RoundState, Signal};

/// A single-seat blackjack table.
///
/// The table owns the shoe, the player's wager and hands, and the dealer's
/// hand, and drives a round through bet, deal, player actions, dealer play
/// and settlement. It performs no I/O: the caller supplies every decision and
/// renders whatever it likes from the accessors.
#[derive(Debug, Clone)]
pub struct Table {
    /// Table options.
    pub options: TableOptions,
    shoe: Shoe,
    state: RoundState,
    wager: Wager,
    /// Player hands: the primary hand, then split hands in creation order.
    hands: Vec<Hand>,
    dealer_hand: Hand,
    /// Set when an operation this round failed for lack of cards.
    shoe_ran_dry: bool,
    rng: ChaCha8Rng,
}

impl Table {
    /// Creates a table with a freshly shuffled shoe drawn from `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 42);
    /// assert_eq!(table.balance(), 500);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shoe = Shoe::shuffled(options.decks, &mut rng);
        Self::build(options, shoe, rng)
    }

    /// Creates a table that deals from `shoe` as given.
    ///
    /// Later calls to [`reshuffle`](Self::reshuffle) use a generator seeded
    /// with zero.
    #[must_use]
    pub fn with_shoe(options: TableOptions, shoe: Shoe) -> Self {
        Self::build(options, shoe, ChaCha8Rng::seed_from_u64(0))
    }

    fn build(options: TableOptions, shoe: Shoe, rng: ChaCha8Rng) -> Self {
        Self {
            options,
            shoe,
            state: RoundState::AwaitingBet,
            wager: Wager::new(options.starting_chips),
            hands: Vec::new(),
            dealer_hand: Hand::new(),
            shoe_ran_dry: false,
            rng,
        }
    }

    /// Replaces the shoe with a freshly shuffled one.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn reshuffle(&mut self) -> Result<(), ReshuffleError> {
        if self.state.in_progress() {
            return Err(ReshuffleError::InvalidState);
        }

        self.shoe = Shoe::shuffled(self.options.decks, &mut self.rng);
        self.shoe_ran_dry = false;
        debug!("reshuffled shoe: {} cards", self.shoe.remaining());
        Ok(())
    }

    /// Installs an externally built shoe.
    ///
    /// Between rounds this is always allowed. During a round it is only
    /// allowed after an operation failed because the shoe ran out, so the
    /// caller can retry that operation with the new shoe.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress and the shoe has not run
    /// out.
    pub fn replace_shoe(&mut self, shoe: Shoe) -> Result<(), ReshuffleError> {
        if self.state.in_progress() && !self.shoe_ran_dry {
            return Err(ReshuffleError::InvalidState);
        }

        self.shoe = shoe;
        self.shoe_ran_dry = false;
        Ok(())
    }

    /// Records that the shoe cannot cover the current operation.
    fn mark_shoe_dry(&mut self) {
        warn!(
            "shoe exhausted during {:?} with {} cards left",
            self.state,
            self.shoe.remaining()
        );
        self.shoe_ran_dry = true;
    }

    /// Draws a card from the shoe.
    fn draw(&mut self) -> Result<Card, ShoeError> {
        let drawn = self.shoe.draw();
        if drawn.is_err() {
            self.mark_shoe_dry();
        }
        drawn
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the index of the hand awaiting an action, if any.
    #[must_use]
    pub const fn current_hand_index(&self) -> Option<usize> {
        match self.state {
            RoundState::PlayerTurn { hand_index } => Some(hand_index),
            _ => None,
        }
    }

    /// Returns the player's chip balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.wager.balance()
    }

    /// Returns the unresolved stake on the primary hand, or 0.
    #[must_use]
    pub fn bet(&self) -> usize {
        self.wager.bet()
    }

    /// Returns the player's wager bookkeeping.
    #[must_use]
    pub const fn wager(&self) -> &Wager {
        &self.wager
    }

    /// Returns the player's hands, primary first.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Clears all hands and bets for the next round. The balance is kept
    /// and the shoe is not refilled.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has started but is not settled.
    pub fn reset_table(&mut self) -> Result<(), ResetError> {
        if self.state.in_progress() {
            return Err(ResetError::RoundInProgress);
        }

        self.hands.clear();
        self.dealer_hand.clear();
        self.wager.clear();
        self.shoe_ran_dry = false;
        self.state = RoundState::AwaitingBet;
        Ok(())
    }
}
