use log::debug;

use crate::error::{BetError, DealError};
use crate::hand::{Hand, HandStatus};

use super::{RoundState, Signal, Table};

impl Table {
    /// Reserves `amount` as the bet for the next round.
    ///
    /// The balance is only reduced if the round is lost. Placing a new bet
    /// before the deal replaces the previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already under way or the bet exceeds
    /// the balance. Nothing changes on error.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if self.state != RoundState::AwaitingBet {
            return Err(BetError::InvalidState);
        }

        self.wager.place_bet(amount)?;
        debug!("bet {amount} of {}", self.wager.balance());
        Ok(())
    }

    /// Deals two cards each to the player and dealer, alternating and
    /// starting with the player.
    ///
    /// Returns [`Signal::Blackjack`] if the player holds a natural, in which
    /// case play skips straight to the dealer. Otherwise returns
    /// [`Signal::Continue`] with the primary hand awaiting an action.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not awaiting a deal, no bet has been
    /// placed, or the shoe holds fewer than four cards.
    pub fn initial_deal(&mut self) -> Result<Signal, DealError> {
        if self.state != RoundState::AwaitingBet {
            return Err(DealError::InvalidState);
        }

        if !self.wager.has_open_stakes() {
            return Err(DealError::NoBet);
        }

        if self.shoe.remaining() < 4 {
            return Err(DealError::NotEnoughCards);
        }

        self.hands.clear();
        self.hands.push(Hand::new());
        self.dealer_hand.clear();

        for _ in 0..2 {
            let card = self.draw().map_err(|_| DealError::NotEnoughCards)?;
            self.hands[0].add_card(card);
            let card = self.draw().map_err(|_| DealError::NotEnoughCards)?;
            self.dealer_hand.add_card(card);
        }

        let player = &self.hands[0];
        debug!(
            "dealt player {}, dealer shows {:?}",
            player.value(),
            self.dealer_hand.up_card()
        );

        if player.status() == HandStatus::Blackjack {
            self.state = RoundState::DealerTurn;
            Ok(Signal::Blackjack)
        } else {
            self.state = RoundState::PlayerTurn { hand_index: 0 };
            Ok(Signal::Continue)
        }
    }
}
