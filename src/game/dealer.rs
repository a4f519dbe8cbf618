use core::cmp::Ordering;

use alloc::vec::Vec;
use log::{debug, info};

use crate::error::{DealerError, SettleError};
use crate::hand::{Hand, HandStatus};
use crate::result::{HandResult, Outcome, RoundResult};

use super::{RoundState, Signal, Table};

/// The dealer draws below this value and stands on it or above.
const DEALER_STANDS_AT: u8 = 17;

#[expect(clippy::cast_possible_wrap, reason = "chip amounts fit in isize")]
const fn signed(amount: usize) -> isize {
    amount as isize
}

/// Compares one player hand against the dealer's final hand.
///
/// Returns [`Signal::Bust`], [`Signal::Player`], [`Signal::Dealer`] or
/// [`Signal::Tied`].
fn compare_hand(hand: &Hand, dealer: &Hand) -> Signal {
    match hand.status() {
        HandStatus::Bust => return Signal::Bust,
        // A dealer natural ties a player natural; anything else loses to it.
        HandStatus::Blackjack if dealer.is_blackjack() => return Signal::Tied,
        HandStatus::Blackjack => return Signal::Player,
        HandStatus::Active | HandStatus::Stand => {}
    }

    if dealer.is_bust() {
        return Signal::Player;
    }

    match hand.value().cmp(&dealer.value()) {
        Ordering::Greater => Signal::Player,
        Ordering::Less => Signal::Dealer,
        Ordering::Equal => Signal::Tied,
    }
}

impl Table {
    /// Checks if any player hand is still in contention.
    fn any_live_hands(&self) -> bool {
        self.hands
            .iter()
            .any(|hand| hand.status() != HandStatus::Bust)
    }

    /// Dealer plays their hand: draw while below 17, then stand.
    ///
    /// Returns [`Signal::Player`] if the dealer busts and
    /// [`Signal::Compare`] if the dealer stands. If every player hand has
    /// busted the dealer does not draw and [`Signal::Dealer`] is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the shoe runs out
    /// while the dealer must draw. Cards already drawn stay in the dealer's
    /// hand, so the turn can be retried once the shoe is replaced.
    ///
    /// # Panics
    ///
    /// Panics if the dealer's hand value falls outside the range its cards
    /// allow, which indicates a defect in hand valuation.
    pub fn dealer_turn(&mut self) -> Result<Signal, DealerError> {
        if self.state != RoundState::DealerTurn {
            return Err(DealerError::InvalidState);
        }

        if !self.any_live_hands() {
            debug!("every player hand busted, dealer stands pat");
            self.state = RoundState::Settlement;
            return Ok(Signal::Dealer);
        }

        while self.dealer_hand.value() < DEALER_STANDS_AT {
            let card = self.draw().map_err(|_| DealerError::NoCards)?;
            self.dealer_hand.add_card(card);
            debug!("dealer draws {card}: {}", self.dealer_hand.value());
        }

        let value = usize::from(self.dealer_hand.value());
        let cards = self.dealer_hand.len();
        assert!(
            (cards..=cards * 11).contains(&value),
            "dealer value {value} impossible for {cards} cards"
        );

        self.state = RoundState::Settlement;
        if self.dealer_hand.is_bust() {
            Ok(Signal::Player)
        } else {
            Ok(Signal::Compare)
        }
    }

    /// Settles every hand against the dealer and updates the balance.
    ///
    /// Each stake is resolved exactly once: a win is paid 1:1 (a natural
    /// blackjack pays 3:2 on top of the stake), a loss deducts the stake and
    /// a push leaves the balance alone. The round then moves to
    /// [`RoundState::Settled`]; call [`reset_table`](Self::reset_table)
    /// before the next bet.
    ///
    /// # Errors
    ///
    /// Returns an error if the dealer has not finished or the round has
    /// already been settled. Nothing is paid on error.
    pub fn settle(&mut self) -> Result<RoundResult, SettleError> {
        if self.state != RoundState::Settlement {
            return Err(SettleError::InvalidState);
        }

        let open = self.wager.stakes();
        if open.len() != self.hands.len() || open.iter().any(Option::is_none) {
            return Err(SettleError::NoActiveBet);
        }

        let dealer_value = self.dealer_hand.value();
        let dealer_bust = self.dealer_hand.is_bust();

        let mut results = Vec::with_capacity(self.hands.len());
        let mut net: isize = 0;

        for (hand_index, hand) in self.hands.iter().enumerate() {
            let natural = hand.status() == HandStatus::Blackjack;
            let signal = compare_hand(hand, &self.dealer_hand);
            let outcome = Outcome::from_signal(signal, natural).ok_or(SettleError::InvalidState)?;
            let bet = self.wager.stake(hand_index).unwrap_or(0);

            let delta = match outcome {
                Outcome::PlayerWin | Outcome::PlayerBlackjackWin => {
                    signed(self.wager.payout(hand_index, natural)?)
                }
                Outcome::DealerWin => -signed(self.wager.lose_bet(hand_index)?),
                Outcome::Push => {
                    self.wager.push(hand_index)?;
                    0
                }
            };
            net += delta;

            results.push(HandResult {
                hand_index,
                outcome,
                bet,
                delta,
                player_value: hand.value(),
                dealer_value,
            });
        }

        self.state = RoundState::Settled;
        info!(
            "round settled: net {net}, balance {}, dealer {dealer_value}",
            self.wager.balance()
        );

        Ok(RoundResult {
            hands: results,
            dealer_value,
            dealer_bust,
            net,
            balance: self.wager.balance(),
        })
    }
}
