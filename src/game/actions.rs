use log::debug;

use crate::action::Action;
use crate::error::ActionError;
use crate::hand::{Hand, HandStatus};

use super::{RoundState, Signal, Table};

impl Table {
    /// Applies `action` to the hand awaiting input.
    ///
    /// # Errors
    ///
    /// Returns an error (the `invalid` signal) if the action is not legal
    /// right now. The table is left unchanged.
    pub fn play(&mut self, action: Action) -> Result<Signal, ActionError> {
        match action {
            Action::Hit => self.hit(),
            Action::Stand => self.stand(),
            Action::Double => self.double_down(),
            Action::Split => self.split(),
        }
    }

    /// Parses an action token (`hit`, `stand`, `double`, `split`) and
    /// applies it.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::UnknownAction`] for any other token, or any
    /// error [`play`](Self::play) returns.
    pub fn play_token(&mut self, token: &str) -> Result<Signal, ActionError> {
        self.play(token.parse()?)
    }

    /// Returns the index of the hand awaiting input, checking that it is
    /// still active.
    fn ensure_active_hand(&self) -> Result<usize, ActionError> {
        let RoundState::PlayerTurn { hand_index } = self.state else {
            return Err(ActionError::InvalidState);
        };

        let hand = self
            .hands
            .get(hand_index)
            .ok_or(ActionError::InvalidState)?;
        if hand.status() != HandStatus::Active {
            return Err(ActionError::HandNotActive);
        }

        Ok(hand_index)
    }

    /// Moves play to the next active hand after `hand_index`, or to the
    /// dealer if none is left.
    fn advance_after_hand(&mut self, hand_index: usize) {
        let next = self
            .hands
            .iter()
            .enumerate()
            .skip(hand_index + 1)
            .find(|(_, hand)| hand.status() == HandStatus::Active)
            .map(|(index, _)| index);

        self.state = next.map_or(RoundState::DealerTurn, |hand_index| {
            RoundState::PlayerTurn { hand_index }
        });
    }

    /// Closes a hand that reached 21 and reports where the hand stands.
    fn signal_after_draw(&mut self, hand_index: usize) -> Signal {
        let hand = &mut self.hands[hand_index];
        let signal = match hand.status() {
            HandStatus::Bust => Signal::Bust,
            HandStatus::Active if hand.value() == 21 => {
                hand.set_status(HandStatus::Stand);
                Signal::DealerAction
            }
            HandStatus::Active => return Signal::Continue,
            HandStatus::Stand | HandStatus::Blackjack => Signal::DealerAction,
        };

        self.advance_after_hand(hand_index);
        signal
    }

    /// Player action: Hit (draw a card).
    ///
    /// Returns [`Signal::Bust`] if the hand went over 21,
    /// [`Signal::DealerAction`] if it reached 21, and [`Signal::Continue`]
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if no hand is awaiting input or the shoe is empty.
    pub fn hit(&mut self) -> Result<Signal, ActionError> {
        let index = self.ensure_active_hand()?;
        let card = self.draw().map_err(|_| ActionError::NoCards)?;

        self.hands[index].add_card(card);
        debug!("hand {index} hits {card}: {}", self.hands[index].value());

        Ok(self.signal_after_draw(index))
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if no hand is awaiting input.
    pub fn stand(&mut self) -> Result<Signal, ActionError> {
        let index = self.ensure_active_hand()?;

        self.hands[index].set_status(HandStatus::Stand);
        debug!("hand {index} stands on {}", self.hands[index].value());

        self.advance_after_hand(index);
        Ok(Signal::DealerAction)
    }

    /// Player action: Double down (double the stake, take exactly one card,
    /// then stop).
    ///
    /// Returns [`Signal::Bust`] or [`Signal::DealerAction`].
    ///
    /// # Errors
    ///
    /// Returns an error if no hand is awaiting input, the hand does not hold
    /// exactly two cards, the balance cannot cover the extra stake, or the
    /// shoe is empty.
    pub fn double_down(&mut self) -> Result<Signal, ActionError> {
        let index = self.ensure_active_hand()?;

        if self.hands[index].len() != 2 {
            return Err(ActionError::CannotDouble);
        }

        if !self.wager.can_double_or_split(index) {
            return Err(ActionError::InsufficientFunds);
        }

        if self.shoe.is_empty() {
            self.mark_shoe_dry();
            return Err(ActionError::NoCards);
        }

        let stake = self.wager.double_bet(index)?;
        let card = self.draw().map_err(|_| ActionError::NoCards)?;

        let hand = &mut self.hands[index];
        hand.add_card(card);
        if hand.status() == HandStatus::Active {
            hand.set_status(HandStatus::Stand);
        }
        debug!("hand {index} doubles to {stake}, draws {card}: {}", hand.value());

        Ok(self.signal_after_draw(index))
    }

    /// Player action: Split (split a pair into two hands).
    ///
    /// Each new hand keeps one card of the pair, receives a second card and
    /// carries a stake equal to the original. Split hands cannot be split
    /// again. Play continues on the first of the two hands.
    ///
    /// # Errors
    ///
    /// Returns an error if no hand is awaiting input, the hand is not a pair
    /// of equal rank, the balance cannot cover the extra stake, or the shoe
    /// holds fewer than two cards.
    pub fn split(&mut self) -> Result<Signal, ActionError> {
        let index = self.ensure_active_hand()?;

        if !self.hands[index].can_split() {
            return Err(ActionError::CannotSplit);
        }

        if !self.wager.can_double_or_split(index) {
            return Err(ActionError::InsufficientFunds);
        }

        if self.shoe.remaining() < 2 {
            self.mark_shoe_dry();
            return Err(ActionError::NoCards);
        }

        let pair = self.hands[index].cards();
        let (first, second) = (pair[0], pair[1]);

        self.wager.split_bet(index)?;

        let mut left = Hand::from_split(first);
        let mut right = Hand::from_split(second);
        left.add_card(self.draw().map_err(|_| ActionError::NoCards)?);
        right.add_card(self.draw().map_err(|_| ActionError::NoCards)?);

        for split_hand in [&mut left, &mut right] {
            if split_hand.value() == 21 {
                split_hand.set_status(HandStatus::Stand);
            }
        }

        debug!(
            "hand {index} splits: {} and {}",
            left.value(),
            right.value()
        );

        self.hands[index] = left;
        self.hands.insert(index + 1, right);

        if self.hands[index].status() != HandStatus::Active {
            self.advance_after_hand(index);
        }

        Ok(Signal::Split)
    }
}
