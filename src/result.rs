//! Round outcomes reported after settlement.

extern crate alloc;

use alloc::vec::Vec;

use crate::game::Signal;

/// Final outcome of one hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins at 1:1.
    PlayerWin,
    /// Player wins with a natural blackjack at 3:2.
    PlayerBlackjackWin,
    /// Dealer wins; the stake is lost.
    DealerWin,
    /// Tie; the stake is returned.
    Push,
}

impl Outcome {
    /// Collapses a comparison signal into an outcome.
    ///
    /// `natural` marks a hand that was a blackjack from the initial deal.
    /// Returns `None` for signals that do not end a hand.
    #[must_use]
    pub const fn from_signal(signal: Signal, natural: bool) -> Option<Self> {
        match signal {
            Signal::Player if natural => Some(Self::PlayerBlackjackWin),
            Signal::Player => Some(Self::PlayerWin),
            Signal::Dealer | Signal::Bust => Some(Self::DealerWin),
            Signal::Tied => Some(Self::Push),
            _ => None,
        }
    }

    /// Returns whether the player came out ahead.
    #[must_use]
    pub const fn is_player_win(self) -> bool {
        matches!(self, Self::PlayerWin | Self::PlayerBlackjackWin)
    }
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// The hand index (for split hands).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: Outcome,
    /// The stake riding on the hand at settlement.
    pub bet: usize,
    /// Balance change from this hand.
    pub delta: isize,
    /// The player's hand value.
    pub player_value: u8,
    /// The dealer's hand value.
    pub dealer_value: u8,
}

/// Result of the entire round after settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each hand, primary first.
    pub hands: Vec<HandResult>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Net balance change for the round.
    pub net: isize,
    /// Player balance after settlement.
    pub balance: usize,
}
