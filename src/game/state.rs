//! Round state and engine signals.

/// Where the round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for a bet and the initial deal.
    AwaitingBet,
    /// Waiting for an action on the hand at `hand_index`.
    PlayerTurn {
        /// Index into the player's hands (primary, then splits).
        hand_index: usize,
    },
    /// Every player hand is resolved; the dealer plays next.
    DealerTurn,
    /// The dealer has finished; bets can be settled.
    Settlement,
    /// Every bet is settled; the table can be reset.
    Settled,
}

impl RoundState {
    /// Returns whether the round has started and is not yet settled.
    #[must_use]
    pub const fn in_progress(self) -> bool {
        !matches!(self, Self::AwaitingBet | Self::Settled)
    }
}

/// What the engine tells the caller after a step.
///
/// Player actions report on the hand they acted on; check
/// [`Table::state`](super::Table::state) to see whether another hand or the
/// dealer is up next. A rejected action is reported as an
/// [`ActionError`](crate::ActionError) instead of a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// More input is needed for the same hand.
    Continue,
    /// The hand went over 21 and is lost.
    Bust,
    /// The hand is finished; play moves on.
    DealerAction,
    /// The pair was split into two hands.
    Split,
    /// The player was dealt a natural blackjack.
    Blackjack,
    /// The player wins (dealer bust, or the higher hand).
    Player,
    /// The dealer wins.
    Dealer,
    /// Player and dealer tie.
    Tied,
    /// The dealer stood; hands must be compared.
    Compare,
}
