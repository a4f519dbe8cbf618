//! Chip balance and per-hand stakes.

use alloc::vec::Vec;

use crate::error::{ActionError, BetError, SettleError};

/// The player's chip balance and the stakes riding on each hand.
///
/// Stakes are reserved, not deducted: placing a bet leaves the balance
/// untouched and only [`lose_bet`](Self::lose_bet) takes chips away. Each
/// stake is indexed like the player's hands (primary first, then splits in
/// creation order) and must be resolved exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wager {
    balance: usize,
    stakes: Vec<Option<usize>>,
}

impl Wager {
    /// Creates a wager with the given starting balance and no bet.
    #[must_use]
    pub const fn new(balance: usize) -> Self {
        Self {
            balance,
            stakes: Vec::new(),
        }
    }

    /// Returns the chip balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns the unresolved stake on the primary hand, or 0.
    #[must_use]
    pub fn bet(&self) -> usize {
        self.stake(0).unwrap_or(0)
    }

    /// Returns the unresolved stake on the hand at `index`.
    #[must_use]
    pub fn stake(&self, index: usize) -> Option<usize> {
        self.stakes.get(index).copied().flatten()
    }

    /// Returns every stake slot; resolved slots are `None`.
    #[must_use]
    pub fn stakes(&self) -> &[Option<usize>] {
        &self.stakes
    }

    /// Returns the sum of all unresolved stakes.
    #[must_use]
    pub fn committed(&self) -> usize {
        self.stakes.iter().flatten().sum()
    }

    /// Returns whether any stake is still unresolved.
    #[must_use]
    pub fn has_open_stakes(&self) -> bool {
        self.stakes.iter().any(Option::is_some)
    }

    /// Reserves `amount` as the bet for the next round.
    ///
    /// Replaces any earlier bet. The balance is not changed.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::InsufficientFunds`] if `amount` exceeds the
    /// balance; nothing is changed in that case.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if amount > self.balance {
            return Err(BetError::InsufficientFunds);
        }

        self.stakes.clear();
        self.stakes.push(Some(amount));
        Ok(())
    }

    /// Returns whether the balance can cover a second copy of the stake at
    /// `index` on top of everything already committed.
    #[must_use]
    pub fn can_double_or_split(&self, index: usize) -> bool {
        self.stake(index)
            .is_some_and(|stake| self.balance.saturating_sub(self.committed()) >= stake)
    }

    /// Doubles the stake at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InsufficientFunds`] if the balance cannot cover
    /// the extra stake.
    pub fn double_bet(&mut self, index: usize) -> Result<usize, ActionError> {
        if !self.can_double_or_split(index) {
            return Err(ActionError::InsufficientFunds);
        }

        let slot = &mut self.stakes[index];
        let doubled = slot.map_or(0, |stake| stake * 2);
        *slot = Some(doubled);
        Ok(doubled)
    }

    /// Adds a stake for a new split hand, cloned from the stake at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InsufficientFunds`] if the balance cannot cover
    /// the extra stake.
    pub fn split_bet(&mut self, index: usize) -> Result<usize, ActionError> {
        if !self.can_double_or_split(index) {
            return Err(ActionError::InsufficientFunds);
        }

        let stake = self.stake(index).unwrap_or(0);
        self.stakes.insert(index + 1, Some(stake));
        Ok(stake)
    }

    fn take_stake(&mut self, index: usize) -> Result<usize, SettleError> {
        self.stakes
            .get_mut(index)
            .and_then(Option::take)
            .ok_or(SettleError::NoActiveBet)
    }

    /// Loses the stake at `index`: it is deducted from the balance.
    ///
    /// Returns the amount deducted.
    ///
    /// # Errors
    ///
    /// Returns [`SettleError::NoActiveBet`] if the stake was already resolved.
    pub fn lose_bet(&mut self, index: usize) -> Result<usize, SettleError> {
        let stake = self.take_stake(index)?;
        debug_assert!(stake <= self.balance, "stake exceeds balance");
        self.balance = self.balance.saturating_sub(stake);
        Ok(stake)
    }

    /// Pays out the stake at `index`.
    ///
    /// A regular win credits the stake (1:1). A blackjack additionally
    /// credits 1.5 times the stake, rounded toward zero. The balance
    /// saturates at `usize::MAX`.
    ///
    /// Returns the amount credited.
    ///
    /// # Errors
    ///
    /// Returns [`SettleError::NoActiveBet`] if the stake was already resolved.
    pub fn payout(&mut self, index: usize, blackjack: bool) -> Result<usize, SettleError> {
        let stake = self.take_stake(index)?;
        let credit = if blackjack {
            // 1.5x the stake, rounded toward zero, without overflowing
            let bonus = (stake / 2).saturating_mul(3).saturating_add(stake % 2);
            stake.saturating_add(bonus)
        } else {
            stake
        };
        self.balance = self.balance.saturating_add(credit);
        Ok(credit)
    }

    /// Pushes the stake at `index`: it is released with no balance change.
    ///
    /// Returns the released stake.
    ///
    /// # Errors
    ///
    /// Returns [`SettleError::NoActiveBet`] if the stake was already resolved.
    pub fn push(&mut self, index: usize) -> Result<usize, SettleError> {
        self.take_stake(index)
    }

    /// Drops every stake slot, keeping the balance.
    pub fn clear(&mut self) {
        self.stakes.clear();
    }
}
