//! Property-based tests for hand valuation and wager resolution.

use bjtable::{BetError, Card, Hand, SettleError, Suit, Wager};
use proptest::prelude::*;

fn hand_from_ranks(ranks: &[u8]) -> Hand {
    let cards: Vec<Card> = ranks
        .iter()
        .map(|&rank| Card::new(Suit::Diamonds, rank))
        .collect();
    Hand::from_cards(&cards)
}

/// Settles stake 0 one of three ways.
fn resolve(wager: &mut Wager, how: u8) -> Result<usize, SettleError> {
    match how % 3 {
        0 => wager.payout(0, how >= 3),
        1 => wager.lose_bet(0),
        _ => wager.push(0),
    }
}

proptest! {
    #[test]
    fn value_stays_within_card_bounds(ranks in prop::collection::vec(any::<u8>(), 1..=12)) {
        let hand = hand_from_ranks(&ranks);
        let value = usize::from(hand.value());

        prop_assert!(value >= ranks.len());
        prop_assert!(value <= ranks.len() * 11);
    }

    #[test]
    fn aceless_hand_is_plain_sum(ranks in prop::collection::vec(2u8..=13, 1..=12)) {
        let hand = hand_from_ranks(&ranks);
        let sum: u32 = ranks.iter().map(|&rank| u32::from(rank.min(10))).sum();

        prop_assert_eq!(u32::from(hand.value()), sum);
        prop_assert!(!hand.is_soft());
    }

    #[test]
    fn blackjack_check_is_two_card_21(ranks in prop::collection::vec(1u8..=13, 1..=5)) {
        let hand = hand_from_ranks(&ranks);
        prop_assert_eq!(hand.is_blackjack(), ranks.len() == 2 && hand.value() == 21);
    }

    #[test]
    fn place_bet_never_touches_balance(balance in 0usize..10_000, amount in 0usize..20_000) {
        let mut wager = Wager::new(balance);
        let placed = wager.place_bet(amount);

        prop_assert_eq!(wager.balance(), balance);
        if amount > balance {
            prop_assert_eq!(placed, Err(BetError::InsufficientFunds));
            prop_assert_eq!(wager.bet(), 0);
        } else {
            prop_assert_eq!(placed, Ok(()));
            prop_assert_eq!(wager.bet(), amount);
        }
    }

    #[test]
    fn resolution_applies_exactly_once(
        balance in 0usize..10_000,
        fraction in 0.0f64..=1.0,
        first in 0u8..6,
        second in 0u8..6,
    ) {
        let bet = (balance as f64 * fraction) as usize;
        let mut wager = Wager::new(balance);
        wager.place_bet(bet).unwrap();

        prop_assert!(resolve(&mut wager, first).is_ok());
        let settled = wager.balance();

        let expected = match first % 3 {
            0 if first >= 3 => balance + bet + bet * 3 / 2,
            0 => balance + bet,
            1 => balance - bet,
            _ => balance,
        };
        prop_assert_eq!(settled, expected);

        prop_assert_eq!(resolve(&mut wager, second), Err(SettleError::NoActiveBet));
        prop_assert_eq!(wager.balance(), settled);
    }
}
