//! Hand representation and value arithmetic.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Values a hand at its provisional total, promoting a single Ace to 11
/// when that cannot bust. A second Ace is never promoted.
fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut has_ace = false;

    for card in cards {
        has_ace |= card.is_ace();
        // Unranked cards count 1 so a hand never values below its size
        value = value.saturating_add(card.blackjack_value().max(1));
    }

    if has_ace && value <= 11 {
        (value + 10, true)
    } else {
        (value, false)
    }
}

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Hand is active and can take actions.
    Active,
    /// Hand is finished without busting (stood, doubled, or reached 21).
    Stand,
    /// Hand has busted (over 21).
    Bust,
    /// Hand is a natural blackjack from the initial deal.
    Blackjack,
}

/// A participant's cards for the round.
///
/// Used for the player's primary hand, for split sub-hands and for the dealer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    status: HandStatus,
    from_split: bool,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            status: HandStatus::Active,
            from_split: false,
        }
    }

    /// Creates a hand holding `cards`, with its status derived as if they had
    /// been dealt one by one.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut hand = Self::new();
        for &card in cards {
            hand.add_card(card);
        }
        hand
    }

    /// Creates a split sub-hand seeded with a single card.
    #[must_use]
    pub fn from_split(card: Card) -> Self {
        Self {
            cards: alloc::vec![card],
            status: HandStatus::Active,
            from_split: true,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);

        let (value, _) = evaluate_cards(&self.cards);

        if value > 21 {
            self.status = HandStatus::Bust;
        }
        // Split hands never count as naturals
        else if self.cards.len() == 2 && value == 21 && !self.from_split {
            self.status = HandStatus::Blackjack;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card dealt, the dealer's face-up card.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Sets the hand status.
    pub const fn set_status(&mut self, status: HandStatus) {
        self.status = status;
    }

    /// Returns whether this hand came from a split.
    #[must_use]
    pub const fn is_from_split(&self) -> bool {
        self.from_split
    }

    /// Calculates the value of the hand.
    ///
    /// Every card is summed with Aces as 1; if the hand holds an Ace and the
    /// total is 11 or less, one Ace is promoted to 11. The value is always
    /// recomputed from the current cards.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (an Ace is counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is two cards totalling 21.
    ///
    /// This is purely value based. Whether the hand is a natural from the
    /// initial deal is reported by [`HandStatus::Blackjack`].
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == 21
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns whether the hand is a pair that may be split.
    ///
    /// Ranks must match exactly: `[10, K]` is not a pair.
    #[must_use]
    pub fn can_split(&self) -> bool {
        !self.from_split && self.cards.len() == 2 && self.cards[0].rank == self.cards[1].rank
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.status = HandStatus::Active;
        self.from_split = false;
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}
