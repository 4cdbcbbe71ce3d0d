//! Hand valuation rules.
//!
//! Scores are always recomputed from the hand, never stored beside it.

use parlor_types::{Card, Hand, Rank};

/// A blackjack hand's value after ace adjustment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlackjackTotal {
    /// Best total ≤ 21 if one exists, otherwise the minimum (all aces
    /// demoted) total.
    pub total: u8,
    /// True while at least one ace still counts as 11.
    pub soft: bool,
}

impl BlackjackTotal {
    pub fn is_bust(self) -> bool {
        self.total > 21
    }
}

/// Blackjack card value before ace adjustment: A=11, faces and 10s=10,
/// pips at face value.
fn blackjack_card_value(card: Card) -> u8 {
    match card.rank {
        Rank::Ace => 11,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
        other => other as u8,
    }
}

/// Blackjack total: sum with aces at 11, demoting one ace at a time
/// (−10) while the total exceeds 21 and an un-demoted ace remains.
pub fn blackjack_total(hand: &Hand) -> BlackjackTotal {
    let mut total: u8 = hand.iter().map(|card| blackjack_card_value(*card)).sum();
    let mut soft_aces = hand.iter().filter(|card| card.rank == Rank::Ace).count();
    while total > 21 && soft_aces > 0 {
        total -= 10;
        soft_aces -= 1;
    }
    BlackjackTotal {
        total,
        soft: soft_aces > 0,
    }
}

/// Baccarat card value: A=1, tens and faces=0, pips at face value.
pub fn baccarat_card_value(card: Card) -> u8 {
    match card.rank {
        Rank::Ace => 1,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 0,
        other => other as u8,
    }
}

/// Baccarat total: sum of card values, mod 10. Always 0..=9.
pub fn baccarat_total(hand: &Hand) -> u8 {
    let sum: u32 = hand
        .iter()
        .map(|card| baccarat_card_value(*card) as u32)
        .sum();
    (sum % 10) as u8
}

/// A two-card total of 8 or 9 is a natural and ends the round with no
/// further draws for either side.
pub fn is_natural(hand: &Hand) -> bool {
    hand.len() == 2 && baccarat_total(hand) >= 8
}
