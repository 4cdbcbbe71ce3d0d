//! Playing cards, decks, and hands.
//!
//! A [`Deck`] is created fresh per round, shuffled with Fisher–Yates, and
//! consumed front-to-back as cards are dealt. Cards are immutable
//! (rank, suit) pairs; a card never appears twice within one round.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// Card ranks, Ace low in canonical order.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
}

impl Rank {
    /// All thirteen ranks in canonical (Ace..King) order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// True for Jack, Queen, King.
    pub fn is_face(self) -> bool {
        matches!(self, Rank::Jack | Rank::Queen | Rank::King)
    }

    /// The pip count for number cards (Ace = 1, Ten = 10); faces have none.
    pub fn pip(self) -> Option<u8> {
        if self.is_face() {
            None
        } else {
            Some(self as u8)
        }
    }

    fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    /// Offset within the Unicode playing-card block for this rank.
    ///
    /// The block includes a Knight at offset 12, so Queen and King sit at
    /// 13 and 14 rather than 12 and 13.
    fn glyph_offset(self) -> u32 {
        match self {
            Rank::Queen => 13,
            Rank::King => 14,
            other => other as u32,
        }
    }
}

/// Card suits in canonical order.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades = 0,
    Hearts = 1,
    Diamonds = 2,
    Clubs = 3,
}

impl Suit {
    /// All four suits in canonical order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Base code point of this suit's row in the Unicode playing-card block.
    fn glyph_base(self) -> u32 {
        match self {
            Suit::Spades => 0x1F0A0,
            Suit::Hearts => 0x1F0B0,
            Suit::Diamonds => 0x1F0C0,
            Suit::Clubs => 0x1F0D0,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
        }
    }
}

/// An immutable (rank, suit) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// The Unicode playing-card glyph for this card (e.g. 🂡 for A♠).
    pub fn glyph(self) -> char {
        // Every suit base + rank offset lands inside the block.
        char::from_u32(self.suit.glyph_base() + self.rank.glyph_offset())
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.label())
    }
}

/// An ordered run of 52 unique cards, consumed from the front.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// All 52 cards in canonical order: suit-major, Ace..King within each suit.
    pub fn standard() -> Self {
        let mut cards = VecDeque::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push_back(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// Unbiased Fisher–Yates shuffle over the remaining cards.
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.gen_range(0..=i);
            self.cards.swap(i, j);
        }
    }

    /// A shuffled permutation of this deck, leaving `self` untouched.
    pub fn shuffled(&self, rng: &mut impl Rng) -> Self {
        let mut copy = self.clone();
        copy.shuffle(rng);
        copy
    }

    /// Remove and return the top card, or `None` once exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }
}

/// One participant's cards within a round. Cards are appended as they are
/// dealt and never removed until the round resolves.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn standard_deck_has_52_unique_cards() {
        let deck = Deck::standard();
        assert_eq!(deck.remaining(), 52);
        let unique: HashSet<_> = deck.iter().copied().collect();
        assert_eq!(unique.len(), 52);
    }

    #[test]
    fn standard_deck_canonical_order() {
        let deck = Deck::standard();
        let first = deck.iter().next().copied().unwrap();
        assert_eq!(first, Card::new(Rank::Ace, Suit::Spades));
        let last = deck.iter().last().copied().unwrap();
        assert_eq!(last, Card::new(Rank::King, Suit::Clubs));
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let original = Deck::standard();
        for _ in 0..52 {
            let shuffled = original.shuffled(&mut rng);
            let a: HashSet<_> = original.iter().copied().collect();
            let b: HashSet<_> = shuffled.iter().copied().collect();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn shuffled_does_not_mutate_input() {
        let mut rng = StdRng::seed_from_u64(1);
        let original = Deck::standard();
        let _ = original.shuffled(&mut rng);
        assert_eq!(original, Deck::standard());
    }

    #[test]
    fn draw_consumes_front_to_back() {
        let mut deck = Deck::standard();
        assert_eq!(deck.draw(), Some(Card::new(Rank::Ace, Suit::Spades)));
        assert_eq!(deck.draw(), Some(Card::new(Rank::Two, Suit::Spades)));
        assert_eq!(deck.remaining(), 50);
    }

    #[test]
    fn exhausted_deck_draws_none() {
        let mut deck = Deck::standard();
        for _ in 0..52 {
            assert!(deck.draw().is_some());
        }
        assert_eq!(deck.draw(), None);
        assert!(deck.is_empty());
    }

    #[test]
    fn card_glyphs_skip_the_knight() {
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).glyph(), '\u{1F0A1}');
        assert_eq!(Card::new(Rank::Jack, Suit::Hearts).glyph(), '\u{1F0BB}');
        // Queen is 13, not 12 (0x..C is the Knight).
        assert_eq!(Card::new(Rank::Queen, Suit::Diamonds).glyph(), '\u{1F0CD}');
        assert_eq!(Card::new(Rank::King, Suit::Clubs).glyph(), '\u{1F0DE}');
    }

    #[test]
    fn card_display() {
        assert_eq!(Card::new(Rank::Ten, Suit::Hearts).to_string(), "10♥");
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "A♠");
    }

    #[test]
    fn serde_round_trip() {
        let deck = Deck::standard();
        let json = serde_json::to_string(&deck).unwrap();
        let back: Deck = serde_json::from_str(&json).unwrap();
        assert_eq!(deck, back);
    }

    proptest! {
        // Any seed: a shuffle adds, removes, and duplicates nothing.
        #[test]
        fn shuffle_preserves_multiset(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut deck = Deck::standard();
            deck.shuffle(&mut rng);
            let unique: HashSet<_> = deck.iter().copied().collect();
            prop_assert_eq!(deck.remaining(), 52);
            prop_assert_eq!(unique.len(), 52);
        }
    }
}
