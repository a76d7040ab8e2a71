//! Deck of cards
//!
//! A shuffled 52-card deck of rank values 1-13; suits play no part in the
//! game.

use rand::Rng;
use rand::seq::SliceRandom;

/// Number of cards in a full deck
pub const DECK_SIZE: usize = 52;

/// Rank value of a Jack
pub const JACK: u8 = 11;
/// Rank value of a Queen
pub const QUEEN: u8 = 12;
/// Rank value of a King
pub const KING: u8 = 13;

/// A shuffled deck, drawn from the top
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<u8>,
    top: usize,
}

impl Deck {
    /// Create a full deck shuffled with the given generator
    ///
    /// Four of each rank 1 (ace) through 13 (king).
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards: Vec<u8> = (0..DECK_SIZE).map(|i| (i % 13) as u8 + 1).collect();
        cards.shuffle(rng);
        Self { cards, top: 0 }
    }

    /// Draw the next card, or `None` when the deck is empty
    pub fn draw(&mut self) -> Option<u8> {
        let card = self.cards.get(self.top).copied()?;
        self.top += 1;
        Some(card)
    }

    /// Cards left in the deck
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        DECK_SIZE - self.top
    }
}
