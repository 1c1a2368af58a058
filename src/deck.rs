//! A single-deck draw pile.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{DECK_SIZE, Rank};
use crate::error::DrawError;

/// The undealt cards of one round: a single 52-card deck.
///
/// Each round owns its deck exclusively. Drawing removes cards from the
/// pile and there is no refill or mid-round reshuffle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Rank>,
}

impl Deck {
    /// Creates an unshuffled deck with four copies of each rank.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for _ in 0..4 {
            cards.extend_from_slice(&Rank::ALL);
        }
        Self { cards }
    }

    /// Creates a deck that deals the given ranks in listed order.
    ///
    /// Useful for reproducing exact deals in tests and analysis.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{Deck, Rank};
    ///
    /// let mut deck = Deck::stacked(&[Rank::Ace, Rank::King]);
    /// assert_eq!(deck.draw(), Ok(Rank::Ace));
    /// assert_eq!(deck.draw(), Ok(Rank::King));
    /// ```
    #[must_use]
    pub fn stacked(draws: &[Rank]) -> Self {
        let mut cards: Vec<Rank> = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Shuffles the remaining cards in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DeckExhausted`] if no cards remain.
    pub fn draw(&mut self) -> Result<Rank, DrawError> {
        self.cards.pop().ok_or(DrawError::DeckExhausted)
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
