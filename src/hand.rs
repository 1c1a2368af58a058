//! Hand storage and the soft-ace total rule.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Rank;

/// An ordered set of cards held by the player, a split hand, or the dealer.
///
/// Hands only grow: cards are appended as they are drawn, and the total is
/// derived on demand rather than stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Rank>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given ranks.
    #[must_use]
    pub fn from_ranks(ranks: &[Rank]) -> Self {
        Self {
            cards: ranks.to_vec(),
        }
    }

    /// Appends a drawn card.
    pub fn push(&mut self, rank: Rank) {
        self.cards.push(rank);
    }

    /// Returns the cards in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Rank] {
        &self.cards
    }

    /// Returns the number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Computes the best total under the soft-ace rule.
    ///
    /// Aces count as 11, then drop to 1 one at a time while the total
    /// exceeds 21 and an unsoftened ace remains.
    #[must_use]
    pub fn total(&self) -> u8 {
        let mut total: u8 = 0;
        let mut aces: u8 = 0;

        for rank in &self.cards {
            if rank.is_ace() {
                aces += 1;
            }
            total = total.saturating_add(rank.value());
        }

        while total > 21 && aces > 0 {
            total -= 10;
            aces -= 1;
        }

        total
    }

    /// Returns whether the hand is a natural: exactly two cards totaling 21.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.total() == 21
    }

    /// Returns whether the total exceeds 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.total() > 21
    }

    /// Returns whether the hand is exactly two cards of the same rank.
    ///
    /// Rank symbols must match; point values are not compared.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        self.cards.len() == 2 && self.cards[0] == self.cards[1]
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}
