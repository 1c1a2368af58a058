//! The fixed basic-strategy decision table.

use crate::card::Rank;
use crate::hand::Hand;

/// A player action chosen by the strategy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Draw one more card.
    Hit,
    /// Keep the current hand.
    Stand,
    /// Draw exactly one card, then end the turn.
    Double,
    /// Break a pair into two hands.
    Split,
}

/// Chooses the next action for `hand` against the dealer's up-card.
///
/// The table is evaluated top to bottom and the first matching rule wins:
/// doubling chances first, then pair handling, then hit-or-stand by total.
/// `allow_double` is true only for the first decision of an un-split hand;
/// every later decision, and every split-hand decision, passes false.
///
/// The function is pure: equal inputs always produce the same decision.
///
/// # Example
///
/// ```
/// use bjsim::{Decision, Hand, Rank, decide};
///
/// let pair = Hand::from_ranks(&[Rank::Eight, Rank::Eight]);
/// assert_eq!(decide(&pair, Rank::Two, false), Decision::Split);
///
/// let eleven = Hand::from_ranks(&[Rank::Five, Rank::Six]);
/// assert_eq!(decide(&eleven, Rank::Ten, true), Decision::Double);
/// ```
#[must_use]
pub fn decide(hand: &Hand, up_card: Rank, allow_double: bool) -> Decision {
    let total = hand.total();
    let dealer = up_card.value();

    if allow_double && hand.len() == 2 {
        if total == 10 || total == 11 {
            return Decision::Double;
        }
        if total == 9 && (3..=6).contains(&dealer) {
            return Decision::Double;
        }
    }

    if hand.is_pair() {
        let rank = hand.cards()[0];
        if matches!(rank, Rank::Ace | Rank::Eight) {
            return Decision::Split;
        }
        if matches!(rank, Rank::Two | Rank::Three | Rank::Six | Rank::Seven)
            && (2..=6).contains(&dealer)
        {
            return Decision::Split;
        }
        if matches!(rank, Rank::Four | Rank::Five | Rank::Ten) {
            return Decision::Stand;
        }
    }

    if total >= 17 {
        Decision::Stand
    } else if (13..=16).contains(&total) {
        if (2..=6).contains(&dealer) {
            Decision::Stand
        } else {
            Decision::Hit
        }
    } else if total == 12 {
        if (4..=6).contains(&dealer) {
            Decision::Stand
        } else {
            Decision::Hit
        }
    } else {
        Decision::Hit
    }
}
