//! The one-round state machine: deal, player decisions, dealer draw,
//! settlement.

use crate::card::Rank;
use crate::deck::Deck;
use crate::error::DrawError;
use crate::hand::Hand;
use crate::result::{Outcome, SplitOutcome};
use crate::strategy::{Decision, decide};

/// Plays one complete round from an already-shuffled deck.
///
/// Deals two cards to the player and two to the dealer, checks naturals
/// (player first, so a simultaneous double natural is a player win), runs
/// the player's decision loop, and settles against the dealer's drawn-out
/// hand. Split rounds resolve through [`play_split_hand`] and skip the
/// dealer entirely.
///
/// # Errors
///
/// Returns [`DrawError::DeckExhausted`] if the deck runs out mid-round.
///
/// # Example
///
/// ```
/// use bjsim::{Deck, Outcome, Rank, round};
///
/// // Player 20 stands; dealer 16 draws a ten and busts.
/// let mut deck = Deck::stacked(&[
///     Rank::Ten,
///     Rank::Queen,
///     Rank::Six,
///     Rank::Ten,
///     Rank::King,
/// ]);
/// assert_eq!(round::play(&mut deck), Ok(Outcome::Win));
/// ```
pub fn play(deck: &mut Deck) -> Result<Outcome, DrawError> {
    let mut player = Hand::new();
    player.push(deck.draw()?);
    player.push(deck.draw()?);

    let mut dealer = Hand::new();
    dealer.push(deck.draw()?);
    dealer.push(deck.draw()?);

    if player.is_natural() {
        return Ok(Outcome::Blackjack);
    }
    if dealer.is_natural() {
        return Ok(Outcome::Lose);
    }

    let up_card = dealer.cards()[0];

    let mut decision = decide(&player, up_card, true);
    match decision {
        Decision::Double => {
            player.push(deck.draw()?);
            if player.is_bust() {
                return Ok(Outcome::Lose);
            }
        }
        Decision::Split => return play_split(&player, up_card, deck),
        Decision::Hit | Decision::Stand => {
            while decision == Decision::Hit {
                player.push(deck.draw()?);
                if player.is_bust() {
                    return Ok(Outcome::Lose);
                }
                decision = decide(&player, up_card, false);
            }
        }
    }

    dealer_draw(&mut dealer, deck)?;

    Ok(settle(&player, &dealer))
}

/// Plays a split round: two sub-hands, no dealer play.
///
/// Both sub-hands receive their second card before either plays, matching
/// the deal order of the table.
fn play_split(original: &Hand, up_card: Rank, deck: &mut Deck) -> Result<Outcome, DrawError> {
    let mut first = Hand::from_ranks(&[original.cards()[0]]);
    first.push(deck.draw()?);
    let mut second = Hand::from_ranks(&[original.cards()[1]]);
    second.push(deck.draw()?);

    let first = play_split_hand(first, up_card, deck)?;
    let second = play_split_hand(second, up_card, deck)?;

    Ok(match (first, second) {
        (SplitOutcome::Lose, SplitOutcome::Lose) => Outcome::Lose,
        (SplitOutcome::Stood, SplitOutcome::Stood) => Outcome::Stood,
        _ => Outcome::Mixed,
    })
}

/// Plays one split sub-hand to completion.
///
/// The sub-hand hits while the strategy says to (doubling disabled) and
/// busts to [`SplitOutcome::Lose`]; the first non-hit decision ends the
/// hand as [`SplitOutcome::Stood`]. The sub-hand is never compared to the
/// dealer.
///
/// # Errors
///
/// Returns [`DrawError::DeckExhausted`] if the deck runs out of cards.
pub fn play_split_hand(
    mut hand: Hand,
    up_card: Rank,
    deck: &mut Deck,
) -> Result<SplitOutcome, DrawError> {
    while decide(&hand, up_card, false) == Decision::Hit {
        hand.push(deck.draw()?);
        if hand.is_bust() {
            return Ok(SplitOutcome::Lose);
        }
    }
    Ok(SplitOutcome::Stood)
}

/// Draws for the dealer until the total reaches 17.
///
/// Soft totals get no special treatment: the dealer stands on any 17,
/// soft or hard.
///
/// # Errors
///
/// Returns [`DrawError::DeckExhausted`] if the deck runs out of cards.
pub fn dealer_draw(dealer: &mut Hand, deck: &mut Deck) -> Result<(), DrawError> {
    while dealer.total() < 17 {
        dealer.push(deck.draw()?);
    }
    Ok(())
}

/// Compares final totals. Dealer bust wins for the player outright.
fn settle(player: &Hand, dealer: &Hand) -> Outcome {
    let player_total = player.total();
    let dealer_total = dealer.total();

    if dealer_total > 21 || player_total > dealer_total {
        Outcome::Win
    } else if player_total < dealer_total {
        Outcome::Lose
    } else {
        Outcome::Draw
    }
}
