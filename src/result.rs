//! Round and session result types.

extern crate alloc;

use alloc::vec::Vec;

/// Result of one complete round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher total).
    Win,
    /// Player loses (player busts, dealer natural, or dealer has the
    /// higher total).
    Lose,
    /// Tie on totals.
    Draw,
    /// Player natural: two cards totaling 21 on the deal.
    Blackjack,
    /// Split round whose two sub-hands finished differently.
    Mixed,
    /// Split round whose two sub-hands both finished standing.
    ///
    /// Such a round is never compared against the dealer and leaves the
    /// session's running return untouched.
    Stood,
}

/// Result of a single split sub-hand.
///
/// Kept separate from [`Outcome`] so a sub-hand's "stood" marker cannot be
/// mistaken for a settled round result; the two meet only in the explicit
/// combine step after both sub-hands have played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitOutcome {
    /// The sub-hand busted.
    Lose,
    /// The sub-hand stopped hitting without busting.
    Stood,
}

/// Outcome counts accumulated over a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    /// Rounds won on totals or dealer bust.
    pub wins: u32,
    /// Rounds lost.
    pub losses: u32,
    /// Rounds tied.
    pub draws: u32,
    /// Player naturals.
    pub blackjacks: u32,
    /// Split rounds with differing sub-results.
    pub mixed: u32,
    /// Split rounds with both sub-hands standing, left unsettled.
    pub stood: u32,
}

impl SessionSummary {
    /// Counts one round's outcome.
    pub const fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Blackjack => self.blackjacks += 1,
            Outcome::Mixed => self.mixed += 1,
            Outcome::Stood => self.stood += 1,
        }
    }

    /// Total rounds counted.
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.wins + self.losses + self.draws + self.blackjacks + self.mixed + self.stood
    }
}

/// Everything a finished session produced.
///
/// `stakes` and `returns` are parallel series with one entry per round:
/// the cumulative amount wagered and the cumulative gross return after
/// that round. The stake series is strictly increasing; the return series
/// is not monotonic.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    /// Cumulative stake after each round.
    pub stakes: Vec<f64>,
    /// Cumulative gross return after each round.
    pub returns: Vec<f64>,
    /// The outcome of each round, in play order.
    pub outcomes: Vec<Outcome>,
    /// Outcome counts for the whole session.
    pub summary: SessionSummary,
}

impl SessionReport {
    /// Number of rounds played.
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.stakes.len()
    }

    /// Total amount wagered over the session.
    #[must_use]
    pub fn final_stake(&self) -> f64 {
        self.stakes.last().copied().unwrap_or(0.0)
    }

    /// Gross running balance after the last round.
    #[must_use]
    pub fn final_return(&self) -> f64 {
        self.returns.last().copied().unwrap_or(0.0)
    }
}
