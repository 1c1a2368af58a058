//! Session driver: repeated rounds with running stake and return series.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::SessionError;
use crate::options::SessionOptions;
use crate::result::{Outcome, SessionReport, SessionSummary};
use crate::round;

/// Plays rounds against the basic-strategy policy and tracks the money
/// flow.
///
/// Every round is dealt from a fresh single deck shuffled by the
/// session's seeded generator, so a session is fully reproducible from
/// its options and seed.
pub struct Session {
    /// Session options.
    options: SessionOptions,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Session {
    /// Creates a new session with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{Session, SessionOptions};
    ///
    /// let options = SessionOptions::default().with_rounds(10);
    /// let session = Session::new(options, 42);
    /// let _ = session;
    /// ```
    #[must_use]
    pub fn new(options: SessionOptions, seed: u64) -> Self {
        Self {
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Plays the configured number of rounds and returns the series.
    ///
    /// Every round stakes the configured bet. The running return grows by
    /// twice the bet on a win and 2.5 times the bet on a player natural,
    /// shrinks by the bet on a loss, and is untouched by draws, mixed
    /// split rounds, and unsettled split rounds. Both running values are
    /// recorded after every round, so the returned series have exactly
    /// `rounds` entries. The return series is a gross running balance
    /// under this payout convention, not a net-profit figure.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoRounds`] or [`SessionError::InvalidBet`]
    /// for invalid options, before any round is played. Returns
    /// [`SessionError::Draw`] and abandons the session if a round drains
    /// its deck.
    pub fn run(&mut self) -> Result<SessionReport, SessionError> {
        if self.options.rounds == 0 {
            return Err(SessionError::NoRounds);
        }
        if self.options.bet <= 0.0 || self.options.bet.is_nan() {
            return Err(SessionError::InvalidBet);
        }

        let bet = self.options.bet;
        let rounds = self.options.rounds as usize;

        let mut stakes = Vec::with_capacity(rounds);
        let mut returns = Vec::with_capacity(rounds);
        let mut outcomes = Vec::with_capacity(rounds);
        let mut summary = SessionSummary::default();

        let mut staked = 0.0_f64;
        let mut returned = 0.0_f64;

        for _ in 0..rounds {
            let mut deck = Deck::new();
            deck.shuffle(&mut self.rng);

            let outcome = round::play(&mut deck)?;

            staked += bet;
            match outcome {
                Outcome::Win => returned += bet * 2.0,
                Outcome::Blackjack => returned += bet * 2.5,
                Outcome::Lose => returned -= bet,
                Outcome::Draw | Outcome::Mixed | Outcome::Stood => {}
            }

            summary.record(outcome);
            outcomes.push(outcome);
            stakes.push(staked);
            returns.push(returned);
        }

        Ok(SessionReport {
            stakes,
            returns,
            outcomes,
            summary,
        })
    }

    /// Returns the session options.
    #[must_use]
    pub const fn options(&self) -> &SessionOptions {
        &self.options
    }
}
