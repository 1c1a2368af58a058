//! Session configuration.

/// Configuration for a simulated session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsim::SessionOptions;
///
/// let options = SessionOptions::default().with_rounds(1_000).with_bet(5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionOptions {
    /// Number of rounds to play.
    pub rounds: u32,
    /// Amount staked on every round.
    pub bet: f64,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            rounds: 300,
            bet: 1.0,
        }
    }
}

impl SessionOptions {
    /// Sets the number of rounds.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_rounds(50);
    /// assert_eq!(options.rounds, 50);
    /// ```
    #[must_use]
    pub const fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// Sets the bet per round.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_bet(2.5);
    /// assert_eq!(options.bet, 2.5);
    /// ```
    #[must_use]
    pub const fn with_bet(mut self, bet: f64) -> Self {
        self.bet = bet;
        self
    }
}
