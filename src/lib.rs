//! A blackjack session simulator with optional `no_std` support.
//!
//! The crate plays repeated rounds of blackjack against a fixed
//! basic-strategy policy and accumulates wager/return statistics across
//! the session. [`Session`] drives the round engine in [`round`], which in
//! turn draws from a per-round [`Deck`], scores hands through [`Hand`],
//! and picks player actions with [`decide`].
//!
//! # Example
//!
//! ```
//! use bjsim::{Session, SessionOptions};
//!
//! let options = SessionOptions::default().with_rounds(50).with_bet(2.0);
//! let mut session = Session::new(options, 42);
//! let report = session.run().expect("options are valid");
//! assert_eq!(report.rounds(), 50);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod round;
pub mod session;
pub mod strategy;

// Re-export main types
pub use card::{DECK_SIZE, Rank};
pub use deck::Deck;
pub use error::{DrawError, SessionError};
pub use hand::Hand;
pub use options::SessionOptions;
pub use result::{Outcome, SessionReport, SessionSummary, SplitOutcome};
pub use session::Session;
pub use strategy::{Decision, decide};
