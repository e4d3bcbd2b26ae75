//! A Flip 7 card game engine with optional `no_std` support.
//!
//! Players take turns drawing numbered cards, trying to avoid a duplicate
//! value. A duplicate busts the player for the round; stopping banks the sum
//! of their cards. The first player whose total reaches the target score wins.
//!
//! The crate provides a [`Game`] type that runs the round lifecycle, and a
//! [`rules`] module with the card resolution logic it relies on. Events are
//! reported to an [`EventSink`]; with the `std` feature, [`JsonLinesLogger`]
//! writes them to a JSON Lines file.
//!
//! # Example
//!
//! ```no_run
//! use flip7::{Game, GameOptions};
//!
//! let options = GameOptions::default();
//! let game = Game::new(options, 42);
//! let _ = game;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod jsonl;
pub mod options;
pub mod pile;
pub mod player;
pub mod result;
pub mod rules;
mod sync;

// Re-export main types
pub use card::{Card, MAX_NUMBER, NUMBER_CARD_COUNT, SpecialKind};
pub use error::{ActionError, JoinError, ParseChoiceError, RoundError};
pub use event::{EventSink, GameEvent, MemorySink, NoopSink, SeatedPlayer};
pub use game::{Game, GameSnapshot, MIN_PLAYERS, RoundState, TurnChoice};
pub use hand::Hand;
#[cfg(feature = "std")]
pub use jsonl::JsonLinesLogger;
pub use options::GameOptions;
pub use pile::DrawPile;
pub use player::{Player, PlayerId};
pub use result::{DrawOutcome, PlayerRoundResult, Resolution, RoundResult, TurnOutcome};
