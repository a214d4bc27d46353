//! Core types: cards, clock, RNG, configuration.
//!
//! The fundamental building blocks the engine is assembled from. Nothing
//! here knows about the card collection or the single-face-up invariant;
//! that is the `game` module's job.

pub mod card;
pub mod clock;
pub mod config;
pub mod rng;

pub use card::{Card, CardId, DEFAULT_BONUS_TIME_LIMIT};
pub use clock::GameClock;
pub use config::GameConfig;
pub use rng::GameRng;
