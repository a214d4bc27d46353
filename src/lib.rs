//! # rust-pairs
//!
//! A matching-pairs (concentration) card game engine.
//!
//! A fixed deck of paired tokens is shuffled, the player flips cards two
//! at a time, and matching pairs are locked as solved. Fast matches are
//! rewarded through a per-card "bonus time" window that decays while the
//! card is face-up and freezes the instant it is matched.
//!
//! ## Design Principles
//!
//! 1. **Content-Agnostic**: The engine is generic over any
//!    equality-comparable content type. Content selection (emoji tables,
//!    images, numbers) is the embedder's policy.
//!
//! 2. **Pure Time Reads**: No timers, threads, or callbacks. Bonus
//!    quantities are pure functions of stored durations and the current
//!    clock reading; the presentation layer decides how often to re-sample.
//!
//! 3. **Total Operations**: No error surface. Unknown ids, re-taps on
//!    visible or solved cards, and zero-pair games are all well-defined
//!    no-ops.
//!
//! ## Modules
//!
//! - `core`: Cards, clock, RNG, configuration
//! - `game`: The engine (`MemoryGame`) and the restartable session
//!   (`GameSession`)

pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::{Card, CardId, GameClock, GameConfig, GameRng, DEFAULT_BONUS_TIME_LIMIT};

pub use crate::game::{GameSession, MemoryGame, MemoryGameBuilder};
