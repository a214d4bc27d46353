//! Game layer: the engine and the restartable session.
//!
//! ## Key Types
//!
//! - `MemoryGame`: owns the card collection, enforces the single-face-up
//!   invariant, implements `choose` and `shuffle`
//! - `MemoryGameBuilder`: deal configuration (pairs, window, seed, clock)
//! - `GameSession`: holds the deal recipe and restarts by replacing the
//!   engine instance

pub mod engine;
pub mod session;

pub use engine::{MemoryGame, MemoryGameBuilder};
pub use session::GameSession;
