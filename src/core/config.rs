//! Game configuration.
//!
//! A game is fully described by how many pairs it deals and the scoring
//! window each card starts with. The content generator is supplied at
//! construction time and is not part of the configuration: content
//! selection is the embedder's policy, not the engine's.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::card::DEFAULT_BONUS_TIME_LIMIT;

/// Configuration for a matching-pairs game.
///
/// The default matches the original table: 8 pairs, 6-second window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of pairs dealt. The deck holds twice as many cards.
    pub pairs: usize,

    /// Scoring window every card starts with.
    pub bonus_time_limit: Duration,
}

impl GameConfig {
    /// Create a configuration dealing `pairs` pairs with the default
    /// scoring window.
    #[must_use]
    pub fn new(pairs: usize) -> Self {
        Self {
            pairs,
            bonus_time_limit: DEFAULT_BONUS_TIME_LIMIT,
        }
    }

    /// Set the scoring window.
    #[must_use]
    pub fn with_bonus_time_limit(mut self, limit: Duration) -> Self {
        self.bonus_time_limit = limit;
        self
    }

    /// Number of cards this configuration deals.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.pairs * 2
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(8)
    }
}
