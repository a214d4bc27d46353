//! Game clock: the engine's single source of elapsed time.
//!
//! Card timing is stored as `Duration` offsets from the clock origin, so
//! the clock only has to answer "how long since this game was dealt".
//! Two sources exist:
//!
//! - **Wall**: anchored to `std::time::Instant` at construction; readings
//!   track real elapsed time.
//! - **Manual**: readings only move when `advance` is called.
//!
//! Gameplay code never branches on the source. Tests build manual-clock
//! games to pin bonus-time behavior against a simulated timeline.

use std::time::{Duration, Instant};

/// Monotonic time source for a single game instance.
///
/// Readings are idempotent queries; the clock performs no waiting.
#[derive(Clone, Debug)]
pub struct GameClock {
    source: ClockSource,
}

#[derive(Clone, Debug)]
enum ClockSource {
    Wall { origin: Instant },
    Manual { elapsed: Duration },
}

impl GameClock {
    /// Create a wall clock whose origin is now.
    #[must_use]
    pub fn wall() -> Self {
        Self {
            source: ClockSource::Wall {
                origin: Instant::now(),
            },
        }
    }

    /// Create a manual clock starting at zero.
    #[must_use]
    pub fn manual() -> Self {
        Self {
            source: ClockSource::Manual {
                elapsed: Duration::ZERO,
            },
        }
    }

    /// Elapsed time since the clock origin.
    #[must_use]
    pub fn now(&self) -> Duration {
        match &self.source {
            ClockSource::Wall { origin } => origin.elapsed(),
            ClockSource::Manual { elapsed } => *elapsed,
        }
    }

    /// Advance a manual clock by `by`.
    ///
    /// Panics on a wall clock: real time cannot be steered.
    pub fn advance(&mut self, by: Duration) {
        match &mut self.source {
            ClockSource::Manual { elapsed } => *elapsed += by,
            ClockSource::Wall { .. } => panic!("advance requires a manual clock"),
        }
    }

    /// Whether this clock is manually driven.
    #[must_use]
    pub fn is_manual(&self) -> bool {
        matches!(self.source, ClockSource::Manual { .. })
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::wall()
    }
}
