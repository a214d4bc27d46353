//! Card model: per-card flip/match state and bonus-time accounting.
//!
//! A `Card` knows nothing about other cards. The engine mediates every
//! state transition; callers only read.
//!
//! ## Bonus Time
//!
//! Each card carries a decaying reward window (`bonus_time_limit`,
//! default 6 seconds) that counts down only while the card is face-up and
//! unmatched, and freezes the instant the card is matched. Rather than
//! running a timer, the card stores an accumulator of past face-up time
//! plus the clock reading at the start of the currently open face-up
//! interval, if any. Every derived quantity is a pure function of those
//! fields and a caller-supplied `now`, so the presentation layer alone
//! decides how often to re-sample.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default scoring window for a freshly dealt card.
pub const DEFAULT_BONUS_TIME_LIMIT: Duration = Duration::from_secs(6);

/// Unique identifier for a card within one game instance.
///
/// Ids are assigned at dealing time: pair index `p` owns ids `2p` and
/// `2p + 1`. They never change for the lifetime of the game.
///
/// ```
/// use rust_pairs::CardId;
///
/// let first = CardId::first_of_pair(3);
/// let second = CardId::second_of_pair(3);
///
/// assert_eq!(first.raw(), 6);
/// assert_eq!(second.raw(), 7);
/// assert_eq!(first.pair_index(), second.pair_index());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// ID of the first card of a pair.
    #[must_use]
    pub const fn first_of_pair(pair_index: u32) -> Self {
        Self(pair_index * 2)
    }

    /// ID of the second card of a pair (the twin).
    #[must_use]
    pub const fn second_of_pair(pair_index: u32) -> Self {
        Self(pair_index * 2 + 1)
    }

    /// The pair index this card was dealt from.
    #[must_use]
    pub const fn pair_index(self) -> u32 {
        self.0 / 2
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A single card in a matching-pairs game.
///
/// `id` and `content` are fixed at dealing time. The flip/match flags and
/// the timing fields mutate only through engine-mediated transitions, so
/// the crate exposes read accessors and keeps the mutators internal.
///
/// All time-derived reads take the current clock reading as `now`; the
/// engine's `now()` supplies it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card<C> {
    id: CardId,
    content: C,
    face_up: bool,
    matched: bool,
    bonus_time_limit: Duration,
    /// Face-up time folded in from previous intervals. Excludes the
    /// currently open interval.
    past_face_up_time: Duration,
    /// Clock reading when the current face-up interval opened. `Some`
    /// only while the card is actively consuming bonus time.
    last_face_up_at: Option<Duration>,
}

impl<C> Card<C> {
    /// Deal a new face-down, unmatched card.
    pub(crate) fn new(id: CardId, content: C, bonus_time_limit: Duration) -> Self {
        Self {
            id,
            content,
            face_up: false,
            matched: false,
            bonus_time_limit,
            past_face_up_time: Duration::ZERO,
            last_face_up_at: None,
        }
    }

    /// This card's identifier.
    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    /// The content shared with exactly one other card: the pair partner.
    #[must_use]
    pub fn content(&self) -> &C {
        &self.content
    }

    /// Is this card currently face-up?
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Has this card been matched? Once true, never reset.
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// The scoring window this card was dealt with.
    #[must_use]
    pub fn bonus_time_limit(&self) -> Duration {
        self.bonus_time_limit
    }

    /// Total time this card has spent face-up, including the currently
    /// open interval if any.
    fn face_up_time(&self, now: Duration) -> Duration {
        match self.last_face_up_at {
            Some(opened_at) => self.past_face_up_time + now.saturating_sub(opened_at),
            None => self.past_face_up_time,
        }
    }

    /// How much of the scoring window is left. Clamped at zero.
    #[must_use]
    pub fn bonus_time_remaining(&self, now: Duration) -> Duration {
        self.bonus_time_limit.saturating_sub(self.face_up_time(now))
    }

    /// Remaining fraction of the scoring window, in `[0, 1]`.
    ///
    /// Zero for cards dealt with a zero window.
    #[must_use]
    pub fn bonus_remaining(&self, now: Duration) -> f64 {
        let remaining = self.bonus_time_remaining(now);
        if self.bonus_time_limit > Duration::ZERO && remaining > Duration::ZERO {
            remaining.as_secs_f64() / self.bonus_time_limit.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Was this card matched before its scoring window ran out?
    #[must_use]
    pub fn has_earned_bonus(&self, now: Duration) -> bool {
        self.matched && self.bonus_time_remaining(now) > Duration::ZERO
    }

    /// Is the scoring window counting down right now?
    ///
    /// True while the card is face-up, unmatched, and has window left.
    #[must_use]
    pub fn is_consuming_bonus_time(&self, now: Duration) -> bool {
        self.face_up && !self.matched && self.bonus_time_remaining(now) > Duration::ZERO
    }

    /// Flip the card.
    ///
    /// Face-up opens a consumption interval (if eligible and none is
    /// already open); face-down folds the open interval into the
    /// accumulator. Same-value assignments are safe: they neither
    /// double-count time nor re-open an interval.
    pub(crate) fn set_face_up(&mut self, face_up: bool, now: Duration) {
        self.face_up = face_up;
        if face_up {
            self.start_consuming(now);
        } else {
            self.stop_consuming(now);
        }
    }

    /// Lock the card as matched, freezing `bonus_time_remaining` at the
    /// value it has this instant.
    pub(crate) fn set_matched(&mut self, now: Duration) {
        self.matched = true;
        self.stop_consuming(now);
    }

    fn start_consuming(&mut self, now: Duration) {
        if self.is_consuming_bonus_time(now) && self.last_face_up_at.is_none() {
            self.last_face_up_at = Some(now);
        }
    }

    fn stop_consuming(&mut self, now: Duration) {
        self.past_face_up_time = self.face_up_time(now);
        self.last_face_up_at = None;
    }
}
