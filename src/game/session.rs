//! Game session: construction recipe plus restart.
//!
//! The embedder owns one `GameSession` per table. The session stores
//! what is needed to deal a game again — configuration, content
//! generator, and a master RNG — and implements restart as wholesale
//! engine replacement: the old collection and any open bonus intervals
//! are dropped with it, never transitioned.

use crate::core::{Card, CardId, GameClock, GameConfig, GameRng};

use super::engine::MemoryGame;

/// Owns a running game and the recipe to re-deal it.
///
/// Each deal (the first included) forks the session RNG, so a seeded
/// session replays its whole sequence of games from one seed while every
/// restart still gets a fresh shuffle.
pub struct GameSession<C, F> {
    config: GameConfig,
    content_for: F,
    rng: GameRng,
    game: MemoryGame<C>,
}

impl<C, F> GameSession<C, F>
where
    C: Clone + PartialEq,
    F: FnMut(usize) -> C,
{
    /// Start a session with entropy-seeded shuffles.
    #[must_use]
    pub fn new(config: GameConfig, content_for: F) -> Self {
        Self::with_rng(config, GameRng::from_entropy(), content_for)
    }

    /// Start a session with seeded, reproducible shuffles.
    #[must_use]
    pub fn seeded(config: GameConfig, seed: u64, content_for: F) -> Self {
        Self::with_rng(config, GameRng::new(seed), content_for)
    }

    fn with_rng(config: GameConfig, mut rng: GameRng, mut content_for: F) -> Self {
        let game = MemoryGame::deal(config, GameClock::wall(), rng.fork(), &mut content_for);
        Self {
            config,
            content_for,
            rng,
            game,
        }
    }

    /// The running game.
    #[must_use]
    pub fn game(&self) -> &MemoryGame<C> {
        &self.game
    }

    /// Current cards, in table order.
    #[must_use]
    pub fn cards(&self) -> &[Card<C>] {
        self.game.cards()
    }

    /// Forwarded to [`MemoryGame::choose`].
    pub fn choose(&mut self, id: CardId) {
        self.game.choose(id);
    }

    /// Forwarded to [`MemoryGame::shuffle`].
    pub fn shuffle(&mut self) {
        self.game.shuffle();
    }

    /// Replace the game with a freshly dealt one from the stored recipe.
    ///
    /// Same pair count and content mapping; new shuffle, face-down
    /// unmatched cards, zeroed bonus timers.
    pub fn restart(&mut self) {
        self.game = MemoryGame::deal(
            self.config,
            GameClock::wall(),
            self.rng.fork(),
            &mut self.content_for,
        );
    }
}
