//! The matching-pairs game engine.
//!
//! `MemoryGame` owns the ordered card collection and is the only writer
//! of card state. It enforces the single-face-up invariant: at most one
//! unmatched card is face-up at any time, except in the transient window
//! between a losing comparison and the next `choose`, which folds the
//! mismatched pair face-down again.
//!
//! ## Choosing
//!
//! `choose` resolves in one of three ways:
//!
//! - **No-op**: unknown id, or the card is already face-up or matched.
//! - **Comparison**: exactly one unmatched card is face-up (the pending
//!   card). Equal content locks both cards as matched; either way the
//!   chosen card flips face-up. A mismatch leaves both cards visible
//!   until the next call.
//! - **Collapse**: zero or more than one unmatched cards are face-up.
//!   Every unmatched card goes face-down except the chosen one.
//!
//! The pending lookup answers "exactly one face-up unmatched card, else
//! none", so zero and more-than-one share the collapse branch; that is
//! the mechanism that hides a leftover mismatch on the following choice.
//! Matched cards are never folded back face-down.

use std::time::Duration;

use smallvec::SmallVec;

use crate::core::{Card, CardId, GameClock, GameConfig, GameRng};

/// A matching-pairs game over an equality-comparable content type.
///
/// The card collection is read-only to callers; all mutation goes
/// through `choose` and `shuffle`. The clock and RNG belong to the
/// embedder: advance a manual clock from tests, or keep the seed around
/// to replay a deal.
pub struct MemoryGame<C> {
    cards: Vec<Card<C>>,

    /// Time source for bonus accounting.
    pub clock: GameClock,

    /// Shuffle randomness.
    pub rng: GameRng,

    config: GameConfig,
}

/// Builder for a `MemoryGame`.
///
/// Defaults: 8 pairs, 6-second bonus window, entropy seed, wall clock.
pub struct MemoryGameBuilder {
    config: GameConfig,
    seed: Option<u64>,
    manual_clock: bool,
}

impl Default for MemoryGameBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            seed: None,
            manual_clock: false,
        }
    }
}

impl MemoryGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pairs to deal. Zero is allowed and yields an empty game.
    pub fn pairs(mut self, pairs: usize) -> Self {
        self.config.pairs = pairs;
        self
    }

    /// Scoring window for every card.
    pub fn bonus_time_limit(mut self, limit: Duration) -> Self {
        self.config.bonus_time_limit = limit;
        self
    }

    /// Whole configuration at once.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed the shuffle for a reproducible deal.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Drive time manually instead of from the wall clock.
    pub fn manual_clock(mut self) -> Self {
        self.manual_clock = true;
        self
    }

    /// Deal the game.
    ///
    /// `content_for` is invoked exactly once per pair index in
    /// `[0, pairs)`; the twin card receives a clone of the same value.
    pub fn build<C, F>(self, content_for: F) -> MemoryGame<C>
    where
        C: Clone + PartialEq,
        F: FnMut(usize) -> C,
    {
        let rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let clock = if self.manual_clock {
            GameClock::manual()
        } else {
            GameClock::wall()
        };

        MemoryGame::deal(self.config, clock, rng, content_for)
    }
}

impl<C: Clone + PartialEq> MemoryGame<C> {
    /// Deal a game with default knobs: wall clock, entropy seed,
    /// default bonus window.
    #[must_use]
    pub fn new<F>(pairs: usize, content_for: F) -> Self
    where
        F: FnMut(usize) -> C,
    {
        MemoryGameBuilder::new().pairs(pairs).build(content_for)
    }

    pub(crate) fn deal<F>(
        config: GameConfig,
        clock: GameClock,
        mut rng: GameRng,
        mut content_for: F,
    ) -> Self
    where
        F: FnMut(usize) -> C,
    {
        let mut cards = Vec::with_capacity(config.card_count());
        for pair_index in 0..config.pairs {
            let content = content_for(pair_index);
            let pair = pair_index as u32;
            cards.push(Card::new(
                CardId::first_of_pair(pair),
                content.clone(),
                config.bonus_time_limit,
            ));
            cards.push(Card::new(
                CardId::second_of_pair(pair),
                content,
                config.bonus_time_limit,
            ));
        }
        rng.shuffle(&mut cards);

        Self {
            cards,
            clock,
            rng,
            config,
        }
    }
}

impl<C> MemoryGame<C> {
    /// The cards in table order. Order changes on `shuffle`.
    #[must_use]
    pub fn cards(&self) -> &[Card<C>] {
        &self.cards
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card<C>> {
        self.cards.iter().find(|card| card.id() == id)
    }

    /// Number of pairs this game was dealt with.
    #[must_use]
    pub fn pairs(&self) -> usize {
        self.config.pairs
    }

    /// The configuration this game was dealt with.
    #[must_use]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Current clock reading, for the cards' time-derived accessors.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Have all cards been matched? Vacuously true for an empty game.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }

    /// Reorder the cards uniformly at random.
    ///
    /// Positional order is all that changes; no card's flip, match, or
    /// timing state is touched.
    pub fn shuffle(&mut self) {
        self.rng.shuffle(&mut self.cards);
    }

    /// The one and only face-up unmatched card, if there is exactly one.
    ///
    /// Zero or more than one qualifying cards both answer `None`; the
    /// caller treats those cases identically.
    fn pending_index(&self) -> Option<usize> {
        let face_up: SmallVec<[usize; 2]> = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.is_face_up() && !card.is_matched())
            .map(|(index, _)| index)
            .take(2)
            .collect();

        match face_up.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Make `index` the sole face-up unmatched card.
    ///
    /// One O(n) scan: every unmatched card is folded face-down except
    /// the designated index. Matched cards keep their permanent face-up.
    fn set_only_face_up(&mut self, index: usize, now: Duration) {
        for (i, card) in self.cards.iter_mut().enumerate() {
            if card.is_matched() {
                continue;
            }
            card.set_face_up(i == index, now);
        }
    }
}

impl<C: PartialEq> MemoryGame<C> {
    /// Play `id`.
    ///
    /// Unknown ids and re-taps on face-up or matched cards are silent
    /// no-ops. Otherwise the card is compared against the pending card
    /// if there is exactly one, or becomes the sole face-up card.
    pub fn choose(&mut self, id: CardId) {
        let chosen = match self.cards.iter().position(|card| card.id() == id) {
            Some(index) => index,
            None => return,
        };
        if self.cards[chosen].is_face_up() || self.cards[chosen].is_matched() {
            return;
        }

        let now = self.clock.now();
        if let Some(pending) = self.pending_index() {
            if self.cards[pending].content() == self.cards[chosen].content() {
                self.cards[pending].set_matched(now);
                self.cards[chosen].set_matched(now);
            }
            // The pending card's face-up flag is untouched; no new
            // interval opens on it.
            self.cards[chosen].set_face_up(true, now);
        } else {
            self.set_only_face_up(chosen, now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_game(pairs: usize) -> MemoryGame<usize> {
        MemoryGameBuilder::new()
            .pairs(pairs)
            .seed(42)
            .manual_clock()
            .build(|pair_index| pair_index)
    }

    fn face_up_unmatched(game: &MemoryGame<usize>) -> usize {
        game.cards()
            .iter()
            .filter(|card| card.is_face_up() && !card.is_matched())
            .count()
    }

    #[test]
    fn test_deal() {
        let game = test_game(4);

        assert_eq!(game.cards().len(), 8);
        assert_eq!(game.pairs(), 4);
        assert!(game.cards().iter().all(|card| !card.is_face_up()));
        assert!(game.cards().iter().all(|card| !card.is_matched()));
        assert!(!game.is_complete());
    }

    #[test]
    fn test_deal_assigns_twin_ids() {
        let game = test_game(4);

        for pair in 0..4u32 {
            let first = game.card(CardId::first_of_pair(pair)).unwrap();
            let second = game.card(CardId::second_of_pair(pair)).unwrap();

            assert_eq!(first.content(), second.content());
            assert_ne!(first.id(), second.id());
        }
    }

    #[test]
    fn test_generator_called_once_per_pair() {
        let mut calls = Vec::new();
        let _game: MemoryGame<usize> = MemoryGameBuilder::new().pairs(5).seed(1).build(|pair_index| {
            calls.push(pair_index);
            pair_index
        });

        assert_eq!(calls, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_first_choice_is_sole_face_up() {
        let mut game = test_game(3);

        game.choose(CardId::new(0));

        assert!(game.card(CardId::new(0)).unwrap().is_face_up());
        assert_eq!(face_up_unmatched(&game), 1);
    }

    #[test]
    fn test_matching_choice_locks_pair() {
        let mut game = test_game(3);

        game.choose(CardId::new(0));
        game.choose(CardId::new(1));

        let first = game.card(CardId::new(0)).unwrap();
        let second = game.card(CardId::new(1)).unwrap();
        assert!(first.is_matched() && first.is_face_up());
        assert!(second.is_matched() && second.is_face_up());
    }

    #[test]
    fn test_mismatch_stays_visible_until_next_choice() {
        let mut game = test_game(3);

        game.choose(CardId::new(0));
        game.choose(CardId::new(2));

        // Both visible after the losing comparison.
        assert!(game.card(CardId::new(0)).unwrap().is_face_up());
        assert!(game.card(CardId::new(2)).unwrap().is_face_up());
        assert_eq!(face_up_unmatched(&game), 2);

        game.choose(CardId::new(4));

        // The third choice folds the mismatch away.
        assert!(!game.card(CardId::new(0)).unwrap().is_face_up());
        assert!(!game.card(CardId::new(2)).unwrap().is_face_up());
        assert!(game.card(CardId::new(4)).unwrap().is_face_up());
        assert_eq!(face_up_unmatched(&game), 1);
    }

    #[test]
    fn test_matched_cards_survive_collapse() {
        let mut game = test_game(3);

        game.choose(CardId::new(0));
        game.choose(CardId::new(1));

        game.choose(CardId::new(2));

        assert!(game.card(CardId::new(0)).unwrap().is_face_up());
        assert!(game.card(CardId::new(1)).unwrap().is_face_up());
        assert!(game.card(CardId::new(2)).unwrap().is_face_up());
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut game = test_game(2);

        game.choose(CardId::new(0));
        let before: Vec<_> = game.cards().to_vec();

        game.choose(CardId::new(999));

        assert_eq!(game.cards(), &before[..]);
    }

    #[test]
    fn test_rechoosing_face_up_card_is_noop() {
        let mut game = test_game(2);

        game.choose(CardId::new(0));
        let before: Vec<_> = game.cards().to_vec();

        game.choose(CardId::new(0));

        assert_eq!(game.cards(), &before[..]);
    }

    #[test]
    fn test_choosing_matched_card_is_noop() {
        let mut game = test_game(2);

        game.choose(CardId::new(0));
        game.choose(CardId::new(1));
        let before: Vec<_> = game.cards().to_vec();

        game.choose(CardId::new(0));

        assert_eq!(game.cards(), &before[..]);
    }

    #[test]
    fn test_completion() {
        let mut game = test_game(2);

        game.choose(CardId::new(0));
        game.choose(CardId::new(1));
        assert!(!game.is_complete());

        game.choose(CardId::new(2));
        game.choose(CardId::new(3));
        assert!(game.is_complete());
    }

    #[test]
    fn test_empty_game() {
        let mut game = test_game(0);

        assert!(game.cards().is_empty());
        assert!(game.is_complete());

        // Every operation stays a well-defined no-op.
        game.choose(CardId::new(0));
        game.shuffle();
        assert!(game.cards().is_empty());
    }

    #[test]
    fn test_shuffle_keeps_card_state() {
        let mut game = test_game(4);

        game.choose(CardId::new(0));
        game.choose(CardId::new(1));
        game.choose(CardId::new(2));

        game.shuffle();

        assert!(game.card(CardId::new(0)).unwrap().is_matched());
        assert!(game.card(CardId::new(1)).unwrap().is_matched());
        assert!(game.card(CardId::new(2)).unwrap().is_face_up());
        assert_eq!(game.cards().len(), 8);
    }

    #[test]
    fn test_seeded_deals_are_reproducible() {
        let game1 = test_game(6);
        let game2 = test_game(6);

        let ids1: Vec<_> = game1.cards().iter().map(Card::id).collect();
        let ids2: Vec<_> = game2.cards().iter().map(Card::id).collect();

        assert_eq!(ids1, ids2);
    }

    #[test]
    fn test_wall_clock_default() {
        let game: MemoryGame<usize> = MemoryGame::new(2, |pair_index| pair_index);

        assert!(!game.clock.is_manual());
        assert_eq!(game.cards().len(), 4);
    }
}
