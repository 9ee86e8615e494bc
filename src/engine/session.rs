use std::collections::HashMap;

use crate::engine::hooks::{AudioCue, EngineHooks, NullHooks};
use crate::engine::seed_ops::seed_from_text_or_random;
use crate::engine::status_text;
use crate::engine::timing::GameClock;
use crate::game::{Difficulty, HintCandidate, InventoryReport, SpiderGame};

/// Decoded saved-session payload: the game snapshot plus the bits the
/// rules state does not own.
#[derive(Debug, Clone)]
pub struct PersistedSession {
    pub elapsed_seconds: u32,
    pub game: SpiderGame,
}

pub fn encode_persisted_session(game: &SpiderGame, elapsed_seconds: u32) -> String {
    format!(
        "v=1\nelapsed={}\ngame={}",
        elapsed_seconds,
        game.encode_for_session()
    )
}

pub fn decode_persisted_session(raw: &str) -> Option<PersistedSession> {
    let mut fields = HashMap::<&str, &str>::new();
    for line in raw.lines() {
        let (key, value) = line.split_once('=')?;
        fields.insert(key.trim(), value.trim());
    }

    match *fields.get("v")? {
        "1" => {
            let elapsed_seconds = fields.get("elapsed")?.parse::<u32>().ok()?;
            let game = SpiderGame::decode_from_session(fields.get("game")?)?;
            Some(PersistedSession {
                elapsed_seconds,
                game,
            })
        }
        _ => None,
    }
}

/// Owns the live game, the play clock, and the injected presentation
/// hooks. The presentation layer issues one operation at a time; each
/// runs to completion before the next.
pub struct GameSession<H: EngineHooks> {
    game: SpiderGame,
    clock: GameClock,
    hooks: H,
}

impl GameSession<NullHooks> {
    pub fn new(difficulty: Difficulty, seed: Option<&str>, include_aces: bool) -> Self {
        Self::with_hooks(difficulty, seed, include_aces, NullHooks)
    }
}

impl<H: EngineHooks> GameSession<H> {
    /// A missing or blank seed becomes a fresh random token, so every
    /// game has a shareable seed string.
    pub fn with_hooks(
        difficulty: Difficulty,
        seed: Option<&str>,
        include_aces: bool,
        hooks: H,
    ) -> Self {
        let seed = seed_from_text_or_random(seed.unwrap_or(""));
        let mut session = Self {
            game: SpiderGame::new_with_seed(difficulty, &seed, include_aces),
            clock: GameClock::default(),
            hooks,
        };
        session.clock.start();
        session
            .hooks
            .on_message(&status_text::msg_started_seed(&seed), false);
        session.hooks.on_state_changed();
        session
    }

    pub fn new_game(&mut self, difficulty: Difficulty, seed: Option<&str>, include_aces: bool) {
        let seed = seed_from_text_or_random(seed.unwrap_or(""));
        self.game = SpiderGame::new_with_seed(difficulty, &seed, include_aces);
        self.clock.reset();
        self.clock.start();
        self.hooks
            .on_message(&status_text::msg_started_seed(&seed), false);
        self.hooks.on_state_changed();
    }

    pub fn game(&self) -> &SpiderGame {
        &self.game
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    pub fn tick(&mut self, delta_ms: u64) {
        self.clock.tick(delta_ms);
    }

    /// Validates a drag pickup of the tail starting at `start` and fires
    /// the pickup cue. No state changes; the drop is a `move_run`.
    pub fn lift_run(&mut self, col: usize, start: usize) -> bool {
        let Some(pile) = self.game.tableau().get(col) else {
            return false;
        };
        let tail = self.game.movable_tail_len(col);
        if start < pile.len().saturating_sub(tail) || start >= pile.len() {
            return false;
        }
        self.hooks.audio_cue(AudioCue::CardPickup);
        true
    }

    pub fn move_run(&mut self, src: usize, start: usize, dst: usize) -> bool {
        if !self.game.can_move_run(src, start, dst) {
            self.hooks
                .on_message(&status_text::msg_illegal_move(), true);
            self.hooks.audio_cue(AudioCue::InvalidMove);
            return false;
        }

        let completed_before = self.game.foundations().completed();
        self.game.move_run(src, start, dst);
        self.hooks.audio_cue(AudioCue::CardDrop);
        self.after_mutation(completed_before);
        true
    }

    pub fn deal_row(&mut self) -> bool {
        if let Some(block) = self.game.deal_block() {
            self.hooks
                .on_message(&status_text::msg_deal_blocked(block), true);
            self.hooks.audio_cue(AudioCue::InvalidMove);
            return false;
        }

        let completed_before = self.game.foundations().completed();
        self.game.deal_row();
        self.hooks.audio_cue(AudioCue::Deal);
        self.after_mutation(completed_before);
        true
    }

    pub fn undo(&mut self) {
        if !self.game.can_undo() {
            return;
        }
        self.game.undo();
        self.hooks.audio_cue(AudioCue::Undo);
        self.hooks.on_state_changed();
    }

    pub fn redo(&mut self) {
        if !self.game.can_redo() {
            return;
        }
        let completed_before = self.game.foundations().completed();
        self.game.redo();
        self.after_mutation(completed_before);
    }

    pub fn hints(&self) -> Vec<HintCandidate> {
        self.game.compute_hints()
    }

    pub fn verify_inventory(&self) -> InventoryReport {
        self.game.verify_inventory()
    }

    pub fn encode_session(&self) -> String {
        encode_persisted_session(&self.game, self.clock.elapsed_seconds())
    }

    /// Swaps in a saved game. A payload that fails to decode leaves the
    /// current session untouched and reports false.
    pub fn restore_session(&mut self, raw: &str) -> bool {
        let Some(persisted) = decode_persisted_session(raw) else {
            return false;
        };

        let running = !persisted.game.is_won();
        self.clock = GameClock::restore(persisted.elapsed_seconds, running);
        self.game = persisted.game;
        self.hooks
            .on_message(&status_text::msg_session_restored(self.game.seed()), false);
        self.hooks.on_state_changed();
        true
    }

    fn after_mutation(&mut self, completed_before: usize) {
        let completed = self.game.foundations().completed();
        if completed > completed_before {
            self.hooks.audio_cue(AudioCue::Completion);
            self.hooks
                .on_message(&status_text::msg_run_completed(completed), false);
        }
        if self.game.is_won() {
            self.clock.pause();
            self.hooks.audio_cue(AudioCue::Win);
            self.hooks.on_message(
                &status_text::msg_won(self.game.move_count(), self.game.score()),
                false,
            );
            self.hooks.on_win();
        }
        self.hooks.on_state_changed();
    }
}

#[cfg(test)]
impl<H: EngineHooks> GameSession<H> {
    pub(crate) fn debug_with_game(game: SpiderGame, hooks: H) -> Self {
        Self {
            game,
            clock: GameClock::default(),
            hooks,
        }
    }
}
