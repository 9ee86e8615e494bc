use std::cell::RefCell;
use std::rc::Rc;

use crate::engine::hooks::{AudioCue, EngineHooks};
use crate::engine::seed_ops::{normalize_seed_input, random_seed_token, seed_from_text_or_random};
use crate::engine::session::{decode_persisted_session, encode_persisted_session, GameSession};
use crate::engine::timing::GameClock;
use crate::game::{Card, Difficulty, SpiderGame, Suit};

#[derive(Clone, Default)]
struct Recorder {
    events: Rc<RefCell<Vec<String>>>,
}

impl Recorder {
    fn contains(&self, needle: &str) -> bool {
        self.events
            .borrow()
            .iter()
            .any(|event| event.contains(needle))
    }

    fn count(&self, needle: &str) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| event.contains(needle))
            .count()
    }
}

impl EngineHooks for Recorder {
    fn on_state_changed(&mut self) {
        self.events.borrow_mut().push("state".to_string());
    }

    fn on_message(&mut self, text: &str, is_error: bool) {
        let kind = if is_error { "err" } else { "info" };
        self.events.borrow_mut().push(format!("msg:{kind}:{text}"));
    }

    fn on_win(&mut self) {
        self.events.borrow_mut().push("won".to_string());
    }

    fn audio_cue(&mut self, cue: AudioCue) {
        self.events.borrow_mut().push(format!("cue:{cue:?}"));
    }
}

fn card(id: u8, suit: Suit, rank: u8, face_up: bool) -> Card {
    Card {
        id,
        suit,
        rank,
        face_up,
    }
}

fn columns<const N: usize>(filled: [Vec<Card>; N]) -> [Vec<Card>; 10] {
    let mut tableau: [Vec<Card>; 10] = std::array::from_fn(|_| Vec::new());
    for (col, pile) in filled.into_iter().enumerate() {
        tableau[col] = pile;
    }
    tableau
}

#[test]
fn seed_input_normalization() {
    assert_eq!(normalize_seed_input("  spider9  "), Some("spider9".to_string()));
    assert_eq!(normalize_seed_input("   "), None);
    assert_eq!(seed_from_text_or_random("kept"), "kept");
}

#[test]
fn random_seed_tokens_are_hex_and_vary() {
    let token = random_seed_token();
    assert_eq!(token.len(), 8);
    assert!(token.chars().all(|ch| ch.is_ascii_hexdigit()));

    let generated: std::collections::HashSet<String> =
        (0..16).map(|_| random_seed_token()).collect();
    assert!(generated.len() > 1);
}

#[test]
fn new_session_announces_the_seed() {
    let recorder = Recorder::default();
    let session = GameSession::with_hooks(
        Difficulty::One,
        Some("test1"),
        true,
        recorder.clone(),
    );

    assert_eq!(session.game().seed(), "test1");
    assert!(recorder.contains("msg:info:Started a new game. Seed test1."));
    assert!(recorder.contains("state"));
    assert!(session.clock().is_running());
}

#[test]
fn omitted_seed_gets_a_generated_token() {
    let session = GameSession::new(Difficulty::Four, None, true);
    assert_eq!(session.game().seed().len(), 8);
}

#[test]
fn illegal_move_reports_error_and_cue() {
    let recorder = Recorder::default();
    let mut session = GameSession::with_hooks(
        Difficulty::One,
        Some("test1"),
        true,
        recorder.clone(),
    );

    assert!(!session.move_run(0, 0, 0));
    assert!(recorder.contains("cue:InvalidMove"));
    assert!(recorder.contains("msg:err:That move is not allowed."));
    assert_eq!(session.game().move_count(), 0);
}

#[test]
fn blocked_deal_explains_the_reason() {
    let mut tableau: [Vec<Card>; 10] =
        std::array::from_fn(|col| vec![card(col as u8, Suit::Spades, 5, true)]);
    tableau[6].clear();
    let game = SpiderGame::debug_new(
        Difficulty::One,
        true,
        vec![card(99, Suit::Spades, 9, false)],
        tableau,
        0,
    );
    let recorder = Recorder::default();
    let mut session = GameSession::debug_with_game(game, recorder.clone());

    assert!(!session.deal_row());
    assert!(recorder.contains("msg:err:Fill every empty column before dealing."));
    assert!(recorder.contains("cue:InvalidMove"));
}

#[test]
fn successful_deal_fires_the_deal_cue() {
    let recorder = Recorder::default();
    let mut session = GameSession::with_hooks(
        Difficulty::One,
        Some("test1"),
        true,
        recorder.clone(),
    );

    assert!(session.deal_row());
    assert!(recorder.contains("cue:Deal"));
    assert_eq!(session.game().stock_len(), 40);
}

#[test]
fn completing_the_final_run_wins_the_game() {
    let mut col0 = run_down_spades(0, 13, 2);
    col0.insert(0, card(90, Suit::Spades, 7, true));
    let game = SpiderGame::debug_new(
        Difficulty::One,
        true,
        Vec::new(),
        columns([col0, vec![card(40, Suit::Spades, 1, true)]]),
        7,
    );
    let recorder = Recorder::default();
    let mut session = GameSession::debug_with_game(game, recorder.clone());

    assert!(session.move_run(1, 0, 0));

    assert!(session.game().is_won());
    assert!(recorder.contains("cue:CardDrop"));
    assert!(recorder.contains("cue:Completion"));
    assert!(recorder.contains("cue:Win"));
    assert!(recorder.contains("won"));
    assert!(recorder.contains("msg:info:You won"));
    assert!(!session.clock().is_running());
}

#[test]
fn undo_fires_its_cue_only_when_something_happened() {
    let recorder = Recorder::default();
    let mut session = GameSession::with_hooks(
        Difficulty::One,
        Some("test1"),
        true,
        recorder.clone(),
    );

    session.undo();
    assert_eq!(recorder.count("cue:Undo"), 0);

    assert!(session.deal_row());
    session.undo();
    assert_eq!(recorder.count("cue:Undo"), 1);
    assert_eq!(session.game().stock_len(), 50);
}

#[test]
fn lift_run_validates_the_grabbed_tail() {
    let recorder = Recorder::default();
    let game = SpiderGame::debug_new(
        Difficulty::One,
        true,
        Vec::new(),
        columns([vec![
            card(0, Suit::Spades, 9, false),
            card(1, Suit::Spades, 8, true),
            card(2, Suit::Spades, 7, true),
        ]]),
        0,
    );
    let mut session = GameSession::debug_with_game(game, recorder.clone());

    assert!(session.lift_run(0, 1));
    assert!(session.lift_run(0, 2));
    assert!(!session.lift_run(0, 0));
    assert!(!session.lift_run(0, 3));
    assert!(!session.lift_run(4, 0));
    assert_eq!(recorder.count("cue:CardPickup"), 2);
}

#[test]
fn new_game_resets_counters_and_clock() {
    let recorder = Recorder::default();
    let mut session = GameSession::with_hooks(
        Difficulty::One,
        Some("first"),
        true,
        recorder.clone(),
    );
    assert!(session.deal_row());
    session.tick(5_000);

    session.new_game(Difficulty::Two, Some("second"), false);

    assert_eq!(session.game().seed(), "second");
    assert_eq!(session.game().difficulty(), Difficulty::Two);
    assert_eq!(session.game().move_count(), 0);
    assert_eq!(session.game().deck_size(), 96);
    assert_eq!(session.clock().elapsed_seconds(), 0);
    assert!(session.clock().is_running());
    assert!(recorder.contains("msg:info:Started a new game. Seed second."));
}

#[test]
fn clock_ticks_only_while_running() {
    let mut clock = GameClock::default();
    clock.tick(5_000);
    assert_eq!(clock.elapsed_seconds(), 0);

    clock.start();
    clock.tick(1_500);
    assert_eq!(clock.elapsed_seconds(), 1);

    clock.pause();
    clock.tick(10_000);
    assert_eq!(clock.elapsed_seconds(), 1);

    assert_eq!(GameClock::restore(42, true).elapsed_seconds(), 42);
}

#[test]
fn persisted_sessions_round_trip() {
    let mut session = GameSession::new(Difficulty::Two, Some("persist"), true);
    session.tick(65_000);
    let hints = session.hints();
    if let Some(hint) = hints.first() {
        assert!(session.move_run(hint.from, hint.start, hint.to));
    }

    let raw = session.encode_session();
    let decoded = decode_persisted_session(&raw).expect("session decodes");
    assert_eq!(decoded.elapsed_seconds, 65);
    assert_eq!(
        decoded.game.encode_for_session(),
        session.game().encode_for_session()
    );
}

#[test]
fn restore_swaps_in_the_saved_game() {
    let mut saved = GameSession::new(Difficulty::Four, Some("savefile"), false);
    saved.tick(30_000);
    let raw = saved.encode_session();

    let recorder = Recorder::default();
    let mut session = GameSession::with_hooks(
        Difficulty::One,
        Some("other"),
        true,
        recorder.clone(),
    );
    assert!(session.restore_session(&raw));

    assert_eq!(session.game().seed(), "savefile");
    assert_eq!(session.game().difficulty(), Difficulty::Four);
    assert!(!session.game().include_aces());
    assert_eq!(session.clock().elapsed_seconds(), 30);
    assert!(session.clock().is_running());
    assert!(recorder.contains("msg:info:Restored the saved game. Seed savefile."));
}

#[test]
fn restore_rejects_garbage_without_touching_state() {
    let mut session = GameSession::new(Difficulty::One, Some("keepme"), true);

    assert!(!session.restore_session("definitely not a session"));
    assert!(!session.restore_session("v=9\nelapsed=1\ngame=nope"));
    assert_eq!(session.game().seed(), "keepme");
}

#[test]
fn persisted_payload_is_versioned() {
    let session = GameSession::new(Difficulty::One, Some("v1"), true);
    let raw = session.encode_session();
    assert!(raw.starts_with("v=1\n"));

    let unversioned = encode_persisted_session(session.game(), 0).replace("v=1", "v=7");
    assert!(decode_persisted_session(&unversioned).is_none());
}

fn run_down_spades(id_start: u8, high: u8, low: u8) -> Vec<Card> {
    (low..=high)
        .rev()
        .enumerate()
        .map(|(offset, rank)| card(id_start + offset as u8, Suit::Spades, rank, true))
        .collect()
}
