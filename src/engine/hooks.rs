/// Sound effects the presentation layer may map to actual audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    CardPickup,
    CardDrop,
    Deal,
    Completion,
    Win,
    InvalidMove,
    Undo,
}

/// Presentation callbacks, injected at session construction. All calls
/// are fire-and-forget notifications; the engine never waits on them
/// and implementations must not call back into the session.
pub trait EngineHooks {
    fn on_state_changed(&mut self) {}
    fn on_message(&mut self, _text: &str, _is_error: bool) {}
    fn on_win(&mut self) {}
    fn audio_cue(&mut self, _cue: AudioCue) {}
}

/// Hook sink for headless use and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHooks;

impl EngineHooks for NullHooks {}
