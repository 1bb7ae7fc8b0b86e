//! Audio cues for game events.
//!
//! The output device is opened lazily through an [`AudioContext`] owned by
//! the [`AudioCues`] handler. Nothing is opened until the first cue plays,
//! and the context can be suspended and resumed explicitly.

use derive_more::{Display, Error};
use gridline_core::{GameEvent, GameEventHandler, HandlerError};
use std::io::Write;
use tracing::{debug, instrument, trace};

/// One tone of a cue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Pitch in hertz.
    pub frequency_hz: f32,
    /// Length in milliseconds.
    pub duration_ms: u32,
}

/// The sounds the game can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum SoundCue {
    /// Short, sharp tick for an accepted move.
    Click,
    /// Rising arpeggio for a win.
    Victory,
    /// Short falling pair for a restart.
    Restart,
}

const CLICK: [Tone; 1] = [Tone {
    frequency_hz: 880.0,
    duration_ms: 40,
}];

const VICTORY: [Tone; 4] = [
    Tone {
        frequency_hz: 523.25,
        duration_ms: 120,
    },
    Tone {
        frequency_hz: 659.25,
        duration_ms: 120,
    },
    Tone {
        frequency_hz: 783.99,
        duration_ms: 120,
    },
    Tone {
        frequency_hz: 1046.5,
        duration_ms: 300,
    },
];

const RESTART: [Tone; 2] = [
    Tone {
        frequency_hz: 600.0,
        duration_ms: 80,
    },
    Tone {
        frequency_hz: 300.0,
        duration_ms: 120,
    },
];

impl SoundCue {
    /// Returns the tones making up this cue, in playing order.
    pub fn tones(self) -> &'static [Tone] {
        match self {
            SoundCue::Click => &CLICK,
            SoundCue::Victory => &VICTORY,
            SoundCue::Restart => &RESTART,
        }
    }

    /// Returns the cue for a game event.
    pub fn for_event(event: &GameEvent) -> Self {
        match event {
            GameEvent::MoveAccepted => SoundCue::Click,
            GameEvent::GameWon(_) => SoundCue::Victory,
            GameEvent::GameRestarted => SoundCue::Restart,
        }
    }
}

/// Audio failure.
#[derive(Debug, Display, Error)]
pub enum AudioError {
    /// The output could not be opened or resumed.
    #[display("Audio output unavailable: {}", _0)]
    Unavailable(#[error(not(source))] String),
    /// Writing to the output failed.
    #[display("Audio output failed: {}", _0)]
    Io(std::io::Error),
}

/// Something that can produce sound.
pub trait ToneSink {
    /// Prepares the output. Called before the first cue and after a suspend.
    fn open(&mut self) -> Result<(), AudioError>;

    /// Plays a cue.
    fn play(&mut self, cue: SoundCue, tones: &[Tone]) -> Result<(), AudioError>;

    /// Releases or pauses the output.
    fn suspend(&mut self) -> Result<(), AudioError>;
}

/// Terminal bell output: one bell per cue, pitch is up to the terminal.
#[derive(Debug)]
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    /// Rings the bell on `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TerminalBell<std::io::Stdout> {
    /// Rings the bell on standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ToneSink for TerminalBell<W> {
    fn open(&mut self) -> Result<(), AudioError> {
        Ok(())
    }

    fn play(&mut self, cue: SoundCue, _tones: &[Tone]) -> Result<(), AudioError> {
        trace!(%cue, "Ringing terminal bell");
        self.out.write_all(b"\x07").map_err(AudioError::Io)?;
        self.out.flush().map_err(AudioError::Io)
    }

    fn suspend(&mut self) -> Result<(), AudioError> {
        self.out.flush().map_err(AudioError::Io)
    }
}

/// Lifecycle of an [`AudioContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum ContextState {
    /// Never opened.
    Uninitialized,
    /// Open and ready to play.
    Active,
    /// Opened before, currently paused.
    Suspended,
}

/// Lazily opened handle to a [`ToneSink`].
#[derive(Debug)]
pub struct AudioContext<S: ToneSink> {
    sink: S,
    state: ContextState,
}

impl<S: ToneSink> AudioContext<S> {
    /// Wraps `sink` without opening it.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            state: ContextState::Uninitialized,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ContextState {
        self.state
    }

    /// Returns the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Opens or resumes the sink if it is not already active.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn ensure_active(&mut self) -> Result<(), AudioError> {
        if self.state != ContextState::Active {
            self.sink.open()?;
            debug!("Audio context active");
            self.state = ContextState::Active;
        }
        Ok(())
    }

    /// Pauses an active sink. Does nothing otherwise.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn suspend(&mut self) -> Result<(), AudioError> {
        if self.state == ContextState::Active {
            self.sink.suspend()?;
            debug!("Audio context suspended");
            self.state = ContextState::Suspended;
        }
        Ok(())
    }

    /// Plays `cue`, activating the context first.
    pub fn play(&mut self, cue: SoundCue) -> Result<(), AudioError> {
        self.ensure_active()?;
        self.sink.play(cue, cue.tones())
    }
}

/// Game event handler that plays a cue per event.
#[derive(Debug)]
pub struct AudioCues<S: ToneSink> {
    context: AudioContext<S>,
    enabled: bool,
}

impl<S: ToneSink> AudioCues<S> {
    /// Creates the handler. A disabled handler never touches the sink.
    pub fn new(context: AudioContext<S>, enabled: bool) -> Self {
        Self { context, enabled }
    }

    /// Returns the audio context.
    pub fn context(&self) -> &AudioContext<S> {
        &self.context
    }

    /// Suspends the audio context, e.g. when the session ends.
    pub fn suspend(&mut self) -> Result<(), AudioError> {
        self.context.suspend()
    }
}

impl<S: ToneSink> GameEventHandler for AudioCues<S> {
    fn handle(&mut self, event: &GameEvent) -> Result<(), HandlerError> {
        if !self.enabled {
            return Ok(());
        }
        self.context
            .play(SoundCue::for_event(event))
            .map_err(|e| HandlerError::new(e.to_string()))
    }

    fn name(&self) -> &str {
        "audio"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridline_core::PlayerId;
    use strum::IntoEnumIterator;

    #[derive(Debug, Default)]
    struct RecordingSink {
        opened: usize,
        suspended: usize,
        played: Vec<SoundCue>,
        fail_open: bool,
    }

    impl ToneSink for RecordingSink {
        fn open(&mut self) -> Result<(), AudioError> {
            if self.fail_open {
                return Err(AudioError::Unavailable("no device".to_string()));
            }
            self.opened += 1;
            Ok(())
        }

        fn play(&mut self, cue: SoundCue, _tones: &[Tone]) -> Result<(), AudioError> {
            self.played.push(cue);
            Ok(())
        }

        fn suspend(&mut self) -> Result<(), AudioError> {
            self.suspended += 1;
            Ok(())
        }
    }

    #[test]
    fn test_context_opens_lazily_once() {
        let mut context = AudioContext::new(RecordingSink::default());
        assert_eq!(context.state(), ContextState::Uninitialized);
        assert_eq!(context.sink().opened, 0);

        context.play(SoundCue::Click).unwrap();
        context.play(SoundCue::Click).unwrap();
        assert_eq!(context.state(), ContextState::Active);
        assert_eq!(context.sink().opened, 1);
        assert_eq!(context.sink().played.len(), 2);
    }

    #[test]
    fn test_suspend_and_resume() {
        let mut context = AudioContext::new(RecordingSink::default());
        context.suspend().unwrap();
        assert_eq!(context.state(), ContextState::Uninitialized);

        context.ensure_active().unwrap();
        context.suspend().unwrap();
        assert_eq!(context.state(), ContextState::Suspended);
        assert_eq!(context.sink().suspended, 1);

        context.play(SoundCue::Restart).unwrap();
        assert_eq!(context.state(), ContextState::Active);
        assert_eq!(context.sink().opened, 2);
    }

    #[test]
    fn test_handler_maps_events_to_cues() {
        let mut cues = AudioCues::new(AudioContext::new(RecordingSink::default()), true);
        cues.handle(&GameEvent::MoveAccepted).unwrap();
        cues.handle(&GameEvent::GameWon(PlayerId::FIRST)).unwrap();
        cues.handle(&GameEvent::GameRestarted).unwrap();
        assert_eq!(
            cues.context().sink().played,
            vec![SoundCue::Click, SoundCue::Victory, SoundCue::Restart]
        );
    }

    #[test]
    fn test_muted_handler_stays_closed() {
        let mut cues = AudioCues::new(AudioContext::new(RecordingSink::default()), false);
        cues.handle(&GameEvent::MoveAccepted).unwrap();
        assert_eq!(cues.context().state(), ContextState::Uninitialized);
        assert!(cues.context().sink().played.is_empty());
    }

    #[test]
    fn test_unavailable_device_is_handler_error() {
        let sink = RecordingSink {
            fail_open: true,
            ..RecordingSink::default()
        };
        let mut cues = AudioCues::new(AudioContext::new(sink), true);
        let err = cues.handle(&GameEvent::MoveAccepted).unwrap_err();
        assert!(err.message.contains("no device"));
    }

    #[test]
    fn test_cue_shapes() {
        for cue in SoundCue::iter() {
            assert!(!cue.tones().is_empty(), "{cue} has no tones");
        }
        assert_eq!(SoundCue::Click.tones().len(), 1);
        let victory = SoundCue::Victory.tones();
        assert!(victory.windows(2).all(|w| w[0].frequency_hz < w[1].frequency_hz));
        let restart = SoundCue::Restart.tones();
        assert!(restart.windows(2).all(|w| w[0].frequency_hz > w[1].frequency_hz));
    }

    #[test]
    fn test_terminal_bell_rings_once_per_cue() {
        let mut context = AudioContext::new(TerminalBell::new(Vec::new()));
        context.play(SoundCue::Victory).unwrap();
        context.play(SoundCue::Click).unwrap();
        assert_eq!(context.sink.into_inner(), b"\x07\x07".to_vec());
    }
}
