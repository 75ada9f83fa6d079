//! Keystroke ticks played while a prompt is being typed.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::Rng;

use crate::error::AudioError;

/// A short synthesized click.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneSpec {
    pub frequency_hz: f32,
    pub peak_gain: f32,
    pub attack: Duration,
    pub decay: Duration,
    pub stop_after: Duration,
}

impl ToneSpec {
    pub const BASE_HZ: f32 = 220.0;
    pub const SPREAD_HZ: f32 = 40.0;

    /// A click with a random pitch in `[BASE_HZ, BASE_HZ + SPREAD_HZ]`.
    pub fn key_click<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            frequency_hz: rng.random_range(Self::BASE_HZ..=Self::BASE_HZ + Self::SPREAD_HZ),
            peak_gain: 0.08,
            attack: Duration::from_millis(1),
            decay: Duration::from_millis(60),
            stop_after: Duration::from_millis(70),
        }
    }
}

/// A device that can play tones.
///
/// `acquire` is called at most once, on the first user interaction.
pub trait AudioOutput: Send + Sync {
    /// Open the device.
    ///
    /// # Errors
    ///
    /// Returns `AudioError::Unavailable` when there is no audio capability.
    fn acquire(&self) -> Result<(), AudioError>;

    fn play(&self, tone: &ToneSpec);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioState {
    /// Waiting for the first user interaction.
    Pending,
    Ready,
    /// No output, or acquisition failed. Final for the session.
    Unavailable,
}

/// Lazily acquired, optional audio capability.
#[derive(Clone)]
pub struct KeySounds {
    output: Option<Arc<dyn AudioOutput>>,
    state: Arc<Mutex<AudioState>>,
}

impl KeySounds {
    #[must_use]
    pub fn new(output: Option<Arc<dyn AudioOutput>>) -> Self {
        let state = if output.is_some() {
            AudioState::Pending
        } else {
            AudioState::Unavailable
        };
        Self {
            output,
            state: Arc::new(Mutex::new(state)),
        }
    }

    #[must_use]
    pub fn silent() -> Self {
        Self::new(None)
    }

    #[must_use]
    pub fn state(&self) -> AudioState {
        self.state
            .lock()
            .map_or(AudioState::Unavailable, |state| *state)
    }

    /// Acquire the output on the first interaction; later calls are no-ops.
    pub fn on_user_interaction(&self) -> AudioState {
        let Ok(mut state) = self.state.lock() else {
            return AudioState::Unavailable;
        };
        if *state != AudioState::Pending {
            return *state;
        }
        *state = match self.output.as_ref().map(|output| output.acquire()) {
            Some(Ok(())) => AudioState::Ready,
            Some(Err(err)) => {
                tracing::debug!(error = %err, "key sounds disabled");
                AudioState::Unavailable
            }
            None => AudioState::Unavailable,
        };
        *state
    }

    /// Play a click for `unit` unless it is whitespace or no output is ready.
    /// Returns whether a tone was played.
    pub fn tick<R: Rng + ?Sized>(&self, unit: char, rng: &mut R) -> bool {
        if unit.is_whitespace() || self.state() != AudioState::Ready {
            return false;
        }
        let Some(output) = self.output.as_ref() else {
            return false;
        };
        output.play(&ToneSpec::key_click(rng));
        true
    }
}
