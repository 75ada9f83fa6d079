use std::time::Duration;

use folio_core::model::snapshot_ttl;
use rand::Rng;

/// Cadence of the typewriter reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealSettings {
    /// Fixed delay after each revealed unit.
    pub unit_delay: Duration,
    /// Pause before the first unit of a prompt.
    pub pre_delay: Duration,
    /// Inclusive bounds of the random extra delay added per unit.
    pub jitter_min: Duration,
    pub jitter_max: Duration,
}

impl RevealSettings {
    pub const UNIT_DELAY_MS: u64 = 28;
    pub const PRE_DELAY_MS: u64 = 300;
    pub const JITTER_MAX_MS: u64 = 25;

    /// Delay after one unit: the base delay plus jitter in
    /// `[jitter_min, jitter_max]`, at millisecond resolution.
    pub fn unit_delay_with_jitter<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let lo = duration_ms(self.jitter_min);
        let hi = duration_ms(self.jitter_max).max(lo);
        self.unit_delay + Duration::from_millis(rng.random_range(lo..=hi))
    }

    /// Settings without any waiting, for headless rendering.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            unit_delay: Duration::ZERO,
            pre_delay: Duration::ZERO,
            jitter_min: Duration::ZERO,
            jitter_max: Duration::ZERO,
        }
    }
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            unit_delay: Duration::from_millis(Self::UNIT_DELAY_MS),
            pre_delay: Duration::from_millis(Self::PRE_DELAY_MS),
            jitter_min: Duration::ZERO,
            jitter_max: Duration::from_millis(Self::JITTER_MAX_MS),
        }
    }
}

/// Compile-time knobs of the landing-page widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WidgetSettings {
    pub reveal: RevealSettings,
    /// Initial state of the sound toggle.
    pub key_sound: bool,
    pub snapshot_ttl: chrono::Duration,
}

impl WidgetSettings {
    #[must_use]
    pub fn with_key_sound(mut self, key_sound: bool) -> Self {
        self.key_sound = key_sound;
        self
    }

    #[must_use]
    pub fn with_reveal(mut self, reveal: RevealSettings) -> Self {
        self.reveal = reveal;
        self
    }
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            reveal: RevealSettings::default(),
            key_sound: true,
            snapshot_ttl: snapshot_ttl(),
        }
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
