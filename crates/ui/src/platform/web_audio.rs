use dioxus::document::eval;
use services::{AudioError, AudioOutput, ToneSpec};

/// Plays key clicks through the webview's Web Audio API.
///
/// The audio context lives on `window.__folioAudio`. When the webview has no
/// Web Audio support the context stays `null` and every click is a no-op.
pub struct WebAudioOutput;

impl AudioOutput for WebAudioOutput {
    /// Always `Ok`: `eval` cannot report a missing `AudioContext` back
    /// synchronously, so that case degrades inside the script instead.
    fn acquire(&self) -> Result<(), AudioError> {
        let _ = eval(AUDIO_INIT_SCRIPT);
        Ok(())
    }

    fn play(&self, tone: &ToneSpec) {
        let _ = eval(&key_click_script(tone));
    }
}

const AUDIO_INIT_SCRIPT: &str = r"(function() {
    if (window.__folioAudio !== undefined) return;
    const Ctx = window.AudioContext || window.webkitAudioContext;
    try {
        window.__folioAudio = Ctx ? new Ctx() : null;
    } catch (_) {
        window.__folioAudio = null;
    }
})();";

fn key_click_script(tone: &ToneSpec) -> String {
    let frequency = tone.frequency_hz;
    let peak = tone.peak_gain;
    let attack = tone.attack.as_secs_f32();
    let decay = tone.decay.as_secs_f32();
    let stop = tone.stop_after.as_secs_f32();
    format!(
        r#"(function() {{
            const ctx = window.__folioAudio;
            if (!ctx) return;
            const now = ctx.currentTime;
            const osc = ctx.createOscillator();
            const gain = ctx.createGain();
            osc.type = "square";
            osc.frequency.setValueAtTime({frequency}, now);
            gain.gain.setValueAtTime(0.0001, now);
            gain.gain.exponentialRampToValueAtTime({peak}, now + {attack});
            gain.gain.exponentialRampToValueAtTime(0.0001, now + {decay});
            osc.connect(gain).connect(ctx.destination);
            osc.start(now);
            osc.stop(now + {stop});
        }})();"#
    )
}
