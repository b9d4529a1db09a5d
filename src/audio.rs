//! Sound cues
//!
//! The simulation only ever asks for a cue to be played; whether it actually
//! sounds is best-effort. Browsers get procedurally generated Web Audio
//! sounds, everything else a silent player.

use std::fmt;

/// Cues the game can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Background/start sound when the splash screen is dismissed
    Ambient,
    /// Ball hits a paddle
    Bounce,
}

/// Why a cue could not be played
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioError {
    /// No audio backend (not in a secure context, autoplay blocked, ...)
    Unavailable,
    /// The backend refused to build or start the sound
    Playback(String),
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "audio unavailable"),
            Self::Playback(reason) => write!(f, "playback failed: {}", reason),
        }
    }
}

impl std::error::Error for AudioError {}

/// Something that can try to play a cue
pub trait CuePlayer {
    fn try_play(&mut self, cue: Cue) -> Result<(), AudioError>;
}

/// Play a cue, ignoring failures
pub fn play_best_effort(player: &mut dyn CuePlayer, cue: Cue) {
    if let Err(e) = player.try_play(cue) {
        log::debug!("Ignoring {:?} cue: {}", cue, e);
    }
}

/// Silent player for headless runs
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCues;

impl CuePlayer for NullCues {
    fn try_play(&mut self, _cue: Cue) -> Result<(), AudioError> {
        Ok(())
    }
}

/// Remembers every cue it was asked to play
#[derive(Debug, Default, Clone)]
pub struct RecordingCues {
    pub played: Vec<Cue>,
    /// Report every cue as failed (after recording it)
    pub fail: bool,
}

impl RecordingCues {
    pub fn failing() -> Self {
        Self {
            played: Vec::new(),
            fail: true,
        }
    }

    pub fn count(&self, cue: Cue) -> usize {
        self.played.iter().filter(|c| **c == cue).count()
    }
}

impl CuePlayer for RecordingCues {
    fn try_play(&mut self, cue: Cue) -> Result<(), AudioError> {
        self.played.push(cue);
        if self.fail {
            Err(AudioError::Unavailable)
        } else {
            Ok(())
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::WebAudio;

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::JsValue;
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{AudioError, Cue, CuePlayer};

    fn js_err(e: JsValue) -> AudioError {
        AudioError::Playback(format!("{:?}", e))
    }

    /// Web Audio cue player
    pub struct WebAudio {
        ctx: Option<AudioContext>,
        volume: f32,
    }

    impl Default for WebAudio {
        fn default() -> Self {
            Self::new()
        }
    }

    impl WebAudio {
        pub fn new() -> Self {
            // May fail outside a secure context
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self { ctx, volume: 0.8 }
        }

        /// Oscillator wired through a gain node to the speakers
        fn create_osc(
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Result<(OscillatorNode, GainNode), AudioError> {
            let osc = ctx.create_oscillator().map_err(js_err)?;
            let gain = ctx.create_gain().map_err(js_err)?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).map_err(js_err)?;
            gain.connect_with_audio_node(&ctx.destination())
                .map_err(js_err)?;

            Ok((osc, gain))
        }

        /// Boing - pitch bends up then settles
        fn play_bounce(&self, ctx: &AudioContext) -> Result<(), AudioError> {
            let (osc, gain) = Self::create_osc(ctx, 220.0, OscillatorType::Square)?;
            let t = ctx.current_time();

            gain.gain()
                .set_value_at_time(self.volume * 0.25, t)
                .map_err(js_err)?;
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.18)
                .map_err(js_err)?;
            osc.frequency().set_value_at_time(220.0, t).map_err(js_err)?;
            osc.frequency()
                .exponential_ramp_to_value_at_time(440.0, t + 0.05)
                .map_err(js_err)?;
            osc.frequency()
                .exponential_ramp_to_value_at_time(330.0, t + 0.18)
                .map_err(js_err)?;

            osc.start().map_err(js_err)?;
            osc.stop_with_when(t + 0.2).map_err(js_err)
        }

        /// Slow two-note swell
        fn play_ambient(&self, ctx: &AudioContext) -> Result<(), AudioError> {
            for (i, freq) in [110.0_f32, 164.81].into_iter().enumerate() {
                let (osc, gain) = Self::create_osc(ctx, freq, OscillatorType::Triangle)?;
                let t = ctx.current_time() + i as f64 * 0.4;

                gain.gain().set_value_at_time(0.001, t).map_err(js_err)?;
                gain.gain()
                    .exponential_ramp_to_value_at_time(self.volume * 0.2, t + 0.6)
                    .map_err(js_err)?;
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.001, t + 2.5)
                    .map_err(js_err)?;

                osc.start_with_when(t).map_err(js_err)?;
                osc.stop_with_when(t + 2.6).map_err(js_err)?;
            }
            Ok(())
        }
    }

    impl CuePlayer for WebAudio {
        fn try_play(&mut self, cue: Cue) -> Result<(), AudioError> {
            let ctx = self.ctx.as_ref().ok_or(AudioError::Unavailable)?;

            // Browsers keep the context suspended until a user gesture
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            match cue {
                Cue::Ambient => self.play_ambient(ctx),
                Cue::Bounce => self.play_bounce(ctx),
            }
        }
    }
}
