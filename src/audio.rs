//! Background music using the Web Audio API
//!
//! One looping track whose playback rate follows the climbing tempo.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AudioBuffer, AudioBufferSourceNode, AudioContext, GainNode};

/// Music player for the game
pub struct MusicPlayer {
    ctx: AudioContext,
    gain: GainNode,
    buffer: Option<AudioBuffer>,
    source: Option<AudioBufferSourceNode>,
    rate: f32,
}

impl MusicPlayer {
    /// Create the audio graph (context -> gain -> speakers)
    pub fn new() -> Result<Self, JsValue> {
        let ctx = AudioContext::new()?;
        let gain = ctx.create_gain()?;
        gain.connect_with_audio_node(&ctx.destination())?;
        Ok(Self {
            ctx,
            gain,
            buffer: None,
            source: None,
            rate: crate::consts::START_PLAYBACK_RATE,
        })
    }

    /// Fetch and decode the music file at `url`
    pub async fn load(&mut self, url: &str) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let response: web_sys::Response = JsFuture::from(window.fetch_with_str(url))
            .await?
            .dyn_into()?;
        let bytes = JsFuture::from(response.array_buffer()?).await?;
        let bytes: js_sys::ArrayBuffer = bytes.dyn_into()?;
        let decoded = JsFuture::from(self.ctx.decode_audio_data(&bytes)?).await?;
        self.buffer = Some(decoded.dyn_into()?);
        log::info!("Music loaded from {}", url);
        Ok(())
    }

    /// Resume audio context (required after user gesture)
    pub fn resume(&self) {
        if self.ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = self.ctx.resume();
        }
    }

    /// Start looping the track at `rate`. No-op until a buffer is loaded.
    pub fn play(&mut self, rate: f32) -> Result<(), JsValue> {
        let Some(buffer) = &self.buffer else {
            return Ok(());
        };
        self.stop();

        let source = self.ctx.create_buffer_source()?;
        source.set_buffer(Some(buffer));
        source.set_loop(true);
        source.playback_rate().set_value(rate);
        source.connect_with_audio_node(&self.gain)?;
        #[allow(deprecated)]
        source.start()?;

        self.rate = rate;
        self.source = Some(source);
        Ok(())
    }

    /// Change the playback rate of the running track
    pub fn set_rate(&mut self, rate: f32) {
        if let Some(source) = &self.source {
            source.playback_rate().set_value(rate);
        }
        self.rate = rate;
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }

    pub fn set_volume(&self, volume: f32) {
        self.gain.gain().set_value(volume.clamp(0.0, 1.0));
    }

    pub fn stop(&mut self) {
        if let Some(source) = self.source.take() {
            #[allow(deprecated)]
            let _ = source.stop();
        }
    }
}
