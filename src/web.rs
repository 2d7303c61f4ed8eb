//! Browser bindings
//!
//! The JS host draws the stairs and sprite, wires DOM input and owns the
//! animation frame loop. It drives a `WebGame` and reads state back as plain
//! numbers or JSON. Music tempo is handled here so the host never has to
//! touch playback rates.

use wasm_bindgen::prelude::*;

use crate::audio::MusicPlayer;
use crate::highscores::HighScores;
use crate::settings::Settings;
use crate::sim::{self, ClimbOutcome, GameEvent, GameState, TickInput};

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    log::info!("Infinite Stairs starting...");
}

/// Decoded music track, ready to hand to a `WebGame`
#[wasm_bindgen]
pub struct WebMusic {
    player: MusicPlayer,
}

#[wasm_bindgen]
impl WebMusic {
    /// Fetch and decode the music file at `url`
    pub async fn load(url: String) -> Result<WebMusic, JsValue> {
        let mut player = MusicPlayer::new()?;
        player.load(&url).await?;
        Ok(WebMusic { player })
    }
}

/// Game instance handed to JS
#[wasm_bindgen]
pub struct WebGame {
    state: GameState,
    settings: Settings,
    high_scores: HighScores,
    music: Option<MusicPlayer>,
    /// Events already applied to the music, waiting for the host
    pending: Vec<GameEvent>,
    /// Leaderboard rank of the finished run (None while playing or unranked)
    last_rank: Option<usize>,
    recorded: bool,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: f64) -> WebGame {
        let seed = seed as u64;
        log::info!("Game initialized with seed: {}", seed);
        WebGame {
            state: GameState::new(seed),
            settings: Settings::load(),
            high_scores: HighScores::load(),
            music: None,
            pending: Vec::new(),
            last_rank: None,
            recorded: false,
        }
    }

    /// Take ownership of a loaded track and start it at the run's rate
    pub fn attach_music(&mut self, music: WebMusic) {
        let mut player = music.player;
        player.set_volume(self.settings.effective_music_volume());
        if self.state.is_playing() {
            if let Err(err) = player.play(self.state.playback_rate) {
                log::warn!("Music failed to start: {:?}", err);
            }
        }
        self.music = Some(player);
    }

    /// Climb; returns true if the player landed
    pub fn climb(&mut self, now_ms: f64) -> bool {
        self.resume_audio();
        let outcome = sim::climb(&mut self.state, now_ms);
        self.process_events();
        matches!(outcome, ClimbOutcome::Landed(_))
    }

    /// Turn and climb; returns true if the player landed
    pub fn change_direction(&mut self, now_ms: f64) -> bool {
        self.resume_audio();
        let outcome = sim::change_direction(&mut self.state, now_ms);
        self.process_events();
        matches!(outcome, ClimbOutcome::Landed(_))
    }

    /// Frame update; `autopilot` plays the game for attract mode
    pub fn tick(&mut self, dt: f32, now_ms: f64, autopilot: bool) {
        let input = TickInput {
            autopilot,
            ..Default::default()
        };
        sim::tick(&mut self.state, &input, dt, now_ms);
        if !self.settings.smooth_camera() {
            self.state.camera.snap();
        }
        self.process_events();
    }

    pub fn restart(&mut self) {
        self.state.restart();
        self.pending.clear();
        self.last_rank = None;
        self.recorded = false;
        let rate = self.state.playback_rate;
        if let Some(music) = &mut self.music {
            if let Err(err) = music.play(rate) {
                log::warn!("Music failed to restart: {:?}", err);
            }
        }
    }

    /// Mute or unmute, e.g. when the tab loses focus
    pub fn set_muted(&mut self, muted: bool) {
        self.settings.muted = muted;
        self.settings.save();
        self.apply_settings();
    }

    pub fn mute_on_blur(&self) -> bool {
        self.settings.mute_on_blur
    }

    pub fn show_bpm(&self) -> bool {
        self.settings.show_bpm
    }

    pub fn show_timer(&self) -> bool {
        self.settings.show_timer
    }

    /// Current settings as JSON, for the options screen
    pub fn settings_json(&self) -> String {
        self.settings.to_json().unwrap_or_else(|_| "{}".to_string())
    }

    /// Replace the settings from options-screen JSON, then save and apply them
    pub fn set_settings_json(&mut self, json: &str) -> Result<(), JsValue> {
        let settings = Settings::from_json(json)
            .map_err(|e| JsValue::from_str(&format!("Invalid settings: {}", e)))?;
        self.settings = settings;
        self.settings.save();
        self.apply_settings();
        Ok(())
    }

    pub fn is_game_over(&self) -> bool {
        !self.state.is_playing()
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn bpm(&self) -> u32 {
        self.state.tempo.current_bpm()
    }

    pub fn max_bpm(&self) -> u32 {
        self.state.tempo.max_bpm()
    }

    pub fn game_time(&self) -> f32 {
        self.state.game_time
    }

    pub fn playback_rate(&self) -> f32 {
        self.state.playback_rate
    }

    pub fn camera_y(&self) -> f32 {
        self.state.camera.y
    }

    /// Rate the music is actually playing at (0 without music)
    pub fn music_rate(&self) -> f32 {
        self.music.as_ref().map(|m| m.rate()).unwrap_or(0.0)
    }

    /// Best score on the leaderboard (0 if empty)
    pub fn top_score(&self) -> u32 {
        self.high_scores.top_score().unwrap_or(0)
    }

    /// Fastest tempo across recorded runs, for the game-over screen
    pub fn best_bpm(&self) -> u32 {
        self.high_scores.best_bpm().unwrap_or(0)
    }

    /// Whether the current score would make the leaderboard
    pub fn is_high_score(&self) -> bool {
        self.high_scores.qualifies(self.state.score)
    }

    /// Leaderboard rank of the run that just ended (0 if none)
    pub fn last_rank(&self) -> u32 {
        self.last_rank.map(|r| r as u32).unwrap_or(0)
    }

    /// All stairs as a JSON array of `{x, y, width, height}`
    pub fn stairs_json(&self) -> String {
        serde_json::to_string(self.state.track.stairs()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Player as JSON (`feet`, `facing`, `animation`)
    pub fn player_json(&self) -> String {
        serde_json::to_string(&self.state.player).unwrap_or_else(|_| "{}".to_string())
    }

    /// Pending events as a JSON array, oldest first
    pub fn drain_events_json(&mut self) -> String {
        let events = std::mem::take(&mut self.pending);
        serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn high_scores_json(&self) -> String {
        serde_json::to_string(&self.high_scores).unwrap_or_else(|_| "{}".to_string())
    }
}

impl WebGame {
    fn apply_settings(&mut self) {
        if let Some(music) = &self.music {
            music.set_volume(self.settings.effective_music_volume());
        }
        if !self.settings.smooth_camera() {
            self.state.camera.snap();
        }
    }

    fn resume_audio(&self) {
        if let Some(music) = &self.music {
            music.resume();
        }
    }

    /// Apply simulation events to the music and leaderboard, then queue them for JS
    fn process_events(&mut self) {
        for event in self.state.drain_events() {
            match &event {
                GameEvent::TempoChanged { playback_rate, .. } => {
                    if let Some(music) = &mut self.music {
                        music.set_rate(*playback_rate);
                    }
                }
                GameEvent::GameOver(summary) => {
                    if let Some(music) = &mut self.music {
                        music.stop();
                    }
                    if !self.recorded {
                        self.recorded = true;
                        self.last_rank = self.high_scores.record(summary, js_sys::Date::now());
                        if let Some(rank) = self.last_rank {
                            log::info!("New high score! Rank {}", rank);
                            self.high_scores.save();
                        }
                    }
                }
                GameEvent::Climbed { .. } | GameEvent::TrackExtended { .. } => {}
            }
            self.pending.push(event);
        }
    }
}
