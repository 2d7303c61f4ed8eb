//! Infinite Stairs - An endless zig-zag stair climber
//!
//! Core modules:
//! - `sim`: Deterministic simulation (stair generation, step resolution, game state)
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences
//! - `highscores`: Local leaderboard
//! - `audio`: Web Audio music playback (wasm32 only)
//! - `web`: Browser bindings for the JS host (wasm32 only)

pub mod highscores;
pub mod settings;
pub mod sim;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod audio;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use highscores::HighScores;
pub use settings::Settings;
pub use tuning::{TierOdds, Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Stair platform dimensions
    pub const STAIR_WIDTH: f32 = 120.0;
    pub const STAIR_HEIGHT: f32 = 40.0;
    /// Vertical rise between consecutive stairs
    pub const STAIR_SPACING: f32 = 60.0;
    /// Horizontal gap between consecutive stairs in a chain
    pub const STAIR_GAP: f32 = 10.0;
    /// Horizontal offset between consecutive stairs (width + gap)
    pub const STAIR_STEP_X: f32 = STAIR_WIDTH + STAIR_GAP;

    /// First stair of every track
    pub const ORIGIN_X: f32 = 400.0;
    pub const ORIGIN_Y: f32 = 516.0;

    /// Player sprite size
    pub const PLAYER_WIDTH: f32 = 139.0;
    pub const PLAYER_HEIGHT: f32 = 124.0;

    /// Camera sits this far above the player sprite
    pub const CAMERA_LEAD: f32 = 300.0;
    /// Fraction of the camera gap closed per 60 Hz frame
    pub const CAMERA_SMOOTHING: f32 = 0.1;
    /// Reference frame time for camera smoothing
    pub const REFERENCE_DT: f32 = 1.0 / 60.0;

    /// Seconds the walk animation plays after a climb
    pub const WALK_DURATION: f32 = 0.2;

    /// Sliding window for the steps-per-minute count (ms)
    pub const TEMPO_WINDOW_MS: f64 = 60_000.0;
    /// Native tempo of the music track
    pub const MUSIC_BPM: f32 = 176.0;
    /// Music never plays slower than this tempo once a run is underway
    pub const MIN_MUSIC_BPM: u32 = 60;
    /// Playback rate at the start of a run
    pub const START_PLAYBACK_RATE: f32 = 0.5;
}
