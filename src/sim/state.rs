//! Game state and core simulation types
//!
//! The host owns one `GameState` and passes it to every action; nothing in
//! the simulation keeps state of its own.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::generator::{extend_track, generate_initial_track};
use super::player::{Camera, Player};
use super::stair::Stair;
use super::tempo::TempoTracker;
use super::track::Track;
use crate::consts::START_PLAYBACK_RATE;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended: no stair was within reach
    GameOver,
}

/// Final numbers for a finished run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub score: u32,
    pub max_bpm: u32,
    pub time_secs: f32,
}

/// Notifications for the host (audio, HUD, effects)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Landed on `stair`; `score` is the new score
    Climbed { score: u32, stair: Stair },
    /// Stairs appended above the old top
    TrackExtended { added: usize, total: usize },
    /// Music should switch to `playback_rate`
    TempoChanged { bpm: u32, playback_rate: f32 },
    /// Run ended
    GameOver(RunSummary),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Balance parameters
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// Successful climbs this run
    pub score: u32,
    /// Seconds of play this run
    pub game_time: f32,
    /// Every stair placed this run
    pub track: Track,
    pub player: Player,
    pub camera: Camera,
    pub tempo: TempoTracker,
    /// Current music playback rate
    pub playback_rate: f32,
    rng: Pcg32,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed and default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new game state with custom balance
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let track = generate_initial_track(&tuning, &mut rng);
        let player = Player::on_stair(track.origin());

        log::info!("New run: seed {}, {} stairs", seed, track.len());

        Self {
            seed,
            tuning,
            phase: GamePhase::Playing,
            score: 0,
            game_time: 0.0,
            track,
            player,
            camera: Camera::default(),
            tempo: TempoTracker::new(),
            playback_rate: START_PLAYBACK_RATE,
            rng,
            events: Vec::new(),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Difficulty level for the current score
    pub fn difficulty_level(&self) -> u32 {
        self.tuning.level_for_score(self.score)
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            score: self.score,
            max_bpm: self.tempo.max_bpm(),
            time_secs: self.game_time,
        }
    }

    /// Take all pending events, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Start a fresh run. The RNG stream continues, so the new track differs.
    pub fn restart(&mut self) {
        self.track = generate_initial_track(&self.tuning, &mut self.rng);
        self.player = Player::on_stair(self.track.origin());
        self.camera = Camera::default();
        self.tempo.reset();
        self.playback_rate = START_PLAYBACK_RATE;
        self.score = 0;
        self.game_time = 0.0;
        self.events.clear();
        self.phase = GamePhase::Playing;

        log::info!("Restarted: {} stairs", self.track.len());
    }

    /// Append stairs above the current top at the current score's difficulty
    pub(crate) fn extend_track(&mut self) -> usize {
        extend_track(&mut self.track, self.score, &self.tuning, &mut self.rng)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
