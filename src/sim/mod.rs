//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only, passed in explicitly
//! - Track is append-only, iterated in insertion order
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod difficulty;
pub mod generator;
pub mod player;
pub mod resolver;
pub mod stair;
pub mod state;
pub mod tempo;
pub mod tick;
pub mod track;

pub use autopilot::{AutoAction, choose_action};
pub use difficulty::{ChainBucket, chain_length, difficulty_level};
pub use generator::{extend_track, generate_initial_track};
pub use player::{Animation, Camera, Player};
pub use resolver::find_next_stair;
pub use stair::{Facing, Stair};
pub use state::{GameEvent, GamePhase, GameState, RunSummary};
pub use tempo::{TempoTracker, playback_rate_for_bpm};
pub use tick::{ClimbOutcome, TickInput, advance, change_direction, climb, tick};
pub use track::Track;
