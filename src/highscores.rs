//! Local leaderboard
//!
//! Top runs by score, persisted to LocalStorage on the web.

use serde::{Deserialize, Serialize};

use crate::sim::RunSummary;

/// Maximum number of runs to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// One finished run on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u32,
    /// Fastest climbing tempo reached during the run
    pub max_bpm: u32,
    /// Unix timestamp (ms) when achieved
    pub timestamp: f64,
}

/// Leaderboard, sorted by score descending
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "infinite_stairs_highscores";

    pub fn new() -> Self {
        Self::default()
    }

    /// Rank (1-indexed) a score would take, or None if it doesn't make the board.
    /// Equal scores rank below existing ones.
    pub fn potential_rank(&self, score: u32) -> Option<usize> {
        if score == 0 {
            return None;
        }
        let rank = self
            .entries
            .iter()
            .position(|e| score > e.score)
            .unwrap_or(self.entries.len());
        (rank < MAX_HIGH_SCORES).then_some(rank + 1)
    }

    pub fn qualifies(&self, score: u32) -> bool {
        self.potential_rank(score).is_some()
    }

    /// Record a finished run. Returns its rank if it made the board.
    pub fn record(&mut self, run: &RunSummary, timestamp: f64) -> Option<usize> {
        let rank = self.potential_rank(run.score)?;
        self.entries.insert(
            rank - 1,
            HighScoreEntry {
                score: run.score,
                max_bpm: run.max_bpm,
                timestamp,
            },
        );
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    /// Fastest tempo across all recorded runs
    pub fn best_bpm(&self) -> Option<u32> {
        self.entries.iter().map(|e| e.max_bpm).max()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load high scores from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str::<HighScores>(&json) {
                    Ok(scores) => {
                        log::info!("Loaded {} high scores", scores.entries.len());
                        return scores;
                    }
                    Err(err) => log::warn!("Discarding unreadable high scores: {}", err),
                }
            }
        }

        log::info!("No high scores found, starting fresh");
        Self::new()
    }

    /// Save high scores to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("High scores saved ({} entries)", self.entries.len());
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
