//! Climbing tempo (steps per minute) and the music rate it drives

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::consts::{MIN_MUSIC_BPM, MUSIC_BPM, TEMPO_WINDOW_MS};

/// Music playback rate for a climbing tempo.
///
/// The track is authored at `MUSIC_BPM`; tempos below `MIN_MUSIC_BPM` are
/// clamped so the music never crawls.
pub fn playback_rate_for_bpm(bpm: u32) -> f32 {
    bpm.max(MIN_MUSIC_BPM) as f32 / MUSIC_BPM
}

/// Sliding one-minute window of step timestamps
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TempoTracker {
    /// Step timestamps in ms, oldest first
    steps: VecDeque<f64>,
    current_bpm: u32,
    max_bpm: u32,
}

impl TempoTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a step at `now_ms` and return the current BPM.
    ///
    /// The BPM only updates once the window holds more than one step; a lone
    /// step after a long pause keeps the previous reading.
    pub fn record_step(&mut self, now_ms: f64) -> u32 {
        self.steps.push_back(now_ms);

        let cutoff = now_ms - TEMPO_WINDOW_MS;
        // The host clock can step backwards, so stale steps may sit anywhere
        self.steps.retain(|&t| t > cutoff);

        if self.steps.len() > 1 {
            self.current_bpm = self.steps.len() as u32;
            self.max_bpm = self.max_bpm.max(self.current_bpm);
        }
        self.current_bpm
    }

    pub fn current_bpm(&self) -> u32 {
        self.current_bpm
    }

    pub fn max_bpm(&self) -> u32 {
        self.max_bpm
    }

    pub fn playback_rate(&self) -> f32 {
        playback_rate_for_bpm(self.current_bpm)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_step_has_no_tempo() {
        let mut tempo = TempoTracker::new();
        assert_eq!(tempo.record_step(1_000.0), 0);
        assert_eq!(tempo.max_bpm(), 0);
    }

    #[test]
    fn test_counts_steps_in_window() {
        let mut tempo = TempoTracker::new();
        for i in 0..30 {
            tempo.record_step(i as f64 * 500.0);
        }
        assert_eq!(tempo.current_bpm(), 30);
        assert_eq!(tempo.max_bpm(), 30);
    }

    #[test]
    fn test_old_steps_expire() {
        let mut tempo = TempoTracker::new();
        for i in 0..10 {
            tempo.record_step(i as f64 * 1_000.0);
        }
        assert_eq!(tempo.current_bpm(), 10);

        // At 69s, steps at or before 9s have dropped: 9_000 only just expires
        tempo.record_step(68_000.0);
        tempo.record_step(69_000.0);
        assert_eq!(tempo.current_bpm(), 2);
        assert_eq!(tempo.max_bpm(), 10);
    }

    #[test]
    fn test_backwards_clock_step_expires() {
        let mut tempo = TempoTracker::new();
        tempo.record_step(100_000.0);
        tempo.record_step(10_000.0);
        assert_eq!(tempo.current_bpm(), 2);

        // 10_000 is out of the window ending at 100_500 even though it is not oldest
        assert_eq!(tempo.record_step(100_500.0), 2);
    }

    #[test]
    fn test_lone_step_keeps_previous_reading() {
        let mut tempo = TempoTracker::new();
        tempo.record_step(0.0);
        tempo.record_step(500.0);
        tempo.record_step(1_000.0);
        assert_eq!(tempo.current_bpm(), 3);

        // Long pause: only the new step remains in the window
        assert_eq!(tempo.record_step(200_000.0), 3);
    }

    #[test]
    fn test_playback_rate() {
        assert_eq!(playback_rate_for_bpm(0), 60.0 / 176.0);
        assert_eq!(playback_rate_for_bpm(60), 60.0 / 176.0);
        assert_eq!(playback_rate_for_bpm(176), 1.0);
        assert_eq!(playback_rate_for_bpm(352), 2.0);

        let mut tempo = TempoTracker::new();
        assert_eq!(tempo.playback_rate(), 60.0 / 176.0);
        tempo.record_step(0.0);
        tempo.record_step(1.0);
        tempo.reset();
        assert_eq!(tempo.current_bpm(), 0);
    }
}
