//! Player actions and per-frame updates
//!
//! Climbs are discrete, host-triggered actions. `tick` bundles them with the
//! frame update so a host can drive everything from one call.

use super::autopilot::{AutoAction, choose_action};
use super::resolver::find_next_stair;
use super::stair::Stair;
use super::state::{GameEvent, GamePhase, GameState};

/// Result of a climb attempt
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClimbOutcome {
    /// Landed on the stair
    Landed(Stair),
    /// No stair in reach: the run is over
    Fell,
    /// The run had already ended
    Ignored,
}

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Climb in the current facing (click/space/tap)
    pub climb: bool,
    /// Turn around, then climb (arrow keys/swipe)
    pub change_direction: bool,
    /// Let the autopilot decide (idle/demo mode)
    pub autopilot: bool,
}

/// Attempt one climb at wall-clock time `now_ms`
pub fn climb(state: &mut GameState, now_ms: f64) -> ClimbOutcome {
    if !state.is_playing() {
        return ClimbOutcome::Ignored;
    }

    // Misses count toward tempo too
    state.tempo.record_step(now_ms);

    let player = &state.player;
    let Some(stair) = find_next_stair(
        player.center_x(),
        player.feet.y,
        player.facing,
        state.track.stairs(),
        &state.tuning,
    ) else {
        game_over(state);
        return ClimbOutcome::Fell;
    };

    state.player.land_on(&stair);
    state.camera.follow(&state.player);
    state.score += 1;
    log::debug!("Climb {} -> ({}, {})", state.score, stair.x, stair.y);
    state.push_event(GameEvent::Climbed {
        score: state.score,
        stair,
    });

    if state.score % state.tuning.extend_every.max(1) == 0 {
        let added = state.extend_track();
        log::info!(
            "Track extended by {} stairs at score {} (level {})",
            added,
            state.score,
            state.difficulty_level()
        );
        state.push_event(GameEvent::TrackExtended {
            added,
            total: state.track.len(),
        });
    }

    state.playback_rate = state.tempo.playback_rate();
    state.push_event(GameEvent::TempoChanged {
        bpm: state.tempo.current_bpm(),
        playback_rate: state.playback_rate,
    });

    ClimbOutcome::Landed(stair)
}

/// Turn around, then climb
pub fn change_direction(state: &mut GameState, now_ms: f64) -> ClimbOutcome {
    if !state.is_playing() {
        return ClimbOutcome::Ignored;
    }
    state.player.turn();
    climb(state, now_ms)
}

/// Apply this frame's input, then advance timers and the camera by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, now_ms: f64) -> Option<ClimbOutcome> {
    let outcome = if input.autopilot && state.is_playing() {
        match choose_action(state) {
            AutoAction::Climb => Some(climb(state, now_ms)),
            AutoAction::ChangeDirection => Some(change_direction(state, now_ms)),
        }
    } else if input.change_direction {
        Some(change_direction(state, now_ms))
    } else if input.climb {
        Some(climb(state, now_ms))
    } else {
        None
    };

    advance(state, dt);
    outcome
}

/// Per-frame update: game clock, animation timer, camera easing
pub fn advance(state: &mut GameState, dt: f32) {
    if state.is_playing() {
        state.game_time += dt;
    }
    state.player.update(dt);
    state.camera.update(dt);
}

fn game_over(state: &mut GameState) {
    state.phase = GamePhase::GameOver;
    let summary = state.summary();
    log::info!(
        "Game over: score {}, max BPM {}, {:.0}s",
        summary.score,
        summary.max_bpm,
        summary.time_secs
    );
    state.push_event(GameEvent::GameOver(summary));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{ORIGIN_Y, STAIR_SPACING};
    use crate::sim::player::Animation;
    use crate::sim::stair::Facing;

    /// Facing that reaches the next stair from where the player stands
    fn reachable_facing(state: &GameState) -> Option<Facing> {
        [state.player.facing, state.player.facing.flipped()]
            .into_iter()
            .find(|&facing| {
                find_next_stair(
                    state.player.center_x(),
                    state.player.feet.y,
                    facing,
                    state.track.stairs(),
                    &state.tuning,
                )
                .is_some()
            })
    }

    #[test]
    fn test_first_climb_lands_one_step_up() {
        let mut state = GameState::new(12345);
        let expected = state.track.stairs()[1];

        let outcome = climb(&mut state, 0.0);

        assert_eq!(outcome, ClimbOutcome::Landed(expected));
        assert_eq!(state.score, 1);
        assert_eq!(state.player.feet.y, ORIGIN_Y - STAIR_SPACING);
        assert_eq!(state.player.animation, Animation::Walk);
        assert_eq!(state.camera.target_y, state.player.sprite_origin().y - 300.0);

        let events = state.drain_events();
        assert!(matches!(events[0], GameEvent::Climbed { score: 1, .. }));
        assert!(matches!(events[1], GameEvent::TempoChanged { bpm: 0, .. }));
    }

    #[test]
    fn test_wrong_way_ends_run() {
        let mut state = GameState::new(12345);
        // Far off to the side, nothing is in reach either way
        state.player.feet.x = -10_000.0;

        assert_eq!(climb(&mut state, 0.0), ClimbOutcome::Fell);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.score, 0);

        let events = state.drain_events();
        assert!(matches!(events.last(), Some(GameEvent::GameOver(s)) if s.score == 0));

        // Further input is ignored
        assert_eq!(climb(&mut state, 10.0), ClimbOutcome::Ignored);
        assert_eq!(change_direction(&mut state, 20.0), ClimbOutcome::Ignored);
    }

    #[test]
    fn test_extends_every_tenth_climb() {
        let mut state = GameState::new(2024);
        let start_len = state.track.len();

        for i in 0..10 {
            let now = i as f64 * 300.0;
            let outcome = match reachable_facing(&state) {
                Some(f) if f == state.player.facing => climb(&mut state, now),
                Some(_) => change_direction(&mut state, now),
                None => panic!("no reachable stair at climb {}", i),
            };
            assert!(matches!(outcome, ClimbOutcome::Landed(_)));
        }

        assert_eq!(state.score, 10);
        assert!(state.track.len() >= start_len + 6);
        let extended = state
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::TrackExtended { .. }))
            .count();
        assert_eq!(extended, 1);
    }

    #[test]
    fn test_tempo_drives_playback_rate() {
        let mut state = GameState::new(31337);
        for i in 0..5 {
            let now = i as f64 * 250.0;
            match reachable_facing(&state) {
                Some(f) if f == state.player.facing => climb(&mut state, now),
                _ => change_direction(&mut state, now),
            };
        }
        assert_eq!(state.tempo.current_bpm(), 5);
        assert_eq!(state.playback_rate, 60.0 / 176.0);
        assert_eq!(state.summary().max_bpm, 5);
    }

    #[test]
    fn test_tick_advances_clock_only_while_playing() {
        let mut state = GameState::new(5);
        tick(&mut state, &TickInput::default(), 0.5, 0.0);
        assert!((state.game_time - 0.5).abs() < 1e-6);

        state.phase = GamePhase::GameOver;
        tick(&mut state, &TickInput::default(), 0.5, 500.0);
        assert!((state.game_time - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_tick_applies_input() {
        let mut state = GameState::new(12345);
        let input = TickInput {
            climb: true,
            ..Default::default()
        };
        let outcome = tick(&mut state, &input, 1.0 / 60.0, 0.0);
        assert!(matches!(outcome, Some(ClimbOutcome::Landed(_))));
        assert_eq!(tick(&mut state, &TickInput::default(), 1.0 / 60.0, 16.0), None);
    }

    #[test]
    fn test_autopilot_climbs_long_run() {
        let mut state = GameState::new(99);
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        for i in 0..250 {
            tick(&mut state, &input, 1.0 / 60.0, i as f64 * 200.0);
        }
        assert!(state.is_playing());
        assert_eq!(state.score, 250);
        assert!(state.difficulty_level() >= 5);
    }

    #[test]
    fn test_determinism() {
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        let mut state1 = GameState::new(4242);
        let mut state2 = GameState::new(4242);
        for i in 0..40 {
            tick(&mut state1, &input, 1.0 / 60.0, i as f64 * 100.0);
            tick(&mut state2, &input, 1.0 / 60.0, i as f64 * 100.0);
        }
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.track, state2.track);
        assert_eq!(state1.player.feet, state2.player.feet);
    }
}
