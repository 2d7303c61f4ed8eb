//! Idle/demo mode: the game plays itself

use super::resolver::find_next_stair;
use super::state::GameState;

/// What the autopilot wants to do this step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoAction {
    Climb,
    ChangeDirection,
}

/// Climb if the current facing reaches a stair, otherwise turn if that
/// helps. With nothing in reach either way it climbs (and falls).
pub fn choose_action(state: &GameState) -> AutoAction {
    let player = &state.player;
    let reaches = |facing| {
        find_next_stair(
            player.center_x(),
            player.feet.y,
            facing,
            state.track.stairs(),
            &state.tuning,
        )
        .is_some()
    };

    if reaches(player.facing) {
        AutoAction::Climb
    } else if reaches(player.facing.flipped()) {
        AutoAction::ChangeDirection
    } else {
        AutoAction::Climb
    }
}
