//! Next-stair resolution
//!
//! A climb aims one step ahead in the facing direction. Any stair above the
//! player that lands within the reach window of that aim point is a match;
//! the closest one (Manhattan distance) wins.

use super::stair::{Facing, Stair};
use crate::consts::{STAIR_HEIGHT, STAIR_SPACING, STAIR_STEP_X};
use crate::tuning::Tuning;

/// Find the stair a climb from (`player_center_x`, `player_y`) lands on.
///
/// Returns `None` when no stair is within reach, which ends the run.
/// Ties keep the earliest stair in track order.
pub fn find_next_stair(
    player_center_x: f32,
    player_y: f32,
    facing: Facing,
    stairs: &[Stair],
    tuning: &Tuning,
) -> Option<Stair> {
    let expected_x = player_center_x + facing.sign() * STAIR_STEP_X;
    let expected_y = player_y - STAIR_SPACING;

    let mut best: Option<(Stair, f32)> = None;
    for stair in stairs {
        if stair.y >= player_y - STAIR_HEIGHT {
            continue;
        }

        let x_distance = (stair.center_x() - expected_x).abs();
        let y_distance = (stair.y - expected_y).abs();
        if x_distance >= tuning.reach_x || y_distance >= tuning.reach_y {
            continue;
        }

        let total = x_distance + y_distance;
        if best.is_none_or(|(_, min)| total < min) {
            best = Some((*stair, total));
        }
    }

    best.map(|(stair, _)| stair)
}
