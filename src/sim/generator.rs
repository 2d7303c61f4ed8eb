//! Stair track generation
//!
//! Tracks are laid out as zig-zag chains: walk a few stairs in one direction,
//! flip, walk a few more. Chain lengths come from the difficulty tiers, so
//! the staircase turns more often as the score climbs.

use rand::Rng;

use super::difficulty::chain_length;
use super::stair::{Facing, Stair};
use super::track::Track;
use crate::consts::{ORIGIN_X, ORIGIN_Y};
use crate::tuning::Tuning;

/// Build the track for a fresh run: the origin stair plus
/// `tuning.initial_chains` chains, starting rightwards.
pub fn generate_initial_track<R: Rng>(tuning: &Tuning, rng: &mut R) -> Track {
    let origin = Stair::new(ORIGIN_X, ORIGIN_Y);
    let mut track = Track::starting_at(origin);
    let added = lay_chains(
        &mut track,
        origin,
        Facing::Right,
        tuning.initial_chains,
        0,
        tuning,
        rng,
    );
    log::debug!("Initial track: {} stairs", added + 1);
    track
}

/// Append `tuning.extension_chains` chains above the current top stair,
/// starting in a random direction. Returns the number of stairs appended.
pub fn extend_track<R: Rng>(track: &mut Track, score: u32, tuning: &Tuning, rng: &mut R) -> usize {
    let anchor = *track.top();
    let facing = if rng.random_bool(0.5) {
        Facing::Right
    } else {
        Facing::Left
    };
    lay_chains(
        track,
        anchor,
        facing,
        tuning.extension_chains,
        score,
        tuning,
        rng,
    )
}

fn lay_chains<R: Rng>(
    track: &mut Track,
    anchor: Stair,
    mut facing: Facing,
    chains: u32,
    score: u32,
    tuning: &Tuning,
    rng: &mut R,
) -> usize {
    let mut cursor = anchor;
    let mut added = 0;
    for _ in 0..chains {
        let len = chain_length(score, tuning, rng);
        for _ in 0..len {
            cursor = cursor.step(facing);
            track.push(cursor);
            added += 1;
        }
        facing = facing.flipped();
    }
    added
}
