//! Append-only stair track

use serde::Serialize;

use super::stair::Stair;

/// Ordered sequence of stairs, in insertion order.
///
/// A track always holds at least its origin stair, and entries are never
/// removed or reordered once pushed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Track {
    stairs: Vec<Stair>,
}

impl Track {
    /// New track containing only `origin`
    pub fn starting_at(origin: Stair) -> Self {
        Self {
            stairs: vec![origin],
        }
    }

    pub fn stairs(&self) -> &[Stair] {
        &self.stairs
    }

    pub fn len(&self) -> usize {
        self.stairs.len()
    }

    /// Never true: a track always holds its origin
    pub fn is_empty(&self) -> bool {
        self.stairs.is_empty()
    }

    /// The first stair ever placed
    pub fn origin(&self) -> &Stair {
        &self.stairs[0]
    }

    /// Highest stair (minimum y). The earliest one wins a tie.
    pub fn top(&self) -> &Stair {
        self.stairs
            .iter()
            .fold(&self.stairs[0], |top, stair| if stair.y < top.y { stair } else { top })
    }

    pub(crate) fn push(&mut self, stair: Stair) {
        self.stairs.push(stair);
    }
}
