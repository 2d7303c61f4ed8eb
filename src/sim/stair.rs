//! Stair platforms and horizontal facing

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Horizontal direction the player faces, or a chain walks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// -1.0 for left, +1.0 for right
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }
}

/// A single stair platform (axis-aligned box, top-left anchored)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stair {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Stair {
    /// Stair of the standard size at (x, y)
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            width: STAIR_WIDTH,
            height: STAIR_HEIGHT,
        }
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// The stair one step further along a chain walking in `facing`
    pub fn step(&self, facing: Facing) -> Self {
        Self::new(self.x + facing.sign() * STAIR_STEP_X, self.y - STAIR_SPACING)
    }
}
