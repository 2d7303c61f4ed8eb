//! Player character and following camera

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::stair::{Facing, Stair};
use crate::consts::*;

/// Which sprite animation the host should play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Animation {
    #[default]
    Idle,
    Walk,
}

/// The climber
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Feet position: center-x and top of the stair stood on
    pub feet: Vec2,
    pub facing: Facing,
    pub animation: Animation,
    /// Seconds left in the walk animation
    walk_timer: f32,
}

impl Player {
    /// Player standing idle on `stair`, facing right
    pub fn on_stair(stair: &Stair) -> Self {
        Self {
            feet: Vec2::new(stair.center_x(), stair.y),
            facing: Facing::Right,
            animation: Animation::Idle,
            walk_timer: 0.0,
        }
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.feet.x
    }

    /// Top-left corner of the sprite box
    pub fn sprite_origin(&self) -> Vec2 {
        Vec2::new(self.feet.x - PLAYER_WIDTH / 2.0, self.feet.y - PLAYER_HEIGHT)
    }

    /// Move onto `stair` and start the walk animation
    pub fn land_on(&mut self, stair: &Stair) {
        self.feet = Vec2::new(stair.center_x(), stair.y);
        self.animation = Animation::Walk;
        self.walk_timer = WALK_DURATION;
    }

    pub fn turn(&mut self) {
        self.facing = self.facing.flipped();
    }

    /// Advance the walk timer; falls back to idle when it runs out
    pub fn update(&mut self, dt: f32) {
        if self.animation == Animation::Walk {
            self.walk_timer -= dt;
            if self.walk_timer <= 0.0 {
                self.walk_timer = 0.0;
                self.animation = Animation::Idle;
            }
        }
    }
}

/// Vertical camera that eases toward a target
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Camera {
    pub y: f32,
    pub target_y: f32,
}

impl Camera {
    /// Aim the camera `CAMERA_LEAD` above the player's sprite
    pub fn follow(&mut self, player: &Player) {
        self.target_y = player.sprite_origin().y - CAMERA_LEAD;
    }

    /// Ease toward the target, closing `CAMERA_SMOOTHING` of the gap per 60 Hz frame
    pub fn update(&mut self, dt: f32) {
        let frames = dt / REFERENCE_DT;
        let blend = 1.0 - (1.0 - CAMERA_SMOOTHING).powf(frames);
        self.y += (self.target_y - self.y) * blend;
    }

    /// Jump straight to the target (reduced motion)
    pub fn snap(&mut self) {
        self.y = self.target_y;
    }
}
