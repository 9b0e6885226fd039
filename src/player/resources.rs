//! Player domain: tuning and input resources.

use bevy::prelude::*;
use serde::Deserialize;

#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Horizontal speed cap in both directions
    pub max_speed: f32,
    pub jump_impulse: f32,
    /// Height above the launch point at which upward velocity is cut
    pub jump_limit: f32,
    pub knockback_x: f32,
    pub knockback_y: f32,
    /// Seconds the hit reaction lasts
    pub hit_duration: f32,
    pub starting_lives: u32,
    /// Downward acceleration fed to the physics world
    pub gravity: f32,
    pub mass: f32,
    pub friction: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            max_speed: 200.0,
            jump_impulse: 640.0,
            jump_limit: 110.0,
            knockback_x: 240.0,
            knockback_y: 160.0,
            hit_duration: 0.6, // four frames at 0.15s
            starting_lives: 3,
            gravity: 1400.0,
            mass: 1.0,
            friction: 1.0,
        }
    }
}

impl PlayerTuning {
    pub fn knockback(&self) -> Vec2 {
        Vec2::new(self.knockback_x, self.knockback_y)
    }
}

/// Per-frame directional snapshot.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
}
