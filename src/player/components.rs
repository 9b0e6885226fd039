//! Player domain: components and the movement state they render from.

use bevy::prelude::*;

#[derive(Component, Debug)]
pub struct Player;

/// Renderable movement mode, recomputed from the body every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MovementState {
    #[default]
    Idle,
    Move,
    Jump,
    Hit,
}

impl MovementState {
    /// Priority is Jump > Move > Hit > Idle, so a hazard hit taken mid-air keeps
    /// the jump pose until the body stops rising.
    pub fn derive(velocity: Vec2, hit: bool) -> Self {
        if velocity.y > 0.0 {
            MovementState::Jump
        } else if velocity.x != 0.0 {
            MovementState::Move
        } else if hit {
            MovementState::Hit
        } else {
            MovementState::Idle
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// Drives the player body from input and contact feedback.
///
/// The body itself lives on the same entity as avian components and is
/// reached through [`crate::player::PhysicalBody`]; the controller only keeps
/// the bookkeeping the physics engine does not.
#[derive(Component, Debug, Default)]
pub struct PlayerController {
    pub(crate) state: MovementState,
    pub(crate) state_timer: f32,
    pub(crate) facing: Facing,
    pub(crate) position: Vec2,
    pub(crate) launch_y: Option<f32>,
    pub(crate) jump_in_progress: bool,
    pub(crate) hit: bool,
    pub(crate) hit_timer: f32,
}
