//! Player domain: the seam between the controller and the physics body.

use avian2d::prelude::*;
use bevy::prelude::*;

/// The parts of a rigid body the controller is allowed to touch.
///
/// The physics engine owns the body; the controller only reads it and issues
/// impulses or resets through this trait.
pub trait PhysicalBody {
    fn position(&self) -> Vec2;
    fn linear_velocity(&self) -> Vec2;
    fn mass(&self) -> f32;
    fn set_linear_velocity(&mut self, velocity: Vec2);
    fn set_position(&mut self, position: Vec2);

    /// Instant change of momentum at the center of mass.
    fn apply_linear_impulse(&mut self, impulse: Vec2) {
        let mass = self.mass();
        if mass <= 0.0 {
            return;
        }
        let velocity = self.linear_velocity() + impulse / mass;
        self.set_linear_velocity(velocity);
    }
}

/// Borrowed view over the avian components of the player entity.
pub struct AvianBody<'a> {
    position: &'a mut Position,
    velocity: &'a mut LinearVelocity,
    mass: f32,
}

impl<'a> AvianBody<'a> {
    pub fn new(position: &'a mut Position, velocity: &'a mut LinearVelocity, mass: &Mass) -> Self {
        Self {
            position,
            velocity,
            mass: mass.0,
        }
    }
}

impl PhysicalBody for AvianBody<'_> {
    fn position(&self) -> Vec2 {
        self.position.0
    }

    fn linear_velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn mass(&self) -> f32 {
        self.mass
    }

    fn set_linear_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }

    fn set_position(&mut self, position: Vec2) {
        self.position.0 = position;
    }
}
