//! Player domain: input handling, state derivation and hit reaction.

use bevy::prelude::*;

use crate::core::PlayerSession;
use crate::player::{Facing, MovementState, PhysicalBody, PlayerController, PlayerInput, PlayerTuning};

impl PlayerController {
    pub fn state(&self) -> MovementState {
        self.state
    }

    /// Seconds spent in the current state; restarts at zero on every change.
    pub fn state_time(&self) -> f32 {
        self.state_timer
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Body position as of the last [`PlayerController::update`].
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn is_hit(&self) -> bool {
        self.hit
    }

    pub fn launch_y(&self) -> Option<f32> {
        self.launch_y
    }

    /// Applies horizontal and jump impulses for this frame.
    ///
    /// `on_ground` comes from the collision router's contact counter.
    pub fn handle_input(
        &mut self,
        input: &PlayerInput,
        on_ground: bool,
        tuning: &PlayerTuning,
        body: &mut impl PhysicalBody,
    ) {
        let max_speed = tuning.max_speed;

        // Knockback owns horizontal motion until the hit reaction ends
        if !self.hit {
            let target_vx = if input.left {
                -max_speed
            } else if input.right {
                max_speed
            } else {
                0.0
            };
            let impulse_x = (target_vx - body.linear_velocity().x) * body.mass();
            if impulse_x != 0.0 {
                body.apply_linear_impulse(Vec2::new(impulse_x, 0.0));
            }
        }

        let velocity = body.linear_velocity();
        body.set_linear_velocity(Vec2::new(
            velocity.x.clamp(-max_speed, max_speed),
            velocity.y,
        ));

        if self.jump_in_progress && on_ground && body.linear_velocity().y <= 0.0 {
            self.jump_in_progress = false;
            self.launch_y = None;
        }

        if input.up && on_ground && !self.jump_in_progress {
            let launch_y = body.position().y;
            body.apply_linear_impulse(Vec2::new(0.0, tuning.jump_impulse));
            self.launch_y = Some(launch_y);
            self.jump_in_progress = true;
            debug!("Jump launched from y={:.1}", launch_y);
        }
    }

    /// Per-frame bookkeeping after the physics step.
    pub fn update(&mut self, delta_secs: f32, tuning: &PlayerTuning, body: &mut impl PhysicalBody) {
        self.position = body.position();
        let velocity = body.linear_velocity();

        self.enter_state(MovementState::derive(velocity, self.hit), delta_secs);

        if let Some(launch_y) = self.launch_y
            && self.position.y >= launch_y + tuning.jump_limit
            && velocity.y > 0.0
        {
            body.set_linear_velocity(Vec2::new(velocity.x, 0.0));
        }

        if velocity.x > 0.0 {
            self.facing = Facing::Right;
        } else if velocity.x < 0.0 {
            self.facing = Facing::Left;
        }

        if self.hit {
            self.hit_timer += delta_secs;
            if self.hit_timer >= tuning.hit_duration {
                self.hit = false;
                self.hit_timer = 0.0;
                debug!("Hit reaction finished");
            }
        }
    }

    /// Reacts to a hazard contact: loses a life and knocks the body away.
    ///
    /// Returns `false` without side effects while a previous hit reaction is
    /// still running.
    pub fn hit_by_hazard(
        &mut self,
        session: &mut PlayerSession,
        hazard_position: Vec2,
        tuning: &PlayerTuning,
        body: &mut impl PhysicalBody,
    ) -> bool {
        if self.hit {
            debug!("Hazard contact ignored during hit reaction");
            return false;
        }

        self.hit = true;
        self.hit_timer = 0.0;
        self.state = MovementState::Hit;
        self.state_timer = 0.0;

        let remaining = session.lose_life();

        let away = match body.position().x - hazard_position.x {
            dx if dx > 0.0 => 1.0,
            dx if dx < 0.0 => -1.0,
            _ => -self.facing.sign(),
        };
        let knockback = tuning.knockback();
        body.apply_linear_impulse(Vec2::new(away * knockback.x, knockback.y));

        info!("Player hit by hazard, {} lives left", remaining);
        true
    }

    /// Teleports the body and drops any motion, used for respawns.
    pub fn reset_position(&mut self, position: Vec2, body: &mut impl PhysicalBody) {
        body.set_position(position);
        body.set_linear_velocity(Vec2::ZERO);
        self.position = position;
        self.launch_y = None;
        self.jump_in_progress = false;
    }

    fn enter_state(&mut self, state: MovementState, delta_secs: f32) {
        if state == self.state {
            self.state_timer += delta_secs;
        } else {
            debug!("Player state {:?} -> {:?}", self.state, state);
            self.state = state;
            self.state_timer = 0.0;
        }
    }
}
