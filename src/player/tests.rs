//! Player domain: tests for the controller against a recording body.

use bevy::math::Vec2;

use super::{Facing, MovementState, PhysicalBody, PlayerController, PlayerInput, PlayerTuning};
use super::systems::movement::{BODY_COLOR, body_tint};
use crate::core::PlayerSession;

/// Body double that records every impulse it receives.
#[derive(Debug)]
struct TestBody {
    position: Vec2,
    velocity: Vec2,
    mass: f32,
    impulses: Vec<Vec2>,
}

impl TestBody {
    fn at(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            mass: 1.0,
            impulses: Vec::new(),
        }
    }

    fn upward_impulses(&self) -> usize {
        self.impulses.iter().filter(|i| i.y > 0.0).count()
    }
}

impl PhysicalBody for TestBody {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn linear_velocity(&self) -> Vec2 {
        self.velocity
    }

    fn mass(&self) -> f32 {
        self.mass
    }

    fn set_linear_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn apply_linear_impulse(&mut self, impulse: Vec2) {
        self.impulses.push(impulse);
        self.velocity += impulse / self.mass;
    }
}

const UP: PlayerInput = PlayerInput {
    left: false,
    right: false,
    up: true,
};
const RIGHT: PlayerInput = PlayerInput {
    left: false,
    right: true,
    up: false,
};
const LEFT: PlayerInput = PlayerInput {
    left: true,
    right: false,
    up: false,
};
const NONE: PlayerInput = PlayerInput {
    left: false,
    right: false,
    up: false,
};

// -----------------------------------------------------------------------------
// MovementState derivation
// -----------------------------------------------------------------------------

#[test]
fn test_state_priority() {
    assert_eq!(MovementState::derive(Vec2::new(0.0, 5.0), false), MovementState::Jump);
    assert_eq!(MovementState::derive(Vec2::new(2.0, 0.0), false), MovementState::Move);
    assert_eq!(MovementState::derive(Vec2::ZERO, false), MovementState::Idle);
    assert_eq!(MovementState::derive(Vec2::ZERO, true), MovementState::Hit);
    // Rising or moving outranks the hit pose
    assert_eq!(MovementState::derive(Vec2::new(0.0, 5.0), true), MovementState::Jump);
    assert_eq!(MovementState::derive(Vec2::new(-2.0, 0.0), true), MovementState::Move);
    // Falling straight down is not a jump
    assert_eq!(MovementState::derive(Vec2::new(0.0, -5.0), false), MovementState::Idle);
}

#[test]
fn test_update_derives_state_from_body() {
    let tuning = PlayerTuning::default();
    let mut controller = PlayerController::default();
    let mut body = TestBody::at(Vec2::ZERO);

    body.velocity = Vec2::new(0.0, 5.0);
    controller.update(0.016, &tuning, &mut body);
    assert_eq!(controller.state(), MovementState::Jump);

    body.velocity = Vec2::new(2.0, 0.0);
    controller.update(0.016, &tuning, &mut body);
    assert_eq!(controller.state(), MovementState::Move);

    body.velocity = Vec2::ZERO;
    controller.update(0.016, &tuning, &mut body);
    assert_eq!(controller.state(), MovementState::Idle);
}

#[test]
fn test_state_timer_accumulates_and_resets() {
    let tuning = PlayerTuning::default();
    let mut controller = PlayerController::default();
    let mut body = TestBody::at(Vec2::ZERO);

    controller.update(0.25, &tuning, &mut body);
    controller.update(0.25, &tuning, &mut body);
    assert_eq!(controller.state(), MovementState::Idle);
    assert_eq!(controller.state_time(), 0.5);

    body.velocity = Vec2::new(1.0, 0.0);
    controller.update(0.25, &tuning, &mut body);
    assert_eq!(controller.state(), MovementState::Move);
    assert_eq!(controller.state_time(), 0.0);
}

// -----------------------------------------------------------------------------
// Jumping
// -----------------------------------------------------------------------------

#[test]
fn test_single_jump_from_ground() {
    let tuning = PlayerTuning::default();
    let mut controller = PlayerController::default();
    let mut body = TestBody::at(Vec2::new(0.0, 40.0));

    controller.handle_input(&UP, true, &tuning, &mut body);
    assert_eq!(body.upward_impulses(), 1);
    assert_eq!(body.velocity.y, tuning.jump_impulse / body.mass);
    assert_eq!(controller.launch_y(), Some(40.0));

    // Airborne next frame, still holding up
    controller.handle_input(&UP, false, &tuning, &mut body);
    assert_eq!(body.upward_impulses(), 1);
}

#[test]
fn test_no_rejump_while_platform_contact_lingers() {
    let tuning = PlayerTuning::default();
    let mut controller = PlayerController::default();
    let mut body = TestBody::at(Vec2::ZERO);

    controller.handle_input(&UP, true, &tuning, &mut body);
    // Contact end has not arrived yet, body is already rising
    controller.handle_input(&UP, true, &tuning, &mut body);
    assert_eq!(body.upward_impulses(), 1);
}

#[test]
fn test_jump_again_after_landing() {
    let tuning = PlayerTuning::default();
    let mut controller = PlayerController::default();
    let mut body = TestBody::at(Vec2::ZERO);

    controller.handle_input(&UP, true, &tuning, &mut body);
    controller.handle_input(&NONE, false, &tuning, &mut body);

    // Landed
    body.velocity = Vec2::ZERO;
    controller.handle_input(&UP, true, &tuning, &mut body);
    assert_eq!(body.upward_impulses(), 2);
}

#[test]
fn test_no_jump_when_airborne() {
    let tuning = PlayerTuning::default();
    let mut controller = PlayerController::default();
    let mut body = TestBody::at(Vec2::ZERO);

    controller.handle_input(&UP, false, &tuning, &mut body);
    assert_eq!(body.upward_impulses(), 0);
    assert_eq!(controller.launch_y(), None);
}

#[test]
fn test_jump_ceiling_cuts_upward_velocity() {
    let tuning = PlayerTuning::default();
    let mut controller = PlayerController::default();
    let mut body = TestBody::at(Vec2::new(0.0, 100.0));

    controller.handle_input(&UP, true, &tuning, &mut body);

    // Still below the ceiling
    body.position.y = 100.0 + tuning.jump_limit - 1.0;
    controller.update(0.016, &tuning, &mut body);
    assert!(body.velocity.y > 0.0);

    body.position.y = 100.0 + tuning.jump_limit;
    controller.update(0.016, &tuning, &mut body);
    assert_eq!(body.velocity.y, 0.0);
}

// -----------------------------------------------------------------------------
// Horizontal movement
// -----------------------------------------------------------------------------

#[test]
fn test_horizontal_velocity_reaches_target() {
    let tuning = PlayerTuning::default();
    let mut controller = PlayerController::default();
    let mut body = TestBody::at(Vec2::ZERO);

    controller.handle_input(&RIGHT, true, &tuning, &mut body);
    assert_eq!(body.velocity.x, tuning.max_speed);

    controller.handle_input(&LEFT, true, &tuning, &mut body);
    assert_eq!(body.velocity.x, -tuning.max_speed);

    controller.handle_input(&NONE, true, &tuning, &mut body);
    assert_eq!(body.velocity.x, 0.0);
}

#[test]
fn test_horizontal_velocity_is_clamped() {
    let tuning = PlayerTuning::default();
    let mut controller = PlayerController::default();
    let mut body = TestBody::at(Vec2::ZERO);

    for start in [10_000.0, -10_000.0, 0.0, tuning.max_speed * 3.0] {
        for input in [RIGHT, LEFT, NONE, UP] {
            body.velocity = Vec2::new(start, 0.0);
            controller.handle_input(&input, true, &tuning, &mut body);
            controller.handle_input(&input, true, &tuning, &mut body);
            assert!(body.velocity.x.abs() <= tuning.max_speed);
        }
    }
}

#[test]
fn test_facing_keeps_last_direction() {
    let tuning = PlayerTuning::default();
    let mut controller = PlayerController::default();
    let mut body = TestBody::at(Vec2::ZERO);
    assert_eq!(controller.facing(), Facing::Right);

    body.velocity = Vec2::new(-3.0, 0.0);
    controller.update(0.016, &tuning, &mut body);
    assert_eq!(controller.facing(), Facing::Left);

    body.velocity = Vec2::ZERO;
    controller.update(0.016, &tuning, &mut body);
    assert_eq!(controller.facing(), Facing::Left);

    body.velocity = Vec2::new(3.0, 0.0);
    controller.update(0.016, &tuning, &mut body);
    assert_eq!(controller.facing(), Facing::Right);
}

// -----------------------------------------------------------------------------
// Hazard hits
// -----------------------------------------------------------------------------

#[test]
fn test_hit_by_hazard_costs_one_life() {
    let tuning = PlayerTuning::default();
    let mut session = PlayerSession::new(3);
    let mut controller = PlayerController::default();
    let mut body = TestBody::at(Vec2::new(10.0, 0.0));

    assert!(controller.hit_by_hazard(&mut session, Vec2::ZERO, &tuning, &mut body));
    assert_eq!(session.lives(), 2);
    assert_eq!(controller.state(), MovementState::Hit);
    assert!(controller.is_hit());
}

#[test]
fn test_hit_at_zero_lives_stays_at_zero() {
    let tuning = PlayerTuning::default();
    let mut session = PlayerSession::new(0);
    let mut controller = PlayerController::default();
    let mut body = TestBody::at(Vec2::ZERO);

    controller.hit_by_hazard(&mut session, Vec2::new(5.0, 0.0), &tuning, &mut body);
    assert_eq!(session.lives(), 0);
}

#[test]
fn test_knockback_pushes_away_from_hazard() {
    let tuning = PlayerTuning::default();
    let mut session = PlayerSession::default();

    let mut controller = PlayerController::default();
    let mut body = TestBody::at(Vec2::new(10.0, 0.0));
    controller.hit_by_hazard(&mut session, Vec2::ZERO, &tuning, &mut body);
    assert_eq!(body.velocity, Vec2::new(tuning.knockback_x, tuning.knockback_y));

    let mut controller = PlayerController::default();
    let mut body = TestBody::at(Vec2::new(-10.0, 0.0));
    controller.hit_by_hazard(&mut session, Vec2::ZERO, &tuning, &mut body);
    assert_eq!(body.velocity, Vec2::new(-tuning.knockback_x, tuning.knockback_y));
}

#[test]
fn test_repeat_hit_during_reaction_is_ignored() {
    let tuning = PlayerTuning::default();
    let mut session = PlayerSession::new(3);
    let mut controller = PlayerController::default();
    let mut body = TestBody::at(Vec2::new(10.0, 0.0));

    controller.hit_by_hazard(&mut session, Vec2::ZERO, &tuning, &mut body);
    let impulses = body.impulses.len();

    assert!(!controller.hit_by_hazard(&mut session, Vec2::ZERO, &tuning, &mut body));
    assert_eq!(session.lives(), 2);
    assert_eq!(body.impulses.len(), impulses);
}

#[test]
fn test_hit_pose_until_reaction_ends() {
    let tuning = PlayerTuning::default();
    let mut session = PlayerSession::new(3);
    let mut controller = PlayerController::default();
    let mut body = TestBody::at(Vec2::new(10.0, 0.0));

    controller.hit_by_hazard(&mut session, Vec2::ZERO, &tuning, &mut body);

    // Knockback settled, flag still set
    body.velocity = Vec2::ZERO;
    controller.update(tuning.hit_duration * 0.5, &tuning, &mut body);
    assert_eq!(controller.state(), MovementState::Hit);

    controller.update(tuning.hit_duration, &tuning, &mut body);
    assert!(!controller.is_hit());

    controller.update(0.016, &tuning, &mut body);
    assert_eq!(controller.state(), MovementState::Idle);

    // A fresh contact episode lands again
    assert!(controller.hit_by_hazard(&mut session, Vec2::ZERO, &tuning, &mut body));
    assert_eq!(session.lives(), 1);
}

#[test]
fn test_tint_follows_hit_reaction_not_pose() {
    let tuning = PlayerTuning::default();
    let mut session = PlayerSession::new(3);
    let mut controller = PlayerController::default();
    let mut body = TestBody::at(Vec2::new(10.0, 0.0));
    assert_eq!(body_tint(&controller), BODY_COLOR);

    controller.hit_by_hazard(&mut session, Vec2::ZERO, &tuning, &mut body);
    // Knockback lifts the body, so the pose is Jump while the reaction runs
    controller.update(0.016, &tuning, &mut body);
    assert_eq!(controller.state(), MovementState::Jump);
    assert_ne!(body_tint(&controller), BODY_COLOR);

    controller.update(tuning.hit_duration, &tuning, &mut body);
    assert_eq!(body_tint(&controller), BODY_COLOR);
}

#[test]
fn test_hit_ignores_horizontal_input_but_still_clamps() {
    let tuning = PlayerTuning::default();
    let mut session = PlayerSession::default();
    let mut controller = PlayerController::default();
    let mut body = TestBody::at(Vec2::new(10.0, 0.0));

    controller.hit_by_hazard(&mut session, Vec2::ZERO, &tuning, &mut body);
    controller.handle_input(&LEFT, true, &tuning, &mut body);
    assert_eq!(body.velocity.x, tuning.knockback_x.min(tuning.max_speed));
}

// -----------------------------------------------------------------------------
// Respawn
// -----------------------------------------------------------------------------

#[test]
fn test_reset_position_teleports_and_stops() {
    let tuning = PlayerTuning::default();
    let mut controller = PlayerController::default();
    let mut body = TestBody::at(Vec2::new(300.0, -50.0));
    body.velocity = Vec2::new(120.0, -400.0);

    controller.reset_position(Vec2::new(1.0, 4.0), &mut body);
    controller.update(0.016, &tuning, &mut body);

    assert_eq!(controller.position(), Vec2::new(1.0, 4.0));
    assert_eq!(body.position, Vec2::new(1.0, 4.0));
    assert_eq!(body.velocity, Vec2::ZERO);
    assert_eq!(controller.state(), MovementState::Idle);
}

#[test]
fn test_reset_position_clears_jump() {
    let tuning = PlayerTuning::default();
    let mut controller = PlayerController::default();
    let mut body = TestBody::at(Vec2::ZERO);

    controller.handle_input(&UP, true, &tuning, &mut body);
    controller.reset_position(Vec2::new(0.0, 200.0), &mut body);
    assert_eq!(controller.launch_y(), None);

    controller.handle_input(&UP, true, &tuning, &mut body);
    assert_eq!(body.upward_impulses(), 2);
}
