//! Player domain: spawning the player body.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::collision::{GameLayer, ShapeTag};
use crate::level::LevelEntity;
use crate::player::systems::movement::BODY_COLOR;
use crate::player::{Player, PlayerController, PlayerTuning};

/// Edge of the square body, shared by sprite and collider
pub(crate) const PLAYER_SIZE: f32 = 28.0;

pub(crate) fn spawn_player(commands: &mut Commands, position: Vec2, tuning: &PlayerTuning) -> Entity {
    let entity = commands
        .spawn((
            // Identity
            (
                Player,
                ShapeTag::Player,
                LevelEntity,
                PlayerController::default(),
            ),
            // Rendering
            Sprite {
                color: BODY_COLOR,
                custom_size: Some(Vec2::splat(PLAYER_SIZE)),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 1.0),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(PLAYER_SIZE, PLAYER_SIZE),
                Position::new(position),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                Mass(tuning.mass),
                Friction::new(tuning.friction),
                CollisionEventsEnabled,
                CollisionLayers::new(
                    GameLayer::Player,
                    [GameLayer::Ground, GameLayer::Sensor],
                ),
            ),
        ))
        .id();

    info!("Spawned player at ({:.0}, {:.0})", position.x, position.y);
    entity
}
