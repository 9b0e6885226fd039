//! Level domain: building colliders from level data.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::collision::{GameLayer, ShapeTag};
use crate::content::{LevelDef, ShapeGeometry, ShapeSpawn};
use crate::level::{LevelEntity, PlatformOutline};
use crate::player::PlayerTuning;
use crate::player::bootstrap::spawn_player;

const HAZARD_COLOR: Color = Color::srgb(0.75, 0.25, 0.2);
const COIN_COLOR: Color = Color::srgb(0.95, 0.8, 0.2);
const DOOR_COLOR: Color = Color::srgb(0.45, 0.3, 0.15);

/// Placeholder fill for tags that have a visible body. Platforms are drawn as
/// outlines and death zones stay invisible.
pub(crate) fn placeholder_color(tag: ShapeTag) -> Option<Color> {
    match tag {
        ShapeTag::Hazard => Some(HAZARD_COLOR),
        ShapeTag::Coin => Some(COIN_COLOR),
        ShapeTag::Door => Some(DOOR_COLOR),
        ShapeTag::Player | ShapeTag::Platform | ShapeTag::DeathZone => None,
    }
}

fn collider_for(geometry: &ShapeGeometry) -> Collider {
    match geometry {
        ShapeGeometry::Polyline(points) => Collider::polyline(points.clone(), None),
        ShapeGeometry::Rectangle { size } => Collider::rectangle(size.x, size.y),
        ShapeGeometry::Circle { radius } => Collider::circle(*radius),
    }
}

fn sprite_size(geometry: &ShapeGeometry) -> Option<Vec2> {
    match geometry {
        ShapeGeometry::Polyline(_) => None,
        ShapeGeometry::Rectangle { size } => Some(*size),
        ShapeGeometry::Circle { radius } => Some(Vec2::splat(radius * 2.0)),
    }
}

fn spawn_shape(commands: &mut Commands, shape: &ShapeSpawn) -> Entity {
    let mut entity = commands.spawn((
        shape.tag,
        LevelEntity,
        Transform::from_translation(shape.position.extend(0.0)),
        RigidBody::Static,
        collider_for(&shape.geometry),
    ));

    if shape.tag == ShapeTag::Platform {
        entity.insert(CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]));
        if let ShapeGeometry::Polyline(points) = &shape.geometry {
            entity.insert(PlatformOutline(
                points.iter().map(|p| *p + shape.position).collect(),
            ));
        }
    } else {
        entity.insert((
            Sensor,
            CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
        ));
    }

    if let (Some(color), Some(size)) = (placeholder_color(shape.tag), sprite_size(&shape.geometry)) {
        entity.insert(Sprite {
            color,
            custom_size: Some(size),
            ..default()
        });
    }

    entity.id()
}

/// Spawn every level shape followed by the player.
pub(crate) fn spawn_level(commands: &mut Commands, level: &LevelDef, tuning: &PlayerTuning) {
    let shapes = level.shapes();
    for shape in &shapes {
        spawn_shape(commands, shape);
    }
    spawn_player(commands, level.spawn_point(), tuning);

    info!("Built level '{}': {} shapes", level.name, shapes.len());
}
