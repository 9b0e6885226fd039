//! Collision domain: gameplay roles attached to colliders.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Gameplay role of a collider. Attached once at spawn and never changed.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeTag {
    Player,
    Platform,
    DeathZone,
    Hazard,
    Door,
    Coin,
}

/// A collider entity together with its tag, as seen by the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaggedShape {
    pub entity: Entity,
    pub tag: ShapeTag,
}

impl TaggedShape {
    pub fn new(entity: Entity, tag: ShapeTag) -> Self {
        Self { entity, tag }
    }
}

/// Orders an unordered contact pair as `(player, other)`.
///
/// Contact order from the physics engine is unspecified, so both orderings are
/// checked. Returns `None` when neither side is the player.
pub fn split_player_pair(a: TaggedShape, b: TaggedShape) -> Option<(TaggedShape, TaggedShape)> {
    match (a.tag, b.tag) {
        (ShapeTag::Player, _) => Some((a, b)),
        (_, ShapeTag::Player) => Some((b, a)),
        _ => None,
    }
}

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Platforms the player stands on
    Ground,
    /// Player character
    Player,
    /// Death zones, hazards, coins and the door; never block movement
    Sensor,
}
