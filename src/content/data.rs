//! Level layout data and its flattening into tagged shapes.

use bevy::prelude::*;
use serde::Deserialize;

use crate::collision::ShapeTag;

/// Axis-aligned rectangle anchored at its bottom-left corner, the way map
/// editors export rectangle objects.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RectDef {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RectDef {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Open chain of segments the player can stand on.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlatformDef {
    #[serde(default)]
    pub origin: [f32; 2],
    /// Vertices relative to `origin`
    pub points: Vec<[f32; 2]>,
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
pub struct LevelDef {
    pub name: String,
    pub player_spawn: [f32; 2],
    pub platforms: Vec<PlatformDef>,
    #[serde(default)]
    pub death_zones: Vec<RectDef>,
    #[serde(default)]
    pub hazards: Vec<RectDef>,
    #[serde(default)]
    pub coins: Vec<[f32; 2]>,
    pub door: RectDef,
}

/// Collider geometry in the shape's local space.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeGeometry {
    Polyline(Vec<Vec2>),
    Rectangle { size: Vec2 },
    Circle { radius: f32 },
}

/// One level element ready to be spawned: `(tag, geometry, world position)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeSpawn {
    pub tag: ShapeTag,
    pub geometry: ShapeGeometry,
    pub position: Vec2,
}

pub const COIN_RADIUS: f32 = 9.0;

impl LevelDef {
    pub fn spawn_point(&self) -> Vec2 {
        Vec2::from(self.player_spawn)
    }

    /// Flatten the layout into tagged shapes in spawn order.
    pub fn shapes(&self) -> Vec<ShapeSpawn> {
        let mut shapes = Vec::with_capacity(
            self.platforms.len()
                + self.death_zones.len()
                + self.hazards.len()
                + self.coins.len()
                + 1,
        );

        for platform in &self.platforms {
            shapes.push(ShapeSpawn {
                tag: ShapeTag::Platform,
                geometry: ShapeGeometry::Polyline(
                    platform.points.iter().copied().map(Vec2::from).collect(),
                ),
                position: Vec2::from(platform.origin),
            });
        }

        let rects = [
            (ShapeTag::DeathZone, &self.death_zones),
            (ShapeTag::Hazard, &self.hazards),
        ];
        for (tag, list) in rects {
            for rect in list {
                shapes.push(ShapeSpawn {
                    tag,
                    geometry: ShapeGeometry::Rectangle { size: rect.size() },
                    position: rect.center(),
                });
            }
        }

        for &coin in &self.coins {
            shapes.push(ShapeSpawn {
                tag: ShapeTag::Coin,
                geometry: ShapeGeometry::Circle {
                    radius: COIN_RADIUS,
                },
                position: Vec2::from(coin),
            });
        }

        shapes.push(ShapeSpawn {
            tag: ShapeTag::Door,
            geometry: ShapeGeometry::Rectangle {
                size: self.door.size(),
            },
            position: self.door.center(),
        });

        shapes
    }
}

impl Default for LevelDef {
    /// Built-in first level, used when no level file is available.
    fn default() -> Self {
        Self {
            name: "Lily Pond".to_string(),
            player_spawn: [42.0, 400.0],
            platforms: vec![
                PlatformDef {
                    origin: [0.0, 0.0],
                    points: vec![[0.0, 720.0], [0.0, 64.0], [640.0, 64.0]],
                },
                PlatformDef {
                    origin: [760.0, 64.0],
                    points: vec![[0.0, 0.0], [640.0, 0.0]],
                },
                PlatformDef {
                    origin: [900.0, 180.0],
                    points: vec![[0.0, 0.0], [140.0, 0.0]],
                },
                PlatformDef {
                    origin: [1520.0, 64.0],
                    points: vec![[0.0, 0.0], [880.0, 0.0], [880.0, 656.0]],
                },
                PlatformDef {
                    origin: [1700.0, 170.0],
                    points: vec![[0.0, 0.0], [120.0, 0.0]],
                },
            ],
            death_zones: vec![
                RectDef::new(640.0, -40.0, 120.0, 40.0),
                RectDef::new(1400.0, -40.0, 120.0, 40.0),
            ],
            hazards: vec![
                RectDef::new(1120.0, 64.0, 32.0, 32.0),
                RectDef::new(1960.0, 64.0, 32.0, 32.0),
            ],
            coins: vec![
                [300.0, 100.0],
                [700.0, 150.0],
                [970.0, 215.0],
                [1250.0, 100.0],
                [1460.0, 150.0],
                [1760.0, 205.0],
                [2100.0, 100.0],
            ],
            door: RectDef::new(2300.0, 64.0, 48.0, 72.0),
        }
    }
}
