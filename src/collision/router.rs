//! Collision domain: contact classification and the gameplay flags it drives.

use bevy::prelude::*;

use crate::collision::tags::{ShapeTag, TaggedShape, split_player_pair};

/// What a begin-contact meant for gameplay.
///
/// Counter and flag updates are applied by the router itself; the entity
/// carrying variants tell the caller which entities to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    Ignored,
    GroundContact,
    Fell,
    HazardHit { player: Entity, hazard: Entity },
    DoorReached,
    CoinCollected { coin: Entity },
}

/// The single contact listener of a level.
///
/// Owns the ground-contact counter and the fall/door flags. A counter is used
/// instead of a boolean because the player can rest on several platform
/// colliders at once.
#[derive(Resource, Debug, Default)]
pub struct CollisionRouter {
    ground_contacts: u32,
    player_has_fallen: bool,
    door_reached: bool,
}

impl CollisionRouter {
    pub fn on_contact_begin(&mut self, a: TaggedShape, b: TaggedShape) -> ContactOutcome {
        let Some((player, other)) = split_player_pair(a, b) else {
            return ContactOutcome::Ignored;
        };

        match other.tag {
            ShapeTag::Platform => {
                self.ground_contacts += 1;
                ContactOutcome::GroundContact
            }
            ShapeTag::DeathZone => {
                self.player_has_fallen = true;
                ContactOutcome::Fell
            }
            ShapeTag::Hazard => ContactOutcome::HazardHit {
                player: player.entity,
                hazard: other.entity,
            },
            ShapeTag::Door => {
                self.door_reached = true;
                ContactOutcome::DoorReached
            }
            ShapeTag::Coin => ContactOutcome::CoinCollected { coin: other.entity },
            ShapeTag::Player => ContactOutcome::Ignored,
        }
    }

    pub fn on_contact_end(&mut self, a: TaggedShape, b: TaggedShape) {
        let Some((_, other)) = split_player_pair(a, b) else {
            return;
        };

        if other.tag == ShapeTag::Platform {
            self.ground_contacts = self.ground_contacts.saturating_sub(1);
        }
    }

    pub fn is_on_ground(&self) -> bool {
        self.ground_contacts > 0
    }

    pub fn ground_contacts(&self) -> u32 {
        self.ground_contacts
    }

    /// One-shot read: returns the fall flag and clears it.
    pub fn consume_fall_flag(&mut self) -> bool {
        std::mem::take(&mut self.player_has_fallen)
    }

    /// Peeks the door flag. Reaching the door ends the level, so it is never
    /// cleared except by [`CollisionRouter::reset`].
    pub fn is_door_reached(&self) -> bool {
        self.door_reached
    }

    /// Forget every contact and flag, used when a level is rebuilt.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
