//! Collision domain: contact routing plugin wiring and public exports.

mod router;
mod systems;
mod tags;


pub use router::{CollisionRouter, ContactOutcome};
pub use tags::{GameLayer, ShapeTag, TaggedShape, split_player_pair};

use bevy::prelude::*;

use crate::collision::systems::{route_contact_begins, route_contact_ends};
use crate::core::GameplaySet;

pub struct CollisionPlugin;

impl Plugin for CollisionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CollisionRouter>().add_systems(
            Update,
            (route_contact_begins, route_contact_ends)
                .chain()
                .in_set(GameplaySet::Contacts),
        );
    }
}
