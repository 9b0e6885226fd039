//! Player domain: controller plugin wiring and public exports.

mod body;
pub(crate) mod bootstrap;
mod components;
mod controller;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use body::{AvianBody, PhysicalBody};
pub use components::{Facing, MovementState, Player, PlayerController};
pub use resources::{PlayerInput, PlayerTuning};

use bevy::prelude::*;

use crate::core::GameplaySet;
use crate::player::systems::{apply_player_input, read_input, sync_player_sprite, update_player};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerTuning>()
            .init_resource::<PlayerInput>()
            .add_systems(Update, read_input.in_set(GameplaySet::Input))
            .add_systems(
                Update,
                (apply_player_input, update_player, sync_player_sprite)
                    .chain()
                    .in_set(GameplaySet::Control),
            );
    }
}
