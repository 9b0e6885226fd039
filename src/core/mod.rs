//! Core domain: game states, run session and frame ordering.

mod resources;
mod state;
mod systems;


pub use resources::{DEFAULT_LIVES, PlayerSession};
pub use state::{GameState, GameplaySet};

use bevy::prelude::*;

use crate::core::systems::{
    follow_player, pause_physics, resume_physics, setup_camera, toggle_pause,
};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<PlayerSession>()
            .configure_sets(
                Update,
                (
                    GameplaySet::Contacts,
                    GameplaySet::Input,
                    GameplaySet::Control,
                    GameplaySet::Flow,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(Startup, setup_camera)
            .add_systems(OnEnter(GameState::Playing), resume_physics)
            .add_systems(OnExit(GameState::Playing), pause_physics)
            .add_systems(Update, toggle_pause)
            .add_systems(PostUpdate, follow_player);
    }
}
