//! Level domain: level building and run flow plugin wiring.

mod spawn;
mod systems;


use bevy::prelude::*;

use crate::core::{GameState, GameplaySet};
use crate::level::systems::{
    apply_gravity, check_level_outcome, draw_platforms, handle_player_fall, restart_on_confirm,
    setup_level,
};

/// Marks everything torn down on restart
#[derive(Component, Debug)]
pub struct LevelEntity;

/// World-space vertices of a platform chain, kept for drawing
#[derive(Component, Debug, Clone)]
pub struct PlatformOutline(pub Vec<Vec2>);

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (apply_gravity, setup_level))
            .add_systems(
                Update,
                (handle_player_fall, check_level_outcome)
                    .chain()
                    .in_set(GameplaySet::Flow),
            )
            .add_systems(
                Update,
                restart_on_confirm.run_if(|state: Res<State<GameState>>| state.get().is_finished()),
            )
            .add_systems(Update, draw_platforms);
    }
}
