//! Core domain: camera, pause and physics clock systems.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::state::GameState;
use crate::player::Player;

/// Half of the 1280x720 window; the camera never scrolls left of the level start
pub(crate) const HALF_VIEW: Vec2 = Vec2::new(640.0, 360.0);

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, Transform::from_xyz(HALF_VIEW.x, HALF_VIEW.y, 0.0)));
}

pub(crate) fn follow_player(
    player_query: Query<&Position, With<Player>>,
    mut camera_query: Query<&mut Transform, With<Camera2d>>,
) {
    let Ok(player_position) = player_query.single() else {
        return;
    };

    for mut transform in &mut camera_query {
        transform.translation.x = camera_x_for(player_position.0.x);
        transform.translation.y = HALF_VIEW.y;
    }
}

pub(crate) fn camera_x_for(player_x: f32) -> f32 {
    player_x.max(HALF_VIEW.x)
}

pub(crate) fn toggle_pause(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !(keyboard.just_pressed(KeyCode::KeyP) || keyboard.just_pressed(KeyCode::Escape)) {
        return;
    }

    match state.get() {
        GameState::Playing => {
            info!("Game paused");
            next_state.set(GameState::Paused);
        }
        GameState::Paused => {
            info!("Game resumed");
            next_state.set(GameState::Playing);
        }
        GameState::GameOver | GameState::Won => {}
    }
}

pub(crate) fn pause_physics(mut physics_time: ResMut<Time<Physics>>) {
    physics_time.pause();
}

pub(crate) fn resume_physics(mut physics_time: ResMut<Time<Physics>>) {
    physics_time.unpause();
}
