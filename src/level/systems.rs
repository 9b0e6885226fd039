//! Level domain: level setup, respawn and win/lose flow.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::collision::CollisionRouter;
use crate::content::LevelDef;
use crate::core::{GameState, PlayerSession};
use crate::level::spawn::spawn_level;
use crate::level::{LevelEntity, PlatformOutline};
use crate::player::{AvianBody, Player, PlayerController, PlayerTuning};

const PLATFORM_COLOR: Color = Color::srgb(0.3, 0.5, 0.3);

pub(crate) fn apply_gravity(tuning: Res<PlayerTuning>, mut gravity: ResMut<Gravity>) {
    gravity.0 = Vec2::NEG_Y * tuning.gravity;
}

pub(crate) fn setup_level(
    mut commands: Commands,
    level: Res<LevelDef>,
    tuning: Res<PlayerTuning>,
    mut session: ResMut<PlayerSession>,
) {
    session.reset(tuning.starting_lives);
    spawn_level(&mut commands, &level, &tuning);
}

/// Consumes the fall flag: one life lost, then back to the spawn point.
pub(crate) fn handle_player_fall(
    level: Res<LevelDef>,
    mut router: ResMut<CollisionRouter>,
    mut session: ResMut<PlayerSession>,
    mut player_query: Query<
        (&mut PlayerController, &mut Position, &mut LinearVelocity, &Mass),
        With<Player>,
    >,
) {
    if !router.consume_fall_flag() {
        return;
    }

    let remaining = session.lose_life();
    info!("Player fell, {} lives left", remaining);
    if !session.is_alive() {
        return;
    }

    for (mut controller, mut position, mut velocity, mass) in &mut player_query {
        let mut body = AvianBody::new(&mut position, &mut velocity, mass);
        controller.reset_position(level.spawn_point(), &mut body);
        info!("Player respawned at {:?}", level.spawn_point());
    }
}

/// Where the run goes next, if anywhere. Running out of lives wins over
/// reaching the door on the same frame.
pub(crate) fn level_outcome(session: &PlayerSession, router: &CollisionRouter) -> Option<GameState> {
    if !session.is_alive() {
        Some(GameState::GameOver)
    } else if router.is_door_reached() {
        Some(GameState::Won)
    } else {
        None
    }
}

pub(crate) fn check_level_outcome(
    session: Res<PlayerSession>,
    router: Res<CollisionRouter>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Some(outcome) = level_outcome(&session, &router) else {
        return;
    };

    match outcome {
        GameState::GameOver => info!("Game over with {} coins", session.coins()),
        GameState::Won => info!("Level complete with {} coins", session.coins()),
        GameState::Playing | GameState::Paused => {}
    }
    next_state.set(outcome);
}

/// Full restart from the game over or win state.
#[allow(clippy::too_many_arguments)]
pub(crate) fn restart_on_confirm(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    level: Res<LevelDef>,
    tuning: Res<PlayerTuning>,
    level_entities: Query<Entity, With<LevelEntity>>,
    mut router: ResMut<CollisionRouter>,
    mut session: ResMut<PlayerSession>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !keyboard.just_pressed(KeyCode::Enter) {
        return;
    }

    for entity in &level_entities {
        commands.entity(entity).despawn();
    }

    router.reset();
    session.reset(tuning.starting_lives);
    spawn_level(&mut commands, &level, &tuning);

    info!("Restarting with {} lives", session.lives());
    next_state.set(GameState::Playing);
}

pub(crate) fn draw_platforms(mut gizmos: Gizmos, platforms: Query<&PlatformOutline>) {
    for outline in &platforms {
        gizmos.linestrip_2d(outline.0.iter().copied(), PLATFORM_COLOR);
    }
}
