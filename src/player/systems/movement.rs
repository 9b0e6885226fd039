//! Player domain: controller systems bridging to avian components.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::collision::CollisionRouter;
use crate::player::{AvianBody, Facing, Player, PlayerController, PlayerInput, PlayerTuning};

const HIT_TINT: Color = Color::srgb(1.0, 0.45, 0.45);
pub(crate) const BODY_COLOR: Color = Color::srgb(0.35, 0.75, 0.35);

pub(crate) fn apply_player_input(
    input: Res<PlayerInput>,
    tuning: Res<PlayerTuning>,
    router: Res<CollisionRouter>,
    mut query: Query<
        (&mut PlayerController, &mut Position, &mut LinearVelocity, &Mass),
        With<Player>,
    >,
) {
    for (mut controller, mut position, mut velocity, mass) in &mut query {
        let mut body = AvianBody::new(&mut position, &mut velocity, mass);
        controller.handle_input(&input, router.is_on_ground(), &tuning, &mut body);
    }
}

pub(crate) fn update_player(
    time: Res<Time>,
    tuning: Res<PlayerTuning>,
    mut query: Query<
        (&mut PlayerController, &mut Position, &mut LinearVelocity, &Mass),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (mut controller, mut position, mut velocity, mass) in &mut query {
        let mut body = AvianBody::new(&mut position, &mut velocity, mass);
        controller.update(dt, &tuning, &mut body);
    }
}

/// Placeholder fill: tinted for as long as the hit reaction runs.
pub(crate) fn body_tint(controller: &PlayerController) -> Color {
    if controller.is_hit() {
        HIT_TINT
    } else {
        BODY_COLOR
    }
}

/// Mirrors and tints the placeholder sprite from the controller state.
pub(crate) fn sync_player_sprite(mut query: Query<(&PlayerController, &mut Sprite), With<Player>>) {
    for (controller, mut sprite) in &mut query {
        sprite.flip_x = controller.facing() == Facing::Left;
        sprite.color = body_tint(controller);
    }
}
