//! Collision domain: feeding avian contact messages through the router.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::collision::{CollisionRouter, ContactOutcome, ShapeTag, TaggedShape};
use crate::core::PlayerSession;
use crate::player::{AvianBody, Player, PlayerController, PlayerTuning};

fn tagged_pair(
    tags: &Query<&ShapeTag>,
    collider1: Entity,
    collider2: Entity,
) -> Option<(TaggedShape, TaggedShape)> {
    // Untagged colliders are decoration and never affect gameplay. Messages
    // about colliders despawned with a previous level fail here too.
    let tag1 = *tags.get(collider1).ok()?;
    let tag2 = *tags.get(collider2).ok()?;
    Some((
        TaggedShape::new(collider1, tag1),
        TaggedShape::new(collider2, tag2),
    ))
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn route_contact_begins(
    mut commands: Commands,
    mut collision_start_events: MessageReader<CollisionStart>,
    tags: Query<&ShapeTag>,
    hazard_query: Query<&Position, Without<Player>>,
    mut router: ResMut<CollisionRouter>,
    mut session: ResMut<PlayerSession>,
    tuning: Res<PlayerTuning>,
    mut player_query: Query<
        (&mut PlayerController, &mut Position, &mut LinearVelocity, &Mass),
        With<Player>,
    >,
) {
    // Despawns are deferred, so a coin stays tagged until the frame ends
    let mut collected_coins: Vec<Entity> = Vec::new();

    for event in collision_start_events.read() {
        let Some((a, b)) = tagged_pair(&tags, event.collider1, event.collider2) else {
            continue;
        };

        match router.on_contact_begin(a, b) {
            ContactOutcome::Ignored => {}
            ContactOutcome::GroundContact => {
                debug!("Ground contact began, contacts={}", router.ground_contacts());
            }
            ContactOutcome::Fell => {
                info!("Player fell into a death zone");
            }
            ContactOutcome::DoorReached => {
                info!("Player reached the door");
            }
            ContactOutcome::HazardHit { player, hazard } => {
                let Ok(hazard_position) = hazard_query.get(hazard) else {
                    continue;
                };
                let Ok((mut controller, mut position, mut velocity, mass)) =
                    player_query.get_mut(player)
                else {
                    continue;
                };
                let mut body = AvianBody::new(&mut position, &mut velocity, mass);
                controller.hit_by_hazard(&mut session, hazard_position.0, &tuning, &mut body);
            }
            ContactOutcome::CoinCollected { coin } => {
                if collected_coins.contains(&coin) {
                    continue;
                }
                collected_coins.push(coin);
                let total = session.collect_coin();
                commands.entity(coin).despawn();
                info!("Coin collected, total={}", total);
            }
        }
    }
}

pub(crate) fn route_contact_ends(
    mut collision_end_events: MessageReader<CollisionEnd>,
    tags: Query<&ShapeTag>,
    mut router: ResMut<CollisionRouter>,
) {
    for event in collision_end_events.read() {
        let Some((a, b)) = tagged_pair(&tags, event.collider1, event.collider2) else {
            continue;
        };

        let before = router.ground_contacts();
        router.on_contact_end(a, b);
        if router.ground_contacts() != before {
            debug!("Ground contact ended, contacts={}", router.ground_contacts());
        }
    }
}
