//! Spawn helpers для участников сцены.
//!
//! Headless: Transform + доменные компоненты.
//! Rapier: плюс RigidBody/Collider/CollisionGroups (см. collision).

use bevy::prelude::*;

use super::collision::{actor_physics, guard_groups, intruder_groups, occluder_physics};
use super::SightBackend;
use crate::ai::{GuardConfig, GuardController};
use crate::components::{BodyVolume, Intruder, Occluder};

/// Охранник в позе `spawn` (пустые waypoints → watcher на этой точке)
pub fn spawn_guard(commands: &mut Commands, config: GuardConfig, spawn: Transform, backend: SightBackend) -> Entity {
    let body = BodyVolume::default();
    let controller = GuardController::new(config, &spawn);

    let mut entity = commands.spawn((spawn, controller, body));
    if backend == SightBackend::Rapier {
        entity.insert(actor_physics(&body, guard_groups()));
    }
    entity.id()
}

pub fn spawn_intruder(commands: &mut Commands, position: Vec3, backend: SightBackend) -> Entity {
    let body = BodyVolume::default();

    let mut entity = commands.spawn((Transform::from_translation(position), Intruder::default(), body));
    if backend == SightBackend::Rapier {
        entity.insert(actor_physics(&body, intruder_groups()));
    }
    entity.id()
}

/// Стена / препятствие: бокс `half_extents` вокруг `center`
pub fn spawn_occluder(commands: &mut Commands, center: Vec3, half_extents: Vec3, backend: SightBackend) -> Entity {
    let mut entity = commands.spawn((Transform::from_translation(center), Occluder::new(half_extents)));
    if backend == SightBackend::Rapier {
        entity.insert(occluder_physics(half_extents));
    }
    entity.id()
}
