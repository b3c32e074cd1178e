//! Collision groups и коллайдеры для rapier backend
//!
//! ## Группы:
//! - GROUP_2: Intruder
//! - GROUP_3: Environment (стены, препятствия)
//! - GROUP_4: Guards
//!
//! LOS луч видит intruder'а и окружение, но НЕ охранников: охранники
//! взгляд друг другу не перекрывают (как в headless ObstacleField).

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::components::BodyVolume;

/// Группа intruder'а
pub const INTRUDER_GROUP: Group = Group::GROUP_2;

/// Группа окружения (Occluder)
pub const ENVIRONMENT_GROUP: Group = Group::GROUP_3;

/// Группа охранников
pub const GUARD_GROUP: Group = Group::GROUP_4;

/// Охранник сталкивается со всеми (контакт с intruder'ом → поимка)
pub fn guard_groups() -> CollisionGroups {
    CollisionGroups::new(GUARD_GROUP, GUARD_GROUP | INTRUDER_GROUP | ENVIRONMENT_GROUP)
}

/// Intruder сталкивается с охранниками и окружением
pub fn intruder_groups() -> CollisionGroups {
    CollisionGroups::new(INTRUDER_GROUP, GUARD_GROUP | ENVIRONMENT_GROUP)
}

/// Окружение сталкивается только с акторами
pub fn environment_groups() -> CollisionGroups {
    CollisionGroups::new(ENVIRONMENT_GROUP, GUARD_GROUP | INTRUDER_GROUP)
}

/// Фильтр LOS raycast (Intruder + Environment, без охранников)
pub fn los_groups() -> CollisionGroups {
    CollisionGroups::new(Group::ALL, INTRUDER_GROUP | ENVIRONMENT_GROUP)
}

/// Коллайдер тела: бокс, поднятый на half_extents.y (origin на уровне земли)
pub fn body_collider(body: &BodyVolume) -> Collider {
    let half = body.half_extents;
    Collider::compound(vec![(
        Vec3::Y * half.y,
        Quat::IDENTITY,
        Collider::cuboid(half.x, half.y, half.z),
    )])
}

/// Rapier компоненты актора (kinematic, контакт-события включены)
///
/// KINEMATIC_KINEMATIC нужен для CollisionEvent между охранником и intruder
/// (оба KinematicPositionBased).
pub fn actor_physics(body: &BodyVolume, groups: CollisionGroups) -> impl Bundle {
    (
        RigidBody::KinematicPositionBased,
        body_collider(body),
        groups,
        ActiveEvents::COLLISION_EVENTS,
        ActiveCollisionTypes::default() | ActiveCollisionTypes::KINEMATIC_KINEMATIC,
    )
}

/// Rapier компоненты статичного препятствия (бокс вокруг translation)
pub fn occluder_physics(half_extents: Vec3) -> impl Bundle {
    (
        RigidBody::Fixed,
        Collider::cuboid(half_extents.x, half_extents.y, half_extents.z),
        environment_groups(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Правило rapier: пересечение в обе стороны
    fn interacts(a: CollisionGroups, b: CollisionGroups) -> bool {
        a.memberships.intersects(b.filters) && b.memberships.intersects(a.filters)
    }

    #[test]
    fn test_guard_touches_intruder_and_environment() {
        assert!(interacts(guard_groups(), intruder_groups()));
        assert!(interacts(guard_groups(), environment_groups()));
        assert!(interacts(intruder_groups(), environment_groups()));
        assert!(!environment_groups().filters.contains(ENVIRONMENT_GROUP));
    }

    #[test]
    fn test_los_ray_ignores_guards() {
        let los = los_groups();
        assert!(interacts(los, intruder_groups()));
        assert!(interacts(los, environment_groups()));
        assert!(!interacts(los, guard_groups()));
    }
}
