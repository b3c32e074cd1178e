//! Physics module
//!
//! Line-of-sight backends (headless AABB / Rapier raycast), collision groups,
//! spawn helpers для охранников, intruder'а и препятствий.

pub mod collision;
pub mod sight;
pub mod spawn;


// Re-export основных типов
pub use collision::{
    environment_groups, guard_groups, intruder_groups, los_groups, ENVIRONMENT_GROUP, GUARD_GROUP, INTRUDER_GROUP,
};
pub use sight::{ObstacleField, RapierSight};
pub use spawn::{spawn_guard, spawn_intruder, spawn_occluder};

/// Чем отвечать на LOS запросы охранников
///
/// Headless — без физического движка (тесты, demo).
/// Rapier — query pipeline bevy_rapier3d + CollisionEvent для контактов.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SightBackend {
    #[default]
    Headless,
    Rapier,
}
