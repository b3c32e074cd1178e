//! Line-of-sight backends.
//!
//! - `ObstacleField`: headless, AABB препятствий и тел intruder'ов
//!   (bevy::math::bounding ray casts), без физического движка
//! - `RapierSight`: raycast через bevy_rapier3d query pipeline
//!
//! Оба возвращают владельца ПЕРВОЙ поверхности вдоль луча.

use bevy::math::bounding::{Aabb3d, RayCast3d};
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::collision::los_groups;
use crate::ai::perception::LineOfSight;

/// Набор AABB (владелец + бокс) для headless LOS
#[derive(Debug, Clone, Default)]
pub struct ObstacleField {
    boxes: Vec<(Entity, Aabb3d)>,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, owner: Entity, center: Vec3, half_extents: Vec3) {
        self.boxes.push((owner, Aabb3d::new(center, half_extents)));
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

impl LineOfSight for ObstacleField {
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<Entity> {
        let Ok(direction) = Dir3::new(direction) else {
            return None;
        };
        let ray = RayCast3d::new(origin, direction, max_distance);

        // При равной дистанции выигрывает первый добавленный бокс
        self.boxes
            .iter()
            .filter_map(|(owner, aabb)| ray.aabb_intersection_at(aabb).map(|toi| (toi, *owner)))
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, owner)| owner)
    }
}

/// LOS через Rapier для одного охранника
///
/// Собственный collider охранника исключён: луч стартует внутри тела.
/// Тела других охранников луч не видит (GUARD_GROUP вне los_groups).
pub struct RapierSight<'a, 'w> {
    pub context: &'a RapierContext<'w>,
    pub exclude: Entity,
}

impl LineOfSight for RapierSight<'_, '_> {
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<Entity> {
        let filter = QueryFilter::default()
            .exclude_collider(self.exclude)
            .groups(los_groups());

        self.context
            .cast_ray(origin, direction, max_distance, true, filter)
            .map(|(entity, _toi)| entity)
    }
}
