//! Patrol route: waypoints + original orientation captured at spawn.

use bevy::prelude::*;

/// Маршрут патруля (immutable после spawn)
///
/// Пустой список waypoints из конфига превращается в один синтетический
/// waypoint в точке spawn — охранник становится "watcher" (стоит на посту).
#[derive(Debug, Clone, PartialEq)]
pub struct PatrolRoute {
    waypoints: Vec<Vec3>,
    original_rotation: Quat,
}

impl PatrolRoute {
    /// Маршрут как есть, без синтетического waypoint
    pub fn new(waypoints: Vec<Vec3>, original_rotation: Quat) -> Self {
        Self {
            waypoints,
            original_rotation,
        }
    }

    /// Маршрут для охранника, заспавненного в `spawn`
    pub fn from_spawn(waypoints: &[Vec3], spawn: &Transform) -> Self {
        let waypoints = if waypoints.is_empty() {
            vec![spawn.translation]
        } else {
            waypoints.to_vec()
        };
        Self::new(waypoints, spawn.rotation)
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn waypoint(&self, index: usize) -> Option<Vec3> {
        self.waypoints.get(index).copied()
    }

    pub fn waypoints(&self) -> &[Vec3] {
        &self.waypoints
    }

    /// Watcher: единственный waypoint — по сути неподвижный охранник
    pub fn is_watcher(&self) -> bool {
        self.waypoints.len() == 1
    }

    pub fn original_rotation(&self) -> Quat {
        self.original_rotation
    }

    /// Канонический поворот на посту: только yaw исходной ориентации
    pub fn resting_rotation(&self) -> Quat {
        Quat::from_rotation_y(yaw_of(self.original_rotation))
    }
}

/// Yaw (вокруг Y) из произвольного поворота
pub fn yaw_of(rotation: Quat) -> f32 {
    rotation.to_euler(EulerRot::YXZ).0
}

/// Поворот, при котором forward (-Z) смотрит вдоль горизонтальной проекции `direction`
///
/// None если горизонтальная проекция вырождена (цель строго над/под нами).
pub fn yaw_towards(direction: Vec3) -> Option<Quat> {
    let flat = Vec3::new(direction.x, 0.0, direction.z);
    if flat.length_squared() <= f32::EPSILON {
        return None;
    }
    Some(Quat::from_rotation_y(f32::atan2(-flat.x, -flat.z)))
}
