//! World компоненты: препятствия (стены, ящики) для line-of-sight

use bevy::prelude::*;

/// Occluder — статичное препятствие, блокирующее взгляд охранника
///
/// Headless режим: участвует в `ObstacleField` как AABB вокруг Transform.
/// Rapier режим: достаточно обычного Collider в environment группе.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Occluder {
    pub half_extents: Vec3,
}

impl Occluder {
    pub fn new(half_extents: Vec3) -> Self {
        Self { half_extents }
    }
}
