//! Компоненты акторов: Intruder, BodyVolume

use bevy::prelude::*;

/// Intruder — цель, которую отслеживают охранники
///
/// `moving` — locomotion state: стоящий intruder не издаёт звуков
/// (hearing срабатывает только на движение).
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(BodyVolume)]
pub struct Intruder {
    pub moving: bool,
}

/// Объём тела (box) вокруг Transform.translation на уровне земли
///
/// Инвариант: half_extents > 0 по всем осям.
/// Центр тела = translation + Y * half_extents.y — оттуда guard пускает
/// LOS луч (с уровня земли луч цепляет пол).
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct BodyVolume {
    pub half_extents: Vec3,
}

impl Default for BodyVolume {
    fn default() -> Self {
        // Капсула человека ~1.8м, радиус 0.4м
        Self {
            half_extents: Vec3::new(0.4, 0.9, 0.4),
        }
    }
}

impl BodyVolume {
    pub fn new(half_extents: Vec3) -> Self {
        Self { half_extents }
    }

    /// Центр объёма для актора стоящего в `origin`
    pub fn center(&self, origin: Vec3) -> Vec3 {
        origin + Vec3::Y * self.half_extents.y
    }
}
