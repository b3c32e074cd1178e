//! Perception evaluator: vision cone + LOS raycast, proximity hearing.
//!
//! Чистые функции от позы охранника, состояния цели и LOS запроса.
//! Порядок проверок зрения — от дешёвых к дорогим (raycast последним).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::ai::components::{DebugOverrides, GuardConfig};

/// Снимок восприятия за тик
///
/// `last_known_position` — sticky: обновляется только когда цель видна
/// или слышна, иначе хранит предыдущее значение (Vec3::ZERO до первого
/// восприятия).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Perceptions {
    pub can_see_target: bool,
    pub can_hear_target: bool,
    pub last_known_position: Vec3,
}

impl Perceptions {
    pub fn perceives_target(&self) -> bool {
        self.can_see_target || self.can_hear_target
    }
}

/// Состояние цели на этот тик (None = цели нет в симуляции)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetSnapshot {
    pub entity: Entity,
    pub position: Vec3,
    pub moving: bool,
}

/// Поза охранника для проверок восприятия
#[derive(Debug, Clone, Copy)]
pub struct SensorPose {
    pub position: Vec3,
    pub forward: Vec3,
    /// Половина высоты тела — LOS луч идёт из центра тела
    pub body_half_height: f32,
}

impl SensorPose {
    pub fn from_transform(transform: &Transform, body_half_height: f32) -> Self {
        Self {
            position: transform.translation,
            forward: transform.forward().as_vec3(),
            body_half_height,
        }
    }

    pub fn eye(&self) -> Vec3 {
        self.position + Vec3::Y * self.body_half_height
    }
}

/// Line-of-sight запрос к физике
///
/// Возвращает владельца первой поверхности, в которую попал луч, или None.
/// `direction` нормализован.
pub trait LineOfSight {
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<Entity>;
}

/// Результат сырых проверок (без sticky позиции)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Senses {
    pub can_see: bool,
    pub can_hear: bool,
}

/// Видит ли охранник цель
///
/// Цель в той же точке, что и охранник (направление вырождено), считается
/// видимой без raycast — угол и луч для неё не определены.
pub fn evaluate_sight(
    pose: &SensorPose,
    target: Option<&TargetSnapshot>,
    config: &GuardConfig,
    los: &dyn LineOfSight,
) -> bool {
    let Some(target) = target else {
        return false;
    };

    let to_target = target.position - pose.position;
    if to_target.length_squared() > config.vision_range * config.vision_range {
        return false;
    }

    let direction = to_target.normalize_or_zero();
    if direction == Vec3::ZERO {
        return true;
    }

    let angle = pose.forward.angle_between(direction).to_degrees();
    if angle > config.vision_half_angle {
        return false;
    }

    // Из центра тела, параллельно линии "ноги → ноги" — иначе луч цепляет пол
    match los.raycast(pose.eye(), direction, config.vision_range) {
        Some(owner) => owner == target.entity,
        None => false,
    }
}

/// Слышит ли охранник цель: в радиусе и двигается
pub fn evaluate_hearing(pose: &SensorPose, target: Option<&TargetSnapshot>, config: &GuardConfig) -> bool {
    let Some(target) = target else {
        return false;
    };

    if target.position.distance_squared(pose.position) > config.hearing_range * config.hearing_range {
        return false;
    }

    target.moving
}

/// Оба канала + debug overrides (AND, никогда не включают канал)
pub fn evaluate(
    pose: &SensorPose,
    target: Option<&TargetSnapshot>,
    config: &GuardConfig,
    los: &dyn LineOfSight,
) -> Senses {
    let DebugOverrides {
        sight_enabled,
        hearing_enabled,
        ..
    } = config.debug;

    Senses {
        can_see: sight_enabled && evaluate_sight(pose, target, config, los),
        can_hear: hearing_enabled && evaluate_hearing(pose, target, config),
    }
}

impl Perceptions {
    /// Новый снимок из сырых проверок; last_known_position обновляется
    /// только если цель воспринята
    pub fn refreshed(&self, senses: Senses, target: Option<&TargetSnapshot>) -> Self {
        let mut next = Perceptions {
            can_see_target: senses.can_see,
            can_hear_target: senses.can_hear,
            last_known_position: self.last_known_position,
        };

        if next.perceives_target() {
            if let Some(target) = target {
                next.last_known_position = target.position;
            }
        }

        next
    }
}
