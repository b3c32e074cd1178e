//! Test doubles для портов FSM (только для unit тестов).

use bevy::prelude::*;
use std::cell::Cell;

use crate::ai::components::{GuardConfig, PatrolRoute};
use crate::ai::perception::{LineOfSight, Perceptions, TargetSnapshot};
use crate::ai::ports::MovementPort;
use crate::ai::states::GuardContext;

/// Навигатор без движения: remaining_distance задаётся тестом
#[derive(Debug, Default)]
pub struct FakeMover {
    pub destination: Option<Vec3>,
    pub paused: bool,
    pub remaining: f32,
    /// Все set_destination по порядку
    pub issued: Vec<Vec3>,
}

impl MovementPort for FakeMover {
    fn set_destination(&mut self, point: Vec3) {
        self.destination = Some(point);
        self.issued.push(point);
    }

    fn destination(&self) -> Option<Vec3> {
        self.destination
    }

    fn remaining_distance(&self) -> f32 {
        self.remaining
    }

    fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }
}

/// LOS с заранее заданным ответом + счётчик вызовов
#[derive(Debug, Default)]
pub struct ScriptedSight {
    pub hit: Option<Entity>,
    pub calls: Cell<usize>,
    pub last_ray: Cell<Option<(Vec3, Vec3, f32)>>,
}

impl ScriptedSight {
    pub fn hitting(owner: Entity) -> Self {
        Self {
            hit: Some(owner),
            ..default()
        }
    }

    pub fn blocked_by(wall: Entity) -> Self {
        Self::hitting(wall)
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

impl LineOfSight for ScriptedSight {
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<Entity> {
        self.calls.set(self.calls.get() + 1);
        self.last_ray.set(Some((origin, direction, max_distance)));
        self.hit
    }
}

pub fn intruder_entity() -> Entity {
    Entity::from_raw(7)
}

pub fn wall_entity() -> Entity {
    Entity::from_raw(99)
}

pub fn intruder_at(position: Vec3, moving: bool) -> TargetSnapshot {
    TargetSnapshot {
        entity: intruder_entity(),
        position,
        moving,
    }
}

pub fn perceptions(can_see: bool, can_hear: bool, last_known: Vec3) -> Perceptions {
    Perceptions {
        can_see_target: can_see,
        can_hear_target: can_hear,
        last_known_position: last_known,
    }
}

/// Набор данных для ручной сборки GuardContext в тестах состояний
pub struct StateHarness {
    pub transform: Transform,
    pub mover: FakeMover,
    pub perceptions: Perceptions,
    pub target: Option<TargetSnapshot>,
    pub config: GuardConfig,
    pub route: PatrolRoute,
}

impl StateHarness {
    pub fn new(config: GuardConfig, route: PatrolRoute) -> Self {
        Self {
            transform: Transform::default(),
            mover: FakeMover::default(),
            perceptions: Perceptions::default(),
            target: None,
            config,
            route,
        }
    }

    pub fn ctx(&mut self) -> GuardContext<'_> {
        GuardContext {
            transform: &mut self.transform,
            mover: &mut self.mover,
            perceptions: &self.perceptions,
            target: self.target.as_ref(),
            config: &self.config,
            route: &self.route,
        }
    }
}
