//! GuardController — владелец FSM одного охранника.
//!
//! Тик в две явные фазы:
//! 1. Perception: пересчёт снимка восприятия (sticky last_known_position)
//! 2. Execute: активное состояние решает переход или действует
//!
//! Никакого глобального состояния: каждый охранник — отдельный Component,
//! охранники не делят mutable данные.

use bevy::prelude::*;

use crate::ai::components::{GuardConfig, GuardStateId, PatrolRoute};
use crate::ai::perception::{self, LineOfSight, Perceptions, SensorPose, TargetSnapshot};
use crate::ai::ports::MovementPort;
use crate::ai::states::{AlertState, ChaseState, GuardContext, PatrolState, StateTable};
use crate::components::BodyVolume;
use crate::navigation::NavAgent;

/// Что охранник "видит" о мире в этот тик
pub struct WorldView<'a> {
    pub target: Option<TargetSnapshot>,
    pub sight: &'a dyn LineOfSight,
    /// Collision extent охранника (LOS луч из центра тела)
    pub body_half_height: f32,
}

/// Произошедший swap состояний
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateTransition {
    pub from: GuardStateId,
    pub to: GuardStateId,
}

/// FSM охранника (Component)
///
/// Навигатор и объём тела добавляются автоматически (required components).
#[derive(Component, Debug, Clone)]
#[require(NavAgent, BodyVolume)]
pub struct GuardController {
    config: GuardConfig,
    route: PatrolRoute,
    perceptions: Perceptions,
    current: GuardStateId,
    states: StateTable,
}

impl GuardController {
    /// Охранник, заспавненный в `spawn` (пустой маршрут → watcher на месте)
    pub fn new(config: GuardConfig, spawn: &Transform) -> Self {
        let route = PatrolRoute::from_spawn(&config.waypoints, spawn);
        Self::with_route(config, route)
    }

    pub fn with_route(config: GuardConfig, route: PatrolRoute) -> Self {
        Self {
            config,
            route,
            perceptions: Perceptions::default(),
            current: GuardStateId::Patrol,
            states: StateTable::default(),
        }
    }

    pub fn perceptions(&self) -> Perceptions {
        self.perceptions
    }

    pub fn current_state(&self) -> GuardStateId {
        self.current
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    pub fn route(&self) -> &PatrolRoute {
        &self.route
    }

    pub fn patrol(&self) -> &PatrolState {
        &self.states.patrol
    }

    pub fn alert(&self) -> &AlertState {
        &self.states.alert
    }

    pub fn chase(&self) -> &ChaseState {
        &self.states.chase
    }

    /// Один кадр симуляции
    pub fn tick(
        &mut self,
        dt: f32,
        transform: &mut Transform,
        mover: &mut dyn MovementPort,
        world: &WorldView<'_>,
    ) -> Option<StateTransition> {
        // Фаза 1: perception (строго до execute)
        let pose = SensorPose::from_transform(transform, world.body_half_height);
        let target = world.target.as_ref();
        let senses = perception::evaluate(&pose, target, &self.config, world.sight);
        self.perceptions = self.perceptions.refreshed(senses, target);

        // Фаза 2: активное состояние
        let mut ctx = GuardContext {
            transform,
            mover,
            perceptions: &self.perceptions,
            target,
            config: &self.config,
            route: &self.route,
        };
        let next = self.states.get_mut(self.current).execute(&mut ctx, dt)?;

        Some(swap(&mut self.states, &mut self.current, next, &mut ctx))
    }

    /// Принудительная смена состояния (states делают это через tick)
    ///
    /// None если `next` уже активно.
    pub fn change_state(
        &mut self,
        next: GuardStateId,
        transform: &mut Transform,
        mover: &mut dyn MovementPort,
    ) -> Option<StateTransition> {
        if next == self.current {
            return None;
        }

        let mut ctx = GuardContext {
            transform,
            mover,
            perceptions: &self.perceptions,
            target: None,
            config: &self.config,
            route: &self.route,
        };
        Some(swap(&mut self.states, &mut self.current, next, &mut ctx))
    }
}

fn swap(
    states: &mut StateTable,
    current: &mut GuardStateId,
    next: GuardStateId,
    ctx: &mut GuardContext<'_>,
) -> StateTransition {
    let from = *current;
    states.get_mut(from).exit(ctx, next);
    states.get_mut(next).enter(ctx);
    *current = next;

    StateTransition { from, to: next }
}
