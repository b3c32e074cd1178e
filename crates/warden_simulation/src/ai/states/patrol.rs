//! Patrol — обход waypoints с ожиданием на каждом.
//!
//! Вложенный автомат: Waiting ⇄ Moving (начальное Waiting).

use super::{GuardContext, GuardState};
use crate::ai::components::GuardStateId;

/// Destination считается "уехавшим" от waypoint дальше этого (м²)
const DESTINATION_DRIFT_SQ: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatrolPhase {
    #[default]
    Waiting,
    Moving,
}

#[derive(Debug, Clone, Default)]
pub struct PatrolState {
    current_waypoint: usize,
    phase: PatrolPhase,
    wait_elapsed: f32,
}

impl PatrolState {
    pub fn current_waypoint(&self) -> usize {
        self.current_waypoint
    }

    pub fn phase(&self) -> PatrolPhase {
        self.phase
    }

    pub fn wait_elapsed(&self) -> f32 {
        self.wait_elapsed
    }

    fn update_waiting(&mut self, ctx: &mut GuardContext<'_>, dt: f32) {
        // Нет waypoints — просто стоим
        if ctx.route.is_empty() {
            return;
        }

        self.wait_elapsed += dt;
        if self.wait_elapsed > ctx.config.wait_duration {
            self.wait_elapsed = 0.0;
            self.current_waypoint = (self.current_waypoint + 1) % ctx.route.len();
            self.start_moving(ctx);
            return;
        }

        // После Chase/Alert навигатор может смотреть в другую точку
        let Some(waypoint) = ctx.route.waypoint(self.current_waypoint) else {
            return;
        };
        let drifted = ctx
            .mover
            .destination()
            .map_or(true, |destination| destination.distance_squared(waypoint) > DESTINATION_DRIFT_SQ);
        if drifted {
            ctx.mover.set_destination(waypoint);
            ctx.mover.set_paused(false);
            return;
        }

        // Навигатор доворачивает по ходу движения — на посту возвращаем yaw
        if ctx.mover.remaining_distance() <= ctx.config.tolerance_distance {
            self.face_post(ctx);
        }
    }

    fn update_moving(&mut self, ctx: &mut GuardContext<'_>) {
        if ctx.mover.remaining_distance() > ctx.config.tolerance_distance {
            return;
        }
        self.start_waiting(ctx);
    }

    fn start_moving(&mut self, ctx: &mut GuardContext<'_>) {
        self.phase = PatrolPhase::Moving;
        if let Some(waypoint) = ctx.route.waypoint(self.current_waypoint) {
            ctx.mover.set_destination(waypoint);
        }
        ctx.mover.set_paused(false);
    }

    fn start_waiting(&mut self, ctx: &mut GuardContext<'_>) {
        self.phase = PatrolPhase::Waiting;
        ctx.mover.set_paused(true);
        self.face_post(ctx);
    }

    /// Watcher в Waiting смотрит в каноническом направлении поста
    fn face_post(&self, ctx: &mut GuardContext<'_>) {
        if ctx.route.is_watcher() {
            ctx.transform.rotation = ctx.route.resting_rotation();
        }
    }
}

impl GuardState for PatrolState {
    fn id(&self) -> GuardStateId {
        GuardStateId::Patrol
    }

    fn next_state(&self, ctx: &GuardContext<'_>) -> GuardStateId {
        if ctx.perceptions.can_see_target {
            return GuardStateId::Chase;
        }
        if ctx.perceptions.can_hear_target {
            return GuardStateId::Alert;
        }
        GuardStateId::Patrol
    }

    fn act(&mut self, ctx: &mut GuardContext<'_>, dt: f32) {
        match self.phase {
            PatrolPhase::Waiting => self.update_waiting(ctx, dt),
            PatrolPhase::Moving => self.update_moving(ctx),
        }
    }

    /// Прерванный переход к waypoint возобновляется (Alert/Chase
    /// перенаправили или остановили навигатор); watcher в Waiting сразу
    /// разворачивается лицом туда, куда смотрел при spawn
    fn enter(&mut self, ctx: &mut GuardContext<'_>) {
        match self.phase {
            PatrolPhase::Moving => self.start_moving(ctx),
            PatrolPhase::Waiting => self.face_post(ctx),
        }
    }
}
