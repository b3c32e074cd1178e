//! Chase — активное преследование.
//!
//! Destination обновляется каждый тик (в отличие от one-shot в Patrol).
//! Выход только в Alert — напрямую в Patrol не возвращаемся.

use super::{GuardContext, GuardState};
use crate::ai::components::GuardStateId;

#[derive(Debug, Clone, Default)]
pub struct ChaseState {
    time_since_last_perceived: f32,
}

impl ChaseState {
    pub fn time_since_last_perceived(&self) -> f32 {
        self.time_since_last_perceived
    }
}

impl GuardState for ChaseState {
    fn id(&self) -> GuardStateId {
        GuardStateId::Chase
    }

    fn observe(&mut self, ctx: &GuardContext<'_>, dt: f32) {
        self.time_since_last_perceived += dt;
        if ctx.perceptions.perceives_target() {
            self.time_since_last_perceived = 0.0;
        }
    }

    fn next_state(&self, ctx: &GuardContext<'_>) -> GuardStateId {
        if !ctx.perceptions.perceives_target() && self.time_since_last_perceived > ctx.config.time_before_alert {
            return GuardStateId::Alert;
        }
        GuardStateId::Chase
    }

    fn act(&mut self, ctx: &mut GuardContext<'_>, _dt: f32) {
        // Видим — бежим к живой позиции, иначе к последней известной
        let live = ctx.target.filter(|_| ctx.perceptions.can_see_target);
        let target_position = live.map_or(ctx.perceptions.last_known_position, |target| target.position);

        ctx.mover.set_destination(target_position);

        // Порог сравнивается с КВАДРАТОМ дистанции (останов у цели без дрожания)
        let distance_sq = ctx.transform.translation.distance_squared(target_position);
        ctx.mover.set_paused(distance_sq < ctx.config.tolerance_distance);
    }

    fn enter(&mut self, _ctx: &mut GuardContext<'_>) {
        self.time_since_last_perceived = 0.0;
    }
}
