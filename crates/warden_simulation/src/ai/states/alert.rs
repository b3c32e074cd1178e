//! Alert — что-то услышали (или потеряли из виду): стоим и смотрим
//! на last known position.

use bevy::prelude::*;

use super::{GuardContext, GuardState};
use crate::ai::components::{yaw_towards, GuardStateId};

/// Ближе этого (м²) к last known position не поворачиваемся:
/// направление вырождено, охранник уставится в пол
const MIN_LOOK_DISTANCE_SQ: f32 = 1.0;

#[derive(Debug, Clone)]
pub struct AlertState {
    time_since_last_perceived: f32,
    entered_rotation: Quat,
    /// true до первого execute после входа; сбрасывается на выходе
    starting: bool,
}

impl Default for AlertState {
    fn default() -> Self {
        Self {
            time_since_last_perceived: 0.0,
            entered_rotation: Quat::IDENTITY,
            starting: true,
        }
    }
}

impl AlertState {
    pub fn time_since_last_perceived(&self) -> f32 {
        self.time_since_last_perceived
    }

    pub fn entered_rotation(&self) -> Quat {
        self.entered_rotation
    }
}

impl GuardState for AlertState {
    fn id(&self) -> GuardStateId {
        GuardStateId::Alert
    }

    fn observe(&mut self, ctx: &GuardContext<'_>, dt: f32) {
        if self.starting {
            self.starting = false;
            self.entered_rotation = ctx.transform.rotation;
            self.time_since_last_perceived = 0.0;
        }

        self.time_since_last_perceived += dt;
        if ctx.perceptions.can_hear_target {
            self.time_since_last_perceived = 0.0;
        }
    }

    fn next_state(&self, ctx: &GuardContext<'_>) -> GuardStateId {
        let perceptions = ctx.perceptions;
        if perceptions.can_see_target {
            return GuardStateId::Chase;
        }
        if !perceptions.can_hear_target && self.time_since_last_perceived > ctx.config.time_before_patrol {
            return GuardStateId::Patrol;
        }
        GuardStateId::Alert
    }

    fn act(&mut self, ctx: &mut GuardContext<'_>, _dt: f32) {
        ctx.mover.set_paused(true);

        let last_known = ctx.perceptions.last_known_position;
        let to_last_known = last_known - ctx.transform.translation;
        if to_last_known.length_squared() <= MIN_LOOK_DISTANCE_SQ {
            return;
        }
        if let Some(rotation) = yaw_towards(to_last_known) {
            ctx.transform.rotation = rotation;
        }
    }

    fn exit(&mut self, ctx: &mut GuardContext<'_>, next: GuardStateId) {
        // Патруль продолжается лицом туда, куда смотрели до тревоги
        if next == GuardStateId::Patrol {
            ctx.transform.rotation = self.entered_rotation;
        }
        self.starting = true;
    }
}
