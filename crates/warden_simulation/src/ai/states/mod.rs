//! Поведения состояний FSM (Patrol, Alert, Chase)
//!
//! Каждое состояние — отдельная структура со своими таймерами.
//! Controller выбирает активную через `StateTable` по `GuardStateId`.
//!
//! Один тик состояния (`GuardState::execute`):
//! 1. observe — обновить собственные таймеры по снимку восприятия
//! 2. next_state — чистая функция снимка + таймеров
//! 3. если next != self → вернуть next (controller делает swap), иначе act
//!
//! Переход и действие взаимоисключающие в пределах тика.

use bevy::prelude::*;

use crate::ai::components::{GuardConfig, GuardStateId, PatrolRoute};
use crate::ai::perception::{Perceptions, TargetSnapshot};
use crate::ai::ports::MovementPort;

pub mod alert;
pub mod chase;
pub mod patrol;


pub use alert::AlertState;
pub use chase::ChaseState;
pub use patrol::{PatrolPhase, PatrolState};

/// Всё, что состояние может читать/менять за тик
pub struct GuardContext<'a> {
    pub transform: &'a mut Transform,
    pub mover: &'a mut dyn MovementPort,
    pub perceptions: &'a Perceptions,
    pub target: Option<&'a TargetSnapshot>,
    pub config: &'a GuardConfig,
    pub route: &'a PatrolRoute,
}

/// Capability одного состояния FSM
pub trait GuardState {
    fn id(&self) -> GuardStateId;

    /// Таймеры продвигаются до решения о переходе
    fn observe(&mut self, _ctx: &GuardContext<'_>, _dt: f32) {}

    fn next_state(&self, ctx: &GuardContext<'_>) -> GuardStateId;

    /// Steady-state поведение (только если остаёмся в этом состоянии)
    fn act(&mut self, ctx: &mut GuardContext<'_>, dt: f32);

    /// First-frame setup при swap в это состояние
    fn enter(&mut self, _ctx: &mut GuardContext<'_>) {}

    /// Вызывается при swap из этого состояния в `next`
    fn exit(&mut self, _ctx: &mut GuardContext<'_>, _next: GuardStateId) {}

    /// Some(next) — нужен переход, действие в этом тике не выполнялось
    fn execute(&mut self, ctx: &mut GuardContext<'_>, dt: f32) -> Option<GuardStateId> {
        self.observe(ctx, dt);

        let next = self.next_state(ctx);
        if next != self.id() {
            return Some(next);
        }

        self.act(ctx, dt);
        None
    }
}

/// Enum-indexed таблица состояний (создаётся один раз на охранника)
#[derive(Debug, Clone, Default)]
pub struct StateTable {
    pub patrol: PatrolState,
    pub alert: AlertState,
    pub chase: ChaseState,
}

impl StateTable {
    pub fn get(&self, id: GuardStateId) -> &dyn GuardState {
        match id {
            GuardStateId::Patrol => &self.patrol,
            GuardStateId::Alert => &self.alert,
            GuardStateId::Chase => &self.chase,
        }
    }

    pub fn get_mut(&mut self, id: GuardStateId) -> &mut dyn GuardState {
        match id {
            GuardStateId::Patrol => &mut self.patrol,
            GuardStateId::Alert => &mut self.alert,
            GuardStateId::Chase => &mut self.chase,
        }
    }
}
