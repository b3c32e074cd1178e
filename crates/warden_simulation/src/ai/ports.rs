//! Внешние коллабораторы FSM: навигатор и получатель исхода игры.
//!
//! Ядро только вызывает эти методы; реализация — в navigation (NavAgent)
//! и в ECS слое (EventWriter<TargetCaught>).

use bevy::prelude::*;

use crate::ai::events::TargetCaught;

/// Destination-seeking навигатор (NavMesh agent или headless stand-in)
pub trait MovementPort {
    fn set_destination(&mut self, point: Vec3);
    /// Текущая цель навигации (None — цели ещё не было)
    fn destination(&self) -> Option<Vec3>;
    /// Оставшаяся дистанция до destination (0 если цели нет)
    fn remaining_distance(&self) -> f32;
    fn set_paused(&mut self, paused: bool);
    fn is_paused(&self) -> bool;
}

/// Получатель "target caught" (fire-and-forget)
pub trait OutcomeNotifier {
    fn report_caught(&mut self, caught: TargetCaught);
}

impl OutcomeNotifier for EventWriter<'_, TargetCaught> {
    fn report_caught(&mut self, caught: TargetCaught) {
        self.write(caught);
    }
}

impl OutcomeNotifier for Vec<TargetCaught> {
    fn report_caught(&mut self, caught: TargetCaught) {
        self.push(caught);
    }
}
