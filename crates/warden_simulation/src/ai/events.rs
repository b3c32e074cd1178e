//! AI Events — переходы FSM, контакты и поимка intruder
//!
//! GuardController (swap) → GuardStateChanged → HUD / TransitionLog
//! Contact source (headless proximity или rapier) → GuardContact → TargetCaught

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::ai::components::GuardStateId;

/// Охранник сменил состояние FSM
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardStateChanged {
    pub guard: Entity,
    pub from: GuardStateId,
    pub to: GuardStateId,
}

/// Физический контакт охранника с другим телом (начало контакта)
///
/// Один контакт = одно событие: headless детектор шлёт только на rising edge,
/// rapier — на CollisionEvent::Started.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardContact {
    pub guard: Entity,
    pub other: Entity,
}

/// Охранник поймал intruder (для game-outcome слоя)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetCaught {
    pub guard: Entity,
    pub target: Entity,
}
