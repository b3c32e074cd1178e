//! FSM state identifiers.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Состояния охранника
///
/// Ровно одно активно в любой момент; Patrol — начальное.
/// Chase никогда не переходит сразу в Patrol, только через Alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect, Serialize, Deserialize)]
pub enum GuardStateId {
    /// Обход waypoints (или стоим на посту)
    #[default]
    Patrol,
    /// Услышали / потеряли из виду — смотрим на last known position
    Alert,
    /// Активное преследование
    Chase,
}

impl GuardStateId {
    pub const ALL: [GuardStateId; 3] = [GuardStateId::Patrol, GuardStateId::Alert, GuardStateId::Chase];

    pub fn as_str(&self) -> &'static str {
        match self {
            GuardStateId::Patrol => "Patrol",
            GuardStateId::Alert => "Alert",
            GuardStateId::Chase => "Chase",
        }
    }
}

impl std::fmt::Display for GuardStateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
