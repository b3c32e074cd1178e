//! TransitionLog — история переходов FSM всех охранников (для тестов, demo, replay).

use bevy::prelude::*;
use serde::Serialize;

use crate::ai::components::GuardStateId;

/// Один переход: на каком тике, кто, откуда, куда
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransitionRecord {
    pub tick: u64,
    pub guard: Entity,
    pub from: GuardStateId,
    pub to: GuardStateId,
}

/// Журнал переходов
///
/// По умолчанию без ограничения (тесты, короткие прогоны). Для долгих
/// сессий — `bounded(limit)` (старые записи вытесняются) или периодический
/// `drain()` наблюдателем.
#[derive(Resource, Debug, Clone, Default, Serialize)]
pub struct TransitionLog {
    pub entries: Vec<TransitionRecord>,
    #[serde(skip)]
    limit: Option<usize>,
}

impl TransitionLog {
    /// Хранит только последние `limit` переходов
    pub fn bounded(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit: Some(limit),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn push(&mut self, record: TransitionRecord) {
        self.entries.push(record);

        if let Some(limit) = self.limit {
            let excess = self.entries.len().saturating_sub(limit);
            self.entries.drain(..excess);
        }
    }

    /// Забрать накопленные записи (лимит сохраняется)
    pub fn drain(&mut self) -> Vec<TransitionRecord> {
        std::mem::take(&mut self.entries)
    }

    /// Переходы одного охранника по порядку
    pub fn for_guard(&self, guard: Entity) -> impl Iterator<Item = &TransitionRecord> + '_ {
        self.entries.iter().filter(move |record| record.guard == guard)
    }

    /// Последовательность состояний охранника начиная с Patrol
    ///
    /// Имеет смысл только для полной истории (без вытеснения и drain).
    pub fn state_path(&self, guard: Entity) -> Vec<GuardStateId> {
        let mut path = vec![GuardStateId::Patrol];
        path.extend(self.for_guard(guard).map(|record| record.to));
        path
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
