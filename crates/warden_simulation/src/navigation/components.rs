//! NavAgent — headless destination-seeking навигатор (straight line, без NavMesh).

use bevy::prelude::*;

use crate::ai::ports::MovementPort;

/// Навигатор охранника
///
/// Хранит только намерение (destination + pause). Позиция — в Transform,
/// движение — в `advance_nav_agents`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct NavAgent {
    /// Скорость движения (m/s)
    pub speed: f32,
    pub destination: Option<Vec3>,
    pub paused: bool,
}

impl Default for NavAgent {
    fn default() -> Self {
        Self {
            speed: 3.5, // Быстрый шаг
            destination: None,
            paused: false,
        }
    }
}

impl NavAgent {
    pub fn with_speed(speed: f32) -> Self {
        Self { speed, ..default() }
    }

    pub fn remaining_distance(&self, position: Vec3) -> f32 {
        self.destination.map_or(0.0, |destination| position.distance(destination))
    }

    /// Перемещение за `dt` из `position` (None — стоим)
    pub fn step(&self, position: Vec3, dt: f32) -> Option<Vec3> {
        if self.paused {
            return None;
        }
        let destination = self.destination?;

        let to_destination = destination - position;
        let distance = to_destination.length();
        if distance <= f32::EPSILON {
            return None;
        }

        let travel = self.speed * dt;
        if travel >= distance {
            return Some(destination);
        }
        Some(position + to_destination / distance * travel)
    }
}

/// MovementPort поверх NavAgent на время одного тика FSM
///
/// `position` — позиция охранника на начало тика (FSM её не двигает).
pub struct NavHandle<'a> {
    pub agent: &'a mut NavAgent,
    pub position: Vec3,
}

impl MovementPort for NavHandle<'_> {
    fn set_destination(&mut self, point: Vec3) {
        self.agent.destination = Some(point);
    }

    fn destination(&self) -> Option<Vec3> {
        self.agent.destination
    }

    fn remaining_distance(&self) -> f32 {
        self.agent.remaining_distance(self.position)
    }

    fn set_paused(&mut self, paused: bool) {
        self.agent.paused = paused;
    }

    fn is_paused(&self) -> bool {
        self.agent.paused
    }
}
