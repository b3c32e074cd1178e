//! Guard tunables (author-time, immutable per guard instance).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ошибки загрузки / валидации GuardConfig
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("guard config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{field} must be finite and non-negative, got {value}")]
    InvalidValue { field: &'static str, value: f32 },

    #[error("vision_half_angle must be in (0, 180] degrees, got {0}")]
    InvalidAngle(f32),

    #[error("waypoint #{index} has non-finite coordinates")]
    InvalidWaypoint { index: usize },
}

/// Debug переключатели восприятия и исхода
///
/// Могут только выключить канал (AND с сырым результатом), никогда
/// не превращают false в true.
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugOverrides {
    pub sight_enabled: bool,
    pub hearing_enabled: bool,
    /// Отправлять ли TargetCaught при контакте с intruder
    pub report_catches: bool,
}

impl Default for DebugOverrides {
    fn default() -> Self {
        Self {
            sight_enabled: true,
            hearing_enabled: true,
            report_catches: true,
        }
    }
}

/// Параметры охранника
#[derive(Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Дальность зрения (метры)
    pub vision_range: f32,
    /// Половина угла конуса зрения (градусы)
    pub vision_half_angle: f32,
    /// Дальность слуха (метры)
    pub hearing_range: f32,
    /// Маршрут патруля; пустой → watcher на точке spawn
    pub waypoints: Vec<Vec3>,
    /// Ожидание на каждом waypoint (секунды)
    pub wait_duration: f32,
    /// Patrol: допуск прибытия (remaining distance).
    /// Chase: порог для квадрата дистанции до цели.
    pub tolerance_distance: f32,
    /// Alert → Patrol после стольких секунд тишины
    pub time_before_patrol: f32,
    /// Chase → Alert после стольких секунд без восприятия
    pub time_before_alert: f32,
    /// Headless контакт: дистанция "поймал" (метры)
    pub catch_radius: f32,
    pub debug: DebugOverrides,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            vision_range: 10.0,
            vision_half_angle: 45.0,
            hearing_range: 5.0,
            waypoints: Vec::new(),
            wait_duration: 2.0,
            tolerance_distance: 0.1,
            time_before_patrol: 5.0,
            time_before_alert: 3.0,
            catch_radius: 0.8,
            debug: DebugOverrides::default(),
        }
    }
}

impl GuardConfig {
    /// Загрузка из JSON (отсутствующие поля берутся из Default) + validate
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GuardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_waypoints(mut self, waypoints: impl IntoIterator<Item = Vec3>) -> Self {
        self.waypoints = waypoints.into_iter().collect();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let scalars = [
            ("vision_range", self.vision_range),
            ("hearing_range", self.hearing_range),
            ("wait_duration", self.wait_duration),
            ("tolerance_distance", self.tolerance_distance),
            ("time_before_patrol", self.time_before_patrol),
            ("time_before_alert", self.time_before_alert),
            ("catch_radius", self.catch_radius),
        ];
        for (field, value) in scalars {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }

        if !self.vision_half_angle.is_finite()
            || self.vision_half_angle <= 0.0
            || self.vision_half_angle > 180.0
        {
            return Err(ConfigError::InvalidAngle(self.vision_half_angle));
        }

        if let Some(index) = self.waypoints.iter().position(|w| !w.is_finite()) {
            return Err(ConfigError::InvalidWaypoint { index });
        }

        Ok(())
    }
}
