//! Tests for GuardConfig loading and validation.

#[cfg(test)]
mod tests {
    use super::super::config::{ConfigError, GuardConfig};
    use bevy::prelude::*;

    #[test]
    fn test_guard_config_default() {
        let config = GuardConfig::default();
        assert_eq!(config.vision_range, 10.0);
        assert_eq!(config.vision_half_angle, 45.0);
        assert_eq!(config.wait_duration, 2.0);
        assert_eq!(config.tolerance_distance, 0.1);
        assert!(config.waypoints.is_empty());
        assert!(config.debug.sight_enabled && config.debug.hearing_enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_missing_fields_with_defaults() {
        let json = r#"{
            "hearing_range": 7.5,
            "waypoints": [[0.0, 0.0, 0.0], [4.0, 0.0, 0.0]],
            "debug": { "hearing_enabled": false }
        }"#;

        let config = GuardConfig::from_json(json).expect("valid config");

        assert_eq!(config.hearing_range, 7.5);
        assert_eq!(config.waypoints, vec![Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0)]);
        assert!(!config.debug.hearing_enabled);
        // Не указанные поля — из Default
        assert!(config.debug.sight_enabled);
        assert_eq!(config.time_before_patrol, 5.0);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = GuardConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_validate_rejects_negative_range() {
        let config = GuardConfig {
            hearing_range: -1.0,
            ..default()
        };

        match config.validate() {
            Err(ConfigError::InvalidValue { field, value }) => {
                assert_eq!(field, "hearing_range");
                assert_eq!(value, -1.0);
            }
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_bad_half_angle() {
        for angle in [0.0, -10.0, 181.0, f32::NAN] {
            let config = GuardConfig {
                vision_half_angle: angle,
                ..default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidAngle(_))),
                "angle {} должен быть отклонён",
                angle
            );
        }
    }

    #[test]
    fn test_validate_rejects_non_finite_waypoint() {
        let config = GuardConfig::default()
            .with_waypoints([Vec3::ZERO, Vec3::new(f32::INFINITY, 0.0, 0.0)]);

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWaypoint { index: 1 })
        ));
    }

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::InvalidValue {
            field: "wait_duration",
            value: -2.0,
        };
        assert_eq!(err.to_string(), "wait_duration must be finite and non-negative, got -2");
    }
}
