//! Tests for the perception evaluator.

#[cfg(test)]
mod tests {
    use crate::ai::components::{DebugOverrides, GuardConfig};
    use crate::ai::perception::{evaluate, evaluate_hearing, evaluate_sight, Perceptions, SensorPose, Senses};
    use crate::ai::testing::{intruder_at, intruder_entity, wall_entity, ScriptedSight};
    use bevy::prelude::*;

    /// Охранник в начале координат, смотрит в -Z, половина роста 0.9
    fn pose() -> SensorPose {
        SensorPose::from_transform(&Transform::default(), 0.9)
    }

    fn config() -> GuardConfig {
        GuardConfig {
            vision_range: 10.0,
            vision_half_angle: 45.0,
            hearing_range: 5.0,
            ..default()
        }
    }

    #[test]
    fn test_sees_target_in_cone_with_clear_line() {
        let sight = ScriptedSight::hitting(intruder_entity());
        let target = intruder_at(Vec3::new(1.0, 0.0, -6.0), false);

        assert!(evaluate_sight(&pose(), Some(&target), &config(), &sight));

        // Луч из центра тела, направление по земле, длина = vision_range
        let (origin, direction, max) = sight.last_ray.get().unwrap();
        assert_eq!(origin, Vec3::new(0.0, 0.9, 0.0));
        assert!((direction - Vec3::new(1.0, 0.0, -6.0).normalize()).length() < 1e-6);
        assert_eq!(max, 10.0);
    }

    #[test]
    fn test_occluded_target_is_not_seen() {
        let sight = ScriptedSight::blocked_by(wall_entity());
        let target = intruder_at(Vec3::new(0.0, 0.0, -6.0), true);

        assert!(!evaluate_sight(&pose(), Some(&target), &config(), &sight));
    }

    #[test]
    fn test_ray_hitting_nothing_is_not_sight() {
        let sight = ScriptedSight::empty();
        let target = intruder_at(Vec3::new(0.0, 0.0, -6.0), true);

        assert!(!evaluate_sight(&pose(), Some(&target), &config(), &sight));
        assert_eq!(sight.calls.get(), 1);
    }

    #[test]
    fn test_cheap_checks_short_circuit_raycast() {
        let sight = ScriptedSight::hitting(intruder_entity());

        // Нет цели
        assert!(!evaluate_sight(&pose(), None, &config(), &sight));
        // Дальше vision_range
        let far = intruder_at(Vec3::new(0.0, 0.0, -10.5), true);
        assert!(!evaluate_sight(&pose(), Some(&far), &config(), &sight));
        // За спиной
        let behind = intruder_at(Vec3::new(0.0, 0.0, 3.0), true);
        assert!(!evaluate_sight(&pose(), Some(&behind), &config(), &sight));
        // Сбоку, 60° > 45°
        let side = intruder_at(Vec3::new(60f32.to_radians().sin(), 0.0, -60f32.to_radians().cos()) * 4.0, true);
        assert!(!evaluate_sight(&pose(), Some(&side), &config(), &sight));

        assert_eq!(sight.calls.get(), 0);
    }

    #[test]
    fn test_colocated_target_counts_as_seen() {
        let sight = ScriptedSight::empty();
        let target = intruder_at(Vec3::ZERO, false);

        assert!(evaluate_sight(&pose(), Some(&target), &config(), &sight));
        assert_eq!(sight.calls.get(), 0);
    }

    #[test]
    fn test_hears_only_moving_target_in_range() {
        let cfg = config();

        let walking = intruder_at(Vec3::new(3.0, 0.0, 3.0), true);
        assert!(evaluate_hearing(&pose(), Some(&walking), &cfg));

        let standing = intruder_at(Vec3::new(3.0, 0.0, 3.0), false);
        assert!(!evaluate_hearing(&pose(), Some(&standing), &cfg));

        let far = intruder_at(Vec3::new(0.0, 0.0, 5.5), true);
        assert!(!evaluate_hearing(&pose(), Some(&far), &cfg));

        // Ровно на границе — слышим
        let edge = intruder_at(Vec3::new(0.0, 0.0, 5.0), true);
        assert!(evaluate_hearing(&pose(), Some(&edge), &cfg));

        assert!(!evaluate_hearing(&pose(), None, &cfg));
    }

    #[test]
    fn test_debug_overrides_only_disable_channels() {
        let sight = ScriptedSight::hitting(intruder_entity());
        let target = intruder_at(Vec3::new(0.0, 0.0, -3.0), true);

        let all_on = evaluate(&pose(), Some(&target), &config(), &sight);
        assert_eq!(all_on, Senses { can_see: true, can_hear: true });

        let muted = GuardConfig {
            debug: DebugOverrides {
                sight_enabled: false,
                hearing_enabled: false,
                report_catches: true,
            },
            ..config()
        };
        let calls_before = sight.calls.get();
        let senses = evaluate(&pose(), Some(&target), &muted, &sight);
        assert_eq!(senses, Senses::default());
        assert_eq!(sight.calls.get(), calls_before, "выключенное зрение не кастует луч");

        // Override не превращает false в true: цель далеко и стоит
        let quiet = intruder_at(Vec3::new(0.0, 0.0, 30.0), false);
        let senses = evaluate(&pose(), Some(&quiet), &config(), &sight);
        assert_eq!(senses, Senses::default());
    }

    #[test]
    fn test_last_known_position_is_sticky() {
        let target_a = intruder_at(Vec3::new(2.0, 0.0, -2.0), true);
        let target_b = intruder_at(Vec3::new(8.0, 0.0, 1.0), true);

        let start = Perceptions::default();
        assert_eq!(start.last_known_position, Vec3::ZERO);

        let heard = start.refreshed(Senses { can_see: false, can_hear: true }, Some(&target_a));
        assert_eq!(heard.last_known_position, target_a.position);

        // Цель ушла дальше, но мы её больше не воспринимаем
        let lost = heard.refreshed(Senses::default(), Some(&target_b));
        assert!(!lost.perceives_target());
        assert_eq!(lost.last_known_position, target_a.position);

        // Цель исчезла из симуляции — позиция всё равно сохраняется
        let gone = lost.refreshed(Senses::default(), None);
        assert_eq!(gone.last_known_position, target_a.position);

        let seen = gone.refreshed(Senses { can_see: true, can_hear: false }, Some(&target_b));
        assert_eq!(seen.last_known_position, target_b.position);
    }
}
