//! Tests for FSM identifiers and patrol route helpers.

#[cfg(test)]
mod tests {
    use super::super::fsm::GuardStateId;
    use super::super::route::{yaw_of, yaw_towards, PatrolRoute};
    use bevy::prelude::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_guard_state_default_is_patrol() {
        assert_eq!(GuardStateId::default(), GuardStateId::Patrol);
        assert_eq!(GuardStateId::Chase.to_string(), "Chase");
    }

    #[test]
    fn test_empty_route_becomes_watcher_at_spawn() {
        let spawn = Transform::from_xyz(3.0, 0.0, -2.0).with_rotation(Quat::from_rotation_y(1.0));
        let route = PatrolRoute::from_spawn(&[], &spawn);

        assert_eq!(route.len(), 1);
        assert!(route.is_watcher());
        assert_eq!(route.waypoint(0), Some(Vec3::new(3.0, 0.0, -2.0)));
        assert_eq!(route.original_rotation(), spawn.rotation);
    }

    #[test]
    fn test_route_keeps_configured_waypoints() {
        let waypoints = [Vec3::ZERO, Vec3::X, Vec3::Z];
        let route = PatrolRoute::from_spawn(&waypoints, &Transform::default());

        assert_eq!(route.len(), 3);
        assert!(!route.is_watcher());
        assert_eq!(route.waypoint(3), None);
    }

    #[test]
    fn test_resting_rotation_drops_pitch() {
        let tilted = Quat::from_euler(EulerRot::YXZ, 0.7, 0.4, 0.0);
        let route = PatrolRoute::new(vec![Vec3::ZERO], tilted);

        let resting = route.resting_rotation();
        assert!((yaw_of(resting) - 0.7).abs() < 1e-4);
        // forward остаётся горизонтальным
        assert!((resting * Vec3::NEG_Z).y.abs() < 1e-5);
    }

    #[test]
    fn test_yaw_towards_faces_direction() {
        // forward = -Z; смотрим на +X → yaw = -90°
        let rotation = yaw_towards(Vec3::new(5.0, 2.0, 0.0)).unwrap();
        let forward = rotation * Vec3::NEG_Z;
        assert!((forward - Vec3::X).length() < 1e-5, "forward = {:?}", forward);
        assert!((yaw_of(rotation) + FRAC_PI_2).abs() < 1e-5);

        // Строго сверху — направление не определено
        assert!(yaw_towards(Vec3::Y).is_none());
    }
}
