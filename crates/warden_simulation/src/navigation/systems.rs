//! Navigation systems (движение агентов к destination).

use bevy::prelude::*;

use super::NavAgent;
use crate::ai::components::yaw_towards;

/// Система: продвинуть NavAgent'ов к их destination
///
/// Прямая линия со скоростью `speed`, без перелёта через цель.
/// Агент поворачивается по направлению движения (только yaw).
/// Работает в FixedUpdate после решений FSM.
pub fn advance_nav_agents(mut agents: Query<(&NavAgent, &mut Transform)>, time: Res<Time<Fixed>>) {
    let delta = time.delta_secs();

    for (agent, mut transform) in agents.iter_mut() {
        let Some(next) = agent.step(transform.translation, delta) else {
            continue;
        };

        if let Some(facing) = yaw_towards(next - transform.translation) {
            transform.rotation = facing;
        }
        transform.translation = next;
    }
}
