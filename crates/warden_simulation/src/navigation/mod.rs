//! Navigation module
//!
//! Headless stand-in для NavMesh agent: destination + pause + straight-line
//! движение. FSM видит его только через `MovementPort` (NavHandle).

use bevy::prelude::*;

pub mod components;
pub mod systems;


pub use components::{NavAgent, NavHandle};
pub use systems::advance_nav_agents;

use crate::SimulationSet;

/// Plugin навигации: движение после решений FSM (SimulationSet::Move)
pub struct NavigationPlugin;

impl Plugin for NavigationPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<NavAgent>()
            .add_systems(FixedUpdate, advance_nav_agents.in_set(SimulationSet::Move));
    }
}
