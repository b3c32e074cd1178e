//! Guard AI: perception + FSM (Patrol / Alert / Chase)
//!
//! Один тик охранника = perception → execute активного состояния.
//! Системы регистрируются в FixedUpdate (SimulationSet) для детерминизма.

use bevy::prelude::*;

pub mod components;
pub mod controller;
pub mod events;
pub mod perception;
pub mod ports;
pub mod states;
pub mod systems;

#[cfg(test)]
mod perception_tests;
#[cfg(test)]
mod testing;

// Re-export основных типов
pub use components::{ConfigError, DebugOverrides, GuardConfig, GuardStateId, PatrolRoute};
pub use controller::{GuardController, StateTransition, WorldView};
pub use events::{GuardContact, GuardStateChanged, TargetCaught};
pub use perception::{LineOfSight, Perceptions, SensorPose, Senses, TargetSnapshot};
pub use ports::{MovementPort, OutcomeNotifier};
pub use systems::{TransitionLog, TransitionRecord};

use crate::physics::SightBackend;
use crate::SimulationSet;

/// Guard AI Plugin
///
/// Порядок выполнения (FixedUpdate):
/// 1. tick_guards_* — perception + FSM (SimulationSet::Decide)
/// 2. contact source — proximity (headless) или rapier CollisionEvent (SimulationSet::Resolve)
/// 3. report_catches — GuardContact → TargetCaught
pub struct GuardAiPlugin {
    pub sight: SightBackend,
}

impl Plugin for GuardAiPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<GuardStateChanged>()
            .add_event::<GuardContact>()
            .add_event::<TargetCaught>()
            .init_resource::<TransitionLog>();

        match self.sight {
            SightBackend::Headless => {
                app.add_systems(FixedUpdate, systems::tick_guards_headless.in_set(SimulationSet::Decide))
                    .add_systems(
                        FixedUpdate,
                        (systems::detect_proximity_contacts, systems::report_catches)
                            .chain()
                            .in_set(SimulationSet::Resolve),
                    );
            }
            SightBackend::Rapier => {
                app.add_systems(FixedUpdate, systems::tick_guards_rapier.in_set(SimulationSet::Decide))
                    .add_systems(
                        FixedUpdate,
                        (systems::forward_rapier_contacts, systems::report_catches)
                            .chain()
                            .in_set(SimulationSet::Resolve),
                    );
            }
        }
    }
}
