//! WARDEN Simulation Core
//!
//! ECS-симуляция охраны на Bevy 0.16: восприятие (зрение + слух) и FSM
//! охранника Patrol / Alert / Chase.
//!
//! Порядок внутри FixedUpdate (60Hz):
//! Tick → Decide (perception + FSM) → Move (NavAgent) → Resolve (контакты, поимка)

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy::transform::TransformPlugin;
use bevy_rapier3d::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

// Публичные модули
pub mod ai;
pub mod components;
pub mod logger;
pub mod navigation;
pub mod physics;

// Re-export базовых типов для удобства
pub use ai::{
    ConfigError, DebugOverrides, GuardAiPlugin, GuardConfig, GuardContact, GuardController, GuardStateChanged,
    GuardStateId, Perceptions, TargetCaught, TransitionLog, TransitionRecord,
};
pub use components::*;
pub use logger::*;
pub use navigation::{NavAgent, NavigationPlugin};
pub use physics::{spawn_guard, spawn_intruder, spawn_occluder, SightBackend};

/// Частота simulation tick
pub const TICK_HZ: f64 = 60.0;

/// Фазы одного simulation tick (FixedUpdate, строго по порядку)
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Счётчик тиков
    Tick,
    /// Perception + FSM охранников
    Decide,
    /// Навигация
    Move,
    /// Контакты → исход
    Resolve,
}

/// Номер текущего simulation tick (1 на первом FixedUpdate)
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationTick(pub u64);

pub fn advance_simulation_tick(mut tick: ResMut<SimulationTick>) {
    tick.0 += 1;
}

/// Главный plugin симуляции (объединяет все подсистемы)
#[derive(Default)]
pub struct SimulationPlugin {
    pub sight: SightBackend,
}

impl SimulationPlugin {
    pub fn headless() -> Self {
        Self {
            sight: SightBackend::Headless,
        }
    }

    pub fn with_physics() -> Self {
        Self {
            sight: SightBackend::Rapier,
        }
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Seed из create_headless_app не перетираем
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }

        app
            // Fixed timestep 60Hz для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(TICK_HZ))
            .init_resource::<SimulationTick>()
            .register_type::<Intruder>()
            .register_type::<BodyVolume>()
            .register_type::<Occluder>()
            .configure_sets(
                FixedUpdate,
                (
                    SimulationSet::Tick,
                    SimulationSet::Decide,
                    SimulationSet::Move,
                    SimulationSet::Resolve,
                )
                    .chain(),
            )
            .add_systems(FixedUpdate, advance_simulation_tick.in_set(SimulationSet::Tick))
            .add_plugins((GuardAiPlugin { sight: self.sight }, NavigationPlugin));

        if self.sight == SightBackend::Rapier {
            if !app.is_plugin_added::<TransformPlugin>() {
                app.add_plugins(TransformPlugin);
            }
            app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default().in_fixed_schedule())
                // Наши решения и движение — ДО rapier step, контакты — после
                .configure_sets(FixedUpdate, SimulationSet::Move.before(PhysicsSet::SyncBackend))
                .configure_sets(FixedUpdate, SimulationSet::Resolve.after(PhysicsSet::Writeback));
        }
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время двигается вручную: каждый `app.update()` = ровно один
/// fixed tick (1/60 сек), независимо от wall clock.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(TICK_HZ))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(1.0 / TICK_HZ)));

    app
}

/// Прогнать `app` до simulation tick `target` (включительно)
///
/// Fixed timestep накапливается из virtual time, поэтому считаем
/// реальные FixedUpdate тики, а не вызовы update().
pub fn run_until_tick(app: &mut App, target: u64) {
    // Запас на первый update (delta = 0) и накопление ошибки
    let max_updates = target.saturating_mul(2) + 8;
    for _ in 0..max_updates {
        let current = app.world().get_resource::<SimulationTick>().map_or(0, |tick| tick.0);
        if current >= target {
            return;
        }
        app.update();
    }
    log_warning(&format!("run_until_tick: tick {} not reached", target));
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    // Собираем все компоненты в детерминированный формат
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
